use anyhow::{Context, Result};
use scraper::Html;
use tracing::info;

use crate::config::Config;
use crate::parsers::selectors::PRODUCT_LINK_SELECTOR;
use crate::scrapers::PageFetcher;

/// Fetch one listing page and return absolute detail-page URLs in page order.
pub async fn fetch_listing(
    fetcher: &dyn PageFetcher,
    config: &Config,
    page: u32,
) -> Result<Vec<String>> {
    let url = config.listing_url(page)?;
    let html = fetcher
        .fetch_listing(url.as_str())
        .await
        .with_context(|| format!("Failed to fetch listing page {}", page))?;
    info!("Successfully fetched page {}", page);

    let links = extract_detail_links(&html, config);
    info!("Found {} products on page {}", links.len(), page);

    Ok(links)
}

/// Product card hrefs prefixed with the site root. Anchors without an href
/// are skipped.
pub fn extract_detail_links(html: &str, config: &Config) -> Vec<String> {
    let document = Html::parse_document(html);

    document
        .select(&PRODUCT_LINK_SELECTOR)
        .filter_map(|anchor| anchor.value().attr("href"))
        .map(|href| config.detail_url(href))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;

    const LISTING_PAGE: &str = r#"
        <div class="products">
          <a class="product__content" href="reloop_rp_7000_mk2.htm">Reloop</a>
          <a class="product__content">Broken card</a>
          <a class="product__content fx-link" href="technics_sl_1210_mk7.htm">Technics</a>
          <a class="other" href="ignored.htm">Other</a>
        </div>
    "#;

    struct StaticListing(Option<&'static str>);

    #[async_trait]
    impl PageFetcher for StaticListing {
        async fn fetch_listing(&self, url: &str) -> Result<String> {
            self.0
                .map(str::to_string)
                .ok_or_else(|| anyhow!("HTTP error 503: {}", url))
        }

        async fn fetch_detail(&self, url: &str) -> Result<String> {
            Err(anyhow!("unexpected detail fetch: {}", url))
        }
    }

    #[test]
    fn keeps_only_anchors_with_href() {
        let config = Config::load().unwrap();
        let links = extract_detail_links(LISTING_PAGE, &config);

        assert_eq!(
            links,
            vec![
                "https://thomann.de/de/reloop_rp_7000_mk2.htm".to_string(),
                "https://thomann.de/de/technics_sl_1210_mk7.htm".to_string(),
            ]
        );
    }

    #[test]
    fn page_without_cards_has_no_links() {
        let config = Config::load().unwrap();
        assert!(extract_detail_links("<html></html>", &config).is_empty());
    }

    #[test]
    fn fetch_listing_returns_links() {
        let config = Config::load().unwrap();
        let fetcher = StaticListing(Some(LISTING_PAGE));
        let links = tokio_test::block_on(fetch_listing(&fetcher, &config, 1)).unwrap();
        assert_eq!(links.len(), 2);
    }

    #[test]
    fn fetch_failure_is_reported_with_page_index() {
        let config = Config::load().unwrap();
        let fetcher = StaticListing(None);
        let err = tokio_test::block_on(fetch_listing(&fetcher, &config, 4)).unwrap_err();
        assert!(err.to_string().contains("listing page 4"));
    }
}
