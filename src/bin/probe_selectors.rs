use anyhow::{Context, Result};
use scraper::{Html, Selector};
use std::fs;

use turntable_export::parsers::selectors;
use turntable_export::scrapers::{extract_detail_links, PageFetcher};
use turntable_export::utils::http::{create_client, HttpFetcher};
use turntable_export::Config;

/// Print how many elements each named selector matches on a sample page.
fn report(label: &str, html: &str) {
    let document = Html::parse_document(html);
    println!("{}:", label);

    for (name, css) in selectors::ALL {
        match Selector::parse(css) {
            Ok(selector) => {
                let count = document.select(&selector).count();
                println!("  {:<14} '{}' matched {} elements", name, css, count);
            }
            Err(e) => println!("  {:<14} '{}' does not parse: {:?}", name, css, e),
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::load()?;
    let fetcher = HttpFetcher::new(create_client(&config)?, &config);

    let listing_url = config.listing_url(config.first_page)?;
    println!("Fetching listing page {}...", listing_url);
    let html = fetcher.fetch_listing(listing_url.as_str()).await?;
    fs::write("listing_sample.html", &html)?;
    report("Listing page", &html);

    let links = extract_detail_links(&html, &config);
    let detail_url = links
        .first()
        .context("No product links on the listing page, check the product link selector")?;

    println!("\nFetching detail page {}...", detail_url);
    let html = fetcher.fetch_detail(detail_url).await?;
    fs::write("detail_sample.html", &html)?;
    report("Detail page", &html);

    Ok(())
}
