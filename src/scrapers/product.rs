use anyhow::{Context, Result};
use tracing::info;

use crate::models::ProductRecord;
use crate::parsers::extract_product;
use crate::scrapers::PageFetcher;

/// Fetch a detail page and extract its record.
pub async fn scrape_product(fetcher: &dyn PageFetcher, url: &str) -> Result<ProductRecord> {
    let html = fetcher
        .fetch_detail(url)
        .await
        .with_context(|| format!("Failed to fetch product page {}", url))?;
    info!("Successfully fetched product page: {}", url);

    Ok(extract_product(&html))
}
