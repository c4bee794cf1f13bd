use anyhow::Result;
use async_trait::async_trait;

mod listing;
mod product;

pub use listing::{extract_detail_links, fetch_listing};
pub use product::scrape_product;

/// Source of raw page HTML. The HTTP implementation lives in
/// `utils::http`; tests substitute canned pages.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Category listing page, fetched with the client's default headers.
    async fn fetch_listing(&self, url: &str) -> Result<String>;
    /// Product detail page, fetched with a browser User-Agent.
    async fn fetch_detail(&self, url: &str) -> Result<String>;
}
