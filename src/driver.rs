use anyhow::Result;
use std::path::PathBuf;
use tracing::{error, info};

use crate::config::Config;
use crate::scrapers::{fetch_listing, scrape_product, PageFetcher};
use crate::storage::{write_csv, WriteOutcome};

/// Result of one listing page whose links were fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageOutcome {
    pub page: u32,
    pub products: usize,
    pub failed_products: usize,
    /// Set when a CSV file was written for the page.
    pub file: Option<PathBuf>,
    pub export_failed: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub pages_attempted: usize,
    pub pages_written: usize,
    pub pages_failed: usize,
    pub products_written: usize,
    pub products_failed: usize,
    pub export_failures: usize,
}

/// Walks the configured page range one request at a time: listing page,
/// then each detail page, then the page's CSV file. Failures are contained
/// at the product and page level so the run always reaches the last page.
pub struct BatchDriver {
    config: Config,
    fetcher: Box<dyn PageFetcher>,
}

impl BatchDriver {
    pub fn new(config: Config, fetcher: Box<dyn PageFetcher>) -> Self {
        Self { config, fetcher }
    }

    pub async fn run(&self) -> RunSummary {
        info!(
            "--- Starting export of pages {}..={} ---",
            self.config.first_page, self.config.last_page
        );

        let mut summary = RunSummary::default();

        for page in self.config.pages() {
            summary.pages_attempted += 1;

            match self.process_page(page).await {
                Ok(outcome) => {
                    info!(
                        "Page {} processed successfully with {} products",
                        page, outcome.products
                    );
                    summary.products_failed += outcome.failed_products;
                    if outcome.file.is_some() {
                        summary.pages_written += 1;
                        summary.products_written += outcome.products;
                    }
                    if outcome.export_failed {
                        summary.export_failures += 1;
                    }
                }
                Err(e) => {
                    error!("Error processing page {}: {:#}", page, e);
                    summary.pages_failed += 1;
                }
            }
        }

        info!("Product data saved to CSV files.");
        summary
    }

    /// Fetch a listing page, scrape every linked product and write the
    /// page's export file. Only a listing failure is returned as an error.
    pub async fn process_page(&self, page: u32) -> Result<PageOutcome> {
        let links = fetch_listing(self.fetcher.as_ref(), &self.config, page).await?;

        let mut records = Vec::with_capacity(links.len());
        let mut failed_products = 0;

        for link in &links {
            match scrape_product(self.fetcher.as_ref(), link).await {
                Ok(record) => records.push(record),
                Err(e) => {
                    error!("Error scraping product page {}: {:#}", link, e);
                    failed_products += 1;
                }
            }
        }

        let path = self.config.output_path(page);
        let (file, export_failed) = match write_csv(&records, &path) {
            Ok(WriteOutcome::Written { .. }) => (Some(path), false),
            Ok(WriteOutcome::NothingToWrite) => (None, false),
            Err(e) => {
                error!("Error saving data to {}: {}", path.display(), e);
                (None, true)
            }
        };

        Ok(PageOutcome {
            page,
            products: records.len(),
            failed_products,
            file,
            export_failed,
        })
    }
}
