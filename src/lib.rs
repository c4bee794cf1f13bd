//! Batch export of a shop's turntable category into WooCommerce import CSVs.
//!
//! Each listing page is fetched, every linked product page is scraped into a
//! [`models::ProductRecord`], and the page's records go to their own
//! `turntables{page}.csv`.

pub mod config;
pub mod driver;
pub mod error;
pub mod models;
pub mod parsers;
pub mod scrapers;
pub mod storage;
pub mod utils;

pub use config::Config;
pub use driver::{BatchDriver, PageOutcome, RunSummary};
pub use error::ScrapeError;
