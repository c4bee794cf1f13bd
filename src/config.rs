use anyhow::{Context, Result};
use std::ops::RangeInclusive;
use std::path::PathBuf;
use url::Url;

#[derive(Debug, Clone)]
pub struct Config {
    /// Category page without query string; `ls` and `pg` are appended per page.
    pub listing_base_url: String,
    pub listing_page_size: u32,
    /// Prefix for the relative hrefs found on listing pages.
    pub detail_base_url: String,
    pub first_page: u32,
    pub last_page: u32,
    pub output_dir: PathBuf,
    pub file_prefix: String,
    /// Sent on detail requests only. Listing requests use the client default.
    pub user_agent: String,
    pub request_timeout_seconds: u64,
}

impl Config {
    pub fn load() -> Result<Self> {
        Ok(Config {
            listing_base_url: "https://www.thomann.de/de/turntables.html".to_string(),
            listing_page_size: 25,
            detail_base_url: "https://thomann.de/de/".to_string(),
            first_page: 1,
            last_page: 19,
            output_dir: PathBuf::from("."),
            file_prefix: "turntables".to_string(),
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36".to_string(),
            request_timeout_seconds: 30,
        })
    }

    pub fn pages(&self) -> RangeInclusive<u32> {
        self.first_page..=self.last_page
    }

    pub fn listing_url(&self, page: u32) -> Result<Url> {
        Url::parse_with_params(
            &self.listing_base_url,
            &[
                ("ls", self.listing_page_size.to_string()),
                ("pg", page.to_string()),
            ],
        )
        .with_context(|| format!("Invalid listing URL: {}", self.listing_base_url))
    }

    /// Plain prefixing, hrefs are not validated here. A malformed href
    /// surfaces later as a failed detail fetch.
    pub fn detail_url(&self, href: &str) -> String {
        format!("{}{}", self.detail_base_url, href)
    }

    pub fn output_path(&self, page: u32) -> PathBuf {
        self.output_dir.join(format!("{}{}.csv", self.file_prefix, page))
    }
}
