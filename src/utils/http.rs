use anyhow::Result;
use async_trait::async_trait;
use reqwest::header::USER_AGENT;
use reqwest::{Client, ClientBuilder, RequestBuilder};
use std::time::Duration;
use tracing::warn;

use crate::config::Config;
use crate::error::ScrapeError;
use crate::scrapers::PageFetcher;

/// Client without a custom User-Agent; detail requests add theirs per call.
/// One attempt per request: a failure is final for this run.
pub fn create_client(config: &Config) -> Result<Client> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(config.request_timeout_seconds))
        .cookie_store(true)
        .build()?;

    Ok(client)
}

pub struct HttpFetcher {
    client: Client,
    user_agent: String,
}

impl HttpFetcher {
    pub fn new(client: Client, config: &Config) -> Self {
        Self {
            client,
            user_agent: config.user_agent.clone(),
        }
    }

    async fn fetch_text(&self, url: &str, request: RequestBuilder) -> Result<String, ScrapeError> {
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!("HTTP error {}: {}", status, url);
            return Err(ScrapeError::Status {
                url: url.to_string(),
                status,
            });
        }

        Ok(response.text().await?)
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch_listing(&self, url: &str) -> Result<String> {
        Ok(self.fetch_text(url, self.client.get(url)).await?)
    }

    async fn fetch_detail(&self, url: &str) -> Result<String> {
        let request = self.client.get(url).header(USER_AGENT, self.user_agent.as_str());
        Ok(self.fetch_text(url, request).await?)
    }
}
