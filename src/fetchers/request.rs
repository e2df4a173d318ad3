use reqwest::Client;
use std::time::Duration;

use crate::error::MenuError;

use super::Fetch;

/// Plain HTTP fetcher returning the raw page HTML.
pub struct RequestFetcher {
    client: Client,
}

impl RequestFetcher {
    pub fn new(timeout: Option<Duration>) -> Self {
        let timeout = timeout.unwrap_or(Duration::from_secs(30));
        let client = Client::builder()
            .timeout(timeout)
            .user_agent("Mozilla/5.0 (compatible; AromiMenuBot/1.0)")
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }
}

#[async_trait::async_trait]
impl Fetch for RequestFetcher {
    async fn fetch(&self, url: &str) -> Result<String, MenuError> {
        let response = self.client.get(url).send().await?;
        let html = response.text().await?;
        Ok(html)
    }
}
