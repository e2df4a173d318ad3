use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::env;

use crate::error::MenuError;

use super::Fetch;

#[derive(Serialize)]
struct RenderRequest {
    url: String,
    wait_ms: u64,
}

#[derive(Deserialize)]
struct RenderResponse {
    content: String,
}

/// Fetches a page through a headless-browser render service.
///
/// Aromi pages build the menu client-side, so a plain GET returns an
/// empty shell. When `PAGE_RENDER_URL` is set, the service at that
/// address loads the page in a real browser, waits `wait_ms` for the
/// menu to appear and returns the visible text with display line breaks
/// intact.
pub struct BrowserFetcher {
    endpoint: String,
    wait_ms: u64,
    client: Client,
}

impl BrowserFetcher {
    pub fn new(wait_ms: u64) -> Option<Self> {
        let render_url = env::var("PAGE_RENDER_URL").ok()?;
        let endpoint = format!("{}/api/render", render_url);
        let client = Client::new();
        Some(Self {
            endpoint,
            wait_ms,
            client,
        })
    }

    pub fn is_available() -> bool {
        env::var("PAGE_RENDER_URL").is_ok()
    }
}

#[async_trait::async_trait]
impl Fetch for BrowserFetcher {
    async fn fetch(&self, url: &str) -> Result<String, MenuError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&RenderRequest {
                url: url.to_string(),
                wait_ms: self.wait_ms,
            })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(MenuError::RenderServiceError(format!(
                "render failed with status: {}",
                response.status()
            )));
        }

        let rendered: RenderResponse = response.json().await?;
        Ok(rendered.content)
    }
}
