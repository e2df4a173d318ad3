//! Strategies for turning the menu page URL into page content.

mod browser;
mod request;

use crate::error::MenuError;

pub use self::browser::BrowserFetcher;
pub use self::request::RequestFetcher;

#[async_trait::async_trait]
pub trait Fetch {
    async fn fetch(&self, url: &str) -> Result<String, MenuError>;
}
