use thiserror::Error;

/// Errors that can occur while fetching or publishing the menu
#[derive(Error, Debug)]
pub enum MenuError {
    /// Failed to fetch the menu page
    #[error("Failed to fetch menu page: {0}")]
    FetchError(#[from] reqwest::Error),

    /// The page-render service responded but could not deliver content
    #[error("Page-render service error: {0}")]
    RenderServiceError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// Failed to write the generated page
    #[error("Failed to write output: {0}")]
    IoError(#[from] std::io::Error),
}
