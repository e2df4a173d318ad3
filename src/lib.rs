//! Fetches a school's weekly Aromi lunch menu and renders it as a static
//! HTML page.
//!
//! Aromi restaurant pages expose the menu only as rendered display text,
//! so the pipeline scrapes the visible page text and reconstructs the
//! week structure line by line with [`parse_week`] before handing the
//! result to [`render_page`].

pub mod config;
pub mod error;
pub mod fetchers;
pub mod menu;
pub mod model;
pub mod render;

use std::time::Duration;

use log::debug;
use scraper::Html;

pub use crate::config::MenuConfig;
pub use crate::error::MenuError;
pub use crate::menu::{parse_week, DayHeading};
pub use crate::model::{DayMenu, WeekMenu};
pub use crate::render::render_page;

use crate::fetchers::{BrowserFetcher, Fetch, RequestFetcher};

/// Fetch the visible text of the configured restaurant's menu page.
///
/// Prefers the page-render service when one is configured (the menu is
/// built client-side), and falls back to a plain GET with the text
/// content of `<body>` extracted line by line.
pub async fn fetch_menu_text(config: &MenuConfig) -> Result<String, MenuError> {
    let url = config.menu_url();

    if let Some(browser) = BrowserFetcher::new(config.wait_ms) {
        debug!("fetching {url} via page-render service");
        return browser.fetch(&url).await;
    }

    debug!("fetching {url} directly");
    let fetcher = RequestFetcher::new(Some(Duration::from_secs(config.timeout)));
    let html = fetcher.fetch(&url).await?;
    Ok(visible_text(&html))
}

/// Fetch, parse and render the page for `config`, writing the result to
/// `output`. Returns the number of days found.
pub async fn generate(config: &MenuConfig, output: &str) -> Result<usize, MenuError> {
    let text = fetch_menu_text(config).await?;
    let week = parse_week(&text);
    debug!("{week:#?}");

    tokio::fs::write(output, render_page(&week, config)).await?;
    Ok(week.len())
}

/// Fetch, parse and render in one call, using configuration from
/// `config.toml` and the environment. Returns the finished page HTML.
pub async fn import_menu() -> Result<String, MenuError> {
    let config = MenuConfig::load()?;
    let text = fetch_menu_text(&config).await?;
    let week = parse_week(&text);
    debug!("parsed {} day(s)", week.len());
    Ok(render_page(&week, &config))
}

/// Extract the text content of `<body>`, one text node per line.
///
/// Keeps the output line-oriented the way a browser's rendered text is,
/// which is the shape [`parse_week`] expects.
fn visible_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let selector = scraper::Selector::parse("body").unwrap();
    document
        .select(&selector)
        .next()
        .map(|body| {
            body.text()
                .map(str::trim)
                .filter(|text| !text.is_empty())
                .collect::<Vec<_>>()
                .join("\n")
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_text_is_line_oriented() {
        let html = r#"
            <html>
            <body>
                <h2>ma 2.2.2026</h2>
                <p>Lounas</p>
                <p>Kanapasta, L, G</p>
            </body>
            </html>
        "#;

        let text = visible_text(html);
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines.contains(&"ma 2.2.2026"));
        assert!(lines.contains(&"Kanapasta, L, G"));
    }

    #[test]
    fn test_visible_text_of_empty_document() {
        assert_eq!(visible_text(""), "");
    }
}
