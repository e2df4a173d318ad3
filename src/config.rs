use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Tool configuration, loaded from `config.toml` and the environment.
/// Defaults point at the Suutarila school restaurant.
#[derive(Debug, Deserialize, Clone)]
pub struct MenuConfig {
    /// Aromi restaurant identifier, e.g. "KeMenu113"
    #[serde(default = "default_restaurant_id")]
    pub restaurant_id: String,
    /// Restaurant display name for the page heading
    #[serde(default = "default_restaurant_name")]
    pub restaurant_name: String,
    /// Aromi site root the restaurant page lives under
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// How long the page-render service waits for the menu to appear,
    /// in milliseconds (the page builds its content client-side)
    #[serde(default = "default_wait_ms")]
    pub wait_ms: u64,
    /// HTTP request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// Path the generated page is written to
    #[serde(default = "default_output")]
    pub output: String,
}

// Default value functions
fn default_restaurant_id() -> String {
    "KeMenu113".to_string()
}

fn default_restaurant_name() -> String {
    "Suutarilan peruskoulu, Nummi".to_string()
}

fn default_base_url() -> String {
    "https://aromi.hel.fi/AromieMenus/FI/Default/PALKE".to_string()
}

fn default_wait_ms() -> u64 {
    8000
}

fn default_timeout() -> u64 {
    30
}

fn default_output() -> String {
    "index.html".to_string()
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            restaurant_id: default_restaurant_id(),
            restaurant_name: default_restaurant_name(),
            base_url: default_base_url(),
            wait_ms: default_wait_ms(),
            timeout: default_timeout(),
            output: default_output(),
        }
    }
}

impl MenuConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with AROMI__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: AROMI__RESTAURANT_ID
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("config").required(false))
            .add_source(
                Environment::with_prefix("AROMI")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Full URL of the restaurant's menu page.
    pub fn menu_url(&self) -> String {
        format!(
            "{}/{}/Page/Restaurant",
            self.base_url.trim_end_matches('/'),
            self.restaurant_id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = MenuConfig::default();
        assert_eq!(config.restaurant_id, "KeMenu113");
        assert_eq!(config.wait_ms, 8000);
        assert_eq!(config.timeout, 30);
        assert_eq!(config.output, "index.html");
    }

    #[test]
    fn test_menu_url() {
        let config = MenuConfig {
            base_url: "https://aromi.hel.fi/AromieMenus/FI/Default/PALKE/".to_string(),
            restaurant_id: "KeMenu042".to_string(),
            ..MenuConfig::default()
        };

        assert_eq!(
            config.menu_url(),
            "https://aromi.hel.fi/AromieMenus/FI/Default/PALKE/KeMenu042/Page/Restaurant"
        );
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        // Every field has a serde default, so loading with no file and no
        // environment overrides must succeed.
        let config = MenuConfig::load().expect("defaults should load");
        assert_eq!(config.restaurant_name, "Suutarilan peruskoulu, Nummi");
    }
}
