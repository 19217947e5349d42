//! Configuration model loaded from external sources.

use std::time::Duration;

use serde::Deserialize;

use crate::services::screen::ScreenOptions;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across screens, read from `CABINET_*`
/// environment variables (a `.env` file is honored).
pub struct AppConfig {
    /// Root of the REST API, e.g. `http://127.0.0.1:8000/api`.
    pub api_base_url: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_search_debounce_ms")]
    pub search_debounce_ms: u64,
    #[serde(default = "default_max_image_bytes")]
    pub max_image_bytes: usize,
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_page_size() -> usize {
    crate::DEFAULT_PAGE_SIZE
}

fn default_search_debounce_ms() -> u64 {
    300
}

fn default_max_image_bytes() -> usize {
    crate::MAX_IMAGE_BYTES
}

impl AppConfig {
    /// Loads the configuration from the environment.
    pub fn load() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::Environment::with_prefix("CABINET"))
            .build()?;
        settings.try_deserialize()
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn screen_options(&self) -> ScreenOptions {
        ScreenOptions {
            page_size: self.page_size,
            search_debounce: Duration::from_millis(self.search_debounce_ms),
            max_image_bytes: self.max_image_bytes,
        }
    }
}
