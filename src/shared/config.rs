use tracing::warn;

use crate::document::DocumentFormat;

#[derive(Debug, Clone)]
pub struct Config {
    pub log_dir: String,
    pub service_name: String,
    pub default_format: DocumentFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_dir: "./logs".to_string(),
            service_name: "containerspec".to_string(),
            default_format: DocumentFormat::Yaml,
        }
    }
}

impl Config {
    /// Read settings from the process environment. Call `dotenvy::dotenv()`
    /// first to pick up a `.env` file.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let default_format = match lookup("CONTAINERSPEC_FORMAT") {
            Some(value) => value.parse::<DocumentFormat>().unwrap_or_else(|e: String| {
                warn!("Ignoring CONTAINERSPEC_FORMAT: {}", e);
                defaults.default_format
            }),
            None => defaults.default_format,
        };

        Self {
            log_dir: lookup("CONTAINERSPEC_LOG_DIR").unwrap_or(defaults.log_dir),
            service_name: lookup("CONTAINERSPEC_SERVICE_NAME").unwrap_or(defaults.service_name),
            default_format,
        }
    }
}
