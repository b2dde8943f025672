use serde::Deserialize;

pub mod loader;
pub mod types;

pub use loader::*;
pub use types::*;

use self::types as cfg;

pub(crate) fn default_chain_name() -> String {
    "xuper".to_string()
}

pub(crate) fn default_keys_dir() -> String {
    "data/keys".to_string()
}

pub(crate) fn default_request_timeout_ms() -> u64 {
    5_000
}

pub(crate) fn default_logging_level() -> String {
    "info".to_string()
}

pub(crate) fn default_timezone_offset_hours() -> i8 {
    0
}

/// 空字符串与未配置等价。
pub(crate) fn deserialize_optional_trimmed<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value
        .map(|raw| raw.trim().to_string())
        .filter(|trimmed| !trimmed.is_empty()))
}

impl Default for cfg::AppConfig {
    fn default() -> Self {
        Self {
            global: cfg::GlobalConfig::default(),
            logging: cfg::LoggingConfig::default(),
        }
    }
}

impl Default for cfg::GlobalConfig {
    fn default() -> Self {
        Self {
            chain_name: default_chain_name(),
            keys: default_keys_dir(),
            gateway_url: None,
            request_timeout_ms: default_request_timeout_ms(),
        }
    }
}

impl Default for cfg::LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_logging_level(),
            json: false,
            timezone_offset_hours: default_timezone_offset_hours(),
        }
    }
}
