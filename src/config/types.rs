use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub global: GlobalConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GlobalConfig {
    #[serde(default = "super::default_chain_name")]
    pub chain_name: String,
    /// 签名密钥目录，其中的 `address` 文件即本地地址。
    #[serde(default = "super::default_keys_dir")]
    pub keys: String,
    #[serde(default, deserialize_with = "super::deserialize_optional_trimmed")]
    pub gateway_url: Option<String>,
    #[serde(default = "super::default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

impl GlobalConfig {
    pub fn keys_dir(&self) -> PathBuf {
        PathBuf::from(&self.keys)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "super::default_logging_level")]
    pub level: String,
    #[serde(default)]
    pub json: bool,
    #[serde(default = "super::default_timezone_offset_hours")]
    pub timezone_offset_hours: i8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.global.chain_name, "xuper");
        assert_eq!(config.global.keys, "data/keys");
        assert_eq!(config.global.gateway_url, None);
        assert_eq!(config.global.request_timeout(), Duration::from_secs(5));
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.json);
    }

    #[test]
    fn blank_gateway_url_is_unset() {
        let config: AppConfig = toml::from_str(
            r#"
            [global]
            gateway_url = "   "
            keys = "/opt/node/keys"
            "#,
        )
        .unwrap();
        assert_eq!(config.global.gateway_url, None);
        assert_eq!(config.global.keys_dir(), PathBuf::from("/opt/node/keys"));
    }

    #[test]
    fn partial_sections_fill_remaining_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [global]
            chain_name = "testnet"
            gateway_url = "http://127.0.0.1:37101/v1/invoke"

            [logging]
            json = true
            "#,
        )
        .unwrap();
        assert_eq!(config.global.chain_name, "testnet");
        assert_eq!(
            config.global.gateway_url.as_deref(),
            Some("http://127.0.0.1:37101/v1/invoke")
        );
        assert_eq!(config.global.request_timeout_ms, 5_000);
        assert!(config.logging.json);
        assert_eq!(config.logging.level, "info");
    }
}
