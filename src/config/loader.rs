use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use url::Url;

use super::{AppConfig, GlobalConfig};

pub const DEFAULT_CONFIG_PATHS: &[&str] = &["consensus-invoke.toml", "conf/consensus-invoke.toml"];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid config value {field}: {message}")]
    Invalid { field: &'static str, message: String },
}

/// 显式指定的路径必须存在；未指定时依次查找默认位置，均不存在则使用默认配置。
pub fn load_config(path: Option<PathBuf>) -> Result<AppConfig, ConfigError> {
    let config = match path {
        Some(explicit) => Some(read_file(&explicit)?),
        None => DEFAULT_CONFIG_PATHS
            .iter()
            .map(Path::new)
            .find(|candidate| candidate.exists())
            .map(read_file)
            .transpose()?,
    };

    match config {
        Some(config) => {
            gateway_endpoint(&config.global)?;
            Ok(config)
        }
        None => Ok(AppConfig::default()),
    }
}

/// 解析 `global.gateway_url`；未配置时返回 `None`。
pub fn gateway_endpoint(global: &GlobalConfig) -> Result<Option<Url>, ConfigError> {
    global
        .gateway_url
        .as_deref()
        .map(|raw| {
            Url::parse(raw).map_err(|err| ConfigError::Invalid {
                field: "global.gateway_url",
                message: format!("{raw}: {err}"),
            })
        })
        .transpose()
}

fn read_file(path: &Path) -> Result<AppConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let config: AppConfig = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(config)
}
