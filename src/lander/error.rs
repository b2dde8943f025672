use std::fmt;
use std::path::PathBuf;

use reqwest::Error as ReqwestError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LanderError {
    #[error("网络请求失败: {0}")]
    Network(#[from] ReqwestError),
    #[error("JSON 解析失败: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("读写 {path} 失败: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("节点拒绝交易 (code {code}): {message}")]
    Rpc { code: i64, message: String },
    #[error("{0}")]
    Fatal(String),
}

impl LanderError {
    pub fn fatal(reason: impl fmt::Display) -> Self {
        Self::Fatal(reason.to_string())
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
