use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

/// 密钥目录下保存本地地址的文件名。
pub const ADDRESS_FILE: &str = "address";

#[derive(Debug, Error)]
pub enum AddressError {
    #[error("读取地址文件 {path} 失败: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("地址文件 {path} 为空")]
    Empty { path: PathBuf },
    #[error("地址文件 {path} 内容不是合法的 base58 地址: {reason}")]
    Malformed { path: PathBuf, reason: String },
}

/// 从本地签名密钥推导出自身地址。
pub trait AddressResolver: Send + Sync {
    fn resolve_address(&self) -> Result<String, AddressError>;
}

#[derive(Debug, Clone)]
pub struct KeyDirAddressReader {
    keys_dir: PathBuf,
}

impl KeyDirAddressReader {
    pub fn new(keys_dir: impl Into<PathBuf>) -> Self {
        Self {
            keys_dir: keys_dir.into(),
        }
    }

    pub fn keys_dir(&self) -> &Path {
        &self.keys_dir
    }
}

impl AddressResolver for KeyDirAddressReader {
    fn resolve_address(&self) -> Result<String, AddressError> {
        let path = self.keys_dir.join(ADDRESS_FILE);
        let raw = fs::read_to_string(&path).map_err(|source| AddressError::Read {
            path: path.clone(),
            source,
        })?;
        let address = parse_address(&raw, &path)?;
        debug!(target: "wallet", address = %address, keys = %self.keys_dir.display(), "resolved self address");
        Ok(address)
    }
}

fn parse_address(raw: &str, path: &Path) -> Result<String, AddressError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AddressError::Empty {
            path: path.to_path_buf(),
        });
    }
    bs58::decode(trimmed)
        .into_vec()
        .map_err(|err| AddressError::Malformed {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })?;
    Ok(trimmed.to_string())
}
