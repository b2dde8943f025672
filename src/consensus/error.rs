use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::args::ArgumentError;
use crate::wallet::AddressError;

#[derive(Debug, Error)]
pub enum ConsensusError {
    #[error("未注册的共识类型: {0}")]
    NotRegistered(String),
    #[error("{protocol} 需要通过 --desc 提供参数描述文件")]
    MissingDescriptor { protocol: &'static str },
    #[error("{protocol} 需要通过 --account 提供 ACL 账户")]
    MissingAccount { protocol: &'static str },
    #[error("读取参数描述文件 {path} 失败: {source}")]
    DescriptorRead { path: PathBuf, source: io::Error },
    #[error("参数解析失败: {0}")]
    ArgumentDecode(#[from] ArgumentError),
    #[error("解析本地地址失败: {0}")]
    AddressResolution(#[from] AddressError),
    #[error("手续费格式错误: {0}")]
    InvalidFee(String),
    #[error("交易草稿不完整: 缺少 {0}")]
    IncompleteDraft(&'static str),
}

impl ConsensusError {
    /// 未注册的共识类型不会产生任何副作用，调用方可以选择仅提示用户。
    pub fn is_not_registered(&self) -> bool {
        matches!(self, Self::NotRegistered(_))
    }
}
