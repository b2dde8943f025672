//! 每种共识协议各自的请求校验与草稿组装逻辑。

mod tdpos;
mod xpoa;

pub use tdpos::{ACCOUNT_NAME_ARG, ACL_ARG, TdposHandler};
pub use xpoa::XpoaHandler;

use super::draft::{DraftBuilder, PreparedDraft};
use super::error::ConsensusError;
use super::request::ConsensusRequest;
use crate::wallet::AddressResolver;

/// 组装草稿时可用的外部上下文。
pub struct BuildContext<'a> {
    pub chain_name: &'a str,
    pub keys: &'a dyn AddressResolver,
}

impl<'a> BuildContext<'a> {
    pub fn new(chain_name: &'a str, keys: &'a dyn AddressResolver) -> Self {
        Self { chain_name, keys }
    }

    /// 通用字段：链名、手续费、模块名、合约名、方法名。
    pub(crate) fn base_draft(&self, protocol: &str, request: &ConsensusRequest) -> DraftBuilder {
        DraftBuilder::for_protocol(protocol, &request.method)
            .with_chain_name(self.chain_name)
            .with_fee(request.fee.clone())
    }
}

pub trait ProtocolHandler: Send + Sync {
    fn protocol(&self) -> &'static str;

    /// 校验请求并产出草稿，不做任何网络 I/O。
    fn build(
        &self,
        request: &ConsensusRequest,
        ctx: &BuildContext<'_>,
    ) -> Result<PreparedDraft, ConsensusError>;
}
