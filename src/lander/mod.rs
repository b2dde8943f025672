pub mod error;
mod finalizer;
mod multisig;
mod rpc;

use async_trait::async_trait;

use crate::consensus::TransactionDraft;

pub use error::LanderError;
pub use finalizer::{Finalized, Finalizer, MultisigTarget};
pub use multisig::{RawDraftArtifact, RawTransaction, read_multi_addrs, write_raw_draft};
pub use rpc::RpcLander;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanderReceipt {
    pub lander: &'static str,
    pub endpoint: String,
    pub txid: String,
}

/// 签名并广播交易的外部客户端。
#[async_trait]
pub trait Lander: Send + Sync {
    fn name(&self) -> &'static str;

    async fn submit(&self, draft: &TransactionDraft) -> Result<LanderReceipt, LanderError>;
}
