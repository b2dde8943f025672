//! 共识内核调用：协议分发、参数转换、草稿组装与提交。

pub mod acl;
pub mod args;
pub mod draft;
pub mod error;
pub mod protocol;
pub mod registry;
pub mod request;
mod serde_helpers;

#[cfg(test)]
pub(crate) mod testing;

pub use acl::AclPolicy;
pub use args::{ArgumentError, ArgumentMap, convert_args, load_descriptor, parse_descriptor};
pub use draft::{DraftBuilder, PreparedDraft, SubmissionMode, TransactionDraft};
pub use error::ConsensusError;
pub use protocol::{BuildContext, ProtocolHandler};
pub use request::ConsensusRequest;

use thiserror::Error;
use tracing::info;

use crate::lander::{Finalized, Finalizer, Lander, LanderError, MultisigTarget};

#[derive(Debug, Error)]
pub enum InvokeError {
    #[error(transparent)]
    Consensus(#[from] ConsensusError),
    #[error(transparent)]
    Lander(#[from] LanderError),
}

impl InvokeError {
    pub fn is_not_registered(&self) -> bool {
        matches!(self, Self::Consensus(err) if err.is_not_registered())
    }
}

/// 单次调用：解析协议 -> 组装草稿 -> 提交或导出，任何一步失败即终止。
pub async fn invoke<L: Lander>(
    request: &ConsensusRequest,
    ctx: &BuildContext<'_>,
    finalizer: &Finalizer<L>,
) -> Result<Finalized, InvokeError> {
    let handler = registry::resolve(&request.protocol)?;
    let prepared = handler.build(request, ctx)?;

    info!(
        target: "consensus",
        protocol = handler.protocol(),
        method = %prepared.draft.method_name,
        mode = ?prepared.mode,
        "consensus draft ready"
    );

    let target = MultisigTarget {
        multi_addrs: request.multi_addrs.clone(),
        output: request.output.clone(),
    };
    Ok(finalizer.finalize(prepared, &target).await?)
}
