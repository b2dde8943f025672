use std::path::PathBuf;

use tracing::debug;

use crate::consensus::{PreparedDraft, SubmissionMode};

use super::error::LanderError;
use super::multisig::{RawDraftArtifact, RawTransaction, read_multi_addrs, write_raw_draft};
use super::{Lander, LanderReceipt};

/// 多签流程的输入输出位置。
#[derive(Debug, Clone)]
pub struct MultisigTarget {
    pub multi_addrs: PathBuf,
    pub output: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finalized {
    Submitted(LanderReceipt),
    Drafted(RawDraftArtifact),
}

/// 按草稿声明的提交方式直接广播或导出原始交易。
pub struct Finalizer<L> {
    lander: L,
}

impl<L: Lander> Finalizer<L> {
    pub fn new(lander: L) -> Self {
        Self { lander }
    }

    pub fn lander(&self) -> &L {
        &self.lander
    }

    pub async fn finalize(
        &self,
        prepared: PreparedDraft,
        target: &MultisigTarget,
    ) -> Result<Finalized, LanderError> {
        let PreparedDraft { draft, mode } = prepared;
        match mode {
            SubmissionMode::Direct => {
                debug!(target: "lander", lander = self.lander.name(), "submitting draft directly");
                let receipt = self.lander.submit(&draft).await?;
                Ok(Finalized::Submitted(receipt))
            }
            SubmissionMode::Multisig => {
                let auth_require = read_multi_addrs(&target.multi_addrs)?;
                let raw = RawTransaction::new(draft, auth_require)?;
                Ok(Finalized::Drafted(write_raw_draft(&raw, &target.output)?))
            }
        }
    }
}
