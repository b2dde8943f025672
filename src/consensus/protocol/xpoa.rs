use tracing::debug;

use super::{BuildContext, ProtocolHandler};
use crate::consensus::args::{ArgumentMap, load_descriptor};
use crate::consensus::draft::{PreparedDraft, SubmissionMode};
use crate::consensus::error::ConsensusError;
use crate::consensus::request::ConsensusRequest;

/// 授权类共识：治理方法需要 ACL 账户多方签名，一律走多签流程。
#[derive(Debug, Clone, Copy, Default)]
pub struct XpoaHandler;

impl ProtocolHandler for XpoaHandler {
    fn protocol(&self) -> &'static str {
        "xpoa"
    }

    fn build(
        &self,
        request: &ConsensusRequest,
        ctx: &BuildContext<'_>,
    ) -> Result<PreparedDraft, ConsensusError> {
        if !request.has_account() {
            return Err(ConsensusError::MissingAccount {
                protocol: self.protocol(),
            });
        }

        // 只读方法（如 get_validates）不需要参数
        let args = match request.descriptor() {
            Some(desc) => load_descriptor(desc)?,
            None => ArgumentMap::new(),
        };
        let self_address = ctx.keys.resolve_address()?;

        let draft = ctx
            .base_draft(self.protocol(), request)
            .with_sender(request.account.clone())
            .require_sender()
            .with_args(args)
            .with_recipient(self_address)
            .build()?;

        if !request.multisig {
            debug!(
                target: "consensus::xpoa",
                "multisig not requested, xpoa forces the multisig path"
            );
        }
        debug!(
            target: "consensus::xpoa",
            method = %draft.method_name,
            from = %draft.from,
            to = %draft.to,
            args = draft.args.len(),
            "xpoa draft prepared"
        );
        Ok(PreparedDraft {
            draft,
            mode: SubmissionMode::Multisig,
        })
    }
}
