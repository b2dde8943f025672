use tracing::debug;

use super::{BuildContext, ProtocolHandler};
use crate::consensus::acl::AclPolicy;
use crate::consensus::args::{ArgumentError, load_descriptor};
use crate::consensus::draft::{PreparedDraft, SubmissionMode};
use crate::consensus::error::ConsensusError;
use crate::consensus::request::ConsensusRequest;

pub const ACCOUNT_NAME_ARG: &str = "account_name";
pub const ACL_ARG: &str = "acl";

/// 委托投票类共识：节点以自身地址为接收方发起治理调用。
#[derive(Debug, Clone, Copy, Default)]
pub struct TdposHandler;

impl ProtocolHandler for TdposHandler {
    fn protocol(&self) -> &'static str {
        "tdpos"
    }

    fn build(
        &self,
        request: &ConsensusRequest,
        ctx: &BuildContext<'_>,
    ) -> Result<PreparedDraft, ConsensusError> {
        let desc = request
            .descriptor()
            .ok_or(ConsensusError::MissingDescriptor {
                protocol: self.protocol(),
            })?;
        let args = load_descriptor(desc)?;
        let self_address = ctx.keys.resolve_address()?;

        let mut builder = ctx
            .base_draft(self.protocol(), request)
            .with_args(args)
            .with_recipient(self_address.clone());

        if request.has_account() {
            let acl = AclPolicy::single_signer(&self_address)
                .to_bytes()
                .map_err(ArgumentError::from)?;
            builder = builder
                .with_sender(request.account.clone())
                .with_arg(ACCOUNT_NAME_ARG, request.account.as_bytes())
                .with_arg(ACL_ARG, acl);
        } else {
            builder = builder.with_sender(self_address.clone());
        }

        let mode = if request.multisig {
            SubmissionMode::Multisig
        } else {
            SubmissionMode::Direct
        };
        let draft = builder.build()?;
        debug!(
            target: "consensus::tdpos",
            method = %draft.method_name,
            from = %draft.from,
            to = %draft.to,
            args = draft.args.len(),
            ?mode,
            "tdpos draft prepared"
        );
        Ok(PreparedDraft { draft, mode })
    }
}
