use serde::{Deserialize, Serialize};

use super::args::ArgumentMap;
use super::error::ConsensusError;

/// 交易版本号，与账本当前版本保持一致。
pub const TX_VERSION: i32 = 3;
/// 共识内核调用统一走 xkernel 模块。
pub const MODULE_NAME: &str = "xkernel";
pub const CONTRACT_BUCKET_PREFIX: &str = "$";

pub fn contract_name_for(protocol: &str) -> String {
    format!("{CONTRACT_BUCKET_PREFIX}{protocol}")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionMode {
    Direct,
    Multisig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionDraft {
    pub version: i32,
    pub chain_name: String,
    pub amount: String,
    pub fee: String,
    pub from: String,
    pub to: String,
    pub module_name: String,
    pub contract_name: String,
    pub method_name: String,
    #[serde(with = "super::serde_helpers")]
    pub args: ArgumentMap,
}

/// 协议处理器的产出：草稿及其声明的提交方式。
#[derive(Debug, Clone)]
pub struct PreparedDraft {
    pub draft: TransactionDraft,
    pub mode: SubmissionMode,
}

/// 分阶段构造 `TransactionDraft`，每一步消费旧值并返回新值。
#[derive(Debug, Clone, Default)]
pub struct DraftBuilder {
    chain_name: String,
    fee: String,
    from: String,
    to: String,
    module_name: String,
    contract_name: String,
    method_name: String,
    args: ArgumentMap,
    require_sender: bool,
}

impl DraftBuilder {
    /// 按协议标识填好模块名与合约名。
    pub fn for_protocol(protocol: &str, method: &str) -> Self {
        Self {
            module_name: MODULE_NAME.to_string(),
            contract_name: contract_name_for(protocol),
            method_name: method.to_string(),
            ..Self::default()
        }
    }

    pub fn with_chain_name(mut self, chain_name: impl Into<String>) -> Self {
        self.chain_name = chain_name.into();
        self
    }

    pub fn with_fee(mut self, fee: impl Into<String>) -> Self {
        self.fee = fee.into();
        self
    }

    pub fn with_sender(mut self, from: impl Into<String>) -> Self {
        self.from = from.into();
        self
    }

    pub fn with_recipient(mut self, to: impl Into<String>) -> Self {
        self.to = to.into();
        self
    }

    pub fn with_args(mut self, args: ArgumentMap) -> Self {
        self.args = args;
        self
    }

    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<Vec<u8>>) -> Self {
        self.args.insert(key.into(), value.into());
        self
    }

    pub fn require_sender(mut self) -> Self {
        self.require_sender = true;
        self
    }

    pub fn build(self) -> Result<TransactionDraft, ConsensusError> {
        if self.module_name.is_empty() {
            return Err(ConsensusError::IncompleteDraft("module_name"));
        }
        if self.contract_name.is_empty() {
            return Err(ConsensusError::IncompleteDraft("contract_name"));
        }
        if self.require_sender && self.from.is_empty() {
            return Err(ConsensusError::IncompleteDraft("from"));
        }
        validate_fee(&self.fee)?;

        Ok(TransactionDraft {
            version: TX_VERSION,
            chain_name: self.chain_name,
            amount: "0".to_string(),
            fee: self.fee,
            from: self.from,
            to: self.to,
            module_name: self.module_name,
            contract_name: self.contract_name,
            method_name: self.method_name,
            args: self.args,
        })
    }
}

/// 手续费允许留空，否则必须是非负十进制整数。
fn validate_fee(fee: &str) -> Result<(), ConsensusError> {
    if fee.is_empty() || fee.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ConsensusError::InvalidFee(fee.to_string()))
    }
}
