use std::path::PathBuf;

pub const DEFAULT_MULTI_ADDRS: &str = "data/acl/addrs";
pub const DEFAULT_OUTPUT: &str = "./tx.out";

/// 单次调用的输入，构造后只读。
#[derive(Debug, Clone)]
pub struct ConsensusRequest {
    pub protocol: String,
    pub method: String,
    pub account: String,
    pub desc_file: Option<PathBuf>,
    pub fee: String,
    pub multisig: bool,
    pub multi_addrs: PathBuf,
    pub output: PathBuf,
}

impl ConsensusRequest {
    pub fn new(protocol: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            protocol: protocol.into(),
            method: method.into(),
            account: String::new(),
            desc_file: None,
            fee: String::new(),
            multisig: false,
            multi_addrs: PathBuf::from(DEFAULT_MULTI_ADDRS),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }

    pub fn with_account(mut self, account: impl Into<String>) -> Self {
        self.account = account.into();
        self
    }

    pub fn with_desc_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.desc_file = Some(path.into());
        self
    }

    pub fn with_fee(mut self, fee: impl Into<String>) -> Self {
        self.fee = fee.into();
        self
    }

    pub fn with_multisig(mut self, multisig: bool) -> Self {
        self.multisig = multisig;
        self
    }

    pub fn with_multi_addrs(mut self, path: impl Into<PathBuf>) -> Self {
        self.multi_addrs = path.into();
        self
    }

    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = path.into();
        self
    }

    pub fn has_account(&self) -> bool {
        !self.account.is_empty()
    }

    /// 空路径与未提供等价。
    pub fn descriptor(&self) -> Option<&PathBuf> {
        self.desc_file
            .as_ref()
            .filter(|path| !path.as_os_str().is_empty())
    }
}
