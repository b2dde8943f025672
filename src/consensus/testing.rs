use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use super::TransactionDraft;
use crate::lander::{Lander, LanderError, LanderReceipt};
use crate::wallet::{AddressError, AddressResolver};

pub const SELF_ADDRESS: &str = "dpzuVdosQrF2kmzumhVeFQZa1aYcdgFpN";

#[derive(Default)]
pub struct FakeKeys {
    pub calls: AtomicUsize,
}

impl FakeKeys {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl AddressResolver for FakeKeys {
    fn resolve_address(&self) -> Result<String, AddressError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(SELF_ADDRESS.to_string())
    }
}

pub struct BrokenKeys;

impl AddressResolver for BrokenKeys {
    fn resolve_address(&self) -> Result<String, AddressError> {
        Err(AddressError::Empty {
            path: PathBuf::from("keys/address"),
        })
    }
}

#[derive(Default)]
pub struct FakeLander {
    pub submitted: Mutex<Vec<TransactionDraft>>,
    pub reject: bool,
}

impl FakeLander {
    pub fn rejecting() -> Self {
        Self {
            reject: true,
            ..Self::default()
        }
    }

    pub fn submissions(&self) -> usize {
        self.submitted.lock().map(|list| list.len()).unwrap_or_default()
    }
}

#[async_trait]
impl Lander for FakeLander {
    fn name(&self) -> &'static str {
        "fake"
    }

    async fn submit(&self, draft: &TransactionDraft) -> Result<LanderReceipt, LanderError> {
        if self.reject {
            return Err(LanderError::Rpc {
                code: -32000,
                message: "rejected".to_string(),
            });
        }
        self.submitted
            .lock()
            .map_err(|_| LanderError::fatal("poisoned"))?
            .push(draft.clone());
        Ok(LanderReceipt {
            lander: "fake",
            endpoint: "memory".to_string(),
            txid: format!("tx-{}", draft.method_name),
        })
    }
}

pub fn write_descriptor(dir: &tempfile::TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("desc.json");
    fs::write(&path, contents).expect("write descriptor");
    path
}
