//! 多签流程：把草稿序列化为可离线传递的原始交易文件，不做提交。

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::{info, warn};

use crate::consensus::TransactionDraft;

use super::error::LanderError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawTransaction {
    pub draft: TransactionDraft,
    pub initiator: String,
    pub auth_require: Vec<String>,
    /// 未签名部分的 SHA-256，供各签名方核对。
    pub digest: String,
}

#[derive(Serialize)]
struct UnsignedBody<'a> {
    draft: &'a TransactionDraft,
    initiator: &'a str,
    auth_require: &'a [String],
}

impl RawTransaction {
    pub fn new(draft: TransactionDraft, auth_require: Vec<String>) -> Result<Self, LanderError> {
        let initiator = draft.from.clone();
        let body = UnsignedBody {
            draft: &draft,
            initiator: &initiator,
            auth_require: &auth_require,
        };
        let digest = hex_digest(&serde_json::to_vec(&body)?);
        Ok(Self {
            draft,
            initiator,
            auth_require,
            digest,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDraftArtifact {
    pub path: PathBuf,
    pub digest: String,
    pub auth_require: Vec<String>,
}

/// 每行一个地址，忽略空行与 `#` 注释。
pub fn read_multi_addrs(path: &Path) -> Result<Vec<String>, LanderError> {
    let contents = fs::read_to_string(path).map_err(|source| LanderError::io(path, source))?;
    let addrs: Vec<String> = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect();
    if addrs.is_empty() {
        warn!(
            target: "lander::multisig",
            path = %path.display(),
            "multisig address list is empty"
        );
    }
    Ok(addrs)
}

pub fn write_raw_draft(raw: &RawTransaction, output: &Path) -> Result<RawDraftArtifact, LanderError> {
    let encoded = serde_json::to_vec_pretty(raw)?;
    fs::write(output, encoded).map_err(|source| LanderError::io(output, source))?;
    info!(
        target: "lander::multisig",
        path = %output.display(),
        digest = %raw.digest,
        signers = raw.auth_require.len(),
        "raw transaction written, collect signatures before broadcasting"
    );
    Ok(RawDraftArtifact {
        path: output.to_path_buf(),
        digest: raw.digest.clone(),
        auth_require: raw.auth_require.clone(),
    })
}

fn hex_digest(bytes: &[u8]) -> String {
    Sha256::digest(bytes)
        .iter()
        .map(|byte| format!("{byte:02x}"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consensus::DraftBuilder;

    fn sample_draft() -> TransactionDraft {
        DraftBuilder::for_protocol("xpoa", "edit_validates")
            .with_chain_name("xuper")
            .with_fee("100")
            .with_sender("XC1111111111111111@xuper")
            .with_recipient("dpzuVdosQrF2kmzumhVeFQZa1aYcdgFpN")
            .with_arg("validates", "a;b")
            .build()
            .unwrap()
    }

    #[test]
    fn address_list_skips_blank_and_comment_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("addrs");
        fs::write(&path, "# signers\nXC1111111111111111@xuper/addr1\n\n  addr2  \n").unwrap();
        assert_eq!(
            read_multi_addrs(&path).unwrap(),
            vec!["XC1111111111111111@xuper/addr1".to_string(), "addr2".to_string()]
        );
    }

    #[test]
    fn missing_address_list_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            read_multi_addrs(&dir.path().join("absent")),
            Err(LanderError::Io { .. })
        ));
    }

    #[test]
    fn digest_depends_on_signers() {
        let one = RawTransaction::new(sample_draft(), vec!["a".into()]).unwrap();
        let same = RawTransaction::new(sample_draft(), vec!["a".into()]).unwrap();
        let other = RawTransaction::new(sample_draft(), vec!["b".into()]).unwrap();
        assert_eq!(one.digest, same.digest);
        assert_ne!(one.digest, other.digest);
        assert_eq!(one.digest.len(), 64);
        assert_eq!(one.initiator, "XC1111111111111111@xuper");
    }

    #[test]
    fn written_draft_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("tx.out");
        let raw = RawTransaction::new(sample_draft(), vec!["addr1".into()]).unwrap();
        let artifact = write_raw_draft(&raw, &output).unwrap();

        assert_eq!(artifact.path, output);
        assert_eq!(artifact.digest, raw.digest);
        let back: RawTransaction = serde_json::from_slice(&fs::read(&output).unwrap()).unwrap();
        assert_eq!(back, raw);
        assert_eq!(back.draft.args["validates"], b"a;b");
        assert_eq!(back.draft.fee, "100");
    }
}
