use std::collections::BTreeMap;

use serde::{Serialize, Serializer};

/// ACL 权限模型的规则标识，数值与链上定义保持一致。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionRule {
    SignThreshold,
}

impl PermissionRule {
    pub fn code(self) -> u8 {
        match self {
            PermissionRule::SignThreshold => 1,
        }
    }
}

impl Serialize for PermissionRule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PermissionModel {
    pub rule: PermissionRule,
    #[serde(rename = "acceptValue")]
    pub accept_value: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct AclPolicy {
    pub pm: PermissionModel,
    #[serde(rename = "aksWeight")]
    pub aks_weight: BTreeMap<String, f64>,
}

impl AclPolicy {
    /// 单签名人、门限为 1 的多数签名策略。
    pub fn single_signer(address: &str) -> Self {
        Self {
            pm: PermissionModel {
                rule: PermissionRule::SignThreshold,
                accept_value: 1.0,
            },
            aks_weight: BTreeMap::from([(address.to_string(), 1.0)]),
        }
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }
}
