//! `ArgumentMap` 与 base64 字符串表之间的序列化。

use std::collections::BTreeMap;

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use serde::{Deserialize, Deserializer, Serializer, de, ser::SerializeMap};

use super::args::ArgumentMap;

pub fn serialize<S>(value: &ArgumentMap, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut map = serializer.serialize_map(Some(value.len()))?;
    for (key, bytes) in value {
        map.serialize_entry(key, &BASE64.encode(bytes))?;
    }
    map.end()
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<ArgumentMap, D::Error>
where
    D: Deserializer<'de>,
{
    let encoded = BTreeMap::<String, String>::deserialize(deserializer)?;
    encoded
        .into_iter()
        .map(|(key, value)| {
            BASE64
                .decode(value.as_bytes())
                .map(|bytes| (key.clone(), bytes))
                .map_err(|err| de::Error::custom(format!("参数 {key} base64 解码失败: {err}")))
        })
        .collect()
}
