//! 将 JSON 描述文件转换为内核方法需要的字节参数表。

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde_json::{Map, Value};
use thiserror::Error;

use super::error::ConsensusError;

/// 参数名到原始字节的映射，键唯一且顺序无意义。
pub type ArgumentMap = BTreeMap<String, Vec<u8>>;

#[derive(Debug, Error)]
pub enum ArgumentError {
    #[error("描述文件不是合法的 JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("描述文件顶层必须是 JSON 对象，实际为 {0}")]
    NotAnObject(&'static str),
    #[error("参数 {key} 的类型 {kind} 不受支持")]
    Unsupported { key: String, kind: &'static str },
}

pub fn parse_descriptor(raw: &[u8]) -> Result<Map<String, Value>, ArgumentError> {
    match serde_json::from_slice::<Value>(raw)? {
        Value::Object(map) => Ok(map),
        other => Err(ArgumentError::NotAnObject(value_kind(&other))),
    }
}

pub fn convert_args(args: &Map<String, Value>) -> Result<ArgumentMap, ArgumentError> {
    let mut converted = ArgumentMap::new();
    for (key, value) in args {
        converted.insert(key.clone(), encode_value(key, value)?);
    }
    Ok(converted)
}

/// 读取并转换参数描述文件。
pub fn load_descriptor(path: &Path) -> Result<ArgumentMap, ConsensusError> {
    let raw = fs::read(path).map_err(|source| ConsensusError::DescriptorRead {
        path: path.to_path_buf(),
        source,
    })?;
    let args = parse_descriptor(&raw)?;
    Ok(convert_args(&args)?)
}

fn encode_value(key: &str, value: &Value) -> Result<Vec<u8>, ArgumentError> {
    match value {
        Value::String(text) => Ok(text.as_bytes().to_vec()),
        // 保留描述文件中的原始数字文本，超出 u64 的整数不会退化为浮点
        Value::Number(number) => Ok(number.to_string().into_bytes()),
        Value::Bool(flag) => Ok(flag.to_string().into_bytes()),
        // 内核方法期望嵌套参数仍为 JSON 文本
        Value::Array(_) | Value::Object(_) => Ok(serde_json::to_vec(value)?),
        Value::Null => Err(ArgumentError::Unsupported {
            key: key.to_string(),
            kind: value_kind(value),
        }),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
