use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use url::Url;

use crate::consensus::TransactionDraft;

use super::error::LanderError;
use super::{Lander, LanderReceipt};

const RPC_METHOD: &str = "xkernel_invoke";

/// 通过签名网关的 JSON-RPC 接口提交交易。
#[derive(Clone)]
pub struct RpcLander {
    client: Client,
    endpoint: Option<Url>,
}

impl RpcLander {
    pub fn new(endpoint: Option<Url>, timeout: Duration) -> Result<Self, LanderError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> Option<&Url> {
        self.endpoint.as_ref()
    }
}

#[async_trait]
impl Lander for RpcLander {
    fn name(&self) -> &'static str {
        "rpc"
    }

    async fn submit(&self, draft: &TransactionDraft) -> Result<LanderReceipt, LanderError> {
        let endpoint = self
            .endpoint
            .as_ref()
            .ok_or_else(|| LanderError::fatal("未配置 global.gateway_url，无法直接提交交易"))?;

        let body = RpcRequest {
            jsonrpc: "2.0",
            id: 1,
            method: RPC_METHOD,
            params: [draft],
        };
        let response = self
            .client
            .post(endpoint.clone())
            .json(&body)
            .send()
            .await?;
        let status = response.status();
        let raw = response.bytes().await?;
        let txid = interpret_response(status, &raw)?;

        info!(
            target: "lander::rpc",
            txid = %txid,
            endpoint = %endpoint,
            contract = %draft.contract_name,
            method = %draft.method_name,
            "transaction submitted via gateway"
        );
        Ok(LanderReceipt {
            lander: self.name(),
            endpoint: endpoint.to_string(),
            txid,
        })
    }
}

#[derive(Serialize)]
struct RpcRequest<'a> {
    jsonrpc: &'static str,
    id: u64,
    method: &'static str,
    params: [&'a TransactionDraft; 1],
}

#[derive(Debug, Deserialize)]
struct RpcResponse {
    #[serde(default)]
    result: Option<SubmitResult>,
    #[serde(default)]
    error: Option<RpcErrorBody>,
}

#[derive(Debug, Deserialize)]
struct SubmitResult {
    txid: String,
}

#[derive(Debug, Deserialize)]
struct RpcErrorBody {
    code: i64,
    message: String,
}

/// 非 2xx 响应若携带 JSON-RPC 错误体，优先返回网关给出的错误码。
fn interpret_response(status: StatusCode, raw: &[u8]) -> Result<String, LanderError> {
    if status.is_success() {
        return parse_submit_response(raw);
    }
    match parse_submit_response(raw) {
        Err(err @ LanderError::Rpc { .. }) => Err(err),
        _ => Err(LanderError::fatal(format!("网关返回 HTTP {status}"))),
    }
}

fn parse_submit_response(raw: &[u8]) -> Result<String, LanderError> {
    let response: RpcResponse = serde_json::from_slice(raw)?;
    if let Some(error) = response.error {
        warn!(
            target: "lander::rpc",
            code = error.code,
            message = %error.message,
            "gateway rejected transaction"
        );
        return Err(LanderError::Rpc {
            code: error.code,
            message: error.message,
        });
    }
    match response.result {
        Some(result) if !result.txid.is_empty() => Ok(result.txid),
        _ => Err(LanderError::fatal("网关响应缺少 txid")),
    }
}
