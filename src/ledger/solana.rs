//! Solana JSON-RPC ledger client.

use super::{LedgerClient, LedgerError};
use crate::domain::{Decimal, WalletAddress};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_RPC_URL: &str = "https://api.mainnet-beta.solana.com";

/// Balance lookups through the public `getBalance` RPC method.
#[derive(Debug, Clone)]
pub struct SolanaRpcClient {
    client: Client,
    rpc_url: String,
}

impl SolanaRpcClient {
    /// Create a client whose requests give up after `timeout`.
    pub fn new(rpc_url: String, timeout: Duration) -> Result<Self, LedgerError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LedgerError::Network(e.to_string()))?;
        Ok(Self { client, rpc_url })
    }

    async fn post_rpc(&self, payload: serde_json::Value) -> Result<serde_json::Value, LedgerError> {
        let response = self
            .client
            .post(&self.rpc_url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| LedgerError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LedgerError::Http {
                status: status.as_u16(),
                message: status
                    .canonical_reason()
                    .unwrap_or("Unexpected status")
                    .to_string(),
            });
        }

        response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| LedgerError::Parse(e.to_string()))
    }
}

#[async_trait]
impl LedgerClient for SolanaRpcClient {
    async fn fetch_balance(&self, address: &WalletAddress) -> Result<Decimal, LedgerError> {
        debug!(address = %address, rpc_url = %self.rpc_url, "Fetching balance");

        let payload = balance_request(address);
        let response = self.post_rpc(payload).await?;
        let lamports = parse_balance_response(&response)?;

        Ok(Decimal::from_minor_units(lamports))
    }
}

fn balance_request(address: &WalletAddress) -> serde_json::Value {
    serde_json::json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": "getBalance",
        "params": [address.as_str()]
    })
}

/// Extract the lamport count from a `getBalance` response body.
fn parse_balance_response(response: &serde_json::Value) -> Result<u64, LedgerError> {
    if let Some(error) = response.get("error") {
        let code = error.get("code").and_then(|v| v.as_i64()).unwrap_or(0);
        let message = error
            .get("message")
            .and_then(|v| v.as_str())
            .unwrap_or("unknown error")
            .to_string();
        return Err(LedgerError::Rpc { code, message });
    }

    response
        .get("result")
        .and_then(|r| r.get("value"))
        .and_then(|v| v.as_u64())
        .ok_or_else(|| LedgerError::Parse("Missing or invalid result.value".to_string()))
}
