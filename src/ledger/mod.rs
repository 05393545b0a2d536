//! Ledger client abstraction: the authoritative source of the wallet balance.

use crate::domain::{Decimal, WalletAddress};
use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

pub mod mock;
pub mod solana;

pub use mock::MockLedger;
pub use solana::SolanaRpcClient;

/// Fetches a wallet's current balance in major units.
///
/// Implementations must not retry; the reconciler decides what a failure means.
#[async_trait]
pub trait LedgerClient: Send + Sync + fmt::Debug {
    async fn fetch_balance(&self, address: &WalletAddress) -> Result<Decimal, LedgerError>;
}

/// The ledger could not produce a balance.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// Connection failure, DNS failure or timeout.
    #[error("Network error: {0}")]
    Network(String),
    /// Non-success HTTP status.
    #[error("HTTP error {status}: {message}")]
    Http { status: u16, message: String },
    /// The endpoint answered with a JSON-RPC error object.
    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },
    /// Body was not JSON or did not carry `result.value`.
    #[error("Parse error: {0}")]
    Parse(String),
}
