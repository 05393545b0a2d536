//! Domain primitives: WalletAddress, Action.

use serde::{Deserialize, Serialize};

/// Wallet address whose balance the overlay tracks.
///
/// Opaque to this crate beyond being non-empty; the ledger decides whether it
/// is a real account.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WalletAddress(String);

impl WalletAddress {
    /// Trim the input and wrap it. Returns `None` for blank input.
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(WalletAddress(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What a reported transaction did to the wallet.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Action {
    /// Funds left the wallet without realizing a gain.
    Spend,
    /// Realized gain: proceeds land in the wallet and count as profit.
    Sale,
    /// Anything else. Accepted at the boundary, never applied.
    Unknown(String),
}

impl Action {
    /// Case-insensitive; `sell` is accepted as an alias for `sale`.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "spend" => Action::Spend,
            "sale" | "sell" => Action::Sale,
            _ => Action::Unknown(raw.to_string()),
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Spend => write!(f, "spend"),
            Action::Sale => write!(f, "sale"),
            Action::Unknown(raw) => write!(f, "unknown({})", raw),
        }
    }
}
