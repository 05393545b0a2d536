pub mod api;
pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod ledger;
pub mod orchestration;

pub use config::Config;
pub use domain::{Action, Decimal, TransactionEvent, WalletAddress};
pub use engine::{OverlayState, Snapshot, TransactionIngress};
pub use error::AppError;
pub use ledger::{LedgerClient, LedgerError, MockLedger, SolanaRpcClient};
pub use orchestration::{AddressGate, ReconcileOutcome, Reconciler};
