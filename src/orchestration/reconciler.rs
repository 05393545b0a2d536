use crate::domain::{Decimal, WalletAddress};
use crate::engine::OverlayState;
use crate::ledger::LedgerClient;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

/// Result of one reconciliation attempt. Never an error: failures are logged
/// and leave the tracked balance where it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconcileOutcome {
    /// Balance overwritten with the ledger's figure.
    Updated(Decimal),
    /// No wallet address known yet; the ledger was not called.
    Skipped,
    /// Ledger unavailable or timed out; balance unchanged.
    Failed,
}

/// Overwrites the tracked balance with the ledger's authoritative value.
#[derive(Debug, Clone)]
pub struct Reconciler {
    ledger: Arc<dyn LedgerClient>,
    state: Arc<OverlayState>,
    address: Option<WalletAddress>,
    timeout: Duration,
}

impl Reconciler {
    pub fn new(
        ledger: Arc<dyn LedgerClient>,
        state: Arc<OverlayState>,
        address: Option<WalletAddress>,
        timeout: Duration,
    ) -> Self {
        Self {
            ledger,
            state,
            address,
            timeout,
        }
    }

    /// Query the ledger once and, on success, overwrite the balance.
    ///
    /// The state lock is only taken after the query returns.
    pub async fn reconcile_once(&self) -> ReconcileOutcome {
        let Some(address) = &self.address else {
            debug!("No wallet address yet, skipping reconciliation");
            return ReconcileOutcome::Skipped;
        };

        let fetched = tokio::time::timeout(self.timeout, self.ledger.fetch_balance(address)).await;

        match fetched {
            Ok(Ok(balance)) => {
                self.state.reconcile_balance(balance);
                info!(address = %address, balance = %balance, "Reconciled balance");
                ReconcileOutcome::Updated(balance)
            }
            Ok(Err(e)) => {
                warn!(address = %address, error = %e, "Balance query failed, keeping last known balance");
                ReconcileOutcome::Failed
            }
            Err(_) => {
                warn!(
                    address = %address,
                    timeout_ms = self.timeout.as_millis() as u64,
                    "Balance query timed out, keeping last known balance"
                );
                ReconcileOutcome::Failed
            }
        }
    }

    /// Reconcile every `period` forever. The first reconciliation happens one
    /// full period after the call; startup reconciliation is the caller's job.
    pub async fn run_periodic(self, period: Duration) {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        ticker.tick().await;

        loop {
            ticker.tick().await;
            self.reconcile_once().await;
        }
    }

    /// Spawn `run_periodic` on the runtime. A zero period disables it.
    pub fn spawn_periodic(self, period: Duration) -> Option<JoinHandle<()>> {
        if period.is_zero() {
            return None;
        }
        info!(period_secs = period.as_secs(), "Starting periodic reconciliation");
        Some(tokio::spawn(self.run_periodic(period)))
    }
}
