//! The shared balance/PNL record behind the overlay.
//!
//! Every read and write goes through a single mutex, so a snapshot can never
//! observe half of a sale (balance bumped, pnl not yet). Callers that need the
//! ledger must finish their network call before touching this type.

use chrono::{DateTime, Utc};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{debug, warn};

use crate::domain::{Action, Decimal, MalformedEvent, TransactionEvent};

/// Immutable copy of the displayed values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub balance: Decimal,
    pub pnl: Decimal,
}

/// Counters describing what the state has seen since startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverlayStats {
    pub events_applied: u64,
    pub events_ignored: u64,
    pub reconciliations: u64,
    pub last_reconciled_at: Option<DateTime<Utc>>,
}

/// Whether an event changed the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Changed,
    Ignored,
}

#[derive(Debug, Default)]
struct Inner {
    snapshot: Snapshot,
    stats: OverlayStats,
}

#[derive(Debug, Default)]
pub struct OverlayState {
    inner: Mutex<Inner>,
}

impl OverlayState {
    /// Fresh state: `{balance: 0, pnl: 0}`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a known balance. PNL always starts at zero.
    pub fn with_balance(balance: Decimal) -> Self {
        let state = Self::new();
        state.lock().snapshot.balance = balance;
        state
    }

    // Mutators compute every new field with checked arithmetic before
    // assigning any of them, so the guarded record is never left half-updated.
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Funds left the wallet. PNL is untouched.
    ///
    /// # Errors
    /// `AmountOutOfRange` if the new balance does not fit; state is unchanged.
    pub fn apply_spend(&self, amount: Decimal) -> Result<(), MalformedEvent> {
        let mut inner = self.lock();
        let balance = inner
            .snapshot
            .balance
            .checked_sub(amount)
            .ok_or(MalformedEvent::AmountOutOfRange(amount))?;
        inner.snapshot.balance = balance;
        inner.stats.events_applied += 1;
        Ok(())
    }

    /// A realized gain: proceeds raise both balance and PNL.
    ///
    /// # Errors
    /// `AmountOutOfRange` if either total would not fit; state is unchanged.
    pub fn apply_sale(&self, amount: Decimal) -> Result<(), MalformedEvent> {
        let mut inner = self.lock();
        let out_of_range = MalformedEvent::AmountOutOfRange(amount);
        let balance = inner
            .snapshot
            .balance
            .checked_add(amount)
            .ok_or_else(|| out_of_range.clone())?;
        let pnl = inner.snapshot.pnl.checked_add(amount).ok_or(out_of_range)?;
        inner.snapshot = Snapshot { balance, pnl };
        inner.stats.events_applied += 1;
        Ok(())
    }

    /// Dispatch an ingress event. Unknown actions are counted and dropped.
    pub fn apply(&self, event: &TransactionEvent) -> Result<Applied, MalformedEvent> {
        match &event.action {
            Action::Spend => {
                self.apply_spend(event.amount)?;
                debug!(amount = %event.amount, "Applied spend");
                Ok(Applied::Changed)
            }
            Action::Sale => {
                self.apply_sale(event.amount)?;
                debug!(amount = %event.amount, "Applied sale");
                Ok(Applied::Changed)
            }
            Action::Unknown(raw) => {
                let ignored = {
                    let mut inner = self.lock();
                    inner.stats.events_ignored += 1;
                    inner.stats.events_ignored
                };
                warn!(
                    action = %raw,
                    amount = %event.amount,
                    ignored_total = ignored,
                    "Dropping transaction with unrecognized action"
                );
                Ok(Applied::Ignored)
            }
        }
    }

    /// Overwrite the balance with the ledger's authoritative figure.
    pub fn reconcile_balance(&self, balance: Decimal) {
        let mut inner = self.lock();
        inner.snapshot.balance = balance;
        inner.stats.reconciliations += 1;
        inner.stats.last_reconciled_at = Some(Utc::now());
    }

    pub fn snapshot(&self) -> Snapshot {
        self.lock().snapshot
    }

    pub fn stats(&self) -> OverlayStats {
        self.lock().stats.clone()
    }

    /// Snapshot and stats taken under the same lock.
    pub fn snapshot_with_stats(&self) -> (Snapshot, OverlayStats) {
        let inner = self.lock();
        (inner.snapshot, inner.stats.clone())
    }
}
