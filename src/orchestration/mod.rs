//! Startup sequencing and balance reconciliation.

pub mod readiness;
pub mod reconciler;

pub use readiness::{read_address, AddressGate, AddressReceiver, AddressSender, ReadinessError};
pub use reconciler::{ReconcileOutcome, Reconciler};
