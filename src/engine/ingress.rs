//! Transaction ingress: validate inbound events and apply them to the overlay.

use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

use super::overlay::{Applied, OverlayState};
use crate::domain::{MalformedEvent, TransactionEvent};

/// Acknowledgment returned to the reporter.
///
/// `success` means the event was structurally accepted, not that it changed
/// state: unknown actions are acknowledged too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Ack {
    pub success: bool,
}

#[derive(Debug, Error)]
pub enum IngressError {
    #[error("Malformed event: {0}")]
    Malformed(#[from] MalformedEvent),
}

#[derive(Debug, Clone)]
pub struct TransactionIngress {
    state: Arc<OverlayState>,
}

impl TransactionIngress {
    pub fn new(state: Arc<OverlayState>) -> Self {
        Self { state }
    }

    /// Parse a raw JSON body and apply it.
    pub fn submit(&self, body: &[u8]) -> Result<Ack, IngressError> {
        let (event, applied) = TransactionEvent::from_json(body)
            .and_then(|event| self.state.apply(&event).map(|applied| (event, applied)))
            .map_err(|e| {
                warn!(error = %e, "Rejected malformed transaction event");
                e
            })?;
        debug!(
            action = %event.action,
            amount = %event.amount,
            changed = applied == Applied::Changed,
            "Transaction acknowledged"
        );
        Ok(Ack { success: true })
    }
}
