//! Inbound transaction events and their structural validation.

use serde::Deserialize;
use thiserror::Error;

use super::{Action, Decimal};

/// A transaction reported by an external collaborator (e.g. a trading bot).
///
/// Consumed immediately by the overlay state and discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionEvent {
    pub amount: Decimal,
    pub action: Action,
}

/// The payload failed structural validation. State is never touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedEvent {
    #[error("payload is not a valid event object: {0}")]
    InvalidPayload(String),
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("amount must not be negative, got {0}")]
    NegativeAmount(Decimal),
    /// Applying the amount would push balance or PNL out of decimal range.
    #[error("amount {0} is out of range for the tracked totals")]
    AmountOutOfRange(Decimal),
}

#[derive(Debug, Deserialize)]
struct RawEvent {
    #[serde(default)]
    amount: Option<Decimal>,
    #[serde(default)]
    action: Option<String>,
}

impl TransactionEvent {
    pub fn new(amount: Decimal, action: Action) -> Self {
        Self { amount, action }
    }

    /// Parse and validate a JSON body of the form `{"amount": 10, "action": "spend"}`.
    pub fn from_json(body: &[u8]) -> Result<Self, MalformedEvent> {
        let raw: RawEvent = serde_json::from_slice(body)
            .map_err(|e| MalformedEvent::InvalidPayload(e.to_string()))?;

        let amount = raw.amount.ok_or(MalformedEvent::MissingField("amount"))?;
        let action = raw.action.ok_or(MalformedEvent::MissingField("action"))?;

        if amount.is_negative() {
            return Err(MalformedEvent::NegativeAmount(amount));
        }

        Ok(Self::new(amount, Action::parse(&action)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str_canonical(s).unwrap()
    }

    #[test]
    fn test_parse_spend() {
        let event = TransactionEvent::from_json(br#"{"amount": 10, "action": "spend"}"#).unwrap();
        assert_eq!(event.amount, dec("10"));
        assert_eq!(event.action, Action::Spend);
    }

    #[test]
    fn test_parse_fractional_sale() {
        let event = TransactionEvent::from_json(br#"{"amount": 0.25, "action": "sale"}"#).unwrap();
        assert_eq!(event.amount, dec("0.25"));
        assert_eq!(event.action, Action::Sale);
    }

    #[test]
    fn test_missing_amount() {
        let err = TransactionEvent::from_json(br#"{"action": "sale"}"#).unwrap_err();
        assert_eq!(err, MalformedEvent::MissingField("amount"));
    }

    #[test]
    fn test_missing_action() {
        let err = TransactionEvent::from_json(br#"{"amount": 3}"#).unwrap_err();
        assert_eq!(err, MalformedEvent::MissingField("action"));
    }

    #[test]
    fn test_null_fields_count_as_missing() {
        let err = TransactionEvent::from_json(br#"{"amount": null, "action": "sale"}"#).unwrap_err();
        assert_eq!(err, MalformedEvent::MissingField("amount"));
    }

    #[test]
    fn test_negative_amount_rejected() {
        let err = TransactionEvent::from_json(br#"{"amount": -1.5, "action": "spend"}"#).unwrap_err();
        assert_eq!(err, MalformedEvent::NegativeAmount(dec("-1.5")));
    }

    #[test]
    fn test_zero_amount_accepted() {
        let event = TransactionEvent::from_json(br#"{"amount": 0, "action": "sale"}"#).unwrap();
        assert!(event.amount.is_zero());
    }

    #[test]
    fn test_non_object_payloads_rejected() {
        for body in [&b"not json"[..], b"42", b"\"spend\"", b""] {
            let err = TransactionEvent::from_json(body).unwrap_err();
            assert!(matches!(err, MalformedEvent::InvalidPayload(_)), "body {:?}", body);
        }
        assert!(TransactionEvent::from_json(b"[]").is_err());
    }

    #[test]
    fn test_action_must_be_string() {
        let err = TransactionEvent::from_json(br#"{"amount": 1, "action": 7}"#).unwrap_err();
        assert!(matches!(err, MalformedEvent::InvalidPayload(_)));
    }

    #[test]
    fn test_unknown_action_is_structurally_valid() {
        let event = TransactionEvent::from_json(br#"{"amount": 1, "action": "refund"}"#).unwrap();
        assert_eq!(event.action, Action::Unknown("refund".to_string()));
    }
}
