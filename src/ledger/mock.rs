//! Scripted ledger for tests: no network.

use super::{LedgerClient, LedgerError};
use crate::domain::{Decimal, WalletAddress};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

/// Replays queued responses in order, then repeats the fallback.
#[derive(Debug)]
pub struct MockLedger {
    script: Mutex<VecDeque<Result<Decimal, LedgerError>>>,
    fallback: Result<Decimal, LedgerError>,
    delay: Option<Duration>,
    calls: AtomicUsize,
}

impl MockLedger {
    /// A ledger that always reports `balance`.
    pub fn new(balance: Decimal) -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            fallback: Ok(balance),
            delay: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// A ledger that always fails with `error`.
    pub fn failing(error: LedgerError) -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            fallback: Err(error),
            delay: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Queue a one-off response ahead of the fallback.
    pub fn then(self, response: Result<Decimal, LedgerError>) -> Self {
        if let Ok(mut script) = self.script.lock() {
            script.push_back(response);
        }
        self
    }

    /// Sleep before answering, to stand in for a slow or hung endpoint.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// How many balance queries have been made.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LedgerClient for MockLedger {
    async fn fetch_balance(&self, _address: &WalletAddress) -> Result<Decimal, LedgerError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        let next = self.script.lock().ok().and_then(|mut s| s.pop_front());
        next.unwrap_or_else(|| self.fallback.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str_canonical(s).unwrap()
    }

    #[tokio::test]
    async fn test_script_then_fallback() {
        let addr = WalletAddress::parse("wallet").unwrap();
        let ledger = MockLedger::new(dec("3"))
            .then(Err(LedgerError::Network("down".to_string())))
            .then(Ok(dec("1")));

        assert!(ledger.fetch_balance(&addr).await.is_err());
        assert_eq!(ledger.fetch_balance(&addr).await.unwrap(), dec("1"));
        assert_eq!(ledger.fetch_balance(&addr).await.unwrap(), dec("3"));
        assert_eq!(ledger.calls(), 3);
    }
}
