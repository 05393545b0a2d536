//! One-shot "wallet address known" signal between the address source and the
//! server startup path.
//!
//! The overlay is Uninitialized until the gate fires and Active afterwards.
//! There is no way back.

use crate::domain::WalletAddress;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::oneshot;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReadinessError {
    #[error("No wallet address was entered")]
    EmptyAddress,
    #[error("Address source closed before supplying an address")]
    SourceClosed,
    #[error("Failed to read wallet address: {0}")]
    Io(String),
}

pub struct AddressGate;

impl AddressGate {
    pub fn channel() -> (AddressSender, AddressReceiver) {
        let (tx, rx) = oneshot::channel();
        (AddressSender { tx }, AddressReceiver { rx })
    }
}

#[derive(Debug)]
pub struct AddressSender {
    tx: oneshot::Sender<WalletAddress>,
}

impl AddressSender {
    /// Validate `raw` and open the gate. Consumes the sender, so the
    /// transition can only happen once.
    pub fn signal(self, raw: &str) -> Result<WalletAddress, ReadinessError> {
        let address = WalletAddress::parse(raw).ok_or(ReadinessError::EmptyAddress)?;
        self.tx
            .send(address.clone())
            .map_err(|_| ReadinessError::SourceClosed)?;
        Ok(address)
    }
}

#[derive(Debug)]
pub struct AddressReceiver {
    rx: oneshot::Receiver<WalletAddress>,
}

impl AddressReceiver {
    /// Wait until the address is known. Fails if the sender is dropped first.
    pub async fn wait_ready(self) -> Result<WalletAddress, ReadinessError> {
        self.rx.await.map_err(|_| ReadinessError::SourceClosed)
    }
}

/// Resolve the wallet address: a preset value wins, otherwise prompt once on
/// `writer` and read a single line from `reader`.
pub async fn read_address<R, W>(
    preset: Option<&str>,
    reader: R,
    mut writer: W,
) -> Result<String, ReadinessError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    if let Some(preset) = preset {
        return Ok(preset.to_string());
    }

    writer
        .write_all(b"Enter your Solana wallet address: ")
        .await
        .map_err(|e| ReadinessError::Io(e.to_string()))?;
    writer
        .flush()
        .await
        .map_err(|e| ReadinessError::Io(e.to_string()))?;

    let mut lines = reader.lines();
    match lines.next_line().await {
        Ok(Some(line)) => Ok(line),
        Ok(None) => Err(ReadinessError::SourceClosed),
        Err(e) => Err(ReadinessError::Io(e.to_string())),
    }
}
