//! Domain types for the overlay: amounts, the tracked wallet, and inbound
//! transaction events.

pub mod decimal;
pub mod event;
pub mod primitives;

pub use decimal::{Decimal, MINOR_UNIT_SCALE};
pub use event::{MalformedEvent, TransactionEvent};
pub use primitives::{Action, WalletAddress};
