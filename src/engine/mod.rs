//! In-process overlay core: shared state, event ingress and HTML rendering.
//! Nothing in here performs network I/O.

pub mod ingress;
pub mod overlay;
pub mod render;

pub use ingress::{Ack, IngressError, TransactionIngress};
pub use overlay::{Applied, OverlayState, OverlayStats, Snapshot};
pub use render::{render, DEFAULT_REFRESH_SECS};
