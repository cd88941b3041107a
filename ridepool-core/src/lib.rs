pub mod identity;
pub mod transfer;

pub use identity::PartyId;
pub use transfer::{NoopTransfer, TransferError, ValueTransfer};

/// Monetary amount in the smallest denomination of the deployment's currency.
///
/// The ledger only ever compares and moves whole units; converting to a
/// human-readable figure is the display layer's job.
pub type Amount = u64;
