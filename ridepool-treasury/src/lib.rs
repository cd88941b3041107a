//! In-memory settlement backend for the ride ledger.
//!
//! Keeps a balance per party and a journal of every completed transfer, and
//! plugs into the ledger through the [`ValueTransfer`] seam from
//! `ridepool-core`.
//!
//! [`ValueTransfer`]: ridepool_core::ValueTransfer

pub mod journal;
pub mod treasury;

pub use journal::TransferRecord;
pub use treasury::{InMemoryTreasury, TreasuryError};
