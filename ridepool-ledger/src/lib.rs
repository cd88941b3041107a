//! Ride marketplace ledger.
//!
//! Drivers offer rides with a fare and a seat count, passengers reserve
//! seats by paying the exact fare, and drivers close their own rides. The
//! [`RideLedger`] owns all records and assigns dense sequential ids;
//! [`SharedRideLedger`] wraps it in a mutex for concurrent callers. Payment
//! goes through the [`ValueTransfer`] seam from `ridepool-core`, so the
//! ledger itself never holds funds.
//!
//! [`ValueTransfer`]: ridepool_core::ValueTransfer

pub mod config;
pub mod ledger;
pub mod models;
pub mod shared;

pub use config::LedgerConfig;
pub use ledger::{LedgerError, LedgerResult, RideLedger};
pub use models::{Ride, RideId};
pub use shared::SharedRideLedger;
