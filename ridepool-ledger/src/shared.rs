use std::sync::Arc;

use parking_lot::Mutex;
use ridepool_core::{Amount, PartyId};

use crate::ledger::{LedgerResult, RideLedger};
use crate::models::{Ride, RideId};

/// Cloneable handle to a ledger behind a single mutex.
///
/// The lock spans each operation end to end, so the precondition checks,
/// the value transfer and the record update of a reservation commit as one
/// unit, and at most one mutation is in flight at a time. Reads observe
/// fully applied states only.
#[derive(Clone)]
pub struct SharedRideLedger {
    inner: Arc<Mutex<RideLedger>>,
}

impl SharedRideLedger {
    pub fn new(ledger: RideLedger) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ledger)),
        }
    }

    pub fn offer(&self, driver: PartyId, fare: Amount, seat_count: u32) -> LedgerResult<RideId> {
        self.inner.lock().offer(driver, fare, seat_count)
    }

    pub fn reserve(&self, caller: &PartyId, id: RideId, tendered: Amount) -> LedgerResult<()> {
        self.inner.lock().reserve(caller, id, tendered)
    }

    pub fn close(&self, caller: &PartyId, id: RideId) -> LedgerResult<()> {
        self.inner.lock().close(caller, id)
    }

    pub fn list_open(&self) -> Vec<Ride> {
        self.inner.lock().list_open()
    }

    pub fn get_ride(&self, id: RideId) -> LedgerResult<Ride> {
        self.inner.lock().get_ride(id)
    }

    pub fn count(&self) -> u64 {
        self.inner.lock().count()
    }
}
