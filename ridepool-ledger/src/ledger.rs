use std::collections::BTreeMap;
use std::sync::Arc;

use ridepool_core::{Amount, PartyId, TransferError, ValueTransfer};

use crate::config::LedgerConfig;
use crate::models::{Ride, RideId};

pub type LedgerResult<T> = Result<T, LedgerError>;

/// Manages ride records and their lifecycle.
///
/// Every mutating operation checks all of its preconditions before touching
/// any state, so a failed call leaves the ledger exactly as it found it.
/// Payment is delegated to the [`ValueTransfer`] collaborator and settles
/// before any record changes.
pub struct RideLedger {
    config: LedgerConfig,
    transfer: Arc<dyn ValueTransfer>,
    rides: BTreeMap<RideId, Ride>,
    created: u64,
}

impl RideLedger {
    pub fn new(config: LedgerConfig, transfer: Arc<dyn ValueTransfer>) -> Self {
        Self {
            config,
            transfer,
            rides: BTreeMap::new(),
            created: 0,
        }
    }

    /// Record a new ride offer; the caller becomes its driver.
    ///
    /// Returns the assigned id: 1 for the first ride ever recorded, counting
    /// up densely. The counter only moves on success, so rejected offers
    /// never burn ids.
    pub fn offer(
        &mut self,
        driver: PartyId,
        fare: Amount,
        seat_count: u32,
    ) -> LedgerResult<RideId> {
        if seat_count < 1 {
            return Err(LedgerError::InvalidInput(
                "seat count must be at least 1".to_string(),
            ));
        }
        if let Some(cap) = self.config.max_seat_count {
            if seat_count > cap {
                return Err(LedgerError::InvalidInput(format!(
                    "seat count {seat_count} exceeds the configured cap of {cap}"
                )));
            }
        }
        if self.config.require_nonzero_fare && fare == 0 {
            return Err(LedgerError::InvalidInput(
                "zero fares are disabled by configuration".to_string(),
            ));
        }

        let id = self.created + 1;
        self.rides.insert(
            id,
            Ride {
                id,
                driver: driver.clone(),
                fare,
                seats_available: seat_count,
                is_closed: false,
            },
        );
        self.created = id;

        tracing::info!(ride_id = id, %driver, fare, seat_count, "ride offered");
        Ok(id)
    }

    /// Reserve exactly one seat, paying the exact fare to the driver.
    ///
    /// Preconditions are checked in a fixed order: existence, capacity,
    /// amount. Closure is deliberately not among them; remaining seats on a
    /// closed ride stay reservable even though the open view no longer
    /// advertises them.
    pub fn reserve(&mut self, caller: &PartyId, id: RideId, tendered: Amount) -> LedgerResult<()> {
        let ride = self.rides.get_mut(&id).ok_or(LedgerError::NotFound(id))?;

        if ride.seats_available == 0 {
            return Err(LedgerError::NoCapacity(id));
        }
        if tendered != ride.fare {
            return Err(LedgerError::WrongAmount {
                tendered,
                fare: ride.fare,
            });
        }

        // Payment settles first; the decrement below cannot fail, so the
        // two commit together or not at all.
        self.transfer.transfer(caller, &ride.driver, tendered)?;
        ride.seats_available -= 1;

        tracing::info!(
            ride_id = id,
            %caller,
            amount = tendered,
            seats_left = ride.seats_available,
            "seat reserved"
        );
        Ok(())
    }

    /// Mark a ride closed. Only its driver may do this, and only once.
    ///
    /// Closure is a terminal marker: remaining capacity is untouched and no
    /// funds move.
    pub fn close(&mut self, caller: &PartyId, id: RideId) -> LedgerResult<()> {
        let ride = self.rides.get_mut(&id).ok_or(LedgerError::NotFound(id))?;

        if *caller != ride.driver {
            return Err(LedgerError::Unauthorized {
                caller: caller.clone(),
                driver: ride.driver.clone(),
            });
        }
        if ride.is_closed {
            return Err(LedgerError::AlreadyClosed(id));
        }

        ride.is_closed = true;

        tracing::info!(ride_id = id, %caller, "ride closed");
        Ok(())
    }

    /// Every ride still worth advertising, in ascending id order.
    pub fn list_open(&self) -> Vec<Ride> {
        self.rides
            .values()
            .filter(|ride| ride.is_open())
            .cloned()
            .collect()
    }

    /// Fetch one ride by id, closed and exhausted ones included.
    pub fn get_ride(&self, id: RideId) -> LedgerResult<Ride> {
        self.rides
            .get(&id)
            .cloned()
            .ok_or(LedgerError::NotFound(id))
    }

    /// Number of rides ever recorded. Never decreases.
    pub fn count(&self) -> u64 {
        self.created
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Ride not found: {0}")]
    NotFound(RideId),

    #[error("No seats available on ride {0}")]
    NoCapacity(RideId),

    #[error("Wrong amount: tendered {tendered}, fare is {fare}")]
    WrongAmount { tendered: Amount, fare: Amount },

    #[error("Only the driver may close a ride: {caller} is not {driver}")]
    Unauthorized { caller: PartyId, driver: PartyId },

    #[error("Ride {0} is already closed")]
    AlreadyClosed(RideId),

    #[error("Payment failed: {0}")]
    Transfer(#[from] TransferError),
}
