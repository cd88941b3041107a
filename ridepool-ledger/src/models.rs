use ridepool_core::{Amount, PartyId};
use serde::{Deserialize, Serialize};

/// Ride identifier. Ids are dense: 1 for the first ride ever offered, then
/// 2, and so on with no gaps and no reuse.
pub type RideId = u64;

/// One offered trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ride {
    pub id: RideId,
    /// Party that offered the ride; the only one allowed to close it.
    pub driver: PartyId,
    /// Exact amount a reservation must tender, fixed at creation.
    pub fare: Amount,
    pub seats_available: u32,
    pub is_closed: bool,
}

impl Ride {
    /// Whether the ride still belongs in the open view.
    ///
    /// Capacity and closure are independent: either running out of seats or
    /// being closed removes a ride from the view, and neither implies the
    /// other.
    pub fn is_open(&self) -> bool {
        self.seats_available > 0 && !self.is_closed
    }
}
