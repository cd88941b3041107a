use chrono::{DateTime, Utc};
use ridepool_core::{Amount, PartyId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One completed movement of funds between two parties.
///
/// Records are appended in execution order and never rewritten, so the
/// journal doubles as the treasury's audit history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferRecord {
    pub id: Uuid,
    pub from: PartyId,
    pub to: PartyId,
    pub amount: Amount,
    pub transferred_at: DateTime<Utc>,
}

impl TransferRecord {
    pub fn new(from: PartyId, to: PartyId, amount: Amount) -> Self {
        Self {
            id: Uuid::new_v4(),
            from,
            to,
            amount,
            transferred_at: Utc::now(),
        }
    }
}
