use crate::{identity::PartyId, Amount};

/// Errors raised by a value-transfer mechanism.
///
/// A failed transfer always leaves both parties' funds where they were; the
/// ledger relies on that to keep its own records consistent.
#[derive(Debug, Clone, thiserror::Error)]
pub enum TransferError {
    #[error("Insufficient funds for {party}: required {required}, available {available}")]
    InsufficientFunds {
        party: PartyId,
        required: Amount,
        available: Amount,
    },

    #[error("Transfer refused: {reason}")]
    Refused { reason: String },
}

/// Moves a monetary amount between two parties.
///
/// The ledger invokes this inside the same critical section as its own state
/// mutation, so implementations must complete synchronously: either the full
/// amount moved, or an error is returned and nothing moved. Retries, queues
/// and confirmation flows belong to the host, not here.
pub trait ValueTransfer: Send + Sync {
    /// Transfer `amount` from `from` to `to`
    fn transfer(&self, from: &PartyId, to: &PartyId, amount: Amount) -> Result<(), TransferError>;
}

/// Transfer mechanism that moves nothing and always succeeds.
///
/// For fare-less deployments and tests that don't exercise money movement.
pub struct NoopTransfer;

impl ValueTransfer for NoopTransfer {
    fn transfer(&self, from: &PartyId, to: &PartyId, amount: Amount) -> Result<(), TransferError> {
        tracing::debug!(%from, %to, amount, "noop transfer accepted");
        Ok(())
    }
}
