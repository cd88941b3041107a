use std::collections::HashMap;

use parking_lot::Mutex;
use ridepool_core::{Amount, PartyId, TransferError, ValueTransfer};
use thiserror::Error;

use crate::journal::TransferRecord;

/// Errors raised by treasury operations outside the [`ValueTransfer`] seam.
#[derive(Debug, Error)]
pub enum TreasuryError {
    #[error("Balance overflow for {party}: {balance} + {deposit} is not representable")]
    BalanceOverflow {
        party: PartyId,
        balance: Amount,
        deposit: Amount,
    },
}

/// In-memory balance book with a transfer journal.
///
/// Parties are not registered up front: an unknown party simply has balance
/// zero, and its first deposit brings it into the map. All state sits behind
/// one mutex, so a transfer's debit and credit land together.
pub struct InMemoryTreasury {
    inner: Mutex<TreasuryInner>,
}

struct TreasuryInner {
    balances: HashMap<PartyId, Amount>,
    journal: Vec<TransferRecord>,
}

impl InMemoryTreasury {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(TreasuryInner {
                balances: HashMap::new(),
                journal: Vec::new(),
            }),
        }
    }

    /// Credit a party from outside the system. Returns the new balance.
    pub fn deposit(&self, party: &PartyId, amount: Amount) -> Result<Amount, TreasuryError> {
        let mut inner = self.inner.lock();

        let balance = inner.balances.get(party).copied().unwrap_or(0);
        let updated = balance
            .checked_add(amount)
            .ok_or_else(|| TreasuryError::BalanceOverflow {
                party: party.clone(),
                balance,
                deposit: amount,
            })?;
        inner.balances.insert(party.clone(), updated);

        tracing::debug!(%party, amount, balance = updated, "deposit credited");
        Ok(updated)
    }

    /// Current balance of a party; zero for parties never seen.
    pub fn balance_of(&self, party: &PartyId) -> Amount {
        self.inner
            .lock()
            .balances
            .get(party)
            .copied()
            .unwrap_or(0)
    }

    /// Sum of all balances. Transfers move funds between parties without
    /// changing this total; only deposits raise it.
    pub fn total_issued(&self) -> u128 {
        self.inner
            .lock()
            .balances
            .values()
            .map(|b| u128::from(*b))
            .sum()
    }

    /// Completed transfers in execution order.
    pub fn history(&self) -> Vec<TransferRecord> {
        self.inner.lock().journal.clone()
    }
}

impl Default for InMemoryTreasury {
    fn default() -> Self {
        Self::new()
    }
}

impl ValueTransfer for InMemoryTreasury {
    fn transfer(&self, from: &PartyId, to: &PartyId, amount: Amount) -> Result<(), TransferError> {
        let mut inner = self.inner.lock();

        let from_balance = inner.balances.get(from).copied().unwrap_or(0);
        if from_balance < amount {
            return Err(TransferError::InsufficientFunds {
                party: from.clone(),
                required: amount,
                available: from_balance,
            });
        }

        // A self-transfer nets to zero but is still funds-checked above and
        // journaled below.
        if from != to {
            let to_balance = inner.balances.get(to).copied().unwrap_or(0);
            let credited =
                to_balance
                    .checked_add(amount)
                    .ok_or_else(|| TransferError::Refused {
                        reason: format!("credit overflows the balance of {to}"),
                    })?;
            inner.balances.insert(from.clone(), from_balance - amount);
            inner.balances.insert(to.clone(), credited);
        }

        inner
            .journal
            .push(TransferRecord::new(from.clone(), to.clone(), amount));

        tracing::info!(%from, %to, amount, "transfer settled");
        Ok(())
    }
}
