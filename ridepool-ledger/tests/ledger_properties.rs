//! Property-based tests for ledger invariants
//!
//! These tests use proptest to verify the invariants that matter:
//! - Id density: ids are exactly 1..=count, never skipped or reused
//! - Capacity floor: seats_available never goes below zero
//! - Exact payment: a reservation settles exactly the fare or changes nothing
//! - Closure monotonicity: a closed ride never reopens
//! - Open view: listed rides are exactly the open ones, in ascending id order
//! - Money conservation: reservations move funds, never mint or burn them

use std::sync::Arc;

use proptest::prelude::*;
use ridepool_core::{Amount, NoopTransfer, PartyId};
use ridepool_ledger::{LedgerConfig, LedgerError, RideId, RideLedger};
use ridepool_treasury::InMemoryTreasury;

/// Strategy for generating fares
fn fare_strategy() -> impl Strategy<Value = Amount> {
    0u64..10_000
}

#[derive(Debug, Clone)]
enum Action {
    Offer { fare: Amount, seats: u32 },
    Reserve { ride: RideId, tendered: Amount },
    Close { ride: RideId },
}

/// Strategy for generating mixed ledger traffic. Fares and tenders come from
/// a small overlapping set so reservations genuinely succeed sometimes, and
/// ride ids range past what gets created so missing ids are exercised too.
fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        (prop_oneof![Just(100u64), Just(200u64)], 1u32..4)
            .prop_map(|(fare, seats)| Action::Offer { fare, seats }),
        (1u64..12, prop_oneof![Just(100u64), Just(200u64), Just(300u64)])
            .prop_map(|(ride, tendered)| Action::Reserve { ride, tendered }),
        (1u64..12).prop_map(|ride| Action::Close { ride }),
    ]
}

fn driver() -> PartyId {
    PartyId::new("driver-0")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: ids stay dense no matter how many offers get rejected
    #[test]
    fn prop_ids_stay_dense(offers in prop::collection::vec((fare_strategy(), 0u32..6), 1..30)) {
        let mut ledger = RideLedger::new(LedgerConfig::default(), Arc::new(NoopTransfer));

        let mut expected_next = 1u64;
        for (fare, seats) in offers {
            match ledger.offer(driver(), fare, seats) {
                Ok(id) => {
                    prop_assert_eq!(id, expected_next);
                    expected_next += 1;
                }
                Err(err) => {
                    prop_assert!(seats == 0, "only zero-seat offers are rejected, got {}", err);
                }
            }
        }

        let count = ledger.count();
        prop_assert_eq!(count, expected_next - 1);
        for id in 1..=count {
            prop_assert!(ledger.get_ride(id).is_ok());
        }
        prop_assert!(matches!(ledger.get_ride(count + 1), Err(LedgerError::NotFound(_))));
    }

    /// Property: a mistendered reservation changes nothing at all
    #[test]
    fn prop_wrong_amount_never_mutates(
        fare in 1u64..10_000,
        offset in 1u64..1_000,
        overpay in any::<bool>(),
        seats in 1u32..6,
    ) {
        let treasury = Arc::new(InMemoryTreasury::new());
        let mut ledger = RideLedger::new(LedgerConfig::default(), treasury.clone());
        let rider = PartyId::new("rider-0");
        treasury.deposit(&rider, 1_000_000).unwrap();

        let id = ledger.offer(driver(), fare, seats).unwrap();
        let tendered = if overpay { fare + offset } else { fare.saturating_sub(offset) };

        let result = ledger.reserve(&rider, id, tendered);

        prop_assert!(
            matches!(result, Err(LedgerError::WrongAmount { .. })),
            "expected WrongAmount, got {:?}",
            result
        );
        prop_assert_eq!(ledger.get_ride(id).unwrap().seats_available, seats);
        prop_assert_eq!(treasury.balance_of(&rider), 1_000_000);
        prop_assert!(treasury.history().is_empty());
    }

    /// Property: seats never go below zero and every success is accounted
    #[test]
    fn prop_capacity_floor(
        seats in 1u32..6,
        fare in 0u64..5_000,
        attempts in prop::collection::vec(any::<bool>(), 1..20),
    ) {
        let treasury = Arc::new(InMemoryTreasury::new());
        let mut ledger = RideLedger::new(LedgerConfig::default(), treasury.clone());
        let id = ledger.offer(driver(), fare, seats).unwrap();

        let mut successes = 0u32;
        for (i, exact) in attempts.iter().enumerate() {
            let rider = PartyId::new(format!("rider-{i}"));
            treasury.deposit(&rider, 100_000).unwrap();

            let tendered = if *exact { fare } else { fare + 1 };
            match ledger.reserve(&rider, id, tendered) {
                Ok(()) => {
                    successes += 1;
                    prop_assert!(*exact);
                }
                Err(LedgerError::NoCapacity(_)) => prop_assert_eq!(successes, seats),
                Err(LedgerError::WrongAmount { .. }) => prop_assert!(!*exact),
                Err(other) => prop_assert!(false, "unexpected error: {}", other),
            }
        }

        let ride = ledger.get_ride(id).unwrap();
        prop_assert!(successes <= seats);
        prop_assert_eq!(ride.seats_available, seats - successes);
        prop_assert_eq!(treasury.balance_of(&driver()), u64::from(successes) * fare);
    }

    /// Property: reservations move funds without minting or burning any
    #[test]
    fn prop_transfers_conserve_money(
        fare in 1u64..5_000,
        seats in 1u32..6,
        deposits in prop::collection::vec(5_000u64..20_000, 2..8),
    ) {
        let treasury = Arc::new(InMemoryTreasury::new());
        let mut ledger = RideLedger::new(LedgerConfig::default(), treasury.clone());

        let mut issued: u128 = 0;
        let riders: Vec<PartyId> = deposits
            .iter()
            .enumerate()
            .map(|(i, amount)| {
                let rider = PartyId::new(format!("rider-{i}"));
                treasury.deposit(&rider, *amount).unwrap();
                issued += u128::from(*amount);
                rider
            })
            .collect();

        let id = ledger.offer(driver(), fare, seats).unwrap();
        for rider in &riders {
            let _ = ledger.reserve(rider, id, fare);
        }

        // Every rider could afford a seat, so exactly min(seats, riders) settled
        let settled = treasury.history().len() as u64;
        prop_assert_eq!(settled, u64::from(seats).min(riders.len() as u64));
        prop_assert_eq!(treasury.balance_of(&driver()), settled * fare);
        prop_assert_eq!(treasury.total_issued(), issued);
    }

    /// Property: closure is permanent and the ride never resurfaces
    #[test]
    fn prop_closure_is_permanent(
        fare in 0u64..5_000,
        seats in 1u32..6,
        reserve_after in 0usize..4,
    ) {
        let mut ledger = RideLedger::new(LedgerConfig::default(), Arc::new(NoopTransfer));
        let id = ledger.offer(driver(), fare, seats).unwrap();

        ledger.close(&driver(), id).unwrap();

        for i in 0..reserve_after {
            let rider = PartyId::new(format!("rider-{i}"));
            let _ = ledger.reserve(&rider, id, fare);
            prop_assert!(ledger.get_ride(id).unwrap().is_closed);
            prop_assert!(ledger.list_open().iter().all(|ride| ride.id != id));
        }

        prop_assert!(matches!(ledger.close(&driver(), id), Err(LedgerError::AlreadyClosed(_))));
    }

    /// Property: the open view lists exactly the open rides, ascending
    #[test]
    fn prop_open_view_matches_records(actions in prop::collection::vec(action_strategy(), 1..40)) {
        let mut ledger = RideLedger::new(LedgerConfig::default(), Arc::new(NoopTransfer));
        let rider = PartyId::new("rider-0");

        for action in actions {
            match action {
                Action::Offer { fare, seats } => {
                    ledger.offer(driver(), fare, seats).unwrap();
                }
                Action::Reserve { ride, tendered } => {
                    let _ = ledger.reserve(&rider, ride, tendered);
                }
                Action::Close { ride } => {
                    let _ = ledger.close(&driver(), ride);
                }
            }
        }

        let open = ledger.list_open();
        for pair in open.windows(2) {
            prop_assert!(pair[0].id < pair[1].id);
        }

        let open_ids: Vec<RideId> = open.iter().map(|ride| ride.id).collect();
        for id in 1..=ledger.count() {
            let ride = ledger.get_ride(id).unwrap();
            prop_assert_eq!(open_ids.contains(&id), ride.seats_available > 0 && !ride.is_closed);
        }
    }
}
