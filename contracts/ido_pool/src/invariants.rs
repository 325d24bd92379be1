#![allow(dead_code)]

extern crate std;

use crate::types::{ParticipationAggregate, Pool};

/// INV-1: Cap ordering — `0 < soft_cap < hard_cap` for every stored pool.
pub fn assert_caps_well_formed(pool: &Pool) {
    assert!(
        pool.soft_cap > 0 && pool.soft_cap < pool.hard_cap,
        "INV-1 violated: caps out of order (soft {}, hard {})",
        pool.soft_cap,
        pool.hard_cap
    );
}

/// INV-2: Window ordering — `start_time < end_time`.
pub fn assert_window_well_formed(pool: &Pool) {
    assert!(
        pool.start_time < pool.end_time,
        "INV-2 violated: window inverted ({} >= {})",
        pool.start_time,
        pool.end_time
    );
}

/// INV-3: Ledger consistency — the aggregate total equals the sum of the
/// per-participant records and the count equals the record count.
pub fn assert_aggregate_consistent(aggregate: &ParticipationAggregate) {
    let mut sum: i128 = 0;
    for record in aggregate.records.iter() {
        assert!(
            record.total_deposited > 0,
            "INV-3 violated: participant {:?} has non-positive total {}",
            record.participant,
            record.total_deposited
        );
        sum += record.total_deposited;
    }
    assert_eq!(
        aggregate.total_raised, sum,
        "INV-3 violated: total_raised {} != sum of records {}",
        aggregate.total_raised, sum
    );
    assert_eq!(
        aggregate.count,
        aggregate.records.len(),
        "INV-3 violated: count {} != records.len() {}",
        aggregate.count,
        aggregate.records.len()
    );
}

/// INV-4: No duplicate participants in the ledger.
pub fn assert_no_duplicate_records(aggregate: &ParticipationAggregate) {
    let records = &aggregate.records;
    for i in 0..records.len() {
        for j in (i + 1)..records.len() {
            assert_ne!(
                records.get_unchecked(i).participant,
                records.get_unchecked(j).participant,
                "INV-4 violated: duplicate record for one participant"
            );
        }
    }
}

/// INV-5: Deposit accumulation — after a deposit of `amount`, the
/// participant's cumulative total grows by exactly `amount`.
pub fn assert_deposit_accumulates(total_before: i128, total_after: i128, amount: i128) {
    assert_eq!(
        total_after,
        total_before + amount,
        "INV-5 violated: {} + {} != {}",
        total_before,
        amount,
        total_after
    );
}

/// INV-6: Participant count never decreases; it grows only on a first
/// deposit from a new address.
pub fn assert_count_monotonic(count_before: u32, count_after: u32) {
    assert!(
        count_after >= count_before,
        "INV-6 violated: count decreased from {} to {}",
        count_before,
        count_after
    );
}

/// INV-7: The raised total never exceeds the hard cap.
pub fn assert_within_hard_cap(pool: &Pool, aggregate: &ParticipationAggregate) {
    assert!(
        aggregate.total_raised <= pool.hard_cap,
        "INV-7 violated: total_raised {} exceeds hard cap {}",
        aggregate.total_raised,
        pool.hard_cap
    );
}

/// Run all stateless pool + ledger invariants against a snapshot.
pub fn assert_all_snapshot_invariants(pool: &Pool, aggregate: &ParticipationAggregate) {
    assert_caps_well_formed(pool);
    assert_window_well_formed(pool);
    assert_aggregate_consistent(aggregate);
    assert_no_duplicate_records(aggregate);
    assert_within_hard_cap(pool, aggregate);
}
