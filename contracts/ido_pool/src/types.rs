//! # Types
//!
//! Shared data structures used across all modules of the IDO pool contract.
//!
//! ## Design decisions
//!
//! ### Pool / PoolDetails split
//!
//! The campaign is stored as two separate ledger entries:
//!
//! - [`Pool`] — caps, window, and status, written at creation and on status
//!   updates.
//! - [`PoolDetails`] — receiver, project-token reference, allocation bounds,
//!   and pricing, attached after creation and overwritable until the pool
//!   reaches a terminal status.
//!
//! Participation is decomposed further (see `storage`): per-participant
//! cumulative totals plus an ordered participant index, so the hot deposit
//! path writes small entries instead of one ever-growing record. The public
//! API reconstructs [`ParticipationAggregate`] on demand.
//!
//! ### Status as a Finite-State Machine
//!
//! [`PoolStatus`] models the campaign lifecycle:
//!
//! ```text
//! Upcoming ──► Ongoing ──► Finished
//!                 │  ▲
//!                 ▼  │
//!               Paused
//! Ongoing ──► Cancelled
//! ```
//!
//! `Finished` and `Cancelled` are terminal. Status updates themselves are
//! unrestricted overwrites by the pool owner; terminality only gates detail
//! edits and fund withdrawal.

use soroban_sdk::{contracttype, Address, Vec};

/// Lifecycle status of the pool.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PoolStatus {
    /// Announced, not yet accepting deposits.
    Upcoming,
    /// Accepting deposits (subject to the time window).
    Ongoing,
    /// Sale over; escrowed funds may be withdrawn to the receiver.
    Finished,
    /// Temporarily halted; may return to Ongoing.
    Paused,
    /// Aborted. Terminal.
    Cancelled,
}

impl PoolStatus {
    /// Terminal statuses freeze the pool configuration.
    pub fn is_terminal(&self) -> bool {
        matches!(self, PoolStatus::Finished | PoolStatus::Cancelled)
    }
}

/// Core campaign record: funding caps, deposit window, lifecycle status.
///
/// Created at most once per deployment. Caps are denominated in the funding
/// asset's smallest unit and satisfy `0 < soft_cap < hard_cap`; the window
/// satisfies `start_time < end_time` (ledger timestamps).
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Pool {
    pub hard_cap: i128,
    pub soft_cap: i128,
    pub start_time: u64,
    pub end_time: u64,
    pub status: PoolStatus,
}

/// Extended campaign configuration, attached after pool creation.
///
/// Overwritable by the pool owner until the pool is Finished or Cancelled.
/// `min_allocation_per_user` / `max_allocation_per_user` bound each
/// participant's cumulative contribution; a zero `max_allocation_per_user`
/// means the bounds are not configured.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolDetails {
    /// Destination for escrowed funds once the pool is Finished.
    pub raised_funds_receiver: Address,
    /// The project's distributed token. Referenced only by address; minting
    /// and distribution happen outside this contract.
    pub project_token_address: Address,
    pub min_allocation_per_user: i128,
    pub max_allocation_per_user: i128,
    pub total_token_provided: i128,
    pub exchange_rate: i128,
    pub token_price: i128,
    pub total_token_sold: i128,
}

/// Cumulative contribution of a single participant.
///
/// One record per unique depositor; repeat deposits accumulate into the
/// same record.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParticipationRecord {
    pub participant: Address,
    pub total_deposited: i128,
}

/// Aggregated view of all contributions, ordered by first deposit.
///
/// Reconstructed from storage on query; always satisfies
/// `count == records.len()` and
/// `total_raised == sum(records[*].total_deposited)`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParticipationAggregate {
    pub count: u32,
    pub records: Vec<ParticipationRecord>,
    pub total_raised: i128,
}

/// Full read-only snapshot returned by `get_complete_pool_details`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CompletePoolDetails {
    pub pool: Pool,
    /// Absent until the pool owner attaches detailed info.
    pub details: Option<PoolDetails>,
    pub participation: ParticipationAggregate,
}
