//! # Storage
//!
//! Typed helpers over Soroban's two storage tiers used by the IDO pool:
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key            | Type          | Description                            |
//! |----------------|---------------|----------------------------------------|
//! | `FundingToken` | `Address`     | Asset participants deposit (set at init) |
//! | `Pool`         | `Pool`        | Caps, window, status                   |
//! | `PoolDetails`  | `PoolDetails` | Receiver, token ref, bounds, pricing   |
//! | `TotalRaised`  | `i128`        | Running sum of all deposits            |
//! | `Withdrawn`    | `bool`        | Marker: escrow already paid out        |
//!
//! Instance TTL is bumped by **7 days** whenever it falls below 1 day remaining.
//!
//! ## Persistent storage (per-entry TTL)
//!
//! | Key                      | Type           | Description                      |
//! |--------------------------|----------------|----------------------------------|
//! | `Whitelisted(addr)`      | `bool`         | Membership marker                |
//! | `Participation(addr)`    | `i128`         | Cumulative deposit per address   |
//! | `Participants`           | `Vec<Address>` | Depositors ordered by first deposit |
//!
//! Persistent TTL is bumped by **30 days** whenever it falls below 7 days
//! remaining.
//!
//! ## Why decompose the participation ledger?
//!
//! Deposits are the high-frequency write path. Rewriting one ever-growing
//! record vector on every deposit is wasteful; a repeat deposit here touches
//! only the participant's own `i128` entry and the running total. The ordered
//! `Participants` index is appended only on a depositor's first contribution,
//! and the full aggregate is reconstructed on query.

use soroban_sdk::{contracttype, Address, Env, Vec};

use crate::types::{Pool, PoolDetails};

// ── TTL Constants ────────────────────────────────────────────────────

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

/// Instance storage: bump by 7 days when below 1 day remaining.
const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

/// Persistent storage: bump by 30 days when below 7 days remaining.
const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

// ── Storage Keys ─────────────────────────────────────────────────────

/// All contract storage keys except role grants, which live in `rbac`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Asset pulled from participants on deposit (Instance).
    FundingToken,
    /// The single campaign record (Instance).
    Pool,
    /// Extended campaign configuration (Instance).
    PoolDetails,
    /// Running sum of all recorded deposits (Instance).
    TotalRaised,
    /// Set once the escrow has been paid out to the receiver (Instance).
    Withdrawn,
    /// Approved participant marker (Persistent).
    Whitelisted(Address),
    /// Cumulative deposit keyed by participant (Persistent).
    Participation(Address),
    /// Depositor addresses ordered by first deposit (Persistent).
    Participants,
}

// ── Instance Storage Helpers ─────────────────────────────────────────

/// Extend instance storage TTL if it falls below the threshold.
fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

/// Record the funding asset address. Written once at init.
pub fn set_funding_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::FundingToken, token);
    bump_instance(env);
}

/// The funding asset participants deposit.
/// Panics if the contract has not been initialised.
pub fn funding_token(env: &Env) -> Address {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::FundingToken)
        .expect("not initialised")
}

pub fn has_pool(env: &Env) -> bool {
    bump_instance(env);
    env.storage().instance().has(&DataKey::Pool)
}

pub fn save_pool(env: &Env, pool: &Pool) {
    env.storage().instance().set(&DataKey::Pool, pool);
    bump_instance(env);
}

/// Load the campaign record, or `None` before `create_pool`.
pub fn load_pool(env: &Env) -> Option<Pool> {
    bump_instance(env);
    env.storage().instance().get(&DataKey::Pool)
}

pub fn save_pool_details(env: &Env, details: &PoolDetails) {
    env.storage().instance().set(&DataKey::PoolDetails, details);
    bump_instance(env);
}

/// Load the extended configuration, or `None` before it is attached.
pub fn load_pool_details(env: &Env) -> Option<PoolDetails> {
    bump_instance(env);
    env.storage().instance().get(&DataKey::PoolDetails)
}

/// Running sum of all recorded deposits (0 before the first deposit).
pub fn total_raised(env: &Env) -> i128 {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::TotalRaised)
        .unwrap_or(0)
}

pub fn set_total_raised(env: &Env, total: i128) {
    env.storage().instance().set(&DataKey::TotalRaised, &total);
    bump_instance(env);
}

/// Mark the escrow as paid out. One-shot; checked by the withdrawal path.
pub fn set_withdrawn(env: &Env) {
    env.storage().instance().set(&DataKey::Withdrawn, &true);
    bump_instance(env);
}

pub fn is_withdrawn(env: &Env) -> bool {
    bump_instance(env);
    env.storage().instance().has(&DataKey::Withdrawn)
}

// ── Persistent Storage Helpers ───────────────────────────────────────

/// Extend the TTL for a persistent storage key.
fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

/// Add `address` to the whitelist. Idempotent; duplicates are ignored.
pub fn add_to_whitelist(env: &Env, address: &Address) {
    let key = DataKey::Whitelisted(address.clone());
    env.storage().persistent().set(&key, &true);
    bump_persistent(env, &key);
}

pub fn is_whitelisted(env: &Env, address: &Address) -> bool {
    let key = DataKey::Whitelisted(address.clone());
    if env.storage().persistent().has(&key) {
        bump_persistent(env, &key);
        true
    } else {
        false
    }
}

/// Cumulative deposit for `participant`, or `None` if they have never
/// deposited. A recorded entry is always positive, so `None` doubles as the
/// first-deposit signal.
pub fn load_participation(env: &Env, participant: &Address) -> Option<i128> {
    let key = DataKey::Participation(participant.clone());
    let total: Option<i128> = env.storage().persistent().get(&key);
    if total.is_some() {
        bump_persistent(env, &key);
    }
    total
}

pub fn save_participation(env: &Env, participant: &Address, total: i128) {
    let key = DataKey::Participation(participant.clone());
    env.storage().persistent().set(&key, &total);
    bump_persistent(env, &key);
}

/// Depositors ordered by first deposit (empty before any deposit).
pub fn participants(env: &Env) -> Vec<Address> {
    let key = DataKey::Participants;
    if let Some(list) = env.storage().persistent().get(&key) {
        bump_persistent(env, &key);
        list
    } else {
        Vec::new(env)
    }
}

/// Append a first-time depositor to the ordered index.
pub fn push_participant(env: &Env, participant: &Address) {
    let key = DataKey::Participants;
    let mut list = participants(env);
    list.push_back(participant.clone());
    env.storage().persistent().set(&key, &list);
    bump_persistent(env, &key);
}
