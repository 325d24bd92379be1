//! # Events
//!
//! Typed event payloads published by the contract, one struct per event so
//! off-chain consumers (and tests) can decode `env.events()` data without
//! guessing tuple shapes. Topics are short symbols; the pool is a singleton,
//! so no identifier topic is needed.

use soroban_sdk::{contracttype, symbol_short, Address, Env, Vec};

use crate::types::PoolStatus;

/// `("granted",)` — an address received the PoolOwner role.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolOwnerGranted {
    pub account: Address,
}

/// `("created",)` — the pool was created.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolCreated {
    pub hard_cap: i128,
    pub soft_cap: i128,
    pub start_time: u64,
    pub end_time: u64,
    pub status: PoolStatus,
}

/// `("details",)` — detailed pool configuration set or overwritten.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolDetailsUpdated {
    pub raised_funds_receiver: Address,
    pub project_token_address: Address,
    pub min_allocation_per_user: i128,
    pub max_allocation_per_user: i128,
}

/// `("status",)` — pool status overwritten by the owner.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StatusChanged {
    pub old_status: PoolStatus,
    pub new_status: PoolStatus,
}

/// `("whitelist",)` — a batch of addresses was approved.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AddressesWhitelisted {
    pub addresses: Vec<Address>,
}

/// `("deposited",)` — a participant's contribution was recorded.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Deposited {
    pub participant: Address,
    pub amount: i128,
    /// The participant's cumulative total after this deposit.
    pub total_deposited: i128,
}

/// `("withdrawn",)` — escrowed funds paid out to the receiver.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundsWithdrawn {
    pub receiver: Address,
    pub amount: i128,
}

pub fn pool_owner_granted(env: &Env, event: PoolOwnerGranted) {
    env.events().publish((symbol_short!("granted"),), event);
}

pub fn pool_created(env: &Env, event: PoolCreated) {
    env.events().publish((symbol_short!("created"),), event);
}

pub fn pool_details_updated(env: &Env, event: PoolDetailsUpdated) {
    env.events().publish((symbol_short!("details"),), event);
}

pub fn status_changed(env: &Env, event: StatusChanged) {
    env.events().publish((symbol_short!("status"),), event);
}

pub fn addresses_whitelisted(env: &Env, event: AddressesWhitelisted) {
    env.events().publish((symbol_short!("whitelist"),), event);
}

pub fn deposited(env: &Env, event: Deposited) {
    env.events().publish((symbol_short!("deposited"),), event);
}

pub fn funds_withdrawn(env: &Env, event: FundsWithdrawn) {
    env.events().publish((symbol_short!("withdrawn"),), event);
}
