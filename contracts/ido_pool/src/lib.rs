//! # IDO Pool Contract
//!
//! A capped, permissioned fundraising pool: one campaign per deployment,
//! deposits restricted to whitelisted participants inside a time window,
//! with hard-cap and per-user allocation enforcement and an auditable
//! participation ledger.
//!
//! | Phase      | Entry Point(s)                                      |
//! |------------|-----------------------------------------------------|
//! | Bootstrap  | [`IdoPool::init`]                                   |
//! | Role admin | `grant_pool_owner_role`, `has_role`                 |
//! | Pool setup | `create_pool`, `add_pool_detailed_info`, `update_pool_status` |
//! | Whitelist  | `add_addresses_to_whitelist`, `is_whitelisted`      |
//! | Funding    | [`IdoPool::deposit`]                                |
//! | Payout     | [`IdoPool::withdraw_raised_funds`]                  |
//! | Queries    | [`IdoPool::get_complete_pool_details`]              |
//!
//! ## Architecture
//!
//! Authorization is fully delegated to [`rbac`]. Storage access is fully
//! delegated to [`storage`]. This file contains **only** the public entry
//! points and event emissions — no business logic lives here directly.
//!
//! Every failure path is a `panic_with_error!`, so a rejected call commits
//! nothing: the host either applies all storage writes and transfers of an
//! invocation or none of them.

#![no_std]

use soroban_sdk::{
    contract, contracterror, contractimpl, panic_with_error, token, Address, Env, Vec,
};

pub mod events;
pub mod rbac;
mod storage;
mod types;

#[cfg(test)]
mod invariants;
#[cfg(test)]
mod test_deposits;

use events::{
    AddressesWhitelisted, Deposited, FundsWithdrawn, PoolCreated, PoolDetailsUpdated,
    PoolOwnerGranted, StatusChanged,
};
pub use rbac::Role;
pub use types::{
    CompletePoolDetails, ParticipationAggregate, ParticipationRecord, Pool, PoolDetails,
    PoolStatus,
};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AccessDenied         = 1,
    AlreadyInitialized   = 2,
    AlreadyExists        = 3,
    InvalidParameters    = 4,
    InvalidPoolState     = 5,
    OutOfWindow          = 6,
    NotWhitelisted       = 7,
    AllocationOutOfRange = 8,
    CapExceeded          = 9,
}

#[contract]
pub struct IdoPool;

#[contractimpl]
impl IdoPool {
    // ─────────────────────────────────────────────────────────
    // Initialisation
    // ─────────────────────────────────────────────────────────

    /// Initialise the contract: fix the admin identity and the funding
    /// asset participants will deposit.
    ///
    /// Must be called exactly once immediately after deployment.
    /// Subsequent calls panic with `Error::AlreadyInitialized`.
    ///
    /// - `admin` is granted the `Admin` role and must sign the transaction.
    /// - `funding_token` is the asset pulled from participants on deposit
    ///   (the native-asset contract in production).
    pub fn init(env: Env, admin: Address, funding_token: Address) {
        admin.require_auth();
        rbac::init_admin(&env, &admin);
        storage::set_funding_token(&env, &funding_token);
    }

    // ─────────────────────────────────────────────────────────
    // Role management
    // ─────────────────────────────────────────────────────────

    /// Grant the `PoolOwner` role to `target`.
    ///
    /// - `caller` must hold `Admin`.
    /// - Idempotent: granting an existing owner again succeeds without
    ///   effect (and without a duplicate event).
    pub fn grant_pool_owner_role(env: Env, caller: Address, target: Address) {
        caller.require_auth();
        rbac::require_admin(&env, &caller);
        if rbac::grant_pool_owner(&env, &target) {
            events::pool_owner_granted(&env, PoolOwnerGranted { account: target });
        }
    }

    /// Return `true` if `address` holds `role`.
    pub fn has_role(env: Env, address: Address, role: Role) -> bool {
        rbac::has_role(&env, &address, role)
    }

    // ─────────────────────────────────────────────────────────
    // Pool lifecycle
    // ─────────────────────────────────────────────────────────

    /// Create the pool. At most one pool exists per deployment.
    ///
    /// - `caller` must hold `PoolOwner`.
    /// - Fails with `AlreadyExists` if the pool was already created.
    /// - Fails with `InvalidParameters` unless `0 < soft_cap < hard_cap`
    ///   and `start_time < end_time`.
    ///
    /// `initial_status` is taken as-is; deployments that want an
    /// immediately open sale create directly into `Ongoing`.
    pub fn create_pool(
        env: Env,
        caller: Address,
        hard_cap: i128,
        soft_cap: i128,
        start_time: u64,
        end_time: u64,
        initial_status: PoolStatus,
    ) {
        caller.require_auth();
        rbac::require_pool_owner(&env, &caller);

        if storage::has_pool(&env) {
            panic_with_error!(&env, Error::AlreadyExists);
        }
        if soft_cap <= 0 || soft_cap >= hard_cap {
            panic_with_error!(&env, Error::InvalidParameters);
        }
        if start_time >= end_time {
            panic_with_error!(&env, Error::InvalidParameters);
        }

        let pool = Pool {
            hard_cap,
            soft_cap,
            start_time,
            end_time,
            status: initial_status,
        };
        storage::save_pool(&env, &pool);

        events::pool_created(
            &env,
            PoolCreated {
                hard_cap,
                soft_cap,
                start_time,
                end_time,
                status: initial_status,
            },
        );
    }

    /// Attach (or overwrite) the detailed pool configuration: funds
    /// receiver, project-token reference, per-user allocation bounds,
    /// and pricing figures.
    ///
    /// - `caller` must hold `PoolOwner`.
    /// - Fails with `InvalidPoolState` if the pool does not exist yet or
    ///   is Finished/Cancelled.
    /// - Fails with `InvalidParameters` if the allocation bounds are
    ///   inverted or negative.
    #[allow(clippy::too_many_arguments)]
    pub fn add_pool_detailed_info(
        env: Env,
        caller: Address,
        raised_funds_receiver: Address,
        project_token_address: Address,
        min_allocation_per_user: i128,
        max_allocation_per_user: i128,
        total_token_provided: i128,
        exchange_rate: i128,
        token_price: i128,
        total_token_sold: i128,
    ) {
        caller.require_auth();
        rbac::require_pool_owner(&env, &caller);

        let pool = match storage::load_pool(&env) {
            Some(pool) => pool,
            None => panic_with_error!(&env, Error::InvalidPoolState),
        };
        if pool.status.is_terminal() {
            panic_with_error!(&env, Error::InvalidPoolState);
        }
        if min_allocation_per_user < 0 || max_allocation_per_user < min_allocation_per_user {
            panic_with_error!(&env, Error::InvalidParameters);
        }

        let details = PoolDetails {
            raised_funds_receiver: raised_funds_receiver.clone(),
            project_token_address: project_token_address.clone(),
            min_allocation_per_user,
            max_allocation_per_user,
            total_token_provided,
            exchange_rate,
            token_price,
            total_token_sold,
        };
        storage::save_pool_details(&env, &details);

        events::pool_details_updated(
            &env,
            PoolDetailsUpdated {
                raised_funds_receiver,
                project_token_address,
                min_allocation_per_user,
                max_allocation_per_user,
            },
        );
    }

    /// Overwrite the pool status.
    ///
    /// - `caller` must hold `PoolOwner`.
    /// - Fails with `InvalidPoolState` if the pool does not exist yet.
    ///
    /// The write is unconditional: no transition graph is enforced, so the
    /// owner can e.g. pause and resume an ongoing sale, or re-open a
    /// paused one. Deposits only flow while the status is `Ongoing`.
    pub fn update_pool_status(env: Env, caller: Address, new_status: PoolStatus) {
        caller.require_auth();
        rbac::require_pool_owner(&env, &caller);

        let mut pool = match storage::load_pool(&env) {
            Some(pool) => pool,
            None => panic_with_error!(&env, Error::InvalidPoolState),
        };
        let old_status = pool.status;
        pool.status = new_status;
        storage::save_pool(&env, &pool);

        events::status_changed(
            &env,
            StatusChanged {
                old_status,
                new_status,
            },
        );
    }

    // ─────────────────────────────────────────────────────────
    // Whitelist
    // ─────────────────────────────────────────────────────────

    /// Approve a batch of participant addresses.
    ///
    /// - `caller` must hold `PoolOwner`.
    /// - Set union: duplicates (within the batch or with earlier batches)
    ///   are ignored. There is no removal operation.
    pub fn add_addresses_to_whitelist(env: Env, caller: Address, addresses: Vec<Address>) {
        caller.require_auth();
        rbac::require_pool_owner(&env, &caller);

        for address in addresses.iter() {
            storage::add_to_whitelist(&env, &address);
        }

        events::addresses_whitelisted(&env, AddressesWhitelisted { addresses });
    }

    /// Return `true` if `address` may deposit.
    pub fn is_whitelisted(env: Env, address: Address) -> bool {
        storage::is_whitelisted(&env, &address)
    }

    // ─────────────────────────────────────────────────────────
    // Deposits
    // ─────────────────────────────────────────────────────────

    /// Contribute `amount` of the funding asset to the pool.
    ///
    /// The participant transfers value straight into the contract; the
    /// funds are escrowed here until [`IdoPool::withdraw_raised_funds`].
    ///
    /// Validation order:
    /// 1. `InvalidPoolState` unless the pool exists and is `Ongoing`.
    /// 2. `OutOfWindow` unless `start_time <= now <= end_time`.
    /// 3. `NotWhitelisted` unless the participant is approved.
    /// 4. `AllocationOutOfRange` if the participant's cumulative total
    ///    would leave the configured `[min, max]` allocation bounds.
    /// 5. `CapExceeded` if the pool total would exceed `hard_cap` (the
    ///    whole deposit is rejected, never partially accepted).
    ///
    /// On success the participant's record is created or accumulated
    /// (one record per address, never duplicated) and a `Deposited` event
    /// carries the new cumulative total.
    pub fn deposit(env: Env, participant: Address, amount: i128) {
        participant.require_auth();

        if amount <= 0 {
            panic_with_error!(&env, Error::InvalidParameters);
        }

        let pool = match storage::load_pool(&env) {
            Some(pool) => pool,
            None => panic_with_error!(&env, Error::InvalidPoolState),
        };
        if pool.status != PoolStatus::Ongoing {
            panic_with_error!(&env, Error::InvalidPoolState);
        }

        let now = env.ledger().timestamp();
        if now < pool.start_time || now > pool.end_time {
            panic_with_error!(&env, Error::OutOfWindow);
        }

        if !storage::is_whitelisted(&env, &participant) {
            panic_with_error!(&env, Error::NotWhitelisted);
        }

        let existing = storage::load_participation(&env, &participant);
        let new_total = existing.unwrap_or(0) + amount;

        // Allocation bounds apply once details are attached with a
        // configured maximum.
        if let Some(details) = storage::load_pool_details(&env) {
            if details.max_allocation_per_user > 0
                && (new_total < details.min_allocation_per_user
                    || new_total > details.max_allocation_per_user)
            {
                panic_with_error!(&env, Error::AllocationOutOfRange);
            }
        }

        let total_raised = storage::total_raised(&env);
        if total_raised + amount > pool.hard_cap {
            panic_with_error!(&env, Error::CapExceeded);
        }

        // All gates passed: pull the funds into escrow, then record.
        let funding_token = token::Client::new(&env, &storage::funding_token(&env));
        funding_token.transfer(&participant, &env.current_contract_address(), &amount);

        if existing.is_none() {
            storage::push_participant(&env, &participant);
        }
        storage::save_participation(&env, &participant, new_total);
        storage::set_total_raised(&env, total_raised + amount);

        events::deposited(
            &env,
            Deposited {
                participant,
                amount,
                total_deposited: new_total,
            },
        );
    }

    // ─────────────────────────────────────────────────────────
    // Payout
    // ─────────────────────────────────────────────────────────

    /// Pay the escrowed deposits out to the configured receiver.
    ///
    /// - `caller` must hold `PoolOwner`.
    /// - Fails with `InvalidPoolState` unless the pool is `Finished`, the
    ///   detailed info (receiver) is set, and the escrow has not already
    ///   been withdrawn.
    pub fn withdraw_raised_funds(env: Env, caller: Address) {
        caller.require_auth();
        rbac::require_pool_owner(&env, &caller);

        let pool = match storage::load_pool(&env) {
            Some(pool) => pool,
            None => panic_with_error!(&env, Error::InvalidPoolState),
        };
        if pool.status != PoolStatus::Finished {
            panic_with_error!(&env, Error::InvalidPoolState);
        }
        let details = match storage::load_pool_details(&env) {
            Some(details) => details,
            None => panic_with_error!(&env, Error::InvalidPoolState),
        };
        if storage::is_withdrawn(&env) {
            panic_with_error!(&env, Error::InvalidPoolState);
        }

        let amount = storage::total_raised(&env);
        let funding_token = token::Client::new(&env, &storage::funding_token(&env));
        funding_token.transfer(
            &env.current_contract_address(),
            &details.raised_funds_receiver,
            &amount,
        );
        storage::set_withdrawn(&env);

        events::funds_withdrawn(
            &env,
            FundsWithdrawn {
                receiver: details.raised_funds_receiver,
                amount,
            },
        );
    }

    // ─────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────

    /// Read-only snapshot of the pool, its detailed configuration, and
    /// the full participation ledger. Callable by anyone.
    ///
    /// Fails with `InvalidPoolState` if the pool does not exist yet.
    pub fn get_complete_pool_details(env: Env) -> CompletePoolDetails {
        let pool = match storage::load_pool(&env) {
            Some(pool) => pool,
            None => panic_with_error!(&env, Error::InvalidPoolState),
        };
        let details = storage::load_pool_details(&env);

        let participants = storage::participants(&env);
        let mut records = Vec::new(&env);
        for participant in participants.iter() {
            let total_deposited = storage::load_participation(&env, &participant).unwrap_or(0);
            records.push_back(ParticipationRecord {
                participant,
                total_deposited,
            });
        }

        CompletePoolDetails {
            pool,
            details,
            participation: ParticipationAggregate {
                count: records.len(),
                records,
                total_raised: storage::total_raised(&env),
            },
        }
    }
}
