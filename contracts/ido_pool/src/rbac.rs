//! # Role-Based Access Control
//!
//! Roles are an explicit capability map, not inheritance: membership is
//! stored per `(address, role)` and every privileged entry point calls a
//! `require_*` guard before touching state.
//!
//! - `Admin` is the deploying identity, fixed once at [`init_admin`] and
//!   never reassigned.
//! - `PoolOwner` is granted by the Admin via [`grant_pool_owner`];
//!   granting twice is a no-op.
//!
//! Role storage lives in this module's own [`RbacKey`] namespace so the
//! rest of the contract cannot write grants directly.

use soroban_sdk::{contracttype, panic_with_error, Address, Env};

use crate::Error;

/// Capabilities an address can hold.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Role {
    /// Deploying identity; may grant `PoolOwner`.
    Admin,
    /// Manages the pool: creation, details, status, whitelist, withdrawal.
    PoolOwner,
}

/// Module-private storage keys for role grants (instance tier: the role
/// set is small and lives as long as the contract).
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
enum RbacKey {
    /// The fixed admin address.
    Admin,
    /// PoolOwner membership marker.
    PoolOwner(Address),
}

/// Fix the admin identity. Must be called exactly once, at init.
///
/// Panics with [`Error::AlreadyInitialized`] on a second call.
pub fn init_admin(env: &Env, admin: &Address) {
    if env.storage().instance().has(&RbacKey::Admin) {
        panic_with_error!(env, Error::AlreadyInitialized);
    }
    env.storage().instance().set(&RbacKey::Admin, admin);
}

/// Grant `PoolOwner` to `target`. Idempotent.
///
/// Returns `true` if the grant was new, `false` if `target` already held
/// the role (callers use this to suppress duplicate events).
pub fn grant_pool_owner(env: &Env, target: &Address) -> bool {
    let key = RbacKey::PoolOwner(target.clone());
    if env.storage().instance().has(&key) {
        return false;
    }
    env.storage().instance().set(&key, &true);
    true
}

/// Whether `address` holds `role`.
pub fn has_role(env: &Env, address: &Address, role: Role) -> bool {
    match role {
        Role::Admin => {
            let admin: Option<Address> = env.storage().instance().get(&RbacKey::Admin);
            admin.as_ref() == Some(address)
        }
        Role::PoolOwner => env
            .storage()
            .instance()
            .has(&RbacKey::PoolOwner(address.clone())),
    }
}

/// Guard: panic with [`Error::AccessDenied`] unless `address` holds `role`.
pub fn require_role(env: &Env, address: &Address, role: Role) {
    if !has_role(env, address, role) {
        panic_with_error!(env, Error::AccessDenied);
    }
}

pub fn require_admin(env: &Env, address: &Address) {
    require_role(env, address, Role::Admin);
}

pub fn require_pool_owner(env: &Env, address: &Address) {
    require_role(env, address, Role::PoolOwner);
}
