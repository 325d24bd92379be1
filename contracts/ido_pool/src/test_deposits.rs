extern crate std;

use soroban_sdk::{
    testutils::{Address as _, Ledger},
    token, vec, Address, Env,
};

use crate::invariants;
use crate::{Error, IdoPool, IdoPoolClient, PoolStatus};

const HARD_CAP: i128 = 10_000;
const SOFT_CAP: i128 = 5_000;
const DAY: u64 = 86_400;
const EPOCH: u64 = 1_700_000_000;

/// Full fixture: initialised contract, granted pool owner, Ongoing pool
/// with unconfigured allocation bounds. Returns the pool owner and the
/// funding-asset admin client for minting.
fn setup_open_pool() -> (
    Env,
    IdoPoolClient<'static>,
    Address,
    token::StellarAssetClient<'static>,
) {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().with_mut(|li| li.timestamp = EPOCH);
    let contract_id = env.register(IdoPool, ());
    let client = IdoPoolClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    let token_admin = Address::generate(&env);
    let sac = env.register_stellar_asset_contract_v2(token_admin);
    client.init(&admin, &sac.address());

    let pool_owner = Address::generate(&env);
    client.grant_pool_owner_role(&admin, &pool_owner);
    client.create_pool(
        &pool_owner,
        &HARD_CAP,
        &SOFT_CAP,
        &EPOCH,
        &(EPOCH + DAY),
        &PoolStatus::Ongoing,
    );

    let funding_sac = token::StellarAssetClient::new(&env, &sac.address());
    (env, client, pool_owner, funding_sac)
}

fn add_participant(
    env: &Env,
    client: &IdoPoolClient,
    funding_sac: &token::StellarAssetClient,
    owner: &Address,
    balance: i128,
) -> Address {
    let participant = Address::generate(env);
    client.add_addresses_to_whitelist(owner, &vec![env, participant.clone()]);
    funding_sac.mint(&participant, &balance);
    participant
}

#[test]
fn test_count_starts_at_zero() {
    let (_env, client, _owner, _) = setup_open_pool();
    let cpd = client.get_complete_pool_details();
    assert_eq!(cpd.participation.count, 0);
    assert_eq!(cpd.participation.records.len(), 0);
    assert_eq!(cpd.participation.total_raised, 0);
}

#[test]
fn test_first_deposit_creates_record() {
    let (env, client, owner, funding_sac) = setup_open_pool();
    let depositor = add_participant(&env, &client, &funding_sac, &owner, 1_000);

    client.deposit(&depositor, &500);

    let cpd = client.get_complete_pool_details();
    assert_eq!(cpd.participation.count, 1);
    let record = cpd.participation.records.get_unchecked(0);
    assert_eq!(record.participant, depositor);
    assert_eq!(record.total_deposited, 500);
}

#[test]
fn test_repeat_deposits_accumulate_into_one_record() {
    let (env, client, owner, funding_sac) = setup_open_pool();
    let depositor = add_participant(&env, &client, &funding_sac, &owner, 1_000);

    client.deposit(&depositor, &500);
    let before = client.get_complete_pool_details().participation;

    client.deposit(&depositor, &300);
    let after = client.get_complete_pool_details().participation;

    // still a single record, totals summed
    assert_eq!(after.count, 1);
    assert_eq!(after.records.len(), 1);
    let record = after.records.get_unchecked(0);
    assert_eq!(record.participant, depositor);
    invariants::assert_deposit_accumulates(
        before.records.get_unchecked(0).total_deposited,
        record.total_deposited,
        300,
    );
    invariants::assert_count_monotonic(before.count, after.count);
    invariants::assert_aggregate_consistent(&after);
}

#[test]
fn test_count_increments_per_unique_depositor() {
    let (env, client, owner, funding_sac) = setup_open_pool();
    let first = add_participant(&env, &client, &funding_sac, &owner, 1_000);
    let second = add_participant(&env, &client, &funding_sac, &owner, 1_000);

    client.deposit(&first, &100);
    assert_eq!(client.get_complete_pool_details().participation.count, 1);

    client.deposit(&second, &200);
    assert_eq!(client.get_complete_pool_details().participation.count, 2);

    client.deposit(&first, &50);
    let cpd = client.get_complete_pool_details();
    assert_eq!(cpd.participation.count, 2);
    invariants::assert_no_duplicate_records(&cpd.participation);
}

#[test]
fn test_records_ordered_by_first_deposit() {
    let (env, client, owner, funding_sac) = setup_open_pool();
    let first = add_participant(&env, &client, &funding_sac, &owner, 1_000);
    let second = add_participant(&env, &client, &funding_sac, &owner, 1_000);
    let third = add_participant(&env, &client, &funding_sac, &owner, 1_000);

    client.deposit(&second, &10);
    client.deposit(&first, &20);
    client.deposit(&third, &30);
    client.deposit(&second, &40);

    let records = client.get_complete_pool_details().participation.records;
    assert_eq!(records.get_unchecked(0).participant, second);
    assert_eq!(records.get_unchecked(1).participant, first);
    assert_eq!(records.get_unchecked(2).participant, third);
    // a repeat deposit never reorders
    assert_eq!(records.get_unchecked(0).total_deposited, 50);
}

#[test]
fn test_failed_deposit_leaves_ledger_unchanged() {
    let (env, client, owner, funding_sac) = setup_open_pool();
    let insider = add_participant(&env, &client, &funding_sac, &owner, 1_000);
    let outsider = Address::generate(&env);
    funding_sac.mint(&outsider, &1_000);

    client.deposit(&insider, &400);
    let before = client.get_complete_pool_details().participation;

    assert_eq!(
        client.try_deposit(&outsider, &100),
        Err(Ok(Error::NotWhitelisted))
    );
    // a cap-breaking deposit from an approved participant fails too
    assert_eq!(
        client.try_deposit(&insider, &(HARD_CAP + 1)),
        Err(Ok(Error::CapExceeded))
    );

    let after = client.get_complete_pool_details().participation;
    assert_eq!(after, before);
}

#[test]
fn test_interleaved_deposits_keep_aggregate_consistent() {
    let (env, client, owner, funding_sac) = setup_open_pool();
    let a = add_participant(&env, &client, &funding_sac, &owner, 5_000);
    let b = add_participant(&env, &client, &funding_sac, &owner, 5_000);
    let c = add_participant(&env, &client, &funding_sac, &owner, 5_000);

    let steps: [(&Address, i128, u32); 6] = [
        (&a, 100, 1),
        (&a, 100, 1),
        (&b, 200, 2),
        (&a, 150, 2),
        (&c, 300, 3),
        (&b, 250, 3),
    ];
    for (who, amount, expected_count) in steps {
        client.deposit(who, &amount);
        let cpd = client.get_complete_pool_details();
        assert_eq!(cpd.participation.count, expected_count);
        invariants::assert_all_snapshot_invariants(&cpd.pool, &cpd.participation);
    }

    let cpd = client.get_complete_pool_details();
    assert_eq!(cpd.participation.total_raised, 1_100);
    assert_eq!(cpd.participation.records.get_unchecked(0).total_deposited, 350);
    assert_eq!(cpd.participation.records.get_unchecked(1).total_deposited, 450);
    assert_eq!(cpd.participation.records.get_unchecked(2).total_deposited, 300);
}

#[test]
fn test_pause_between_deposits_preserves_records() {
    let (env, client, owner, funding_sac) = setup_open_pool();
    let depositor = add_participant(&env, &client, &funding_sac, &owner, 1_000);

    client.deposit(&depositor, &100);
    client.update_pool_status(&owner, &PoolStatus::Paused);
    assert_eq!(
        client.try_deposit(&depositor, &100),
        Err(Ok(Error::InvalidPoolState))
    );

    client.update_pool_status(&owner, &PoolStatus::Ongoing);
    client.deposit(&depositor, &100);

    let cpd = client.get_complete_pool_details();
    assert_eq!(cpd.participation.count, 1);
    assert_eq!(cpd.participation.records.get_unchecked(0).total_deposited, 200);
    invariants::assert_aggregate_consistent(&cpd.participation);
}
