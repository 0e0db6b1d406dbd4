#![cfg(test)]

use super::*;
use access_registry::{AccessRegistry, AccessRegistryClient};
use oracle_common::roles::role_key;
use soroban_sdk::{testutils::Address as _, Address, Env, Vec};

struct RosterTest<'a> {
    roster: SignerRosterClient<'a>,
    registry: AccessRegistryClient<'a>,
    admin: Address,
    controller: Address,
}

fn setup<'a>(env: &Env) -> RosterTest<'a> {
    env.mock_all_auths();

    let registry_id = env.register_contract(None, AccessRegistry);
    let registry = AccessRegistryClient::new(env, &registry_id);
    let admin = Address::generate(env);
    registry.initialize(&admin);

    let controller = Address::generate(env);
    registry.grant_role(&admin, &controller, &role_key(env, CONTROLLER));

    let roster_id = env.register_contract(None, SignerRoster);
    let roster = SignerRosterClient::new(env, &roster_id);
    roster.initialize(&admin, &registry_id);

    RosterTest {
        roster,
        registry,
        admin,
        controller,
    }
}

fn signer_key(env: &Env, seed: u8) -> BytesN<32> {
    BytesN::from_array(env, &[seed; 32])
}

#[test]
fn test_add_and_read_signers() {
    let env = Env::default();
    let t = setup(&env);
    let a = signer_key(&env, 1);
    let b = signer_key(&env, 2);

    t.roster.add_signer(&t.controller, &a);
    t.roster.add_signer(&t.controller, &b);

    assert_eq!(t.roster.get_signer_count(), 2);
    assert_eq!(t.roster.get_signer(&0), a);
    assert_eq!(t.roster.get_signer(&1), b);
    assert!(t.roster.is_signer(&a));
    assert_eq!(
        t.roster.try_get_signer(&2),
        Err(Ok(OracleError::IndexOutOfRange))
    );
}

#[test]
fn test_duplicate_signer_rejected() {
    let env = Env::default();
    let t = setup(&env);
    let a = signer_key(&env, 1);

    t.roster.add_signer(&t.controller, &a);
    assert_eq!(
        t.roster.try_add_signer(&t.controller, &a),
        Err(Ok(OracleError::DuplicateSigner))
    );
    assert_eq!(t.roster.get_signer_count(), 1);
}

#[test]
fn test_remove_preserves_order() {
    let env = Env::default();
    let t = setup(&env);
    let a = signer_key(&env, 1);
    let b = signer_key(&env, 2);
    let c = signer_key(&env, 3);

    t.roster.add_signer(&t.controller, &a);
    t.roster.add_signer(&t.controller, &b);
    t.roster.add_signer(&t.controller, &c);

    t.roster.remove_signer(&t.controller, &b);

    assert_eq!(
        t.roster.get_signers(&0, &10),
        Vec::from_array(&env, [a.clone(), c.clone()])
    );
    assert_eq!(t.roster.get_signer(&0), a);
    assert_eq!(t.roster.get_signer(&1), c);
    assert!(!t.roster.is_signer(&b));
}

#[test]
fn test_remove_missing_signer() {
    let env = Env::default();
    let t = setup(&env);

    assert_eq!(
        t.roster.try_remove_signer(&t.controller, &signer_key(&env, 9)),
        Err(Ok(OracleError::SignerNotFound))
    );
}

#[test]
fn test_add_signer_requires_controller() {
    let env = Env::default();
    let t = setup(&env);
    let outsider = Address::generate(&env);

    assert_eq!(
        t.roster.try_add_signer(&outsider, &signer_key(&env, 1)),
        Err(Ok(OracleError::Unauthorized))
    );
    assert_eq!(t.roster.get_signer_count(), 0);

    // ROLE_ADMIN alone is not enough either
    assert_eq!(
        t.roster.try_add_signer(&t.admin, &signer_key(&env, 1)),
        Err(Ok(OracleError::Unauthorized))
    );

    // once CONTROLLER is revoked the old controller is locked out
    t.roster.add_signer(&t.controller, &signer_key(&env, 1));
    t.registry
        .revoke_role(&t.admin, &t.controller, &role_key(&env, CONTROLLER));
    assert_eq!(
        t.roster.try_remove_signer(&t.controller, &signer_key(&env, 1)),
        Err(Ok(OracleError::Unauthorized))
    );
    assert_eq!(t.roster.get_signer_count(), 1);
}

#[test]
fn test_get_signers_clamps_range() {
    let env = Env::default();
    let t = setup(&env);
    t.roster.add_signer(&t.controller, &signer_key(&env, 1));

    assert_eq!(t.roster.get_signers(&0, &100).len(), 1);
    assert_eq!(t.roster.get_signers(&1, &100).len(), 0);
}

#[test]
fn test_uninitialized_roster() {
    let env = Env::default();
    env.mock_all_auths();
    let roster_id = env.register_contract(None, SignerRoster);
    let roster = SignerRosterClient::new(&env, &roster_id);
    let caller = Address::generate(&env);

    assert_eq!(
        roster.try_add_signer(&caller, &signer_key(&env, 1)),
        Err(Ok(OracleError::NotInitialized))
    );
    assert_eq!(roster.get_signer_count(), 0);
}

#[test]
fn test_initialize_requires_registry_admin() {
    let env = Env::default();
    let t = setup(&env);

    let roster_id = env.register_contract(None, SignerRoster);
    let roster = SignerRosterClient::new(&env, &roster_id);
    assert_eq!(
        roster.try_initialize(&t.controller, &t.registry.address),
        Err(Ok(OracleError::Unauthorized))
    );
    roster.initialize(&t.admin, &t.registry.address);
    assert_eq!(
        roster.try_initialize(&t.admin, &t.registry.address),
        Err(Ok(OracleError::AlreadyInitialized))
    );
}
