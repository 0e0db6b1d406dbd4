#![cfg(test)]
extern crate std;

use super::*;
use crate::keys::{config_key, MIN_ORACLE_SIGNERS};
use crate::roles::{role_key, CONFIG_KEEPER, CONTROLLER, ROLE_ADMIN};
use crate::types::{check_price_bounds, check_unique_token};
use soroban_sdk::{contract, contractimpl, testutils::Address as _, Address, Env, Vec};

#[contract]
struct BookHarness;

#[contractimpl]
impl BookHarness {}

#[test]
fn test_role_keys_are_stable_and_distinct() {
    let env = Env::default();

    assert_eq!(role_key(&env, CONTROLLER), role_key(&env, "CONTROLLER"));
    assert_ne!(role_key(&env, CONTROLLER), role_key(&env, ROLE_ADMIN));
    assert_ne!(role_key(&env, CONTROLLER), role_key(&env, CONFIG_KEEPER));
    assert_ne!(role_key(&env, ROLE_ADMIN), role_key(&env, CONFIG_KEEPER));

    // keccak256(abi.encode("CONTROLLER")), the id deployed registries use
    let expected: [u8; 32] = [
        0x97, 0xad, 0xf0, 0x37, 0xb2, 0x47, 0x2f, 0x4a, 0x6a, 0x98, 0x25, 0xef, 0xf7, 0xd2, 0xdd,
        0x45, 0xe3, 0x7f, 0x2d, 0xc3, 0x08, 0xdf, 0x2a, 0x26, 0x0d, 0x6a, 0x72, 0xaf, 0x41, 0x89,
        0xa6, 0x5b,
    ];
    assert_eq!(role_key(&env, CONTROLLER).to_array(), expected);
}

#[test]
fn test_config_key_matches_name_hash() {
    let env = Env::default();
    assert_eq!(
        config_key(&env, MIN_ORACLE_SIGNERS),
        hash_name(&env, "MIN_ORACLE_SIGNERS")
    );
}

#[test]
fn test_price_bounds() {
    assert_eq!(check_price_bounds(1, 2), Ok(()));
    assert_eq!(check_price_bounds(5, 5), Ok(()));
    assert_eq!(check_price_bounds(0, 5), Err(OracleError::EmptyPrimaryPrice));
    assert_eq!(check_price_bounds(5, 0), Err(OracleError::EmptyPrimaryPrice));
    assert_eq!(check_price_bounds(6, 5), Err(OracleError::InvalidMinMaxPrice));
}

#[test]
fn test_unique_token_check() {
    let env = Env::default();
    let a = Address::generate(&env);
    let b = Address::generate(&env);
    let mut seen = Vec::new(&env);

    assert_eq!(check_unique_token(&mut seen, &a), Ok(()));
    assert_eq!(check_unique_token(&mut seen, &b), Ok(()));
    assert_eq!(
        check_unique_token(&mut seen, &a),
        Err(OracleError::NonUniqueToken)
    );
}

#[test]
fn test_page_clamps() {
    let env = Env::default();
    let items = Vec::from_array(&env, [1u32, 2, 3]);

    assert_eq!(page(&env, &items, 0, 10), items);
    assert_eq!(page(&env, &items, 1, 2), Vec::from_array(&env, [2u32]));
    assert_eq!(page(&env, &items, 3, 10).len(), 0);
    assert_eq!(page(&env, &items, 2, 1).len(), 0);
}

#[test]
fn test_price_book_commit_and_clear() {
    let env = Env::default();
    let contract_id = env.register_contract(None, BookHarness);
    let ngn = Address::generate(&env);
    let ars = Address::generate(&env);

    env.as_contract(&contract_id, || {
        assert_eq!(
            price_book::get_primary_price(&env, &ngn),
            Err(OracleError::EmptyPrimaryPrice)
        );

        let record = PriceRecord {
            min: 1500 * PRICE_PRECISION,
            max: 1501 * PRICE_PRECISION,
            block_number: 7,
            timestamp: 1000,
        };
        let mut batch = Vec::new(&env);
        batch.push_back((ngn.clone(), record.clone()));
        batch.push_back((ars.clone(), record.clone()));
        price_book::commit(&env, &batch);

        assert_eq!(price_book::get_record(&env, &ngn), Some(record.clone()));
        assert_eq!(price_book::get_primary_price(&env, &ars), Ok(record.price()));
        assert_eq!(price_book::tokens_with_prices_count(&env), 2);

        // re-committing a token does not list it twice
        let mut again = Vec::new(&env);
        again.push_back((ngn.clone(), record.clone()));
        price_book::commit(&env, &again);
        assert_eq!(price_book::tokens_with_prices_count(&env), 2);
        assert_eq!(
            price_book::tokens_with_prices_page(&env, 0, 1),
            Vec::from_array(&env, [ngn.clone()])
        );

        assert_eq!(price_book::clear_all(&env), 2);
        assert_eq!(price_book::get_record(&env, &ngn), None);
        assert_eq!(price_book::tokens_with_prices_count(&env), 0);
    });
}
