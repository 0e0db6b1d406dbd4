//! Storage for committed price records, used by both oracle contracts.
//!
//! Records live in the calling contract's persistent storage. The book also
//! tracks which tokens currently hold a record so they can be listed and
//! cleared.

use soroban_sdk::{contracttype, symbol_short, Address, Env, Vec};

use crate::{page, OracleError, Price, PriceRecord};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PriceKey {
    Record(Address),
    TokensWithPrices,
}

pub fn get_record(env: &Env, token: &Address) -> Option<PriceRecord> {
    env.storage()
        .persistent()
        .get(&PriceKey::Record(token.clone()))
}

/// The committed `{min, max}` for `token`. A missing record, or one with a
/// zero bound, is `EmptyPrimaryPrice`.
pub fn get_primary_price(env: &Env, token: &Address) -> Result<Price, OracleError> {
    match get_record(env, token) {
        Some(record) if record.min != 0 && record.max != 0 => Ok(record.price()),
        _ => Err(OracleError::EmptyPrimaryPrice),
    }
}

fn tokens_with_prices(env: &Env) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&PriceKey::TokensWithPrices)
        .unwrap_or(Vec::new(env))
}

pub fn tokens_with_prices_count(env: &Env) -> u32 {
    tokens_with_prices(env).len()
}

pub fn tokens_with_prices_page(env: &Env, start: u32, end: u32) -> Vec<Address> {
    page(env, &tokens_with_prices(env), start, end)
}

/// Writes a batch of already validated records. Nothing here can fail, so a
/// batch either lands whole or was rejected before reaching this point.
pub fn commit(env: &Env, records: &Vec<(Address, PriceRecord)>) {
    let mut tokens = tokens_with_prices(env);

    for (token, record) in records.iter() {
        env.storage()
            .persistent()
            .set(&PriceKey::Record(token.clone()), &record);

        if !tokens.contains(&token) {
            tokens.push_back(token.clone());
        }

        env.events()
            .publish((symbol_short!("price"), token), (record.min, record.max));
    }

    env.storage()
        .persistent()
        .set(&PriceKey::TokensWithPrices, &tokens);
}

/// Removes every record and returns how many were removed.
pub fn clear_all(env: &Env) -> u32 {
    let tokens = tokens_with_prices(env);

    for token in tokens.iter() {
        env.storage().persistent().remove(&PriceKey::Record(token));
    }
    env.storage().persistent().remove(&PriceKey::TokensWithPrices);

    env.events()
        .publish((symbol_short!("prc_clear"),), tokens.len());
    tokens.len()
}
