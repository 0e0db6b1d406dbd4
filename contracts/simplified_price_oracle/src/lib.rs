#![no_std]

//! Price oracle for trusted submitters.
//!
//! A CONTROLLER writes already-scaled 30-decimal `{min, max}` prices
//! directly. There are no signatures, no quorum and no staleness checks:
//! whoever holds CONTROLLER on the access registry is the price source.
//! Only the zero and `min <= max` checks of the signed oracle apply.
//!
//! Records are read through the same interface as the signed oracle, so
//! consumers can switch between the two.

use oracle_common::{
    price_book,
    roles::{require_role, CONTROLLER, ROLE_ADMIN},
    types::check_price_bounds,
    OracleError, Price, PriceRecord,
};
use soroban_sdk::{contract, contractimpl, log, Address, Env, Vec};

mod storage;

#[contract]
pub struct SimplifiedPriceOracle;

#[contractimpl]
impl SimplifiedPriceOracle {
    /// Wires the contract to its registry. `admin` must authorize the call
    /// and hold ROLE_ADMIN in `access_registry`.
    pub fn initialize(env: Env, admin: Address, access_registry: Address) -> Result<(), OracleError> {
        if storage::has_access_registry(&env) {
            return Err(OracleError::AlreadyInitialized);
        }
        require_role(&env, &access_registry, &admin, ROLE_ADMIN)?;
        storage::set_access_registry(&env, &access_registry);
        Ok(())
    }

    /// Commits `{mins[i], maxs[i]}` for `tokens[i]`, all or nothing. A token
    /// listed twice keeps its last entry. Requires CONTROLLER.
    pub fn set_simple_prices(
        env: Env,
        caller: Address,
        tokens: Vec<Address>,
        mins: Vec<u128>,
        maxs: Vec<u128>,
    ) -> Result<(), OracleError> {
        let registry = storage::get_access_registry(&env)?;
        require_role(&env, &registry, &caller, CONTROLLER)?;

        if tokens.len() != mins.len() || tokens.len() != maxs.len() {
            return Err(OracleError::ArrayLengthMismatch);
        }

        let block_number = env.ledger().sequence();
        let timestamp = env.ledger().timestamp();
        let mut records = Vec::new(&env);

        for (token, (min, max)) in tokens.iter().zip(mins.iter().zip(maxs.iter())) {
            check_price_bounds(min, max).map_err(|err| {
                log!(&env, "rejected price", token.clone(), min, max);
                err
            })?;

            records.push_back((
                token,
                PriceRecord {
                    min,
                    max,
                    block_number,
                    timestamp,
                },
            ));
        }

        price_book::commit(&env, &records);
        Ok(())
    }

    pub fn get_primary_price(env: Env, token: Address) -> Result<Price, OracleError> {
        price_book::get_primary_price(&env, &token)
    }

    pub fn get_price_record(env: Env, token: Address) -> Option<PriceRecord> {
        price_book::get_record(&env, &token)
    }

    pub fn get_tokens_with_prices_count(env: Env) -> u32 {
        price_book::tokens_with_prices_count(&env)
    }

    pub fn get_tokens_with_prices(env: Env, start: u32, end: u32) -> Vec<Address> {
        price_book::tokens_with_prices_page(&env, start, end)
    }

    /// Drops every committed record. Requires CONTROLLER.
    pub fn clear_all_prices(env: Env, caller: Address) -> Result<u32, OracleError> {
        let registry = storage::get_access_registry(&env)?;
        require_role(&env, &registry, &caller, CONTROLLER)?;
        Ok(price_book::clear_all(&env))
    }
}
