#![no_std]

//! Quorum-signed price oracle.
//!
//! A CONTROLLER submits a compacted batch of per-signer price attestations
//! through [`PriceOracle::set_prices`]. The batch is checked against the
//! signer roster, the configured quorum and staleness limits, decoded to
//! 30-decimal prices, and committed all at once: either every token in the
//! batch gets a new record or none does.

use oracle_common::{
    interfaces::{ConfigClient, RosterClient},
    keys::{
        config_key, DEFAULT_MIN_ORACLE_SIGNERS, MAX_ORACLE_BLOCK_AGE, MAX_ORACLE_PRICE_AGE,
        MIN_ORACLE_SIGNERS,
    },
    price_book,
    roles::{require_role, CONTROLLER, ROLE_ADMIN},
    types::{check_price_bounds, check_unique_token},
    OracleError, Price, PriceRecord,
};
use soroban_sdk::{contract, contractimpl, log, Address, BytesN, Env, Vec};

pub mod compaction;
pub mod signatures;
mod storage;
pub mod types;

use compaction::{
    compacted_value, read_slot, rescale, words_needed, BLOCK_NUMBER_BITS, DECIMALS_BITS,
    PRICE_BITS, SIGNER_INDEX_BITS, TIMESTAMP_BITS,
};
use types::{OracleConfig, PriceAttestation, SetPricesParams};

/// Upper bound on signers per submission. Bounds decode and verification
/// work per call.
pub const MAX_SIGNERS: u32 = 7;

#[contract]
pub struct PriceOracle;

#[contractimpl]
impl PriceOracle {
    /// Wires the oracle to its collaborators. `admin` must authorize the call
    /// and hold ROLE_ADMIN in `access_registry`.
    pub fn initialize(
        env: Env,
        admin: Address,
        access_registry: Address,
        signer_roster: Address,
        config_store: Address,
    ) -> Result<(), OracleError> {
        if storage::has_config(&env) {
            return Err(OracleError::AlreadyInitialized);
        }
        require_role(&env, &access_registry, &admin, ROLE_ADMIN)?;

        let config = OracleConfig {
            access_registry,
            signer_roster,
            config_store,
        };
        storage::set_config(&env, &config);
        Ok(())
    }

    /// Validates and commits a signed price batch. Requires CONTROLLER.
    pub fn set_prices(env: Env, caller: Address, params: SetPricesParams) -> Result<(), OracleError> {
        let config = storage::get_config(&env)?;
        require_role(&env, &config.access_registry, &caller, CONTROLLER)?;

        let limits = Limits::load(&env, &config.config_store);
        let signers = resolve_signers(&env, &config.signer_roster, &params.signer_info, &limits)?;
        let records = validate_batch(&env, &params, &signers, &limits)?;

        price_book::commit(&env, &records);
        Ok(())
    }

    /// The latest committed `{min, max}` for `token`. Record age is not
    /// checked here; callers apply their own tolerance using
    /// [`PriceOracle::get_price_record`].
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
        let config = storage::get_config(&env)?;
        require_role(&env, &config.access_registry, &caller, CONTROLLER)?;
        Ok(price_book::clear_all(&env))
    }
}

/// Submission limits read from the config store for one call.
struct Limits {
    min_signers: u128,
    max_block_age: u64,
    max_price_age: u64,
}

impl Limits {
    fn load(env: &Env, config_store: &Address) -> Self {
        let store = ConfigClient::new(env, config_store);

        let min_signers = match store.get_uint(&config_key(env, MIN_ORACLE_SIGNERS)) {
            0 => DEFAULT_MIN_ORACLE_SIGNERS,
            value => value,
        };
        let max_block_age = store.get_uint(&config_key(env, MAX_ORACLE_BLOCK_AGE));
        let max_price_age = store.get_uint(&config_key(env, MAX_ORACLE_PRICE_AGE));

        Limits {
            min_signers,
            max_block_age: u64::try_from(max_block_age).unwrap_or(u64::MAX),
            max_price_age: u64::try_from(max_price_age).unwrap_or(u64::MAX),
        }
    }
}

/// Decodes `signer_info`, enforces the quorum bounds and returns the roster
/// keys of the declared signers, in declaration order.
fn resolve_signers(
    env: &Env,
    signer_roster: &Address,
    signer_info: &BytesN<32>,
    limits: &Limits,
) -> Result<Vec<BytesN<32>>, OracleError> {
    let info = signer_info.to_array();
    let count = read_slot(&info, SIGNER_INDEX_BITS, 0)?;

    if count < limits.min_signers {
        log!(env, "MinOracleSigners", count, limits.min_signers);
        return Err(OracleError::MinOracleSigners);
    }
    if count > MAX_SIGNERS as u128 {
        log!(env, "MaxOracleSigners", count, MAX_SIGNERS);
        return Err(OracleError::MaxOracleSigners);
    }

    let roster = RosterClient::new(env, signer_roster).get_signers(&0, &u32::MAX);
    let mut indices: Vec<u32> = Vec::new(env);
    let mut signers = Vec::new(env);

    for position in 0..count as u32 {
        let index = read_slot(&info, SIGNER_INDEX_BITS, position + 1)? as u32;
        if indices.contains(index) {
            return Err(OracleError::DuplicateSigner);
        }
        let signer = roster.get(index).ok_or(OracleError::InvalidSigner)?;

        indices.push_back(index);
        signers.push_back(signer);
    }
    Ok(signers)
}

fn check_words(words: &Vec<BytesN<32>>, count: u32, width: u32) -> Result<(), OracleError> {
    if words.len() != words_needed(count, width) {
        return Err(OracleError::ArrayLengthMismatch);
    }
    Ok(())
}

/// Checks the array shapes against the token and signer counts.
fn check_shape(params: &SetPricesParams, token_count: u32, signer_count: u32) -> Result<(), OracleError> {
    let contributions = token_count
        .checked_mul(signer_count)
        .ok_or(OracleError::ArrayLengthMismatch)?;

    check_words(&params.compacted_min_block_numbers, token_count, BLOCK_NUMBER_BITS)?;
    check_words(&params.compacted_max_block_numbers, token_count, BLOCK_NUMBER_BITS)?;
    check_words(&params.compacted_timestamps, token_count, TIMESTAMP_BITS)?;
    check_words(&params.compacted_decimals, token_count, DECIMALS_BITS)?;
    check_words(&params.compacted_min_prices, contributions, PRICE_BITS)?;
    check_words(&params.compacted_max_prices, contributions, PRICE_BITS)?;

    if params.signatures.len() != contributions {
        return Err(OracleError::ArrayLengthMismatch);
    }
    Ok(())
}

/// The submission's block range must end no later than the current ledger
/// and start no more than `max_age` ledgers before it.
fn check_block_range(
    min_block: u64,
    max_block: u64,
    current_block: u64,
    max_age: u64,
) -> Result<(), OracleError> {
    if min_block > max_block || max_block > current_block || current_block - min_block > max_age {
        return Err(OracleError::OracleBlockNumberOutOfRange);
    }
    Ok(())
}

/// A signed timestamp may not lie ahead of the ledger clock, and with a
/// non-zero `max_age` may not trail it by more than `max_age` seconds.
fn check_price_age(timestamp: u64, now: u64, max_age: u64) -> Result<(), OracleError> {
    if timestamp > now {
        return Err(OracleError::InvalidOracleTimestamp);
    }
    if max_age != 0 && timestamp.saturating_add(max_age) < now {
        return Err(OracleError::MaxPriceAgeExceeded);
    }
    Ok(())
}

/// Decodes and validates every token of the batch without writing anything.
fn validate_batch(
    env: &Env,
    params: &SetPricesParams,
    signers: &Vec<BytesN<32>>,
    limits: &Limits,
) -> Result<Vec<(Address, PriceRecord)>, OracleError> {
    let token_count = params.tokens.len();
    if token_count == 0 {
        return Err(OracleError::EmptyTokens);
    }
    let signer_count = signers.len();
    check_shape(params, token_count, signer_count)?;

    let oracle = env.current_contract_address();
    let current_block = env.ledger().sequence();
    let now = env.ledger().timestamp();

    let mut seen = Vec::new(env);
    let mut records = Vec::new(env);

    for (i, token) in params.tokens.iter().enumerate() {
        let i = i as u32;
        check_unique_token(&mut seen, &token)?;

        let min_block = compacted_value(&params.compacted_min_block_numbers, BLOCK_NUMBER_BITS, i)? as u64;
        let max_block = compacted_value(&params.compacted_max_block_numbers, BLOCK_NUMBER_BITS, i)? as u64;
        let timestamp = compacted_value(&params.compacted_timestamps, TIMESTAMP_BITS, i)? as u64;
        let decimals = compacted_value(&params.compacted_decimals, DECIMALS_BITS, i)? as u32;

        let mut min_price = u128::MAX;
        let mut max_price = 0u128;

        for (j, signer) in signers.iter().enumerate() {
            let slot = i * signer_count + j as u32;
            let signer_min = compacted_value(&params.compacted_min_prices, PRICE_BITS, slot)?;
            let signer_max = compacted_value(&params.compacted_max_prices, PRICE_BITS, slot)?;
            let signature = params
                .signatures
                .get(slot)
                .ok_or(OracleError::ArrayLengthMismatch)?;

            let attestation = PriceAttestation {
                oracle: oracle.clone(),
                token: token.clone(),
                min_block_number: min_block,
                max_block_number: max_block,
                timestamp,
                decimals,
                min_price: signer_min,
                max_price: signer_max,
            };
            let digest = signatures::attestation_digest(env, &attestation);
            signatures::verify(&signer, &digest, &signature).map_err(|err| {
                log!(env, "rejected attestation", token.clone(), j as u32);
                err
            })?;

            // widest band across signers
            min_price = min_price.min(signer_min);
            max_price = max_price.max(signer_max);
        }

        check_block_range(min_block, max_block, current_block as u64, limits.max_block_age)?;
        check_price_age(timestamp, now, limits.max_price_age)?;

        let min = rescale(min_price, decimals)?;
        let max = rescale(max_price, decimals)?;
        check_price_bounds(min, max).map_err(|err| {
            log!(env, "rejected price", token.clone(), min, max);
            err
        })?;

        records.push_back((
            token,
            PriceRecord {
                min,
                max,
                block_number: current_block,
                timestamp,
            },
        ));
    }
    Ok(records)
}
