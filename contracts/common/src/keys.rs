//! Well-known ConfigStore keys.

use soroban_sdk::{BytesN, Env};

use crate::hash_name;

/// Quorum for `set_prices`. Zero means [`DEFAULT_MIN_ORACLE_SIGNERS`].
pub const MIN_ORACLE_SIGNERS: &str = "MIN_ORACLE_SIGNERS";
/// How many ledgers a submission's block number may trail the current one.
/// Unset means the submission must be from the current ledger.
pub const MAX_ORACLE_BLOCK_AGE: &str = "MAX_ORACLE_BLOCK_AGE";
/// Maximum age in seconds of a signed price timestamp. Zero disables the
/// check.
pub const MAX_ORACLE_PRICE_AGE: &str = "MAX_ORACLE_PRICE_AGE";

pub const DEFAULT_MIN_ORACLE_SIGNERS: u128 = 1;

pub fn config_key(env: &Env, name: &str) -> BytesN<32> {
    hash_name(env, name)
}
