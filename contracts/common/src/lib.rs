#![no_std]

//! Pieces shared by every contract of the oracle subsystem: the error code
//! table, role and config key derivation, the cross-contract client
//! interfaces and the price book both oracles keep their records in.

use soroban_sdk::{Bytes, BytesN, Env, IntoVal, TryFromVal, Val, Vec};

pub mod errors;
pub mod interfaces;
pub mod keys;
pub mod price_book;
pub mod roles;
pub mod types;

pub use errors::OracleError;
pub use types::{Price, PriceRecord};

/// Every price in the system is a fixed-point value with this many decimals.
pub const PRICE_PRECISION_DECIMALS: u32 = 30;

/// `10^30`, one unit at canonical price precision.
pub const PRICE_PRECISION: u128 = 1_000_000_000_000_000_000_000_000_000_000;

/// Hashes a fixed ASCII name into the 32-byte identifier used for role ids
/// and config keys: `keccak256(abi.encode(name))`, the head/length/padded
/// body layout of a single ABI-encoded string.
pub fn hash_name(env: &Env, name: &str) -> BytesN<32> {
    let mut word = [0u8; 32];

    word[31] = 0x20;
    let mut encoded = Bytes::from_array(env, &word);

    word = [0u8; 32];
    word[24..].copy_from_slice(&(name.len() as u64).to_be_bytes());
    encoded.extend_from_array(&word);

    encoded.extend_from_slice(name.as_bytes());
    let padding = (32 - name.len() % 32) % 32;
    for _ in 0..padding {
        encoded.push_back(0);
    }

    env.crypto().keccak256(&encoded).into()
}

/// Returns `items[start..end]`, with `end` clamped to the length.
pub fn page<T>(env: &Env, items: &Vec<T>, start: u32, end: u32) -> Vec<T>
where
    T: IntoVal<Env, Val> + TryFromVal<Env, Val>,
{
    let end = end.min(items.len());
    if start >= end {
        return Vec::new(env);
    }
    items.slice(start..end)
}

mod test;
