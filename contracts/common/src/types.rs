use soroban_sdk::{contracttype, Address};

use crate::OracleError;

/// The `{min, max}` pair consumers value positions with.
///
/// Both bounds are `u128` at 30 decimals, so the largest representable price
/// is about 3.4e8 whole units (`u128::MAX / 10^30`). FX quotes fit with wide
/// margin; a quote scaling past that is rejected with `PriceOverflow`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Price {
    pub min: u128,
    pub max: u128,
}

/// A committed price and the ledger it was committed at.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PriceRecord {
    pub min: u128,
    pub max: u128,
    pub block_number: u32,
    pub timestamp: u64,
}

impl PriceRecord {
    pub fn price(&self) -> Price {
        Price {
            min: self.min,
            max: self.max,
        }
    }
}

/// Zero is "unset", so neither bound may be zero; `min` may not exceed `max`.
pub fn check_price_bounds(min: u128, max: u128) -> Result<(), OracleError> {
    if min == 0 || max == 0 {
        return Err(OracleError::EmptyPrimaryPrice);
    }
    if min > max {
        return Err(OracleError::InvalidMinMaxPrice);
    }
    Ok(())
}

/// Lets a token appear only once in a batch.
pub fn check_unique_token(
    seen: &mut soroban_sdk::Vec<Address>,
    token: &Address,
) -> Result<(), OracleError> {
    if seen.contains(token) {
        return Err(OracleError::NonUniqueToken);
    }
    seen.push_back(token.clone());
    Ok(())
}
