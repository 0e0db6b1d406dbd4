use soroban_sdk::{contracttype, Address, BytesN, Vec};

/// One `set_prices` submission.
///
/// With `n` signers (slot 0 of `signer_info`), per-token arrays are indexed
/// by token position `i` and per-signer arrays by `i * n + j`, where `j` is
/// the signer's position in `signer_info`. See [`crate::compaction`] for the
/// slot layout.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SetPricesParams {
    /// 16-bit slots: signer count, then roster indices.
    pub signer_info: BytesN<32>,
    pub tokens: Vec<Address>,
    /// 64-bit slots, one per token.
    pub compacted_min_block_numbers: Vec<BytesN<32>>,
    /// 64-bit slots, one per token.
    pub compacted_max_block_numbers: Vec<BytesN<32>>,
    /// 64-bit slots, one per token.
    pub compacted_timestamps: Vec<BytesN<32>>,
    /// 8-bit slots, one per token: the exponent that scales the compacted
    /// prices to 30 decimals.
    pub compacted_decimals: Vec<BytesN<32>>,
    /// 32-bit slots, one per (token, signer).
    pub compacted_min_prices: Vec<BytesN<32>>,
    /// 32-bit slots, one per (token, signer).
    pub compacted_max_prices: Vec<BytesN<32>>,
    /// ed25519 signatures, one per (token, signer).
    pub signatures: Vec<BytesN<64>>,
}

/// What a signer signs for one token. Prices are the compacted values,
/// before scaling.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PriceAttestation {
    pub oracle: Address,
    pub token: Address,
    pub min_block_number: u64,
    pub max_block_number: u64,
    pub timestamp: u64,
    pub decimals: u32,
    pub min_price: u128,
    pub max_price: u128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OracleConfig {
    pub access_registry: Address,
    pub signer_roster: Address,
    pub config_store: Address,
}
