use soroban_sdk::contracterror;

/// Error codes shared by all oracle contracts. Codes are grouped by class so
/// tooling can tell "need authorization" from "need more signers" from
/// "stale data" without parsing text.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum OracleError {
    NotInitialized = 1,
    AlreadyInitialized = 2,

    // authorization
    Unauthorized = 3,
    LastRoleAdmin = 4,

    // quorum / roster
    MinOracleSigners = 10,
    MaxOracleSigners = 11,
    InvalidSigner = 12,
    InvalidSignature = 13,
    DuplicateSigner = 14,
    SignerNotFound = 15,

    // data validity
    EmptyPrimaryPrice = 20,
    InvalidMinMaxPrice = 21,
    NonUniqueToken = 22,
    ArrayLengthMismatch = 23,
    IndexOutOfRange = 24,
    OracleBlockNumberOutOfRange = 25,
    MaxPriceAgeExceeded = 26,
    EmptyTokens = 27,
    CompactedArrayOutOfBounds = 28,
    PriceOverflow = 29,
    InvalidOracleTimestamp = 32,

    // config
    ConfigOverflow = 30,
    ConfigUnderflow = 31,
}
