use oracle_common::OracleError;
use soroban_sdk::{contracttype, Address, BytesN, Env};

/// One namespace per value type; the same key may hold a value in each.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    AccessRegistry,
    UintValue(BytesN<32>),
    IntValue(BytesN<32>),
    AddressValue(BytesN<32>),
    BoolValue(BytesN<32>),
    Bytes32Value(BytesN<32>),
    StringValue(BytesN<32>),
}

pub fn has_access_registry(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::AccessRegistry)
}

pub fn set_access_registry(env: &Env, registry: &Address) {
    env.storage()
        .instance()
        .set(&DataKey::AccessRegistry, registry);
}

pub fn get_access_registry(env: &Env) -> Result<Address, OracleError> {
    env.storage()
        .instance()
        .get(&DataKey::AccessRegistry)
        .ok_or(OracleError::NotInitialized)
}
