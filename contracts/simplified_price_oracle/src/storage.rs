use oracle_common::OracleError;
use soroban_sdk::{contracttype, Address, Env};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    AccessRegistry,
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
