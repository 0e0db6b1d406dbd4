use oracle_common::OracleError;
use soroban_sdk::{contracttype, Address, BytesN, Env, Vec};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    AccessRegistry,
    Signers,
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

pub fn get_signers(env: &Env) -> Vec<BytesN<32>> {
    env.storage()
        .persistent()
        .get(&DataKey::Signers)
        .unwrap_or(Vec::new(env))
}

pub fn set_signers(env: &Env, signers: &Vec<BytesN<32>>) {
    env.storage().persistent().set(&DataKey::Signers, signers);
}
