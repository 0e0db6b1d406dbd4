use crate::types::OracleConfig;
use oracle_common::OracleError;
use soroban_sdk::{symbol_short, Env, Symbol};

/// Collaborator addresses, written once by `initialize`.
const WIRING: Symbol = symbol_short!("wiring");

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&WIRING)
}

pub fn set_config(env: &Env, config: &OracleConfig) {
    env.storage().instance().set(&WIRING, config);
}

pub fn get_config(env: &Env) -> Result<OracleConfig, OracleError> {
    env.storage()
        .instance()
        .get(&WIRING)
        .ok_or(OracleError::NotInitialized)
}
