#![no_std]

//! Typed key-value store for protocol parameters such as
//! `MIN_ORACLE_SIGNERS`.
//!
//! Keys are 32-byte hashes of parameter names (see
//! [`oracle_common::keys::config_key`]). Reading an unset key returns the
//! type's zero value, never an error; callers treat zero as "use the
//! default". Writes require CONTROLLER or CONFIG_KEEPER.

use oracle_common::{
    roles::{require_any_role, require_role, CONFIG_KEEPER, CONTROLLER, ROLE_ADMIN},
    OracleError,
};
use soroban_sdk::{
    contract, contractimpl, symbol_short, Address, BytesN, Env, IntoVal, String, Symbol, Val,
};

mod storage;

use storage::DataKey;

#[contract]
pub struct ConfigStore;

#[contractimpl]
impl ConfigStore {
    /// Wires the contract to its registry. `admin` must authorize the call
    /// and hold ROLE_ADMIN in `access_registry`.
    pub fn initialize(env: Env, admin: Address, access_registry: Address) -> Result<(), OracleError> {
        if storage::has_access_registry(&env) {
            return Err(OracleError::AlreadyInitialized);
        }
        require_role(&env, &access_registry, &admin, ROLE_ADMIN)?;
        storage::set_access_registry(&env, &access_registry);
        Ok(())
    }

    // ───────────── UINT ─────────────

    pub fn get_uint(env: Env, key: BytesN<32>) -> u128 {
        env.storage()
            .persistent()
            .get(&DataKey::UintValue(key))
            .unwrap_or(0)
    }

    pub fn set_uint(env: Env, caller: Address, key: BytesN<32>, value: u128) -> Result<(), OracleError> {
        Self::require_keeper(&env, &caller)?;
        store(&env, symbol_short!("set_uint"), DataKey::UintValue(key.clone()), key, value);
        Ok(())
    }

    pub fn remove_uint(env: Env, caller: Address, key: BytesN<32>) -> Result<(), OracleError> {
        Self::require_keeper(&env, &caller)?;
        erase(&env, DataKey::UintValue(key.clone()), key);
        Ok(())
    }

    /// Adds `delta` to the stored value and returns the new value.
    pub fn increment_uint(
        env: Env,
        caller: Address,
        key: BytesN<32>,
        delta: u128,
    ) -> Result<u128, OracleError> {
        Self::require_keeper(&env, &caller)?;
        let value = Self::get_uint(env.clone(), key.clone())
            .checked_add(delta)
            .ok_or(OracleError::ConfigOverflow)?;
        store(&env, symbol_short!("set_uint"), DataKey::UintValue(key.clone()), key, value);
        Ok(value)
    }

    /// Subtracts `delta` from the stored value and returns the new value.
    pub fn decrement_uint(
        env: Env,
        caller: Address,
        key: BytesN<32>,
        delta: u128,
    ) -> Result<u128, OracleError> {
        Self::require_keeper(&env, &caller)?;
        let value = Self::get_uint(env.clone(), key.clone())
            .checked_sub(delta)
            .ok_or(OracleError::ConfigUnderflow)?;
        store(&env, symbol_short!("set_uint"), DataKey::UintValue(key.clone()), key, value);
        Ok(value)
    }

    // ───────────── INT ─────────────

    pub fn get_int(env: Env, key: BytesN<32>) -> i128 {
        env.storage()
            .persistent()
            .get(&DataKey::IntValue(key))
            .unwrap_or(0)
    }

    pub fn set_int(env: Env, caller: Address, key: BytesN<32>, value: i128) -> Result<(), OracleError> {
        Self::require_keeper(&env, &caller)?;
        store(&env, symbol_short!("set_int"), DataKey::IntValue(key.clone()), key, value);
        Ok(())
    }

    pub fn remove_int(env: Env, caller: Address, key: BytesN<32>) -> Result<(), OracleError> {
        Self::require_keeper(&env, &caller)?;
        erase(&env, DataKey::IntValue(key.clone()), key);
        Ok(())
    }

    // ───────────── ADDRESS ─────────────

    /// `None` is the zero value: Soroban has no zero address.
    pub fn get_address(env: Env, key: BytesN<32>) -> Option<Address> {
        env.storage().persistent().get(&DataKey::AddressValue(key))
    }

    pub fn set_address(
        env: Env,
        caller: Address,
        key: BytesN<32>,
        value: Address,
    ) -> Result<(), OracleError> {
        Self::require_keeper(&env, &caller)?;
        store(&env, symbol_short!("set_addr"), DataKey::AddressValue(key.clone()), key, value);
        Ok(())
    }

    pub fn remove_address(env: Env, caller: Address, key: BytesN<32>) -> Result<(), OracleError> {
        Self::require_keeper(&env, &caller)?;
        erase(&env, DataKey::AddressValue(key.clone()), key);
        Ok(())
    }

    // ───────────── BOOL ─────────────

    pub fn get_bool(env: Env, key: BytesN<32>) -> bool {
        env.storage()
            .persistent()
            .get(&DataKey::BoolValue(key))
            .unwrap_or(false)
    }

    pub fn set_bool(env: Env, caller: Address, key: BytesN<32>, value: bool) -> Result<(), OracleError> {
        Self::require_keeper(&env, &caller)?;
        store(&env, symbol_short!("set_bool"), DataKey::BoolValue(key.clone()), key, value);
        Ok(())
    }

    pub fn remove_bool(env: Env, caller: Address, key: BytesN<32>) -> Result<(), OracleError> {
        Self::require_keeper(&env, &caller)?;
        erase(&env, DataKey::BoolValue(key.clone()), key);
        Ok(())
    }

    // ───────────── BYTES32 ─────────────

    pub fn get_bytes32(env: Env, key: BytesN<32>) -> BytesN<32> {
        env.storage()
            .persistent()
            .get(&DataKey::Bytes32Value(key))
            .unwrap_or(BytesN::from_array(&env, &[0u8; 32]))
    }

    pub fn set_bytes32(
        env: Env,
        caller: Address,
        key: BytesN<32>,
        value: BytesN<32>,
    ) -> Result<(), OracleError> {
        Self::require_keeper(&env, &caller)?;
        store(&env, symbol_short!("set_b32"), DataKey::Bytes32Value(key.clone()), key, value);
        Ok(())
    }

    pub fn remove_bytes32(env: Env, caller: Address, key: BytesN<32>) -> Result<(), OracleError> {
        Self::require_keeper(&env, &caller)?;
        erase(&env, DataKey::Bytes32Value(key.clone()), key);
        Ok(())
    }

    // ───────────── STRING ─────────────

    pub fn get_string(env: Env, key: BytesN<32>) -> String {
        env.storage()
            .persistent()
            .get(&DataKey::StringValue(key))
            .unwrap_or(String::from_str(&env, ""))
    }

    pub fn set_string(
        env: Env,
        caller: Address,
        key: BytesN<32>,
        value: String,
    ) -> Result<(), OracleError> {
        Self::require_keeper(&env, &caller)?;
        store(&env, symbol_short!("set_str"), DataKey::StringValue(key.clone()), key, value);
        Ok(())
    }

    pub fn remove_string(env: Env, caller: Address, key: BytesN<32>) -> Result<(), OracleError> {
        Self::require_keeper(&env, &caller)?;
        erase(&env, DataKey::StringValue(key.clone()), key);
        Ok(())
    }

    // Helper functions
    fn require_keeper(env: &Env, caller: &Address) -> Result<(), OracleError> {
        let registry = storage::get_access_registry(env)?;
        require_any_role(env, &registry, caller, &[CONTROLLER, CONFIG_KEEPER])
    }
}

fn store<V>(env: &Env, topic: Symbol, slot: DataKey, key: BytesN<32>, value: V)
where
    V: IntoVal<Env, Val>,
{
    env.storage().persistent().set(&slot, &value);
    env.events().publish((topic, key), value);
}

fn erase(env: &Env, slot: DataKey, key: BytesN<32>) {
    env.storage().persistent().remove(&slot);
    env.events().publish((symbol_short!("removed"), key), ());
}
