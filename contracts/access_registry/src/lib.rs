#![no_std]

//! Maps `(account, role)` to granted/revoked. The single source of truth
//! for authorization: every other oracle contract asks `has_role` before a
//! privileged write.

use oracle_common::{
    page,
    roles::{role_key, ROLE_ADMIN},
    OracleError,
};
use soroban_sdk::{
    contract, contractimpl, contractmeta, log, symbol_short, Address, BytesN, Env, Symbol, Vec,
};

mod storage;
mod types;

contractmeta!(
    key = "Description",
    val = "Role registry gating every privileged write of the price oracle"
);

#[contract]
pub struct AccessRegistry;

#[contractimpl]
impl AccessRegistry {
    /// Grants ROLE_ADMIN to `admin`. Can only run once.
    pub fn initialize(env: Env, admin: Address) -> Result<(), OracleError> {
        if storage::is_initialized(&env) {
            return Err(OracleError::AlreadyInitialized);
        }
        admin.require_auth();

        storage::set_initialized(&env);
        Self::grant(&env, &admin, &role_key(&env, ROLE_ADMIN));
        Ok(())
    }

    /// Grants `role` to `account`. Granting a held role is a no-op.
    pub fn grant_role(
        env: Env,
        caller: Address,
        account: Address,
        role: BytesN<32>,
    ) -> Result<(), OracleError> {
        Self::require_role_admin(&env, &caller)?;
        Self::grant(&env, &account, &role);
        Ok(())
    }

    /// Revokes `role` from `account`. Revoking an unheld role is a no-op;
    /// the last ROLE_ADMIN holder cannot be revoked.
    pub fn revoke_role(
        env: Env,
        caller: Address,
        account: Address,
        role: BytesN<32>,
    ) -> Result<(), OracleError> {
        Self::require_role_admin(&env, &caller)?;

        if !storage::has_role(&env, &account, &role) {
            return Ok(());
        }

        let mut members = storage::get_role_members(&env, &role);
        if role == role_key(&env, ROLE_ADMIN) && members.len() == 1 {
            return Err(OracleError::LastRoleAdmin);
        }

        if let Some(index) = members.first_index_of(&account) {
            members.remove(index);
        }
        storage::set_role_members(&env, &role, &members);
        storage::remove_role(&env, &account, &role);

        env.events()
            .publish((symbol_short!("revoked"), role, account), ());
        Ok(())
    }

    pub fn has_role(env: Env, account: Address, role: BytesN<32>) -> bool {
        storage::has_role(&env, &account, &role)
    }

    pub fn get_role_count(env: Env) -> u32 {
        storage::get_roles(&env).len()
    }

    pub fn get_roles(env: Env, start: u32, end: u32) -> Vec<BytesN<32>> {
        page(&env, &storage::get_roles(&env), start, end)
    }

    pub fn get_role_member_count(env: Env, role: BytesN<32>) -> u32 {
        storage::get_role_members(&env, &role).len()
    }

    pub fn get_role_members(env: Env, role: BytesN<32>, start: u32, end: u32) -> Vec<Address> {
        page(&env, &storage::get_role_members(&env, &role), start, end)
    }

    // Helper functions
    fn require_role_admin(env: &Env, caller: &Address) -> Result<(), OracleError> {
        if !storage::is_initialized(env) {
            return Err(OracleError::NotInitialized);
        }
        caller.require_auth();

        if storage::has_role(env, caller, &role_key(env, ROLE_ADMIN)) {
            return Ok(());
        }
        log!(env, "Unauthorized", caller.clone(), Symbol::new(env, ROLE_ADMIN));
        Err(OracleError::Unauthorized)
    }

    fn grant(env: &Env, account: &Address, role: &BytesN<32>) {
        if storage::has_role(env, account, role) {
            return;
        }

        let mut roles = storage::get_roles(env);
        if !roles.contains(role) {
            roles.push_back(role.clone());
            storage::set_roles(env, &roles);
        }

        let mut members = storage::get_role_members(env, role);
        members.push_back(account.clone());
        storage::set_role_members(env, role, &members);
        storage::set_role(env, account, role);

        env.events()
            .publish((symbol_short!("granted"), role.clone(), account.clone()), ());
    }
}
