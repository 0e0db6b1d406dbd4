#![no_std]

//! Ordered, deduplicated roster of the ed25519 keys allowed to co-sign price
//! submissions.
//!
//! Insertion order is part of the public contract: submissions name their
//! signers by roster index. Removal shifts later entries down by one and
//! leaves earlier entries where they were.

use oracle_common::{
    page,
    roles::{require_role, CONTROLLER, ROLE_ADMIN},
    OracleError,
};
use soroban_sdk::{contract, contractimpl, symbol_short, Address, BytesN, Env, Vec};

mod storage;

#[contract]
pub struct SignerRoster;

#[contractimpl]
impl SignerRoster {
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

    /// Appends `signer` to the roster. Requires CONTROLLER.
    pub fn add_signer(env: Env, caller: Address, signer: BytesN<32>) -> Result<(), OracleError> {
        let registry = storage::get_access_registry(&env)?;
        require_role(&env, &registry, &caller, CONTROLLER)?;

        let mut signers = storage::get_signers(&env);
        if signers.contains(&signer) {
            return Err(OracleError::DuplicateSigner);
        }
        signers.push_back(signer.clone());
        storage::set_signers(&env, &signers);

        env.events().publish((symbol_short!("sgnr_add"), signer), ());
        Ok(())
    }

    /// Removes `signer`, keeping the relative order of the rest. Requires
    /// CONTROLLER.
    pub fn remove_signer(
        env: Env,
        caller: Address,
        signer: BytesN<32>,
    ) -> Result<(), OracleError> {
        let registry = storage::get_access_registry(&env)?;
        require_role(&env, &registry, &caller, CONTROLLER)?;

        let mut signers = storage::get_signers(&env);
        let index = signers
            .first_index_of(&signer)
            .ok_or(OracleError::SignerNotFound)?;
        signers.remove(index);
        storage::set_signers(&env, &signers);

        env.events().publish((symbol_short!("sgnr_rm"), signer), ());
        Ok(())
    }

    pub fn get_signer_count(env: Env) -> u32 {
        storage::get_signers(&env).len()
    }

    pub fn get_signer(env: Env, index: u32) -> Result<BytesN<32>, OracleError> {
        storage::get_signers(&env)
            .get(index)
            .ok_or(OracleError::IndexOutOfRange)
    }

    /// Signers in `[start, end)`, with `end` clamped to the roster length.
    pub fn get_signers(env: Env, start: u32, end: u32) -> Vec<BytesN<32>> {
        page(&env, &storage::get_signers(&env), start, end)
    }

    pub fn is_signer(env: Env, signer: BytesN<32>) -> bool {
        storage::get_signers(&env).contains(&signer)
    }
}

mod test;
