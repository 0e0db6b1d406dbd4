//! Client interfaces for the calls the oracles make into their
//! collaborators. Only the functions actually consumed are declared.

use soroban_sdk::{contractclient, Address, BytesN, Env, Vec};

#[contractclient(name = "AccessClient")]
pub trait AccessRegistryInterface {
    fn has_role(env: Env, account: Address, role: BytesN<32>) -> bool;
}

#[contractclient(name = "RosterClient")]
pub trait SignerRosterInterface {
    fn get_signers(env: Env, start: u32, end: u32) -> Vec<BytesN<32>>;
}

#[contractclient(name = "ConfigClient")]
pub trait ConfigStoreInterface {
    fn get_uint(env: Env, key: BytesN<32>) -> u128;
}
