use soroban_sdk::{Address, BytesN, Env, Vec};

use crate::types::DataKey;

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Initialized)
}

pub fn set_initialized(env: &Env) {
    env.storage().instance().set(&DataKey::Initialized, &true);
}

pub fn has_role(env: &Env, account: &Address, role: &BytesN<32>) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::Role(account.clone(), role.clone()))
        .unwrap_or(false)
}

pub fn set_role(env: &Env, account: &Address, role: &BytesN<32>) {
    env.storage()
        .persistent()
        .set(&DataKey::Role(account.clone(), role.clone()), &true);
}

pub fn remove_role(env: &Env, account: &Address, role: &BytesN<32>) {
    env.storage()
        .persistent()
        .remove(&DataKey::Role(account.clone(), role.clone()));
}

pub fn get_roles(env: &Env) -> Vec<BytesN<32>> {
    env.storage()
        .persistent()
        .get(&DataKey::Roles)
        .unwrap_or(Vec::new(env))
}

pub fn set_roles(env: &Env, roles: &Vec<BytesN<32>>) {
    env.storage().persistent().set(&DataKey::Roles, roles);
}

pub fn get_role_members(env: &Env, role: &BytesN<32>) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::RoleMembers(role.clone()))
        .unwrap_or(Vec::new(env))
}

pub fn set_role_members(env: &Env, role: &BytesN<32>, members: &Vec<Address>) {
    env.storage()
        .persistent()
        .set(&DataKey::RoleMembers(role.clone()), members);
}
