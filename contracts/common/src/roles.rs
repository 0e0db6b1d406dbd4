//! Role names and the authorization gate every privileged write goes
//! through.
//!
//! A role id is [`hash_name`] of the role name. [`role_key`] is the only
//! place that derivation happens, so the registry and every caller agree on
//! the ids.

use soroban_sdk::{log, Address, BytesN, Env, Symbol};

use crate::{hash_name, interfaces::AccessClient, OracleError};

/// May grant and revoke any role, itself included.
pub const ROLE_ADMIN: &str = "ROLE_ADMIN";
/// May mutate the signer roster, config and prices.
pub const CONTROLLER: &str = "CONTROLLER";
/// May mutate tunable config parameters only.
pub const CONFIG_KEEPER: &str = "CONFIG_KEEPER";

pub fn role_key(env: &Env, name: &str) -> BytesN<32> {
    hash_name(env, name)
}

/// Authenticates `account` and checks it holds `role` in the registry at
/// `registry`.
pub fn require_role(
    env: &Env,
    registry: &Address,
    account: &Address,
    role: &str,
) -> Result<(), OracleError> {
    require_any_role(env, registry, account, &[role])
}

/// Like [`require_role`], passing when `account` holds at least one of
/// `roles`. The first role is reported on rejection.
pub fn require_any_role(
    env: &Env,
    registry: &Address,
    account: &Address,
    roles: &[&str],
) -> Result<(), OracleError> {
    account.require_auth();

    let client = AccessClient::new(env, registry);
    for role in roles {
        if client.has_role(account, &role_key(env, role)) {
            return Ok(());
        }
    }

    if let Some(role) = roles.first() {
        log!(env, "Unauthorized", account.clone(), Symbol::new(env, role));
    }
    Err(OracleError::Unauthorized)
}
