use soroban_sdk::{contracttype, Address, BytesN};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Initialized,
    /// Whether `Address` holds the role id.
    Role(Address, BytesN<32>),
    /// Every role id ever granted, in first-grant order.
    Roles,
    /// Current holders of a role id, in grant order.
    RoleMembers(BytesN<32>),
}
