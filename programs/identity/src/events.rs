use anchor_lang::prelude::*;

/// Event emitted when the identity registry is initialized
/// Fields:
/// - owner: The public key of the registry owner
/// - whitelisted_count: The number of addresses whitelisted during initialization
#[event]
pub struct IdentityInitialized {
    pub owner: Pubkey,
    pub whitelisted_count: u64,
}

/// Event emitted when an address is added to the whitelist
/// Fields:
/// - user: The public key of the address added to the whitelist
/// - added_by: The public key of the account that added the address
/// - whitelisted_count: The number of whitelisted addresses after the change
#[event]
pub struct WhitelistedAdded {
    pub user: Pubkey,
    pub added_by: Pubkey,
    pub whitelisted_count: u64,
}

/// Event emitted when an address is removed from the whitelist
/// Fields:
/// - user: The public key of the address removed from the whitelist
/// - removed_by: The public key of the account that removed the address.
///   Equal to `user` when the address renounced its own status.
/// - whitelisted_count: The number of whitelisted addresses after the change
#[event]
pub struct WhitelistedRemoved {
    pub user: Pubkey,
    pub removed_by: Pubkey,
    pub whitelisted_count: u64,
}
