// PDA SEEDS

/// Seed for the Identity registry PDA
pub const IDENTITY_SEED: &[u8] = b"identity";
/// Seed for Whitelist account PDA
pub const WHITELIST_SEED: &[u8] = b"whitelist";

/// Maximum number of system contracts that can be whitelisted during initialization
pub const MAX_SYSTEM_CONTRACTS: usize = 16;
