use anchor_lang::error::ErrorCode;
use anchor_lang::prelude::*;

use crate::errors::IdentityError;

/// Whitelist account - tracks the whitelist status of a single address.
///
/// An address without a Whitelist account is not whitelisted. Accounts are
/// never closed, so re-whitelisting a removed address reuses the same PDA.
#[account]
#[derive(InitSpace, Debug, PartialEq, Eq)]
pub struct Whitelist {
    // The address this status belongs to
    pub user: Pubkey,

    // Whether the address is currently whitelisted
    pub is_whitelisted: bool,

    // The bump used to derive the PDA for this account
    // Stored so we don't need to recalculate it later
    pub bump: u8,
}

impl Whitelist {
    /// Total account size including the discriminator
    pub const SPACE: usize = 8 + Self::INIT_SPACE;

    /// Reads a Whitelist from raw account data.
    /// # Arguments
    /// * `data` - The account data, including the discriminator
    /// # Returns
    /// * `Result<Option<Whitelist>>` - None if the account was never created
    /// # Errors
    /// * `ErrorCode::AccountDiscriminatorMismatch` - If the data belongs to another account type
    pub fn from_account_data(data: &[u8]) -> Result<Option<Self>> {
        if data.is_empty() {
            return Ok(None);
        }

        let mut bytes = data;
        Ok(Some(Self::try_deserialize(&mut bytes)?))
    }

    /// Writes the discriminator and the Whitelist into raw account data.
    /// # Arguments
    /// * `data` - The account data, at least `Whitelist::SPACE` bytes long
    pub fn write_account_data(&self, data: &mut [u8]) -> Result<()> {
        require_gte!(data.len(), Self::SPACE, ErrorCode::AccountDidNotSerialize);

        let mut writer: &mut [u8] = data;
        self.try_serialize(&mut writer)
    }

    /// Loads the Whitelist stored in a PDA that may not have been created yet.
    /// # Arguments
    /// * `info` - The Whitelist PDA, already validated against its seeds
    /// # Returns
    /// * `Result<Option<Whitelist>>` - None if the address was never whitelisted
    /// # Errors
    /// * `IdentityError::InvalidWhitelistAccount` - If the account is not owned by this program
    pub fn load(info: &AccountInfo) -> Result<Option<Self>> {
        if info.data_is_empty() {
            return Ok(None);
        }

        require_keys_eq!(
            *info.owner,
            crate::ID,
            IdentityError::InvalidWhitelistAccount
        );

        let data = info.try_borrow_data()?;
        Self::from_account_data(&data[..])
    }

    /// Writes the Whitelist back into an account previously returned by `Whitelist::load`
    pub fn store(&self, info: &AccountInfo) -> Result<()> {
        let mut data = info.try_borrow_mut_data()?;
        self.write_account_data(&mut data[..])
    }
}
