use anchor_lang::prelude::*;

use crate::{
    constants::{IDENTITY_SEED, WHITELIST_SEED},
    events::{WhitelistedAdded, WhitelistedRemoved},
    state::{Identity, Whitelist},
};

/// Add an address to the whitelist.
/// Requires the signer to be the Identity owner.
#[derive(Accounts)]
#[instruction(user: Pubkey)]
pub struct WhitelistUser<'info> {
    /// The Identity owner, pays for the Whitelist account if it does not exist yet
    #[account(mut)]
    pub owner: Signer<'info>,

    /// The Identity registry account
    /// # PDA Seeds
    /// - IDENTITY_SEED
    #[account(
        mut,
        seeds = [IDENTITY_SEED],
        bump = identity.bump,
    )]
    pub identity: Account<'info, Identity>,

    /// The Whitelist account of the address being whitelisted
    /// # PDA Seeds
    /// - WHITELIST_SEED
    /// - Address being whitelisted
    #[account(
        init_if_needed,
        payer = owner,
        space = Whitelist::SPACE,
        seeds = [WHITELIST_SEED, user.as_ref()],
        bump
    )]
    pub whitelist: Account<'info, Whitelist>,

    /// The system program
    pub system_program: Program<'info, System>,
}

impl<'info> WhitelistUser<'info> {
    /// Add an address to the whitelist. Whitelisting an address twice is a no-op.
    /// # Arguments
    /// * `user` - The public key of the address to add to the whitelist
    /// * `bumps` - The bumps used for PDA derivation
    /// # Returns
    /// * `Result<()>` - Ok if the address is whitelisted, Err otherwise
    /// # Errors
    /// * `IdentityError::Unauthorized` - If the signer is not the owner
    pub fn whitelist_user(&mut self, user: Pubkey, bumps: &WhitelistUserBumps) -> Result<()> {
        let owner = self.owner.key();
        if self
            .identity
            .whitelist_account(&owner, user, bumps.whitelist, &mut self.whitelist)?
        {
            emit!(WhitelistedAdded {
                user,
                added_by: owner,
                whitelisted_count: self.identity.whitelisted_count,
            });
        }

        Ok(())
    }
}

/// Remove an address from the whitelist.
/// Requires the signer to be the Identity owner.
#[derive(Accounts)]
#[instruction(user: Pubkey)]
pub struct BlacklistUser<'info> {
    /// The Identity owner
    pub owner: Signer<'info>,

    /// The Identity registry account
    /// # PDA Seeds
    /// - IDENTITY_SEED
    #[account(
        mut,
        seeds = [IDENTITY_SEED],
        bump = identity.bump,
    )]
    pub identity: Account<'info, Identity>,

    /// The Whitelist account of the address being removed
    /// # PDA Seeds
    /// - WHITELIST_SEED
    /// - Address being removed from the whitelist
    ///
    /// CHECK: Seeds constraint validates PDA address. May not exist if the address
    /// was never whitelisted.
    #[account(
        mut,
        seeds = [WHITELIST_SEED, user.as_ref()],
        bump,
    )]
    pub whitelist: UncheckedAccount<'info>,
}

impl<'info> BlacklistUser<'info> {
    /// Remove an address from the whitelist. No-op if the address is not whitelisted.
    /// # Arguments
    /// * `user` - The public key of the address to remove from the whitelist
    /// # Returns
    /// * `Result<()>` - Ok if the address is not whitelisted afterwards, Err otherwise
    /// # Errors
    /// * `IdentityError::Unauthorized` - If the signer is not the owner
    pub fn blacklist_user(&mut self, user: Pubkey) -> Result<()> {
        let owner = self.owner.key();
        let mut entry = Whitelist::load(&self.whitelist)?;

        if self.identity.blacklist_account(&owner, entry.as_mut())? {
            if let Some(entry) = entry {
                entry.store(&self.whitelist)?;
            }

            emit!(WhitelistedRemoved {
                user,
                removed_by: owner,
                whitelisted_count: self.identity.whitelisted_count,
            });
        }

        Ok(())
    }
}

/// Remove the signer from the whitelist.
/// Any address may renounce its own status.
#[derive(Accounts)]
pub struct RenounceWhitelisted<'info> {
    /// The address renouncing its whitelist status
    pub user: Signer<'info>,

    /// The Identity registry account
    /// # PDA Seeds
    /// - IDENTITY_SEED
    #[account(
        mut,
        seeds = [IDENTITY_SEED],
        bump = identity.bump,
    )]
    pub identity: Account<'info, Identity>,

    /// The signer's Whitelist account
    /// # PDA Seeds
    /// - WHITELIST_SEED
    /// - The signer's address
    ///
    /// CHECK: Seeds constraint validates PDA address. May not exist if the signer
    /// was never whitelisted.
    #[account(
        mut,
        seeds = [WHITELIST_SEED, user.key().as_ref()],
        bump,
    )]
    pub whitelist: UncheckedAccount<'info>,
}

impl<'info> RenounceWhitelisted<'info> {
    /// Remove the signer from the whitelist. No-op if the signer is not whitelisted.
    /// Renouncing does not affect owner privileges.
    /// # Returns
    /// * `Result<()>` - Ok if the signer is not whitelisted afterwards, Err otherwise
    pub fn renounce_whitelisted(&mut self) -> Result<()> {
        let user = self.user.key();
        let mut entry = Whitelist::load(&self.whitelist)?;

        if self.identity.renounce_account(&user, entry.as_mut())? {
            if let Some(entry) = entry {
                entry.store(&self.whitelist)?;
            }

            emit!(WhitelistedRemoved {
                user,
                removed_by: user,
                whitelisted_count: self.identity.whitelisted_count,
            });
        }

        Ok(())
    }
}
