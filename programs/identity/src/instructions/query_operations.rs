use anchor_lang::prelude::*;

use crate::{
    constants::{IDENTITY_SEED, WHITELIST_SEED},
    state::{Identity, Whitelist},
};

/// Read whether an address is whitelisted
#[derive(Accounts)]
#[instruction(user: Pubkey)]
pub struct IsWhitelisted<'info> {
    /// The Whitelist account of the queried address
    /// # PDA Seeds
    /// - WHITELIST_SEED
    /// - The queried address
    ///
    /// CHECK: Seeds constraint validates PDA address. A missing account reads as not whitelisted.
    #[account(
        seeds = [WHITELIST_SEED, user.as_ref()],
        bump,
    )]
    pub whitelist: UncheckedAccount<'info>,
}

impl<'info> IsWhitelisted<'info> {
    pub fn is_whitelisted(&self) -> Result<bool> {
        Ok(Whitelist::load(&self.whitelist)?.is_some_and(|entry| entry.is_whitelisted))
    }
}

/// Read the number of whitelisted addresses
#[derive(Accounts)]
pub struct WhitelistedCount<'info> {
    /// The Identity registry account
    /// # PDA Seeds
    /// - IDENTITY_SEED
    #[account(
        seeds = [IDENTITY_SEED],
        bump = identity.bump,
    )]
    pub identity: Account<'info, Identity>,
}

impl<'info> WhitelistedCount<'info> {
    pub fn whitelisted_count(&self) -> Result<u64> {
        Ok(self.identity.whitelisted_count)
    }
}
