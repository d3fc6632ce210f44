#![allow(unexpected_cfgs)]
#![allow(deprecated)]

use anchor_lang::prelude::*;
mod constants;
mod errors;
mod events;
mod instructions;
pub mod security;
mod state;

use instructions::*;

#[cfg(feature = "devnet")]
declare_id!("534X7LzHqia3X4pBi55fAPDb9rj8zSD9seW8MAgv6u6o");
#[cfg(feature = "testnet")]
declare_id!("75CxUhFki5uxQ97tvdTobNxmHrFftNJo5FcEFiUumdyZ");
#[cfg(feature = "mainnet")]
declare_id!("FXzDjaPA1hf6ZWSsyJyioDTeSbRGsBbHFg4KUVhS1vUe");
#[cfg(not(any(feature = "mainnet", feature = "devnet", feature = "testnet")))]
declare_id!("Aw63BzV9geQRrxALh2dfsxjpcBLMFcEaDwQoJMreStCK");

#[program]
pub mod identity {
    use super::*;

    /// Initialize the identity registry
    ///
    /// The signer becomes the owner and is whitelisted together with the given
    /// system contracts (token, reserve, payment links). The Whitelist PDA of each
    /// system contract must be passed in remaining_accounts, in the same order.
    pub fn initialize<'info>(
        ctx: Context<'_, '_, '_, 'info, Initialize<'info>>,
        system_contracts: Vec<Pubkey>,
    ) -> Result<()> {
        ctx.accounts
            .initialize(system_contracts, ctx.remaining_accounts, &ctx.bumps)
    }

    /// Add an address to the whitelist
    /// Signer must be the Identity owner
    pub fn whitelist_user(ctx: Context<WhitelistUser>, user: Pubkey) -> Result<()> {
        ctx.accounts.whitelist_user(user, &ctx.bumps)
    }

    /// Remove an address from the whitelist
    /// Signer must be the Identity owner
    pub fn blacklist_user(ctx: Context<BlacklistUser>, user: Pubkey) -> Result<()> {
        ctx.accounts.blacklist_user(user)
    }

    /// Remove the signer from the whitelist
    pub fn renounce_whitelisted(ctx: Context<RenounceWhitelisted>) -> Result<()> {
        ctx.accounts.renounce_whitelisted()
    }

    /// Returns whether `user` is whitelisted
    pub fn is_whitelisted(ctx: Context<IsWhitelisted>, _user: Pubkey) -> Result<bool> {
        ctx.accounts.is_whitelisted()
    }

    /// Returns the number of whitelisted addresses
    pub fn whitelisted_count(ctx: Context<WhitelistedCount>) -> Result<u64> {
        ctx.accounts.whitelisted_count()
    }
}
