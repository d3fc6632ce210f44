use anchor_lang::prelude::*;
use anchor_lang::solana_program::{
    program::{invoke, invoke_signed},
    system_instruction,
};

use crate::{
    constants::{IDENTITY_SEED, WHITELIST_SEED},
    errors::IdentityError,
    events::IdentityInitialized,
    state::{Identity, Whitelist},
};

/// Create the identity registry.
///
/// The signer must be the program upgrade authority. It becomes the immutable owner
/// and is whitelisted, together with every address in `system_contracts`. Whitelist
/// PDAs for the system contracts are passed via remaining_accounts, in the same order
/// as `system_contracts`, and must be writable.
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// The registry owner, pays for every account created.
    /// Must be the program upgrade authority
    #[account(mut)]
    pub owner: Signer<'info>,

    /// The Identity registry account
    /// # PDA Seeds
    /// - IDENTITY_SEED
    #[account(
        init,
        payer = owner,
        space = Identity::SPACE,
        seeds = [IDENTITY_SEED],
        bump
    )]
    pub identity: Account<'info, Identity>,

    /// The owner's Whitelist account
    /// # PDA Seeds
    /// - WHITELIST_SEED
    /// - The owner's address
    #[account(
        init,
        payer = owner,
        space = Whitelist::SPACE,
        seeds = [WHITELIST_SEED, owner.key().as_ref()],
        bump
    )]
    pub owner_whitelist: Account<'info, Whitelist>,

    /// The system program
    pub system_program: Program<'info, System>,

    /// The Identity program
    #[account(address = crate::ID)]
    pub program: Program<'info, crate::program::Identity>,

    /// The ProgramData account of the Identity program
    #[account(
        constraint =
            program_data.upgrade_authority_address == Some(owner.key()) @ IdentityError::Unauthorized
    )]
    pub program_data: Account<'info, ProgramData>,
}

impl<'info> Initialize<'info> {
    /// Initialize the registry and whitelist the owner and the system contracts
    /// Validates that the signer is the program upgrade authority
    /// # Arguments
    /// * `system_contracts` - Peer contracts (token, reserve, payment links) to pre-authorize
    /// * `remaining_accounts` - The Whitelist PDAs of `system_contracts`
    /// * `bumps` - The bumps used for PDA derivation
    /// # Returns
    /// * `Result<()>` - Ok if the registry is created, Err otherwise
    /// # Errors
    /// * `IdentityError::ProgramMismatch` - If `program_data` does not belong to this program
    /// * `IdentityError::Unauthorized` - If the signer is not the upgrade authority
    /// * `IdentityError::TooManySystemContracts` - If more than `MAX_SYSTEM_CONTRACTS` are given
    /// * `IdentityError::InvalidWhitelistAccount` - If a Whitelist PDA is missing or does not match
    pub fn initialize(
        &mut self,
        system_contracts: Vec<Pubkey>,
        remaining_accounts: &[AccountInfo<'info>],
        bumps: &InitializeBumps,
    ) -> Result<()> {
        // Verify the program upgrade authority
        if let Some(program_data_address) = self.program.programdata_address()? {
            require_keys_eq!(
                program_data_address,
                self.program_data.key(),
                IdentityError::ProgramMismatch
            );
        } else {
            return Err(IdentityError::ProgramMismatch.into());
        }

        let owner = self.owner.key();
        Identity::authorize_deployer(&owner, self.program_data.upgrade_authority_address)?;

        let whitelist_keys: Vec<Pubkey> =
            remaining_accounts.iter().map(|info| info.key()).collect();
        let whitelist_bumps = Identity::check_bootstrap(&system_contracts, &whitelist_keys)?;

        let mut identity = Identity::new(owner, bumps.identity);

        let mut owner_entry = Whitelist {
            user: owner,
            is_whitelisted: false,
            bump: bumps.owner_whitelist,
        };
        identity.whitelist_initial(&mut owner_entry)?;
        self.owner_whitelist.set_inner(owner_entry);

        for ((contract, whitelist_info), bump) in system_contracts
            .iter()
            .zip(remaining_accounts)
            .zip(whitelist_bumps)
        {
            if identity.needs_bootstrap_entry(
                contract,
                whitelist_info.data_is_empty(),
                whitelist_info.owner,
            )? {
                self.create_whitelist_entry(&mut identity, contract, whitelist_info, bump)?;
            } else {
                msg!("System contract already whitelisted: {}", contract);
            }
        }

        emit!(IdentityInitialized {
            owner,
            whitelisted_count: identity.whitelisted_count,
        });

        self.identity.set_inner(identity);

        Ok(())
    }

    /// Creates and fills the Whitelist PDA of a single system contract
    fn create_whitelist_entry(
        &self,
        identity: &mut Identity,
        contract: &Pubkey,
        whitelist_info: &AccountInfo<'info>,
        bump: u8,
    ) -> Result<()> {
        let signer_seeds: &[&[u8]] = &[WHITELIST_SEED, contract.as_ref(), &[bump]];

        // Allocate space for the whitelist account
        invoke_signed(
            &system_instruction::allocate(&whitelist_info.key(), Whitelist::SPACE as u64),
            &[whitelist_info.to_account_info()],
            &[signer_seeds],
        )?;

        // Fund the whitelist account to be rent-exempt
        invoke(
            &system_instruction::transfer(
                &self.owner.key(),
                &whitelist_info.key(),
                Rent::get()?
                    .minimum_balance(Whitelist::SPACE)
                    .saturating_sub(whitelist_info.lamports()),
            ),
            &[
                self.owner.to_account_info(),
                whitelist_info.to_account_info(),
            ],
        )?;

        // Assign the whitelist account to the program
        invoke_signed(
            &system_instruction::assign(&whitelist_info.key(), &crate::ID),
            &[whitelist_info.to_account_info()],
            &[signer_seeds],
        )?;

        let mut entry = Whitelist {
            user: *contract,
            is_whitelisted: false,
            bump,
        };
        identity.whitelist_initial(&mut entry)?;
        entry.store(whitelist_info)
    }
}
