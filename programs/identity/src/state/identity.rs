use anchor_lang::prelude::*;

use crate::{
    constants::{MAX_SYSTEM_CONTRACTS, WHITELIST_SEED},
    errors::IdentityError,
    state::Whitelist,
};

/// Identity state account - the whitelist registry for the GoodDollar system.
///
/// `whitelisted_count` always equals the number of Whitelist accounts with
/// `is_whitelisted == true`. Every status change goes through
/// `Identity::apply_status` so the two cannot drift apart.
#[account]
#[derive(InitSpace, Debug, PartialEq, Eq)]
pub struct Identity {
    // The registry owner, the only address allowed to whitelist or blacklist others
    pub owner: Pubkey,

    // Number of addresses currently whitelisted
    pub whitelisted_count: u64,

    // The bump used to derive the PDA for this account
    // Stored so we don't need to recalculate it later
    pub bump: u8,
}

impl Identity {
    /// Total account size including the discriminator
    pub const SPACE: usize = 8 + Self::INIT_SPACE;

    pub fn new(owner: Pubkey, bump: u8) -> Self {
        Self {
            owner,
            whitelisted_count: 0,
            bump,
        }
    }

    /// Verifies that `caller` is the registry owner.
    /// Ownership is independent of the owner's own whitelist status.
    /// # Errors
    /// * `IdentityError::Unauthorized` - If `caller` is not the owner
    pub fn authorize(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.owner, IdentityError::Unauthorized);
        Ok(())
    }

    /// Whitelist the address held by `entry`.
    /// # Arguments
    /// * `caller` - The account requesting the change, must be the owner
    /// * `entry` - The Whitelist entry of the address being whitelisted
    /// # Returns
    /// * `Result<bool>` - true if the address was not whitelisted before
    /// # Errors
    /// * `IdentityError::Unauthorized` - If `caller` is not the owner
    pub fn whitelist_user(&mut self, caller: &Pubkey, entry: &mut Whitelist) -> Result<bool> {
        self.authorize(caller)?;
        self.apply_status(entry, true)
    }

    /// Remove the address held by `entry` from the whitelist.
    /// # Arguments
    /// * `caller` - The account requesting the change, must be the owner
    /// * `entry` - The Whitelist entry of the address being removed
    /// # Returns
    /// * `Result<bool>` - true if the address was whitelisted before
    /// # Errors
    /// * `IdentityError::Unauthorized` - If `caller` is not the owner
    pub fn blacklist_user(&mut self, caller: &Pubkey, entry: &mut Whitelist) -> Result<bool> {
        self.authorize(caller)?;
        self.apply_status(entry, false)
    }

    /// Remove `caller` from the whitelist. Needs no owner privilege.
    /// # Arguments
    /// * `caller` - The account renouncing its own status
    /// * `entry` - The Whitelist entry of `caller`
    /// # Returns
    /// * `Result<bool>` - true if `caller` was whitelisted before
    /// # Errors
    /// * `IdentityError::InvalidWhitelistAccount` - If `entry` belongs to another address
    pub fn renounce_whitelisted(&mut self, caller: &Pubkey, entry: &mut Whitelist) -> Result<bool> {
        require_keys_eq!(
            entry.user,
            *caller,
            IdentityError::InvalidWhitelistAccount
        );
        self.apply_status(entry, false)
    }

    /// Whitelist the address of a Whitelist PDA that may have just been created.
    /// The owner guard runs before the entry is touched.
    /// # Arguments
    /// * `caller` - The account requesting the change, must be the owner
    /// * `user` - The address being whitelisted
    /// * `bump` - The bump of the Whitelist PDA
    /// * `entry` - The (possibly zeroed) Whitelist account data
    /// # Errors
    /// * `IdentityError::Unauthorized` - If `caller` is not the owner
    pub fn whitelist_account(
        &mut self,
        caller: &Pubkey,
        user: Pubkey,
        bump: u8,
        entry: &mut Whitelist,
    ) -> Result<bool> {
        self.authorize(caller)?;

        // Freshly created accounts are zeroed
        entry.user = user;
        entry.bump = bump;

        self.whitelist_user(caller, entry)
    }

    /// Blacklist an address whose Whitelist PDA may not exist.
    /// A missing entry is already not whitelisted, but non-owners are still rejected.
    /// # Errors
    /// * `IdentityError::Unauthorized` - If `caller` is not the owner
    pub fn blacklist_account(
        &mut self,
        caller: &Pubkey,
        entry: Option<&mut Whitelist>,
    ) -> Result<bool> {
        self.authorize(caller)?;

        match entry {
            Some(entry) => self.blacklist_user(caller, entry),
            None => Ok(false),
        }
    }

    /// Renounce the whitelist status of `caller`, whose Whitelist PDA may not exist.
    pub fn renounce_account(
        &mut self,
        caller: &Pubkey,
        entry: Option<&mut Whitelist>,
    ) -> Result<bool> {
        match entry {
            Some(entry) => self.renounce_whitelisted(caller, entry),
            None => Ok(false),
        }
    }

    /// Verifies that `caller` is the upgrade authority of the deployed program,
    /// which is the only account allowed to create the registry.
    /// # Errors
    /// * `IdentityError::Unauthorized` - If `caller` is not the upgrade authority
    pub fn authorize_deployer(caller: &Pubkey, upgrade_authority: Option<Pubkey>) -> Result<()> {
        require!(
            upgrade_authority == Some(*caller),
            IdentityError::Unauthorized
        );
        Ok(())
    }

    /// Validates the bootstrap list against the Whitelist PDAs supplied for it.
    /// # Arguments
    /// * `system_contracts` - Peer contracts to pre-authorize
    /// * `whitelist_keys` - Addresses of the supplied Whitelist PDAs, same order
    /// # Returns
    /// * `Result<Vec<u8>>` - The PDA bump of each system contract
    /// # Errors
    /// * `IdentityError::TooManySystemContracts` - If more than `MAX_SYSTEM_CONTRACTS` are given
    /// * `IdentityError::InvalidWhitelistAccount` - If a PDA is missing or does not match
    pub fn check_bootstrap(
        system_contracts: &[Pubkey],
        whitelist_keys: &[Pubkey],
    ) -> Result<Vec<u8>> {
        require_gte!(
            MAX_SYSTEM_CONTRACTS,
            system_contracts.len(),
            IdentityError::TooManySystemContracts
        );
        require_eq!(
            whitelist_keys.len(),
            system_contracts.len(),
            IdentityError::InvalidWhitelistAccount
        );

        system_contracts
            .iter()
            .zip(whitelist_keys)
            .map(|(contract, whitelist_key)| -> Result<u8> {
                let (expected_address, bump) = Pubkey::find_program_address(
                    &[WHITELIST_SEED, contract.as_ref()],
                    &crate::ID,
                );
                require_keys_eq!(
                    *whitelist_key,
                    expected_address,
                    IdentityError::InvalidWhitelistAccount
                );
                Ok(bump)
            })
            .collect()
    }

    /// Decides whether a system contract's Whitelist PDA still has to be created.
    /// The owner and contracts already handled earlier in the list are skipped.
    /// # Arguments
    /// * `contract` - The system contract being whitelisted
    /// * `data_is_empty` - Whether its Whitelist PDA holds no data yet
    /// * `account_owner` - The program owning its Whitelist PDA
    /// # Errors
    /// * `IdentityError::InvalidWhitelistAccount` - If an empty PDA is not system-owned
    pub fn needs_bootstrap_entry(
        &self,
        contract: &Pubkey,
        data_is_empty: bool,
        account_owner: &Pubkey,
    ) -> Result<bool> {
        if *contract == self.owner || !data_is_empty {
            return Ok(false);
        }

        require_keys_eq!(
            *account_owner,
            solana_sdk_ids::system_program::ID,
            IdentityError::InvalidWhitelistAccount
        );

        Ok(true)
    }

    /// Bootstrap-time whitelisting, used while the registry is being created.
    pub(crate) fn whitelist_initial(&mut self, entry: &mut Whitelist) -> Result<bool> {
        self.apply_status(entry, true)
    }

    /// Sets the status of `entry` and adjusts the counter on a real transition.
    /// Setting the status it already has is a no-op.
    fn apply_status(&mut self, entry: &mut Whitelist, whitelisted: bool) -> Result<bool> {
        if entry.is_whitelisted == whitelisted {
            return Ok(false);
        }

        let count = if whitelisted {
            self.whitelisted_count
                .checked_add(1)
                .ok_or(IdentityError::MathOverflow)?
        } else {
            self.whitelisted_count
                .checked_sub(1)
                .ok_or(IdentityError::MathUnderflow)?
        };

        entry.is_whitelisted = whitelisted;
        self.whitelisted_count = count;

        Ok(true)
    }
}
