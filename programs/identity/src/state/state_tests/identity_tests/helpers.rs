use std::collections::HashMap;

use crate::constants::WHITELIST_SEED;
use crate::errors::IdentityError;
use crate::state::{Identity, Whitelist};
use anchor_lang::error::Error;
use anchor_lang::prelude::{Pubkey, Result as AnchorResult};
use solana_sdk_ids::system_program;

/// Generates a deterministic, non-default pubkey based on a simple seed.
pub(crate) fn deterministic_pubkey(seed: u8) -> Pubkey {
    let mut bytes = [0u8; 32];
    for (idx, byte) in bytes.iter_mut().enumerate() {
        *byte = seed
            .wrapping_add((idx as u8).wrapping_mul(37))
            .wrapping_add(1);
    }
    Pubkey::new_from_array(bytes)
}

/// A Whitelist entry for an address that has never been whitelisted.
pub(crate) fn fresh_entry(user: Pubkey) -> Whitelist {
    Whitelist {
        user,
        is_whitelisted: false,
        bump: 255,
    }
}

/// Address and bump of the Whitelist PDA of `user`.
pub(crate) fn whitelist_pda(user: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[WHITELIST_SEED, user.as_ref()], &crate::ID)
}

/// A Whitelist account as `init_if_needed` hands it over before the handler runs.
pub(crate) fn zeroed_entry() -> Whitelist {
    Whitelist {
        user: Pubkey::default(),
        is_whitelisted: false,
        bump: 0,
    }
}

/// In-memory stand-in for the Identity account plus every Whitelist PDA.
///
/// Drives `Identity` through the same account-level methods the instruction
/// handlers call. A missing map entry is a Whitelist PDA that holds no data.
#[derive(Debug, Clone)]
pub(crate) struct TestRegistry {
    pub identity: Identity,
    pub entries: HashMap<Pubkey, Whitelist>,
}

impl TestRegistry {
    /// Same steps as the `initialize` instruction.
    /// # Arguments
    /// * `whitelist_keys` - The Whitelist PDAs supplied as remaining accounts
    /// * `fresh_account_owner` - Program owning the PDAs that hold no data yet
    pub fn try_bootstrap(
        owner: Pubkey,
        system_contracts: &[Pubkey],
        whitelist_keys: &[Pubkey],
        fresh_account_owner: &Pubkey,
    ) -> AnchorResult<Self> {
        let whitelist_bumps = Identity::check_bootstrap(system_contracts, whitelist_keys)?;

        let mut registry = Self {
            identity: Identity::new(owner, 254),
            entries: HashMap::new(),
        };

        let mut owner_entry = Whitelist {
            user: owner,
            is_whitelisted: false,
            bump: whitelist_pda(&owner).1,
        };
        registry.identity.whitelist_initial(&mut owner_entry)?;
        registry.entries.insert(owner, owner_entry);

        for (contract, bump) in system_contracts.iter().zip(whitelist_bumps) {
            let data_is_empty = !registry.entries.contains_key(contract);
            if registry
                .identity
                .needs_bootstrap_entry(contract, data_is_empty, fresh_account_owner)?
            {
                let mut entry = Whitelist {
                    user: *contract,
                    is_whitelisted: false,
                    bump,
                };
                registry.identity.whitelist_initial(&mut entry)?;
                registry.entries.insert(*contract, entry);
            }
        }

        Ok(registry)
    }

    /// Bootstrap with correctly derived, system-owned Whitelist PDAs.
    pub fn bootstrap(owner: Pubkey, system_contracts: &[Pubkey]) -> Self {
        let whitelist_keys: Vec<Pubkey> = system_contracts
            .iter()
            .map(|contract| whitelist_pda(contract).0)
            .collect();
        Self::try_bootstrap(
            owner,
            system_contracts,
            &whitelist_keys,
            &system_program::ID,
        )
        .expect("bootstrap")
    }

    pub fn owner(&self) -> Pubkey {
        self.identity.owner
    }

    pub fn is_whitelisted(&self, user: &Pubkey) -> bool {
        self.entries
            .get(user)
            .is_some_and(|entry| entry.is_whitelisted)
    }

    pub fn whitelisted_count(&self) -> u64 {
        self.identity.whitelisted_count
    }

    /// Number of entries whose status is `true`, counted independently of the counter.
    pub fn count_whitelisted_entries(&self) -> u64 {
        self.entries
            .values()
            .filter(|entry| entry.is_whitelisted)
            .count() as u64
    }

    pub fn whitelist_user(&mut self, caller: &Pubkey, user: Pubkey) -> AnchorResult<bool> {
        let mut entry = self.entries.get(&user).cloned().unwrap_or_else(zeroed_entry);
        let changed = self
            .identity
            .whitelist_account(caller, user, whitelist_pda(&user).1, &mut entry)?;
        self.entries.insert(user, entry);
        Ok(changed)
    }

    pub fn blacklist_user(&mut self, caller: &Pubkey, user: Pubkey) -> AnchorResult<bool> {
        let mut entry = self.entries.get(&user).cloned();
        let changed = self.identity.blacklist_account(caller, entry.as_mut())?;
        if let Some(entry) = entry {
            self.entries.insert(user, entry);
        }
        Ok(changed)
    }

    pub fn renounce_whitelisted(&mut self, caller: &Pubkey) -> AnchorResult<bool> {
        let mut entry = self.entries.get(caller).cloned();
        let changed = self.identity.renounce_account(caller, entry.as_mut())?;
        if let Some(entry) = entry {
            self.entries.insert(*caller, entry);
        }
        Ok(changed)
    }
}

/// The owner plus three system contracts (token, reserve, payment links).
pub(crate) fn deployed_registry() -> (TestRegistry, [Pubkey; 3]) {
    let owner = deterministic_pubkey(0);
    let system_contracts = [
        deterministic_pubkey(1),
        deterministic_pubkey(2),
        deterministic_pubkey(3),
    ];
    (
        TestRegistry::bootstrap(owner, &system_contracts),
        system_contracts,
    )
}

/// Asserts that `result` failed with the given IdentityError.
pub(crate) fn assert_identity_error<T: std::fmt::Debug>(
    result: AnchorResult<T>,
    expected: IdentityError,
) {
    let err = result.expect_err("expected error result");
    let expected_error: Error = expected.into();

    let actual_code = error_code_number(&err).expect("expected anchor error code");
    let expected_code = error_code_number(&expected_error).expect("expected anchor error code");
    assert_eq!(actual_code, expected_code, "unexpected error variant");
}

fn error_code_number(err: &Error) -> Option<u32> {
    match err {
        Error::AnchorError(anchor_err) => Some(anchor_err.error_code_number),
        Error::ProgramError(_) => None,
    }
}
