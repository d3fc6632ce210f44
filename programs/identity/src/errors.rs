use anchor_lang::prelude::*;

#[error_code]
pub enum IdentityError {
    #[msg("Caller is not the identity owner")]
    Unauthorized,
    #[msg("Whitelist account does not match the user")]
    InvalidWhitelistAccount,
    #[msg("Too many system contracts")]
    TooManySystemContracts,
    #[msg("Math Overflow")]
    MathOverflow,
    #[msg("Math Underflow")]
    MathUnderflow,
    #[msg("ProgramMismatch")]
    ProgramMismatch,
}
