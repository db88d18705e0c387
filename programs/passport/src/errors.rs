use anchor_lang::prelude::*;

#[error_code]
pub enum PassportError {
    #[msg("Unauthorized: signer does not own this account")]
    Unauthorized,

    #[msg("The identity has not been verified")]
    IdentityNotVerified,

    #[msg("The transfer request has expired")]
    TransferExpired,

    #[msg("A pending transfer request already exists for this recipient")]
    TransferAlreadyPending,

    #[msg("Score account does not match the expected PDA for this owner")]
    InvalidScoreAccount,
}
