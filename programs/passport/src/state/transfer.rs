use anchor_lang::prelude::*;

/// Time-bounded offer to move an identity (and its score) to another wallet
#[account]
pub struct TransferRequest {
    /// Wallet giving up the identity
    pub from_owner: Pubkey,
    /// Wallet the identity is offered to
    pub to_owner: Pubkey,
    /// The identity PDA being offered
    pub identity: Pubkey,
    /// When the request was initiated
    pub created_at: i64,
    /// Last moment the request can still be claimed
    pub expires_at: i64,
    /// PDA bump seed
    pub bump: u8,
}

impl TransferRequest {
    pub const SIZE: usize = 8 +  // discriminator
        32 +                     // from_owner
        32 +                     // to_owner
        32 +                     // identity
        8 +                      // created_at
        8 +                      // expires_at
        1;                       // bump

    /// A request is claimable through `expires_at` inclusive.
    pub fn is_expired(&self, now: i64) -> bool {
        now > self.expires_at
    }

    /// Distinguishes a slot freshly zeroed by `init_if_needed` from a
    /// request that was written before.
    pub fn is_initialized(&self) -> bool {
        self.from_owner != Pubkey::default()
    }
}
