use anchor_lang::prelude::*;

/// Per-wallet identity record tracking verification status
#[account]
pub struct IdentityAccount {
    /// The wallet that owns this identity
    pub owner: Pubkey,
    /// When this identity was created; survives ownership transfers
    pub created_at: i64,
    /// Whether the identity has passed verification
    pub verified: bool,
    /// When verification happened; `Some` exactly while `verified` is set
    pub verified_at: Option<i64>,
    /// PDA bump seed
    pub bump: u8,
}

impl IdentityAccount {
    pub const SIZE: usize = 8 +  // discriminator
        32 +                     // owner
        8 +                      // created_at
        1 +                      // verified
        9 +                      // verified_at (Option<i64>)
        1;                       // bump

    pub fn set_verified(&mut self, now: i64) {
        self.verified = true;
        self.verified_at = Some(now);
    }

    pub fn clear_verified(&mut self) {
        self.verified = false;
        self.verified_at = None;
    }
}
