use anchor_lang::prelude::*;
use anchor_lang::solana_program::native_token::LAMPORTS_PER_SOL;

use crate::constants::{SCORE_HIGH_THRESHOLD, SCORE_MEDIUM_THRESHOLD, SEED_SCORE};
use crate::errors::PassportError;

/// Per-wallet credit score derived from on-chain activity
#[account]
pub struct CreditScoreAccount {
    /// The wallet this score was calculated for
    pub owner: Pubkey,
    /// Score on the 0-1000 scale
    pub score: u16,
    /// Band the score falls into; always `ScoreLevel::from_score(score)`
    pub score_level: ScoreLevel,
    /// When the score was last calculated
    pub calculated_at: i64,
    /// PDA bump seed
    pub bump: u8,
}

impl CreditScoreAccount {
    pub const SIZE: usize = 8 +  // discriminator
        32 +                     // owner
        2 +                      // score
        1 +                      // score_level
        8 +                      // calculated_at
        1;                       // bump

    /// Map a wallet's lamport balance onto the score scale.
    ///
    /// Tier values are chosen so that each tier's band matches its intent:
    /// 900 is High, 650 Medium, everything below 500 Low.
    pub fn score_for_balance(lamports: u64) -> u16 {
        if lamports >= 10 * LAMPORTS_PER_SOL {
            900
        } else if lamports >= LAMPORTS_PER_SOL {
            650
        } else if lamports >= LAMPORTS_PER_SOL / 10 {
            450
        } else if lamports >= LAMPORTS_PER_SOL / 100 {
            350
        } else {
            250
        }
    }

    /// Deserialize a score account sitting behind an unchecked `AccountInfo`,
    /// after verifying it is this program's score PDA for `wallet`.
    ///
    /// Used where the score account may legitimately be absent (identity
    /// deletion and both transfer paths); callers gate on `data_len() > 0`.
    pub fn load_checked(
        info: &AccountInfo,
        wallet: &Pubkey,
        program_id: &Pubkey,
    ) -> Result<CreditScoreAccount> {
        let (expected, _) =
            Pubkey::find_program_address(&[SEED_SCORE, wallet.as_ref()], program_id);
        require_keys_eq!(info.key(), expected, PassportError::InvalidScoreAccount);
        require!(info.owner == program_id, PassportError::InvalidScoreAccount);

        let mut data = &info.data.borrow()[..];
        let state = CreditScoreAccount::try_deserialize(&mut data)?;
        require_keys_eq!(state.owner, *wallet, PassportError::InvalidScoreAccount);

        Ok(state)
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum ScoreLevel {
    Low,
    Medium,
    High,
}

impl ScoreLevel {
    /// Band a score into its level. Pure and total over the u16 range.
    pub fn from_score(score: u16) -> Self {
        if score >= SCORE_HIGH_THRESHOLD {
            ScoreLevel::High
        } else if score >= SCORE_MEDIUM_THRESHOLD {
            ScoreLevel::Medium
        } else {
            ScoreLevel::Low
        }
    }
}
