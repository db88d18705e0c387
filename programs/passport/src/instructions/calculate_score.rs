use anchor_lang::prelude::*;

use crate::constants::{SEED_IDENTITY, SEED_SCORE};
use crate::errors::PassportError;
use crate::events;
use crate::state::{CreditScoreAccount, IdentityAccount, ScoreLevel};

#[derive(Accounts)]
pub struct CalculateScore<'info> {
    #[account(
        init_if_needed,
        payer = owner,
        space = CreditScoreAccount::SIZE,
        seeds = [SEED_SCORE, owner.key().as_ref()],
        bump,
    )]
    pub score_account: Account<'info, CreditScoreAccount>,

    #[account(
        seeds = [SEED_IDENTITY, owner.key().as_ref()],
        bump = identity.bump,
        constraint = identity.verified @ PassportError::IdentityNotVerified,
    )]
    pub identity: Account<'info, IdentityAccount>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Derives the signer's credit score from their wallet balance.
/// Recalculation overwrites the score account in place.
pub fn handler(ctx: Context<CalculateScore>) -> Result<()> {
    let clock = Clock::get()?;

    let lamports = ctx.accounts.owner.lamports();
    let score = CreditScoreAccount::score_for_balance(lamports);
    let level = ScoreLevel::from_score(score);

    let score_account = &mut ctx.accounts.score_account;
    score_account.owner = ctx.accounts.owner.key();
    score_account.score = score;
    score_account.score_level = level;
    score_account.calculated_at = clock.unix_timestamp;
    score_account.bump = ctx.bumps.score_account;

    emit!(events::ScoreCalculated {
        owner: score_account.owner,
        identity: ctx.accounts.identity.key(),
        score_account: score_account.key(),
        score,
        score_level: level,
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "Calculated score {} ({:?}) for {}",
        score,
        level,
        ctx.accounts.owner.key()
    );

    Ok(())
}
