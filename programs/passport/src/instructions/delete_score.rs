use anchor_lang::prelude::*;

use crate::constants::SEED_SCORE;
use crate::errors::PassportError;
use crate::events;
use crate::state::CreditScoreAccount;

#[derive(Accounts)]
pub struct DeleteScore<'info> {
    #[account(
        mut,
        seeds = [SEED_SCORE, owner.key().as_ref()],
        bump = score_account.bump,
        close = owner,
        constraint = score_account.owner == owner.key() @ PassportError::Unauthorized,
    )]
    pub score_account: Account<'info, CreditScoreAccount>,

    #[account(mut)]
    pub owner: Signer<'info>,
}

pub fn handler(ctx: Context<DeleteScore>) -> Result<()> {
    let clock = Clock::get()?;

    emit!(events::ScoreDeleted {
        owner: ctx.accounts.owner.key(),
        score_account: ctx.accounts.score_account.key(),
        timestamp: clock.unix_timestamp,
    });

    msg!("Deleted score for {}", ctx.accounts.owner.key());

    Ok(())
}
