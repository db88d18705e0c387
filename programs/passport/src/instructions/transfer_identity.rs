use anchor_lang::prelude::*;

use crate::constants::{SEED_IDENTITY, SEED_SCORE};
use crate::errors::PassportError;
use crate::events;
use crate::state::{CreditScoreAccount, IdentityAccount, ScoreLevel};

/// Direct transfer: both wallets sign and the identity (plus score, when
/// present) moves immediately, with no request/claim round trip.
#[derive(Accounts)]
pub struct TransferIdentity<'info> {
    #[account(
        mut,
        seeds = [SEED_IDENTITY, old_owner.key().as_ref()],
        bump = old_identity.bump,
        close = old_owner,
        constraint = old_identity.owner == old_owner.key() @ PassportError::Unauthorized,
    )]
    pub old_identity: Account<'info, IdentityAccount>,

    #[account(
        init,
        payer = new_owner,
        space = IdentityAccount::SIZE,
        seeds = [SEED_IDENTITY, new_owner.key().as_ref()],
        bump,
    )]
    pub new_identity: Account<'info, IdentityAccount>,

    /// Old credit score account; uninitialized when the old owner never
    /// calculated a score.
    /// CHECK: validated against the score PDA and only read when it holds
    /// data
    #[account(mut)]
    pub old_score: AccountInfo<'info>,

    #[account(
        init_if_needed,
        payer = new_owner,
        space = CreditScoreAccount::SIZE,
        seeds = [SEED_SCORE, new_owner.key().as_ref()],
        bump,
    )]
    pub new_score: Account<'info, CreditScoreAccount>,

    #[account(mut)]
    pub old_owner: Signer<'info>,

    #[account(mut)]
    pub new_owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<TransferIdentity>) -> Result<()> {
    let clock = Clock::get()?;
    let old_owner_key = ctx.accounts.old_owner.key();
    let new_owner_key = ctx.accounts.new_owner.key();

    let new_identity = &mut ctx.accounts.new_identity;
    new_identity.owner = new_owner_key;
    new_identity.created_at = ctx.accounts.old_identity.created_at;
    new_identity.verified = ctx.accounts.old_identity.verified;
    new_identity.verified_at = ctx.accounts.old_identity.verified_at;
    new_identity.bump = ctx.bumps.new_identity;

    if ctx.accounts.old_score.data_len() > 0 {
        let score_state = CreditScoreAccount::load_checked(
            &ctx.accounts.old_score,
            &old_owner_key,
            ctx.program_id,
        )?;

        let score_lamports = ctx.accounts.old_score.lamports();
        **ctx.accounts.old_score.try_borrow_mut_lamports()? = 0;
        **ctx
            .accounts
            .old_owner
            .to_account_info()
            .try_borrow_mut_lamports()? += score_lamports;

        let new_score = &mut ctx.accounts.new_score;
        new_score.owner = new_owner_key;
        new_score.score = score_state.score;
        new_score.score_level = score_state.score_level;
        new_score.calculated_at = score_state.calculated_at;
        new_score.bump = ctx.bumps.new_score;
    } else if ctx.accounts.new_score.owner == Pubkey::default() {
        // The score slot is part of the account list even when the old
        // owner had no score; leave the fresh account in a coherent,
        // deletable state.
        let new_score = &mut ctx.accounts.new_score;
        new_score.owner = new_owner_key;
        new_score.score = 0;
        new_score.score_level = ScoreLevel::from_score(0);
        new_score.calculated_at = clock.unix_timestamp;
        new_score.bump = ctx.bumps.new_score;
    }

    emit!(events::IdentityTransferred {
        from_owner: old_owner_key,
        to_owner: new_owner_key,
        old_identity: ctx.accounts.old_identity.key(),
        new_identity: ctx.accounts.new_identity.key(),
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "Transferred identity from {} to {}",
        old_owner_key,
        new_owner_key
    );

    Ok(())
}
