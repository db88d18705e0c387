use anchor_lang::prelude::*;

use crate::constants::{SEED_IDENTITY, SEED_SCORE, SEED_TRANSFER_REQUEST};
use crate::errors::PassportError;
use crate::events;
use crate::state::{CreditScoreAccount, IdentityAccount, ScoreLevel, TransferRequest};

#[derive(Accounts)]
pub struct ClaimTransfer<'info> {
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

    #[account(
        mut,
        close = new_owner,
        seeds = [
            SEED_TRANSFER_REQUEST,
            transfer_request.from_owner.as_ref(),
            transfer_request.to_owner.as_ref(),
        ],
        bump = transfer_request.bump,
        constraint = transfer_request.from_owner == old_owner.key() @ PassportError::Unauthorized,
    )]
    pub transfer_request: Account<'info, TransferRequest>,

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

    /// Wallet giving up the identity. No signature: it authorized the move
    /// at initiation time.
    /// CHECK: bound to `transfer_request.from_owner` above; receives the
    /// old identity's rent
    #[account(mut)]
    pub old_owner: AccountInfo<'info>,

    #[account(mut)]
    pub new_owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Recipient claims a pending transfer: the identity (and score, when
/// present) moves to the recipient's PDAs, the old accounts and the
/// request close.
pub fn handler(ctx: Context<ClaimTransfer>) -> Result<()> {
    let timestamp = Clock::get()?.unix_timestamp;
    let old_owner_key = ctx.accounts.old_owner.key();
    let new_owner_key = ctx.accounts.new_owner.key();

    require!(
        !ctx.accounts.transfer_request.is_expired(timestamp),
        PassportError::TransferExpired
    );
    require_keys_eq!(
        new_owner_key,
        ctx.accounts.transfer_request.to_owner,
        PassportError::Unauthorized
    );

    let new_identity = &mut ctx.accounts.new_identity;
    new_identity.owner = new_owner_key;
    new_identity.created_at = ctx.accounts.old_identity.created_at;
    new_identity.verified = ctx.accounts.old_identity.verified;
    new_identity.verified_at = ctx.accounts.old_identity.verified_at;
    new_identity.bump = ctx.bumps.new_identity;

    let (old_score_key, new_score_key) = if ctx.accounts.old_score.data_len() > 0 {
        let score_state = CreditScoreAccount::load_checked(
            &ctx.accounts.old_score,
            &old_owner_key,
            ctx.program_id,
        )?;

        let score_lamports = ctx.accounts.old_score.lamports();
        **ctx.accounts.old_score.try_borrow_mut_lamports()? = 0;
        **ctx
            .accounts
            .new_owner
            .to_account_info()
            .try_borrow_mut_lamports()? += score_lamports;

        let new_score = &mut ctx.accounts.new_score;
        new_score.owner = new_owner_key;
        new_score.score = score_state.score;
        new_score.score_level = score_state.score_level;
        new_score.calculated_at = score_state.calculated_at;
        new_score.bump = ctx.bumps.new_score;

        (
            Some(ctx.accounts.old_score.key()),
            Some(new_score.key()),
        )
    } else {
        if ctx.accounts.new_score.owner == Pubkey::default() {
            // The score slot is part of the account list even when the old
            // owner had no score; leave the fresh account in a coherent,
            // deletable state.
            let new_score = &mut ctx.accounts.new_score;
            new_score.owner = new_owner_key;
            new_score.score = 0;
            new_score.score_level = ScoreLevel::from_score(0);
            new_score.calculated_at = timestamp;
            new_score.bump = ctx.bumps.new_score;
        }
        (None, None)
    };

    emit!(events::TransferClaimed {
        from_owner: old_owner_key,
        to_owner: new_owner_key,
        old_identity: ctx.accounts.old_identity.key(),
        new_identity: ctx.accounts.new_identity.key(),
        old_score: old_score_key,
        new_score: new_score_key,
        timestamp,
    });

    msg!(
        "Claimed transfer from {} to {}",
        old_owner_key,
        new_owner_key
    );

    Ok(())
}
