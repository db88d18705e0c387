use anchor_lang::prelude::*;

use crate::constants::SEED_IDENTITY;
use crate::errors::PassportError;
use crate::events;
use crate::state::{CreditScoreAccount, IdentityAccount};

#[derive(Accounts)]
pub struct DeleteIdentity<'info> {
    #[account(
        mut,
        seeds = [SEED_IDENTITY, owner.key().as_ref()],
        bump = identity.bump,
        close = owner,
        constraint = identity.owner == owner.key() @ PassportError::Unauthorized,
    )]
    pub identity: Account<'info, IdentityAccount>,

    /// Paired credit score account; uninitialized when no score was ever
    /// calculated for this wallet.
    /// CHECK: validated against the score PDA and only touched when it
    /// holds data
    #[account(mut)]
    pub score_account: AccountInfo<'info>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Closes the signer's identity and, when present, its score account in
/// the same instruction, refunding both rents to the owner.
pub fn handler(ctx: Context<DeleteIdentity>) -> Result<()> {
    let clock = Clock::get()?;
    let owner_key = ctx.accounts.owner.key();

    if ctx.accounts.score_account.data_len() > 0 {
        CreditScoreAccount::load_checked(
            &ctx.accounts.score_account,
            &owner_key,
            ctx.program_id,
        )?;

        let score_lamports = ctx.accounts.score_account.lamports();
        **ctx.accounts.score_account.try_borrow_mut_lamports()? = 0;
        **ctx
            .accounts
            .owner
            .to_account_info()
            .try_borrow_mut_lamports()? += score_lamports;
    }

    emit!(events::IdentityDeleted {
        owner: owner_key,
        identity: ctx.accounts.identity.key(),
        timestamp: clock.unix_timestamp,
    });

    msg!("Deleted identity for {}", owner_key);

    Ok(())
}
