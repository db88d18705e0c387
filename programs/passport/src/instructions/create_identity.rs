use anchor_lang::prelude::*;

use crate::constants::SEED_IDENTITY;
use crate::events;
use crate::state::IdentityAccount;

#[derive(Accounts)]
pub struct CreateIdentity<'info> {
    #[account(
        init,
        payer = owner,
        space = IdentityAccount::SIZE,
        seeds = [SEED_IDENTITY, owner.key().as_ref()],
        bump,
    )]
    pub identity: Account<'info, IdentityAccount>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<CreateIdentity>) -> Result<()> {
    let identity = &mut ctx.accounts.identity;
    let clock = Clock::get()?;

    identity.owner = ctx.accounts.owner.key();
    identity.created_at = clock.unix_timestamp;
    identity.verified = false;
    identity.verified_at = None;
    identity.bump = ctx.bumps.identity;

    emit!(events::IdentityCreated {
        owner: identity.owner,
        identity: identity.key(),
        timestamp: identity.created_at,
    });

    msg!("Created identity for {}", ctx.accounts.owner.key());

    Ok(())
}
