use anchor_lang::prelude::*;

use crate::constants::SEED_IDENTITY;
use crate::errors::PassportError;
use crate::events;
use crate::state::IdentityAccount;

#[derive(Accounts)]
pub struct UnverifyIdentity<'info> {
    #[account(
        mut,
        seeds = [SEED_IDENTITY, owner.key().as_ref()],
        bump = identity.bump,
        constraint = identity.owner == owner.key() @ PassportError::Unauthorized,
    )]
    pub identity: Account<'info, IdentityAccount>,

    pub owner: Signer<'info>,
}

pub fn handler(ctx: Context<UnverifyIdentity>) -> Result<()> {
    let identity = &mut ctx.accounts.identity;
    let clock = Clock::get()?;

    identity.clear_verified();

    emit!(events::IdentityUnverified {
        owner: identity.owner,
        identity: identity.key(),
        timestamp: clock.unix_timestamp,
    });

    msg!("Unverified identity for {}", ctx.accounts.owner.key());

    Ok(())
}
