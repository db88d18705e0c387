use anchor_lang::prelude::*;

use crate::constants::SEED_IDENTITY;
use crate::errors::PassportError;
use crate::events;
use crate::state::IdentityAccount;

#[derive(Accounts)]
pub struct VerifyIdentity<'info> {
    #[account(
        mut,
        seeds = [SEED_IDENTITY, owner.key().as_ref()],
        bump = identity.bump,
        constraint = identity.owner == owner.key() @ PassportError::Unauthorized,
    )]
    pub identity: Account<'info, IdentityAccount>,

    pub owner: Signer<'info>,
}

/// Marks the signer's identity as verified. Re-verifying simply refreshes
/// `verified_at`.
pub fn handler(ctx: Context<VerifyIdentity>) -> Result<()> {
    let identity = &mut ctx.accounts.identity;
    let clock = Clock::get()?;

    identity.set_verified(clock.unix_timestamp);

    emit!(events::IdentityVerified {
        owner: identity.owner,
        identity: identity.key(),
        timestamp: clock.unix_timestamp,
    });

    msg!("Verified identity for {}", ctx.accounts.owner.key());

    Ok(())
}
