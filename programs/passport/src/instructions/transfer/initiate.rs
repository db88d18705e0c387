use anchor_lang::prelude::*;

use crate::constants::{SEED_IDENTITY, SEED_TRANSFER_REQUEST, TRANSFER_EXPIRY_SECONDS};
use crate::errors::PassportError;
use crate::events;
use crate::state::{IdentityAccount, TransferRequest};

#[derive(Accounts)]
pub struct InitiateTransfer<'info> {
    #[account(
        mut,
        seeds = [SEED_IDENTITY, owner.key().as_ref()],
        bump = identity.bump,
        constraint = identity.owner == owner.key() @ PassportError::Unauthorized,
        constraint = identity.verified @ PassportError::IdentityNotVerified,
    )]
    pub identity: Account<'info, IdentityAccount>,

    #[account(
        init_if_needed,
        payer = owner,
        space = TransferRequest::SIZE,
        seeds = [SEED_TRANSFER_REQUEST, owner.key().as_ref(), recipient.key().as_ref()],
        bump,
    )]
    pub transfer_request: Account<'info, TransferRequest>,

    #[account(mut)]
    pub owner: Signer<'info>,

    /// CHECK: recipient only seeds the transfer request PDA and receives
    /// nothing here; no further checks needed
    pub recipient: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

/// Opens a transfer request from the signer to `recipient`. An expired
/// request for the same pair is overwritten in place; a live one must be
/// cancelled or left to expire first.
pub fn handler(ctx: Context<InitiateTransfer>) -> Result<()> {
    let transfer_request = &mut ctx.accounts.transfer_request;
    let timestamp = Clock::get()?.unix_timestamp;

    if transfer_request.is_initialized() && !transfer_request.is_expired(timestamp) {
        return err!(PassportError::TransferAlreadyPending);
    }

    transfer_request.from_owner = ctx.accounts.owner.key();
    transfer_request.to_owner = ctx.accounts.recipient.key();
    transfer_request.identity = ctx.accounts.identity.key();
    transfer_request.created_at = timestamp;
    transfer_request.expires_at = timestamp + TRANSFER_EXPIRY_SECONDS;
    transfer_request.bump = ctx.bumps.transfer_request;

    emit!(events::TransferInitiated {
        from_owner: transfer_request.from_owner,
        to_owner: transfer_request.to_owner,
        identity: transfer_request.identity,
        transfer_request: transfer_request.key(),
        expires_at: transfer_request.expires_at,
        timestamp,
    });

    msg!(
        "Initiated transfer from {} to {}",
        transfer_request.from_owner,
        transfer_request.to_owner
    );

    Ok(())
}
