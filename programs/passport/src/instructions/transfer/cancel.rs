use anchor_lang::prelude::*;

use crate::constants::SEED_TRANSFER_REQUEST;
use crate::errors::PassportError;
use crate::events;
use crate::state::TransferRequest;

#[derive(Accounts)]
pub struct CancelTransfer<'info> {
    #[account(
        mut,
        close = owner,
        seeds = [
            SEED_TRANSFER_REQUEST,
            owner.key().as_ref(),
            transfer_request.to_owner.as_ref(),
        ],
        bump = transfer_request.bump,
        constraint = transfer_request.from_owner == owner.key() @ PassportError::Unauthorized,
    )]
    pub transfer_request: Account<'info, TransferRequest>,

    #[account(mut)]
    pub owner: Signer<'info>,
}

/// The initiator withdraws a transfer request, before or after expiry,
/// reclaiming its rent.
pub fn handler(ctx: Context<CancelTransfer>) -> Result<()> {
    let transfer_request = &ctx.accounts.transfer_request;

    emit!(events::TransferCancelled {
        from_owner: transfer_request.from_owner,
        to_owner: transfer_request.to_owner,
        identity: transfer_request.identity,
        transfer_request: transfer_request.key(),
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!(
        "Cancelled transfer from {} to {}",
        transfer_request.from_owner,
        transfer_request.to_owner
    );

    Ok(())
}
