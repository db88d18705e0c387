use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;
mod tests;

use instructions::*;

declare_id!("HfPTAU1bZBHPqcpEGweinAH9zsPafYnnaxk4k5xsTU3M");

#[program]
pub mod passport {
    use super::*;

    // === Identity Management ===

    /// Create an unverified identity for the signer
    pub fn create_identity(ctx: Context<CreateIdentity>) -> Result<()> {
        instructions::create_identity::handler(ctx)
    }

    /// Mark the signer's identity as verified
    pub fn verify_identity(ctx: Context<VerifyIdentity>) -> Result<()> {
        instructions::verify_identity::handler(ctx)
    }

    /// Revoke the signer's verification
    pub fn unverify_identity(ctx: Context<UnverifyIdentity>) -> Result<()> {
        instructions::unverify_identity::handler(ctx)
    }

    /// Close the signer's identity and its score account, reclaiming rent
    pub fn delete_identity(ctx: Context<DeleteIdentity>) -> Result<()> {
        instructions::delete_identity::handler(ctx)
    }

    /// Move an identity directly to a new wallet; both wallets sign
    pub fn transfer_identity(ctx: Context<TransferIdentity>) -> Result<()> {
        instructions::transfer_identity::handler(ctx)
    }

    // === Credit Score ===

    /// Derive the signer's credit score from wallet activity
    pub fn calculate_score(ctx: Context<CalculateScore>) -> Result<()> {
        instructions::calculate_score::handler(ctx)
    }

    /// Close the signer's score account, reclaiming rent
    pub fn delete_score(ctx: Context<DeleteScore>) -> Result<()> {
        instructions::delete_score::handler(ctx)
    }

    // === Transfer Protocol ===

    /// Offer the signer's identity to another wallet, valid until expiry
    pub fn initiate_transfer(ctx: Context<InitiateTransfer>) -> Result<()> {
        instructions::transfer::initiate::handler(ctx)
    }

    /// Recipient claims a pending transfer before it expires
    pub fn claim_transfer(ctx: Context<ClaimTransfer>) -> Result<()> {
        instructions::transfer::claim::handler(ctx)
    }

    /// Initiator withdraws a transfer request
    pub fn cancel_transfer(ctx: Context<CancelTransfer>) -> Result<()> {
        instructions::transfer::cancel::handler(ctx)
    }
}
