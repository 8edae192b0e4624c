use anchor_lang::prelude::*;
use anchor_spl::associated_token::get_associated_token_address;
use anchor_spl::token::{Mint, TokenAccount};
use crate::constants::{AUTO_CLAIM_CONFIG_SEED, HOLDER_STATUS_SEED};
use crate::errors::ErrorCode;
use crate::states::{AutoClaimConfig, HolderStatus};

/// Admin reset of a blacklisted holder: clears the permanent flag and
/// re-baselines retention at the holder's current balance. Violation
/// history is retained for audit.
#[derive(Accounts)]
pub struct ResetHolderStatus<'info> {
    /// Admin authority
    pub authority: Signer<'info>,

    /// Auto-claim configuration PDA
    #[account(
        seeds = [AUTO_CLAIM_CONFIG_SEED],
        bump = auto_claim_config.bump,
        constraint = auto_claim_config.authority == authority.key() @ ErrorCode::Unauthorized
    )]
    pub auto_claim_config: Account<'info, AutoClaimConfig>,

    /// CHECK: The holder being reset
    pub holder: UncheckedAccount<'info>,

    /// The holder's loyalty record
    #[account(
        mut,
        seeds = [HOLDER_STATUS_SEED, token_mint.key().as_ref(), holder.key().as_ref()],
        bump = holder_status.bump
    )]
    pub holder_status: Account<'info, HolderStatus>,

    /// CHECK: The holder's associated token account; validated in the
    /// handler, and allowed to be closed (reads as a zero balance)
    pub holder_token_account: UncheckedAccount<'info>,

    /// Mint of the tracked reward token
    #[account(
        constraint = token_mint.key() == auto_claim_config.token_mint @ ErrorCode::InvalidTokenMint
    )]
    pub token_mint: Account<'info, Mint>,
}

impl<'info> ResetHolderStatus<'info> {
    pub fn handle(ctx: Context<ResetHolderStatus>) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;
        let holder_status = &mut ctx.accounts.holder_status;

        require!(
            holder_status.permanently_blacklisted,
            ErrorCode::HolderNotBlacklisted
        );

        let expected_ata = get_associated_token_address(
            &ctx.accounts.holder.key(),
            &ctx.accounts.token_mint.key(),
        );
        require!(
            ctx.accounts.holder_token_account.key() == expected_ata,
            ErrorCode::InvalidHolderTokenAccount
        );

        // A closed or never-created token account re-baselines at zero
        let current_balance = if ctx.accounts.holder_token_account.data_is_empty() {
            0
        } else {
            TokenAccount::try_deserialize(&mut &ctx.accounts.holder_token_account.data.borrow()[..])
                .map_err(|_| ErrorCode::InvalidHolderTokenAccount)?
                .amount
        };

        holder_status.reset(current_balance, now);

        msg!(
            "Holder {} reset with new baseline {} units",
            ctx.accounts.holder.key(),
            current_balance
        );

        // Emit event
        emit!(crate::events::HolderStatusReset {
            holder: ctx.accounts.holder.key(),
            mint: ctx.accounts.token_mint.key(),
            new_baseline: current_balance,
            violation_count: holder_status.violation_count,
            timestamp: now,
        });

        Ok(())
    }
}
