use anchor_lang::prelude::*;
use anchor_spl::associated_token::get_associated_token_address;
use anchor_spl::token::{Mint, Token, TokenAccount};
use crate::constants::{
    AUTO_CLAIM_CONFIG_SEED, DIVIDEND_CLAIM_SEED, DIVIDEND_DISTRIBUTION_SEED, DIVIDEND_PAYOUT_SEED,
    REWARD_AUTHORITY_SEED, REWARD_VAULT_SEED,
};
use crate::errors::ErrorCode;
use crate::states::{AutoClaimConfig, DividendClaim, DividendDistribution, DividendPayout};

/// Executes the value transfer for one pending distribution and writes
/// the payout record. Payouts may run during the distribution stage or
/// after completion; record creation and delivery are deliberately
/// decoupled.
#[derive(Accounts)]
pub struct ExecutePayout<'info> {
    /// Cranker paying for the payout account
    #[account(mut)]
    pub payer: Signer<'info>,

    /// Auto-claim configuration PDA
    #[account(
        seeds = [AUTO_CLAIM_CONFIG_SEED],
        bump = auto_claim_config.bump
    )]
    pub auto_claim_config: Account<'info, AutoClaimConfig>,

    /// The claim record this payout settles against
    #[account(
        mut,
        seeds = [DIVIDEND_CLAIM_SEED, &dividend_claim.id.to_le_bytes()],
        bump = dividend_claim.bump
    )]
    pub dividend_claim: Account<'info, DividendClaim>,

    /// The pending distribution being paid
    #[account(
        mut,
        seeds = [DIVIDEND_DISTRIBUTION_SEED, &dividend_claim.id.to_le_bytes(), holder.key().as_ref()],
        bump = dividend_distribution.bump
    )]
    pub dividend_distribution: Account<'info, DividendDistribution>,

    /// Payout record, created only when the transfer executes
    #[account(
        init,
        payer = payer,
        space = DividendPayout::DISCRIMINATOR.len() + DividendPayout::INIT_SPACE,
        seeds = [DIVIDEND_PAYOUT_SEED, &dividend_claim.id.to_le_bytes(), holder.key().as_ref()],
        bump
    )]
    pub dividend_payout: Account<'info, DividendPayout>,

    /// CHECK: Program authority over the reward vault
    #[account(
        seeds = [REWARD_AUTHORITY_SEED],
        bump
    )]
    pub reward_authority: UncheckedAccount<'info>,

    /// Reward vault funding the payout
    #[account(
        mut,
        seeds = [REWARD_VAULT_SEED, token_mint.key().as_ref()],
        bump,
        token::mint = token_mint,
        token::authority = reward_authority
    )]
    pub reward_vault: Box<Account<'info, TokenAccount>>,

    /// CHECK: The holder being paid
    pub holder: UncheckedAccount<'info>,

    /// CHECK: The holder's associated token account; validated against
    /// the canonical derivation in the handler
    #[account(mut)]
    pub holder_token_account: UncheckedAccount<'info>,

    /// Mint of the tracked reward token
    #[account(
        constraint = token_mint.key() == auto_claim_config.token_mint @ ErrorCode::InvalidTokenMint
    )]
    pub token_mint: Account<'info, Mint>,

    /// Token program
    pub token_program: Program<'info, Token>,

    /// System program
    pub system_program: Program<'info, System>,
}

impl<'info> ExecutePayout<'info> {
    pub fn handle(ctx: Context<ExecutePayout>) -> Result<()> {
        let clock = Clock::get()?;
        let now = clock.unix_timestamp;

        let claim = &mut ctx.accounts.dividend_claim;
        let distribution = &mut ctx.accounts.dividend_distribution;

        require!(!claim.is_failed(), ErrorCode::PayoutOnFailedClaim);
        require!(distribution.is_pending(), ErrorCode::DistributionNotPending);

        // Validate the canonical ATA before transferring
        require!(
            !ctx.accounts.holder_token_account.data_is_empty(),
            ErrorCode::InvalidHolderTokenAccount
        );
        let expected_ata = get_associated_token_address(
            &ctx.accounts.holder.key(),
            &ctx.accounts.token_mint.key(),
        );
        require!(
            ctx.accounts.holder_token_account.key() == expected_ata,
            ErrorCode::InvalidHolderTokenAccount
        );

        let amount = distribution.amount;
        msg!(
            "Paying out {} units to holder {}",
            amount,
            ctx.accounts.holder.key()
        );

        if amount > 0 {
            anchor_spl::token::transfer(
                CpiContext::new_with_signer(
                    ctx.accounts.token_program.to_account_info(),
                    anchor_spl::token::Transfer {
                        from: ctx.accounts.reward_vault.to_account_info(),
                        to: ctx.accounts.holder_token_account.to_account_info(),
                        authority: ctx.accounts.reward_authority.to_account_info(),
                    },
                    &[&[REWARD_AUTHORITY_SEED, &[ctx.bumps.reward_authority]]],
                ),
                amount,
            )?;
        }

        distribution.mark_paid()?;
        claim.record_payout()?;

        let claim_id = claim.id;
        let payout = &mut ctx.accounts.dividend_payout;
        payout.claim_id = claim_id;
        payout.holder = ctx.accounts.holder.key();
        payout.payout_amount = amount;
        payout.payout_slot = clock.slot;
        payout.status = DividendPayout::STATUS_COMPLETED;
        payout.paid_at = now;
        payout.bump = ctx.bumps.dividend_payout;

        msg!("Payout recorded for claim {}", claim_id);

        // Emit event
        emit!(crate::events::PayoutExecuted {
            claim_id,
            holder: ctx.accounts.holder.key(),
            payout_amount: amount,
            holder_token_account: ctx.accounts.holder_token_account.key(),
            payout_slot: clock.slot,
            timestamp: now,
        });

        Ok(())
    }
}
