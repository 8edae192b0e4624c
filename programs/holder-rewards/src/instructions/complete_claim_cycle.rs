use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};
use crate::constants::{
    AUTO_CLAIM_CONFIG_SEED, CLAIM_LEDGER_SEED, DIVIDEND_CLAIM_SEED, REWARD_AUTHORITY_SEED,
    REWARD_VAULT_SEED,
};
use crate::errors::ErrorCode;
use crate::states::{AutoClaimConfig, ClaimLedger, DividendClaim};

/// Settles the active claim once every eligible holder has a
/// distribution record: routes the platform remainder to the treasury,
/// marks the claim completed, and advances the schedule. The floor
/// rounding residual stays in the reward vault, undistributed, and is
/// recorded on the claim.
#[derive(Accounts)]
pub struct CompleteClaimCycle<'info> {
    /// Cranker driving the cycle
    pub cranker: Signer<'info>,

    /// Auto-claim configuration PDA
    #[account(
        mut,
        seeds = [AUTO_CLAIM_CONFIG_SEED],
        bump = auto_claim_config.bump
    )]
    pub auto_claim_config: Account<'info, AutoClaimConfig>,

    /// Global claim ledger PDA
    #[account(
        mut,
        seeds = [CLAIM_LEDGER_SEED],
        bump = claim_ledger.bump
    )]
    pub claim_ledger: Account<'info, ClaimLedger>,

    /// The active claim record
    #[account(
        mut,
        seeds = [DIVIDEND_CLAIM_SEED, &dividend_claim.id.to_le_bytes()],
        bump = dividend_claim.bump,
        constraint = claim_ledger.active_claim == dividend_claim.id @ ErrorCode::WrongClaimCycle
    )]
    pub dividend_claim: Account<'info, DividendClaim>,

    /// CHECK: Program authority over the reward vault
    #[account(
        seeds = [REWARD_AUTHORITY_SEED],
        bump
    )]
    pub reward_authority: UncheckedAccount<'info>,

    /// Reward vault holding the claimed funds
    #[account(
        mut,
        seeds = [REWARD_VAULT_SEED, token_mint.key().as_ref()],
        bump,
        token::mint = token_mint,
        token::authority = reward_authority
    )]
    pub reward_vault: Box<Account<'info, TokenAccount>>,

    /// Treasury token account receiving the non-distributed remainder
    #[account(
        mut,
        constraint = treasury_account.key() == auto_claim_config.treasury_account @ ErrorCode::InvalidTreasuryAccount,
        constraint = treasury_account.mint == token_mint.key() @ ErrorCode::InvalidTreasuryAccount
    )]
    pub treasury_account: Box<Account<'info, TokenAccount>>,

    /// Mint of the tracked reward token
    #[account(
        constraint = token_mint.key() == auto_claim_config.token_mint @ ErrorCode::InvalidTokenMint
    )]
    pub token_mint: Account<'info, Mint>,

    /// Token program
    pub token_program: Program<'info, Token>,
}

impl<'info> CompleteClaimCycle<'info> {
    pub fn handle(ctx: Context<CompleteClaimCycle>) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;
        let claim = &mut ctx.accounts.dividend_claim;

        require!(claim.is_processing(), ErrorCode::ClaimAlreadyTerminal);
        require!(claim.is_distribution_stage(), ErrorCode::DistributionStageNotOpen);
        require!(
            claim.distributions_recorded == claim.eligible_holder_count,
            ErrorCode::DistributionIncomplete
        );

        // Platform share: everything claimed beyond the holder pool
        let treasury_amount = claim
            .claimed_amount
            .checked_sub(claim.distribution_amount)
            .ok_or(ErrorCode::MathOverflow)?;

        if treasury_amount > 0 {
            anchor_spl::token::transfer(
                CpiContext::new_with_signer(
                    ctx.accounts.token_program.to_account_info(),
                    anchor_spl::token::Transfer {
                        from: ctx.accounts.reward_vault.to_account_info(),
                        to: ctx.accounts.treasury_account.to_account_info(),
                        authority: ctx.accounts.reward_authority.to_account_info(),
                    },
                    &[&[REWARD_AUTHORITY_SEED, &[ctx.bumps.reward_authority]]],
                ),
                treasury_amount,
            )?;
            msg!("Routed {} units to treasury", treasury_amount);
        }

        claim.mark_completed(now)?;

        let config = &mut ctx.accounts.auto_claim_config;
        config.last_successful_claim = now;
        config.schedule_next(now)?;

        let ledger = &mut ctx.accounts.claim_ledger;
        ledger.close_completed(claim.claimed_amount, claim.distributed_total)?;

        msg!(
            "Claim cycle {} completed: claimed {}, distributed {}, residual {}",
            claim.id,
            claim.claimed_amount,
            claim.distributed_total,
            claim.residual
        );
        msg!("Next claim scheduled at {}", config.next_claim_scheduled);

        // Emit event
        emit!(crate::events::ClaimCycleCompleted {
            claim_id: claim.id,
            claimed_amount: claim.claimed_amount,
            distributed_total: claim.distributed_total,
            residual: claim.residual,
            treasury_amount,
            eligible_holder_count: claim.eligible_holder_count,
            next_claim_scheduled: config.next_claim_scheduled,
            timestamp: now,
        });

        Ok(())
    }
}
