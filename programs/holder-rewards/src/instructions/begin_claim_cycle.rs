use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};
use crate::constants::{
    AUTO_CLAIM_CONFIG_SEED, CLAIM_LEDGER_SEED, DIVIDEND_CLAIM_SEED, FEE_VAULT_SEED,
    REWARD_AUTHORITY_SEED, REWARD_VAULT_SEED,
};
use crate::errors::ErrorCode;
use crate::math;
use crate::states::{AutoClaimConfig, ClaimLedger, DividendClaim};

/// Starts a claim cycle: checks the scheduler gates, claims the fee
/// source balance into the reward vault, and opens the claim record in
/// processing status. Claimed amount is always the measured reward
/// vault delta, never the pre-checked balance.
#[derive(Accounts)]
pub struct BeginClaimCycle<'info> {
    /// Cranker (or the authority when forcing a manual cycle)
    #[account(mut)]
    pub payer: Signer<'info>,

    /// Auto-claim configuration PDA
    #[account(
        seeds = [AUTO_CLAIM_CONFIG_SEED],
        bump = auto_claim_config.bump,
        constraint = auto_claim_config.is_configured() @ ErrorCode::FeeSourceNotConfigured
    )]
    pub auto_claim_config: Account<'info, AutoClaimConfig>,

    /// Global claim ledger PDA
    #[account(
        mut,
        seeds = [CLAIM_LEDGER_SEED],
        bump = claim_ledger.bump
    )]
    pub claim_ledger: Account<'info, ClaimLedger>,

    /// Claim record for this cycle attempt
    #[account(
        init,
        payer = payer,
        space = DividendClaim::DISCRIMINATOR.len() + DividendClaim::INIT_SPACE,
        seeds = [DIVIDEND_CLAIM_SEED, &(claim_ledger.claim_count + 1).to_le_bytes()],
        bump
    )]
    pub dividend_claim: Account<'info, DividendClaim>,

    /// CHECK: Program authority over the fee and reward vaults
    #[account(
        seeds = [REWARD_AUTHORITY_SEED],
        bump
    )]
    pub reward_authority: UncheckedAccount<'info>,

    /// Fee source vault holding accrued platform fees
    #[account(
        mut,
        seeds = [FEE_VAULT_SEED, token_mint.key().as_ref()],
        bump,
        token::mint = token_mint,
        token::authority = reward_authority,
        constraint = fee_source.key() == auto_claim_config.fee_source_account @ ErrorCode::InvalidFeeSource
    )]
    pub fee_source: Box<Account<'info, TokenAccount>>,

    /// Reward vault taking custody of the claimed amount
    #[account(
        mut,
        seeds = [REWARD_VAULT_SEED, token_mint.key().as_ref()],
        bump,
        token::mint = token_mint,
        token::authority = reward_authority
    )]
    pub reward_vault: Box<Account<'info, TokenAccount>>,

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

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct BeginClaimCycleParams {
    /// Bypass the enabled/not-due gates (authority only)
    pub force: bool,
}

impl<'info> BeginClaimCycle<'info> {
    pub fn handle(ctx: Context<BeginClaimCycle>, params: BeginClaimCycleParams) -> Result<()> {
        let clock = Clock::get()?;
        let now = clock.unix_timestamp;
        let config = &ctx.accounts.auto_claim_config;

        if params.force {
            require!(
                ctx.accounts.payer.key() == config.authority,
                ErrorCode::Unauthorized
            );
        }
        require!(config.enabled || params.force, ErrorCode::DistributionDisabled);
        require!(config.is_due(now) || params.force, ErrorCode::ClaimNotDue);
        require!(
            !ctx.accounts.claim_ledger.has_active_claim(),
            ErrorCode::ClaimCycleInFlight
        );

        let claimable = ctx.accounts.fee_source.amount;
        msg!("Claimable fee balance: {} units", claimable);
        require!(
            claimable > 0 && claimable >= config.min_claim_amount,
            ErrorCode::BelowMinimumClaim
        );

        // Record balance before claim
        let vault_balance_before = ctx.accounts.reward_vault.amount;

        // Move the full fee source balance into cycle custody
        anchor_spl::token::transfer(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                anchor_spl::token::Transfer {
                    from: ctx.accounts.fee_source.to_account_info(),
                    to: ctx.accounts.reward_vault.to_account_info(),
                    authority: ctx.accounts.reward_authority.to_account_info(),
                },
                &[&[REWARD_AUTHORITY_SEED, &[ctx.bumps.reward_authority]]],
            ),
            claimable,
        )?;

        // Reload to measure the realized claim amount
        ctx.accounts.reward_vault.reload()?;
        let claimed_amount = ctx
            .accounts
            .reward_vault
            .amount
            .saturating_sub(vault_balance_before);

        msg!("Fees claimed: {} units", claimed_amount);

        let distribution_amount = math::distribution_pool(claimed_amount, config.distribution_bps)
            .ok_or(ErrorCode::MathOverflow)?;

        msg!("Distribution pool: {} units", distribution_amount);

        let claim_id = ctx.accounts.claim_ledger.next_claim_id()?;
        let claim = &mut ctx.accounts.dividend_claim;
        claim.id = claim_id;
        claim.claimed_amount = claimed_amount;
        claim.distribution_amount = distribution_amount;
        claim.distributed_total = 0;
        claim.residual = 0;
        claim.total_supply = ctx.accounts.token_mint.supply;
        claim.holder_count = 0;
        claim.eligible_holder_count = 0;
        claim.eligible_weight = 0;
        claim.distributions_recorded = 0;
        claim.payouts_executed = 0;
        claim.claim_slot = clock.slot;
        claim.status = DividendClaim::STATUS_PROCESSING;
        claim.stage = DividendClaim::STAGE_SNAPSHOT;
        claim.failure_reason = crate::constants::FAILURE_REASON_NONE;
        claim.claim_timestamp = now;
        claim.settled_timestamp = 0;
        claim.bump = ctx.bumps.dividend_claim;

        ctx.accounts.claim_ledger.open_claim(claim_id)?;

        msg!("Claim cycle {} started", claim_id);

        // Emit event
        emit!(crate::events::ClaimCycleStarted {
            claim_id,
            forced: params.force,
            claimed_amount,
            distribution_amount,
            total_supply: ctx.accounts.dividend_claim.total_supply,
            claim_slot: clock.slot,
            timestamp: now,
        });

        Ok(())
    }
}
