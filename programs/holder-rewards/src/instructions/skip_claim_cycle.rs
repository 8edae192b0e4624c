use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;
use crate::constants::{
    AUTO_CLAIM_CONFIG_SEED, CLAIM_LEDGER_SEED, SKIP_REASON_BELOW_MINIMUM,
    SKIP_REASON_NOT_CONFIGURED,
};
use crate::errors::ErrorCode;
use crate::states::{AutoClaimConfig, ClaimLedger};

/// Resolves a due cycle that cannot run as a clean no-op: the fee
/// source is not configured, or the claimable balance is below the
/// minimum. The schedule still advances so the pipeline does not
/// hot-loop on the same condition.
#[derive(Accounts)]
pub struct SkipClaimCycle<'info> {
    /// Cranker triggering the scheduled check
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

    /// CHECK: Fee source token account; validated against the config in
    /// the handler and ignored while the fee source is unconfigured
    pub fee_source: UncheckedAccount<'info>,
}

impl<'info> SkipClaimCycle<'info> {
    pub fn handle(ctx: Context<SkipClaimCycle>) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;
        let config = &mut ctx.accounts.auto_claim_config;
        let ledger = &mut ctx.accounts.claim_ledger;

        require!(!ledger.has_active_claim(), ErrorCode::ClaimCycleInFlight);
        require!(config.enabled, ErrorCode::DistributionDisabled);
        require!(config.is_due(now), ErrorCode::ClaimNotDue);

        let (reason, available_amount) = if !config.is_configured() {
            msg!("Fee source not configured - skipping cycle");
            (SKIP_REASON_NOT_CONFIGURED, 0)
        } else {
            require!(
                ctx.accounts.fee_source.key() == config.fee_source_account,
                ErrorCode::InvalidFeeSource
            );
            let fee_source =
                TokenAccount::try_deserialize(&mut &ctx.accounts.fee_source.data.borrow()[..])
                    .map_err(|_| ErrorCode::InvalidFeeSource)?;
            // a claimable balance means the cycle must run, not skip
            require!(
                fee_source.amount < config.min_claim_amount,
                ErrorCode::SkipNotApplicable
            );
            msg!(
                "Claimable balance {} below minimum {} - skipping cycle",
                fee_source.amount,
                config.min_claim_amount
            );
            (SKIP_REASON_BELOW_MINIMUM, fee_source.amount)
        };

        config.schedule_next(now)?;
        ledger.record_skip()?;

        msg!("Next claim scheduled at {}", config.next_claim_scheduled);

        // Emit event
        emit!(crate::events::ClaimCycleSkipped {
            reason,
            available_amount,
            min_claim_amount: config.min_claim_amount,
            next_claim_scheduled: config.next_claim_scheduled,
            timestamp: now,
        });

        Ok(())
    }
}
