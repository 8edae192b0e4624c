use anchor_lang::prelude::*;
use crate::constants::{AUTO_CLAIM_CONFIG_SEED, CLAIM_LEDGER_SEED, DIVIDEND_CLAIM_SEED};
use crate::errors::ErrorCode;
use crate::states::{AutoClaimConfig, ClaimLedger, DividendClaim};

/// Operator escape hatch for a cycle that cannot make progress (for
/// example an external service failure observed off-chain). Marks the
/// in-flight claim failed with the captured reason, clears the
/// single-active-cycle marker, and advances the schedule so the next
/// cycle retries naturally at the next interval. Funds already claimed
/// into the reward vault are not rolled back.
#[derive(Accounts)]
pub struct FailClaimCycle<'info> {
    /// Admin authority
    pub authority: Signer<'info>,

    /// Auto-claim configuration PDA
    #[account(
        mut,
        seeds = [AUTO_CLAIM_CONFIG_SEED],
        bump = auto_claim_config.bump,
        constraint = auto_claim_config.authority == authority.key() @ ErrorCode::Unauthorized
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
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct FailClaimCycleParams {
    /// Failure reason code (0 maps to the generic operator reason)
    pub reason: u8,
}

impl<'info> FailClaimCycle<'info> {
    pub fn handle(ctx: Context<FailClaimCycle>, params: FailClaimCycleParams) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;
        let claim = &mut ctx.accounts.dividend_claim;

        claim.mark_failed(params.reason, now)?;

        let ledger = &mut ctx.accounts.claim_ledger;
        ledger.close_failed(claim.claimed_amount)?;

        let config = &mut ctx.accounts.auto_claim_config;
        config.schedule_next(now)?;

        msg!(
            "Claim cycle {} failed with reason {} ({} units claimed, {} distributions recorded)",
            claim.id,
            claim.failure_reason,
            claim.claimed_amount,
            claim.distributions_recorded
        );

        // Emit event
        emit!(crate::events::ClaimCycleFailed {
            claim_id: claim.id,
            failure_reason: claim.failure_reason,
            claimed_amount: claim.claimed_amount,
            distributions_recorded: claim.distributions_recorded,
            next_claim_scheduled: config.next_claim_scheduled,
            timestamp: now,
        });

        Ok(())
    }
}
