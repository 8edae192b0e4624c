use anchor_lang::prelude::*;
use crate::constants::{
    AUTO_CLAIM_CONFIG_SEED, CLAIM_LEDGER_SEED, DIVIDEND_CLAIM_SEED,
    FAILURE_REASON_NO_ELIGIBLE_HOLDERS,
};
use crate::errors::ErrorCode;
use crate::states::{AutoClaimConfig, ClaimLedger, DividendClaim};

/// Closes the snapshot stage of the active claim. With no eligible
/// holders the claim fails here with zero distributions written; an
/// empty holder set is rejected outright as a data problem so the
/// operator can investigate before the cycle resolves.
#[derive(Accounts)]
pub struct FinalizeSnapshot<'info> {
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
}

impl<'info> FinalizeSnapshot<'info> {
    pub fn handle(ctx: Context<FinalizeSnapshot>) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;
        let config = &mut ctx.accounts.auto_claim_config;
        let ledger = &mut ctx.accounts.claim_ledger;
        let claim = &mut ctx.accounts.dividend_claim;

        require!(claim.is_processing(), ErrorCode::ClaimAlreadyTerminal);
        require!(claim.is_snapshot_stage(), ErrorCode::SnapshotStageClosed);
        require!(claim.holder_count > 0, ErrorCode::NoHoldersSnapshotted);

        msg!(
            "Snapshot complete: {} holders, {} eligible, weight {}",
            claim.holder_count,
            claim.eligible_holder_count,
            claim.eligible_weight
        );

        if claim.eligible_holder_count == 0 {
            // Every holder failed the retention filter. The cycle
            // cannot distribute; claimed funds stay in the reward
            // vault and the claim record keeps the failure visible.
            claim.mark_failed(FAILURE_REASON_NO_ELIGIBLE_HOLDERS, now)?;
            ledger.close_failed(claim.claimed_amount)?;
            config.schedule_next(now)?;

            msg!("No eligible holders - claim cycle {} failed", claim.id);

            emit!(crate::events::ClaimCycleFailed {
                claim_id: claim.id,
                failure_reason: FAILURE_REASON_NO_ELIGIBLE_HOLDERS,
                claimed_amount: claim.claimed_amount,
                distributions_recorded: 0,
                next_claim_scheduled: config.next_claim_scheduled,
                timestamp: now,
            });

            return Ok(());
        }

        claim.open_distribution_stage()?;

        msg!("Claim cycle {} entering distribution stage", claim.id);

        // Emit event
        emit!(crate::events::SnapshotFinalized {
            claim_id: claim.id,
            holder_count: claim.holder_count,
            eligible_holder_count: claim.eligible_holder_count,
            eligible_weight: claim.eligible_weight,
            timestamp: now,
        });

        Ok(())
    }
}
