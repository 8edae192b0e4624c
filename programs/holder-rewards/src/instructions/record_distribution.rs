use anchor_lang::prelude::*;
use crate::constants::{
    CLAIM_LEDGER_SEED, DIVIDEND_CLAIM_SEED, DIVIDEND_DISTRIBUTION_SEED, HOLDER_SNAPSHOT_SEED,
};
use crate::errors::ErrorCode;
use crate::math;
use crate::states::{ClaimLedger, DividendClaim, DividendDistribution, HolderSnapshot};

/// Writes the distribution record for one eligible holder of the
/// active claim. The share is proportional to the holder's balance
/// within the eligible pool, not total supply, so excluding ineligible
/// holders does not shrink the amount paid out. The PDA derivation
/// guarantees exactly-once record creation per (claim, holder).
#[derive(Accounts)]
pub struct RecordDistribution<'info> {
    /// Cranker paying for the distribution account
    #[account(mut)]
    pub payer: Signer<'info>,

    /// Global claim ledger PDA
    #[account(
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

    /// CHECK: The holder receiving the share
    pub holder: UncheckedAccount<'info>,

    /// The holder's snapshot row for this claim
    #[account(
        seeds = [HOLDER_SNAPSHOT_SEED, &dividend_claim.id.to_le_bytes(), holder.key().as_ref()],
        bump = holder_snapshot.bump,
        constraint = holder_snapshot.is_eligible @ ErrorCode::HolderNotEligible
    )]
    pub holder_snapshot: Account<'info, HolderSnapshot>,

    /// Distribution record for this holder and claim
    #[account(
        init,
        payer = payer,
        space = DividendDistribution::DISCRIMINATOR.len() + DividendDistribution::INIT_SPACE,
        seeds = [DIVIDEND_DISTRIBUTION_SEED, &dividend_claim.id.to_le_bytes(), holder.key().as_ref()],
        bump
    )]
    pub dividend_distribution: Account<'info, DividendDistribution>,

    /// System program
    pub system_program: Program<'info, System>,
}

impl<'info> RecordDistribution<'info> {
    pub fn handle(ctx: Context<RecordDistribution>) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;
        let claim = &mut ctx.accounts.dividend_claim;
        let snapshot = &ctx.accounts.holder_snapshot;

        require!(claim.is_processing(), ErrorCode::ClaimAlreadyTerminal);
        require!(claim.is_distribution_stage(), ErrorCode::DistributionStageNotOpen);

        let amount = math::holder_share(
            claim.distribution_amount,
            snapshot.token_balance,
            claim.eligible_weight,
        )
        .ok_or(ErrorCode::MathOverflow)?;

        let share_bps = math::eligible_share_bps(snapshot.token_balance, claim.eligible_weight)
            .ok_or(ErrorCode::MathOverflow)?;

        msg!(
            "Holder {} share: {} bps of eligible pool, {} units",
            ctx.accounts.holder.key(),
            share_bps,
            amount
        );

        let distribution = &mut ctx.accounts.dividend_distribution;
        distribution.claim_id = claim.id;
        distribution.holder = ctx.accounts.holder.key();
        distribution.token_balance = snapshot.token_balance;
        distribution.share_bps = share_bps;
        distribution.amount = amount;
        distribution.status = DividendDistribution::STATUS_PENDING;
        distribution.recorded_at = now;
        distribution.bump = ctx.bumps.dividend_distribution;

        claim.record_distribution(amount)?;

        let claim_id = claim.id;
        let distributions_recorded = claim.distributions_recorded;

        msg!(
            "Distribution {}/{} recorded for claim {}",
            distributions_recorded,
            claim.eligible_holder_count,
            claim_id
        );

        // Emit event
        emit!(crate::events::DistributionRecorded {
            claim_id,
            holder: ctx.accounts.holder.key(),
            token_balance: snapshot.token_balance,
            share_bps,
            amount,
            distributions_recorded,
            timestamp: now,
        });

        Ok(())
    }
}
