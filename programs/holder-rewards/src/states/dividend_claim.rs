use anchor_lang::prelude::*;
use crate::constants::FAILURE_REASON_NONE;
use crate::errors::ErrorCode;

/// One record per claim cycle attempt. Never deleted; the full set of
/// claim accounts is the audit trail of the pipeline.
#[account]
#[derive(InitSpace)]
pub struct DividendClaim {
    /// Sequential claim id (1-based)
    pub id: u64,
    /// Amount actually moved out of the fee source, measured from the
    /// reward vault balance delta
    pub claimed_amount: u64,
    /// Portion of the claimed amount allocated to holders
    pub distribution_amount: u64,
    /// Sum of all recorded distribution amounts
    pub distributed_total: u64,
    /// Rounding residual left undistributed at settlement
    pub residual: u64,
    /// Token supply at claim time
    pub total_supply: u64,
    /// Holders snapshotted this cycle (eligible and not)
    pub holder_count: u32,
    /// Holders that passed the retention filter
    pub eligible_holder_count: u32,
    /// Combined balance of eligible holders (distribution weight)
    pub eligible_weight: u64,
    /// Distribution records written so far
    pub distributions_recorded: u32,
    /// Payouts executed so far
    pub payouts_executed: u32,
    /// Slot of the claiming transaction
    pub claim_slot: u64,
    /// Claim status: 0=processing, 1=completed, 2=failed
    pub status: u8,
    /// Pipeline stage: 0=snapshot, 1=distribution, 2=settled
    pub stage: u8,
    /// Failure reason code (0 = none)
    pub failure_reason: u8,
    /// Timestamp the cycle started
    pub claim_timestamp: i64,
    /// Timestamp the cycle reached a terminal status
    pub settled_timestamp: i64,
    /// Bump seed for the PDA
    pub bump: u8,
}

impl DividendClaim {
    pub const STATUS_PROCESSING: u8 = 0;
    pub const STATUS_COMPLETED: u8 = 1;
    pub const STATUS_FAILED: u8 = 2;

    pub const STAGE_SNAPSHOT: u8 = 0;
    pub const STAGE_DISTRIBUTION: u8 = 1;
    pub const STAGE_SETTLED: u8 = 2;

    pub fn is_processing(&self) -> bool {
        self.status == Self::STATUS_PROCESSING
    }

    pub fn is_failed(&self) -> bool {
        self.status == Self::STATUS_FAILED
    }

    pub fn is_snapshot_stage(&self) -> bool {
        self.stage == Self::STAGE_SNAPSHOT
    }

    pub fn is_distribution_stage(&self) -> bool {
        self.stage == Self::STAGE_DISTRIBUTION
    }

    /// Accumulates one holder snapshot into the cycle totals
    pub fn record_snapshot(&mut self, token_balance: u64, is_eligible: bool) -> Result<()> {
        require!(self.is_processing(), ErrorCode::ClaimAlreadyTerminal);
        require!(self.is_snapshot_stage(), ErrorCode::SnapshotStageClosed);
        self.holder_count = self
            .holder_count
            .checked_add(1)
            .ok_or(ErrorCode::MathOverflow)?;
        if is_eligible {
            self.eligible_holder_count = self
                .eligible_holder_count
                .checked_add(1)
                .ok_or(ErrorCode::MathOverflow)?;
            self.eligible_weight = self
                .eligible_weight
                .checked_add(token_balance)
                .ok_or(ErrorCode::MathOverflow)?;
        }
        Ok(())
    }

    /// Closes the snapshot stage and opens distribution. The eligible
    /// weight is locked from this point on.
    pub fn open_distribution_stage(&mut self) -> Result<()> {
        require!(self.is_processing(), ErrorCode::ClaimAlreadyTerminal);
        require!(self.is_snapshot_stage(), ErrorCode::SnapshotStageClosed);
        self.stage = Self::STAGE_DISTRIBUTION;
        Ok(())
    }

    /// Accumulates one distribution record into the cycle totals
    pub fn record_distribution(&mut self, amount: u64) -> Result<()> {
        require!(self.is_processing(), ErrorCode::ClaimAlreadyTerminal);
        require!(self.is_distribution_stage(), ErrorCode::DistributionStageNotOpen);
        require!(
            self.distributions_recorded < self.eligible_holder_count,
            ErrorCode::TooManyDistributions
        );
        self.distributions_recorded = self
            .distributions_recorded
            .checked_add(1)
            .ok_or(ErrorCode::MathOverflow)?;
        self.distributed_total = self
            .distributed_total
            .checked_add(amount)
            .ok_or(ErrorCode::MathOverflow)?;
        Ok(())
    }

    /// Counts one executed payout
    pub fn record_payout(&mut self) -> Result<()> {
        require!(!self.is_failed(), ErrorCode::PayoutOnFailedClaim);
        require!(!self.is_snapshot_stage(), ErrorCode::DistributionStageNotOpen);
        self.payouts_executed = self
            .payouts_executed
            .checked_add(1)
            .ok_or(ErrorCode::MathOverflow)?;
        Ok(())
    }

    /// Terminal transition: processing -> completed. One-directional.
    pub fn mark_completed(&mut self, now: i64) -> Result<()> {
        require!(self.is_processing(), ErrorCode::ClaimAlreadyTerminal);
        require!(self.is_distribution_stage(), ErrorCode::DistributionStageNotOpen);
        require!(
            self.distributions_recorded == self.eligible_holder_count,
            ErrorCode::DistributionIncomplete
        );
        self.residual = self
            .distribution_amount
            .checked_sub(self.distributed_total)
            .ok_or(ErrorCode::MathOverflow)?;
        self.status = Self::STATUS_COMPLETED;
        self.stage = Self::STAGE_SETTLED;
        self.settled_timestamp = now;
        Ok(())
    }

    /// Terminal transition: processing -> failed. One-directional; a
    /// fresh cycle creates a new claim record instead of reopening.
    pub fn mark_failed(&mut self, reason: u8, now: i64) -> Result<()> {
        require!(self.is_processing(), ErrorCode::ClaimAlreadyTerminal);
        self.status = Self::STATUS_FAILED;
        self.failure_reason = if reason == FAILURE_REASON_NONE {
            crate::constants::FAILURE_REASON_OPERATOR
        } else {
            reason
        };
        self.settled_timestamp = now;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::FAILURE_REASON_NO_ELIGIBLE_HOLDERS;

    fn processing_claim() -> DividendClaim {
        DividendClaim {
            id: 1,
            claimed_amount: 10_000_000_000,
            distribution_amount: 3_000_000_000,
            distributed_total: 0,
            residual: 0,
            total_supply: 1_000,
            holder_count: 0,
            eligible_holder_count: 0,
            eligible_weight: 0,
            distributions_recorded: 0,
            payouts_executed: 0,
            claim_slot: 42,
            status: DividendClaim::STATUS_PROCESSING,
            stage: DividendClaim::STAGE_SNAPSHOT,
            failure_reason: 0,
            claim_timestamp: 1_000_000,
            settled_timestamp: 0,
            bump: 255,
        }
    }

    #[test]
    fn snapshots_accumulate_eligible_weight_only() {
        let mut claim = processing_claim();
        claim.record_snapshot(700, true).unwrap();
        claim.record_snapshot(300, false).unwrap();
        assert_eq!(claim.holder_count, 2);
        assert_eq!(claim.eligible_holder_count, 1);
        assert_eq!(claim.eligible_weight, 700);
    }

    #[test]
    fn distribution_requires_open_stage() {
        let mut claim = processing_claim();
        claim.record_snapshot(700, true).unwrap();
        assert!(claim.record_distribution(100).is_err());
        claim.open_distribution_stage().unwrap();
        claim.record_distribution(100).unwrap();
        assert_eq!(claim.distributed_total, 100);
    }

    #[test]
    fn snapshot_stage_cannot_reopen() {
        let mut claim = processing_claim();
        claim.record_snapshot(700, true).unwrap();
        claim.open_distribution_stage().unwrap();
        assert!(claim.record_snapshot(100, true).is_err());
        assert!(claim.open_distribution_stage().is_err());
    }

    #[test]
    fn distribution_count_is_bounded_by_eligible_holders() {
        let mut claim = processing_claim();
        claim.record_snapshot(700, true).unwrap();
        claim.open_distribution_stage().unwrap();
        claim.record_distribution(3_000_000_000).unwrap();
        assert!(claim.record_distribution(1).is_err());
    }

    #[test]
    fn completion_requires_all_distributions_recorded() {
        let mut claim = processing_claim();
        claim.record_snapshot(700, true).unwrap();
        claim.record_snapshot(500, true).unwrap();
        claim.open_distribution_stage().unwrap();
        claim.record_distribution(1_750_000_000).unwrap();
        assert!(claim.mark_completed(2_000_000).is_err());
        claim.record_distribution(1_250_000_000).unwrap();
        claim.mark_completed(2_000_000).unwrap();
        assert_eq!(claim.status, DividendClaim::STATUS_COMPLETED);
        assert_eq!(claim.stage, DividendClaim::STAGE_SETTLED);
        assert_eq!(claim.residual, 0);
        assert_eq!(claim.settled_timestamp, 2_000_000);
    }

    #[test]
    fn completion_records_rounding_residual() {
        let mut claim = processing_claim();
        claim.distribution_amount = 1_000;
        claim.record_snapshot(333, true).unwrap();
        claim.record_snapshot(666, true).unwrap();
        claim.open_distribution_stage().unwrap();
        // floor shares: 333 and 666 of a 999 weight
        claim.record_distribution(333).unwrap();
        claim.record_distribution(666).unwrap();
        claim.mark_completed(2_000_000).unwrap();
        assert_eq!(claim.residual, 1);
    }

    #[test]
    fn terminal_transitions_are_one_directional() {
        let mut claim = processing_claim();
        claim
            .mark_failed(FAILURE_REASON_NO_ELIGIBLE_HOLDERS, 2_000_000)
            .unwrap();
        assert!(claim.is_failed());
        assert!(claim.mark_failed(1, 2_000_001).is_err());
        assert!(claim.mark_completed(2_000_001).is_err());
        assert!(claim.record_snapshot(100, true).is_err());
        assert!(claim.record_distribution(100).is_err());
    }

    #[test]
    fn failed_claims_reject_payouts() {
        let mut claim = processing_claim();
        claim.record_snapshot(700, true).unwrap();
        claim.open_distribution_stage().unwrap();
        claim.record_payout().unwrap();
        claim.mark_failed(FAILURE_REASON_NO_ELIGIBLE_HOLDERS, 2_000_000).unwrap();
        assert!(claim.record_payout().is_err());
    }

    #[test]
    fn payouts_allowed_after_completion() {
        let mut claim = processing_claim();
        claim.record_snapshot(700, true).unwrap();
        claim.open_distribution_stage().unwrap();
        claim.record_distribution(3_000_000_000).unwrap();
        claim.mark_completed(2_000_000).unwrap();
        claim.record_payout().unwrap();
        assert_eq!(claim.payouts_executed, 1);
    }

    #[test]
    fn filtered_cycle_pays_full_pool_to_remaining_holder() {
        // 30% of a 10.0-token claim with holders A (700, full
        // retention) and B (300, half retention): B is excluded and A
        // receives the entire 3.0-token pool
        let mut claim = processing_claim();
        claim.record_snapshot(700, true).unwrap();
        claim.record_snapshot(300, false).unwrap();
        claim.open_distribution_stage().unwrap();
        assert_eq!(claim.eligible_weight, 700);

        let share = crate::math::holder_share(claim.distribution_amount, 700, claim.eligible_weight)
            .unwrap();
        assert_eq!(share, 3_000_000_000);
        claim.record_distribution(share).unwrap();
        claim.mark_completed(2_000_000).unwrap();
        assert_eq!(claim.distributed_total, claim.distribution_amount);
        assert_eq!(claim.residual, 0);
    }

    #[test]
    fn operator_failure_defaults_reason() {
        let mut claim = processing_claim();
        claim.mark_failed(0, 2_000_000).unwrap();
        assert_eq!(claim.failure_reason, crate::constants::FAILURE_REASON_OPERATOR);
    }
}
