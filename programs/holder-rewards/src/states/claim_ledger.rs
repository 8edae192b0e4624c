use anchor_lang::prelude::*;
use crate::errors::ErrorCode;

/// Global claim-cycle bookkeeping. `active_claim` is the
/// mutual-exclusion marker: at most one claim cycle processes at a time.
#[account]
#[derive(InitSpace)]
pub struct ClaimLedger {
    /// Total claim cycles attempted (ids are 1-based)
    pub claim_count: u64,
    /// Id of the claim currently processing (0 = none)
    pub active_claim: u64,
    /// Cycles that reached completed status
    pub completed_count: u64,
    /// Cycles that reached failed status
    pub failed_count: u64,
    /// Cycles skipped as no-ops (unconfigured or below minimum)
    pub skipped_count: u64,
    /// Lifetime amount claimed from the fee source
    pub lifetime_claimed: u64,
    /// Lifetime amount recorded for distribution to holders
    pub lifetime_distributed: u64,
    /// Bump seed for the PDA
    pub bump: u8,
}

impl ClaimLedger {
    /// Whether a claim cycle is currently in flight
    pub fn has_active_claim(&self) -> bool {
        self.active_claim != 0
    }

    /// Id the next claim cycle will receive
    pub fn next_claim_id(&self) -> Result<u64> {
        Ok(self.claim_count.checked_add(1).ok_or(ErrorCode::MathOverflow)?)
    }

    /// Opens a new claim cycle, enforcing the single-active-cycle rule
    pub fn open_claim(&mut self, claim_id: u64) -> Result<()> {
        require!(!self.has_active_claim(), ErrorCode::ClaimCycleInFlight);
        require!(claim_id == self.next_claim_id()?, ErrorCode::WrongClaimCycle);
        self.claim_count = claim_id;
        self.active_claim = claim_id;
        Ok(())
    }

    /// Closes the active claim as completed and accumulates lifetime totals
    pub fn close_completed(&mut self, claimed_amount: u64, distributed_total: u64) -> Result<()> {
        self.active_claim = 0;
        self.completed_count = self
            .completed_count
            .checked_add(1)
            .ok_or(ErrorCode::MathOverflow)?;
        self.lifetime_claimed = self
            .lifetime_claimed
            .checked_add(claimed_amount)
            .ok_or(ErrorCode::MathOverflow)?;
        self.lifetime_distributed = self
            .lifetime_distributed
            .checked_add(distributed_total)
            .ok_or(ErrorCode::MathOverflow)?;
        Ok(())
    }

    /// Closes the active claim as failed. Claimed funds are not rolled
    /// back; the claim account remains as the reconciliation record.
    pub fn close_failed(&mut self, claimed_amount: u64) -> Result<()> {
        self.active_claim = 0;
        self.failed_count = self
            .failed_count
            .checked_add(1)
            .ok_or(ErrorCode::MathOverflow)?;
        self.lifetime_claimed = self
            .lifetime_claimed
            .checked_add(claimed_amount)
            .ok_or(ErrorCode::MathOverflow)?;
        Ok(())
    }

    /// Records a skipped (no-op) cycle
    pub fn record_skip(&mut self) -> Result<()> {
        self.skipped_count = self
            .skipped_count
            .checked_add(1)
            .ok_or(ErrorCode::MathOverflow)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ledger() -> ClaimLedger {
        ClaimLedger {
            claim_count: 0,
            active_claim: 0,
            completed_count: 0,
            failed_count: 0,
            skipped_count: 0,
            lifetime_claimed: 0,
            lifetime_distributed: 0,
            bump: 255,
        }
    }

    #[test]
    fn claim_ids_are_one_based_and_sequential() {
        let mut l = ledger();
        assert_eq!(l.next_claim_id().unwrap(), 1);
        l.open_claim(1).unwrap();
        assert_eq!(l.claim_count, 1);
        assert_eq!(l.active_claim, 1);
    }

    #[test]
    fn second_open_while_active_is_rejected() {
        let mut l = ledger();
        l.open_claim(1).unwrap();
        assert!(l.open_claim(2).is_err());
        assert_eq!(l.claim_count, 1);
    }

    #[test]
    fn out_of_sequence_id_is_rejected() {
        let mut l = ledger();
        assert!(l.open_claim(3).is_err());
    }

    #[test]
    fn completion_clears_mutex_and_accumulates() {
        let mut l = ledger();
        l.open_claim(1).unwrap();
        l.close_completed(10_000, 3_000).unwrap();
        assert!(!l.has_active_claim());
        assert_eq!(l.completed_count, 1);
        assert_eq!(l.lifetime_claimed, 10_000);
        assert_eq!(l.lifetime_distributed, 3_000);
        // a fresh cycle can open again
        l.open_claim(2).unwrap();
        assert_eq!(l.active_claim, 2);
    }

    #[test]
    fn failure_clears_mutex_but_keeps_claimed_total() {
        let mut l = ledger();
        l.open_claim(1).unwrap();
        l.close_failed(10_000).unwrap();
        assert!(!l.has_active_claim());
        assert_eq!(l.failed_count, 1);
        assert_eq!(l.lifetime_claimed, 10_000);
        assert_eq!(l.lifetime_distributed, 0);
    }

    #[test]
    fn skips_only_bump_the_counter() {
        let mut l = ledger();
        l.record_skip().unwrap();
        l.record_skip().unwrap();
        assert_eq!(l.skipped_count, 2);
        assert_eq!(l.claim_count, 0);
        assert!(!l.has_active_claim());
    }
}
