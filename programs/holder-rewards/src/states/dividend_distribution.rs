use anchor_lang::prelude::*;
use crate::errors::ErrorCode;

/// One distribution record per (claim, eligible holder). Creation is
/// exactly-once by PDA derivation; the payout transfer is tracked
/// separately and may lag record creation.
#[account]
#[derive(InitSpace)]
pub struct DividendDistribution {
    /// The claim cycle this distribution belongs to
    pub claim_id: u64,
    /// The holder receiving the share
    pub holder: Pubkey,
    /// Holder balance the share was computed from
    pub token_balance: u64,
    /// Share of the eligible pool (not total supply), in basis points
    pub share_bps: u16,
    /// Amount allocated to the holder
    pub amount: u64,
    /// Distribution status: 0=pending, 1=completed, 2=failed
    pub status: u8,
    /// Timestamp the record was written
    pub recorded_at: i64,
    /// Bump seed for the PDA
    pub bump: u8,
}

impl DividendDistribution {
    pub const STATUS_PENDING: u8 = 0;
    pub const STATUS_COMPLETED: u8 = 1;
    pub const STATUS_FAILED: u8 = 2;

    pub fn is_pending(&self) -> bool {
        self.status == Self::STATUS_PENDING
    }

    /// Marks the distribution as paid out. Valid only once.
    pub fn mark_paid(&mut self) -> Result<()> {
        require!(self.is_pending(), ErrorCode::DistributionNotPending);
        self.status = Self::STATUS_COMPLETED;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payout_completes_a_pending_distribution_once() {
        let mut distribution = DividendDistribution {
            claim_id: 1,
            holder: Pubkey::new_unique(),
            token_balance: 700,
            share_bps: 10_000,
            amount: 3_000_000_000,
            status: DividendDistribution::STATUS_PENDING,
            recorded_at: 1_000_000,
            bump: 255,
        };
        distribution.mark_paid().unwrap();
        assert_eq!(distribution.status, DividendDistribution::STATUS_COMPLETED);
        assert!(distribution.mark_paid().is_err());
    }
}
