use anchor_lang::prelude::*;
use crate::constants::SECONDS_PER_MINUTE;
use crate::errors::ErrorCode;

/// Singleton configuration for the automatic claim pipeline
#[account]
#[derive(InitSpace)]
pub struct AutoClaimConfig {
    /// Admin authority for policy updates and forced cycles
    pub authority: Pubkey,
    /// Mint of the tracked reward token
    pub token_mint: Pubkey,
    /// Fee source token account (default pubkey = not configured)
    pub fee_source_account: Pubkey,
    /// Treasury token account receiving the non-distributed remainder
    pub treasury_account: Pubkey,
    /// Whether scheduled cycles may run
    pub enabled: bool,
    /// Minutes between claim cycles
    pub claim_interval_minutes: u32,
    /// Share of each claim distributed to holders, in basis points
    pub distribution_bps: u16,
    /// Minimum claimable balance required to start a cycle
    pub min_claim_amount: u64,
    /// Maximum tolerated balance reduction before a holder is
    /// blacklisted, in basis points
    pub sell_threshold_bps: u16,
    /// Next scheduled cycle timestamp (0 = run immediately)
    pub next_claim_scheduled: i64,
    /// Timestamp of the last completed cycle
    pub last_successful_claim: i64,
    /// Bump seed for the PDA
    pub bump: u8,
}

impl AutoClaimConfig {
    /// Whether a fee source has been wired up yet. An unconfigured fee
    /// source is a valid steady state, not an error.
    pub fn is_configured(&self) -> bool {
        self.fee_source_account != Pubkey::default()
    }

    /// Whether a scheduled cycle is due at `now`
    pub fn is_due(&self, now: i64) -> bool {
        self.next_claim_scheduled == 0 || now >= self.next_claim_scheduled
    }

    /// Scheduler gate: cycles run when enabled and due, or when forced
    pub fn may_run(&self, now: i64, force: bool) -> bool {
        (self.enabled || force) && (self.is_due(now) || force)
    }

    /// Advances the schedule one interval past `now`
    pub fn schedule_next(&mut self, now: i64) -> Result<()> {
        let interval_seconds = (self.claim_interval_minutes as i64)
            .checked_mul(SECONDS_PER_MINUTE)
            .ok_or(ErrorCode::MathOverflow)?;
        self.next_claim_scheduled = now
            .checked_add(interval_seconds)
            .ok_or(ErrorCode::MathOverflow)?;
        Ok(())
    }

    /// Retention required for eligibility, in basis points
    pub fn required_retention_bps(&self) -> u16 {
        10_000u16.saturating_sub(self.sell_threshold_bps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> AutoClaimConfig {
        AutoClaimConfig {
            authority: Pubkey::new_unique(),
            token_mint: Pubkey::new_unique(),
            fee_source_account: Pubkey::new_unique(),
            treasury_account: Pubkey::new_unique(),
            enabled: true,
            claim_interval_minutes: 60,
            distribution_bps: 3000,
            min_claim_amount: 1_000,
            sell_threshold_bps: 3000,
            next_claim_scheduled: 1_000_000,
            last_successful_claim: 0,
            bump: 255,
        }
    }

    #[test]
    fn due_gate_holds_until_scheduled_time() {
        let cfg = config();
        assert!(!cfg.is_due(999_999));
        assert!(cfg.is_due(1_000_000));
        assert!(cfg.is_due(1_000_001));
    }

    #[test]
    fn unscheduled_config_is_immediately_due() {
        let mut cfg = config();
        cfg.next_claim_scheduled = 0;
        assert!(cfg.is_due(1));
    }

    #[test]
    fn disabled_blocks_scheduled_runs() {
        let mut cfg = config();
        cfg.enabled = false;
        assert!(!cfg.may_run(2_000_000, false));
    }

    #[test]
    fn force_bypasses_disabled_and_not_due() {
        let mut cfg = config();
        cfg.enabled = false;
        assert!(cfg.may_run(0, true));
        cfg.enabled = true;
        assert!(cfg.may_run(999_999, true));
    }

    #[test]
    fn not_due_is_a_noop_gate() {
        let cfg = config();
        assert!(!cfg.may_run(999_999, false));
        assert!(cfg.may_run(1_000_000, false));
    }

    #[test]
    fn schedule_advances_one_interval() {
        let mut cfg = config();
        cfg.schedule_next(1_000_000).unwrap();
        assert_eq!(cfg.next_claim_scheduled, 1_000_000 + 60 * 60);
        assert!(!cfg.is_due(1_000_000 + 60 * 60 - 1));
        assert!(cfg.is_due(1_000_000 + 60 * 60));
    }

    #[test]
    fn unset_fee_source_reads_as_unconfigured() {
        let mut cfg = config();
        assert!(cfg.is_configured());
        cfg.fee_source_account = Pubkey::default();
        assert!(!cfg.is_configured());
    }

    #[test]
    fn required_retention_complements_sell_threshold() {
        let mut cfg = config();
        assert_eq!(cfg.required_retention_bps(), 7000);
        cfg.sell_threshold_bps = 0;
        assert_eq!(cfg.required_retention_bps(), 10_000);
        cfg.sell_threshold_bps = 10_000;
        assert_eq!(cfg.required_retention_bps(), 0);
    }
}
