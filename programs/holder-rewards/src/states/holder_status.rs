use anchor_lang::prelude::*;
use crate::errors::ErrorCode;
use crate::math;

/// Outcome of a loyalty evaluation for one holder
pub struct LoyaltyOutcome {
    /// Whether the holder qualifies for the current distribution
    pub is_eligible: bool,
    /// Whether this evaluation recorded a retention violation
    pub violation: bool,
}

/// Cross-claim loyalty record per (mint, holder). The baseline balance
/// is the first balance ever observed for the holder; retention is
/// measured against it on every snapshot.
#[account]
#[derive(InitSpace)]
pub struct HolderStatus {
    /// The holder's wallet address
    pub holder: Pubkey,
    /// Tracked token mint
    pub mint: Pubkey,
    /// First-ever recorded balance (the baseline)
    pub initial_balance: u64,
    /// Balance at the most recent evaluation
    pub current_balance: u64,
    /// Retention at the most recent evaluation, in basis points
    pub retention_bps: u16,
    /// Whether the holder qualified at the most recent evaluation
    pub is_eligible: bool,
    /// Once set, the holder stays excluded until an admin reset
    pub permanently_blacklisted: bool,
    /// Number of below-threshold evaluations recorded
    pub violation_count: u32,
    /// Blacklist reason: 0=none, 1=retention below threshold
    pub blacklist_reason: u8,
    /// Retention measured when the blacklist flag was set
    pub blacklist_retention_bps: u16,
    /// Timestamp of the first evaluation (0 = never seen)
    pub first_seen_timestamp: i64,
    /// Timestamp of the most recent evaluation
    pub last_checked_timestamp: i64,
    /// Bump seed for the PDA
    pub bump: u8,
}

impl HolderStatus {
    pub const BLACKLIST_REASON_NONE: u8 = 0;
    pub const BLACKLIST_REASON_RETENTION: u8 = 1;

    /// Whether this record has never been evaluated
    pub fn is_new(&self) -> bool {
        self.first_seen_timestamp == 0
    }

    /// Evaluates the holder against the configured sell threshold.
    /// First observation establishes the baseline at full retention.
    pub fn observe(&mut self, balance: u64, sell_threshold_bps: u16, now: i64) -> Result<LoyaltyOutcome> {
        if self.is_new() {
            self.initial_balance = balance;
            self.retention_bps = 10_000;
            self.first_seen_timestamp = now;
        } else {
            self.retention_bps = math::retention_bps(balance, self.initial_balance);
        }
        self.current_balance = balance;
        self.last_checked_timestamp = now;

        let meets_threshold = math::retention_meets_threshold(self.retention_bps, sell_threshold_bps);
        let mut violation = false;
        if !meets_threshold {
            violation = true;
            self.violation_count = self
                .violation_count
                .checked_add(1)
                .ok_or(ErrorCode::MathOverflow)?;
            self.permanently_blacklisted = true;
            self.blacklist_reason = Self::BLACKLIST_REASON_RETENTION;
            self.blacklist_retention_bps = self.retention_bps;
        }
        self.is_eligible = meets_threshold && !self.permanently_blacklisted;

        Ok(LoyaltyOutcome {
            is_eligible: self.is_eligible,
            violation,
        })
    }

    /// Admin reset: clears the blacklist flag and re-baselines at the
    /// holder's current balance. Violation history is retained.
    pub fn reset(&mut self, balance: u64, now: i64) {
        self.permanently_blacklisted = false;
        self.blacklist_reason = Self::BLACKLIST_REASON_NONE;
        self.blacklist_retention_bps = 0;
        self.initial_balance = balance;
        self.current_balance = balance;
        self.retention_bps = 10_000;
        self.is_eligible = true;
        self.last_checked_timestamp = now;
        if self.first_seen_timestamp == 0 {
            self.first_seen_timestamp = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_status() -> HolderStatus {
        HolderStatus {
            holder: Pubkey::new_unique(),
            mint: Pubkey::new_unique(),
            initial_balance: 0,
            current_balance: 0,
            retention_bps: 0,
            is_eligible: false,
            permanently_blacklisted: false,
            violation_count: 0,
            blacklist_reason: 0,
            blacklist_retention_bps: 0,
            first_seen_timestamp: 0,
            last_checked_timestamp: 0,
            bump: 255,
        }
    }

    #[test]
    fn first_observation_sets_baseline_at_full_retention() {
        let mut status = new_status();
        let outcome = status.observe(1_000, 3000, 100).unwrap();
        assert!(outcome.is_eligible);
        assert!(!outcome.violation);
        assert_eq!(status.initial_balance, 1_000);
        assert_eq!(status.retention_bps, 10_000);
        assert_eq!(status.first_seen_timestamp, 100);
    }

    #[test]
    fn holding_keeps_eligibility() {
        let mut status = new_status();
        status.observe(1_000, 3000, 100).unwrap();
        let outcome = status.observe(1_000, 3000, 200).unwrap();
        assert!(outcome.is_eligible);
        assert_eq!(status.violation_count, 0);
    }

    #[test]
    fn buying_more_caps_retention_at_full() {
        let mut status = new_status();
        status.observe(1_000, 3000, 100).unwrap();
        let outcome = status.observe(5_000, 3000, 200).unwrap();
        assert!(outcome.is_eligible);
        assert_eq!(status.retention_bps, 10_000);
    }

    #[test]
    fn selling_below_threshold_blacklists_permanently() {
        let mut status = new_status();
        status.observe(1_000, 3000, 100).unwrap();
        // sold half: 50% retention < 70% required
        let outcome = status.observe(500, 3000, 200).unwrap();
        assert!(!outcome.is_eligible);
        assert!(outcome.violation);
        assert!(status.permanently_blacklisted);
        assert_eq!(status.violation_count, 1);
        assert_eq!(status.blacklist_reason, HolderStatus::BLACKLIST_REASON_RETENTION);
        assert_eq!(status.blacklist_retention_bps, 5000);
    }

    #[test]
    fn recovery_does_not_clear_the_blacklist() {
        let mut status = new_status();
        status.observe(1_000, 3000, 100).unwrap();
        status.observe(500, 3000, 200).unwrap();
        // bought back above the baseline
        let outcome = status.observe(2_000, 3000, 300).unwrap();
        assert!(!outcome.is_eligible);
        assert!(!outcome.violation);
        assert!(status.permanently_blacklisted);
        assert_eq!(status.retention_bps, 10_000);
    }

    #[test]
    fn repeated_violations_increment_the_count() {
        let mut status = new_status();
        status.observe(1_000, 3000, 100).unwrap();
        status.observe(500, 3000, 200).unwrap();
        status.observe(100, 3000, 300).unwrap();
        assert_eq!(status.violation_count, 2);
        assert_eq!(status.blacklist_retention_bps, 1000);
    }

    #[test]
    fn exact_threshold_retention_is_eligible() {
        let mut status = new_status();
        status.observe(1_000, 3000, 100).unwrap();
        let outcome = status.observe(700, 3000, 200).unwrap();
        assert!(outcome.is_eligible);
        assert_eq!(status.retention_bps, 7000);
    }

    #[test]
    fn zero_baseline_after_first_sight_is_zero_retention() {
        let mut status = new_status();
        // first ever observation with a zero balance fixes a zero baseline
        status.observe(0, 3000, 100).unwrap();
        assert_eq!(status.retention_bps, 10_000);
        let outcome = status.observe(1_000, 3000, 200).unwrap();
        // initial_balance == 0 on a known holder reads as 0% retention
        assert!(!outcome.is_eligible);
        assert_eq!(status.retention_bps, 0);
    }

    #[test]
    fn admin_reset_restores_eligibility_and_rebaselines() {
        let mut status = new_status();
        status.observe(1_000, 3000, 100).unwrap();
        status.observe(500, 3000, 200).unwrap();
        assert!(status.permanently_blacklisted);
        status.reset(500, 300);
        assert!(!status.permanently_blacklisted);
        assert!(status.is_eligible);
        assert_eq!(status.initial_balance, 500);
        assert_eq!(status.retention_bps, 10_000);
        // violation history survives the reset
        assert_eq!(status.violation_count, 1);
        // holder stays eligible as long as the new baseline holds
        let outcome = status.observe(500, 3000, 400).unwrap();
        assert!(outcome.is_eligible);
    }
}
