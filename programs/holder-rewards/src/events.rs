use anchor_lang::prelude::*;

/// Event emitted when the auto-claim configuration is initialized
#[event]
pub struct ConfigInitialized {
    /// Config PDA
    pub config: Pubkey,
    /// Admin authority
    pub authority: Pubkey,
    /// Tracked token mint
    pub token_mint: Pubkey,
    /// Treasury token account for the non-distributed remainder
    pub treasury_account: Pubkey,
    /// Whether scheduled cycles are enabled
    pub enabled: bool,
    /// Minutes between claim cycles
    pub claim_interval_minutes: u32,
    /// Holder share of each claim, in basis points
    pub distribution_bps: u16,
    /// Minimum claimable balance required to start a cycle
    pub min_claim_amount: u64,
    /// Sell threshold for the retention filter, in basis points
    pub sell_threshold_bps: u16,
    /// Timestamp of initialization
    pub timestamp: i64,
}

/// Event emitted when the fee source and reward vaults are created
#[event]
pub struct FeeSourceInitialized {
    /// Fee source token account (fee vault PDA)
    pub fee_source_account: Pubkey,
    /// Reward vault holding claimed funds during a cycle
    pub reward_vault: Pubkey,
    /// Tracked token mint
    pub token_mint: Pubkey,
    /// Timestamp of initialization
    pub timestamp: i64,
}

/// Event emitted when policy fields of the configuration change
#[event]
pub struct ConfigUpdated {
    /// Config PDA
    pub config: Pubkey,
    /// Whether scheduled cycles are enabled
    pub enabled: bool,
    /// Minutes between claim cycles
    pub claim_interval_minutes: u32,
    /// Holder share of each claim, in basis points
    pub distribution_bps: u16,
    /// Minimum claimable balance required to start a cycle
    pub min_claim_amount: u64,
    /// Sell threshold for the retention filter, in basis points
    pub sell_threshold_bps: u16,
    /// Treasury token account
    pub treasury_account: Pubkey,
    /// Timestamp of the update
    pub timestamp: i64,
}

/// Event emitted when a due cycle ends as a clean no-op
#[event]
pub struct ClaimCycleSkipped {
    /// Skip reason: 1=fee source not configured, 2=below minimum
    pub reason: u8,
    /// Claimable balance observed (0 when unconfigured)
    pub available_amount: u64,
    /// Configured minimum claim amount
    pub min_claim_amount: u64,
    /// Next scheduled cycle timestamp after the skip
    pub next_claim_scheduled: i64,
    /// Timestamp of the skip
    pub timestamp: i64,
}

/// Event emitted when a claim cycle starts and fees are claimed
#[event]
pub struct ClaimCycleStarted {
    /// Claim id
    pub claim_id: u64,
    /// Whether the cycle was forced by the authority
    pub forced: bool,
    /// Amount moved out of the fee source (measured balance delta)
    pub claimed_amount: u64,
    /// Portion allocated to holders
    pub distribution_amount: u64,
    /// Token supply at claim time
    pub total_supply: u64,
    /// Slot of the claiming transaction
    pub claim_slot: u64,
    /// Timestamp the cycle started
    pub timestamp: i64,
}

/// Event emitted for each holder snapshot written during a cycle
#[event]
pub struct HolderSnapshotRecorded {
    /// Claim id
    pub claim_id: u64,
    /// The holder's wallet address
    pub holder: Pubkey,
    /// Token balance at snapshot time
    pub token_balance: u64,
    /// Share of total supply, in basis points
    pub supply_share_bps: u16,
    /// Retention against the baseline, in basis points
    pub retention_bps: u16,
    /// Whether the holder qualified for this cycle
    pub is_eligible: bool,
    /// Holders snapshotted so far this cycle
    pub holder_count: u32,
    /// Timestamp of the snapshot
    pub timestamp: i64,
}

/// Event emitted when a holder is blacklisted by the retention filter
#[event]
pub struct HolderBlacklisted {
    /// The holder's wallet address
    pub holder: Pubkey,
    /// Tracked token mint
    pub mint: Pubkey,
    /// Measured retention, in basis points
    pub retention_bps: u16,
    /// Retention required for eligibility, in basis points
    pub required_retention_bps: u16,
    /// Total violations recorded for this holder
    pub violation_count: u32,
    /// Timestamp of the violation
    pub timestamp: i64,
}

/// Event emitted when the snapshot stage closes
#[event]
pub struct SnapshotFinalized {
    /// Claim id
    pub claim_id: u64,
    /// Holders snapshotted (eligible and not)
    pub holder_count: u32,
    /// Holders that passed the retention filter
    pub eligible_holder_count: u32,
    /// Combined balance of eligible holders
    pub eligible_weight: u64,
    /// Timestamp the stage closed
    pub timestamp: i64,
}

/// Event emitted for each distribution record written
#[event]
pub struct DistributionRecorded {
    /// Claim id
    pub claim_id: u64,
    /// The holder receiving the share
    pub holder: Pubkey,
    /// Holder balance the share was computed from
    pub token_balance: u64,
    /// Share of the eligible pool, in basis points
    pub share_bps: u16,
    /// Amount allocated
    pub amount: u64,
    /// Distribution records written so far this cycle
    pub distributions_recorded: u32,
    /// Timestamp the record was written
    pub timestamp: i64,
}

/// Event emitted when a payout transfer executes
#[event]
pub struct PayoutExecuted {
    /// Claim id
    pub claim_id: u64,
    /// The holder that was paid
    pub holder: Pubkey,
    /// Amount transferred
    pub payout_amount: u64,
    /// Holder token account credited
    pub holder_token_account: Pubkey,
    /// Slot of the payout transaction
    pub payout_slot: u64,
    /// Timestamp of the transfer
    pub timestamp: i64,
}

/// Event emitted when a claim cycle completes
#[event]
pub struct ClaimCycleCompleted {
    /// Claim id
    pub claim_id: u64,
    /// Amount claimed from the fee source
    pub claimed_amount: u64,
    /// Amount recorded for distribution to holders
    pub distributed_total: u64,
    /// Rounding residual left undistributed
    pub residual: u64,
    /// Remainder routed to the treasury
    pub treasury_amount: u64,
    /// Holders paid this cycle
    pub eligible_holder_count: u32,
    /// Next scheduled cycle timestamp
    pub next_claim_scheduled: i64,
    /// Timestamp of completion
    pub timestamp: i64,
}

/// Event emitted when a claim cycle fails
#[event]
pub struct ClaimCycleFailed {
    /// Claim id
    pub claim_id: u64,
    /// Failure reason code
    pub failure_reason: u8,
    /// Amount already claimed from the fee source (not rolled back)
    pub claimed_amount: u64,
    /// Distribution records written before the failure
    pub distributions_recorded: u32,
    /// Next scheduled cycle timestamp
    pub next_claim_scheduled: i64,
    /// Timestamp of the failure
    pub timestamp: i64,
}

/// Event emitted when an admin clears a holder's blacklist flag
#[event]
pub struct HolderStatusReset {
    /// The holder's wallet address
    pub holder: Pubkey,
    /// Tracked token mint
    pub mint: Pubkey,
    /// New baseline balance
    pub new_baseline: u64,
    /// Violations retained for audit
    pub violation_count: u32,
    /// Timestamp of the reset
    pub timestamp: i64,
}
