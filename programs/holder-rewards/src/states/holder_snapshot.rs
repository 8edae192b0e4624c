use anchor_lang::prelude::*;

/// Point-in-time record of one holder within one claim cycle.
/// Written once during the snapshot stage and never mutated; the PDA
/// derivation (claim id, holder) makes a second snapshot of the same
/// holder within a cycle impossible.
#[account]
#[derive(InitSpace)]
pub struct HolderSnapshot {
    /// The claim cycle this snapshot belongs to
    pub claim_id: u64,
    /// The holder's wallet address
    pub holder: Pubkey,
    /// Token balance at snapshot time
    pub token_balance: u64,
    /// Share of total supply, in basis points
    pub supply_share_bps: u16,
    /// Baseline balance used for the retention calculation
    pub initial_balance: u64,
    /// Retention at snapshot time, in basis points
    pub retention_bps: u16,
    /// Whether the holder qualified for this cycle's distribution
    pub is_eligible: bool,
    /// Timestamp the snapshot was recorded
    pub recorded_at: i64,
    /// Bump seed for the PDA
    pub bump: u8,
}
