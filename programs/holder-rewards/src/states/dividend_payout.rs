use anchor_lang::prelude::*;

/// Realized value-transfer record for one distribution. Created only
/// when the transfer is actually executed.
#[account]
#[derive(InitSpace)]
pub struct DividendPayout {
    /// The claim cycle this payout belongs to
    pub claim_id: u64,
    /// The holder that was paid
    pub holder: Pubkey,
    /// Amount transferred
    pub payout_amount: u64,
    /// Slot of the payout transaction
    pub payout_slot: u64,
    /// Payout status: 1=completed (records exist only for executed transfers)
    pub status: u8,
    /// Timestamp of the transfer
    pub paid_at: i64,
    /// Bump seed for the PDA
    pub bump: u8,
}

impl DividendPayout {
    pub const STATUS_COMPLETED: u8 = 1;
}
