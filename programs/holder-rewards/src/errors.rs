use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Automatic fee distribution is disabled")]
    DistributionDisabled,
    #[msg("Claim cycle is not due yet")]
    ClaimNotDue,
    #[msg("Another claim cycle is already processing")]
    ClaimCycleInFlight,
    #[msg("Fee source account is not configured")]
    FeeSourceNotConfigured,
    #[msg("Fee source account is already configured")]
    FeeSourceAlreadyConfigured,
    #[msg("Fee source account does not match configuration")]
    InvalidFeeSource,
    #[msg("Claimable balance is below the minimum claim amount")]
    BelowMinimumClaim,
    #[msg("Claimable balance meets the minimum - cycle must run instead of skipping")]
    SkipNotApplicable,
    #[msg("Distribution percentage must not exceed 10000 basis points")]
    InvalidDistributionBps,
    #[msg("Sell threshold must not exceed 10000 basis points")]
    InvalidSellThreshold,
    #[msg("Claim interval must be greater than zero")]
    InvalidClaimInterval,
    #[msg("Treasury account not provided")]
    TreasuryNotProvided,
    #[msg("Treasury account does not match configuration")]
    InvalidTreasuryAccount,
    #[msg("Token mint does not match configuration")]
    InvalidTokenMint,
    #[msg("Holder token account is not the canonical associated token account")]
    InvalidHolderTokenAccount,
    #[msg("Holder has no token balance to snapshot")]
    ZeroBalanceHolder,
    #[msg("Account does not belong to the active claim cycle")]
    WrongClaimCycle,
    #[msg("Claim cycle already reached a terminal status")]
    ClaimAlreadyTerminal,
    #[msg("Snapshot stage is closed for this claim cycle")]
    SnapshotStageClosed,
    #[msg("Distribution stage is not open for this claim cycle")]
    DistributionStageNotOpen,
    #[msg("No holders were snapshotted for this claim cycle")]
    NoHoldersSnapshotted,
    #[msg("Distribution records are incomplete for this claim cycle")]
    DistributionIncomplete,
    #[msg("More distribution records than eligible holders")]
    TooManyDistributions,
    #[msg("Holder is not eligible for this distribution")]
    HolderNotEligible,
    #[msg("Distribution is not pending payout")]
    DistributionNotPending,
    #[msg("Cannot execute payouts for a failed claim cycle")]
    PayoutOnFailedClaim,
    #[msg("Holder is not blacklisted")]
    HolderNotBlacklisted,
    #[msg("Signer is not the configured authority")]
    Unauthorized,
    #[msg("Math overflow occurred during calculation")]
    MathOverflow,
}
