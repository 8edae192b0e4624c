// PDA Seeds
pub const REWARD_AUTHORITY_SEED: &[u8] = b"reward_authority";
pub const FEE_VAULT_SEED: &[u8] = b"fee_vault";
pub const REWARD_VAULT_SEED: &[u8] = b"reward_vault";
pub const AUTO_CLAIM_CONFIG_SEED: &[u8] = b"auto_claim_config";
pub const CLAIM_LEDGER_SEED: &[u8] = b"claim_ledger";
pub const DIVIDEND_CLAIM_SEED: &[u8] = b"dividend_claim";
pub const HOLDER_SNAPSHOT_SEED: &[u8] = b"holder_snapshot";
pub const HOLDER_STATUS_SEED: &[u8] = b"holder_status";
pub const DIVIDEND_DISTRIBUTION_SEED: &[u8] = b"dividend_distribution";
pub const DIVIDEND_PAYOUT_SEED: &[u8] = b"dividend_payout";

// Basis point denominator (10000 bps = 100%)
pub const BPS_DENOMINATOR: u64 = 10_000;

// Default policy parameters
pub const DEFAULT_SELL_THRESHOLD_BPS: u16 = 3_000; // eligibility requires >= 70% retention
pub const MAX_DISTRIBUTION_BPS: u16 = 10_000; // 100% maximum
pub const MAX_SELL_THRESHOLD_BPS: u16 = 10_000;

// Scheduling
pub const SECONDS_PER_MINUTE: i64 = 60;

// Claim cycle skip reason codes
pub const SKIP_REASON_NOT_CONFIGURED: u8 = 1;
pub const SKIP_REASON_BELOW_MINIMUM: u8 = 2;

// Claim cycle failure reason codes
pub const FAILURE_REASON_NONE: u8 = 0;
pub const FAILURE_REASON_NO_ELIGIBLE_HOLDERS: u8 = 1;
pub const FAILURE_REASON_EXTERNAL_SERVICE: u8 = 2;
pub const FAILURE_REASON_OPERATOR: u8 = 3;
