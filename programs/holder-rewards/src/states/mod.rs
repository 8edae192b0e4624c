pub mod auto_claim_config;
pub use auto_claim_config::*;

pub mod claim_ledger;
pub use claim_ledger::*;

pub mod dividend_claim;
pub use dividend_claim::*;

pub mod holder_snapshot;
pub use holder_snapshot::*;

pub mod holder_status;
pub use holder_status::*;

pub mod dividend_distribution;
pub use dividend_distribution::*;

pub mod dividend_payout;
pub use dividend_payout::*;
