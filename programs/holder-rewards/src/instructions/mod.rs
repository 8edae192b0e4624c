pub mod initialize_config;
pub use initialize_config::*;

pub mod initialize_fee_source;
pub use initialize_fee_source::*;

pub mod update_config;
pub use update_config::*;

pub mod skip_claim_cycle;
pub use skip_claim_cycle::*;

pub mod begin_claim_cycle;
pub use begin_claim_cycle::*;

pub mod record_holder_snapshot;
pub use record_holder_snapshot::*;

pub mod finalize_snapshot;
pub use finalize_snapshot::*;

pub mod record_distribution;
pub use record_distribution::*;

pub mod execute_payout;
pub use execute_payout::*;

pub mod complete_claim_cycle;
pub use complete_claim_cycle::*;

pub mod fail_claim_cycle;
pub use fail_claim_cycle::*;

pub mod reset_holder_status;
pub use reset_holder_status::*;
