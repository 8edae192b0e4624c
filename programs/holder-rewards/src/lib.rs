use anchor_lang::prelude::*;

declare_id!("X1pHzfvL7q6s9iBUDye3g7WBCpm17B6TmFabs85cuWM");

pub mod instructions;
pub mod errors;
pub mod constants;
pub mod states;
pub mod events;
pub mod math;

pub use instructions::*;
pub use events::*;

#[program]
pub mod holder_rewards {
    use super::*;

    pub fn initialize_config(
        ctx: Context<InitializeConfig>,
        params: InitializeConfigParams
    ) -> Result<()> {
        InitializeConfig::handle(ctx, params)
    }

    pub fn initialize_fee_source(ctx: Context<InitializeFeeSource>) -> Result<()> {
        InitializeFeeSource::handle(ctx)
    }

    pub fn update_config(ctx: Context<UpdateConfig>, params: UpdateConfigParams) -> Result<()> {
        UpdateConfig::handle(ctx, params)
    }

    pub fn skip_claim_cycle(ctx: Context<SkipClaimCycle>) -> Result<()> {
        SkipClaimCycle::handle(ctx)
    }

    pub fn begin_claim_cycle(ctx: Context<BeginClaimCycle>, params: BeginClaimCycleParams) -> Result<()> {
        BeginClaimCycle::handle(ctx, params)
    }

    pub fn record_holder_snapshot(ctx: Context<RecordHolderSnapshot>) -> Result<()> {
        RecordHolderSnapshot::handle(ctx)
    }

    pub fn finalize_snapshot(ctx: Context<FinalizeSnapshot>) -> Result<()> {
        FinalizeSnapshot::handle(ctx)
    }

    pub fn record_distribution(ctx: Context<RecordDistribution>) -> Result<()> {
        RecordDistribution::handle(ctx)
    }

    pub fn execute_payout(ctx: Context<ExecutePayout>) -> Result<()> {
        ExecutePayout::handle(ctx)
    }

    pub fn complete_claim_cycle(ctx: Context<CompleteClaimCycle>) -> Result<()> {
        CompleteClaimCycle::handle(ctx)
    }

    pub fn fail_claim_cycle(ctx: Context<FailClaimCycle>, params: FailClaimCycleParams) -> Result<()> {
        FailClaimCycle::handle(ctx, params)
    }

    pub fn reset_holder_status(ctx: Context<ResetHolderStatus>) -> Result<()> {
        ResetHolderStatus::handle(ctx)
    }
}
