use anchor_lang::prelude::*;
use crate::constants::{AUTO_CLAIM_CONFIG_SEED, MAX_DISTRIBUTION_BPS, MAX_SELL_THRESHOLD_BPS};
use crate::errors::ErrorCode;
use crate::states::AutoClaimConfig;

#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    /// Admin authority
    pub authority: Signer<'info>,

    /// Auto-claim configuration PDA
    #[account(
        mut,
        seeds = [AUTO_CLAIM_CONFIG_SEED],
        bump = auto_claim_config.bump,
        constraint = auto_claim_config.authority == authority.key() @ ErrorCode::Unauthorized
    )]
    pub auto_claim_config: Account<'info, AutoClaimConfig>,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct UpdateConfigParams {
    /// Enable or disable scheduled cycles (the cron start/stop switch)
    pub enabled: Option<bool>,
    /// Minutes between claim cycles
    pub claim_interval_minutes: Option<u32>,
    /// Holder share of each claim in basis points
    pub distribution_bps: Option<u16>,
    /// Minimum claimable balance required to start a cycle
    pub min_claim_amount: Option<u64>,
    /// Sell threshold in basis points
    pub sell_threshold_bps: Option<u16>,
    /// Treasury token account for the non-distributed remainder
    pub treasury_account: Option<Pubkey>,
}

impl<'info> UpdateConfig<'info> {
    pub fn handle(ctx: Context<UpdateConfig>, params: UpdateConfigParams) -> Result<()> {
        msg!("Updating auto-claim configuration");

        let config = &mut ctx.accounts.auto_claim_config;

        if let Some(enabled) = params.enabled {
            config.enabled = enabled;
            msg!("Scheduled cycles enabled: {}", enabled);
        }

        if let Some(interval) = params.claim_interval_minutes {
            require!(interval > 0, ErrorCode::InvalidClaimInterval);
            config.claim_interval_minutes = interval;
            msg!("Claim interval: {} minutes", interval);
        }

        if let Some(distribution_bps) = params.distribution_bps {
            require!(
                distribution_bps <= MAX_DISTRIBUTION_BPS,
                ErrorCode::InvalidDistributionBps
            );
            config.distribution_bps = distribution_bps;
            msg!("Distribution share: {} bps", distribution_bps);
        }

        if let Some(min_claim_amount) = params.min_claim_amount {
            config.min_claim_amount = min_claim_amount;
            msg!("Minimum claim amount: {} units", min_claim_amount);
        }

        if let Some(sell_threshold_bps) = params.sell_threshold_bps {
            require!(
                sell_threshold_bps <= MAX_SELL_THRESHOLD_BPS,
                ErrorCode::InvalidSellThreshold
            );
            config.sell_threshold_bps = sell_threshold_bps;
            msg!("Sell threshold: {} bps", sell_threshold_bps);
        }

        if let Some(treasury_account) = params.treasury_account {
            require!(
                treasury_account != Pubkey::default(),
                ErrorCode::TreasuryNotProvided
            );
            config.treasury_account = treasury_account;
            msg!("Treasury account: {}", treasury_account);
        }

        // Emit event
        emit!(crate::events::ConfigUpdated {
            config: config.key(),
            enabled: config.enabled,
            claim_interval_minutes: config.claim_interval_minutes,
            distribution_bps: config.distribution_bps,
            min_claim_amount: config.min_claim_amount,
            sell_threshold_bps: config.sell_threshold_bps,
            treasury_account: config.treasury_account,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }
}
