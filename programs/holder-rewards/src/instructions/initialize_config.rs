use anchor_lang::prelude::*;
use anchor_spl::token::Mint;
use crate::constants::{
    AUTO_CLAIM_CONFIG_SEED, CLAIM_LEDGER_SEED, DEFAULT_SELL_THRESHOLD_BPS,
    MAX_DISTRIBUTION_BPS, MAX_SELL_THRESHOLD_BPS,
};
use crate::errors::ErrorCode;
use crate::states::{AutoClaimConfig, ClaimLedger};

#[derive(Accounts)]
pub struct InitializeConfig<'info> {
    /// Admin who can initialize the config
    #[account(mut)]
    pub authority: Signer<'info>,

    /// Auto-claim configuration PDA
    #[account(
        init,
        payer = authority,
        space = AutoClaimConfig::DISCRIMINATOR.len() + AutoClaimConfig::INIT_SPACE,
        seeds = [AUTO_CLAIM_CONFIG_SEED],
        bump
    )]
    pub auto_claim_config: Account<'info, AutoClaimConfig>,

    /// Global claim ledger PDA
    #[account(
        init,
        payer = authority,
        space = ClaimLedger::DISCRIMINATOR.len() + ClaimLedger::INIT_SPACE,
        seeds = [CLAIM_LEDGER_SEED],
        bump
    )]
    pub claim_ledger: Account<'info, ClaimLedger>,

    /// Mint of the tracked reward token
    pub token_mint: Account<'info, Mint>,

    /// System program
    pub system_program: Program<'info, System>,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct InitializeConfigParams {
    /// Whether scheduled cycles may run
    pub enabled: bool,
    /// Minutes between claim cycles
    pub claim_interval_minutes: u32,
    /// Holder share of each claim in basis points
    pub distribution_bps: u16,
    /// Minimum claimable balance required to start a cycle
    pub min_claim_amount: u64,
    /// Sell threshold in basis points (0 = use default)
    pub sell_threshold_bps: u16,
    /// Treasury token account for the non-distributed remainder
    pub treasury_account: Pubkey,
}

impl<'info> InitializeConfig<'info> {
    pub fn handle(ctx: Context<InitializeConfig>, params: InitializeConfigParams) -> Result<()> {
        msg!("Initializing auto-claim configuration");

        require!(
            params.claim_interval_minutes > 0,
            ErrorCode::InvalidClaimInterval
        );
        require!(
            params.distribution_bps <= MAX_DISTRIBUTION_BPS,
            ErrorCode::InvalidDistributionBps
        );
        require!(
            params.sell_threshold_bps <= MAX_SELL_THRESHOLD_BPS,
            ErrorCode::InvalidSellThreshold
        );
        require!(
            params.treasury_account != Pubkey::default(),
            ErrorCode::TreasuryNotProvided
        );

        let config_key = ctx.accounts.auto_claim_config.key();
        let config = &mut ctx.accounts.auto_claim_config;

        config.authority = ctx.accounts.authority.key();
        config.token_mint = ctx.accounts.token_mint.key();
        // fee source is wired up separately; unconfigured is a valid
        // steady state in which due cycles skip cleanly
        config.fee_source_account = Pubkey::default();
        config.treasury_account = params.treasury_account;
        config.enabled = params.enabled;
        config.claim_interval_minutes = params.claim_interval_minutes;
        config.distribution_bps = params.distribution_bps;
        config.min_claim_amount = params.min_claim_amount;
        config.sell_threshold_bps = if params.sell_threshold_bps == 0 {
            DEFAULT_SELL_THRESHOLD_BPS
        } else {
            params.sell_threshold_bps
        };
        config.next_claim_scheduled = 0;
        config.last_successful_claim = 0;
        config.bump = ctx.bumps.auto_claim_config;

        let ledger = &mut ctx.accounts.claim_ledger;
        ledger.claim_count = 0;
        ledger.active_claim = 0;
        ledger.completed_count = 0;
        ledger.failed_count = 0;
        ledger.skipped_count = 0;
        ledger.lifetime_claimed = 0;
        ledger.lifetime_distributed = 0;
        ledger.bump = ctx.bumps.claim_ledger;

        msg!("Claim interval: {} minutes", config.claim_interval_minutes);
        msg!("Distribution share: {} bps", config.distribution_bps);
        msg!("Minimum claim amount: {} units", config.min_claim_amount);
        msg!("Sell threshold: {} bps", config.sell_threshold_bps);

        // Emit event
        emit!(crate::events::ConfigInitialized {
            config: config_key,
            authority: config.authority,
            token_mint: config.token_mint,
            treasury_account: config.treasury_account,
            enabled: config.enabled,
            claim_interval_minutes: config.claim_interval_minutes,
            distribution_bps: config.distribution_bps,
            min_claim_amount: config.min_claim_amount,
            sell_threshold_bps: config.sell_threshold_bps,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }
}
