use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};
use crate::constants::{
    AUTO_CLAIM_CONFIG_SEED, FEE_VAULT_SEED, REWARD_AUTHORITY_SEED, REWARD_VAULT_SEED,
};
use crate::errors::ErrorCode;
use crate::states::AutoClaimConfig;

#[derive(Accounts)]
pub struct InitializeFeeSource<'info> {
    /// Admin who configured the pipeline
    #[account(mut)]
    pub authority: Signer<'info>,

    /// Auto-claim configuration PDA
    #[account(
        mut,
        seeds = [AUTO_CLAIM_CONFIG_SEED],
        bump = auto_claim_config.bump,
        constraint = auto_claim_config.authority == authority.key() @ ErrorCode::Unauthorized
    )]
    pub auto_claim_config: Account<'info, AutoClaimConfig>,

    /// CHECK: Program authority over the fee and reward vaults
    #[account(
        seeds = [REWARD_AUTHORITY_SEED],
        bump
    )]
    pub reward_authority: UncheckedAccount<'info>,

    /// Fee source vault where platform fees accrue until claimed
    #[account(
        init,
        payer = authority,
        seeds = [FEE_VAULT_SEED, token_mint.key().as_ref()],
        bump,
        token::mint = token_mint,
        token::authority = reward_authority
    )]
    pub fee_vault: Box<Account<'info, TokenAccount>>,

    /// Reward vault holding claimed funds during a cycle
    #[account(
        init,
        payer = authority,
        seeds = [REWARD_VAULT_SEED, token_mint.key().as_ref()],
        bump,
        token::mint = token_mint,
        token::authority = reward_authority
    )]
    pub reward_vault: Box<Account<'info, TokenAccount>>,

    /// Mint of the tracked reward token
    #[account(
        constraint = token_mint.key() == auto_claim_config.token_mint @ ErrorCode::InvalidTokenMint
    )]
    pub token_mint: Account<'info, Mint>,

    /// Token program
    pub token_program: Program<'info, Token>,

    /// System program
    pub system_program: Program<'info, System>,
}

impl<'info> InitializeFeeSource<'info> {
    pub fn handle(ctx: Context<InitializeFeeSource>) -> Result<()> {
        msg!("Initializing fee source vaults");

        let config = &mut ctx.accounts.auto_claim_config;
        require!(!config.is_configured(), ErrorCode::FeeSourceAlreadyConfigured);

        config.fee_source_account = ctx.accounts.fee_vault.key();

        msg!("Fee source: {}", config.fee_source_account);
        msg!("Reward vault: {}", ctx.accounts.reward_vault.key());

        // Emit event
        emit!(crate::events::FeeSourceInitialized {
            fee_source_account: config.fee_source_account,
            reward_vault: ctx.accounts.reward_vault.key(),
            token_mint: ctx.accounts.token_mint.key(),
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }
}
