use anchor_lang::prelude::*;
use anchor_spl::associated_token::get_associated_token_address;
use anchor_spl::token::{Mint, TokenAccount};
use crate::constants::{
    AUTO_CLAIM_CONFIG_SEED, CLAIM_LEDGER_SEED, DIVIDEND_CLAIM_SEED, HOLDER_SNAPSHOT_SEED,
    HOLDER_STATUS_SEED,
};
use crate::errors::ErrorCode;
use crate::math;
use crate::states::{AutoClaimConfig, ClaimLedger, DividendClaim, HolderSnapshot, HolderStatus};

/// Records one holder into the active claim's snapshot and evaluates
/// the retention filter. The snapshot PDA derivation makes a second
/// snapshot of the same holder within a cycle impossible, so the
/// holder set is written from exactly one pass over the chain state.
#[derive(Accounts)]
pub struct RecordHolderSnapshot<'info> {
    /// Cranker paying for the snapshot and status accounts
    #[account(mut)]
    pub payer: Signer<'info>,

    /// Auto-claim configuration PDA
    #[account(
        seeds = [AUTO_CLAIM_CONFIG_SEED],
        bump = auto_claim_config.bump
    )]
    pub auto_claim_config: Account<'info, AutoClaimConfig>,

    /// Global claim ledger PDA
    #[account(
        seeds = [CLAIM_LEDGER_SEED],
        bump = claim_ledger.bump
    )]
    pub claim_ledger: Account<'info, ClaimLedger>,

    /// The active claim record
    #[account(
        mut,
        seeds = [DIVIDEND_CLAIM_SEED, &dividend_claim.id.to_le_bytes()],
        bump = dividend_claim.bump,
        constraint = claim_ledger.active_claim == dividend_claim.id @ ErrorCode::WrongClaimCycle
    )]
    pub dividend_claim: Account<'info, DividendClaim>,

    /// CHECK: The holder wallet; only used to derive and validate the
    /// canonical associated token account
    pub holder: UncheckedAccount<'info>,

    /// CHECK: The holder's associated token account; validated against
    /// the canonical derivation in the handler
    pub holder_token_account: UncheckedAccount<'info>,

    /// Cross-claim loyalty record for this holder
    #[account(
        init_if_needed,
        payer = payer,
        space = HolderStatus::DISCRIMINATOR.len() + HolderStatus::INIT_SPACE,
        seeds = [HOLDER_STATUS_SEED, token_mint.key().as_ref(), holder.key().as_ref()],
        bump
    )]
    pub holder_status: Account<'info, HolderStatus>,

    /// Immutable snapshot row for this holder and claim
    #[account(
        init,
        payer = payer,
        space = HolderSnapshot::DISCRIMINATOR.len() + HolderSnapshot::INIT_SPACE,
        seeds = [HOLDER_SNAPSHOT_SEED, &dividend_claim.id.to_le_bytes(), holder.key().as_ref()],
        bump
    )]
    pub holder_snapshot: Account<'info, HolderSnapshot>,

    /// Mint of the tracked reward token
    #[account(
        constraint = token_mint.key() == auto_claim_config.token_mint @ ErrorCode::InvalidTokenMint
    )]
    pub token_mint: Account<'info, Mint>,

    /// System program
    pub system_program: Program<'info, System>,
}

impl<'info> RecordHolderSnapshot<'info> {
    pub fn handle(ctx: Context<RecordHolderSnapshot>) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;
        let config = &ctx.accounts.auto_claim_config;
        let claim = &mut ctx.accounts.dividend_claim;

        require!(claim.is_processing(), ErrorCode::ClaimAlreadyTerminal);
        require!(claim.is_snapshot_stage(), ErrorCode::SnapshotStageClosed);

        let token_balance = read_holder_balance(
            &ctx.accounts.holder_token_account,
            &ctx.accounts.holder.key(),
            &ctx.accounts.token_mint.key(),
        )?;
        require!(token_balance > 0, ErrorCode::ZeroBalanceHolder);

        msg!(
            "Snapshotting holder {} with balance {} units",
            ctx.accounts.holder.key(),
            token_balance
        );

        let holder_status = &mut ctx.accounts.holder_status;
        if holder_status.is_new() {
            holder_status.holder = ctx.accounts.holder.key();
            holder_status.mint = ctx.accounts.token_mint.key();
            holder_status.bump = ctx.bumps.holder_status;
        }

        let outcome = holder_status.observe(token_balance, config.sell_threshold_bps, now)?;

        msg!(
            "Retention: {} bps (required: {} bps), eligible: {}",
            holder_status.retention_bps,
            config.required_retention_bps(),
            outcome.is_eligible
        );

        let snapshot = &mut ctx.accounts.holder_snapshot;
        snapshot.claim_id = claim.id;
        snapshot.holder = ctx.accounts.holder.key();
        snapshot.token_balance = token_balance;
        snapshot.supply_share_bps = math::supply_share_bps(token_balance, claim.total_supply);
        snapshot.initial_balance = holder_status.initial_balance;
        snapshot.retention_bps = holder_status.retention_bps;
        snapshot.is_eligible = outcome.is_eligible;
        snapshot.recorded_at = now;
        snapshot.bump = ctx.bumps.holder_snapshot;

        claim.record_snapshot(token_balance, outcome.is_eligible)?;

        let claim_id = claim.id;
        let holder_count = claim.holder_count;
        let supply_share_bps = snapshot.supply_share_bps;
        let retention_bps = holder_status.retention_bps;
        let violation_count = holder_status.violation_count;
        let required_retention_bps = config.required_retention_bps();

        // Emit events
        emit!(crate::events::HolderSnapshotRecorded {
            claim_id,
            holder: ctx.accounts.holder.key(),
            token_balance,
            supply_share_bps,
            retention_bps,
            is_eligible: outcome.is_eligible,
            holder_count,
            timestamp: now,
        });

        if outcome.violation {
            emit!(crate::events::HolderBlacklisted {
                holder: ctx.accounts.holder.key(),
                mint: ctx.accounts.token_mint.key(),
                retention_bps,
                required_retention_bps,
                violation_count,
                timestamp: now,
            });
        }

        Ok(())
    }
}

/// Validates the holder's canonical associated token account and reads
/// its balance
fn read_holder_balance(
    token_account_info: &UncheckedAccount,
    holder: &Pubkey,
    mint: &Pubkey,
) -> Result<u64> {
    require!(
        !token_account_info.data_is_empty(),
        ErrorCode::InvalidHolderTokenAccount
    );

    let expected_ata = get_associated_token_address(holder, mint);
    require!(
        token_account_info.key() == expected_ata,
        ErrorCode::InvalidHolderTokenAccount
    );

    let token_account =
        TokenAccount::try_deserialize(&mut &token_account_info.data.borrow()[..])
            .map_err(|_| ErrorCode::InvalidHolderTokenAccount)?;

    require!(token_account.owner == *holder, ErrorCode::InvalidHolderTokenAccount);
    require!(token_account.mint == *mint, ErrorCode::InvalidHolderTokenAccount);

    Ok(token_account.amount)
}
