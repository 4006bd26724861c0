use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::*;
use crate::errors::SaleError;
use crate::events::TokensClaimed;
use crate::state::{PurchaseRecord, SaleRound};
use crate::utils::{Asset, SplLedger};

#[derive(Accounts)]
pub struct ClaimTokens<'info> {
    pub buyer: Signer<'info>,

    #[account(
        mut,
        seeds = [SALE_ROUND_SEED, sale_round.owner.as_ref(), sale_round.project_mint.as_ref()],
        bump = sale_round.bump,
    )]
    pub sale_round: Box<Account<'info, SaleRound>>,

    #[account(
        mut,
        seeds = [PURCHASE_RECORD_SEED, sale_round.key().as_ref(), buyer.key().as_ref()],
        bump = purchase_record.bump,
        has_one = buyer @ SaleError::Unauthorized,
    )]
    pub purchase_record: Box<Account<'info, PurchaseRecord>>,

    /// vault authority
    #[account(
        seeds = [VAULT_AUTHORITY.as_ref()],
        bump,
    )]
    pub vault_authority: SystemAccount<'info>,

    /// Round vault holding purchased tokens
    #[account(
        mut,
        address = sale_round.project_vault @ SaleError::InvalidVault,
    )]
    pub project_vault: Box<Account<'info, TokenAccount>>,

    /// Buyer's project token account to receive tokens
    #[account(
        mut,
        token::mint = sale_round.project_mint,
        token::authority = buyer,
    )]
    pub buyer_token_account: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
}

/// Claim every purchased token once the round is closed
pub fn claim_tokens(ctx: Context<ClaimTokens>) -> Result<()> {
    let round_key = ctx.accounts.sale_round.key();
    let buyer = ctx.accounts.buyer.key();
    let clock = Clock::get()?;

    let mut ledger = SplLedger::new(
        ctx.accounts.token_program.to_account_info(),
        ctx.accounts.vault_authority.to_account_info(),
    )?
    .with_vault(Asset::ProjectToken, ctx.accounts.project_vault.to_account_info())
    .with_wallet(
        buyer,
        Asset::ProjectToken,
        ctx.accounts.buyer_token_account.to_account_info(),
        None,
    );

    let purchase_record = &mut ctx.accounts.purchase_record;
    let sale_round = &mut ctx.accounts.sale_round;
    let claimed = sale_round.claim_tokens(purchase_record, clock.unix_timestamp, &mut ledger)?;

    emit!(TokensClaimed {
        round: round_key,
        buyer,
        amount: claimed,
        timestamp: clock.unix_timestamp,
    });

    msg!("Buyer {} claimed {} tokens", buyer, claimed);

    Ok(())
}
