use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::*;
use crate::errors::SaleError;
use crate::events::TokensBought;
use crate::state::{PurchaseRecord, SaleRound};
use crate::utils::{Asset, SplLedger};

#[derive(Accounts)]
pub struct BuyTokens<'info> {
    #[account(mut)]
    pub buyer: Signer<'info>,

    /// Sale round account
    #[account(
        mut,
        seeds = [SALE_ROUND_SEED, sale_round.owner.as_ref(), sale_round.project_mint.as_ref()],
        bump = sale_round.bump,
    )]
    pub sale_round: Box<Account<'info, SaleRound>>,

    /// Buyer purchase record
    #[account(
        init_if_needed,
        payer = buyer,
        space = PurchaseRecord::SIZE,
        seeds = [PURCHASE_RECORD_SEED, sale_round.key().as_ref(), buyer.key().as_ref()],
        bump,
    )]
    pub purchase_record: Box<Account<'info, PurchaseRecord>>,

    /// vault authority
    #[account(
        seeds = [VAULT_AUTHORITY.as_ref()],
        bump,
    )]
    pub vault_authority: SystemAccount<'info>,

    /// Round vault collecting the payment
    #[account(
        mut,
        address = sale_round.main_vault @ SaleError::InvalidVault,
    )]
    pub main_vault: Box<Account<'info, TokenAccount>>,

    /// Buyer's main currency account paying for the tokens
    #[account(
        mut,
        token::mint = sale_round.main_mint,
        token::authority = buyer,
    )]
    pub buyer_payment_account: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn buy_tokens(ctx: Context<BuyTokens>, amount: u64) -> Result<()> {
    let round_key = ctx.accounts.sale_round.key();
    let buyer = ctx.accounts.buyer.key();
    let clock = Clock::get()?;

    let mut ledger = SplLedger::new(
        ctx.accounts.token_program.to_account_info(),
        ctx.accounts.vault_authority.to_account_info(),
    )?
    .with_vault(Asset::MainCurrency, ctx.accounts.main_vault.to_account_info())
    .with_wallet(
        buyer,
        Asset::MainCurrency,
        ctx.accounts.buyer_payment_account.to_account_info(),
        Some(ctx.accounts.buyer.to_account_info()),
    );

    let purchase_record = &mut ctx.accounts.purchase_record;
    if !purchase_record.is_initialized() {
        purchase_record.buyer = buyer;
        purchase_record.round = round_key;
        purchase_record.bump = ctx.bumps.purchase_record;
    }

    let sale_round = &mut ctx.accounts.sale_round;
    let cost = sale_round.buy_tokens(purchase_record, amount, clock.unix_timestamp, &mut ledger)?;

    emit!(TokensBought {
        round: round_key,
        buyer,
        amount,
        cost,
        total_purchased: purchase_record.purchased,
        total_collected: sale_round.total_collected,
        timestamp: clock.unix_timestamp,
    });

    msg!("Buyer {} bought {} tokens for {}", buyer, amount, cost);
    msg!(
        "Remaining supply: {}, total collected: {}",
        sale_round.total_supply,
        sale_round.total_collected
    );

    Ok(())
}
