use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::{SALE_ROUND_SEED, VAULT_AUTHORITY};
use crate::errors::SaleError;
use crate::events::SupplyAdded;
use crate::state::SaleRound;
use crate::utils::{Asset, SplLedger};

#[derive(Accounts)]
pub struct AddSupply<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [SALE_ROUND_SEED, sale_round.owner.as_ref(), sale_round.project_mint.as_ref()],
        bump = sale_round.bump,
        has_one = owner @ SaleError::Unauthorized,
    )]
    pub sale_round: Box<Account<'info, SaleRound>>,

    /// vault authority
    #[account(
        seeds = [VAULT_AUTHORITY.as_ref()],
        bump,
    )]
    pub vault_authority: SystemAccount<'info>,

    /// Round vault receiving the project tokens
    #[account(
        mut,
        address = sale_round.project_vault @ SaleError::InvalidVault,
    )]
    pub project_vault: Box<Account<'info, TokenAccount>>,

    /// Owner's project token account the supply is pulled from
    #[account(
        mut,
        token::mint = sale_round.project_mint,
        token::authority = owner,
    )]
    pub source_token_account: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
}

pub fn add_supply(ctx: Context<AddSupply>, amount: u64) -> Result<()> {
    let round_key = ctx.accounts.sale_round.key();
    let owner = ctx.accounts.owner.key();
    let clock = Clock::get()?;

    let mut ledger = SplLedger::new(
        ctx.accounts.token_program.to_account_info(),
        ctx.accounts.vault_authority.to_account_info(),
    )?
    .with_vault(Asset::ProjectToken, ctx.accounts.project_vault.to_account_info())
    .with_wallet(
        owner,
        Asset::ProjectToken,
        ctx.accounts.source_token_account.to_account_info(),
        Some(ctx.accounts.owner.to_account_info()),
    );

    let sale_round = &mut ctx.accounts.sale_round;
    sale_round.add_supply(&owner, amount, owner, &mut ledger)?;

    emit!(SupplyAdded {
        round: round_key,
        from: owner,
        amount,
        total_supply: sale_round.total_supply,
        timestamp: clock.unix_timestamp,
    });

    msg!("Added {} tokens to the sale", amount);
    msg!("Total supply: {}", sale_round.total_supply);

    Ok(())
}
