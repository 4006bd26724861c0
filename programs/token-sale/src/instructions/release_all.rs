use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::{SALE_ROUND_SEED, VAULT_AUTHORITY};
use crate::errors::SaleError;
use crate::instructions::close_round::emit_payouts;
use crate::state::SaleRound;
use crate::utils::{Asset, SplLedger};

#[derive(Accounts)]
pub struct ReleaseAll<'info> {
    /// Anyone may settle pending payouts; funds only go to table partners
    pub payer: Signer<'info>,

    #[account(
        mut,
        seeds = [SALE_ROUND_SEED, sale_round.owner.as_ref(), sale_round.project_mint.as_ref()],
        bump = sale_round.bump,
    )]
    pub sale_round: Box<Account<'info, SaleRound>>,

    /// vault authority
    #[account(
        seeds = [VAULT_AUTHORITY.as_ref()],
        bump,
    )]
    pub vault_authority: SystemAccount<'info>,

    #[account(
        mut,
        address = sale_round.main_vault @ SaleError::InvalidVault,
    )]
    pub main_vault: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
}

/// Pay partners whatever they are still owed on an inactive round
pub fn release_all<'info>(ctx: Context<'_, '_, '_, 'info, ReleaseAll<'info>>) -> Result<()> {
    let round_key = ctx.accounts.sale_round.key();
    let clock = Clock::get()?;

    let mut ledger = SplLedger::new(
        ctx.accounts.token_program.to_account_info(),
        ctx.accounts.vault_authority.to_account_info(),
    )?
    .with_vault(Asset::MainCurrency, ctx.accounts.main_vault.to_account_info())
    .with_partner_accounts(&ctx.accounts.sale_round, ctx.remaining_accounts)?;

    let sale_round = &mut ctx.accounts.sale_round;
    let payouts = sale_round.release_all(&mut ledger)?;

    emit_payouts(round_key, &payouts, clock.unix_timestamp);

    msg!("Released pending payouts to {} partners", payouts.len());
    msg!("Total released: {} / {}", sale_round.total_released(), sale_round.total_collected);

    Ok(())
}
