use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::{SALE_ROUND_SEED, VAULT_AUTHORITY};
use crate::errors::SaleError;
use crate::events::{PaymentReleased, RoundFinished};
use crate::state::{Payout, SaleRound};
use crate::utils::{Asset, SplLedger};

#[derive(Accounts)]
pub struct CloseRound<'info> {
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

    /// Round vault paying the partners
    #[account(
        mut,
        address = sale_round.main_vault @ SaleError::InvalidVault,
    )]
    pub main_vault: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    // Partner main currency accounts are passed as remaining accounts,
    // in partner table order
}

/// Close the round and pay out collected funds to the partners
pub fn close_round<'info>(ctx: Context<'_, '_, '_, 'info, CloseRound<'info>>) -> Result<()> {
    let round_key = ctx.accounts.sale_round.key();
    let owner = ctx.accounts.owner.key();
    let clock = Clock::get()?;

    let mut ledger = SplLedger::new(
        ctx.accounts.token_program.to_account_info(),
        ctx.accounts.vault_authority.to_account_info(),
    )?
    .with_vault(Asset::MainCurrency, ctx.accounts.main_vault.to_account_info())
    .with_partner_accounts(&ctx.accounts.sale_round, ctx.remaining_accounts)?;

    let sale_round = &mut ctx.accounts.sale_round;
    let payouts = sale_round.close_round(&owner, clock.unix_timestamp, &mut ledger)?;

    emit_payouts(round_key, &payouts, clock.unix_timestamp);
    let released: u64 = payouts.iter().map(|payout| payout.amount).sum();

    emit!(RoundFinished {
        round: round_key,
        timestamp: clock.unix_timestamp,
        total_collected: sale_round.total_collected,
        released,
    });

    msg!("Sale round closed");
    msg!("Total collected: {}", sale_round.total_collected);
    msg!("Released to {} partners: {}", payouts.len(), released);

    Ok(())
}

pub(crate) fn emit_payouts(round: Pubkey, payouts: &[Payout], timestamp: i64) {
    for payout in payouts {
        emit!(PaymentReleased {
            round,
            partner: payout.partner,
            amount: payout.amount,
            total_released: payout.total_released,
            timestamp,
        });
    }
}
