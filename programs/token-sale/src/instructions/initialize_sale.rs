use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::*;
use crate::errors::SaleError;
use crate::events::RoundInitialized;
use crate::state::{RoundSetup, SaleRound};

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct InitializeSaleParams {
    pub price: u64,
    pub minimum_purchase: u64,
    /// Partner wallets in payout order
    pub partners: Vec<Pubkey>,
    /// Share weight of each partner, same order as `partners`
    pub shares: Vec<u64>,
}

#[derive(Accounts)]
pub struct InitializeSale<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    /// Sale round account
    #[account(
        init,
        payer = owner,
        space = SaleRound::SIZE,
        seeds = [SALE_ROUND_SEED, owner.key().as_ref(), project_mint.key().as_ref()],
        bump,
    )]
    pub sale_round: Box<Account<'info, SaleRound>>,

    /// vault authority
    #[account(
        seeds = [VAULT_AUTHORITY.as_ref()],
        bump,
    )]
    pub vault_authority: SystemAccount<'info>,

    /// Mint buyers pay with
    pub main_mint: Box<Account<'info, Mint>>,

    /// Mint being sold
    #[account(
        constraint = project_mint.key() != main_mint.key() @ SaleError::IdenticalMints
    )]
    pub project_mint: Box<Account<'info, Mint>>,

    /// Round vault for collected main currency
    #[account(
        init,
        payer = owner,
        seeds = [TOKEN_VAULT, sale_round.key().as_ref(), main_mint.key().as_ref()],
        bump,
        token::mint = main_mint,
        token::authority = vault_authority,
    )]
    pub main_vault: Box<Account<'info, TokenAccount>>,

    /// Round vault for project tokens
    #[account(
        init,
        payer = owner,
        seeds = [TOKEN_VAULT, sale_round.key().as_ref(), project_mint.key().as_ref()],
        bump,
        token::mint = project_mint,
        token::authority = vault_authority,
    )]
    pub project_vault: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn initialize_sale(
    ctx: Context<InitializeSale>,
    params: InitializeSaleParams,
) -> Result<()> {
    let round_key = ctx.accounts.sale_round.key();
    let clock = Clock::get()?;

    let setup = RoundSetup {
        owner: ctx.accounts.owner.key(),
        main_mint: ctx.accounts.main_mint.key(),
        project_mint: ctx.accounts.project_mint.key(),
        main_vault: ctx.accounts.main_vault.key(),
        project_vault: ctx.accounts.project_vault.key(),
        price: params.price,
        minimum_purchase: params.minimum_purchase,
        bump: ctx.bumps.sale_round,
    };

    let sale_round = &mut ctx.accounts.sale_round;
    sale_round.initialize(setup, &params.partners, &params.shares, clock.unix_timestamp)?;

    emit!(RoundInitialized {
        round: round_key,
        owner: sale_round.owner,
        main_mint: sale_round.main_mint,
        project_mint: sale_round.project_mint,
        price: sale_round.price,
        minimum_purchase: sale_round.minimum_purchase,
        partner_count: sale_round.partners.len() as u8,
        total_shares: sale_round.total_shares(),
        timestamp: clock.unix_timestamp,
    });

    msg!("Sale round initialized successfully");
    msg!("Owner: {}", sale_round.owner);
    msg!(
        "Price: {} main per token, minimum purchase: {}",
        sale_round.price,
        sale_round.minimum_purchase
    );
    msg!("Partners: {}", sale_round.partners.len());

    Ok(())
}
