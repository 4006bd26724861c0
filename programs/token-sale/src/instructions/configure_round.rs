use anchor_lang::prelude::*;

use crate::constants::SALE_ROUND_SEED;
use crate::errors::SaleError;
use crate::events::{MinimumPurchaseConfigured, PriceConfigured, RoundActiveToggled};
use crate::state::SaleRound;

#[derive(Accounts)]
pub struct ConfigureRound<'info> {
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [SALE_ROUND_SEED, sale_round.owner.as_ref(), sale_round.project_mint.as_ref()],
        bump = sale_round.bump,
        has_one = owner @ SaleError::Unauthorized,
    )]
    pub sale_round: Box<Account<'info, SaleRound>>,
}

pub fn configure_price(ctx: Context<ConfigureRound>, new_price: u64) -> Result<()> {
    let round_key = ctx.accounts.sale_round.key();
    let owner = ctx.accounts.owner.key();
    let sale_round = &mut ctx.accounts.sale_round;

    let previous_price = sale_round.configure_price(&owner, new_price)?;

    emit!(PriceConfigured {
        round: round_key,
        previous_price,
        new_price,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Price updated: {} -> {}", previous_price, new_price);

    Ok(())
}

pub fn set_minimum_purchase(ctx: Context<ConfigureRound>, new_minimum: u64) -> Result<()> {
    let round_key = ctx.accounts.sale_round.key();
    let owner = ctx.accounts.owner.key();
    let sale_round = &mut ctx.accounts.sale_round;

    let previous_minimum = sale_round.set_minimum_purchase(&owner, new_minimum)?;

    emit!(MinimumPurchaseConfigured {
        round: round_key,
        previous_minimum,
        new_minimum,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Minimum purchase updated: {} -> {}", previous_minimum, new_minimum);

    Ok(())
}

pub fn toggle_active(ctx: Context<ConfigureRound>) -> Result<()> {
    let round_key = ctx.accounts.sale_round.key();
    let owner = ctx.accounts.owner.key();
    let sale_round = &mut ctx.accounts.sale_round;

    let is_active = sale_round.toggle_active(&owner)?;

    emit!(RoundActiveToggled {
        round: round_key,
        is_active,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Round active: {}", is_active);

    Ok(())
}
