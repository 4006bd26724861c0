#![allow(unexpected_cfgs)]
use anchor_lang::prelude::*;

mod const_pda;
pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;

declare_id!("5aLeRzX1YTQdGkWbJvq2aP7nBkzjZyVgEm8SeoT4uNsv");

#[program]
pub mod token_sale {
    use super::*;

    /// Open a sale round with its price, minimum purchase and partner table
    pub fn initialize_sale(
        ctx: Context<InitializeSale>,
        params: InitializeSaleParams,
    ) -> Result<()> {
        instructions::initialize_sale(ctx, params)
    }

    /// Set the price (owner only)
    pub fn configure_price(ctx: Context<ConfigureRound>, new_price: u64) -> Result<()> {
        instructions::configure_price(ctx, new_price)
    }

    /// Set the minimum purchase (owner only)
    pub fn set_minimum_purchase(ctx: Context<ConfigureRound>, new_minimum: u64) -> Result<()> {
        instructions::set_minimum_purchase(ctx, new_minimum)
    }

    /// Flip the active flag (owner only)
    pub fn toggle_active(ctx: Context<ConfigureRound>) -> Result<()> {
        instructions::toggle_active(ctx)
    }

    /// Deposit project tokens for sale (owner only)
    pub fn add_supply(ctx: Context<AddSupply>, amount: u64) -> Result<()> {
        instructions::add_supply(ctx, amount)
    }

    /// Withdraw unsold project tokens (owner only)
    pub fn reduce_supply(ctx: Context<ReduceSupply>, amount: u64) -> Result<()> {
        instructions::reduce_supply(ctx, amount)
    }

    /// Buy project tokens at the current price
    pub fn buy_tokens(ctx: Context<BuyTokens>, amount: u64) -> Result<()> {
        instructions::buy_tokens(ctx, amount)
    }

    /// Claim purchased tokens after the round is closed
    pub fn claim_tokens(ctx: Context<ClaimTokens>) -> Result<()> {
        instructions::claim_tokens(ctx)
    }

    /// Close the round and pay the partners (owner only)
    pub fn close_round<'info>(ctx: Context<'_, '_, '_, 'info, CloseRound<'info>>) -> Result<()> {
        instructions::close_round(ctx)
    }

    /// Retry pending partner payouts on an inactive round
    pub fn release_all<'info>(ctx: Context<'_, '_, '_, 'info, ReleaseAll<'info>>) -> Result<()> {
        instructions::release_all(ctx)
    }
}
