use anchor_lang::prelude::*;

use crate::constants::MAX_PARTNERS;
use crate::errors::SaleError;
use crate::state::{PartnerShare, Payout, PurchaseRecord};
use crate::utils::{
    calculate_purchase_cost, check_purchase, validate_partner_table, Asset, Ledger, Party,
};

/// Addresses and opening parameters of a new round
pub struct RoundSetup {
    pub owner: Pubkey,
    pub main_mint: Pubkey,
    pub project_mint: Pubkey,
    pub main_vault: Pubkey,
    pub project_vault: Pubkey,
    pub price: u64,
    pub minimum_purchase: u64,
    pub bump: u8,
}

#[account]
#[derive(Default)]
pub struct SaleRound {
    /// Round owner (can configure, supply and close)
    pub owner: Pubkey,

    /// Mint buyers pay with
    pub main_mint: Pubkey,
    /// Mint being sold
    pub project_mint: Pubkey,
    /// Vault holding collected main currency
    pub main_vault: Pubkey,
    /// Vault holding project tokens for sale and unclaimed purchases
    pub project_vault: Pubkey,

    /// bump seed
    pub bump: u8,

    // ===== Round Controller =====
    /// Main currency units per project token
    pub price: u64,

    /// Smallest accepted purchase, in project tokens
    pub minimum_purchase: u64,

    /// Whether purchases are open
    pub is_active: bool,

    /// Set while an operation is between its state update and its transfer
    pub locked: bool,

    // ===== Supply / Purchase Ledger =====
    /// Project tokens still available for sale
    pub total_supply: u64,

    /// Main currency collected from all purchases
    pub total_collected: u64,

    /// Distinct buyers
    pub buyer_count: u32,

    // ===== Distribution =====
    /// Partner table in payout order, with released amounts
    pub partners: Vec<PartnerShare>,

    // ===== Time Records =====
    pub created_at: i64,

    /// Last time the round was closed (0 while never closed)
    pub closed_at: i64,

    /// Reserved space
    pub reserved: [u64; 4],
}

impl SaleRound {
    pub const SIZE: usize = 8 + // discriminator
        32 + // owner
        32 + // main_mint
        32 + // project_mint
        32 + // main_vault
        32 + // project_vault
        1 + // bump
        8 + // price
        8 + // minimum_purchase
        1 + // is_active
        1 + // locked
        8 + // total_supply
        8 + // total_collected
        4 + // buyer_count
        4 + MAX_PARTNERS * PartnerShare::SIZE + // partners
        8 + // created_at
        8 + // closed_at
        8 * 4; // reserved

    /// Open the round. Starts active with no supply and nothing collected.
    pub fn initialize(
        &mut self,
        setup: RoundSetup,
        partners: &[Pubkey],
        shares: &[u64],
        current_time: i64,
    ) -> Result<()> {
        require_keys_neq!(setup.main_mint, setup.project_mint, SaleError::IdenticalMints);
        validate_partner_table(partners, shares)?;

        self.owner = setup.owner;
        self.main_mint = setup.main_mint;
        self.project_mint = setup.project_mint;
        self.main_vault = setup.main_vault;
        self.project_vault = setup.project_vault;
        self.bump = setup.bump;

        self.price = setup.price;
        self.minimum_purchase = setup.minimum_purchase;
        self.is_active = true;
        self.locked = false;

        self.total_supply = 0;
        self.total_collected = 0;
        self.buyer_count = 0;

        self.partners = partners
            .iter()
            .zip(shares)
            .map(|(partner, shares)| PartnerShare::new(*partner, *shares))
            .collect();

        self.created_at = current_time;
        self.closed_at = 0;
        self.reserved = [0; 4];

        Ok(())
    }

    pub fn require_owner(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.owner, SaleError::Unauthorized);
        Ok(())
    }

    /// Run `operation` holding the round lock. A nested call fails with
    /// `Reentrancy`; the lock is released whatever `operation` returns.
    pub fn non_reentrant<T>(
        &mut self,
        operation: impl FnOnce(&mut Self) -> Result<T>,
    ) -> Result<T> {
        require!(!self.locked, SaleError::Reentrancy);

        self.locked = true;
        let result = operation(self);
        self.locked = false;

        result
    }

    // ===== Round Controller =====

    /// Set the price. Returns the previous price.
    pub fn configure_price(&mut self, caller: &Pubkey, new_price: u64) -> Result<u64> {
        self.require_owner(caller)?;
        Ok(std::mem::replace(&mut self.price, new_price))
    }

    /// Set the minimum purchase. Returns the previous minimum.
    pub fn set_minimum_purchase(&mut self, caller: &Pubkey, new_minimum: u64) -> Result<u64> {
        self.require_owner(caller)?;
        Ok(std::mem::replace(&mut self.minimum_purchase, new_minimum))
    }

    /// Flip the active flag. Returns the new value.
    pub fn toggle_active(&mut self, caller: &Pubkey) -> Result<bool> {
        self.require_owner(caller)?;
        self.is_active = !self.is_active;
        Ok(self.is_active)
    }

    /// Deactivate the round and pay every partner its pending entitlement.
    ///
    /// A failed payout surfaces as `DistributionFailed`. On-chain the failed
    /// instruction is reverted as a whole, so the round is still active and
    /// nothing was paid; closing is retried with `close_round`. Callers that
    /// keep the state after an error (round inactive, earlier partners paid)
    /// settle the remainder with `release_all`.
    pub fn close_round<L: Ledger>(
        &mut self,
        caller: &Pubkey,
        current_time: i64,
        ledger: &mut L,
    ) -> Result<Vec<Payout>> {
        self.require_owner(caller)?;
        require!(self.is_active, SaleError::RoundAlreadyClosed);

        self.non_reentrant(|round| {
            round.is_active = false;
            round.closed_at = current_time;
            round.distribute(ledger)
        })
    }

    // ===== Supply Ledger =====

    /// Pull `amount` project tokens from `source` into the pool
    pub fn add_supply<L: Ledger>(
        &mut self,
        caller: &Pubkey,
        amount: u64,
        source: Pubkey,
        ledger: &mut L,
    ) -> Result<()> {
        self.require_owner(caller)?;
        require!(amount > 0, SaleError::ZeroAmount);

        self.non_reentrant(|round| {
            let total_supply = round
                .total_supply
                .checked_add(amount)
                .ok_or(SaleError::MathOverflow)?;

            ledger
                .transfer(Asset::ProjectToken, Party::Wallet(source), Party::Pool, amount)
                .map_err(|_| error!(SaleError::TransferFailed))?;

            round.total_supply = total_supply;
            Ok(())
        })
    }

    /// Send `amount` unsold project tokens from the pool to `destination`
    pub fn reduce_supply<L: Ledger>(
        &mut self,
        caller: &Pubkey,
        amount: u64,
        destination: Pubkey,
        ledger: &mut L,
    ) -> Result<()> {
        self.require_owner(caller)?;
        require!(amount > 0, SaleError::ZeroAmount);
        require!(amount <= self.total_supply, SaleError::InsufficientSupply);

        self.non_reentrant(|round| {
            let previous_supply = round.total_supply;
            round.total_supply = previous_supply - amount;

            if ledger
                .transfer(Asset::ProjectToken, Party::Pool, Party::Wallet(destination), amount)
                .is_err()
            {
                round.total_supply = previous_supply;
                return err!(SaleError::TransferFailed);
            }

            Ok(())
        })
    }

    // ===== Purchase Ledger =====

    /// Sell `amount` project tokens to the record's buyer at the current
    /// price. State is updated before the payment is pulled and restored
    /// if the payment fails. Returns the main currency paid.
    pub fn buy_tokens<L: Ledger>(
        &mut self,
        record: &mut PurchaseRecord,
        amount: u64,
        current_time: i64,
        ledger: &mut L,
    ) -> Result<u64> {
        self.non_reentrant(|round| {
            check_purchase(round, amount)?;

            let cost = calculate_purchase_cost(amount, round.price)?;
            let total_collected = round
                .total_collected
                .checked_add(cost)
                .ok_or(SaleError::MathOverflow)?;

            let buyer_count = if record.purchased == 0 {
                round
                    .buyer_count
                    .checked_add(1)
                    .ok_or(SaleError::MathOverflow)?
            } else {
                round.buyer_count
            };

            let round_snapshot = (round.total_supply, round.total_collected, round.buyer_count);
            let record_snapshot = record.clone();

            round.total_supply -= amount;
            round.total_collected = total_collected;
            round.buyer_count = buyer_count;

            let buyer = Party::Wallet(record.buyer);
            let outcome = record
                .record_purchase(amount, current_time)
                .and_then(|_| {
                    ledger
                        .transfer(Asset::MainCurrency, buyer, Party::Pool, cost)
                        .map_err(|_| error!(SaleError::TransferFailed))
                });

            if let Err(err) = outcome {
                (round.total_supply, round.total_collected, round.buyer_count) = round_snapshot;
                *record = record_snapshot;
                return Err(err);
            }

            Ok(cost)
        })
    }

    /// Hand the buyer everything purchased and not yet claimed.
    /// Returns the claimed amount.
    pub fn claim_tokens<L: Ledger>(
        &mut self,
        record: &mut PurchaseRecord,
        current_time: i64,
        ledger: &mut L,
    ) -> Result<u64> {
        require!(!self.is_active, SaleError::RoundStillActive);

        let claimable = record.claimable();
        require!(claimable > 0, SaleError::NothingToClaim);

        self.non_reentrant(|_| {
            let record_snapshot = record.clone();
            record.record_claim(claimable, current_time)?;

            if ledger
                .transfer(Asset::ProjectToken, Party::Pool, Party::Wallet(record.buyer), claimable)
                .is_err()
            {
                *record = record_snapshot;
                return err!(SaleError::TransferFailed);
            }

            Ok(claimable)
        })
    }
}
