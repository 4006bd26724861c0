use anchor_lang::prelude::*;

use crate::errors::SaleError;
use crate::state::SaleRound;
use crate::utils::{calculate_entitlement, Asset, Ledger, Party};

/// One row of the partner payout table
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct PartnerShare {
    /// Partner wallet
    pub partner: Pubkey,

    /// Weight of this partner over the sum of all shares
    pub shares: u64,

    /// Main currency paid to this partner so far
    pub released: u64,
}

impl PartnerShare {
    pub const SIZE: usize = 32 + // partner
        8 + // shares
        8; // released

    pub fn new(partner: Pubkey, shares: u64) -> Self {
        Self {
            partner,
            shares,
            released: 0,
        }
    }
}

/// A payout made by one distribution pass
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Payout {
    pub partner: Pubkey,
    pub amount: u64,
    pub total_released: u64,
}

impl SaleRound {
    pub fn total_shares(&self) -> u64 {
        self.partners.iter().map(|partner| partner.shares).sum()
    }

    pub fn total_released(&self) -> u64 {
        self.partners.iter().map(|partner| partner.released).sum()
    }

    /// Amount the partner at `index` can be paid right now
    pub fn releasable(&self, index: usize) -> Result<u64> {
        let partner = self
            .partners
            .get(index)
            .ok_or(SaleError::InvalidPartnerAccount)?;

        let entitlement =
            calculate_entitlement(self.total_collected, partner.shares, self.total_shares())?;

        Ok(entitlement.saturating_sub(partner.released))
    }

    /// Settle pending partner payouts of a round that is no longer active.
    /// Partners already paid in full are skipped. A round still active after
    /// a reverted `close_round` is closed again instead.
    pub fn release_all<L: Ledger>(&mut self, ledger: &mut L) -> Result<Vec<Payout>> {
        require!(!self.is_active, SaleError::RoundStillActive);

        self.non_reentrant(|round| round.distribute(ledger))
    }

    /// Pay every partner, in table order, the difference between its
    /// entitlement and what it already received. Stops at the first failed
    /// transfer; partners before it keep their updated `released`.
    pub(crate) fn distribute<L: Ledger>(&mut self, ledger: &mut L) -> Result<Vec<Payout>> {
        let mut payouts = Vec::new();

        for index in 0..self.partners.len() {
            let pending = self.releasable(index)?;
            if pending == 0 {
                continue;
            }

            let partner = self.partners[index].partner;
            ledger
                .transfer(Asset::MainCurrency, Party::Pool, Party::Wallet(partner), pending)
                .map_err(|_| error!(SaleError::DistributionFailed))?;

            let share = &mut self.partners[index];
            share.released = share
                .released
                .checked_add(pending)
                .ok_or(SaleError::MathOverflow)?;

            payouts.push(Payout {
                partner,
                amount: pending,
                total_released: share.released,
            });
        }

        Ok(payouts)
    }
}
