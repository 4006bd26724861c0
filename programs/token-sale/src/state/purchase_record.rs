use anchor_lang::prelude::*;

#[account]
#[derive(Default)]
pub struct PurchaseRecord {
    /// Buyer address
    pub buyer: Pubkey,

    /// Associated sale round
    pub round: Pubkey,

    /// bump seed
    pub bump: u8,

    // ===== Purchase Information =====
    /// Cumulative project tokens bought
    pub purchased: u64,

    /// Project tokens already handed out
    pub claimed: u64,

    // ===== Time Records =====
    /// First purchase time
    pub first_purchased_at: i64,

    /// Last updated time
    pub last_updated: i64,

    /// Reserved space
    pub reserved: [u64; 4],
}

impl PurchaseRecord {
    pub const SIZE: usize = 8 + // discriminator
        32 + // buyer
        32 + // round
        1 + // bump
        8 + // purchased
        8 + // claimed
        8 + // first_purchased_at
        8 + // last_updated
        8 * 4; // reserved

    /// Check if the record was set up by a previous purchase
    pub fn is_initialized(&self) -> bool {
        self.buyer != Pubkey::default()
    }

    /// Purchased tokens not yet claimed
    pub fn claimable(&self) -> u64 {
        self.purchased.saturating_sub(self.claimed)
    }

    pub fn record_purchase(&mut self, amount: u64, current_time: i64) -> Result<()> {
        self.purchased = self
            .purchased
            .checked_add(amount)
            .ok_or(error!(crate::errors::SaleError::MathOverflow))?;

        self.last_updated = current_time;

        if self.first_purchased_at == 0 {
            self.first_purchased_at = current_time;
        }

        Ok(())
    }

    pub fn record_claim(&mut self, amount: u64, current_time: i64) -> Result<()> {
        self.claimed = self
            .claimed
            .checked_add(amount)
            .ok_or(error!(crate::errors::SaleError::MathOverflow))?;

        self.last_updated = current_time;

        Ok(())
    }
}
