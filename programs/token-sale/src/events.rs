use anchor_lang::prelude::*;

// =============================================================================
// ROUND LIFECYCLE EVENTS
// =============================================================================

/// Event emitted when a new sale round is initialized
#[event]
pub struct RoundInitialized {
    /// Sale round address
    pub round: Pubkey,
    /// Owner of the round
    pub owner: Pubkey,
    /// Mint buyers pay with
    pub main_mint: Pubkey,
    /// Mint being sold
    pub project_mint: Pubkey,
    /// Main currency units per project token
    pub price: u64,
    /// Smallest accepted purchase
    pub minimum_purchase: u64,
    /// Number of partners in the payout table
    pub partner_count: u8,
    /// Sum of all partner shares
    pub total_shares: u64,
    /// Initialization timestamp
    pub timestamp: i64,
}

/// Event emitted when the owner changes the price
#[event]
pub struct PriceConfigured {
    pub round: Pubkey,
    pub previous_price: u64,
    pub new_price: u64,
    pub timestamp: i64,
}

/// Event emitted when the owner changes the minimum purchase
#[event]
pub struct MinimumPurchaseConfigured {
    pub round: Pubkey,
    pub previous_minimum: u64,
    pub new_minimum: u64,
    pub timestamp: i64,
}

/// Event emitted when the owner flips the active flag
#[event]
pub struct RoundActiveToggled {
    pub round: Pubkey,
    pub is_active: bool,
    pub timestamp: i64,
}

/// Event emitted when a round is closed and partners are paid
#[event]
pub struct RoundFinished {
    /// Sale round address
    pub round: Pubkey,
    /// Closing timestamp
    pub timestamp: i64,
    /// Main currency collected over the whole round
    pub total_collected: u64,
    /// Main currency released to partners by this closure
    pub released: u64,
}

// =============================================================================
// SUPPLY EVENTS
// =============================================================================

/// Event emitted when project tokens are deposited for sale
#[event]
pub struct SupplyAdded {
    pub round: Pubkey,
    /// Wallet the tokens came from
    pub from: Pubkey,
    pub amount: u64,
    /// Sellable supply after the deposit
    pub total_supply: u64,
    pub timestamp: i64,
}

/// Event emitted when unsold project tokens are withdrawn
#[event]
pub struct SupplyReduced {
    pub round: Pubkey,
    /// Wallet the tokens went to
    pub to: Pubkey,
    pub amount: u64,
    /// Sellable supply after the withdrawal
    pub total_supply: u64,
    pub timestamp: i64,
}

// =============================================================================
// BUYER EVENTS
// =============================================================================

/// Event emitted when a buyer purchases project tokens
#[event]
pub struct TokensBought {
    /// Sale round address
    pub round: Pubkey,
    /// Buyer wallet
    pub buyer: Pubkey,
    /// Project tokens bought in this purchase
    pub amount: u64,
    /// Main currency paid for this purchase
    pub cost: u64,
    /// Buyer's cumulative purchased amount
    pub total_purchased: u64,
    /// Round's collected main currency after this purchase
    pub total_collected: u64,
    /// Purchase timestamp
    pub timestamp: i64,
}

/// Event emitted when a buyer claims purchased tokens
#[event]
pub struct TokensClaimed {
    pub round: Pubkey,
    pub buyer: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}

// =============================================================================
// DISTRIBUTION EVENTS
// =============================================================================

/// Event emitted for every partner payout
#[event]
pub struct PaymentReleased {
    pub round: Pubkey,
    pub partner: Pubkey,
    /// Amount paid by this release
    pub amount: u64,
    /// Partner's cumulative released amount
    pub total_released: u64,
    pub timestamp: i64,
}
