use anchor_lang::prelude::*;

use crate::errors::SaleError;

/// Main currency owed for `amount` project tokens at `price`
pub fn calculate_purchase_cost(amount: u64, price: u64) -> Result<u64> {
    let cost = (amount as u128)
        .checked_mul(price as u128)
        .ok_or(SaleError::MathOverflow)?;

    u64::try_from(cost).map_err(|_| error!(SaleError::MathOverflow))
}

/// Partner's cumulative entitlement: floor(total_collected * shares / total_shares)
pub fn calculate_entitlement(total_collected: u64, shares: u64, total_shares: u64) -> Result<u64> {
    if total_shares == 0 {
        return err!(SaleError::DivisionByZero);
    }

    // Multiply first then divide; u64 * u64 always fits in u128
    let entitlement = (total_collected as u128)
        .checked_mul(shares as u128)
        .ok_or(SaleError::MathOverflow)?
        .checked_div(total_shares as u128)
        .ok_or(SaleError::DivisionByZero)?;

    u64::try_from(entitlement).map_err(|_| error!(SaleError::MathOverflow))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cost_is_amount_times_price() {
        assert_eq!(calculate_purchase_cost(100, 2).unwrap(), 200);
        assert_eq!(calculate_purchase_cost(0, 2).unwrap(), 0);
        assert_eq!(calculate_purchase_cost(7, 0).unwrap(), 0);
    }

    #[test]
    fn cost_overflow_is_an_error() {
        assert!(calculate_purchase_cost(u64::MAX, 2).is_err());
        assert_eq!(calculate_purchase_cost(u64::MAX, 1).unwrap(), u64::MAX);
    }

    #[test]
    fn entitlement_rounds_down() {
        assert_eq!(calculate_entitlement(300, 60, 100).unwrap(), 180);
        assert_eq!(calculate_entitlement(300, 40, 100).unwrap(), 120);
        // 100 / 3 each, one unit stays in the vault
        assert_eq!(calculate_entitlement(100, 1, 3).unwrap(), 33);
    }

    #[test]
    fn entitlement_handles_large_collections() {
        assert_eq!(calculate_entitlement(u64::MAX, 1, 1).unwrap(), u64::MAX);
        assert_eq!(calculate_entitlement(u64::MAX, u64::MAX, u64::MAX).unwrap(), u64::MAX);
    }

    #[test]
    fn entitlement_requires_shares() {
        assert!(calculate_entitlement(100, 0, 0).is_err());
    }
}
