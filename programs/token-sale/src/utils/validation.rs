use anchor_lang::prelude::*;

use crate::constants::MAX_PARTNERS;
use crate::errors::SaleError;
use crate::state::SaleRound;

/// Validate the partner payout table given at construction
pub fn validate_partner_table(partners: &[Pubkey], shares: &[u64]) -> Result<()> {
    require!(
        !partners.is_empty() && partners.len() == shares.len(),
        SaleError::InvalidPartnerConfig
    );

    require!(
        partners.len() <= MAX_PARTNERS,
        SaleError::TooManyPartners
    );

    require!(
        shares.iter().all(|share| *share > 0),
        SaleError::InvalidPartnerConfig
    );

    for (index, partner) in partners.iter().enumerate() {
        require!(
            !partners[..index].contains(partner),
            SaleError::DuplicatePartner
        );
    }

    // Total must be representable so entitlements can be computed
    shares
        .iter()
        .try_fold(0u64, |total, share| total.checked_add(*share))
        .ok_or(SaleError::MathOverflow)?;

    Ok(())
}

/// Validate a purchase against the round gates, in the order buyers see them
pub fn check_purchase(round: &SaleRound, amount: u64) -> Result<()> {
    require!(round.is_active, SaleError::RoundClosed);

    require!(
        amount >= round.minimum_purchase,
        SaleError::BelowMinimum
    );

    require!(amount > 0, SaleError::ZeroAmount);

    require!(
        amount <= round.total_supply,
        SaleError::InsufficientSupply
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(err: anchor_lang::error::Error) -> u32 {
        match err {
            anchor_lang::error::Error::AnchorError(e) => e.error_code_number,
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn accepts_a_well_formed_table() {
        let partners = [Pubkey::new_unique(), Pubkey::new_unique()];
        assert!(validate_partner_table(&partners, &[60, 40]).is_ok());
    }

    #[test]
    fn rejects_empty_or_mismatched_tables() {
        let partners = [Pubkey::new_unique(), Pubkey::new_unique()];
        let err = validate_partner_table(&[], &[]).unwrap_err();
        assert_eq!(code(err), u32::from(SaleError::InvalidPartnerConfig));

        let err = validate_partner_table(&partners, &[100]).unwrap_err();
        assert_eq!(code(err), u32::from(SaleError::InvalidPartnerConfig));
    }

    #[test]
    fn rejects_zero_shares() {
        let partners = [Pubkey::new_unique(), Pubkey::new_unique()];
        let err = validate_partner_table(&partners, &[100, 0]).unwrap_err();
        assert_eq!(code(err), u32::from(SaleError::InvalidPartnerConfig));
    }

    #[test]
    fn rejects_duplicate_partners() {
        let partner = Pubkey::new_unique();
        let err = validate_partner_table(&[partner, partner], &[1, 1]).unwrap_err();
        assert_eq!(code(err), u32::from(SaleError::DuplicatePartner));
    }

    #[test]
    fn rejects_oversized_tables() {
        let partners: Vec<Pubkey> = (0..=MAX_PARTNERS).map(|_| Pubkey::new_unique()).collect();
        let shares = vec![1; partners.len()];
        let err = validate_partner_table(&partners, &shares).unwrap_err();
        assert_eq!(code(err), u32::from(SaleError::TooManyPartners));
    }

    #[test]
    fn rejects_share_totals_that_overflow() {
        let partners = [Pubkey::new_unique(), Pubkey::new_unique()];
        let err = validate_partner_table(&partners, &[u64::MAX, 1]).unwrap_err();
        assert_eq!(code(err), u32::from(SaleError::MathOverflow));
    }
}
