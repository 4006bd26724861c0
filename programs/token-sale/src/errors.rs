use anchor_lang::prelude::*;

#[error_code]
pub enum SaleError {
    // ===== Permission Errors =====
    #[msg("Unauthorized: Only the round owner can perform this action")]
    Unauthorized,

    // ===== Status Errors =====
    #[msg("Sale round is not active")]
    RoundClosed,

    #[msg("Sale round is still active")]
    RoundStillActive,

    #[msg("Sale round has already been closed")]
    RoundAlreadyClosed,

    #[msg("Reentrant call rejected")]
    Reentrancy,

    // ===== Parameter Errors =====
    #[msg("Purchase amount is below the minimum purchase")]
    BelowMinimum,

    #[msg("Not enough supply left for this amount")]
    InsufficientSupply,

    #[msg("Amount must be greater than zero")]
    ZeroAmount,

    #[msg("Partner table must be non-empty, match shares in length and hold positive shares")]
    InvalidPartnerConfig,

    #[msg("Too many partners")]
    TooManyPartners,

    #[msg("Partner listed more than once")]
    DuplicatePartner,

    #[msg("Main currency and project token must be different mints")]
    IdenticalMints,

    #[msg("Partner token accounts do not match the partner table")]
    InvalidPartnerAccount,

    #[msg("Invalid vault account")]
    InvalidVault,

    // ===== Math Errors =====
    #[msg("Math overflow")]
    MathOverflow,

    #[msg("Division by zero")]
    DivisionByZero,

    // ===== Claim Errors =====
    #[msg("Nothing to claim")]
    NothingToClaim,

    // ===== Transfer Errors =====
    #[msg("Token transfer failed")]
    TransferFailed,

    #[msg("Partner payout failed; retry close_round, or release_all if the round is inactive")]
    DistributionFailed,
}
