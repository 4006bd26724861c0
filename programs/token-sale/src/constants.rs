// ===== Seeds =====
pub const SALE_ROUND_SEED: &[u8] = b"sale_round";
pub const PURCHASE_RECORD_SEED: &[u8] = b"purchase_record";
pub const VAULT_AUTHORITY: &[u8] = b"vault_authority";
pub const TOKEN_VAULT: &[u8] = b"token_vault";

// ===== Partner Configuration =====
/// Maximum number of partners a round can pay out to.
/// Bounded so the round account has a fixed size and a single
/// `close_round` fits in one transaction.
pub const MAX_PARTNERS: usize = 10;
