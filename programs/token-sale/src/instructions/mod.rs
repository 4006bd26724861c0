pub mod add_supply;
pub mod buy_tokens;
pub mod claim_tokens;
pub mod close_round;
pub mod configure_round;
pub mod initialize_sale;
pub mod reduce_supply;
pub mod release_all;

pub use add_supply::*;
pub use buy_tokens::*;
pub use claim_tokens::*;
pub use close_round::*;
pub use configure_round::*;
pub use initialize_sale::*;
pub use reduce_supply::*;
pub use release_all::*;
