pub mod distribution;
pub mod purchase_record;
pub mod sale_round;

pub use distribution::*;
pub use purchase_record::*;
pub use sale_round::*;
