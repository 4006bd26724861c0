pub mod ledger;
pub mod token;
pub mod validation;

pub use ledger::*;
pub use token::*;
pub use validation::*;
