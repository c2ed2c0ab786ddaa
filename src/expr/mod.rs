pub mod eval;
pub mod token;

pub use eval::evaluate;
pub use token::tokenize;
