pub mod category;
pub mod rank;
pub mod transaction;

pub use category::{BalanceSign, Category, UnknownCategory};
pub use rank::Rank;
pub use transaction::Transaction;
