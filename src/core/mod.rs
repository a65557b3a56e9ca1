pub mod errors;
pub mod services;
pub mod session;
pub mod validation;

pub use session::FinanceSession;
