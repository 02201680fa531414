pub mod account;
pub mod performance;
pub mod verification;
