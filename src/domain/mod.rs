pub mod account;
pub mod ranking;

pub use account::AccountError;
pub use ranking::{DateRange, DateUnit, Genre, RankingError, RankingSize};
