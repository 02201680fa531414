pub mod prelude;

pub mod accounts;
pub mod email_verifications;
pub mod performances;
pub mod reservations;
pub mod stagings;
