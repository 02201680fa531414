pub use super::accounts::Entity as Accounts;
pub use super::email_verifications::Entity as EmailVerifications;
pub use super::performances::Entity as Performances;
pub use super::reservations::Entity as Reservations;
pub use super::stagings::Entity as Stagings;
