//! Domain service for account signup.

use thiserror::Error;

use crate::domain::AccountError;
use crate::services::verification_service::VerificationError;

/// Errors raised while processing a signup request.
#[derive(Debug, Error)]
pub enum SignupError {
    #[error(transparent)]
    Field(#[from] AccountError),

    #[error("Email verification has not been completed")]
    EmailNotVerified,

    #[error("An account with this email already exists")]
    DuplicateEmail,

    #[error(transparent)]
    Verification(#[from] VerificationError),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<anyhow::Error> for SignupError {
    fn from(err: anyhow::Error) -> Self {
        Self::Database(err.to_string())
    }
}

/// Domain service trait for signup.
#[async_trait::async_trait]
pub trait SignupService: Send + Sync {
    /// Creates an account for a verified email.
    ///
    /// Ordering is significant: field validation, then verification
    /// state, then persist (the store's unique constraint settles
    /// duplicate races), and only after a successful persist is the
    /// verification record consumed.
    ///
    /// # Errors
    ///
    /// Returns [`SignupError::Field`] for policy violations,
    /// [`SignupError::EmailNotVerified`] when the handshake is absent
    /// or pending, and [`SignupError::DuplicateEmail`] when an account
    /// with the email already exists.
    async fn sign_up(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<crate::db::Account, SignupError>;
}
