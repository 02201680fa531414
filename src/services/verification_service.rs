//! Domain service for the email-verification handshake.
//!
//! A record keyed by email holds either a pending code or the verified
//! sentinel, with a TTL enforced by the store. Signup consumes the
//! record exactly once.

use thiserror::Error;

use crate::services::mailer::MailError;

/// Stored value marking an email as verified.
pub const VERIFIED_SENTINEL: &str = "access";

/// Errors specific to the verification handshake.
#[derive(Debug, Error)]
pub enum VerificationError {
    #[error("Email address is not valid")]
    EmailFormat,

    #[error(transparent)]
    Mail(#[from] MailError),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<anyhow::Error> for VerificationError {
    fn from(err: anyhow::Error) -> Self {
        Self::Database(err.to_string())
    }
}

/// Domain service trait for email verification.
#[async_trait::async_trait]
pub trait EmailVerificationService: Send + Sync {
    /// Generates a fresh code for `email`, stores it with the
    /// configured TTL (replacing any prior value) and mails it.
    ///
    /// # Errors
    ///
    /// Returns [`VerificationError::Mail`] when the message cannot be
    /// built or delivered; the stored code stays in place either way
    /// and is bounded by its TTL.
    async fn request_code(&self, email: &str) -> Result<(), VerificationError>;

    /// Compares `submitted` against the stored pending code. On match
    /// the record transitions to the verified sentinel with a fresh
    /// TTL and `true` is returned; on mismatch state is left unchanged
    /// and `false` is returned.
    async fn confirm_code(&self, email: &str, submitted: &str) -> Result<bool, VerificationError>;

    /// True iff a live record for `email` holds the verified sentinel.
    async fn is_verified(&self, email: &str) -> Result<bool, VerificationError>;

    /// Deletes the record for `email` unconditionally.
    async fn invalidate(&self, email: &str) -> Result<(), VerificationError>;
}
