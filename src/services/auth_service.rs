//! Domain service for authentication against stored accounts.

use serde::Serialize;
use thiserror::Error;

use crate::domain::AccountError;

/// Errors specific to authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Email does not match any account")]
    InvalidEmail,

    #[error("Password does not match")]
    InvalidPassword,

    #[error(transparent)]
    Field(#[from] AccountError),

    #[error("Account not found")]
    NotFound,

    #[error("Database error: {0}")]
    Database(String),
}

impl From<anyhow::Error> for AuthError {
    fn from(err: anyhow::Error) -> Self {
        Self::Database(err.to_string())
    }
}

/// Account info DTO for responses. Never carries the password hash.
#[derive(Debug, Clone, Serialize)]
pub struct AccountInfo {
    pub email: String,
    pub name: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Domain service trait for authentication.
#[async_trait::async_trait]
pub trait AuthService: Send + Sync {
    /// Verifies credentials and returns account info.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidEmail`] when no account matches the
    /// email and [`AuthError::InvalidPassword`] when the password does
    /// not verify against the stored hash.
    async fn login(&self, email: &str, password: &str) -> Result<AccountInfo, AuthError>;

    /// Gets information for a specific account.
    async fn get_account(&self, email: &str) -> Result<AccountInfo, AuthError>;

    /// Changes an account's password after verifying the current one
    /// and checking the new one against the password policy.
    async fn change_password(
        &self,
        email: &str,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), AuthError>;
}
