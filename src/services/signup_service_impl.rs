//! `SeaORM`-backed implementation of the `SignupService` trait.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::task;

use crate::config::SecurityConfig;
use crate::db::repositories::account::hash_password;
use crate::db::{Account, Store};
use crate::domain::account::{validate_email, validate_name, validate_password};
use crate::services::signup_service::{SignupError, SignupService};
use crate::services::verification_service::EmailVerificationService;

pub struct DefaultSignupService {
    store: Store,
    verification: Arc<dyn EmailVerificationService>,
    security: SecurityConfig,
}

impl DefaultSignupService {
    #[must_use]
    pub fn new(
        store: Store,
        verification: Arc<dyn EmailVerificationService>,
        security: SecurityConfig,
    ) -> Self {
        Self {
            store,
            verification,
            security,
        }
    }
}

#[async_trait]
impl SignupService for DefaultSignupService {
    async fn sign_up(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<Account, SignupError> {
        validate_password(password)?;
        validate_email(email)?;
        validate_name(name)?;

        if !self.verification.is_verified(email).await? {
            return Err(SignupError::EmailNotVerified);
        }

        // Friendly pre-check; the unique constraint at insert time is
        // authoritative for concurrent signups.
        if self.store.account_exists(email).await? {
            return Err(SignupError::DuplicateEmail);
        }

        let password = password.to_string();
        let security = self.security.clone();
        let password_hash = task::spawn_blocking(move || hash_password(&password, &security))
            .await
            .map_err(|e| SignupError::Internal(format!("Password hashing task panicked: {e}")))?
            .map_err(|e| SignupError::Internal(e.to_string()))?;

        let account = self
            .store
            .insert_account(email, name, &password_hash)
            .await?
            .ok_or(SignupError::DuplicateEmail)?;

        // Consume the handshake only after the account is persisted; a
        // record left behind by a crash here is reaped by its TTL.
        self.verification.invalidate(email).await?;

        tracing::info!(email = %email, "account created");
        Ok(account)
    }
}
