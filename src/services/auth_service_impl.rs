//! `SeaORM` implementation of the `AuthService` trait.

use async_trait::async_trait;

use crate::config::SecurityConfig;
use crate::db::Store;
use crate::domain::account::validate_password;
use crate::services::auth_service::{AccountInfo, AuthError, AuthService};

pub struct SeaOrmAuthService {
    store: Store,
    security: SecurityConfig,
}

impl SeaOrmAuthService {
    #[must_use]
    pub const fn new(store: Store, security: SecurityConfig) -> Self {
        Self { store, security }
    }
}

#[async_trait]
impl AuthService for SeaOrmAuthService {
    async fn login(&self, email: &str, password: &str) -> Result<AccountInfo, AuthError> {
        let account = self
            .store
            .get_account_by_email(email)
            .await?
            .ok_or(AuthError::InvalidEmail)?;

        let is_valid = self.store.verify_account_password(email, password).await?;
        if !is_valid {
            return Err(AuthError::InvalidPassword);
        }

        Ok(AccountInfo {
            email: account.email,
            name: account.name,
            created_at: account.created_at,
            updated_at: account.updated_at,
        })
    }

    async fn get_account(&self, email: &str) -> Result<AccountInfo, AuthError> {
        let account = self
            .store
            .get_account_by_email(email)
            .await?
            .ok_or(AuthError::NotFound)?;

        Ok(AccountInfo {
            email: account.email,
            name: account.name,
            created_at: account.created_at,
            updated_at: account.updated_at,
        })
    }

    async fn change_password(
        &self,
        email: &str,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), AuthError> {
        validate_password(new_password)?;

        let is_valid = self
            .store
            .verify_account_password(email, current_password)
            .await?;
        if !is_valid {
            return Err(AuthError::InvalidPassword);
        }

        self.store
            .update_account_password(email, new_password, &self.security)
            .await?;

        tracing::info!(email = %email, "password changed");
        Ok(())
    }
}
