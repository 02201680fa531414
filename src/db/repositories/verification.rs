use anyhow::Result;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use std::time::Duration;

use crate::entities::{email_verifications, prelude::*};

/// Keyed store with per-key expiry backing the signup handshake.
///
/// Expiry is enforced at read time by comparing `expires_at`, with an
/// opportunistic reap of stale rows; nothing polls the table.
pub struct VerificationRepository {
    conn: DatabaseConnection,
}

impl VerificationRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Store `value` under `email` with the given TTL, replacing any
    /// prior value and resetting its expiry.
    pub async fn set(&self, email: &str, value: &str, ttl: Duration) -> Result<()> {
        let now = chrono::Utc::now();
        let expires_at = (now + ttl).to_rfc3339();

        let active = email_verifications::ActiveModel {
            email: Set(email.to_string()),
            value: Set(value.to_string()),
            expires_at: Set(expires_at),
            created_at: Set(now.to_rfc3339()),
            ..Default::default()
        };

        EmailVerifications::insert(active)
            .on_conflict(
                sea_orm::sea_query::OnConflict::column(email_verifications::Column::Email)
                    .update_columns([
                        email_verifications::Column::Value,
                        email_verifications::Column::ExpiresAt,
                        email_verifications::Column::CreatedAt,
                    ])
                    .to_owned(),
            )
            .exec(&self.conn)
            .await?;

        Ok(())
    }

    /// Live value stored under `email`, or `None` when absent or expired.
    pub async fn get(&self, email: &str) -> Result<Option<String>> {
        let now = chrono::Utc::now().to_rfc3339();

        // Opportunistic reap of expired rows.
        let _ = EmailVerifications::delete_many()
            .filter(email_verifications::Column::ExpiresAt.lt(&now))
            .exec(&self.conn)
            .await;

        let row = EmailVerifications::find()
            .filter(email_verifications::Column::Email.eq(email))
            .filter(email_verifications::Column::ExpiresAt.gt(&now))
            .one(&self.conn)
            .await?;

        Ok(row.map(|r| r.value))
    }

    /// Delete the record for `email` unconditionally. Idempotent.
    pub async fn delete(&self, email: &str) -> Result<()> {
        EmailVerifications::delete_many()
            .filter(email_verifications::Column::Email.eq(email))
            .exec(&self.conn)
            .await?;

        Ok(())
    }
}
