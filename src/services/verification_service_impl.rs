//! Store-backed implementation of the email-verification handshake.

use async_trait::async_trait;
use rand::Rng;
use std::sync::Arc;
use std::time::Duration;

use crate::db::Store;
use crate::domain::account::validate_email;
use crate::services::mailer::Mailer;
use crate::services::verification_service::{
    EmailVerificationService, VerificationError, VERIFIED_SENTINEL,
};

const CODE_EMAIL_SUBJECT: &str = "Ovation signup email verification";

pub struct DefaultVerificationService {
    store: Store,
    mailer: Arc<dyn Mailer>,
    code_ttl: Duration,
}

impl DefaultVerificationService {
    #[must_use]
    pub fn new(store: Store, mailer: Arc<dyn Mailer>, code_ttl: Duration) -> Self {
        Self {
            store,
            mailer,
            code_ttl,
        }
    }

    fn generate_code() -> String {
        let n: u32 = rand::rng().random_range(0..1_000_000);
        format!("{n:06}")
    }

    fn code_email_body(email: &str, code: &str) -> String {
        format!(
            concat!(
                "<h1>Welcome to Ovation!</h1>",
                "<h3>This is the verification code requested for signing up {email}.</h3><br>",
                "<h2>Return to the signup screen and enter the code below.</h2>",
                "<div align='center' style='border:1px solid black; font-family:verdana;'>",
                "<h2>Signup verification code</h2>",
                "<h1 style='color:blue'>{code}</h1>",
                "</div><br>",
                "<h3>Thank you.</h3>",
            ),
            email = email,
            code = code,
        )
    }
}

#[async_trait]
impl EmailVerificationService for DefaultVerificationService {
    async fn request_code(&self, email: &str) -> Result<(), VerificationError> {
        validate_email(email).map_err(|_| VerificationError::EmailFormat)?;

        let code = Self::generate_code();

        // Store before sending: a failed delivery leaves a pending
        // record that either gets replaced by a retry or expires.
        self.store
            .set_verification(email, &code, self.code_ttl)
            .await?;

        let body = Self::code_email_body(email, &code);
        self.mailer.send(email, CODE_EMAIL_SUBJECT, &body).await?;

        tracing::info!(email = %email, "verification code issued");
        Ok(())
    }

    async fn confirm_code(&self, email: &str, submitted: &str) -> Result<bool, VerificationError> {
        let stored = self.store.get_verification(email).await?;

        match stored {
            Some(code) if code == submitted && code != VERIFIED_SENTINEL => {
                self.store
                    .set_verification(email, VERIFIED_SENTINEL, self.code_ttl)
                    .await?;
                tracing::info!(email = %email, "email verified");
                Ok(true)
            }
            // Mismatch (or no pending code): no state change, no lockout.
            _ => Ok(false),
        }
    }

    async fn is_verified(&self, email: &str) -> Result<bool, VerificationError> {
        let stored = self.store.get_verification(email).await?;
        Ok(stored.as_deref() == Some(VERIFIED_SENTINEL))
    }

    async fn invalidate(&self, email: &str) -> Result<(), VerificationError> {
        self.store.delete_verification(email).await?;
        Ok(())
    }
}
