use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use crate::config::Config;
use crate::db::Store;
use crate::services::{
    AuthService, DefaultSignupService, DefaultVerificationService, EmailVerificationService,
    LogMailer, Mailer, PerformanceService, SeaOrmAuthService, SeaOrmPerformanceService,
    SignupService, SmtpMailer,
};

/// Everything the request handlers share. Wiring is explicit: each
/// service is constructed here with the collaborators it needs.
#[derive(Clone)]
pub struct SharedState {
    pub config: Arc<RwLock<Config>>,

    pub store: Store,

    pub mailer: Arc<dyn Mailer>,

    pub verification_service: Arc<dyn EmailVerificationService>,

    pub signup_service: Arc<dyn SignupService>,

    pub auth_service: Arc<dyn AuthService>,

    pub performance_service: Arc<dyn PerformanceService>,
}

impl SharedState {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let store = Store::with_pool_options(
            &config.general.database_url,
            config.general.max_db_connections,
            config.general.min_db_connections,
        )
        .await?;

        let mailer: Arc<dyn Mailer> = if config.mail.enabled {
            Arc::new(SmtpMailer::new(&config.mail))
        } else {
            Arc::new(LogMailer)
        };

        let code_ttl = Duration::from_secs(config.verification.code_ttl_seconds);
        let security = config.security.clone();
        let config_arc = Arc::new(RwLock::new(config));

        let verification_service: Arc<dyn EmailVerificationService> = Arc::new(
            DefaultVerificationService::new(store.clone(), mailer.clone(), code_ttl),
        );

        let signup_service: Arc<dyn SignupService> = Arc::new(DefaultSignupService::new(
            store.clone(),
            verification_service.clone(),
            security.clone(),
        ));

        let auth_service: Arc<dyn AuthService> =
            Arc::new(SeaOrmAuthService::new(store.clone(), security));

        let performance_service: Arc<dyn PerformanceService> =
            Arc::new(SeaOrmPerformanceService::new(store.clone()));

        Ok(Self {
            config: config_arc,
            store,
            mailer,
            verification_service,
            signup_service,
            auth_service,
            performance_service,
        })
    }
}
