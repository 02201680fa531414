use anyhow::Result;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};
use std::path::Path;
use std::time::Duration;
use tracing::info;

use crate::domain::{DateRange, Genre, RankingSize};
use crate::entities::{performances, reservations, stagings};

pub mod migrator;
pub mod repositories;

pub use repositories::account::Account;
pub use repositories::performance::RankedPerformance;

#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

impl Store {
    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self> {
        use sea_orm_migration::MigratorTrait;

        if !db_url.contains(":memory:") {
            let path_str = db_url.trim_start_matches("sqlite:");
            if let Some(parent) = Path::new(path_str).parent() {
                tokio::fs::create_dir_all(parent).await.ok();
            }
            if !Path::new(path_str).exists() {
                std::fs::File::create(path_str)?;
            }
        }

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(600))
            .sqlx_logging(false);

        let conn = Database::connect(opt).await?;

        migrator::Migrator::up(&conn, None).await?;

        info!(
            "Database connected & migrations applied (pool: {}-{})",
            min_connections, max_connections
        );

        Ok(Self { conn })
    }

    pub async fn ping(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        self.conn
            .query_one(Statement::from_string(backend, "SELECT 1".to_string()))
            .await?;
        Ok(())
    }

    fn account_repo(&self) -> repositories::account::AccountRepository {
        repositories::account::AccountRepository::new(self.conn.clone())
    }

    fn verification_repo(&self) -> repositories::verification::VerificationRepository {
        repositories::verification::VerificationRepository::new(self.conn.clone())
    }

    fn performance_repo(&self) -> repositories::performance::PerformanceRepository {
        repositories::performance::PerformanceRepository::new(self.conn.clone())
    }

    // ========== Accounts ==========

    pub async fn account_exists(&self, email: &str) -> Result<bool> {
        self.account_repo().exists_by_email(email).await
    }

    pub async fn get_account_by_email(&self, email: &str) -> Result<Option<Account>> {
        self.account_repo().get_by_email(email).await
    }

    /// `Ok(None)` means the unique email constraint rejected the insert.
    pub async fn insert_account(
        &self,
        email: &str,
        name: &str,
        password_hash: &str,
    ) -> Result<Option<Account>> {
        self.account_repo().insert(email, name, password_hash).await
    }

    pub async fn verify_account_password(&self, email: &str, password: &str) -> Result<bool> {
        self.account_repo().verify_password(email, password).await
    }

    pub async fn update_account_password(
        &self,
        email: &str,
        new_password: &str,
        config: &crate::config::SecurityConfig,
    ) -> Result<()> {
        self.account_repo()
            .update_password(email, new_password, config)
            .await
    }

    // ========== Verification records ==========

    pub async fn set_verification(&self, email: &str, value: &str, ttl: Duration) -> Result<()> {
        self.verification_repo().set(email, value, ttl).await
    }

    pub async fn get_verification(&self, email: &str) -> Result<Option<String>> {
        self.verification_repo().get(email).await
    }

    pub async fn delete_verification(&self, email: &str) -> Result<()> {
        self.verification_repo().delete(email).await
    }

    // ========== Performances ==========

    pub async fn ranking_performances(
        &self,
        genre: Option<Genre>,
        range: DateRange,
        size: RankingSize,
    ) -> Result<Vec<RankedPerformance>> {
        self.performance_repo().ranking(genre, range, size).await
    }

    pub async fn list_performances(&self, genre: Option<Genre>) -> Result<Vec<performances::Model>> {
        self.performance_repo().list(genre).await
    }

    pub async fn get_performance_with_stagings(
        &self,
        id: &str,
    ) -> Result<Option<(performances::Model, Vec<stagings::Model>)>> {
        self.performance_repo().get_with_stagings(id).await
    }

    pub async fn add_performance(&self, name: &str, genre: Genre) -> Result<performances::Model> {
        self.performance_repo().add_performance(name, genre).await
    }

    pub async fn add_staging(
        &self,
        performance_id: &str,
        starts_at: &str,
    ) -> Result<stagings::Model> {
        self.performance_repo()
            .add_staging(performance_id, starts_at)
            .await
    }

    pub async fn add_reservation(
        &self,
        staging_id: i64,
        account_id: Option<i32>,
    ) -> Result<reservations::Model> {
        self.performance_repo()
            .add_reservation(staging_id, account_id)
            .await
    }
}
