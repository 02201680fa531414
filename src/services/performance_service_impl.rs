//! `SeaORM` implementation of the `PerformanceService` trait.

use async_trait::async_trait;

use crate::db::{RankedPerformance, Store};
use crate::domain::ranking::parse_performance_id;
use crate::domain::{DateRange, Genre, RankingSize};
use crate::entities::{performances, stagings};
use crate::services::performance_service::{PerformanceError, PerformanceService};

pub struct SeaOrmPerformanceService {
    store: Store,
}

impl SeaOrmPerformanceService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl PerformanceService for SeaOrmPerformanceService {
    async fn top_performances(
        &self,
        genre: Option<Genre>,
        range: DateRange,
        size: RankingSize,
    ) -> Result<Vec<RankedPerformance>, PerformanceError> {
        let rows = self.store.ranking_performances(genre, range, size).await?;
        Ok(rows)
    }

    async fn browse(
        &self,
        genre: Option<Genre>,
    ) -> Result<Vec<performances::Model>, PerformanceError> {
        Ok(self.store.list_performances(genre).await?)
    }

    async fn detail(
        &self,
        id: &str,
    ) -> Result<(performances::Model, Vec<stagings::Model>), PerformanceError> {
        let uuid = parse_performance_id(id)?;

        self.store
            .get_performance_with_stagings(&uuid.to_string())
            .await?
            .ok_or_else(|| PerformanceError::NotFound(id.to_string()))
    }
}
