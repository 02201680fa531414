//! Domain service for performance browsing and ranking.

use thiserror::Error;

use crate::db::RankedPerformance;
use crate::domain::{DateRange, Genre, RankingError, RankingSize};
use crate::entities::{performances, stagings};

/// Errors specific to performance queries.
#[derive(Debug, Error)]
pub enum PerformanceError {
    #[error(transparent)]
    Invalid(#[from] RankingError),

    #[error("Performance {0} not found")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<anyhow::Error> for PerformanceError {
    fn from(err: anyhow::Error) -> Self {
        Self::Database(err.to_string())
    }
}

/// Domain service trait for performance queries.
#[async_trait::async_trait]
pub trait PerformanceService: Send + Sync {
    /// Top performances by confirmed-reservation count within the
    /// window, optionally restricted to a genre. An empty result is
    /// valid.
    async fn top_performances(
        &self,
        genre: Option<Genre>,
        range: DateRange,
        size: RankingSize,
    ) -> Result<Vec<RankedPerformance>, PerformanceError>;

    /// All performances, optionally restricted to a genre.
    async fn browse(&self, genre: Option<Genre>)
        -> Result<Vec<performances::Model>, PerformanceError>;

    /// A performance and its stagings, looked up by UUID string.
    ///
    /// # Errors
    ///
    /// Returns [`RankingError::InvalidIdentifier`] (wrapped) for a
    /// malformed UUID and [`PerformanceError::NotFound`] for an
    /// unknown one.
    async fn detail(
        &self,
        id: &str,
    ) -> Result<(performances::Model, Vec<stagings::Model>), PerformanceError>;
}
