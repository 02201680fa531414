use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use std::sync::Arc;

use super::validation::{parse_date_range, parse_genre, parse_ranking_size};
use super::{
    ApiError, ApiResponse, AppState, PerformanceDetailDto, PerformanceDto, RankingEntryDto,
};

#[derive(Deserialize)]
pub struct RankingQuery {
    pub genre: Option<String>,
    pub date: Option<String>,
    pub unit: Option<String>,
    pub size: Option<u64>,
}

#[derive(Deserialize)]
pub struct BrowseQuery {
    pub genre: Option<String>,
}

/// GET /performances/ranking
/// Performances ordered by confirmed reservations in the window
pub async fn ranking(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RankingQuery>,
) -> Result<Json<ApiResponse<Vec<RankingEntryDto>>>, ApiError> {
    let genre = parse_genre(query.genre.as_deref())?;
    let range = parse_date_range(query.date.as_deref(), query.unit.as_deref())?;
    let size = parse_ranking_size(query.size)?;

    let rows = state
        .performances()
        .top_performances(genre, range, size)
        .await?;

    let entries = rows.into_iter().map(RankingEntryDto::from).collect();
    Ok(Json(ApiResponse::success(entries)))
}

/// GET /performances
pub async fn browse(
    State(state): State<Arc<AppState>>,
    Query(query): Query<BrowseQuery>,
) -> Result<Json<ApiResponse<Vec<PerformanceDto>>>, ApiError> {
    let genre = parse_genre(query.genre.as_deref())?;

    let performances = state.performances().browse(genre).await?;

    let dtos = performances.into_iter().map(PerformanceDto::from).collect();
    Ok(Json(ApiResponse::success(dtos)))
}

/// GET /performances/{id}
pub async fn detail(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<PerformanceDetailDto>>, ApiError> {
    let (performance, stagings) = state.performances().detail(&id).await?;

    Ok(Json(ApiResponse::success(PerformanceDetailDto {
        performance: performance.into(),
        stagings: stagings.into_iter().map(Into::into).collect(),
    })))
}
