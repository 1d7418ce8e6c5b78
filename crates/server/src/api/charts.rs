//! Chart data API handlers.
//!
//! Each endpoint returns the same aggregation its HTML page renders.

use std::sync::Arc;

use axum::{extract::State, Json};
use titledash_core::{
    content_by_country, content_by_year, content_distribution, movie_duration,
    rating_distribution, CountTable, CountryBreakdown, DurationChart, PerTypeCounts,
};

use crate::state::AppState;

/// GET /api/v1/charts/content_distribution
pub async fn get_content_distribution(
    State(state): State<Arc<AppState>>,
) -> Json<CountTable<String>> {
    Json(content_distribution(state.dataset()))
}

/// GET /api/v1/charts/content_by_year
pub async fn get_content_by_year(State(state): State<Arc<AppState>>) -> Json<PerTypeCounts<i32>> {
    Json(content_by_year(state.dataset()))
}

/// GET /api/v1/charts/movie_duration
///
/// Either `{"distribution": {...}}` or `{"no_data": "<message>"}`.
pub async fn get_movie_duration(State(state): State<Arc<AppState>>) -> Json<DurationChart> {
    Json(movie_duration(
        state.dataset(),
        state.charts().duration_bin_size,
    ))
}

/// GET /api/v1/charts/rating_distribution
pub async fn get_rating_distribution(
    State(state): State<Arc<AppState>>,
) -> Json<PerTypeCounts<String>> {
    Json(rating_distribution(state.dataset()))
}

/// GET /api/v1/charts/content_by_country
pub async fn get_content_by_country(State(state): State<Arc<AppState>>) -> Json<CountryBreakdown> {
    Json(content_by_country(
        state.dataset(),
        state.charts().top_countries,
    ))
}
