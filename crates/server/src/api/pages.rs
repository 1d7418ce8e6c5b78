//! HTML page handlers.

use std::sync::Arc;

use axum::{extract::State, response::Html};
use titledash_core::{
    content_by_country, content_by_year, content_distribution, movie_duration,
    rating_distribution, DurationChart,
};
use tracing::debug;

use crate::render::{chart_page, figures, index_page, PageBody};
use crate::state::AppState;

/// GET /
///
/// Menu plus the first rows of each view.
pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    let rows = state.charts().preview_rows;
    let dataset = state.dataset();
    Html(index_page(
        &dataset.movies().head(rows),
        &dataset.tv_shows().head(rows),
    ))
}

/// GET /content_distribution
pub async fn content_distribution_page(State(state): State<Arc<AppState>>) -> Html<String> {
    let table = content_distribution(state.dataset());
    Html(chart_page(
        "Content distribution",
        PageBody::Figures(vec![figures::content_distribution(&table)]),
    ))
}

/// GET /content_by_year
pub async fn content_by_year_page(State(state): State<Arc<AppState>>) -> Html<String> {
    let counts = content_by_year(state.dataset());
    Html(chart_page(
        "Content added by year",
        PageBody::Figures(vec![figures::content_by_year(&counts, state.charts())]),
    ))
}

/// GET /movie_duration
///
/// Falls back to a message when no movie has a usable duration.
pub async fn movie_duration_page(State(state): State<Arc<AppState>>) -> Html<String> {
    const TITLE: &str = "Movie duration distribution";

    let chart = movie_duration(state.dataset(), state.charts().duration_bin_size);
    let html = match &chart {
        DurationChart::Distribution(dist) => chart_page(
            TITLE,
            PageBody::Figures(vec![figures::movie_duration(dist, state.charts())]),
        ),
        DurationChart::NoData(message) => {
            debug!("No movie durations to plot");
            chart_page(TITLE, PageBody::Message(message))
        }
    };
    Html(html)
}

/// GET /rating_distribution
pub async fn rating_distribution_page(State(state): State<Arc<AppState>>) -> Html<String> {
    let counts = rating_distribution(state.dataset());
    Html(chart_page(
        "Rating distribution in TV Shows and Movies",
        PageBody::Figures(vec![figures::rating_distribution(&counts, state.charts())]),
    ))
}

/// GET /content_by_country
///
/// World map and top-countries bars on one page.
pub async fn content_by_country_page(State(state): State<Arc<AppState>>) -> Html<String> {
    let breakdown = content_by_country(state.dataset(), state.charts().top_countries);
    Html(chart_page(
        "Content by country",
        PageBody::Figures(vec![
            figures::country_map(&breakdown),
            figures::top_countries(&breakdown, state.charts()),
        ]),
    ))
}
