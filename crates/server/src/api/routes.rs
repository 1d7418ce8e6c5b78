use axum::{middleware, routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::{charts, handlers, middleware::metrics_middleware, pages};
use crate::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    // HTML pages
    let page_routes: Router<Arc<AppState>> = Router::new()
        .route("/", get(pages::index))
        .route("/content_distribution", get(pages::content_distribution_page))
        .route("/content_by_year", get(pages::content_by_year_page))
        .route("/movie_duration", get(pages::movie_duration_page))
        .route("/rating_distribution", get(pages::rating_distribution_page))
        .route("/content_by_country", get(pages::content_by_country_page));

    // API routes
    let api_routes: Router<Arc<AppState>> = Router::new()
        // Health and config
        .route("/health", get(handlers::health))
        .route("/config", get(handlers::get_config))
        // Chart data
        .route(
            "/charts/content_distribution",
            get(charts::get_content_distribution),
        )
        .route("/charts/content_by_year", get(charts::get_content_by_year))
        .route("/charts/movie_duration", get(charts::get_movie_duration))
        .route(
            "/charts/rating_distribution",
            get(charts::get_rating_distribution),
        )
        .route(
            "/charts/content_by_country",
            get(charts::get_content_by_country),
        );

    Router::new()
        .merge(page_routes)
        .nest("/api/v1", api_routes)
        .route("/metrics", get(handlers::metrics))
        .route_layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
