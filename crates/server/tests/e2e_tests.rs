//! End-to-end tests against the in-process router.
//!
//! These tests run the full handler stack over the sample dataset in
//! `common::SAMPLE_CSV`.

mod common;

use axum::http::StatusCode;
use serde_json::json;
use titledash_core::{ChartsConfig, NO_DATA_MESSAGE};

use common::TestFixture;

// =============================================================================
// Basic API Tests
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let fixture = TestFixture::new();
    let response = fixture.get("/api/v1/health").await;
    assert_status!(response, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert_eq!(response.body["records"], 8);
}

#[tokio::test]
async fn test_config_endpoint() {
    let fixture = TestFixture::new();
    let response = fixture.get("/api/v1/config").await;
    assert_status!(response, StatusCode::OK);
    assert_eq!(response.body["charts"]["duration_bin_size"], 5);
    assert_eq!(response.body["charts"]["top_countries"], 15);
    assert_eq!(response.body["dataset"]["path"], "sample.csv");
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let fixture = TestFixture::new();
    let response = fixture.get("/nope").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_metrics_endpoint() {
    let fixture = TestFixture::new();
    fixture.get("/api/v1/health").await;

    let response = fixture.get("/metrics").await;
    assert_status!(response, StatusCode::OK);
    assert!(response.text.contains("titledash_http_requests_total"));
    assert!(response.text.contains(r#"path="/api/v1/health""#));
}

// =============================================================================
// Chart Data API Tests
// =============================================================================

#[tokio::test]
async fn test_content_distribution_counts_every_title() {
    let fixture = TestFixture::new();
    let response = fixture.get("/api/v1/charts/content_distribution").await;
    assert_status!(response, StatusCode::OK);
    assert_eq!(
        response.body,
        json!([
            {"key": "Movie", "count": 4},
            {"key": "TV Show", "count": 3},
            {"key": "Short", "count": 1},
        ])
    );
}

#[tokio::test]
async fn test_content_by_year_sorted_per_view() {
    let fixture = TestFixture::new();
    let response = fixture.get("/api/v1/charts/content_by_year").await;
    assert_status!(response, StatusCode::OK);
    assert_eq!(
        response.body["tv_shows"],
        json!([{"key": 2019, "count": 1}, {"key": 2021, "count": 2}])
    );
    assert_eq!(
        response.body["movies"],
        json!([
            {"key": 2019, "count": 1},
            {"key": 2020, "count": 1},
            {"key": 2022, "count": 1},
        ])
    );
}

#[tokio::test]
async fn test_rating_distribution_sorted_by_label() {
    let fixture = TestFixture::new();
    let response = fixture.get("/api/v1/charts/rating_distribution").await;
    assert_status!(response, StatusCode::OK);
    assert_eq!(
        response.body["movies"],
        json!([{"key": "G", "count": 1}, {"key": "PG", "count": 3}])
    );
    assert_eq!(
        response.body["tv_shows"],
        json!([{"key": "TV-14", "count": 2}, {"key": "TV-Y", "count": 1}])
    );
}

#[tokio::test]
async fn test_movie_duration_distribution() {
    let fixture = TestFixture::new();
    let response = fixture.get("/api/v1/charts/movie_duration").await;
    assert_status!(response, StatusCode::OK);

    let dist = &response.body["distribution"];
    assert_eq!(dist["values"], json!([101, 100, 107]));
    assert_eq!(dist["bin_size"], 5);
    assert_eq!(dist["bins"][0]["start"], 100);
    assert!(response.body.get("no_data").is_none());
}

#[tokio::test]
async fn test_movie_duration_without_data() {
    let records = titledash_core::parse_records(
        b"title,type,rating,release_year,date_added,duration,country\nX,Movie,PG,2020,,,\n",
        b',',
    )
    .unwrap();
    let fixture = TestFixture::with_records(records);

    let response = fixture.get("/api/v1/charts/movie_duration").await;
    assert_status!(response, StatusCode::OK);
    assert_eq!(response.body, json!({ "no_data": NO_DATA_MESSAGE }));
}

#[tokio::test]
async fn test_movie_duration_with_extreme_values() {
    let records = titledash_core::parse_records(
        b"title,type,rating,release_year,date_added,duration,country\n\
          A,Movie,PG,2020,,1 min,\n\
          B,Movie,PG,2020,,4294967295 min,\n",
        b',',
    )
    .unwrap();
    let fixture = TestFixture::with_records(records);

    let response = fixture.get("/api/v1/charts/movie_duration").await;
    assert_status!(response, StatusCode::OK);
    let bins = response.body["distribution"]["bins"].as_array().unwrap();
    assert!(bins.len() <= 1_000);
    assert_eq!(bins.last().unwrap()["count"], 1);

    let page = fixture.get("/movie_duration").await;
    assert_status!(page, StatusCode::OK);
    assert!(page.text.contains("Plotly.newPlot"));
}

#[tokio::test]
async fn test_content_by_country() {
    let fixture = TestFixture::new();
    let response = fixture.get("/api/v1/charts/content_by_country").await;
    assert_status!(response, StatusCode::OK);

    let top: Vec<&str> = response.body["top"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["key"].as_str().unwrap())
        .collect();
    assert_eq!(
        top,
        vec![
            "Atlantis",
            "Australia",
            "Canada",
            "United Kingdom",
            "United States"
        ]
    );

    assert_eq!(
        response.body["map"],
        json!([
            {"key": "USA", "count": 5},
            {"key": "GBR", "count": 1},
            {"key": "CAN", "count": 1},
            {"key": "AUS", "count": 1},
        ])
    );
}

#[tokio::test]
async fn test_content_by_country_respects_top_n() {
    let records =
        titledash_core::parse_records(common::SAMPLE_CSV.as_bytes(), b',').unwrap();
    let charts = ChartsConfig {
        top_countries: 2,
        ..ChartsConfig::default()
    };
    let fixture = TestFixture::with_records_and_charts(records, charts);

    let response = fixture.get("/api/v1/charts/content_by_country").await;
    assert_eq!(
        response.body["top"],
        json!([
            {"key": "United Kingdom", "count": 1},
            {"key": "United States", "count": 5},
        ])
    );
}

// =============================================================================
// HTML Page Tests
// =============================================================================

#[tokio::test]
async fn test_index_page_lists_both_views() {
    let fixture = TestFixture::new();
    let response = fixture.get("/").await;
    assert_status!(response, StatusCode::OK);

    let html = &response.text;
    assert!(html.contains("<h2>Movies</h2>"));
    assert!(html.contains("<h2>TV Shows</h2>"));
    assert!(html.contains("<td>Turning Red</td>"));
    assert!(html.contains("<td>The Mandalorian</td>"));
    assert!(!html.contains("<td>Bao</td>"));
}

#[tokio::test]
async fn test_index_page_preview_rows_limit() {
    let records =
        titledash_core::parse_records(common::SAMPLE_CSV.as_bytes(), b',').unwrap();
    let charts = ChartsConfig {
        preview_rows: 1,
        ..ChartsConfig::default()
    };
    let fixture = TestFixture::with_records_and_charts(records, charts);

    let html = fixture.get("/").await.text;
    assert!(html.contains("<td>Soul</td>"));
    assert!(html.contains("<td>Loki</td>"));
    assert!(!html.contains("<td>Fantasia</td>"));
    assert!(!html.contains("<td>Bluey</td>"));
}

#[tokio::test]
async fn test_chart_pages_embed_figures() {
    let fixture = TestFixture::new();
    for path in [
        "/content_distribution",
        "/content_by_year",
        "/movie_duration",
        "/rating_distribution",
    ] {
        let response = fixture.get(path).await;
        assert_status!(response, StatusCode::OK);
        assert!(
            response.text.contains(r#"<div id="chart-0">"#),
            "{} has no chart",
            path
        );
        assert!(!response.text.contains(r#"<div id="chart-1">"#));
    }
}

#[tokio::test]
async fn test_country_page_has_two_charts() {
    let fixture = TestFixture::new();
    let response = fixture.get("/content_by_country").await;
    assert_status!(response, StatusCode::OK);
    assert!(response.text.contains(r#"<div id="chart-0">"#));
    assert!(response.text.contains(r#"<div id="chart-1">"#));
    assert!(response.text.contains("choropleth"));
}

#[tokio::test]
async fn test_movie_duration_page_placeholder() {
    let fixture = TestFixture::with_records(Vec::new());
    let response = fixture.get("/movie_duration").await;
    assert_status!(response, StatusCode::OK);
    assert!(response
        .text
        .contains(&format!("<h3>{}</h3>", NO_DATA_MESSAGE)));
    assert!(!response.text.contains("Plotly.newPlot"));
}
