//! Common test utilities for in-process E2E testing.
//!
//! This module provides a test fixture that builds the router around an
//! in-memory dataset, so tests exercise the full handler stack without
//! binding a port or touching the filesystem.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use titledash_core::{
    parse_records, ChartsConfig, Config, Dataset, DatasetConfig, ServerConfig, TitleRecord,
};

/// A small catalog covering both views, an unrecognized type, undated rows,
/// multi-country cells and an unmapped country.
pub const SAMPLE_CSV: &str = r#"show_id,type,title,director,cast,country,date_added,release_year,rating,duration,listed_in,description
s1,Movie,Soul,Pete Docter,,United States,"December 25, 2020",2020,PG,101 min,Animation,A musician
s2,TV Show,Loki,,,"United States, United Kingdom","June 9, 2021",2021,TV-14,1 Season,Action,A god
s3,Movie,Fantasia,,,,,1940,G,,Animation,Music
s4,Movie,Turning Red,,,"Canada, United States","March 11, 2022",2022,PG,100 min,Comedy,A panda
s5,TV Show,Bluey,,,Australia,"January 1, 2021",2018,TV-Y,3 Seasons,Kids,Dogs
s6,TV Show,The Mandalorian,,,United States,"November 12, 2019",2019,TV-14,2 Seasons,Action,Space
s7,Short,Bao,,,Atlantis,"November 12, 2019",2018,G,8 min,Animation,Dumplings
s8,Movie,Moana,,,United States,"November 12, 2019",2016,PG,107 min,Animation,Ocean
"#;

/// Test fixture with an in-process router.
///
/// # Example
///
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_health() {
///     let fixture = TestFixture::new();
///     let response = fixture.get("/api/v1/health").await;
///     assert_eq!(response.status, 200);
/// }
/// ```
pub struct TestFixture {
    /// The Axum router for testing
    pub router: Router,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    /// Parsed JSON body, `Value::Null` for non-JSON bodies
    pub body: Value,
    /// Raw body text
    pub text: String,
}

impl TestFixture {
    /// Create a fixture over [`SAMPLE_CSV`].
    pub fn new() -> Self {
        let records = parse_records(SAMPLE_CSV.as_bytes(), b',').expect("Failed to parse sample");
        Self::with_records(records)
    }

    /// Create a fixture over the given records with default chart settings.
    pub fn with_records(records: Vec<TitleRecord>) -> Self {
        Self::with_records_and_charts(records, ChartsConfig::default())
    }

    /// Create a fixture with custom chart settings.
    pub fn with_records_and_charts(records: Vec<TitleRecord>, charts: ChartsConfig) -> Self {
        let config = Config {
            server: ServerConfig {
                host: std::net::IpAddr::V4(std::net::Ipv4Addr::LOCALHOST),
                port: 0, // Not used for in-process testing
            },
            dataset: DatasetConfig {
                path: "sample.csv".into(),
                delimiter: ",".to_string(),
            },
            charts,
        };

        let state = Arc::new(titledash_server::state::AppState::new(
            config,
            Dataset::new(records),
        ));
        let router = titledash_server::api::create_router(state);

        Self { router }
    }

    /// Send a GET request to the test server.
    pub async fn get(&self, path: &str) -> TestResponse {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .unwrap();

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes();

        let text = String::from_utf8_lossy(&body_bytes).into_owned();
        let body: Value = if body_bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body_bytes).unwrap_or(Value::Null)
        };

        TestResponse { status, body, text }
    }
}

/// Helper to assert a response has expected status.
#[macro_export]
macro_rules! assert_status {
    ($response:expr, $status:expr) => {
        assert_eq!(
            $response.status, $status,
            "Expected status {:?}, got {:?}. Body: {}",
            $status, $response.status, $response.text
        );
    };
}
