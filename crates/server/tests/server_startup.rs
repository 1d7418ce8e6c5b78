mod common;

use std::io::Write;
use std::net::TcpListener;
use std::path::Path;
use std::time::Duration;

use reqwest::Client;
use tempfile::NamedTempFile;
use tokio::time::{sleep, timeout};

/// Find an available port
fn get_available_port() -> u16 {
    TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port()
}

/// Create a minimal valid config pointing at `dataset`
fn minimal_config(port: u16, dataset: &Path) -> String {
    format!(
        r#"
[server]
host = "127.0.0.1"
port = {}

[dataset]
path = {:?}
"#,
        port,
        dataset.display().to_string()
    )
}

fn write_temp(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(content.as_bytes()).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

/// Spawn the server and return a handle
async fn spawn_server(config_path: &Path) -> tokio::process::Child {
    tokio::process::Command::new(env!("CARGO_BIN_EXE_titledash"))
        .env("TITLEDASH_CONFIG", config_path)
        .env("RUST_LOG", "error") // Quiet logs during tests
        .kill_on_drop(true)
        .spawn()
        .expect("Failed to spawn server")
}

/// Run the server to completion and report whether it exited successfully
async fn run_to_exit(config_path: &Path) -> bool {
    let result = timeout(
        Duration::from_secs(5),
        tokio::process::Command::new(env!("CARGO_BIN_EXE_titledash"))
            .env("TITLEDASH_CONFIG", config_path)
            .env("RUST_LOG", "error")
            .output(),
    )
    .await
    .expect("Command timed out")
    .expect("Failed to execute command");

    result.status.success()
}

/// Wait for server to be ready
async fn wait_for_server(port: u16, max_attempts: u32) -> bool {
    let client = Client::new();
    for _ in 0..max_attempts {
        if client
            .get(format!("http://127.0.0.1:{}/api/v1/health", port))
            .send()
            .await
            .is_ok()
        {
            return true;
        }
        sleep(Duration::from_millis(50)).await;
    }
    false
}

#[tokio::test]
async fn test_serves_dataset_from_config() {
    let port = get_available_port();
    let dataset = write_temp(common::SAMPLE_CSV);
    let config = write_temp(&minimal_config(port, dataset.path()));

    // Start server
    let mut server = spawn_server(config.path()).await;

    // Wait for server to be ready
    assert!(
        wait_for_server(port, 40).await,
        "Server did not start in time"
    );

    let client = Client::new();
    let response = client
        .get(format!("http://127.0.0.1:{}/api/v1/health", port))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let json: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(json["status"], "ok");
    assert_eq!(json["records"], 8);
    assert_eq!(json["dataset_sha256"].as_str().map(str::len), Some(64));

    let page = client
        .get(format!("http://127.0.0.1:{}/content_by_year", port))
        .send()
        .await
        .expect("Failed to send request");
    assert!(page.status().is_success());
    assert!(page.text().await.unwrap().contains("Plotly.newPlot"));

    // Cleanup
    server.kill().await.ok();
}

#[tokio::test]
async fn test_missing_config_file_exits_with_error() {
    assert!(!run_to_exit(Path::new("/nonexistent/config.toml")).await);
}

#[tokio::test]
async fn test_missing_dataset_exits_with_error() {
    let port = get_available_port();
    let config = write_temp(&minimal_config(port, Path::new("/nonexistent/titles.csv")));
    assert!(!run_to_exit(config.path()).await);
}

#[tokio::test]
async fn test_malformed_dataset_exits_with_error() {
    let port = get_available_port();
    let dataset = write_temp("title,type\nSoul,Movie\n");
    let config = write_temp(&minimal_config(port, dataset.path()));
    assert!(!run_to_exit(config.path()).await);
}

#[tokio::test]
async fn test_invalid_config_exits_with_error() {
    let dataset = write_temp(common::SAMPLE_CSV);
    let config = write_temp(&minimal_config(0, dataset.path()));
    assert!(!run_to_exit(config.path()).await);
}
