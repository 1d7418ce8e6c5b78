use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Server port is not 0
/// - Dataset path is not empty and the delimiter is one ASCII character
/// - Chart colors are `#rrggbb`, bin size and top-N are positive
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    // Server validation
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    // Dataset validation
    if config.dataset.path.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "dataset.path cannot be empty".to_string(),
        ));
    }
    if !matches!(config.dataset.delimiter.as_bytes(), [b] if b.is_ascii()) {
        return Err(ConfigError::ValidationError(format!(
            "dataset.delimiter must be a single ASCII character, got {:?}",
            config.dataset.delimiter
        )));
    }

    // Chart validation
    let charts = &config.charts;
    for (key, color) in [
        ("charts.tv_show_color", &charts.tv_show_color),
        ("charts.movie_color", &charts.movie_color),
    ] {
        if !is_hex_color(color) {
            return Err(ConfigError::ValidationError(format!(
                "{} must be a #rrggbb color, got {:?}",
                key, color
            )));
        }
    }
    if charts.duration_bin_size == 0 {
        return Err(ConfigError::ValidationError(
            "charts.duration_bin_size cannot be 0".to_string(),
        ));
    }
    if charts.top_countries == 0 {
        return Err(ConfigError::ValidationError(
            "charts.top_countries cannot be 0".to_string(),
        ));
    }

    Ok(())
}

fn is_hex_color(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit())
}
