use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use std::path::Path;

use super::{types::Config, ConfigError};

/// Prefix of environment variables that override file settings.
pub const ENV_PREFIX: &str = "TITLEDASH_";

/// Load the dashboard configuration from `path`, then apply overrides from
/// `TITLEDASH_*` environment variables.
///
/// Nested keys are addressed with a double underscore, e.g.
/// `TITLEDASH_DATASET__PATH=/srv/titles.csv` or
/// `TITLEDASH_CHARTS__TOP_COUNTRIES=20`.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.display().to_string()));
    }

    Figment::new()
        .merge(Toml::file(path))
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
        .extract()
        .map_err(|e| ConfigError::ParseError(e.to_string()))
}

/// Load configuration from TOML string (useful for testing)
pub fn load_config_from_str(toml_str: &str) -> Result<Config, ConfigError> {
    toml::from_str(toml_str).map_err(|e| ConfigError::ParseError(e.to_string()))
}
