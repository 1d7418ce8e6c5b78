use titledash_core::{ChartsConfig, Config, Dataset};

/// Shared application state
///
/// Built once before the server starts and only read afterwards, so handlers
/// share it through an `Arc` without locking.
pub struct AppState {
    config: Config,
    dataset: Dataset,
}

impl AppState {
    pub fn new(config: Config, dataset: Dataset) -> Self {
        Self { config, dataset }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn charts(&self) -> &ChartsConfig {
        &self.config.charts
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }
}
