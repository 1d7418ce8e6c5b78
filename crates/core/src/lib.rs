pub mod aggregate;
pub mod config;
pub mod dataset;

pub use aggregate::{
    content_by_country, content_by_year, content_distribution, country_code, movie_duration,
    movie_durations, rating_distribution, CountEntry, CountTable, CountryBreakdown, DurationChart,
    DurationDistribution, PerTypeCounts, NO_DATA_MESSAGE,
};
pub use config::{
    load_config, load_config_from_str, validate_config, ChartsConfig, Config, ConfigError,
    DatasetConfig, ServerConfig,
};
pub use dataset::{
    load_dataset, parse_records, ContentType, ContentView, Dataset, LoadError, TitleRecord,
    TitleSummary,
};
