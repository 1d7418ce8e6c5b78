use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::path::PathBuf;

/// Root configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    pub dataset: DatasetConfig,
    #[serde(default)]
    pub charts: ChartsConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> IpAddr {
    IpAddr::V4(std::net::Ipv4Addr::UNSPECIFIED)
}

fn default_port() -> u16 {
    8080
}

/// Dataset source configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatasetConfig {
    /// Path to the delimited titles file
    pub path: PathBuf,
    /// Field delimiter (single ASCII character, default ",")
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
}

impl DatasetConfig {
    /// Delimiter as a byte, falling back to ',' when the value is not a
    /// single ASCII character (rejected earlier by validation).
    pub fn delimiter_byte(&self) -> u8 {
        match self.delimiter.as_bytes() {
            [b] if b.is_ascii() => *b,
            _ => b',',
        }
    }
}

fn default_delimiter() -> String {
    ",".to_string()
}

/// Chart presentation parameters
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ChartsConfig {
    /// Bar/curve color for the TV show series
    #[serde(default = "default_tv_show_color")]
    pub tv_show_color: String,
    /// Bar/curve color for the movie series
    #[serde(default = "default_movie_color")]
    pub movie_color: String,
    /// Histogram bin width for the movie duration chart (minutes)
    #[serde(default = "default_duration_bin_size")]
    pub duration_bin_size: u32,
    /// How many countries the horizontal bar chart lists
    #[serde(default = "default_top_countries")]
    pub top_countries: usize,
    /// Rows shown per preview table on the index page
    #[serde(default = "default_preview_rows")]
    pub preview_rows: usize,
}

impl Default for ChartsConfig {
    fn default() -> Self {
        Self {
            tv_show_color: default_tv_show_color(),
            movie_color: default_movie_color(),
            duration_bin_size: default_duration_bin_size(),
            top_countries: default_top_countries(),
            preview_rows: default_preview_rows(),
        }
    }
}

fn default_tv_show_color() -> String {
    "#a678de".to_string()
}

fn default_movie_color() -> String {
    "#6ad49b".to_string()
}

fn default_duration_bin_size() -> u32 {
    5
}

fn default_top_countries() -> usize {
    15
}

fn default_preview_rows() -> usize {
    10
}
