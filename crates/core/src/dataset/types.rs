//! Types for the title dataset.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

/// Content type of a title.
///
/// The dataset stores this as free text; anything other than the two known
/// labels is kept verbatim in `Unrecognized` and belongs to no view.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ContentType {
    Movie,
    TvShow,
    Unrecognized(String),
}

impl ContentType {
    pub const MOVIE_LABEL: &'static str = "Movie";
    pub const TV_SHOW_LABEL: &'static str = "TV Show";

    /// Classify a raw `type` cell by exact match on the known labels.
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            Self::MOVIE_LABEL => ContentType::Movie,
            Self::TV_SHOW_LABEL => ContentType::TvShow,
            other => ContentType::Unrecognized(other.to_string()),
        }
    }

    /// Display label, identical to the dataset text.
    pub fn label(&self) -> &str {
        match self {
            ContentType::Movie => Self::MOVIE_LABEL,
            ContentType::TvShow => Self::TV_SHOW_LABEL,
            ContentType::Unrecognized(raw) => raw,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, ContentType::Unrecognized(_))
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for ContentType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// One row of the dataset as read from disk, before normalization.
///
/// Only the columns the dashboard uses are declared; anything else in the
/// file is ignored. Empty cells deserialize to `None`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawTitleRow {
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub rating: Option<String>,
    pub release_year: Option<String>,
    pub date_added: Option<String>,
    pub duration: Option<String>,
    pub country: Option<String>,
}

/// A normalized title record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TitleRecord {
    pub title: String,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub rating: Option<String>,
    pub release_year: Option<i32>,
    pub date_added: Option<NaiveDate>,
    /// Duration text as it appears in the file, e.g. "90 min" or "3 Seasons".
    pub duration_raw: Option<String>,
    /// First number found in `duration_raw`.
    pub duration: Option<u32>,
    /// Zero or more country names joined by ", ".
    pub country: Option<String>,
}

impl TitleRecord {
    /// Year the title was added; `None` exactly when `date_added` is.
    pub fn year_added(&self) -> Option<i32> {
        self.date_added.map(|d| d.year())
    }

    /// Month (1-12) the title was added; `None` exactly when `date_added` is.
    pub fn month_added(&self) -> Option<u32> {
        self.date_added.map(|d| d.month())
    }

    /// Same number as `duration`. For TV shows it counts seasons.
    pub fn season_count(&self) -> Option<u32> {
        self.duration
    }
}

/// Projection of a record shown in the index preview tables.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TitleSummary {
    pub title: String,
    #[serde(rename = "type")]
    pub content_type: String,
    pub rating: Option<String>,
    pub release_year: Option<i32>,
}

impl From<&TitleRecord> for TitleSummary {
    fn from(record: &TitleRecord) -> Self {
        Self {
            title: record.title.clone(),
            content_type: record.content_type.label().to_string(),
            rating: record.rating.clone(),
            release_year: record.release_year,
        }
    }
}

/// Dataset loading errors. All of them are fatal at startup.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Dataset file not found: {0}")]
    NotFound(String),

    #[error("Failed to read dataset {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Dataset is missing required column: {0}")]
    MissingColumn(String),

    #[error("Malformed dataset: {0}")]
    Malformed(String),
}
