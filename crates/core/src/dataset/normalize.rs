//! Field normalization: typed values derived from raw text cells.
//!
//! Every function here is total. Malformed input resolves to `None`.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex_lite::Regex;

use super::types::{ContentType, RawTitleRow, TitleRecord};

static DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").expect("Invalid regex"));

/// Date layouts seen in catalog exports, tried in order.
const DATE_FORMATS: &[&str] = &["%B %d, %Y", "%b %d, %Y", "%Y-%m-%d", "%m/%d/%Y"];

/// Parse a `date_added` cell. Empty or unrecognized text yields `None`.
pub fn parse_date_added(raw: Option<&str>) -> Option<NaiveDate> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
}

/// Extract the first run of decimal digits as an integer.
///
/// "90 min" gives 90, "3 Seasons" gives 3. Text without digits, or a run too
/// large for `u32`, gives `None`.
pub fn extract_number(raw: Option<&str>) -> Option<u32> {
    let found = DIGIT_RUN.find(raw?)?;
    found.as_str().parse().ok()
}

/// Parse an integer cell such as `release_year`.
pub fn parse_year(raw: Option<&str>) -> Option<i32> {
    raw?.trim().parse().ok()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl From<RawTitleRow> for TitleRecord {
    fn from(row: RawTitleRow) -> Self {
        let date_added = parse_date_added(row.date_added.as_deref());
        let duration = extract_number(row.duration.as_deref());
        let release_year = parse_year(row.release_year.as_deref());

        Self {
            title: row.title.unwrap_or_default(),
            content_type: ContentType::parse(row.kind.as_deref().unwrap_or_default()),
            rating: non_empty(row.rating),
            release_year,
            date_added,
            duration_raw: non_empty(row.duration),
            duration,
            country: non_empty(row.country),
        }
    }
}
