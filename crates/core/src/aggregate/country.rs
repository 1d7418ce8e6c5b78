//! Country tokenization and the two country views (world map, top-N bars).

use serde::Serialize;

use super::count::{CountEntry, CountTable};
use super::country_codes::country_code;

/// Separator between country names in a single cell.
const COUNTRY_SEPARATOR: &str = ", ";

/// Both charts of the content-by-country page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryBreakdown {
    /// Alpha-3 code → count, for names present in the code table.
    pub map: CountTable<String>,
    /// Most frequent raw names, smallest first.
    pub top: CountTable<String>,
}

/// Split country cells into names and count each distinct name.
///
/// Names are compared exactly as written (after trimming). Missing and empty
/// cells contribute nothing. Entries keep first-encountered order.
pub fn tally_countries<'a, I>(cells: I) -> CountTable<String>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    CountTable::tally(
        cells
            .into_iter()
            .flatten()
            .flat_map(|cell| cell.split(COUNTRY_SEPARATOR))
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string),
    )
}

/// Translate name counts into code counts, dropping unmapped names.
///
/// Aliases that share a code (e.g. "Czechia" and "Czech Republic") are
/// summed into one entry.
pub fn country_map(names: &CountTable<String>) -> CountTable<String> {
    let mut entries: Vec<CountEntry<String>> = Vec::new();
    for entry in names {
        let Some(code) = country_code(&entry.key) else {
            continue;
        };
        match entries.iter_mut().find(|e| e.key == code) {
            Some(existing) => existing.count += entry.count,
            None => entries.push(CountEntry {
                key: code.to_string(),
                count: entry.count,
            }),
        }
    }
    CountTable::from_entries(entries)
}

/// The `n` most frequent names in horizontal-bar order: rank `n` first,
/// rank 1 last. Ties rank by first appearance.
pub fn top_countries(names: &CountTable<String>, n: usize) -> CountTable<String> {
    names.clone().sorted_by_count_desc().truncated(n).reversed()
}

/// Full breakdown over a sequence of country cells.
pub fn country_breakdown<'a, I>(cells: I, top_n: usize) -> CountryBreakdown
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let names = tally_countries(cells);
    CountryBreakdown {
        map: country_map(&names),
        top: top_countries(&names, top_n),
    }
}
