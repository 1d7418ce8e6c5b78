//! Chart aggregations over the dataset.
//!
//! Each function is pure and returns data already in display order, so the
//! rendering layer never sorts, filters or regroups.

mod count;
mod country;
mod country_codes;
mod distribution;

pub use count::{CountEntry, CountTable};
pub use country::{
    country_breakdown, country_map, tally_countries, top_countries, CountryBreakdown,
};
pub use country_codes::country_code;
pub use distribution::{
    duration_chart, histogram, CurvePoint, DurationChart, DurationDistribution, HistogramBin,
    NormalFit, NO_DATA_MESSAGE,
};

use serde::Serialize;

use crate::dataset::{ContentView, Dataset};

/// A pair of count tables, one per content view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerTypeCounts<K> {
    pub tv_shows: CountTable<K>,
    pub movies: CountTable<K>,
}

/// Titles per content type over the whole dataset, most frequent first.
///
/// Unrecognized types get their own entry so the counts sum to the dataset
/// size.
pub fn content_distribution(dataset: &Dataset) -> CountTable<String> {
    CountTable::tally(
        dataset
            .records()
            .iter()
            .map(|r| r.content_type.label().to_string()),
    )
    .sorted_by_count_desc()
}

/// Titles added per year, per view, ascending by year. Undated titles are
/// left out.
pub fn content_by_year(dataset: &Dataset) -> PerTypeCounts<i32> {
    fn by_year(view: ContentView<'_>) -> CountTable<i32> {
        CountTable::tally(view.iter().filter_map(|r| r.year_added())).sorted_by_key()
    }
    PerTypeCounts {
        tv_shows: by_year(dataset.tv_shows()),
        movies: by_year(dataset.movies()),
    }
}

/// Titles per rating code, per view, ascending by the raw rating text.
pub fn rating_distribution(dataset: &Dataset) -> PerTypeCounts<String> {
    fn by_rating(view: ContentView<'_>) -> CountTable<String> {
        CountTable::tally(view.iter().filter_map(|r| r.rating.clone())).sorted_by_key()
    }
    PerTypeCounts {
        tv_shows: by_rating(dataset.tv_shows()),
        movies: by_rating(dataset.movies()),
    }
}

/// Movie durations in minutes, dataset order, nulls dropped.
pub fn movie_durations(dataset: &Dataset) -> Vec<u32> {
    dataset.movies().iter().filter_map(|r| r.duration).collect()
}

/// Duration distribution of movies, or the no-data placeholder.
pub fn movie_duration(dataset: &Dataset, bin_size: u32) -> DurationChart {
    duration_chart(movie_durations(dataset), bin_size)
}

/// Country map and top-N bars over every title with a country.
pub fn content_by_country(dataset: &Dataset, top_n: usize) -> CountryBreakdown {
    country_breakdown(
        dataset.records().iter().map(|r| r.country.as_deref()),
        top_n,
    )
}
