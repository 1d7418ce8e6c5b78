//! Plotly figure descriptions built from aggregation results.
//!
//! Inputs arrive in display order. These functions only map them onto
//! traces; no sorting, filtering or grouping happens here.

use serde_json::{json, Value};
use titledash_core::{
    ChartsConfig, CountTable, CountryBreakdown, DurationDistribution, PerTypeCounts,
};

/// Offset of the first pie slice, as a fraction of the radius.
const PIE_PULL: f64 = 0.05;

const TV_SHOWS_NAME: &str = "TV Shows";
const MOVIES_NAME: &str = "Movies";

fn split<K: Clone>(table: &CountTable<K>) -> (Vec<K>, Vec<u64>) {
    table.iter().map(|e| (e.key.clone(), e.count)).unzip()
}

/// Pie of titles per content type, first slice pulled out.
pub fn content_distribution(table: &CountTable<String>) -> Value {
    let (labels, values) = split(table);
    let pull: Vec<f64> = (0..labels.len())
        .map(|i| if i == 0 { PIE_PULL } else { 0.0 })
        .collect();

    json!({
        "data": [{
            "type": "pie",
            "labels": labels,
            "values": values,
            "pull": pull,
        }],
        "layout": {},
    })
}

fn grouped_bars<K: Clone + serde::Serialize>(
    counts: &PerTypeCounts<K>,
    charts: &ChartsConfig,
    title: &str,
) -> Value {
    let (show_x, show_y) = split(&counts.tv_shows);
    let (movie_x, movie_y) = split(&counts.movies);

    json!({
        "data": [
            {
                "type": "bar",
                "name": TV_SHOWS_NAME,
                "x": show_x,
                "y": show_y,
                "marker": { "color": charts.tv_show_color },
            },
            {
                "type": "bar",
                "name": MOVIES_NAME,
                "x": movie_x,
                "y": movie_y,
                "marker": { "color": charts.movie_color },
            },
        ],
        "layout": {
            "title": { "text": title },
            "barmode": "group",
            "xaxis": { "type": "category" },
        },
    })
}

/// TV show and movie bars per year added.
pub fn content_by_year(counts: &PerTypeCounts<i32>, charts: &ChartsConfig) -> Value {
    grouped_bars(counts, charts, "Content added per year")
}

/// TV show and movie bars per rating code.
pub fn rating_distribution(counts: &PerTypeCounts<String>, charts: &ChartsConfig) -> Value {
    grouped_bars(counts, charts, "Ratings in TV Shows and Movies")
}

/// Density histogram of movie durations with the fitted normal curve.
pub fn movie_duration(dist: &DurationDistribution, charts: &ChartsConfig) -> Value {
    let half = f64::from(dist.bin_size) / 2.0;
    let centers: Vec<f64> = dist.bins.iter().map(|b| b.start as f64 + half).collect();
    let densities: Vec<f64> = dist.bins.iter().map(|b| b.density).collect();
    let curve_x: Vec<f64> = dist.curve.iter().map(|p| p.x).collect();
    let curve_y: Vec<f64> = dist.curve.iter().map(|p| p.y).collect();

    json!({
        "data": [
            {
                "type": "bar",
                "name": "Duration",
                "x": centers,
                "y": densities,
                "width": dist.bin_size,
                "opacity": 0.7,
                "marker": { "color": charts.movie_color },
            },
            {
                "type": "scatter",
                "mode": "lines",
                "name": "Normal fit",
                "x": curve_x,
                "y": curve_y,
                "line": { "color": charts.movie_color },
            },
        ],
        "layout": {
            "title": { "text": "Movie duration distribution" },
            "bargap": 0,
            "xaxis": { "title": { "text": "Minutes" } },
        },
    })
}

/// World choropleth keyed by alpha-3 code.
pub fn country_map(breakdown: &CountryBreakdown) -> Value {
    let (codes, counts) = split(&breakdown.map);

    json!({
        "data": [{
            "type": "choropleth",
            "locationmode": "ISO-3",
            "locations": codes,
            "z": counts,
            "colorscale": "Reds",
            "colorbar": { "title": { "text": "Titles" } },
        }],
        "layout": {
            "title": { "text": "Content by country" },
            "geo": { "showframe": false, "projection": { "type": "natural earth" } },
        },
    })
}

/// Horizontal bars of the top countries, listed top-to-bottom in the order
/// given.
pub fn top_countries(breakdown: &CountryBreakdown, charts: &ChartsConfig) -> Value {
    let (names, counts) = split(&breakdown.top);

    json!({
        "data": [{
            "type": "bar",
            "orientation": "h",
            "x": counts,
            "y": names,
            "marker": { "color": charts.tv_show_color },
        }],
        "layout": {
            "title": { "text": format!("Top {} countries", charts.top_countries) },
            "yaxis": { "autorange": "reversed", "type": "category" },
        },
    })
}
