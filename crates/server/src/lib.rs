//! HTTP front end for the title dashboard: HTML chart pages, a JSON API over
//! the same aggregations, and Prometheus metrics.

pub mod api;
pub mod metrics;
pub mod render;
pub mod state;
