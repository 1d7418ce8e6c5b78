//! Movie duration distribution: histogram bins plus a fitted normal curve.

use serde::Serialize;

/// Message shown instead of the chart when no movie has a usable duration.
pub const NO_DATA_MESSAGE: &str = "No valid data to plot.";

/// Points sampled along the fitted curve.
const CURVE_POINTS: usize = 500;

/// Upper bound on histogram bins. Wider spreads get wider bins.
pub const MAX_BINS: u64 = 1_000;

/// Result of the movie duration aggregation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationChart {
    Distribution(DurationDistribution),
    NoData(String),
}

impl DurationChart {
    pub fn is_empty(&self) -> bool {
        matches!(self, DurationChart::NoData(_))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DurationDistribution {
    /// Non-null durations in dataset order.
    pub values: Vec<u32>,
    /// Bin width actually used, never below the configured one.
    pub bin_size: u32,
    pub bins: Vec<HistogramBin>,
    pub fit: NormalFit,
    pub curve: Vec<CurvePoint>,
}

/// Half-open bin `[start, end)` with the share of values that fall in it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBin {
    pub start: u64,
    pub end: u64,
    pub count: u64,
    /// Probability density: count / (total * bin width).
    pub density: f64,
}

/// Mean and population standard deviation of the sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NormalFit {
    pub mean: f64,
    pub std_dev: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurvePoint {
    pub x: f64,
    pub y: f64,
}

impl NormalFit {
    /// Maximum-likelihood fit. `None` for an empty sample.
    pub fn from_values(values: &[u32]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let n = values.len() as f64;
        let mean = values.iter().map(|&v| f64::from(v)).sum::<f64>() / n;
        let variance = values
            .iter()
            .map(|&v| (f64::from(v) - mean).powi(2))
            .sum::<f64>()
            / n;
        Some(Self {
            mean,
            std_dev: variance.sqrt(),
        })
    }

    /// Density at `x`. A zero-width fit has no density curve and yields 0.
    pub fn pdf(&self, x: f64) -> f64 {
        if self.std_dev <= 0.0 {
            return 0.0;
        }
        let z = (x - self.mean) / self.std_dev;
        (-0.5 * z * z).exp() / (self.std_dev * (2.0 * std::f64::consts::PI).sqrt())
    }
}

/// Build the duration chart, or the placeholder when `values` is empty.
pub fn duration_chart(values: Vec<u32>, bin_size: u32) -> DurationChart {
    let Some(fit) = NormalFit::from_values(&values) else {
        return DurationChart::NoData(NO_DATA_MESSAGE.to_string());
    };
    let bin_size = effective_bin_size(&values, bin_size);
    let bins = histogram(&values, bin_size);
    let curve = normal_curve(&values, fit);

    DurationChart::Distribution(DurationDistribution {
        values,
        bin_size,
        bins,
        fit,
        curve,
    })
}

/// Smallest width `>= requested` that covers `values` in at most
/// [`MAX_BINS`] bins.
fn effective_bin_size(values: &[u32], requested: u32) -> u32 {
    let requested = requested.max(1);
    let (Some(&min), Some(&max)) = (values.iter().min(), values.iter().max()) else {
        return requested;
    };
    let span = u64::from(max - min) + 1;
    u32::try_from(span.div_ceil(MAX_BINS))
        .unwrap_or(u32::MAX)
        .max(requested)
}

/// Fixed-width bins starting at the smallest value.
///
/// `bin_size` is widened when the spread would need more than
/// [`MAX_BINS`] bins.
pub fn histogram(values: &[u32], bin_size: u32) -> Vec<HistogramBin> {
    let (Some(&min), Some(&max)) = (values.iter().min(), values.iter().max()) else {
        return Vec::new();
    };
    let bin_size = effective_bin_size(values, bin_size);
    let bin_count = ((max - min) / bin_size) as usize + 1;

    let mut counts = vec![0u64; bin_count];
    for &v in values {
        counts[((v - min) / bin_size) as usize] += 1;
    }

    let total = values.len() as f64;
    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| {
            let start = u64::from(min) + i as u64 * u64::from(bin_size);
            HistogramBin {
                start,
                end: start + u64::from(bin_size),
                count,
                density: count as f64 / (total * f64::from(bin_size)),
            }
        })
        .collect()
}

fn normal_curve(values: &[u32], fit: NormalFit) -> Vec<CurvePoint> {
    let min = values.iter().copied().min().map(f64::from).unwrap_or(0.0);
    let max = values.iter().copied().max().map(f64::from).unwrap_or(0.0);
    if max <= min {
        return vec![CurvePoint {
            x: min,
            y: fit.pdf(min),
        }];
    }
    let step = (max - min) / (CURVE_POINTS - 1) as f64;
    (0..CURVE_POINTS)
        .map(|i| {
            let x = min + step * i as f64;
            CurvePoint { x, y: fit.pdf(x) }
        })
        .collect()
}
