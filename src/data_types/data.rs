use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Above this many samples, extents are reduced in parallel.
const PARALLEL_EXTENT_THRESHOLD: usize = 100_000;

#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
    pub error: Option<f64>,
}

impl Sample {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, error: None }
    }

    pub fn with_error(x: f64, y: f64, error: f64) -> Self {
        Self {
            x,
            y,
            error: Some(error),
        }
    }

    /// Builds a sample from a `[x, y]` or `[x, y, err]` row.
    pub fn from_row(row: &[f64]) -> Option<Self> {
        match *row {
            [x, y] => Some(Self::new(x, y)),
            [x, y, e] => Some(Self::with_error(x, y, e)),
            _ => None,
        }
    }
}

/// Immutable, x-ascending samples as rendered by one plot.
///
/// Ordering is the caller's responsibility and is never re-checked here.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SampleSet {
    samples: Vec<Sample>,
    error_bars: bool,
}

impl SampleSet {
    /// Keeps every sample unless the y-axis is logarithmic, in which case
    /// non-positive `y` values are dropped. `x` is never filtered.
    pub fn new(raw: Vec<Sample>, log_y: bool) -> Self {
        let error_bars = raw.first().is_some_and(|s| s.error.is_some());
        let samples = if log_y {
            raw.into_iter().filter(|s| s.y > 0.0).collect()
        } else {
            raw
        };
        Self {
            samples,
            error_bars,
        }
    }

    /// Rows that are neither 2 nor 3 columns wide are skipped.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R], log_y: bool) -> Self {
        let raw = rows
            .iter()
            .filter_map(|r| Sample::from_row(r.as_ref()))
            .collect();
        Self::new(raw, log_y)
    }

    pub fn from_json(json: &str, log_y: bool) -> eyre::Result<Self> {
        use eyre::WrapErr;
        let rows: Vec<Vec<f64>> =
            serde_json::from_str(json).wrap_err("failed to parse sample rows")?;
        Ok(Self::from_rows(&rows, log_y))
    }

    pub fn as_slice(&self) -> &[Sample] {
        &self.samples
    }

    pub fn get(&self, index: usize) -> Option<&Sample> {
        self.samples.get(index)
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Whether the first raw row carried an error magnitude.
    pub fn has_error_bars(&self) -> bool {
        self.error_bars
    }

    pub fn x_extent(&self) -> Option<(f64, f64)> {
        extent(&self.samples, |s| s.x)
    }

    pub fn y_extent(&self) -> Option<(f64, f64)> {
        extent(&self.samples, |s| s.y)
    }
}

fn extent<F>(samples: &[Sample], get: F) -> Option<(f64, f64)>
where
    F: Fn(&Sample) -> f64 + Sync,
{
    let identity = (f64::INFINITY, f64::NEG_INFINITY);
    let fold = |(lo, hi): (f64, f64), v: f64| {
        if v.is_nan() {
            (lo, hi)
        } else {
            (lo.min(v), hi.max(v))
        }
    };

    let (min, max) = if samples.len() >= PARALLEL_EXTENT_THRESHOLD {
        samples
            .par_iter()
            .map(&get)
            .fold(|| identity, fold)
            .reduce(|| identity, |a, b| (a.0.min(b.0), a.1.max(b.1)))
    } else {
        samples.iter().map(&get).fold(identity, fold)
    };

    if min > max {
        None
    } else {
        Some((min, max))
    }
}
