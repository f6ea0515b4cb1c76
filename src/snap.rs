//! Nearest-sample lookup used to snap region bounds onto actual data points.

use crate::data_types::Sample;
use crate::error::{PlotError, Result};

/// Bisection over x-ascending samples.
#[derive(Clone, Copy, Debug)]
pub struct SnapIndex<'a> {
    samples: &'a [Sample],
}

impl<'a> SnapIndex<'a> {
    pub fn new(samples: &'a [Sample]) -> Self {
        Self { samples }
    }

    /// Index of the sample whose x is closest to `target`.
    ///
    /// Below the first sample snaps to the first, above the last to the last.
    /// On an exact tie the left neighbor wins.
    pub fn nearest_index(&self, target: f64) -> Result<usize> {
        let len = self.samples.len();
        if len == 0 {
            return Err(PlotError::EmptyData);
        }

        let i = self.samples.partition_point(|s| s.x < target);
        if i == 0 {
            return Ok(0);
        }
        if i >= len {
            return Ok(len - 1);
        }

        let left = (self.samples[i - 1].x - target).abs();
        let right = (self.samples[i].x - target).abs();
        Ok(if left <= right { i - 1 } else { i })
    }

    pub fn nearest(&self, target: f64) -> Result<f64> {
        self.nearest_index(target).map(|i| self.samples[i].x)
    }
}

/// Snaps `target` to the x of the nearest sample.
pub fn nearest(samples: &[Sample], target: f64) -> Result<f64> {
    SnapIndex::new(samples).nearest(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn xs(values: &[f64]) -> Vec<Sample> {
        values.iter().map(|&x| Sample::new(x, 0.0)).collect()
    }

    #[test]
    fn picks_closer_neighbor() {
        let data = xs(&[1.0, 3.0, 7.0, 10.0]);
        assert_eq!(nearest(&data, 4.0).unwrap(), 3.0);
        assert_eq!(nearest(&data, 8.9).unwrap(), 10.0);
        assert_eq!(nearest(&data, 7.0).unwrap(), 7.0);
    }

    #[test]
    fn clamps_outside_range() {
        let data = xs(&[1.0, 3.0, 7.0, 10.0]);
        assert_eq!(nearest(&data, -5.0).unwrap(), 1.0);
        assert_eq!(nearest(&data, 50.0).unwrap(), 10.0);
    }

    #[test]
    fn tie_prefers_left() {
        let data = xs(&[1.0, 3.0]);
        assert_eq!(nearest(&data, 2.0).unwrap(), 1.0);
    }

    #[test]
    fn empty_is_an_error() {
        assert_eq!(nearest(&[], 1.0), Err(PlotError::EmptyData));
    }

    #[test]
    fn single_sample_always_wins() {
        let data = xs(&[4.0]);
        assert_eq!(nearest(&data, -100.0).unwrap(), 4.0);
        assert_eq!(nearest(&data, 100.0).unwrap(), 4.0);
    }
}
