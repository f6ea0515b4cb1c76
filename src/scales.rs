//! Domain <-> range mapping for one axis, linear or logarithmic.

use crate::data_types::{Axis, AxisConfig, ComputedDomain, DomainNotice, SampleSet, ScaleKind};
use crate::error::{PlotError, Result};
use tracing::warn;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartScale {
    kind: ScaleKind,
    domain: (f64, f64),
    range: (f64, f64),
}

impl ChartScale {
    pub fn new_linear(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            kind: ScaleKind::Linear,
            domain,
            range,
        }
    }

    /// Fails when either log bound is non-positive.
    pub fn new_log(axis: Axis, domain: (f64, f64), range: (f64, f64)) -> Result<Self> {
        if !(domain.0 > 0.0 && domain.1 > 0.0) {
            return Err(PlotError::InvalidDomain {
                axis,
                min: domain.0,
                max: domain.1,
            });
        }
        Ok(Self {
            kind: ScaleKind::Log,
            domain,
            range,
        })
    }

    pub fn new(axis: Axis, kind: ScaleKind, domain: (f64, f64), range: (f64, f64)) -> Result<Self> {
        match kind {
            ScaleKind::Linear => Ok(Self::new_linear(domain, range)),
            ScaleKind::Log => Self::new_log(axis, domain, range),
        }
    }

    pub fn from_config(axis: Axis, config: &AxisConfig) -> Result<Self> {
        Self::new(axis, config.scale_kind, config.domain(), config.range())
    }

    pub fn kind(&self) -> ScaleKind {
        self.kind
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    pub fn config(&self) -> AxisConfig {
        AxisConfig {
            scale_kind: self.kind,
            domain_min: self.domain.0,
            domain_max: self.domain.1,
            range_min: self.range.0,
            range_max: self.range.1,
        }
    }

    /// Same mapping kind and range over a different domain.
    pub fn with_domain(&self, min: f64, max: f64) -> Self {
        Self {
            domain: (min, max),
            ..*self
        }
    }

    fn project(&self, v: f64) -> f64 {
        match self.kind {
            ScaleKind::Linear => v,
            ScaleKind::Log => v.ln(),
        }
    }

    fn unproject(&self, v: f64) -> f64 {
        match self.kind {
            ScaleKind::Linear => v,
            ScaleKind::Log => v.exp(),
        }
    }

    /// Domain value -> range value.
    ///
    /// A zero-span domain maps everything onto the start of the range.
    pub fn forward(&self, value: f64) -> f64 {
        let d0 = self.project(self.domain.0);
        let d1 = self.project(self.domain.1);
        let span = d1 - d0;
        let t = if span == 0.0 {
            0.0
        } else {
            (self.project(value) - d0) / span
        };
        self.range.0 + t * (self.range.1 - self.range.0)
    }

    /// Range value -> domain value.
    pub fn inverse(&self, pixel: f64) -> f64 {
        let r_span = self.range.1 - self.range.0;
        let t = if r_span == 0.0 {
            0.0
        } else {
            (pixel - self.range.0) / r_span
        };
        let d0 = self.project(self.domain.0);
        let d1 = self.project(self.domain.1);
        self.unproject(d0 + t * (d1 - d0))
    }

    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (lo, hi) = ordered(self.domain);
        match self.kind {
            ScaleKind::Linear => linear_ticks(lo, hi, count),
            ScaleKind::Log => log_ticks(lo, hi, count),
        }
    }
}

/// Extent of one coordinate over the samples.
///
/// The y-domain of a constant series is widened to `[v - 1, v + 1]`; the
/// x-domain is never widened. Log scales reject non-positive bounds.
pub fn compute_domain(samples: &SampleSet, axis: Axis, kind: ScaleKind) -> Result<ComputedDomain> {
    let extent = match axis {
        Axis::X => samples.x_extent(),
        Axis::Y => samples.y_extent(),
    };
    let (mut min, mut max) = extent.ok_or(PlotError::EmptyData)?;

    let mut notice = None;
    if axis == Axis::Y && min == max {
        warn!(value = min, "constant y series, widening domain by 1 on each side");
        notice = Some(DomainNotice::Widened { value: min });
        min -= 1.0;
        max += 1.0;
    }

    if kind == ScaleKind::Log && !(min > 0.0 && max > 0.0) {
        return Err(PlotError::InvalidDomain { axis, min, max });
    }

    Ok(ComputedDomain { min, max, notice })
}

fn ordered((a, b): (f64, f64)) -> (f64, f64) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

const TICK_EPSILON: f64 = 1e-9;

/// Steps of 1, 2 or 5 times a power of ten, giving roughly `count` ticks.
fn tick_step(lo: f64, hi: f64, count: usize) -> f64 {
    let span = hi - lo;
    let m = count.max(1) as f64;
    let mut step = 10f64.powf((span / m).log10().floor());
    let err = m / span * step;
    if err <= 0.15 {
        step *= 10.0;
    } else if err <= 0.35 {
        step *= 5.0;
    } else if err <= 0.75 {
        step *= 2.0;
    }
    step
}

fn linear_ticks(lo: f64, hi: f64, count: usize) -> Vec<f64> {
    if !lo.is_finite() || !hi.is_finite() {
        return Vec::new();
    }
    if lo == hi {
        return vec![lo];
    }
    let step = tick_step(lo, hi, count);
    let first = (lo / step - TICK_EPSILON).ceil() as i64;
    let last = (hi / step + TICK_EPSILON).floor() as i64;

    // Dividing by the inverse step keeps decimal ticks exact (0.3, not 0.30000000000000004).
    let inverse = (1.0 / step).round();
    (first..=last)
        .map(|k| {
            if step < 1.0 && inverse > 0.0 {
                k as f64 / inverse
            } else {
                k as f64 * step
            }
        })
        .collect()
}

fn decade_value(mantissa: f64, exponent: i32) -> f64 {
    if exponent < 0 {
        mantissa / 10f64.powi(-exponent)
    } else {
        mantissa * 10f64.powi(exponent)
    }
}

fn log_ticks(lo: f64, hi: f64, count: usize) -> Vec<f64> {
    if !(lo > 0.0) || !hi.is_finite() {
        return Vec::new();
    }
    let e0 = lo.log10().floor() as i32;
    let e1 = hi.log10().ceil() as i32;
    let dense = (e1 - e0) as usize <= count.max(1);

    let mut ticks = Vec::new();
    for e in e0..=e1 {
        let mantissas: &[f64] = if dense {
            &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]
        } else {
            &[1.0]
        };
        for &m in mantissas {
            let v = decade_value(m, e);
            if v >= lo && v <= hi {
                ticks.push(v);
            }
        }
    }
    ticks
}
