use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleKind {
    #[default]
    Linear,
    Log,
}

impl ScaleKind {
    pub fn from_flag(log: bool) -> Self {
        if log {
            Self::Log
        } else {
            Self::Linear
        }
    }
}

/// Full description of one axis mapping: data domain onto pixel range.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AxisConfig {
    pub scale_kind: ScaleKind,
    pub domain_min: f64,
    pub domain_max: f64,
    pub range_min: f64,
    pub range_max: f64,
}

impl AxisConfig {
    pub fn domain(&self) -> (f64, f64) {
        (self.domain_min, self.domain_max)
    }

    pub fn range(&self) -> (f64, f64) {
        (self.range_min, self.range_max)
    }
}

/// Informational outcome of a domain computation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DomainNotice {
    /// Every value was identical; the domain was widened to `[value - 1, value + 1]`.
    Widened { value: f64 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ComputedDomain {
    pub min: f64,
    pub max: f64,
    pub notice: Option<DomainNotice>,
}

impl ComputedDomain {
    pub fn bounds(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}
