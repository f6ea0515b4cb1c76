use crate::data_types::{Axis, RegionId};
use thiserror::Error;

/// Failures scoped to a single plot operation. None of them invalidate the session.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlotError {
    #[error("invalid {axis} domain [{min}, {max}] for a logarithmic scale")]
    InvalidDomain { axis: Axis, min: f64, max: f64 },

    #[error("no samples available")]
    EmptyData,

    #[error("region {0} not found")]
    RegionNotFound(RegionId),
}

pub type Result<T> = std::result::Result<T, PlotError>;
