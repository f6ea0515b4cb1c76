//! plot1d crate: interaction core for a single-series 1-D plot

pub mod data_types;
pub mod error;
pub mod events;
pub mod hover;
pub mod readout;
pub mod regions;
pub mod rendering;
pub mod scales;
pub mod session;
pub mod shared;
pub mod snap;
pub mod transform;
pub mod utils;
pub mod view_controller;

pub use data_types::{
    Axis, InteractionMode, PlotLayout, PlotOptions, Region, RegionId, Sample, SampleSet,
    ScaleKind, ViewportState,
};
pub use error::{PlotError, Result};
pub use events::PlotEvent;
pub use hover::{HoverController, RawPointer};
pub use readout::Readout;
pub use regions::RegionManager;
pub use rendering::RenderTarget;
pub use scales::ChartScale;
pub use session::PlotSession;
pub use shared::SharedSession;
pub use snap::SnapIndex;
pub use view_controller::ViewportController;
