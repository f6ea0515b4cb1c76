//! Typed input events, delivered one at a time in arrival order.

use crate::data_types::RegionId;
use crate::hover::RawPointer;
use glam::DVec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PlotEvent {
    GestureStart,
    /// Absolute pan translation and zoom factor.
    GestureUpdate { translate: DVec2, scale: f64 },
    GestureEnd,
    /// Wheel-style zoom around a plot-local pivot.
    Zoom { pivot: DVec2, factor: f64 },
    /// Drag-style pan by a screen delta.
    Pan { delta: DVec2 },

    /// Plot-local position where a region drag starts.
    BrushStart { local: DVec2 },
    BrushMove { local: DVec2 },
    BrushEnd,
    DeleteRegion(RegionId),

    /// The pointer entered the hit target of rendered sample `index`.
    PointerEnter { index: usize, pointer: RawPointer },
    /// `local` is the plot-local position, `pointer` the page-level one.
    PointerMove { local: DVec2, pointer: RawPointer },
    PointerLeave,
}

impl PlotEvent {
    pub fn is_gesture(&self) -> bool {
        matches!(
            self,
            Self::GestureStart
                | Self::GestureUpdate { .. }
                | Self::GestureEnd
                | Self::Zoom { .. }
                | Self::Pan { .. }
        )
    }

    pub fn is_brush(&self) -> bool {
        matches!(
            self,
            Self::BrushStart { .. } | Self::BrushMove { .. } | Self::BrushEnd
        )
    }
}
