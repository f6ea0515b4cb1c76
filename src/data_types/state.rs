use super::data::Sample;
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Pan translation (screen px) and zoom factor applied on top of the base mapping.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewportState {
    pub translate: DVec2,
    pub scale: f64,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            translate: DVec2::ZERO,
            scale: 1.0,
        }
    }
}

impl ViewportState {
    pub fn new(translate: DVec2, scale: f64) -> Self {
        Self { translate, scale }
    }

    /// Base-mapped pixel -> displayed pixel.
    pub fn apply(&self, base: DVec2) -> DVec2 {
        base * self.scale + self.translate
    }

    /// Displayed pixel -> base-mapped pixel.
    pub fn invert(&self, screen: DVec2) -> DVec2 {
        (screen - self.translate) / self.scale
    }

    pub fn is_valid(&self) -> bool {
        self.translate.is_finite() && self.scale.is_finite() && self.scale > 0.0
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HoverState {
    /// Normalized screen position of the pointer.
    pub pointer: Option<DVec2>,
    pub focused_sample: Option<Sample>,
    /// Index of the focused sample in the rendered set.
    pub focused_index: Option<usize>,
}

/// Which interaction surfaces are live. The core does not enforce exclusivity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionMode {
    pub pan_zoom: bool,
    pub region: bool,
}

impl Default for InteractionMode {
    fn default() -> Self {
        Self {
            pan_zoom: true,
            region: false,
        }
    }
}
