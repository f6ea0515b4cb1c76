//! Transform helper for coordinate projection

use crate::data_types::ViewportState;
use crate::scales::ChartScale;
use glam::DVec2;

/// Base scales plus the viewport applied on top of them.
///
/// "Base" pixels are what the scales produce; "screen" pixels are plot-local
/// coordinates after pan/zoom.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotTransform {
    pub x_scale: ChartScale,
    pub y_scale: ChartScale,
    pub viewport: ViewportState,
}

impl PlotTransform {
    pub fn new(x_scale: ChartScale, y_scale: ChartScale, viewport: ViewportState) -> Self {
        Self {
            x_scale,
            y_scale,
            viewport,
        }
    }

    pub fn data_to_base(&self, point: DVec2) -> DVec2 {
        DVec2::new(self.x_scale.forward(point.x), self.y_scale.forward(point.y))
    }

    pub fn data_to_screen(&self, point: DVec2) -> DVec2 {
        self.viewport.apply(self.data_to_base(point))
    }

    pub fn screen_to_data(&self, point: DVec2) -> DVec2 {
        let base = self.viewport.invert(point);
        DVec2::new(self.x_scale.inverse(base.x), self.y_scale.inverse(base.y))
    }

    pub fn x_data_to_screen(&self, x: f64) -> f64 {
        self.x_scale.forward(x) * self.viewport.scale + self.viewport.translate.x
    }

    pub fn x_screen_to_data(&self, x: f64) -> f64 {
        self.x_scale
            .inverse((x - self.viewport.translate.x) / self.viewport.scale)
    }

    pub fn y_screen_to_data(&self, y: f64) -> f64 {
        self.y_scale
            .inverse((y - self.viewport.translate.y) / self.viewport.scale)
    }

    /// The x scale as currently seen through the viewport, for axis ticks.
    pub fn visible_x_scale(&self) -> ChartScale {
        let (r0, r1) = self.x_scale.range();
        self.x_scale
            .with_domain(self.x_screen_to_data(r0), self.x_screen_to_data(r1))
    }

    pub fn visible_y_scale(&self) -> ChartScale {
        let (r0, r1) = self.y_scale.range();
        self.y_scale
            .with_domain(self.y_screen_to_data(r0), self.y_screen_to_data(r1))
    }
}
