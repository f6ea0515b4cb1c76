#![allow(dead_code)]

use glam::DVec2;
use parking_lot::Mutex;
use plot1d::hover::Tooltip;
use plot1d::readout::Readout;
use plot1d::rendering::{
    AxisTicks, LabelPlacement, OutlineMarker, RegionVisual, RenderTarget, SeriesGeometry,
};
use plot1d::view_controller::ViewportTransform;
use plot1d::{PlotLayout, PlotOptions, PlotSession, RegionId, Sample};
use std::sync::Arc;

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Series(SeriesGeometry),
    Axes(AxisTicks, AxisTicks),
    Labels(usize),
    Transform(ViewportTransform),
    Grid(f64),
    Color(String),
    Region(RegionVisual),
    RemoveRegion(RegionId),
    Outline(OutlineMarker),
    HideOutline,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ReadoutCall {
    Zoom(String),
    Region(String, String, String),
    ShowTooltip(Tooltip),
    MoveTooltip(DVec2),
    HideTooltip,
}

#[derive(Clone, Default)]
pub struct RecordingRenderer {
    pub calls: Arc<Mutex<Vec<DrawCall>>>,
}

impl RenderTarget for RecordingRenderer {
    fn draw_series(&mut self, series: &SeriesGeometry) {
        self.calls.lock().push(DrawCall::Series(series.clone()));
    }
    fn draw_axes(&mut self, x: &AxisTicks, y: &AxisTicks) {
        self.calls.lock().push(DrawCall::Axes(x.clone(), y.clone()));
    }
    fn draw_labels(&mut self, labels: &[LabelPlacement]) {
        self.calls.lock().push(DrawCall::Labels(labels.len()));
    }
    fn apply_transform(&mut self, transform: &ViewportTransform) {
        self.calls.lock().push(DrawCall::Transform(*transform));
    }
    fn set_grid_opacity(&mut self, opacity: f64) {
        self.calls.lock().push(DrawCall::Grid(opacity));
    }
    fn set_color(&mut self, color: &str) {
        self.calls.lock().push(DrawCall::Color(color.to_string()));
    }
    fn update_region(&mut self, region: &RegionVisual) {
        self.calls.lock().push(DrawCall::Region(region.clone()));
    }
    fn remove_region(&mut self, id: RegionId) {
        self.calls.lock().push(DrawCall::RemoveRegion(id));
    }
    fn show_outline(&mut self, outline: &OutlineMarker) {
        self.calls.lock().push(DrawCall::Outline(*outline));
    }
    fn hide_outline(&mut self) {
        self.calls.lock().push(DrawCall::HideOutline);
    }
}

#[derive(Clone, Default)]
pub struct RecordingReadout {
    pub calls: Arc<Mutex<Vec<ReadoutCall>>>,
}

impl Readout for RecordingReadout {
    fn zoom(&mut self, text: &str) {
        self.calls.lock().push(ReadoutCall::Zoom(text.to_string()));
    }
    fn region(&mut self, name: &str, left: &str, right: &str) {
        self.calls.lock().push(ReadoutCall::Region(
            name.to_string(),
            left.to_string(),
            right.to_string(),
        ));
    }
    fn show_tooltip(&mut self, tooltip: &Tooltip) {
        self.calls.lock().push(ReadoutCall::ShowTooltip(tooltip.clone()));
    }
    fn move_tooltip(&mut self, position: DVec2) {
        self.calls.lock().push(ReadoutCall::MoveTooltip(position));
    }
    fn hide_tooltip(&mut self) {
        self.calls.lock().push(ReadoutCall::HideTooltip);
    }
}

/// y = x for x in 0..=10.
pub fn diagonal() -> Vec<Sample> {
    (0..=10).map(|i| Sample::new(i as f64, i as f64)).collect()
}

pub struct Harness {
    pub session: PlotSession,
    pub draws: Arc<Mutex<Vec<DrawCall>>>,
    pub readout: Arc<Mutex<Vec<ReadoutCall>>>,
}

pub fn harness(raw: Vec<Sample>, options: PlotOptions) -> Harness {
    let renderer = RecordingRenderer::default();
    let readout = RecordingReadout::default();
    let draws = renderer.calls.clone();
    let readout_calls = readout.calls.clone();
    let session = PlotSession::new(
        raw,
        options,
        PlotLayout::default(),
        Box::new(renderer),
        Box::new(readout),
    )
    .expect("session");
    Harness {
        session,
        draws,
        readout: readout_calls,
    }
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}
