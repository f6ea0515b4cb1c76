// Geometry handed to the drawing layer, and the trait that layer implements.

use crate::data_types::{Axis, LabelAlign, PlotLayout, PlotOptions, Region, RegionId, SampleSet};
use crate::scales::ChartScale;
use crate::transform::PlotTransform;
use crate::utils::{format_integer, format_value};
use crate::view_controller::{ViewportTransform, BASE_STROKE_WIDTH};
use glam::DVec2;

pub const X_TICK_COUNT: usize = 5;
pub const Y_TICK_COUNT: usize = 4;
pub const GRID_VISIBLE_OPACITY: f64 = 0.7;
pub const LINE_OPACITY: f64 = 0.5;
pub const ERROR_BAR_OPACITY: f64 = 0.7;
/// Half width of error bar caps, in base pixels.
pub const ERROR_CAP_HALF_WIDTH: f64 = 1.0;
const X_TICK_LABEL_WIDTH: usize = 4;
const REGION_LABEL_OFFSET: DVec2 = DVec2::new(3.0, 12.0);

/// Drawing collaborator. Receives computed geometry; never asked for state.
pub trait RenderTarget: Send {
    fn draw_series(&mut self, series: &SeriesGeometry);

    fn draw_axes(&mut self, x: &AxisTicks, y: &AxisTicks);

    fn draw_labels(&mut self, labels: &[LabelPlacement]);

    /// Applied to the line, markers, hit targets and error bars.
    fn apply_transform(&mut self, transform: &ViewportTransform);

    fn set_grid_opacity(&mut self, opacity: f64);

    fn set_color(&mut self, color: &str);

    fn update_region(&mut self, region: &RegionVisual);

    fn remove_region(&mut self, id: RegionId);

    fn show_outline(&mut self, outline: &OutlineMarker);

    fn hide_outline(&mut self);
}

/// Renderer that discards everything, for headless sessions.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullRenderer;

impl RenderTarget for NullRenderer {
    fn draw_series(&mut self, _series: &SeriesGeometry) {}
    fn draw_axes(&mut self, _x: &AxisTicks, _y: &AxisTicks) {}
    fn draw_labels(&mut self, _labels: &[LabelPlacement]) {}
    fn apply_transform(&mut self, _transform: &ViewportTransform) {}
    fn set_grid_opacity(&mut self, _opacity: f64) {}
    fn set_color(&mut self, _color: &str) {}
    fn update_region(&mut self, _region: &RegionVisual) {}
    fn remove_region(&mut self, _id: RegionId) {}
    fn show_outline(&mut self, _outline: &OutlineMarker) {}
    fn hide_outline(&mut self) {}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ErrorBar {
    pub x: f64,
    pub y_low: f64,
    pub y_high: f64,
    pub cap_half_width: f64,
}

/// Base-pixel geometry of the data series (before the viewport transform).
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesGeometry {
    pub path: Vec<DVec2>,
    pub error_bars: Vec<ErrorBar>,
    pub color: String,
    pub line_opacity: f64,
    pub stroke_width: f64,
    /// Width before the first transform; afterwards `MarkerSizes` takes over.
    pub error_bar_stroke_width: f64,
}

impl SeriesGeometry {
    pub fn build(samples: &SampleSet, transform: &PlotTransform, color: &str) -> Self {
        let path = samples
            .as_slice()
            .iter()
            .map(|s| transform.data_to_base(DVec2::new(s.x, s.y)))
            .collect();

        let error_bars = if samples.has_error_bars() {
            samples
                .as_slice()
                .iter()
                .filter_map(|s| {
                    let e = s.error?;
                    Some(ErrorBar {
                        x: transform.x_scale.forward(s.x),
                        y_low: transform.y_scale.forward(s.y - e),
                        y_high: transform.y_scale.forward(s.y + e),
                        cap_half_width: ERROR_CAP_HALF_WIDTH,
                    })
                })
                .collect()
        } else {
            Vec::new()
        };

        Self {
            path,
            error_bars,
            color: color.to_string(),
            line_opacity: LINE_OPACITY,
            stroke_width: BASE_STROKE_WIDTH,
            error_bar_stroke_width: BASE_STROKE_WIDTH / 2.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    /// Plot-local pixel position along the axis.
    pub position: f64,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AxisTicks {
    pub axis: Axis,
    pub ticks: Vec<Tick>,
    /// Grid line length, spanning the plot across the axis.
    pub tick_size: f64,
}

impl AxisTicks {
    /// Ticks for the visible part of `scale` (already seen through the viewport).
    pub fn build(axis: Axis, visible: &ChartScale, layout: &PlotLayout) -> Self {
        let (count, tick_size) = match axis {
            Axis::X => (X_TICK_COUNT, layout.height),
            Axis::Y => (Y_TICK_COUNT, layout.width),
        };
        let ticks = visible
            .ticks(count)
            .into_iter()
            .map(|value| Tick {
                value,
                position: visible.forward(value),
                label: match axis {
                    Axis::X => format_integer(value, X_TICK_LABEL_WIDTH),
                    Axis::Y => format_value(value),
                },
            })
            .collect();
        Self {
            axis,
            ticks,
            tick_size,
        }
    }
}

/// On-screen rectangle and label of one region.
#[derive(Clone, Debug, PartialEq)]
pub struct RegionVisual {
    pub id: RegionId,
    pub name: String,
    pub x: f64,
    pub width: f64,
    pub height: f64,
    pub label_position: DVec2,
}

impl RegionVisual {
    /// Regions only follow the horizontal part of the viewport.
    pub fn build(region: &Region, transform: &PlotTransform, layout: &PlotLayout) -> Self {
        let base_left = transform.x_scale.forward(region.left.min(region.right));
        let base_right = transform.x_scale.forward(region.left.max(region.right));
        let tx = transform.viewport.translate.x;
        Self {
            id: region.id,
            name: region.name.clone(),
            x: base_left * transform.viewport.scale + tx,
            width: (base_right - base_left) * transform.viewport.scale,
            height: layout.height,
            label_position: DVec2::new(transform.x_scale.forward(region.left) + tx, 0.0)
                + REGION_LABEL_OFFSET,
        }
    }
}

/// Hover outline drawn around the focused point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OutlineMarker {
    pub center: DVec2,
    pub radius: f64,
    pub stroke_width: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelKind {
    X,
    Y,
    Title,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LabelPlacement {
    pub kind: LabelKind,
    pub text: String,
    /// In the label's own frame (rotated for the y label).
    pub position: DVec2,
    pub anchor: TextAnchor,
    pub rotation_deg: f64,
    pub font_size: Option<f64>,
    /// Extra offset in em units.
    pub em_offset: DVec2,
}

fn anchor_for(align: LabelAlign) -> TextAnchor {
    match align {
        LabelAlign::Left => TextAnchor::Start,
        LabelAlign::Center => TextAnchor::Middle,
        LabelAlign::Right => TextAnchor::End,
    }
}

/// Axis labels and title laid out relative to the plot area origin.
pub fn label_placements(options: &PlotOptions, layout: &PlotLayout) -> Vec<LabelPlacement> {
    let along_width = |align: LabelAlign| match align {
        LabelAlign::Left => 0.0,
        LabelAlign::Center => layout.width / 2.0,
        LabelAlign::Right => layout.width,
    };
    // Rotated -90deg, so "left" starts at the bottom of the plot.
    let along_height = match options.y_label_align {
        LabelAlign::Left => layout.height,
        LabelAlign::Center => layout.height / 2.0,
        LabelAlign::Right => 0.0,
    };

    vec![
        LabelPlacement {
            kind: LabelKind::X,
            text: options.x_label.clone(),
            position: DVec2::new(along_width(options.x_label_align), layout.height + 40.0),
            anchor: anchor_for(options.x_label_align),
            rotation_deg: 0.0,
            font_size: Some(11.0),
            em_offset: DVec2::ZERO,
        },
        LabelPlacement {
            kind: LabelKind::Y,
            text: options.y_label.clone(),
            position: DVec2::new(10.0 - along_height, 4.0 - layout.margin.left),
            anchor: anchor_for(options.y_label_align),
            rotation_deg: -90.0,
            font_size: None,
            em_offset: DVec2::new(-1.0, 1.5),
        },
        LabelPlacement {
            kind: LabelKind::Title,
            text: options.title.clone(),
            position: DVec2::new(along_width(options.title_label_align), -10.0),
            anchor: anchor_for(options.title_label_align),
            rotation_deg: 0.0,
            font_size: Some(16.0),
            em_offset: DVec2::ZERO,
        },
    ]
}
