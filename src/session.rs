//! Plot session
//!
//! `PlotSession` is the single owner of one plot's state: samples, scales,
//! viewport, regions and hover. Collaborators (drawing layer, readout) only
//! receive pushed values. Every mutation goes through `&mut self`, so events
//! are applied strictly one after another.

use crate::data_types::{
    Axis, DomainNotice, HoverState, InteractionMode, PlotLayout, PlotOptions, Region, RegionId,
    Sample, SampleSet, ScaleKind, ViewportState,
};
use crate::error::Result;
use crate::events::PlotEvent;
use crate::hover::{self, HoverController, HoverUpdate, RawPointer};
use crate::readout::{NullReadout, Readout};
use crate::regions::RegionManager;
use crate::rendering::{
    label_placements, AxisTicks, NullRenderer, OutlineMarker, RegionVisual, RenderTarget,
    SeriesGeometry, GRID_VISIBLE_OPACITY,
};
use crate::scales::{compute_domain, ChartScale};
use crate::transform::PlotTransform;
use crate::utils::{format_value, format_zoom};
use crate::view_controller::{ViewportController, ViewportTransform};
use glam::DVec2;
use tracing::{debug, info, warn};

/// Region drag in progress: the region and the data x where it started.
#[derive(Clone, Copy, Debug, PartialEq)]
struct ActiveBrush {
    id: RegionId,
    anchor: f64,
}

/// Samples and scales derived from raw input and options.
struct ScaleSet {
    samples: SampleSet,
    x_scale: ChartScale,
    y_scale: ChartScale,
    y_notice: Option<DomainNotice>,
}

impl ScaleSet {
    fn build(raw: &[Sample], options: &PlotOptions, layout: &PlotLayout) -> Result<Self> {
        let samples = SampleSet::new(raw.to_vec(), options.log_scale_y);
        let x_kind = ScaleKind::from_flag(options.log_scale_x);
        let y_kind = ScaleKind::from_flag(options.log_scale_y);

        let x_domain = compute_domain(&samples, Axis::X, x_kind)?;
        let y_domain = compute_domain(&samples, Axis::Y, y_kind)?;

        let x_scale = ChartScale::new(Axis::X, x_kind, x_domain.bounds(), (0.0, layout.width))?;
        let y_scale = ChartScale::new(Axis::Y, y_kind, y_domain.bounds(), (layout.height, 0.0))?;

        Ok(Self {
            samples,
            x_scale,
            y_scale,
            y_notice: y_domain.notice,
        })
    }
}

pub struct PlotSession {
    options: PlotOptions,
    layout: PlotLayout,
    raw: Vec<Sample>,
    samples: SampleSet,
    x_scale: ChartScale,
    y_scale: ChartScale,
    y_notice: Option<DomainNotice>,

    viewport: ViewportController,
    regions: RegionManager,
    hover: HoverController,
    mode: InteractionMode,
    active_brush: Option<ActiveBrush>,

    renderer: Box<dyn RenderTarget>,
    readout: Box<dyn Readout>,
}

impl PlotSession {
    pub fn new(
        raw: Vec<Sample>,
        options: PlotOptions,
        layout: PlotLayout,
        renderer: Box<dyn RenderTarget>,
        readout: Box<dyn Readout>,
    ) -> Result<Self> {
        let scales = ScaleSet::build(&raw, &options, &layout)?;
        info!(
            samples = scales.samples.len(),
            log_x = options.log_scale_x,
            log_y = options.log_scale_y,
            "plot session created"
        );

        let mut session = Self {
            options,
            layout,
            raw,
            samples: scales.samples,
            x_scale: scales.x_scale,
            y_scale: scales.y_scale,
            y_notice: scales.y_notice,
            viewport: ViewportController::default(),
            regions: RegionManager::new(),
            hover: HoverController::new(),
            mode: InteractionMode::default(),
            active_brush: None,
            renderer,
            readout,
        };
        session.draw_all();
        session.create_predetermined_regions()?;
        Ok(session)
    }

    /// Session with no drawing layer or readout attached.
    pub fn headless(raw: Vec<Sample>, options: PlotOptions) -> Result<Self> {
        Self::new(
            raw,
            options,
            PlotLayout::default(),
            Box::new(NullRenderer),
            Box::new(NullReadout),
        )
    }

    /// Builds a session from JSON sample rows and JSON options.
    pub fn from_json(
        samples_json: &str,
        options_json: &str,
        renderer: Box<dyn RenderTarget>,
        readout: Box<dyn Readout>,
    ) -> eyre::Result<Self> {
        use eyre::WrapErr;
        let options = PlotOptions::from_json(options_json)?;
        let rows: Vec<Vec<f64>> =
            serde_json::from_str(samples_json).wrap_err("failed to parse sample rows")?;
        let raw = rows.iter().filter_map(|r| Sample::from_row(r)).collect();
        Self::new(raw, options, PlotLayout::default(), renderer, readout)
            .wrap_err("failed to build plot session")
    }

    pub fn options(&self) -> &PlotOptions {
        &self.options
    }

    pub fn layout(&self) -> &PlotLayout {
        &self.layout
    }

    /// Samples as rendered (after log-scale filtering).
    pub fn samples(&self) -> &SampleSet {
        &self.samples
    }

    pub fn x_scale(&self) -> &ChartScale {
        &self.x_scale
    }

    pub fn y_scale(&self) -> &ChartScale {
        &self.y_scale
    }

    /// Set when the y-domain had to be widened for a constant series.
    pub fn y_domain_notice(&self) -> Option<DomainNotice> {
        self.y_notice
    }

    pub fn viewport(&self) -> ViewportState {
        self.viewport.state()
    }

    pub fn viewport_transform(&self) -> ViewportTransform {
        self.viewport.transform()
    }

    pub fn transform(&self) -> PlotTransform {
        PlotTransform::new(self.x_scale, self.y_scale, self.viewport.state())
    }

    pub fn regions(&self) -> &[Region] {
        self.regions.list_regions()
    }

    pub fn region(&self, id: RegionId) -> Option<&Region> {
        self.regions.get(id)
    }

    pub fn hover_state(&self) -> &HoverState {
        self.hover.state()
    }

    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    /// Data coordinates under a plot-local screen position.
    pub fn data_at(&self, local: DVec2) -> DVec2 {
        self.transform().screen_to_data(local)
    }

    pub fn dispatch(&mut self, event: PlotEvent) -> Result<()> {
        if event.is_gesture() && !self.mode.pan_zoom {
            debug!(?event, "pan/zoom mode off, gesture ignored");
            return Ok(());
        }
        if event.is_brush() && !self.region_mode_active() {
            debug!(?event, "region mode off, brush ignored");
            return Ok(());
        }

        match event {
            PlotEvent::GestureStart => self.viewport.on_gesture_start(),
            PlotEvent::GestureUpdate { translate, scale } => {
                if let Some(t) = self.viewport.on_gesture_update(translate, scale) {
                    self.push_transform(&t);
                }
            }
            PlotEvent::GestureEnd => self.viewport.on_gesture_end(),
            PlotEvent::Zoom { pivot, factor } => {
                if let Some(t) = self.viewport.zoom_at(pivot, factor) {
                    self.push_transform(&t);
                }
            }
            PlotEvent::Pan { delta } => {
                if let Some(t) = self.viewport.pan_by(delta) {
                    self.push_transform(&t);
                }
            }
            PlotEvent::BrushStart { local } => {
                self.finish_brush()?;
                if let Some(id) = self.begin_region(local) {
                    let anchor = self.regions.get(id).map(|r| r.left).unwrap_or_default();
                    self.active_brush = Some(ActiveBrush { id, anchor });
                }
            }
            PlotEvent::BrushMove { local } => {
                if let Some(brush) = self.active_brush {
                    let clamped = local.x.clamp(0.0, self.layout.width);
                    let x = self.transform().x_screen_to_data(clamped);
                    self.update_region(brush.id, brush.anchor, x)?;
                }
            }
            PlotEvent::BrushEnd => self.finish_brush()?,
            PlotEvent::DeleteRegion(id) => {
                self.delete_region(id)?;
            }
            PlotEvent::PointerEnter { index, pointer } => self.pointer_enter(index, pointer),
            PlotEvent::PointerMove { local, pointer } => self.pointer_move(local, pointer),
            PlotEvent::PointerLeave => {
                let update = self.hover.on_pointer_leave();
                self.push_hover(update);
            }
        }
        Ok(())
    }

    fn region_mode_active(&self) -> bool {
        self.mode.region && self.options.allow_region_mode
    }

    // --- regions ---

    /// Starts a region at a plot-local position. Outside the clip area nothing happens.
    pub fn begin_region(&mut self, local: DVec2) -> Option<RegionId> {
        if !self.layout.clip_contains(local.x, local.y) {
            debug!(?local, "region start outside plot area");
            return None;
        }
        let x = self.transform().x_screen_to_data(local.x);
        let id = self.regions.begin_region(x);
        self.publish_region(id);
        Some(id)
    }

    pub fn update_region(&mut self, id: RegionId, left: f64, right: f64) -> Result<()> {
        self.regions.update_region(id, left, right)?;
        self.publish_region(id);
        Ok(())
    }

    /// Snaps the region being dragged, if any.
    fn finish_brush(&mut self) -> Result<()> {
        match self.active_brush.take() {
            Some(brush) => self.end_region(brush.id),
            None => Ok(()),
        }
    }

    pub fn end_region(&mut self, id: RegionId) -> Result<()> {
        self.regions.end_region(id, self.samples.as_slice())?;
        self.publish_region(id);
        Ok(())
    }

    pub fn delete_region(&mut self, id: RegionId) -> Result<Region> {
        let removed = self.regions.delete_region(id)?;
        if self.active_brush.is_some_and(|b| b.id == id) {
            self.active_brush = None;
        }
        self.renderer.remove_region(id);
        Ok(removed)
    }

    pub fn clear_regions(&mut self) {
        self.active_brush = None;
        for region in self.regions.clear() {
            self.renderer.remove_region(region.id);
        }
    }

    fn publish_region(&mut self, id: RegionId) {
        let transform = self.transform();
        if let Some(region) = self.regions.get(id) {
            let visual = RegionVisual::build(region, &transform, &self.layout);
            self.renderer.update_region(&visual);
            self.readout.region(
                &region.name,
                &format_value(region.left),
                &format_value(region.right),
            );
        }
    }

    fn create_predetermined_regions(&mut self) -> Result<()> {
        if !self.options.allow_region_mode {
            return Ok(());
        }
        let bounds = self.options.predetermined_region.clone();
        for b in bounds {
            let id = self.regions.begin_region(b.left);
            self.regions.update_region(id, b.left, b.right)?;
            self.end_region(id)?;
        }
        Ok(())
    }

    // --- hover ---

    fn pointer_enter(&mut self, index: usize, pointer: RawPointer) {
        let Some(sample) = self.samples.get(index).copied() else {
            debug!(index, "pointer entered unknown sample");
            return;
        };
        let transform = self.transform();
        let update = self.hover.on_pointer_enter(index, sample, pointer, &transform);
        self.push_hover(update);
    }

    fn pointer_move(&mut self, local: DVec2, pointer: RawPointer) {
        let transform = self.transform();
        let markers = self.viewport.marker_sizes();
        let radius = markers.focus_radius * transform.viewport.scale;
        let hit = hover::hit_test(self.samples.as_slice(), &transform, local, radius);

        match (hit, self.hover.state().focused_index) {
            (Some(i), Some(current)) if i == current => {
                if let Some(update) = self.hover.on_pointer_move(pointer) {
                    self.push_hover(update);
                }
            }
            (Some(i), _) => self.pointer_enter(i, pointer),
            (None, Some(_)) => {
                let update = self.hover.on_pointer_leave();
                self.push_hover(update);
                self.hover.on_pointer_move(pointer);
            }
            (None, None) => {
                self.hover.on_pointer_move(pointer);
            }
        }
    }

    fn outline_at(&self, center: DVec2) -> OutlineMarker {
        let t = self.viewport.transform();
        OutlineMarker {
            center,
            radius: t.markers.focus_radius * t.scale(),
            stroke_width: t.markers.outline_stroke_width * t.scale(),
        }
    }

    fn push_hover(&mut self, update: HoverUpdate) {
        match update {
            HoverUpdate::Show {
                outline_anchor,
                tooltip,
                ..
            } => {
                let outline = self.outline_at(outline_anchor);
                self.renderer.show_outline(&outline);
                self.readout.show_tooltip(&tooltip);
            }
            HoverUpdate::Move { tooltip_position } => {
                self.readout.move_tooltip(tooltip_position);
            }
            HoverUpdate::Hide => {
                self.renderer.hide_outline();
                self.readout.hide_tooltip();
            }
        }
    }

    // --- viewport ---

    pub fn on_gesture_start(&mut self) {
        self.viewport.on_gesture_start();
    }

    pub fn on_gesture_update(&mut self, translate: DVec2, scale: f64) {
        if let Some(t) = self.viewport.on_gesture_update(translate, scale) {
            self.push_transform(&t);
        }
    }

    pub fn on_gesture_end(&mut self) {
        self.viewport.on_gesture_end();
    }

    /// Back to the unzoomed view.
    pub fn reset_view(&mut self) {
        let t = self.viewport.reset();
        self.push_transform(&t);
    }

    /// Fans a new transform out to everything that depends on it.
    fn push_transform(&mut self, t: &ViewportTransform) {
        self.renderer.apply_transform(t);
        self.draw_axes();
        self.apply_grid();

        let ids: Vec<RegionId> = self.regions.list_regions().iter().map(|r| r.id).collect();
        let transform = self.transform();
        for id in ids {
            if let Some(region) = self.regions.get(id) {
                let visual = RegionVisual::build(region, &transform, &self.layout);
                self.renderer.update_region(&visual);
            }
        }

        if let Some(sample) = self.hover.state().focused_sample {
            let anchor = transform.data_to_screen(DVec2::new(sample.x, sample.y));
            let outline = self.outline_at(anchor);
            self.renderer.show_outline(&outline);
        }

        self.readout.zoom(&format_zoom(t.scale()));
    }

    // --- options ---

    pub fn toggle_grid(&mut self, visible: bool) {
        self.options.grid = visible;
        self.apply_grid();
    }

    fn apply_grid(&mut self) {
        let opacity = if self.options.grid {
            GRID_VISIBLE_OPACITY
        } else {
            0.0
        };
        self.renderer.set_grid_opacity(opacity);
    }

    pub fn change_color(&mut self, color: impl Into<String>) {
        self.options.color = color.into();
        self.renderer.set_color(&self.options.color);
    }

    pub fn set_pan_zoom_mode(&mut self, enabled: bool) {
        self.mode.pan_zoom = enabled;
    }

    pub fn set_region_mode(&mut self, enabled: bool) {
        self.mode.region = enabled;
        if !enabled {
            if let Err(e) = self.finish_brush() {
                warn!(error = %e, "could not snap pending region");
            }
        }
    }

    /// Switches one axis between linear and log. If the new scales cannot be
    /// built, the previous ones stay in place and the error is returned.
    pub fn set_log_scale(&mut self, axis: Axis, enabled: bool) -> Result<()> {
        let mut options = self.options.clone();
        match axis {
            Axis::X => options.log_scale_x = enabled,
            Axis::Y => options.log_scale_y = enabled,
        }
        let scales = ScaleSet::build(&self.raw, &options, &self.layout).inspect_err(|e| {
            warn!(error = %e, %axis, enabled, "keeping previous scales");
        })?;
        self.options = options;
        self.install(scales);

        // Hover and region bounds refer to the previous sample set.
        self.clear_hover();
        self.finish_brush()?;
        let ids: Vec<RegionId> = self.regions.list_regions().iter().map(|r| r.id).collect();
        for id in ids {
            self.regions.end_region(id, self.samples.as_slice())?;
        }

        self.draw_all();
        Ok(())
    }

    /// Recomputes scales from the current options, resets the view and the
    /// regions, then redraws everything.
    pub fn redraw(&mut self) -> Result<()> {
        let scales = ScaleSet::build(&self.raw, &self.options, &self.layout)?;
        info!("plot redraw");
        self.install(scales);
        self.clear_regions();
        self.clear_hover();
        self.viewport.reset();
        self.draw_all();
        self.create_predetermined_regions()
    }

    fn clear_hover(&mut self) {
        let update = self.hover.on_pointer_leave();
        self.push_hover(update);
        self.hover.reset();
    }

    fn install(&mut self, scales: ScaleSet) {
        self.samples = scales.samples;
        self.x_scale = scales.x_scale;
        self.y_scale = scales.y_scale;
        self.y_notice = scales.y_notice;
    }

    fn draw_axes(&mut self) {
        let transform = self.transform();
        let x = AxisTicks::build(Axis::X, &transform.visible_x_scale(), &self.layout);
        let y = AxisTicks::build(Axis::Y, &transform.visible_y_scale(), &self.layout);
        self.renderer.draw_axes(&x, &y);
    }

    fn draw_all(&mut self) {
        self.renderer.apply_transform(&self.viewport.transform());
        let transform = self.transform();
        let series = SeriesGeometry::build(&self.samples, &transform, &self.options.color);
        self.renderer.draw_series(&series);
        self.renderer
            .draw_labels(&label_placements(&self.options, &self.layout));
        self.draw_axes();
        self.apply_grid();

        let ids: Vec<RegionId> = self.regions.list_regions().iter().map(|r| r.id).collect();
        for id in ids {
            if let Some(region) = self.regions.get(id) {
                let visual = RegionVisual::build(region, &transform, &self.layout);
                self.renderer.update_region(&visual);
            }
        }
    }
}
