use crate::data_types::ViewportState;
use glam::DVec2;
use tracing::{debug, warn};

/// Stroke width of the data line before any zoom.
pub const BASE_STROKE_WIDTH: f64 = 1.5;

const POINT_RADIUS_RATIO: f64 = 2.0 / 3.0;
const FOCUS_RADIUS_RATIO: f64 = 5.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    Dragging,
}

/// Sizes in local (pre-transform) units, so they look constant on screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkerSizes {
    pub stroke_width: f64,
    pub point_radius: f64,
    pub focus_radius: f64,
    pub outline_stroke_width: f64,
    pub error_bar_stroke_width: f64,
}

impl MarkerSizes {
    pub fn for_scale(base_stroke_width: f64, scale: f64) -> Self {
        let stroke_width = base_stroke_width / scale;
        let point_radius = stroke_width * POINT_RADIUS_RATIO;
        Self {
            stroke_width,
            point_radius,
            focus_radius: point_radius * FOCUS_RADIUS_RATIO,
            outline_stroke_width: 1.0 / scale,
            error_bar_stroke_width: stroke_width,
        }
    }
}

/// Composed pan/zoom transform plus the marker sizes derived from it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportTransform {
    pub viewport: ViewportState,
    pub markers: MarkerSizes,
}

impl ViewportTransform {
    pub fn translate(&self) -> DVec2 {
        self.viewport.translate
    }

    pub fn scale(&self) -> f64 {
        self.viewport.scale
    }
}

/// Owns the viewport state and turns gestures into transforms.
///
/// Zoom is not clamped; wrap the controller to impose limits.
#[derive(Clone, Debug)]
pub struct ViewportController {
    state: ViewportState,
    gesture: GestureState,
    base_stroke_width: f64,
}

impl Default for ViewportController {
    fn default() -> Self {
        Self::new(BASE_STROKE_WIDTH)
    }
}

impl ViewportController {
    pub fn new(base_stroke_width: f64) -> Self {
        Self {
            state: ViewportState::default(),
            gesture: GestureState::Idle,
            base_stroke_width,
        }
    }

    pub fn state(&self) -> ViewportState {
        self.state
    }

    pub fn gesture_state(&self) -> GestureState {
        self.gesture
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture == GestureState::Dragging
    }

    pub fn marker_sizes(&self) -> MarkerSizes {
        MarkerSizes::for_scale(self.base_stroke_width, self.state.scale)
    }

    pub fn transform(&self) -> ViewportTransform {
        ViewportTransform {
            viewport: self.state,
            markers: self.marker_sizes(),
        }
    }

    pub fn on_gesture_start(&mut self) {
        debug!("viewport gesture start");
        self.gesture = GestureState::Dragging;
    }

    /// Commits an absolute translate/scale pair.
    ///
    /// Non-finite or non-positive input is dropped and the last committed
    /// transform stays in place. An update while idle is treated as a
    /// one-shot gesture (wheel zoom).
    pub fn on_gesture_update(&mut self, translate: DVec2, scale: f64) -> Option<ViewportTransform> {
        let next = ViewportState::new(translate, scale);
        if !next.is_valid() {
            warn!(?translate, scale, "ignoring invalid viewport update");
            return None;
        }
        if self.gesture == GestureState::Idle {
            debug!("viewport update outside of a drag");
        }
        self.state = next;
        Some(self.transform())
    }

    /// Stops updates. There is no revert: the last transform persists.
    pub fn on_gesture_end(&mut self) {
        debug!(scale = self.state.scale, "viewport gesture end");
        self.gesture = GestureState::Idle;
    }

    /// Shifts the view by a screen-space delta.
    pub fn pan_by(&mut self, delta: DVec2) -> Option<ViewportTransform> {
        self.on_gesture_update(self.state.translate + delta, self.state.scale)
    }

    /// Multiplies the zoom by `factor`, keeping the screen point `pivot` fixed.
    pub fn zoom_at(&mut self, pivot: DVec2, factor: f64) -> Option<ViewportTransform> {
        let scale = self.state.scale * factor;
        let translate = pivot - (pivot - self.state.translate) * factor;
        self.on_gesture_update(translate, scale)
    }

    pub fn reset(&mut self) -> ViewportTransform {
        self.state = ViewportState::default();
        self.gesture = GestureState::Idle;
        self.transform()
    }

    /// Zoom factor for a wheel delta: positive deltas zoom out.
    pub fn compute_zoom_factor(delta: f64, sensitivity: f64) -> f64 {
        let factor = 1.0 + delta.abs() / sensitivity;
        if delta > 0.0 {
            1.0 / factor
        } else {
            factor
        }
    }
}
