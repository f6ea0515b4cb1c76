//! Hover tracking: which rendered point is under the pointer, and what the
//! tooltip and outline marker should show.

use crate::data_types::{HoverState, Sample};
use crate::transform::PlotTransform;
use crate::utils::format_tooltip;
use glam::DVec2;
use tracing::debug;

/// Tooltip offset from the pointer, in page pixels.
pub const TOOLTIP_OFFSET: DVec2 = DVec2::new(10.0, -10.0);

/// Pointer position as browsers report it: either page coordinates, or
/// client coordinates plus the document scroll offset.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct RawPointer {
    pub page: Option<DVec2>,
    pub client: DVec2,
    pub scroll: DVec2,
}

impl RawPointer {
    pub fn from_page(page: DVec2) -> Self {
        Self {
            page: Some(page),
            ..Default::default()
        }
    }

    pub fn from_client(client: DVec2, scroll: DVec2) -> Self {
        Self {
            page: None,
            client,
            scroll,
        }
    }

    /// Single screen coordinate used everywhere past the event boundary.
    pub fn normalize(&self) -> DVec2 {
        self.page.unwrap_or(self.client + self.scroll)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum HoverPhase {
    #[default]
    Idle,
    Hovering,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
    pub text: String,
    pub position: DVec2,
}

/// What the tooltip/outline collaborators should do after a pointer event.
#[derive(Clone, Debug, PartialEq)]
pub enum HoverUpdate {
    Show {
        index: usize,
        sample: Sample,
        /// Plot-local screen position of the outline marker, after pan/zoom.
        outline_anchor: DVec2,
        tooltip: Tooltip,
    },
    Move {
        tooltip_position: DVec2,
    },
    Hide,
}

#[derive(Clone, Debug, Default)]
pub struct HoverController {
    phase: HoverPhase,
    state: HoverState,
}

impl HoverController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> HoverPhase {
        self.phase
    }

    pub fn state(&self) -> &HoverState {
        &self.state
    }

    pub fn on_pointer_enter(
        &mut self,
        index: usize,
        sample: Sample,
        pointer: RawPointer,
        transform: &PlotTransform,
    ) -> HoverUpdate {
        let position = pointer.normalize();
        self.phase = HoverPhase::Hovering;
        self.state = HoverState {
            pointer: Some(position),
            focused_sample: Some(sample),
            focused_index: Some(index),
        };
        debug!(index, "hover enter");
        HoverUpdate::Show {
            index,
            sample,
            outline_anchor: transform.data_to_screen(DVec2::new(sample.x, sample.y)),
            tooltip: Tooltip {
                text: format_tooltip(sample.x, sample.y),
                position: position + TOOLTIP_OFFSET,
            },
        }
    }

    /// Tracks the pointer; only produces an update while hovering.
    pub fn on_pointer_move(&mut self, pointer: RawPointer) -> Option<HoverUpdate> {
        let position = pointer.normalize();
        self.state.pointer = Some(position);
        match self.phase {
            HoverPhase::Hovering => Some(HoverUpdate::Move {
                tooltip_position: position + TOOLTIP_OFFSET,
            }),
            HoverPhase::Idle => None,
        }
    }

    pub fn on_pointer_leave(&mut self) -> HoverUpdate {
        if self.phase == HoverPhase::Hovering {
            debug!("hover leave");
        }
        self.phase = HoverPhase::Idle;
        self.state.focused_sample = None;
        self.state.focused_index = None;
        HoverUpdate::Hide
    }

    pub fn reset(&mut self) {
        self.phase = HoverPhase::Idle;
        self.state = HoverState::default();
    }
}

/// Index of the rendered sample whose hit target contains `local`, if any.
///
/// `radius` is in plot-local screen pixels. Assumes an increasing x range.
pub fn hit_test(
    samples: &[Sample],
    transform: &PlotTransform,
    local: DVec2,
    radius: f64,
) -> Option<usize> {
    let lo = transform.x_screen_to_data(local.x - radius);
    let hi = transform.x_screen_to_data(local.x + radius);
    let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
    let start = samples.partition_point(|s| s.x < lo);
    let end = samples.partition_point(|s| s.x <= hi);

    samples[start..end.max(start)]
        .iter()
        .enumerate()
        .map(|(offset, s)| {
            let screen = transform.data_to_screen(DVec2::new(s.x, s.y));
            (start + offset, screen.distance(local))
        })
        .filter(|&(_, d)| d <= radius)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_types::ViewportState;
    use crate::scales::ChartScale;

    fn transform(viewport: ViewportState) -> PlotTransform {
        PlotTransform::new(
            ChartScale::new_linear((0.0, 10.0), (0.0, 100.0)),
            ChartScale::new_linear((0.0, 10.0), (100.0, 0.0)),
            viewport,
        )
    }

    #[test]
    fn pointer_normalization() {
        let page = RawPointer::from_page(DVec2::new(120.0, 80.0));
        assert_eq!(page.normalize(), DVec2::new(120.0, 80.0));
        let client = RawPointer::from_client(DVec2::new(100.0, 50.0), DVec2::new(20.0, 30.0));
        assert_eq!(client.normalize(), DVec2::new(120.0, 80.0));
    }

    #[test]
    fn enter_then_leave() {
        let t = transform(ViewportState::default());
        let mut hc = HoverController::new();
        let update = hc.on_pointer_enter(
            1,
            Sample::new(5.0, 2.0),
            RawPointer::from_page(DVec2::new(300.0, 200.0)),
            &t,
        );
        match update {
            HoverUpdate::Show {
                outline_anchor,
                tooltip,
                ..
            } => {
                assert_eq!(outline_anchor, DVec2::new(50.0, 80.0));
                assert_eq!(tooltip.text, "  5.00,   2.00");
                assert_eq!(tooltip.position, DVec2::new(310.0, 190.0));
            }
            other => panic!("unexpected update {other:?}"),
        }
        assert_eq!(hc.phase(), HoverPhase::Hovering);
        assert_eq!(hc.on_pointer_leave(), HoverUpdate::Hide);
        assert_eq!(hc.phase(), HoverPhase::Idle);
        assert!(hc.state().focused_sample.is_none());
    }

    #[test]
    fn outline_tracks_viewport() {
        let t = transform(ViewportState::new(DVec2::new(10.0, -5.0), 2.0));
        let mut hc = HoverController::new();
        let update = hc.on_pointer_enter(0, Sample::new(5.0, 2.0), RawPointer::default(), &t);
        let HoverUpdate::Show { outline_anchor, .. } = update else {
            panic!("expected show");
        };
        assert_eq!(outline_anchor, DVec2::new(110.0, 155.0));
    }

    #[test]
    fn move_only_reports_while_hovering() {
        let mut hc = HoverController::new();
        assert!(hc.on_pointer_move(RawPointer::default()).is_none());
        assert!(hc.state().pointer.is_some());
    }

    #[test]
    fn hit_test_finds_closest_within_radius() {
        let t = transform(ViewportState::default());
        let samples = vec![Sample::new(1.0, 1.0), Sample::new(2.0, 1.0), Sample::new(3.0, 9.0)];
        assert_eq!(hit_test(&samples, &t, DVec2::new(19.0, 90.0), 5.0), Some(1));
        assert_eq!(hit_test(&samples, &t, DVec2::new(30.0, 50.0), 5.0), None);
        assert_eq!(hit_test(&[], &t, DVec2::ZERO, 5.0), None);
    }
}
