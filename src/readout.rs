// Readout/console collaborator: receives formatted strings, never queried.

use crate::hover::Tooltip;
use glam::DVec2;

pub trait Readout: Send {
    /// Current zoom, e.g. `"200%"`.
    fn zoom(&mut self, text: &str);

    /// Active region name and its formatted bounds.
    fn region(&mut self, name: &str, left: &str, right: &str);

    fn show_tooltip(&mut self, tooltip: &Tooltip);

    fn move_tooltip(&mut self, position: DVec2);

    fn hide_tooltip(&mut self);
}

#[derive(Clone, Copy, Debug, Default)]
pub struct NullReadout;

impl Readout for NullReadout {
    fn zoom(&mut self, _text: &str) {}
    fn region(&mut self, _name: &str, _left: &str, _right: &str) {}
    fn show_tooltip(&mut self, _tooltip: &Tooltip) {}
    fn move_tooltip(&mut self, _position: DVec2) {}
    fn hide_tooltip(&mut self) {}
}
