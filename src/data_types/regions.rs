use serde::{Deserialize, Serialize};
use std::fmt;

/// Monotonic region identifier. Never reassigned within a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RegionId(pub u64);

impl RegionId {
    /// Letter name derived from the id: `A..Z`, then `AA, AB, ...`.
    pub fn name(self) -> String {
        let mut n = self.0 + 1;
        let mut letters = Vec::new();
        while n > 0 {
            n -= 1;
            letters.push(b'A' + (n % 26) as u8);
            n /= 26;
        }
        letters.reverse();
        String::from_utf8_lossy(&letters).into_owned()
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "brush_{}", self.name())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub id: RegionId,
    pub name: String,
    pub left: f64,
    pub right: f64,
    pub active: bool,
    pub marked_for_deletion: bool,
}

impl Region {
    pub fn new(id: RegionId, x: f64) -> Self {
        Self {
            id,
            name: id.name(),
            left: x,
            right: x,
            active: true,
            marked_for_deletion: false,
        }
    }

    /// Readout label, e.g. `brush_C`.
    pub fn shortname(&self) -> String {
        self.id.to_string()
    }

    pub fn width(&self) -> f64 {
        (self.right - self.left).abs()
    }
}
