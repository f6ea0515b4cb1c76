//! Region (brush) lifecycle: drag to create, snap on release, delete.

use crate::data_types::{Region, RegionId, Sample};
use crate::error::{PlotError, Result};
use crate::snap::SnapIndex;
use tracing::debug;

/// Regions in creation order. Ids come from a counter that is never rewound,
/// so names are never handed out twice within a session.
#[derive(Clone, Debug, Default)]
pub struct RegionManager {
    regions: Vec<Region>,
    next_id: u64,
}

impl RegionManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_region(&mut self, initial_x: f64) -> RegionId {
        let id = RegionId(self.next_id);
        self.next_id += 1;
        self.regions.push(Region::new(id, initial_x));
        debug!(%id, initial_x, "region started");
        id
    }

    fn find_mut(&mut self, id: RegionId) -> Result<&mut Region> {
        self.regions
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(PlotError::RegionNotFound(id))
    }

    pub fn get(&self, id: RegionId) -> Option<&Region> {
        self.regions.iter().find(|r| r.id == id)
    }

    /// Raw drag bounds; ordering is only fixed on release.
    pub fn update_region(&mut self, id: RegionId, left: f64, right: f64) -> Result<&Region> {
        let region = self.find_mut(id)?;
        region.left = left;
        region.right = right;
        Ok(&*region)
    }

    /// Snaps both bounds to the nearest sample x and orders them.
    ///
    /// Snapping an already snapped region is a no-op. On error the region is untouched.
    pub fn end_region(&mut self, id: RegionId, samples: &[Sample]) -> Result<&Region> {
        let (left, right) = {
            let region = self.get(id).ok_or(PlotError::RegionNotFound(id))?;
            let index = SnapIndex::new(samples);
            (index.nearest(region.left)?, index.nearest(region.right)?)
        };
        let region = self.find_mut(id)?;
        region.left = left.min(right);
        region.right = left.max(right);
        debug!(%id, left = region.left, right = region.right, "region snapped");
        Ok(&*region)
    }

    /// Removes the region; the returned copy is marked for deletion.
    pub fn delete_region(&mut self, id: RegionId) -> Result<Region> {
        let pos = self
            .regions
            .iter()
            .position(|r| r.id == id)
            .ok_or(PlotError::RegionNotFound(id))?;
        let mut region = self.regions.remove(pos);
        region.marked_for_deletion = true;
        region.active = false;
        debug!(%id, "region deleted");
        Ok(region)
    }

    pub fn list_regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Drops every region. The id counter keeps running.
    pub fn clear(&mut self) -> Vec<Region> {
        std::mem::take(&mut self.regions)
    }
}
