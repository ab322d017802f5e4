//! Snap-point table.
//!
//! Points are stored in a fixed order: `[min, ...intermediate, max]`. Index 0
//! is the most closed resting position and the last index the most open.
//! The table is positional and is neither sorted nor deduplicated.

use crate::config::DrawerConfig;
use crate::geometry::Geometry;

/// How far past the viewport edge a fully closed drawer is placed.
pub const CLOSED_OVERSHOOT: f32 = 20.0;

/// Resting coordinates for one drawer, rebuilt on every sizing pass.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapTable {
    points: Vec<f32>,
    closed: f32,
    current: usize,
}

impl SnapTable {
    /// Build the table for `config` under `geometry`.
    pub fn build(config: &DrawerConfig, geometry: &Geometry) -> Self {
        let points = build_points(config, geometry);
        let closed = closed_coordinate(config, geometry, &points);
        tracing::debug!(?points, closed, "built snap table");
        Self {
            points,
            closed,
            current: 0,
        }
    }

    pub fn points(&self) -> &[f32] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; a table holds at least the min and max points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<f32> {
        self.points.get(index).copied()
    }

    pub fn last_index(&self) -> usize {
        self.points.len() - 1
    }

    /// Most closed resting coordinate.
    pub fn min_y(&self) -> f32 {
        self.points[0]
    }

    /// Most open resting coordinate.
    pub fn max_y(&self) -> f32 {
        self.points[self.last_index()]
    }

    /// Coordinate the drawer slides to when closing.
    pub fn closed_y(&self) -> f32 {
        self.closed
    }

    /// Index most recently confirmed as the resting point.
    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn set_current_index(&mut self, index: usize) {
        debug_assert!(index < self.points.len());
        self.current = index.min(self.last_index());
    }

    /// Whether the drawer rests strictly between the min and max points.
    pub fn at_intermediate(&self) -> bool {
        self.current > 0 && self.current < self.last_index()
    }

    /// First point in table order whose coordinate is strictly less than `y`.
    pub fn first_above(&self, y: f32) -> Option<usize> {
        self.points.iter().position(|&p| p < y)
    }

    /// Carry the resting index over from a previous table.
    pub(crate) fn inherit_index(&mut self, previous: &SnapTable) {
        self.current = previous.current.min(self.last_index());
    }
}

/// `[min, ...snap offsets, max]` as axis coordinates.
pub fn build_points(config: &DrawerConfig, geometry: &Geometry) -> Vec<f32> {
    let min_y = config
        .effective_preview_offset()
        .map_or(0.0, |offset| geometry.coordinate_for_offset(offset));
    let max_y = config
        .effective_max_offset()
        .map_or(geometry.top_padding, |offset| geometry.coordinate_for_offset(offset));

    let mut points = Vec::with_capacity(config.snap_offsets.len() + 2);
    points.push(min_y);
    points.extend(
        config
            .snap_offsets
            .iter()
            .map(|&offset| geometry.coordinate_for_offset(offset)),
    );
    points.push(max_y);
    points
}

/// Coordinate of the closed rest state.
///
/// A drawer that may not close rests at its preview point; otherwise it is
/// pushed fully past the viewport edge.
pub fn closed_coordinate(config: &DrawerConfig, geometry: &Geometry, points: &[f32]) -> f32 {
    if !config.can_close {
        points[0]
    } else {
        geometry.viewport_height + CLOSED_OVERSHOOT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry() -> Geometry {
        Geometry::new(800.0, 20.0)
    }

    #[test]
    fn test_max_offset_only() {
        let config = DrawerConfig::new().with_preview_offset(0.0).with_max_offset(300.0);
        let table = SnapTable::build(&config, &geometry());
        assert_eq!(table.points(), &[0.0, 500.0]);
        assert_eq!(table.closed_y(), 820.0);
    }

    #[test]
    fn test_defaults_use_top_padding() {
        let table = SnapTable::build(&DrawerConfig::new(), &geometry());
        assert!(!table.is_empty());
        assert_eq!(table.points(), &[0.0, 20.0]);
        assert_eq!(table.max_y(), 20.0);
    }

    #[test]
    fn test_intermediate_points_keep_order() {
        let config = DrawerConfig::new()
            .with_preview_offset(100.0)
            .with_snap_offsets_str("400 250")
            .with_max_offset(600.0);
        let table = SnapTable::build(&config, &geometry());
        assert_eq!(table.points(), &[700.0, 400.0, 550.0, 200.0]);
        assert_eq!(table.len(), 2 + 2);
        assert_eq!(table.min_y(), 700.0);
        assert_eq!(table.max_y(), 200.0);
    }

    #[test]
    fn test_malformed_offsets_do_not_count() {
        let config = DrawerConfig::new().with_snap_offsets_str("200, nope, 300");
        let table = SnapTable::build(&config, &geometry());
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn test_closed_is_preview_when_cannot_close() {
        let config = DrawerConfig::new().with_preview_offset(120.0).with_can_close(false);
        let table = SnapTable::build(&config, &geometry());
        assert_eq!(table.closed_y(), 680.0);
        assert_eq!(table.closed_y(), table.min_y());
    }

    #[test]
    fn test_first_above_scans_table_order() {
        let config = DrawerConfig::new()
            .with_preview_offset(100.0)
            .with_snap_offsets([300.0])
            .with_max_offset(600.0);
        let table = SnapTable::build(&config, &geometry());
        // [700, 500, 200]
        assert_eq!(table.first_above(600.0), Some(1));
        assert_eq!(table.first_above(750.0), Some(0));
        assert_eq!(table.first_above(150.0), None);
    }

    #[test]
    fn test_intermediate_tracking() {
        let config = DrawerConfig::new().with_snap_offsets([300.0]);
        let mut table = SnapTable::build(&config, &geometry());
        assert!(!table.at_intermediate());
        table.set_current_index(1);
        assert!(table.at_intermediate());
        table.set_current_index(2);
        assert!(!table.at_intermediate());
    }
}
