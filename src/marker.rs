//! Per-group marker line geometry

use crate::float_types::Real;
use crate::group::MassObjectGroup;
use crate::scene::GroupId;
use crate::shapes::{com_marker, floor_marker};
use nalgebra::Point3;

/// Flat line-list for one group: the centroid cross, the floor circle and,
/// when `line_to_floor` is set, a final segment from the centroid down to the floor.
///
/// Uses the stored `com_location`; it does not re-aggregate.
pub fn build_group_marker_geometry<B>(group: &MassObjectGroup<B>) -> Vec<Point3<Real>> {
    let display = &group.display;
    let com = group.com_location;
    let floor_point = group.floor_point();

    let mut vertices = com_marker().transform(display.scale, &com.coords);
    vertices.extend(floor_marker().transform(display.scale, &floor_point.coords));

    if display.line_to_floor {
        vertices.push(com);
        vertices.push(floor_point);
    }
    vertices
}

/// Lines for one group, ready for a uniform-color line renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerBatch {
    pub group: GroupId,
    pub color: [Real; 4],
    pub line_width: Real,
    pub vertices: Vec<Point3<Real>>,
}

impl MarkerBatch {
    pub fn new<B>(id: GroupId, group: &MassObjectGroup<B>, line_width: Real) -> Self {
        Self {
            group: id,
            color: group.display.color.to_rgba(),
            line_width,
            vertices: build_group_marker_geometry(group),
        }
    }

    /// Vertex pairs in draw order.
    pub fn segments(&self) -> impl Iterator<Item = (Point3<Real>, Point3<Real>)> + '_ {
        self.vertices.chunks_exact(2).map(|pair| (pair[0], pair[1]))
    }

    pub fn segment_count(&self) -> usize {
        self.vertices.len() / 2
    }
}
