//! Marker shape templates in local space, stored in line-list order
//! (vertices `[0, 1]` form the first segment, `[2, 3]` the second, and so on).

use crate::float_types::{Real, TAU};
use nalgebra::{Matrix4, Point3, Vector3};
use std::sync::OnceLock;

/// Number of segments used to approximate the floor marker circle.
pub const FLOOR_MARKER_SEGMENTS: usize = 18;

/// Immutable list of local-space offsets making up a marker.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeTemplate {
    points: Vec<Point3<Real>>,
}

impl ShapeTemplate {
    pub const fn from_points(points: Vec<Point3<Real>>) -> Self {
        Self { points }
    }

    /// Three segments of length `2 * half_length` along X, Y and Z, crossing at the origin.
    pub fn axis_cross(half_length: Real) -> Self {
        let h = half_length;
        Self::from_points(vec![
            Point3::new(-h, 0.0, 0.0),
            Point3::new(h, 0.0, 0.0),
            Point3::new(0.0, -h, 0.0),
            Point3::new(0.0, h, 0.0),
            Point3::new(0.0, 0.0, -h),
            Point3::new(0.0, 0.0, h),
        ])
    }

    /// Closed circle outline of `radius` in the XY plane, as `segments` line segments.
    /// Fewer than 3 segments gives an empty template.
    pub fn circle_outline(radius: Real, segments: usize) -> Self {
        if segments < 3 {
            return Self::from_points(Vec::new());
        }
        let ring: Vec<Point3<Real>> = (0..segments)
            .map(|i| {
                let theta = TAU * (i as Real) / (segments as Real);
                Point3::new(radius * theta.cos(), radius * theta.sin(), 0.0)
            })
            .collect();

        let mut points = Vec::with_capacity(segments * 2);
        for i in 0..segments {
            points.push(ring[i]);
            // close it
            points.push(ring[(i + 1) % segments]);
        }
        Self::from_points(points)
    }

    pub fn points(&self) -> &[Point3<Real>] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Place this template in world space; see [`transform_template`].
    pub fn transform(&self, scale: Real, translate: &Vector3<Real>) -> Vec<Point3<Real>> {
        transform_template(&self.points, scale, translate)
    }
}

/// Centroid marker: a unit axis cross (6 points, 3 segments).
pub fn com_marker() -> &'static ShapeTemplate {
    static COM_MARKER: OnceLock<ShapeTemplate> = OnceLock::new();
    COM_MARKER.get_or_init(|| ShapeTemplate::axis_cross(1.0))
}

/// Floor marker: a unit circle in the XY plane ([`FLOOR_MARKER_SEGMENTS`] segments).
pub fn floor_marker() -> &'static ShapeTemplate {
    static FLOOR_MARKER: OnceLock<ShapeTemplate> = OnceLock::new();
    FLOOR_MARKER.get_or_init(|| ShapeTemplate::circle_outline(1.0, FLOOR_MARKER_SEGMENTS))
}

/// Map each point `p` to `p * scale + translate`.
///
/// Scaling happens in local space before placement. Point count and order are preserved,
/// and a zero or negative `scale` is applied as-is.
///
/// # Example
/// ```
/// # use balance_point::shapes::transform_template;
/// # use nalgebra::{Point3, Vector3};
/// let placed = transform_template(&[Point3::new(1.0, 0.0, 0.0)], 2.0, &Vector3::new(5.0, 5.0, 5.0));
/// assert_eq!(placed, vec![Point3::new(7.0, 5.0, 5.0)]);
/// ```
pub fn transform_template(
    template: &[Point3<Real>],
    scale: Real,
    translate: &Vector3<Real>,
) -> Vec<Point3<Real>> {
    let mat = Matrix4::new_translation(translate) * Matrix4::new_scaling(scale);
    template.iter().map(|p| mat.transform_point(p)).collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn com_marker_is_three_segments() {
        let marker = com_marker();
        assert_eq!(marker.len(), 6);
        for pair in marker.points().chunks_exact(2) {
            // each segment is centred on the origin
            approx::assert_relative_eq!((pair[0].coords + pair[1].coords).norm(), 0.0);
            approx::assert_relative_eq!((pair[1] - pair[0]).norm(), 2.0);
        }
    }

    #[test]
    fn floor_marker_is_closed_unit_circle() {
        let marker = floor_marker();
        assert_eq!(marker.len(), FLOOR_MARKER_SEGMENTS * 2);
        let pts = marker.points();
        assert_eq!(pts[pts.len() - 1], pts[0]);
        for p in pts {
            approx::assert_relative_eq!(p.coords.norm(), 1.0, epsilon = 1e-6);
            assert_eq!(p.z, 0.0);
        }
        // consecutive segments share endpoints
        for i in 0..FLOOR_MARKER_SEGMENTS - 1 {
            assert_eq!(pts[2 * i + 1], pts[2 * i + 2]);
        }
    }

    #[test]
    fn degenerate_circle_is_empty() {
        assert!(ShapeTemplate::circle_outline(1.0, 2).is_empty());
    }

    #[test]
    fn zero_scale_collapses_to_translation() {
        let t = Vector3::new(1.0, -2.0, 3.0);
        let placed = com_marker().transform(0.0, &t);
        assert!(placed.iter().all(|p| *p == Point3::from(t)));
    }

    #[test]
    fn negative_scale_mirrors() {
        let placed = transform_template(&[Point3::new(1.0, 2.0, 0.0)], -1.0, &Vector3::zeros());
        assert_eq!(placed, vec![Point3::new(-1.0, -2.0, 0.0)]);
    }
}
