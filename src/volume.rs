//! Closed triangle meshes and their enclosed volume

use crate::errors::MassError;
use crate::float_types::{
    Real,
    parry3d::shape::{Shape, TriMesh},
};
use crate::traits::VolumeSource;
use nalgebra::{Point3, Vector3};
use std::collections::HashMap;

/// Indexed triangle soup in an object's local space.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TriangleMesh {
    pub vertices: Vec<Point3<Real>>,
    /// Counter-clockwise (outward-facing) triangles
    pub indices: Vec<[u32; 3]>,
}

impl TriangleMesh {
    pub const fn new(vertices: Vec<Point3<Real>>, indices: Vec<[u32; 3]>) -> Self {
        Self { vertices, indices }
    }

    /// Axis-aligned box of the given full extents, centred on the origin.
    pub fn cuboid(width: Real, length: Real, height: Real) -> Self {
        let (hx, hy, hz) = (width * 0.5, length * 0.5, height * 0.5);
        let vertices = vec![
            Point3::new(-hx, -hy, -hz),
            Point3::new(hx, -hy, -hz),
            Point3::new(hx, hy, -hz),
            Point3::new(-hx, hy, -hz),
            Point3::new(-hx, -hy, hz),
            Point3::new(hx, -hy, hz),
            Point3::new(hx, hy, hz),
            Point3::new(-hx, hy, hz),
        ];
        let indices = vec![
            [0, 2, 1],
            [0, 3, 2], // -z
            [4, 5, 6],
            [4, 6, 7], // +z
            [0, 1, 5],
            [0, 5, 4], // -y
            [3, 7, 6],
            [3, 6, 2], // +y
            [0, 4, 7],
            [0, 7, 3], // -x
            [1, 2, 6],
            [1, 6, 5], // +x
        ];
        Self::new(vertices, indices)
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len()
    }

    /// Check that every triangle index refers to an existing vertex.
    pub fn check_indices(&self) -> Result<(), MassError> {
        let vertex_count = self.vertices.len();
        match self
            .indices
            .iter()
            .flatten()
            .find(|&&index| index as usize >= vertex_count)
        {
            Some(&index) => Err(MassError::IndexOutOfRange { index, vertex_count }),
            None => Ok(()),
        }
    }

    /// Number of undirected edges not shared by exactly two triangles.
    /// A closed surface has none.
    pub fn boundary_edge_count(&self) -> usize {
        let mut edge_counts: HashMap<(u32, u32), u32> = HashMap::new();
        for tri in &self.indices {
            for (i0, i1) in [(0, 1), (1, 2), (2, 0)] {
                let (a, b) = (tri[i0], tri[i1]);
                // (a, b) and (b, a) are the same edge
                let key = if a < b { (a, b) } else { (b, a) };
                *edge_counts.entry(key).or_insert(0) += 1;
            }
        }
        edge_counts.values().filter(|&&count| count != 2).count()
    }

    /// Iterate the triangles as vertex triples with their (unnormalized) face normal.
    ///
    /// ## Errors
    /// `MassError::IndexOutOfRange` if any triangle refers to a missing vertex
    pub fn triangles(
        &self,
    ) -> Result<impl Iterator<Item = ([Point3<Real>; 3], Vector3<Real>)> + '_, MassError> {
        self.check_indices()?;
        Ok(self.indices.iter().map(|&[a, b, c]| {
            let tri = [
                self.vertices[a as usize],
                self.vertices[b as usize],
                self.vertices[c as usize],
            ];
            let normal = (tri[1] - tri[0]).cross(&(tri[2] - tri[0]));
            (tri, normal)
        }))
    }

    /// Convert to a Parry `TriMesh`.
    ///
    /// ## Errors
    /// - `MassError::EmptyMesh` for a mesh without triangles
    /// - `MassError::IndexOutOfRange` for a triangle that refers to a missing vertex
    /// - `MassError::OpenMesh` when the triangles do not enclose a volume
    /// - Parry's `TriMeshBuilderError`
    pub fn to_trimesh(&self) -> Result<TriMesh, MassError> {
        if self.indices.is_empty() {
            return Err(MassError::EmptyMesh);
        }
        self.check_indices()?;
        let boundary_edges = self.boundary_edge_count();
        if boundary_edges > 0 {
            return Err(MassError::OpenMesh { boundary_edges });
        }
        Ok(TriMesh::new(self.vertices.clone(), self.indices.clone())?)
    }
}

impl VolumeSource for TriangleMesh {
    /// Unsigned enclosed volume, via Parry's mass properties at unit density.
    fn volume(&self) -> Result<Real, MassError> {
        let trimesh = self.to_trimesh()?;
        let mp = trimesh.mass_properties(1.0);
        Ok(mp.mass().abs())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn cube_volume() {
        let cube = TriangleMesh::cuboid(2.0, 2.0, 2.0);
        approx::assert_relative_eq!(cube.volume().unwrap(), 8.0, epsilon = 1e-6);
    }

    #[test]
    fn box_volume_ignores_winding() {
        let mut slab = TriangleMesh::cuboid(4.0, 1.0, 0.5);
        for tri in &mut slab.indices {
            tri.swap(1, 2);
        }
        approx::assert_relative_eq!(slab.volume().unwrap(), 2.0, epsilon = 1e-6);
    }

    #[test]
    fn empty_mesh_is_an_error() {
        assert_eq!(TriangleMesh::default().volume(), Err(MassError::EmptyMesh));
    }

    #[test]
    fn cuboid_normals_point_outward() {
        let cube = TriangleMesh::cuboid(1.0, 1.0, 1.0);
        for (tri, normal) in cube.triangles().unwrap() {
            let centroid = (tri[0].coords + tri[1].coords + tri[2].coords) / 3.0;
            assert!(normal.dot(&centroid) > 0.0);
        }
    }

    fn stray_triangle() -> TriangleMesh {
        TriangleMesh::new(
            vec![
                Point3::origin(),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
            ],
            vec![[0, 1, 7]],
        )
    }

    #[test]
    fn out_of_range_index_is_an_error() {
        let expected = MassError::IndexOutOfRange {
            index: 7,
            vertex_count: 3,
        };
        let mesh = stray_triangle();
        assert_eq!(mesh.volume(), Err(expected.clone()));
        assert_eq!(mesh.triangles().err(), Some(expected));
    }

    #[test]
    fn open_mesh_is_an_error() {
        let mut mesh = stray_triangle();
        mesh.indices = vec![[0, 1, 2]];
        assert_eq!(mesh.boundary_edge_count(), 3);
        assert_eq!(mesh.volume(), Err(MassError::OpenMesh { boundary_edges: 3 }));

        let mut lidless = TriangleMesh::cuboid(1.0, 1.0, 1.0);
        lidless.indices.truncate(10);
        assert!(matches!(lidless.volume(), Err(MassError::OpenMesh { .. })));
    }
}
