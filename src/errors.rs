//! Aggregation and volume errors

use crate::scene::GroupId;
use std::fmt::Display;

/// Mass attribute that an active entity is expected to carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MassAttribute {
    Density,
    Volume,
}

impl Display for MassAttribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MassAttribute::Density => write!(f, "density"),
            MassAttribute::Volume => write!(f, "volume"),
        }
    }
}

/// All the possible failures of mass aggregation and volume computation
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MassError {
    /// (MissingAttribute) An entity marked active has no value for `attribute`
    MissingAttribute {
        entity: String,
        attribute: MassAttribute,
    },
    /// (UnknownGroup) No mass object group is registered under this id
    UnknownGroup(GroupId),
    /// (EmptyMesh) A volume was requested from a mesh without triangles
    EmptyMesh,
    /// (IndexOutOfRange) A triangle refers to a vertex the mesh does not have
    IndexOutOfRange { index: u32, vertex_count: usize },
    /// (OpenMesh) Some edges are not shared by exactly two triangles, so no volume is enclosed
    OpenMesh { boundary_edges: usize },
    /// Indicates an inconsistency while building a triangle mesh
    TriMesh(#[from] crate::float_types::parry3d::shape::TriMeshBuilderError),
}

impl Display for MassError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MassError::MissingAttribute { entity, attribute } => write!(
                f,
                "(MissingAttribute) Active entity '{}' has no {} set",
                entity, attribute
            ),
            MassError::UnknownGroup(id) => {
                write!(f, "(UnknownGroup) No mass object group with id {}", id)
            },
            MassError::EmptyMesh => {
                write!(f, "(EmptyMesh) Cannot compute the volume of a mesh without triangles")
            },
            MassError::IndexOutOfRange { index, vertex_count } => write!(
                f,
                "(IndexOutOfRange) Triangle index {} is out of range (vertices.len = {})",
                index, vertex_count
            ),
            MassError::OpenMesh { boundary_edges } => write!(
                f,
                "(OpenMesh) Mesh is not closed: {} edges are not shared by exactly two triangles",
                boundary_edges
            ),
            MassError::TriMesh(tri_mesh_builder_error) => tri_mesh_builder_error.fmt(f),
        }
    }
}
