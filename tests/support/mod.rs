//! Test support library
//! Provides various helper functions & utilities for tests.
#![allow(dead_code)]

use balance_point::{
    entity::MassEntity,
    float_types::Real,
    traits::MassBody,
};
use nalgebra::Point3;

pub type Entity = MassEntity<()>;

/// Active mesh entity at `[x, y, z]` with the given density and volume.
pub fn body(name: &str, [x, y, z]: [Real; 3], density: Real, volume: Real) -> Entity {
    Entity::with_mass(name, Point3::new(x, y, z), density, volume)
}

/// Same as [`body`] but with the active flag cleared.
pub fn inactive(name: &str, at: [Real; 3], density: Real, volume: Real) -> Entity {
    body(name, at, density, volume).with_active(false)
}

/// Loosely-typed entity, like a host object whose properties were only
/// partially set up.
#[derive(Debug, Clone, Default)]
pub struct PropertyBag {
    pub name: String,
    pub active: Option<bool>,
    pub density: Option<Real>,
    pub volume: Option<Real>,
    pub position: Point3<Real>,
}

impl MassBody for PropertyBag {
    fn is_active(&self) -> bool {
        self.active.unwrap_or(false)
    }

    fn density(&self) -> Option<Real> {
        self.density
    }

    fn volume(&self) -> Option<Real> {
        self.volume
    }

    fn world_position(&self) -> Point3<Real> {
        self.position
    }

    fn label(&self) -> &str {
        &self.name
    }
}
