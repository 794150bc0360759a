//! `MassEntity` struct and the mass-property operations applied to it

use crate::errors::MassError;
use crate::float_types::{Real, volume_scale};
use crate::traits::{MassBody, VolumeSource};
use nalgebra::{Isometry3, Point3, Translation3, UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Mass properties attached to an entity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MassAttributes {
    pub active: bool,
    pub density: Real,
    pub volume: Real,
}

impl Default for MassAttributes {
    fn default() -> Self {
        Self {
            active: true,
            density: 1.0,
            volume: 1.0,
        }
    }
}

impl MassAttributes {
    pub const fn mass(&self) -> Real {
        self.density * self.volume
    }
}

/// Only mesh-bearing entities can carry mass properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EntityKind {
    #[default]
    Mesh,
    Other,
}

/// How a renderer should present an entity given its activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    Solid,
    Wire,
}

impl DisplayMode {
    pub const fn for_active(active: bool) -> Self {
        if active { DisplayMode::Solid } else { DisplayMode::Wire }
    }
}

#[derive(Clone, Debug)]
pub struct MassEntity<S: Clone + Debug> {
    pub name: String,
    pub kind: EntityKind,

    /// Placement in world space; only the translation matters for aggregation
    pub transform: Isometry3<Real>,

    /// `None` means the entity is untagged and ignored by aggregation
    pub attributes: Option<MassAttributes>,

    /// Metadata
    pub metadata: Option<S>,
}

impl<S: Clone + Debug> MassEntity<S> {
    /// Untagged mesh entity placed at `position`.
    pub fn new(name: impl Into<String>, position: Point3<Real>, metadata: Option<S>) -> Self {
        Self {
            name: name.into(),
            kind: EntityKind::Mesh,
            transform: Isometry3::from_parts(
                Translation3::from(position.coords),
                UnitQuaternion::identity(),
            ),
            attributes: None,
            metadata,
        }
    }

    /// Mesh entity at `position` carrying the given mass properties.
    ///
    /// # Example
    /// ```
    /// # use balance_point::entity::MassEntity;
    /// # use nalgebra::Point3;
    /// let brick = MassEntity::<()>::with_mass("brick", Point3::new(0.0, 0.0, 1.0), 2.0, 3.0);
    /// assert_eq!(brick.effective_mass(), 6.0);
    /// ```
    pub fn with_mass(
        name: impl Into<String>,
        position: Point3<Real>,
        density: Real,
        volume: Real,
    ) -> Self {
        let mut entity = Self::new(name, position, None);
        entity.attributes = Some(MassAttributes {
            active: true,
            density,
            volume,
        });
        entity
    }

    pub fn with_kind(mut self, kind: EntityKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.set_active(active);
        self
    }

    pub fn translate(&mut self, offset: Vector3<Real>) {
        self.transform.append_translation_mut(&Translation3::from(offset));
    }

    pub const fn has_mass_properties(&self) -> bool {
        self.attributes.is_some()
    }

    /// Tag a mesh entity with default mass properties.
    /// Existing properties are left untouched. Returns `true` if properties were added.
    pub fn add_mass_properties(&mut self) -> bool {
        if self.kind != EntityKind::Mesh || self.attributes.is_some() {
            return false;
        }
        self.attributes = Some(MassAttributes::default());
        true
    }

    /// Drop the mass properties of a mesh entity. Returns the removed properties.
    pub fn remove_mass_properties(&mut self) -> Option<MassAttributes> {
        if self.kind != EntityKind::Mesh {
            return None;
        }
        self.attributes.take()
    }

    /// Set the active flag. Untagged entities are left untouched.
    pub fn set_active(&mut self, active: bool) -> bool {
        match self.attributes.as_mut() {
            Some(attributes) => {
                attributes.active = active;
                true
            },
            None => false,
        }
    }

    /// Flip the active flag. Untagged entities are left untouched.
    pub fn toggle_active(&mut self) -> bool {
        match self.attributes {
            Some(attributes) => self.set_active(!attributes.active),
            None => false,
        }
    }

    /// Set the density. Untagged entities are left untouched.
    pub fn set_density(&mut self, density: Real) -> bool {
        match self.attributes.as_mut() {
            Some(attributes) => {
                attributes.density = density;
                true
            },
            None => false,
        }
    }

    /// Recompute the stored volume from `source`, scaled by [`volume_scale`].
    ///
    /// Only tagged mesh entities are updated; returns whether the volume changed hands.
    ///
    /// ## Errors
    /// Whatever `source` reports, e.g. `MassError::EmptyMesh`.
    pub fn calculate_volume<V: VolumeSource + ?Sized>(
        &mut self,
        source: &V,
    ) -> Result<bool, MassError> {
        if self.kind != EntityKind::Mesh {
            return Ok(false);
        }
        let Some(attributes) = self.attributes.as_mut() else {
            return Ok(false);
        };
        attributes.volume = source.volume()? * volume_scale();
        Ok(true)
    }

    /// `density * volume` when active, `0.0` when inactive or untagged.
    pub fn effective_mass(&self) -> Real {
        match self.attributes {
            Some(attributes) if attributes.active => attributes.mass(),
            _ => 0.0,
        }
    }

    /// Presentation derived from the active flag; `None` for untagged entities.
    pub fn display_mode(&self) -> Option<DisplayMode> {
        self.attributes
            .map(|attributes| DisplayMode::for_active(attributes.active))
    }
}

impl<S: Clone + Debug> MassBody for MassEntity<S> {
    fn is_active(&self) -> bool {
        self.attributes.is_some_and(|a| a.active)
    }

    fn density(&self) -> Option<Real> {
        self.attributes.map(|a| a.density)
    }

    fn volume(&self) -> Option<Real> {
        self.attributes.map(|a| a.volume)
    }

    fn world_position(&self) -> Point3<Real> {
        Point3::from(self.transform.translation.vector)
    }

    fn label(&self) -> &str {
        &self.name
    }
}
