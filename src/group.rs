//! Mass object groups and their display configuration

use crate::aggregate::{MassSummary, summarize};
use crate::errors::MassError;
use crate::float_types::Real;
use crate::traits::MassBody;
use nalgebra::Point3;
use serde::{Deserialize, Serialize};

/// Linear RGB, components expected in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: Real,
    pub g: Real,
    pub b: Real,
}

impl Color {
    pub const MAGENTA: Color = Color::new(1.0, 0.0, 1.0);

    pub const fn new(r: Real, g: Real, b: Real) -> Self {
        Self { r, g, b }
    }

    /// Opaque RGBA as consumed by a uniform-color line shader.
    pub const fn to_rgba(self) -> [Real; 4] {
        [self.r, self.g, self.b, 1.0]
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::MAGENTA
    }
}

/// Per-group marker settings. Missing fields deserialize to their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupDisplay {
    pub visible: bool,
    /// Marker size in scene units; expected to be positive but not enforced
    pub scale: Real,
    pub color: Color,
    /// Height of the plane the floor marker is projected onto
    pub floor_level: Real,
    pub line_to_floor: bool,
}

impl Default for GroupDisplay {
    fn default() -> Self {
        Self {
            visible: true,
            scale: 0.05,
            color: Color::default(),
            floor_level: 0.0,
            line_to_floor: false,
        }
    }
}

/// A named set of mass-carrying entities and its last computed center of mass.
#[derive(Debug, Clone)]
pub struct MassObjectGroup<B> {
    pub name: String,

    /// `None` when no collection is assigned; such groups are skipped by updates
    pub members: Option<Vec<B>>,

    pub display: GroupDisplay,

    /// Centroid as of the last update; stale in between
    pub com_location: Point3<Real>,
}

impl<B> Default for MassObjectGroup<B> {
    fn default() -> Self {
        Self {
            name: String::from("Mass Object Group"),
            members: None,
            display: GroupDisplay::default(),
            com_location: Point3::origin(),
        }
    }
}

impl<B> MassObjectGroup<B> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_members(mut self, members: Vec<B>) -> Self {
        self.members = Some(members);
        self
    }

    pub fn with_display(mut self, display: GroupDisplay) -> Self {
        self.display = display;
        self
    }

    /// Point on the floor plane directly below (or above) the stored centroid.
    pub fn floor_point(&self) -> Point3<Real> {
        Point3::new(
            self.com_location.x,
            self.com_location.y,
            self.display.floor_level,
        )
    }
}

impl<B: MassBody> MassObjectGroup<B> {
    /// Re-aggregate the members and store the new centroid in `com_location`.
    ///
    /// Returns `Ok(None)` without touching `com_location` when no members are assigned.
    ///
    /// ## Errors
    /// `MassError::MissingAttribute` from aggregation; `com_location` is left unchanged.
    pub fn update_center_of_mass(&mut self) -> Result<Option<MassSummary>, MassError> {
        let Some(members) = self.members.as_ref() else {
            return Ok(None);
        };
        let summary = summarize(members)?;
        self.com_location = summary.center_of_mass;
        Ok(Some(summary))
    }

    /// Total mass of the active members, `0.0` when no members are assigned.
    pub fn total_mass(&self) -> Result<Real, MassError> {
        match self.members.as_ref() {
            Some(members) => summarize(members).map(|s| s.total_mass),
            None => Ok(0.0),
        }
    }
}
