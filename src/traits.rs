use crate::errors::{MassAttribute, MassError};
use crate::float_types::Real;
use nalgebra::Point3;

/// Read-only view of an object that can contribute mass to a group.
///
/// Hosts implement this for whatever they store objects as. Aggregation only
/// ever calls [`MassBody::world_position`] and [`MassBody::mass`] on entities
/// whose [`MassBody::is_active`] returns `true`.
pub trait MassBody {
    /// Whether the entity takes part in aggregation.
    /// Untagged entities (no mass attributes at all) report `false`.
    fn is_active(&self) -> bool;

    /// Mass per unit volume, `None` when unset.
    fn density(&self) -> Option<Real>;

    /// Volume in scene units, `None` when unset.
    fn volume(&self) -> Option<Real>;

    /// World-space translation, read at aggregation time.
    fn world_position(&self) -> Point3<Real>;

    /// Name used in error messages and logs.
    fn label(&self) -> &str {
        "<unnamed>"
    }

    /// Returns `density * volume`.
    ///
    /// ## Errors
    /// `MassError::MissingAttribute` if either factor is unset. Signs are not checked.
    fn mass(&self) -> Result<Real, MassError> {
        let density = self.density().ok_or_else(|| MassError::MissingAttribute {
            entity: self.label().to_owned(),
            attribute: MassAttribute::Density,
        })?;
        let volume = self.volume().ok_or_else(|| MassError::MissingAttribute {
            entity: self.label().to_owned(),
            attribute: MassAttribute::Volume,
        })?;
        Ok(density * volume)
    }
}

impl<B: MassBody + ?Sized> MassBody for &B {
    fn is_active(&self) -> bool {
        (**self).is_active()
    }

    fn density(&self) -> Option<Real> {
        (**self).density()
    }

    fn volume(&self) -> Option<Real> {
        (**self).volume()
    }

    fn world_position(&self) -> Point3<Real> {
        (**self).world_position()
    }

    fn label(&self) -> &str {
        (**self).label()
    }
}

/// Something that can report the enclosed volume of an object's geometry.
pub trait VolumeSource {
    fn volume(&self) -> Result<Real, MassError>;
}
