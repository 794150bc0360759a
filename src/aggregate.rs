//! Mass-weighted center of mass over a collection of entities.
//!
//! Only entities reporting [`MassBody::is_active`] are read. For those,
//! `mass = density * volume` and the centroid is `Σ mass·position / Σ mass`.
//! A total mass of zero or below (including "no active entities") yields the
//! origin rather than an error.

use crate::errors::MassError;
use crate::float_types::Real;
use crate::traits::MassBody;
use nalgebra::{Point3, Vector3};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Running sums of an aggregation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MassAccumulator {
    pub total_mass: Real,
    pub weighted_sum: Vector3<Real>,
    pub active_count: usize,
}

impl Default for MassAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl MassAccumulator {
    pub fn new() -> Self {
        Self {
            total_mass: 0.0,
            weighted_sum: Vector3::zeros(),
            active_count: 0,
        }
    }

    /// Fold one entity in. Inactive entities are skipped without being read.
    pub fn add<B: MassBody + ?Sized>(&mut self, body: &B) -> Result<(), MassError> {
        if !body.is_active() {
            return Ok(());
        }
        let mass = body.mass()?;
        self.total_mass += mass;
        self.weighted_sum += body.world_position().coords * mass;
        self.active_count += 1;
        Ok(())
    }

    /// Combine two partial sums.
    pub fn merge(mut self, other: Self) -> Self {
        self.total_mass += other.total_mass;
        self.weighted_sum += other.weighted_sum;
        self.active_count += other.active_count;
        self
    }

    pub fn center_of_mass(&self) -> Point3<Real> {
        if self.total_mass > 0.0 {
            Point3::from(self.weighted_sum / self.total_mass)
        } else {
            Point3::origin()
        }
    }

    pub fn finish(self) -> MassSummary {
        MassSummary {
            total_mass: self.total_mass,
            center_of_mass: self.center_of_mass(),
            active_count: self.active_count,
        }
    }
}

/// Result of one aggregation pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MassSummary {
    pub total_mass: Real,
    pub center_of_mass: Point3<Real>,
    pub active_count: usize,
}

/// Aggregate `entities` in iteration order.
///
/// ## Errors
/// `MassError::MissingAttribute` for the first active entity without density or volume.
pub fn summarize<I>(entities: I) -> Result<MassSummary, MassError>
where
    I: IntoIterator,
    I::Item: MassBody,
{
    let mut acc = MassAccumulator::new();
    for body in entities {
        acc.add(&body)?;
    }
    Ok(acc.finish())
}

/// Parallel version of [`summarize`]. Partial sums are merged in an
/// unspecified grouping, so the result may differ from the serial one in the last bits.
#[cfg(feature = "parallel")]
pub fn summarize_par<B>(entities: &[B]) -> Result<MassSummary, MassError>
where
    B: MassBody + Sync,
{
    entities
        .par_iter()
        .try_fold(MassAccumulator::new, |mut acc, body| {
            acc.add(body)?;
            Ok::<_, MassError>(acc)
        })
        .try_reduce(MassAccumulator::new, |a, b| Ok(a.merge(b)))
        .map(MassAccumulator::finish)
}

/// Mass-weighted centroid of the active entities, or the origin if their total mass is not positive.
///
/// ## Example
/// ```
/// # use balance_point::{aggregate::compute_center_of_mass, entity::MassEntity};
/// # use nalgebra::Point3;
/// let light = MassEntity::<()>::with_mass("a", Point3::origin(), 1.0, 1.0);
/// let heavy = MassEntity::<()>::with_mass("b", Point3::new(10.0, 0.0, 0.0), 3.0, 1.0);
/// let com = compute_center_of_mass(&[light, heavy]).unwrap();
/// assert_eq!(com, Point3::new(7.5, 0.0, 0.0));
/// ```
pub fn compute_center_of_mass<I>(entities: I) -> Result<Point3<Real>, MassError>
where
    I: IntoIterator,
    I::Item: MassBody,
{
    summarize(entities).map(|summary| summary.center_of_mass)
}

/// Sum of `density * volume` over the active entities, `0.0` if there are none.
pub fn compute_total_mass<I>(entities: I) -> Result<Real, MassError>
where
    I: IntoIterator,
    I::Item: MassBody,
{
    summarize(entities).map(|summary| summary.total_mass)
}
