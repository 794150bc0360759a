//! Center of mass tracking for groups of 3D objects.
//!
//! Entities carry optional mass properties (`active`, `density`, `volume`). A
//! [mass object group](group::MassObjectGroup) aggregates the mass-weighted
//! position of its active members, and the [marker](marker) module turns the
//! stored centroid into line geometry: an axis cross at the centroid, a circle
//! where it projects onto a floor plane, and optionally a line joining them.
//! A [`Scene`] owns the groups and exposes the update and render ticks a host
//! drives on its own schedule.
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//! - [**stl-io**](https://en.wikipedia.org/wiki/STL_(file_format)): `.stl` import/export for volume computation
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **parallel**: use rayon for aggregation over large entity slices
//! - **cli**: build the `balance-point` demo binary

#![forbid(unsafe_code)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod aggregate;
pub mod config;
pub mod entity;
pub mod errors;
pub mod float_types;
pub mod group;
pub mod io;
pub mod marker;
pub mod scene;
pub mod shapes;
pub mod traits;
pub mod volume;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use aggregate::{compute_center_of_mass, compute_total_mass};
pub use entity::MassEntity;
pub use errors::MassError;
pub use group::MassObjectGroup;
pub use marker::build_group_marker_geometry;
pub use scene::Scene;
pub use shapes::transform_template;
