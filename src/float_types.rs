// Re-export parry for the appropriate float size
#[cfg(feature = "f64")]
pub use parry3d_f64 as parry3d;

#[cfg(feature = "f32")]
pub use parry3d;

// Our Real scalar type:
#[cfg(feature = "f32")]
pub type Real = f32;
#[cfg(feature = "f64")]
pub type Real = f64;

use core::str::FromStr;
use std::sync::OnceLock;

/// Lazily-initialized factor applied to every computed mesh volume.
/// Defaults to `1.0` (volumes stay in cubic scene units), but can be overridden:
///  1) **Build-time**: set env var `BALANCE_POINT_VOLUME_SCALE`
///     (e.g. `BALANCE_POINT_VOLUME_SCALE=1000 cargo build` to report liters for meters)
///  2) **Runtime**: call [`set_volume_scale`] once before computing any volume
static VOLUME_SCALE_CELL: OnceLock<Real> = OnceLock::new();

/// Returns the current volume scale.
/// If not set yet, it tries `BALANCE_POINT_VOLUME_SCALE` (parsed as the active `Real`)
/// and falls back to `1.0`.
pub fn volume_scale() -> Real {
    *VOLUME_SCALE_CELL.get_or_init(|| {
        if let Some(environment_variable) = option_env!("BALANCE_POINT_VOLUME_SCALE") {
            if let Ok(value) = Real::from_str(environment_variable) {
                return value;
            }
        }
        1.0
    })
}

/// Set the volume scale programmatically once (subsequent calls are ignored).
/// Returns `false` if a scale was already in effect.
pub fn set_volume_scale(value: Real) -> bool {
    VOLUME_SCALE_CELL.set(value).is_ok()
}

// Tau
/// The full circle constant (τ)
#[cfg(feature = "f32")]
pub const TAU: Real = core::f32::consts::TAU;
/// The full circle constant (τ)
#[cfg(feature = "f64")]
pub const TAU: Real = core::f64::consts::TAU;

// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// Unit conversion
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
/// Volume scale that turns cubic meters into liters.
pub const LITERS_PER_CUBIC_METER: Real = 1000.0;
