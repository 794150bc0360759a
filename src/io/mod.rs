#[cfg(feature = "stl-io")]
mod stl;
