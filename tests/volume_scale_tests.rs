// Runs in its own test binary so the volume scale starts unset.

use balance_point::{
    entity::MassEntity,
    float_types::{LITERS_PER_CUBIC_METER, set_volume_scale, volume_scale},
    traits::MassBody,
    volume::TriangleMesh,
};
use nalgebra::Point3;

#[test]
fn liters_scale_applies_to_calculated_volume() -> Result<(), Box<dyn std::error::Error>> {
    assert!(set_volume_scale(LITERS_PER_CUBIC_METER));
    assert!(!set_volume_scale(1.0));
    assert_eq!(volume_scale(), LITERS_PER_CUBIC_METER);

    let mut crate_box = MassEntity::<()>::new("crate", Point3::origin(), None);
    crate_box.add_mass_properties();
    assert!(crate_box.calculate_volume(&TriangleMesh::cuboid(1.0, 1.0, 1.0))?);

    approx::assert_relative_eq!(crate_box.volume().unwrap(), 1000.0, epsilon = 1e-6);
    approx::assert_relative_eq!(crate_box.mass()?, 1000.0, epsilon = 1e-6);
    Ok(())
}
