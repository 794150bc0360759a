mod support;

use balance_point::{
    aggregate::summarize,
    compute_center_of_mass, compute_total_mass,
    errors::{MassAttribute, MassError},
};
use balance_point::float_types::Real;
use nalgebra::Point3;
use support::{Entity, PropertyBag, body, inactive};

#[test]
fn empty_input_gives_origin_and_zero_mass() {
    let none: [Entity; 0] = [];
    assert_eq!(compute_center_of_mass(&none), Ok(Point3::origin()));
    assert_eq!(compute_total_mass(&none), Ok(0.0));
}

#[test]
fn single_body_is_its_own_centroid() {
    let entities = [body("solo", [2.0, 3.0, 4.0], 2.0, 3.0)];
    assert_eq!(compute_center_of_mass(&entities), Ok(Point3::new(2.0, 3.0, 4.0)));
    assert_eq!(compute_total_mass(&entities), Ok(6.0));
}

#[test]
fn centroid_leans_towards_heavier_body() {
    let entities = [
        body("light", [0.0, 0.0, 0.0], 1.0, 1.0),
        body("heavy", [10.0, 0.0, 0.0], 3.0, 1.0),
    ];
    assert_eq!(compute_center_of_mass(&entities), Ok(Point3::new(7.5, 0.0, 0.0)));
    assert_eq!(compute_total_mass(&entities), Ok(4.0));
}

#[test]
fn inactive_bodies_are_ignored() {
    let active = [
        body("a", [1.0, 2.0, 3.0], 1.0, 2.0),
        body("b", [-4.0, 0.0, 1.0], 0.5, 4.0),
    ];
    let baseline = compute_center_of_mass(&active).unwrap();

    for (density, volume, at) in [
        (1.0, 1.0, [0.0, 0.0, 0.0]),
        (100.0, 50.0, [1e3, -1e3, 7.0]),
        (-3.0, 0.0, [5.0, 5.0, 5.0]),
    ] {
        let mut mixed = active.to_vec();
        mixed.push(inactive("off", at, density, volume));
        assert_eq!(compute_center_of_mass(&mixed), Ok(baseline));
        assert_eq!(compute_total_mass(&mixed), compute_total_mass(&active));
    }
}

#[test]
fn untagged_entities_are_ignored() {
    let entities = [
        body("a", [1.0, 1.0, 1.0], 1.0, 1.0),
        Entity::new("plain", Point3::new(9.0, 9.0, 9.0), None),
    ];
    let summary = summarize(&entities).unwrap();
    assert_eq!(summary.active_count, 1);
    assert_eq!(summary.center_of_mass, Point3::new(1.0, 1.0, 1.0));
}

#[test]
fn all_inactive_falls_back_to_origin() {
    let entities = [inactive("a", [3.0, 3.0, 3.0], 1.0, 1.0)];
    assert_eq!(compute_center_of_mass(&entities), Ok(Point3::origin()));
}

#[test]
fn repeated_aggregation_is_identical() {
    let entities: Vec<Entity> = (0..50)
        .map(|i| {
            let f = i as Real * 0.37;
            body(&format!("e{i}"), [f.sin(), f.cos(), f], 1.0 + f, 0.3)
        })
        .collect();
    let first = compute_center_of_mass(&entities).unwrap();
    let second = compute_center_of_mass(&entities).unwrap();
    assert_eq!(first.coords.as_slice(), second.coords.as_slice());
}

#[test]
fn active_body_without_density_is_a_fault() {
    let bag = PropertyBag {
        name: "half-set-up".into(),
        active: Some(true),
        volume: Some(1.0),
        ..Default::default()
    };
    assert_eq!(
        compute_center_of_mass([&bag]),
        Err(MassError::MissingAttribute {
            entity: "half-set-up".into(),
            attribute: MassAttribute::Density,
        })
    );
}

#[test]
fn inactive_body_without_attributes_is_never_read() {
    let bags = [
        PropertyBag {
            name: "bare".into(),
            active: Some(false),
            ..Default::default()
        },
        PropertyBag {
            name: "untagged".into(),
            ..Default::default()
        },
        PropertyBag {
            name: "ok".into(),
            active: Some(true),
            density: Some(2.0),
            volume: Some(2.0),
            position: Point3::new(0.0, 1.0, 0.0),
        },
    ];
    assert_eq!(compute_center_of_mass(&bags), Ok(Point3::new(0.0, 1.0, 0.0)));
    assert_eq!(compute_total_mass(&bags), Ok(4.0));
}

#[test]
fn weighted_centroid_in_three_dimensions() {
    let entities = [
        body("a", [1.0, 0.0, 0.0], 1.0, 1.0),
        body("b", [0.0, 1.0, 0.0], 1.0, 1.0),
        body("c", [0.0, 0.0, 1.0], 2.0, 1.0),
    ];
    let com = compute_center_of_mass(&entities).unwrap();
    approx::assert_relative_eq!(com, Point3::new(0.25, 0.25, 0.5));
}
