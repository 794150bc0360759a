// main.rs
//
// Demo of the balance-point pipeline: load a scene description (JSON), run one
// update tick and one render tick, and log what a host would draw.
//
// Run with: cargo run --features cli -- [scene.json]
// Log level comes from RUST_LOG (default: info, balance_point=debug).

use balance_point::config::SceneDescription;
use balance_point::scene::selection_total_mass;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

// No per-entity metadata in the demo
type Scene = balance_point::Scene<balance_point::MassEntity<()>>;

const SAMPLE_SCENE: &str = r#"{
    "settings": { "drawing_enabled": true },
    "groups": [
        {
            "name": "Figure",
            "display": { "scale": 0.1, "line_to_floor": true },
            "members": [
                { "name": "torso", "position": [0.0, 0.0, 1.2],
                  "mass": { "active": true, "density": 1.0, "volume": 30.0 } },
                { "name": "head",  "position": [0.0, 0.05, 1.7],
                  "mass": { "active": true, "density": 1.1, "volume": 4.5 } },
                { "name": "left_arm", "position": [-0.4, 0.0, 1.3],
                  "mass": { "active": true, "density": 1.0, "volume": 3.5 } },
                { "name": "right_arm", "position": [0.6, 0.2, 1.4],
                  "mass": { "active": true, "density": 1.0, "volume": 3.5 } },
                { "name": "prop", "position": [1.5, 0.0, 0.5],
                  "mass": { "active": false, "density": 7.8, "volume": 2.0 } }
            ]
        },
        {
            "name": "Crate",
            "display": { "color": { "r": 0.0, "g": 1.0, "b": 0.3 }, "floor_level": -0.5 },
            "members": [
                { "name": "box", "position": [3.0, 1.0, 0.0],
                  "mass": { "active": true, "density": 0.6, "volume": 1.0 } }
            ]
        }
    ]
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,balance_point=debug"));
    fmt().with_env_filter(filter).with_target(true).init();

    let description: SceneDescription = match std::env::args().nth(1) {
        Some(path) => {
            info!(path = %path, "Loading scene description");
            serde_json::from_str(&std::fs::read_to_string(&path)?)?
        },
        None => {
            info!("No scene file given, using the built-in sample");
            serde_json::from_str(SAMPLE_SCENE)?
        },
    };

    let mut scene: Scene = description.build();

    match scene.update() {
        Ok(updated) => info!(updated, "Update tick finished"),
        Err(err) => warn!(error = %err, "Update tick failed"),
    }

    for (id, group) in scene.groups() {
        let total_mass = group.total_mass()?;
        info!(
            group = %id,
            name = %group.name,
            total_mass,
            com = ?group.com_location,
            "Group"
        );
        if let Some(members) = group.members.as_ref() {
            let tagged: Vec<_> = members.iter().filter(|m| m.has_mass_properties()).collect();
            let count = tagged.len();
            let mass = selection_total_mass(tagged)?;
            info!(group = %id, tagged = count, mass, "Tagged members");
        }
    }

    for batch in scene.render() {
        info!(
            group = %batch.group,
            color = ?batch.color,
            line_width = batch.line_width,
            segments = batch.segment_count(),
            "Marker batch"
        );
    }

    Ok(())
}
