//! Factory functions for creating test data.
//!
//! Records come back with an empty id; the registry assigns the real one
//! in `add_object`.

use shared::{object_types, OptionMap, SceneObjectRecord, Vec3Record};

/// Create a record of any type at the origin.
pub fn record(object_type: &str, name: &str) -> SceneObjectRecord {
    SceneObjectRecord {
        id: String::new(),
        object_type: object_type.to_string(),
        name: name.to_string(),
        description: String::new(),
        position: Vec3Record::zero(),
        rotation: Vec3Record::zero(),
        scale: Vec3Record::one(),
        options: OptionMap::new(),
    }
}

/// Create a record at a ground position.
pub fn record_at(object_type: &str, name: &str, x: f64, z: f64) -> SceneObjectRecord {
    let mut r = record(object_type, name);
    r.position = Vec3Record::new(x, 0.0, z);
    r
}

/// Create a house record at a ground position.
pub fn house_at(name: &str, x: f64, z: f64) -> SceneObjectRecord {
    record_at(object_types::HOUSE, name, x, z)
}

/// Create a tree record at a ground position.
pub fn tree_at(name: &str, x: f64, z: f64) -> SceneObjectRecord {
    record_at(object_types::TREE, name, x, z)
}

/// Create a building record at a ground position.
pub fn building_at(name: &str, x: f64, z: f64) -> SceneObjectRecord {
    record_at(object_types::BUILDING, name, x, z)
}

/// A small campus: one of each type, spread out on the map.
pub fn sample_campus() -> Vec<SceneObjectRecord> {
    vec![
        record_at(object_types::BUILDING, "Main Hall", 0.0, -60.0),
        record_at(object_types::CLASSROOM, "Block A", -60.0, 0.0),
        record_at(object_types::LABORATORY, "Chem Lab", 60.0, 0.0),
        record_at(object_types::GYMNASIUM, "Gym", 0.0, 80.0),
        record_at(object_types::PLAYGROUND, "Field", 120.0, 120.0),
        house_at("Caretaker", -100.0, -100.0),
        tree_at("Oak", 30.0, 30.0),
    ]
}

/// Saved-scene JSON in the legacy format: scalar rotation (y-axis angle)
/// and scalar uniform scale.
pub const LEGACY_SCENE_JSON: &str = r#"{
  "objects": [
    {
      "id": "1600000000001",
      "type": "house",
      "name": "Old House",
      "position": {"x": 10, "y": 0, "z": -5},
      "rotation": 1.57,
      "scale": 2
    },
    {
      "id": "1600000000002",
      "type": "tree",
      "name": "Old Tree",
      "position": {"x": -20, "y": 0, "z": 15}
    }
  ],
  "mapSettings": {"width": 512, "height": 512, "texture": "/textures/grid.png"}
}"#;
