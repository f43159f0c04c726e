//! Shared data model for the campus viewer.
//!
//! Wire-format types for scene object records, scene snapshots, and the
//! buildings document the viewer hydrates from. Legacy scalar rotation/scale
//! values are normalized to structured 3-axis form at the serde boundary, so
//! everything downstream can assume the canonical shape.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Unique identifier of a scene object
pub type ObjectId = String;

/// Free-form, type-dependent object configuration (colors, dimensions, ...).
/// The registry passes this through opaquely; only the model builder
/// interprets it.
pub type OptionMap = HashMap<String, serde_json::Value>;

/// Known object type names understood by the model builder
pub mod object_types {
    pub const HOUSE: &str = "house";
    pub const TREE: &str = "tree";
    pub const BUILDING: &str = "building";
    pub const CLASSROOM: &str = "classroom";
    pub const LABORATORY: &str = "laboratory";
    pub const GYMNASIUM: &str = "gymnasium";
    pub const PLAYGROUND: &str = "playground";

    pub const ALL: &[&str] = &[
        HOUSE, TREE, BUILDING, CLASSROOM, LABORATORY, GYMNASIUM, PLAYGROUND,
    ];
}

/// A 3-axis value record (position, Euler rotation in radians, or scale)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vec3Record {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub z: f64,
}

impl Vec3Record {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Identity scale
    pub fn one() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }
}

impl Default for Vec3Record {
    fn default() -> Self {
        Self::zero()
    }
}

/// One object in the campus scene.
///
/// `id` is assigned by the registry at creation time and never changes.
/// `rotation` and `scale` are always structured 3-axis records in memory;
/// the legacy wire formats (scalar y-rotation, scalar uniform scale) are
/// converted while deserializing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneObjectRecord {
    pub id: ObjectId,
    #[serde(rename = "type")]
    pub object_type: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub position: Vec3Record,
    #[serde(default, deserialize_with = "de_rotation")]
    pub rotation: Vec3Record,
    #[serde(default = "Vec3Record::one", deserialize_with = "de_scale")]
    pub scale: Vec3Record,
    #[serde(default)]
    pub options: OptionMap,
}

/// Partial update for a scene object. `None` fields are left untouched;
/// a present `options` map replaces the stored one wholesale.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObjectPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Vec3Record>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<Vec3Record>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<Vec3Record>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<OptionMap>,
}

impl ObjectPatch {
    pub fn position(pos: Vec3Record) -> Self {
        Self {
            position: Some(pos),
            ..Self::default()
        }
    }

    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

/// Ground-plane settings carried alongside the object list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapSettings {
    pub width: f64,
    pub height: f64,
    pub texture: String,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            width: 1024.0,
            height: 1024.0,
            texture: "/textures/grid.png".to_string(),
        }
    }
}

/// Full-state snapshot of the registry (save/load format)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneSnapshot {
    #[serde(default)]
    pub objects: Vec<SceneObjectRecord>,
    #[serde(default, rename = "mapSettings")]
    pub map_settings: MapSettings,
}

/// The hydration document fetched once per session:
/// `{ "buildings": [record, ...] }`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuildingsDocument {
    #[serde(default)]
    pub buildings: Vec<SceneObjectRecord>,
}

/// Camera configuration: the height range, the tilt range it maps onto,
/// and interaction speeds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraLimits {
    pub min_height: f32,
    pub max_height: f32,
    /// Tilt (downward pitch) in degrees at `min_height`
    pub min_tilt: f32,
    /// Tilt in degrees at `max_height`
    pub max_tilt: f32,
    /// Ground units per pixel of drag
    pub move_speed: f32,
    /// Height change per wheel notch
    pub zoom_step: f32,
}

impl Default for CameraLimits {
    fn default() -> Self {
        Self {
            min_height: 30.0,
            max_height: 200.0,
            min_tilt: 30.0,
            max_tilt: 80.0,
            move_speed: 0.5,
            zoom_step: 10.0,
        }
    }
}

// ── Legacy format normalization ──────────────────────────────

/// Either the canonical 3-axis record or a legacy scalar
#[derive(Deserialize)]
#[serde(untagged)]
enum AxesOrScalar {
    Axes(Vec3Record),
    Scalar(f64),
}

/// Legacy scalar rotation is a y-axis angle
fn de_rotation<'de, D>(deserializer: D) -> Result<Vec3Record, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match AxesOrScalar::deserialize(deserializer)? {
        AxesOrScalar::Axes(v) => v,
        AxesOrScalar::Scalar(y) => Vec3Record::new(0.0, y, 0.0),
    })
}

/// Legacy scalar scale is uniform on all axes
fn de_scale<'de, D>(deserializer: D) -> Result<Vec3Record, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match AxesOrScalar::deserialize(deserializer)? {
        AxesOrScalar::Axes(v) => v,
        AxesOrScalar::Scalar(s) => Vec3Record::new(s, s, s),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structured_record_round_trips() {
        let record = SceneObjectRecord {
            id: "1700000000000".to_string(),
            object_type: object_types::HOUSE.to_string(),
            name: "Dorm A".to_string(),
            description: "Student housing".to_string(),
            position: Vec3Record::new(10.0, 0.0, -20.0),
            rotation: Vec3Record::new(0.0, 1.5, 0.0),
            scale: Vec3Record::new(2.0, 1.0, 2.0),
            options: OptionMap::new(),
        };

        let json = serde_json::to_string(&record).unwrap();
        let back: SceneObjectRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn legacy_scalar_rotation_becomes_y_axis() {
        let json = r#"{"id": "1", "type": "tree", "rotation": 0.7}"#;
        let record: SceneObjectRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.rotation, Vec3Record::new(0.0, 0.7, 0.0));
    }

    #[test]
    fn legacy_scalar_scale_becomes_uniform() {
        let json = r#"{"id": "1", "type": "tree", "scale": 1.5}"#;
        let record: SceneObjectRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.scale, Vec3Record::new(1.5, 1.5, 1.5));
    }

    #[test]
    fn missing_transform_fields_default() {
        let json = r#"{"id": "1", "type": "building"}"#;
        let record: SceneObjectRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.position, Vec3Record::zero());
        assert_eq!(record.rotation, Vec3Record::zero());
        assert_eq!(record.scale, Vec3Record::one());
        assert!(record.options.is_empty());
    }

    #[test]
    fn buildings_document_tolerates_empty() {
        let doc: BuildingsDocument = serde_json::from_str("{}").unwrap();
        assert!(doc.buildings.is_empty());
    }
}
