//! Scene-graph nodes: the renderable handles produced by the model builder.
//!
//! A node owns a local TRS transform, an optional mesh, child nodes, and an
//! optional metadata bag. The registry id travels in the metadata so a pick
//! can be resolved back to a record; decoration nodes simply carry none.

use glam::{Mat4, Quat, Vec3};
use shared::{ObjectId, SceneObjectRecord};

use super::mesh::MeshData;

/// Selection round-trip data attached to a selectable node
#[derive(Clone, Debug, PartialEq)]
pub struct NodeMetadata {
    pub id: ObjectId,
    pub name: String,
    pub description: String,
    pub object_type: String,
}

impl NodeMetadata {
    pub fn from_record(record: &SceneObjectRecord) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            description: record.description.clone(),
            object_type: record.object_type.clone(),
        }
    }
}

/// One node in the render graph
#[derive(Clone)]
pub struct SceneNode {
    pub position: Vec3,
    /// Euler angles in radians, applied in XYZ order
    pub rotation: Vec3,
    pub scale: Vec3,
    pub mesh: Option<MeshData>,
    pub children: Vec<SceneNode>,
    pub metadata: Option<NodeMetadata>,
}

impl Default for SceneNode {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
            mesh: None,
            children: Vec::new(),
            metadata: None,
        }
    }
}

/// A flattened, world-space draw command for the renderer
#[derive(Clone)]
pub struct DrawItem {
    pub model: Mat4,
    pub mesh: MeshData,
}

impl SceneNode {
    /// Empty group node
    pub fn group() -> Self {
        Self::default()
    }

    /// Leaf node holding a mesh
    pub fn leaf(mesh: MeshData) -> Self {
        Self {
            mesh: Some(mesh),
            ..Self::default()
        }
    }

    /// Leaf node holding a mesh, translated in the parent's space
    pub fn leaf_at(mesh: MeshData, position: Vec3) -> Self {
        Self {
            position,
            mesh: Some(mesh),
            ..Self::default()
        }
    }

    pub fn push(&mut self, child: SceneNode) {
        self.children.push(child);
    }

    /// Copy the record's position/rotation/scale onto this node and attach
    /// its metadata, making the node selectable.
    pub fn bind_record(&mut self, record: &SceneObjectRecord) {
        self.position = Vec3::new(
            record.position.x as f32,
            record.position.y as f32,
            record.position.z as f32,
        );
        self.rotation = Vec3::new(
            record.rotation.x as f32,
            record.rotation.y as f32,
            record.rotation.z as f32,
        );
        self.scale = Vec3::new(
            record.scale.x as f32,
            record.scale.y as f32,
            record.scale.z as f32,
        );
        self.metadata = Some(NodeMetadata::from_record(record));
    }

    pub fn local_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            self.scale,
            Quat::from_euler(glam::EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z),
            self.position,
        )
    }

    /// Flatten this subtree into world-space draw items
    pub fn collect_draw_items(&self, parent: Mat4, out: &mut Vec<DrawItem>) {
        let world = parent * self.local_matrix();
        if let Some(mesh) = &self.mesh {
            out.push(DrawItem {
                model: world,
                mesh: mesh.clone(),
            });
        }
        for child in &self.children {
            child.collect_draw_items(world, out);
        }
    }
}
