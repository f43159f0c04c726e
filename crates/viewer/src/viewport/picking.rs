//! Ray picking against the scene graph.
//!
//! A click becomes a world-space ray; the graph is walked recursively, every
//! mesh is tested via its world-space AABB, and the nearest hit wins. The
//! selectable id for a hit is the closest ancestor (or the node itself) that
//! carries metadata — decoration nodes without an id resolve to `None`.

use glam::{Mat4, Vec3};
use shared::ObjectId;

use super::mesh::MeshData;
use super::node::SceneNode;

/// A ray in world space
#[derive(Clone, Copy, Debug)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

/// Axis-aligned bounding box
#[derive(Clone, Copy, Debug)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Bounds of a mesh in its local space. `None` for an empty mesh.
    pub fn from_mesh(mesh: &MeshData) -> Option<Self> {
        let mut min = Vec3::splat(f32::MAX);
        let mut max = Vec3::splat(f32::MIN);
        let mut any = false;
        for p in mesh.positions() {
            min = min.min(p);
            max = max.max(p);
            any = true;
        }
        any.then_some(Self { min, max })
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Bounds of this box transformed into another space (all 8 corners)
    pub fn transformed(&self, matrix: &Mat4) -> Self {
        let mut min = Vec3::splat(f32::MAX);
        let mut max = Vec3::splat(f32::MIN);
        for i in 0..8 {
            let corner = Vec3::new(
                if i & 1 == 0 { self.min.x } else { self.max.x },
                if i & 2 == 0 { self.min.y } else { self.max.y },
                if i & 4 == 0 { self.min.z } else { self.max.z },
            );
            let p = matrix.transform_point3(corner);
            min = min.min(p);
            max = max.max(p);
        }
        Self { min, max }
    }
}

/// Ray-AABB intersection using the slab method.
/// Returns the distance along the ray to the nearest hit, or None.
pub fn ray_aabb(ray: &Ray, aabb: &Aabb) -> Option<f32> {
    let inv = Vec3::new(
        1.0 / ray.direction.x,
        1.0 / ray.direction.y,
        1.0 / ray.direction.z,
    );

    let t1 = (aabb.min.x - ray.origin.x) * inv.x;
    let t2 = (aabb.max.x - ray.origin.x) * inv.x;
    let t3 = (aabb.min.y - ray.origin.y) * inv.y;
    let t4 = (aabb.max.y - ray.origin.y) * inv.y;
    let t5 = (aabb.min.z - ray.origin.z) * inv.z;
    let t6 = (aabb.max.z - ray.origin.z) * inv.z;

    let tmin = t1.min(t2).max(t3.min(t4)).max(t5.min(t6));
    let tmax = t1.max(t2).min(t3.max(t4)).min(t5.max(t6));

    if tmax < 0.0 || tmin > tmax {
        return None;
    }
    Some(if tmin < 0.0 { tmax } else { tmin })
}

/// Result of a pick: the nearest intersected node's resolved id (if any
/// ancestor carried one) and the hit distance.
#[derive(Clone, Debug)]
pub struct PickHit {
    pub id: Option<ObjectId>,
    pub distance: f32,
}

/// Pick the nearest mesh intersected by the ray across all root nodes.
/// Returns `None` when the ray hits nothing at all.
pub fn pick_scene(ray: &Ray, roots: &[SceneNode]) -> Option<PickHit> {
    let mut best: Option<PickHit> = None;
    for node in roots {
        pick_node(ray, node, Mat4::IDENTITY, None, &mut best);
    }
    best
}

fn pick_node(
    ray: &Ray,
    node: &SceneNode,
    parent: Mat4,
    inherited_id: Option<&ObjectId>,
    best: &mut Option<PickHit>,
) {
    let world = parent * node.local_matrix();
    // The innermost id on the path from the root stands in for walking the
    // parent chain back up from a hit.
    let id = node.metadata.as_ref().map(|m| &m.id).or(inherited_id);

    if let Some(mesh) = &node.mesh {
        if let Some(local) = Aabb::from_mesh(mesh) {
            let bounds = local.transformed(&world);
            if let Some(distance) = ray_aabb(ray, &bounds) {
                if best.as_ref().is_none_or(|b| distance < b.distance) {
                    *best = Some(PickHit {
                        id: id.cloned(),
                        distance,
                    });
                }
            }
        }
    }

    for child in &node.children {
        pick_node(ray, child, world, id, best);
    }
}
