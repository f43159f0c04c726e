use std::collections::HashMap;

use glam::Mat4;
use shared::{ObjectId, SceneObjectRecord};

use crate::viewport::node::{DrawItem, SceneNode};
use crate::viewport::picking::{pick_scene, PickHit, Ray};

/// Built models for the current scene, rebuilt when the registry version
/// moves. Holding the flattened draw list here keeps the per-frame paint
/// path allocation-free apart from one clone.
pub struct ModelCache {
    nodes: Vec<SceneNode>,
    draw_items: Vec<DrawItem>,
    errors: HashMap<ObjectId, String>,
    version: u64,
    rebuild_count: u64,
}

impl ModelCache {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            draw_items: Vec::new(),
            errors: HashMap::new(),
            // sentinel so the first sync always rebuilds
            version: u64::MAX,
            rebuild_count: 0,
        }
    }

    /// True when the cache already reflects this registry version.
    pub fn is_valid(&self, scene_version: u64) -> bool {
        self.version == scene_version
    }

    /// Rebuild every model from the records. Records whose type has no
    /// model are collected into `errors` and skipped.
    pub fn rebuild(&mut self, records: &[SceneObjectRecord], scene_version: u64) {
        self.nodes.clear();
        self.errors.clear();
        for record in records {
            match crate::builder::build(&record.object_type, &record.options) {
                Some(mut node) => {
                    node.bind_record(record);
                    self.nodes.push(node);
                }
                None => {
                    self.errors.insert(
                        record.id.clone(),
                        format!("no model for type {:?}", record.object_type),
                    );
                }
            }
        }
        self.draw_items.clear();
        for node in &self.nodes {
            node.collect_draw_items(Mat4::IDENTITY, &mut self.draw_items);
        }
        self.version = scene_version;
        self.rebuild_count += 1;
        tracing::debug!(
            objects = records.len(),
            draws = self.draw_items.len(),
            skipped = self.errors.len(),
            "rebuilt model cache"
        );
    }

    /// Add a node that belongs to no registry record (scenery that renders
    /// and intercepts picks but resolves to no id). Dropped on the next
    /// rebuild like everything else.
    pub fn push_node(&mut self, node: SceneNode) {
        node.collect_draw_items(Mat4::IDENTITY, &mut self.draw_items);
        self.nodes.push(node);
    }

    pub fn nodes(&self) -> &[SceneNode] {
        &self.nodes
    }

    pub fn draw_items_clone(&self) -> Vec<DrawItem> {
        self.draw_items.clone()
    }

    pub fn errors(&self) -> &HashMap<ObjectId, String> {
        &self.errors
    }

    pub fn rebuild_count(&self) -> u64 {
        self.rebuild_count
    }

    /// Cast a ray against the cached scene graph.
    pub fn pick(&self, ray: &Ray) -> Option<PickHit> {
        pick_scene(ray, &self.nodes)
    }
}

impl Default for ModelCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{object_types, Vec3Record};

    fn record(id: &str, ty: &str) -> SceneObjectRecord {
        SceneObjectRecord {
            id: id.into(),
            object_type: ty.into(),
            name: String::new(),
            description: String::new(),
            position: Vec3Record::zero(),
            rotation: Vec3Record::zero(),
            scale: Vec3Record::one(),
            options: Default::default(),
        }
    }

    #[test]
    fn rebuild_is_version_gated() {
        let mut cache = ModelCache::new();
        assert!(!cache.is_valid(0));
        cache.rebuild(&[record("1", object_types::HOUSE)], 1);
        assert!(cache.is_valid(1));
        assert!(!cache.is_valid(2));
        assert_eq!(cache.rebuild_count(), 1);
    }

    #[test]
    fn pushed_nodes_last_until_the_next_rebuild() {
        let mut cache = ModelCache::new();
        cache.rebuild(&[record("1", object_types::HOUSE)], 1);
        cache.push_node(crate::viewport::node::SceneNode::group());
        assert_eq!(cache.nodes().len(), 2);

        cache.rebuild(&[record("1", object_types::HOUSE)], 2);
        assert_eq!(cache.nodes().len(), 1);
    }

    #[test]
    fn unknown_types_land_in_errors() {
        let mut cache = ModelCache::new();
        cache.rebuild(
            &[record("1", object_types::TREE), record("2", "volcano")],
            1,
        );
        assert_eq!(cache.nodes().len(), 1);
        assert!(cache.errors().contains_key("2"));
    }
}
