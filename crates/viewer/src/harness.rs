//! Headless test harness: registry, camera, and model cache wired together
//! without a window or GL context, so the interaction protocols can be
//! exercised from integration tests.

use egui::{Pos2, Rect};
use shared::{ObjectId, ObjectPatch, SceneObjectRecord, SceneSnapshot};

use crate::builder::ModelCache;
use crate::state::SceneState;
use crate::viewport::camera::DroneCamera;
use crate::viewport::node::SceneNode;
use crate::viewport::picking::{PickHit, Ray};

pub struct ViewerHarness {
    pub scene: SceneState,
    pub camera: DroneCamera,
    cache: ModelCache,
}

impl ViewerHarness {
    pub fn new() -> Self {
        Self {
            scene: SceneState::new(),
            camera: DroneCamera::new(Default::default()),
            cache: ModelCache::new(),
        }
    }

    /// A 1024x768 viewport rect, the shape every headless test assumes
    pub fn viewport() -> Rect {
        Rect::from_min_size(Pos2::ZERO, egui::vec2(1024.0, 768.0))
    }

    // ── Scene manipulation ────────────────────────────────────

    pub fn add(&mut self, record: SceneObjectRecord) -> ObjectId {
        self.scene.add_object(record)
    }

    pub fn add_all(&mut self, records: Vec<SceneObjectRecord>) -> Vec<ObjectId> {
        records
            .into_iter()
            .map(|r| self.scene.add_object(r))
            .collect()
    }

    pub fn update(&mut self, id: &str, patch: ObjectPatch) -> bool {
        self.scene.update_object(id, patch)
    }

    pub fn remove(&mut self, id: &str) -> bool {
        self.scene.remove_object(id)
    }

    pub fn save(&self) -> SceneSnapshot {
        self.scene.save_scene()
    }

    pub fn load(&mut self, snapshot: SceneSnapshot) {
        self.scene.load_scene(snapshot);
    }

    // ── Model cache ───────────────────────────────────────────

    /// Rebuild the model cache if the registry has moved since the last
    /// sync. Mirrors what the viewport does once per frame.
    pub fn sync(&mut self) {
        if !self.cache.is_valid(self.scene.version()) {
            self.cache
                .rebuild(self.scene.objects(), self.scene.version());
        }
    }

    pub fn cache(&self) -> &ModelCache {
        &self.cache
    }

    /// Place a decoration node (no bound record) into the cached scene.
    /// Syncs first so a pending rebuild cannot drop it straight away.
    pub fn add_decoration(&mut self, node: SceneNode) {
        self.sync();
        self.cache.push_node(node);
    }

    // ── Picking protocol ──────────────────────────────────────

    /// Ray through a viewport position from the current camera pose
    pub fn ray_at(&self, pos: Pos2, viewport: Rect) -> Ray {
        self.camera.screen_ray(pos, viewport)
    }

    /// Cast against the cached scene. Call `sync` first.
    pub fn pick_at(&self, pos: Pos2, viewport: Rect) -> Option<PickHit> {
        self.cache.pick(&self.ray_at(pos, viewport))
    }

    /// Run the full click protocol: a click that ends a camera drag is
    /// suppressed; otherwise a hit on a selectable object selects it and
    /// anything else clears the selection.
    pub fn click(&mut self, pos: Pos2, viewport: Rect, dragging: bool) {
        if dragging {
            return;
        }
        self.sync();
        match self.pick_at(pos, viewport).and_then(|hit| hit.id) {
            Some(id) => self.scene.select_object(&id),
            None => self.scene.clear_selection(),
        }
    }

    // ── Inspection ────────────────────────────────────────────

    pub fn object_count(&self) -> usize {
        self.scene.objects().len()
    }

    pub fn selected_id(&self) -> Option<&ObjectId> {
        self.scene.selected_id()
    }

    pub fn model_count(&self) -> usize {
        self.cache.nodes().len()
    }
}

impl Default for ViewerHarness {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn new_harness_is_empty() {
        let h = ViewerHarness::new();
        assert_eq!(h.object_count(), 0);
        assert!(h.selected_id().is_none());
    }

    #[test]
    fn sync_builds_one_model_per_object() {
        let mut h = ViewerHarness::new();
        h.add_all(fixtures::sample_campus());
        h.sync();
        assert_eq!(h.model_count(), h.object_count());
    }

    #[test]
    fn sync_is_version_gated() {
        let mut h = ViewerHarness::new();
        h.add(fixtures::tree_at("t", 0.0, 0.0));
        h.sync();
        h.sync();
        assert_eq!(h.cache().rebuild_count(), 1);
    }
}
