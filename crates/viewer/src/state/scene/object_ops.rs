//! Registry operations: add, patch, remove, select, and whole-scene
//! snapshot exchange.

use std::time::{SystemTime, UNIX_EPOCH};

use shared::{BuildingsDocument, ObjectId, ObjectPatch, SceneObjectRecord, SceneSnapshot};

use super::SceneState;

impl SceneState {
    /// Add an object, assigning it a fresh id (the record's incoming id is
    /// ignored). Returns the assigned id.
    pub fn add_object(&mut self, mut record: SceneObjectRecord) -> ObjectId {
        let id = self.fresh_id();
        record.id = id.clone();
        tracing::info!(%id, kind = %record.object_type, "add object");
        self.objects.push(record);
        self.bump();
        id
    }

    /// Shallow-merge a patch into an existing object. Unknown ids are
    /// logged and ignored; returns whether anything was updated.
    pub fn update_object(&mut self, id: &str, patch: ObjectPatch) -> bool {
        let Some(record) = self.objects.iter_mut().find(|o| o.id == id) else {
            tracing::warn!(%id, "update for unknown object ignored");
            return false;
        };
        if let Some(name) = patch.name {
            record.name = name;
        }
        if let Some(description) = patch.description {
            record.description = description;
        }
        if let Some(position) = patch.position {
            record.position = position;
        }
        if let Some(rotation) = patch.rotation {
            record.rotation = rotation;
        }
        if let Some(scale) = patch.scale {
            record.scale = scale;
        }
        if let Some(options) = patch.options {
            // options are replaced wholesale, not key-merged
            record.options = options;
        }
        self.bump();
        true
    }

    /// Remove an object. Removing the selected object clears the selection.
    pub fn remove_object(&mut self, id: &str) -> bool {
        let before = self.objects.len();
        self.objects.retain(|o| o.id != id);
        if self.objects.len() == before {
            tracing::warn!(%id, "remove for unknown object ignored");
            return false;
        }
        if self.selected_id.as_deref() == Some(id) {
            self.selected_id = None;
        }
        self.bump();
        true
    }

    /// Select an object by id. Selecting an id that is not in the registry
    /// is a logged no-op, the previous selection stays.
    pub fn select_object(&mut self, id: &str) {
        if self.get_object(id).is_none() {
            tracing::warn!(%id, "select for unknown object ignored");
            return;
        }
        self.selected_id = Some(id.to_string());
    }

    pub fn clear_selection(&mut self) {
        self.selected_id = None;
    }

    /// Snapshot the full registry state for saving
    pub fn save_scene(&self) -> SceneSnapshot {
        SceneSnapshot {
            objects: self.objects.clone(),
            map_settings: self.map_settings.clone(),
        }
    }

    /// Replace the registry with a snapshot. Selection is reset; the id
    /// counter is advanced past every loaded id.
    pub fn load_scene(&mut self, snapshot: SceneSnapshot) {
        self.absorb_ids(&snapshot.objects);
        self.objects = snapshot.objects;
        self.map_settings = snapshot.map_settings;
        self.selected_id = None;
        self.bump();
        tracing::info!(objects = self.objects.len(), "scene loaded");
    }

    /// Replace the object list from a hydration document, keeping the
    /// current map settings.
    pub fn hydrate_from_buildings(&mut self, doc: BuildingsDocument) {
        self.absorb_ids(&doc.buildings);
        self.objects = doc.buildings;
        self.selected_id = None;
        self.bump();
        tracing::info!(objects = self.objects.len(), "scene hydrated");
    }

    pub fn clear_objects(&mut self) {
        self.objects.clear();
        self.selected_id = None;
        self.bump();
    }

    /// Millisecond-timestamp id, bumped past the last issued one when two
    /// objects land in the same millisecond.
    fn fresh_id(&mut self) -> ObjectId {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        let id = now.max(self.last_issued + 1);
        self.last_issued = id;
        id.to_string()
    }

    fn absorb_ids(&mut self, records: &[SceneObjectRecord]) {
        for record in records {
            if let Ok(n) = record.id.parse::<u64>() {
                self.last_issued = self.last_issued.max(n);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{object_types, Vec3Record};

    fn tree() -> SceneObjectRecord {
        SceneObjectRecord {
            id: String::new(),
            object_type: object_types::TREE.to_string(),
            name: "Oak".to_string(),
            description: String::new(),
            position: Vec3Record::zero(),
            rotation: Vec3Record::zero(),
            scale: Vec3Record::one(),
            options: Default::default(),
        }
    }

    #[test]
    fn ids_are_unique_within_one_millisecond() {
        let mut scene = SceneState::new();
        let a = scene.add_object(tree());
        let b = scene.add_object(tree());
        let c = scene.add_object(tree());
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert!(b.parse::<u64>().unwrap() > a.parse::<u64>().unwrap());
    }

    #[test]
    fn selecting_unknown_id_keeps_previous_selection() {
        let mut scene = SceneState::new();
        let id = scene.add_object(tree());
        scene.select_object(&id);
        scene.select_object("nope");
        assert_eq!(scene.selected_id(), Some(&id));
    }

    #[test]
    fn patch_merges_only_present_fields() {
        let mut scene = SceneState::new();
        let id = scene.add_object(tree());
        let before = scene.version();
        assert!(scene.update_object(&id, shared::ObjectPatch::position(Vec3Record::new(5.0, 0.0, -3.0))));
        let obj = scene.get_object(&id).unwrap();
        assert_eq!(obj.position, Vec3Record::new(5.0, 0.0, -3.0));
        assert_eq!(obj.name, "Oak");
        assert!(scene.version() > before);
    }

    #[test]
    fn selection_does_not_bump_version() {
        let mut scene = SceneState::new();
        let id = scene.add_object(tree());
        let v = scene.version();
        scene.select_object(&id);
        scene.clear_selection();
        assert_eq!(scene.version(), v);
    }

    #[test]
    fn load_advances_id_counter_past_loaded_ids() {
        let mut scene = SceneState::new();
        let mut record = tree();
        record.id = "99999999999999".to_string();
        scene.load_scene(SceneSnapshot {
            objects: vec![record],
            map_settings: Default::default(),
        });
        let fresh = scene.add_object(tree());
        assert!(fresh.parse::<u64>().unwrap() > 99999999999999);
    }
}
