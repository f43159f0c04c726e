//! The object registry: the authoritative list of scene objects plus the
//! single current selection.
//!
//! Mutations that change what is rendered bump `version`; the model cache
//! compares against it to decide whether to rebuild. Selection changes do
//! not bump the version, geometry is unaffected by them.

mod object_ops;
pub mod persistence;

use shared::{MapSettings, ObjectId, SceneObjectRecord};

pub struct SceneState {
    objects: Vec<SceneObjectRecord>,
    selected_id: Option<ObjectId>,
    map_settings: MapSettings,
    version: u64,
    /// Largest numeric id issued or loaded so far, so ids stay unique
    /// even when two objects are created within the same millisecond.
    last_issued: u64,
}

impl SceneState {
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
            selected_id: None,
            map_settings: MapSettings::default(),
            version: 0,
            last_issued: 0,
        }
    }

    /// Monotonic counter of geometry-affecting mutations
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn objects(&self) -> &[SceneObjectRecord] {
        &self.objects
    }

    pub fn get_object(&self, id: &str) -> Option<&SceneObjectRecord> {
        self.objects.iter().find(|o| o.id == id)
    }

    pub fn selected_id(&self) -> Option<&ObjectId> {
        self.selected_id.as_ref()
    }

    /// The selected record, resolved against the live object list
    pub fn selected(&self) -> Option<&SceneObjectRecord> {
        self.selected_id.as_deref().and_then(|id| self.get_object(id))
    }

    pub fn map_settings(&self) -> &MapSettings {
        &self.map_settings
    }

    pub(crate) fn bump(&mut self) {
        self.version += 1;
    }
}

impl Default for SceneState {
    fn default() -> Self {
        Self::new()
    }
}
