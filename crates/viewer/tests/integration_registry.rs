//! Integration tests for the object registry: add/update/remove/select and
//! snapshot exchange, driven through the headless harness.

use campus_viewer_lib::fixtures;
use campus_viewer_lib::harness::ViewerHarness;
use shared::{ObjectPatch, SceneSnapshot, Vec3Record};

#[test]
fn removing_selected_object_clears_selection() {
    let mut h = ViewerHarness::new();
    let id = h.add(fixtures::house_at("A", 0.0, 0.0));
    h.scene.select_object(&id);
    assert_eq!(h.selected_id(), Some(&id));

    h.remove(&id);
    assert!(h.selected_id().is_none());
    assert_eq!(h.object_count(), 0);
}

#[test]
fn removing_another_object_preserves_selection() {
    let mut h = ViewerHarness::new();
    let a = h.add(fixtures::house_at("A", 0.0, 0.0));
    let b = h.add(fixtures::tree_at("B", 20.0, 0.0));

    h.scene.select_object(&a);
    h.remove(&b);
    assert_eq!(h.selected_id(), Some(&a));
    assert_eq!(h.object_count(), 1);
}

#[test]
fn update_with_unknown_id_changes_nothing() {
    let mut h = ViewerHarness::new();
    let id = h.add(fixtures::house_at("A", 1.0, 2.0));
    let version = h.scene.version();

    assert!(!h.update("not-an-id", ObjectPatch::name("ghost")));
    assert_eq!(h.scene.version(), version);
    assert_eq!(h.scene.get_object(&id).unwrap().name, "A");
}

#[test]
fn patch_leaves_absent_fields_alone() {
    let mut h = ViewerHarness::new();
    let id = h.add(fixtures::house_at("A", 1.0, 2.0));

    h.update(&id, ObjectPatch::position(Vec3Record::new(9.0, 0.0, 9.0)));
    let obj = h.scene.get_object(&id).unwrap();
    assert_eq!(obj.position, Vec3Record::new(9.0, 0.0, 9.0));
    assert_eq!(obj.name, "A");
    assert_eq!(obj.object_type, "house");
}

#[test]
fn save_load_round_trip_resets_selection() {
    let mut h = ViewerHarness::new();
    let ids = h.add_all(fixtures::sample_campus());
    h.scene.select_object(&ids[0]);

    let snapshot = h.save();

    let mut h2 = ViewerHarness::new();
    h2.load(snapshot);
    assert_eq!(h2.object_count(), ids.len());
    assert!(h2.selected_id().is_none());
    assert!(h2.scene.get_object(&ids[0]).is_some());
}

#[test]
fn select_then_remove_other_then_remove_selected() {
    let mut h = ViewerHarness::new();
    let a = h.add(fixtures::house_at("A", 0.0, 0.0));
    let b = h.add(fixtures::house_at("B", 30.0, 0.0));
    let c = h.add(fixtures::tree_at("C", -30.0, 0.0));

    h.scene.select_object(&b);
    h.remove(&c);
    assert_eq!(h.selected_id(), Some(&b));
    h.remove(&b);
    assert!(h.selected_id().is_none());
    assert_eq!(h.object_count(), 1);
    assert!(h.scene.get_object(&a).is_some());
}

#[test]
fn legacy_scene_json_loads_with_normalized_transforms() {
    let snapshot: SceneSnapshot = serde_json::from_str(fixtures::LEGACY_SCENE_JSON).unwrap();
    let mut h = ViewerHarness::new();
    h.load(snapshot);

    let house = h.scene.get_object("1600000000001").unwrap();
    assert_eq!(house.rotation, Vec3Record::new(0.0, 1.57, 0.0));
    assert_eq!(house.scale, Vec3Record::new(2.0, 2.0, 2.0));
    assert_eq!(h.scene.map_settings().width, 512.0);

    // Models build for the loaded records
    h.sync();
    assert_eq!(h.model_count(), 2);
}

#[test]
fn fresh_ids_never_collide_with_loaded_ones() {
    let snapshot: SceneSnapshot = serde_json::from_str(fixtures::LEGACY_SCENE_JSON).unwrap();
    let mut h = ViewerHarness::new();
    h.load(snapshot);

    let id = h.add(fixtures::tree_at("new", 0.0, 0.0));
    assert!(h.scene.get_object(&id).is_some());
    assert!(id.parse::<u64>().unwrap() > 1600000000002);
}
