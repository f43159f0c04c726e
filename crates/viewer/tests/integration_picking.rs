//! Integration tests for the picking protocol: ray casting, selectable
//! ancestor resolution, and the click/drag interaction rules.

use campus_viewer_lib::fixtures;
use campus_viewer_lib::harness::ViewerHarness;
use campus_viewer_lib::viewport::node::SceneNode;
use campus_viewer_lib::viewport::picking::{pick_scene, Ray};
use campus_viewer_lib::viewport::{mesh, node::NodeMetadata};
use glam::Vec3;

/// Project a world point into viewport coordinates for the harness camera.
fn screen_pos_of(h: &ViewerHarness, world: Vec3, viewport: egui::Rect) -> egui::Pos2 {
    let vp = h
        .camera
        .view_projection(viewport.width() / viewport.height());
    let clip = vp * world.extend(1.0);
    let ndc = clip / clip.w;
    egui::pos2(
        viewport.min.x + (ndc.x + 1.0) * 0.5 * viewport.width(),
        viewport.min.y + (1.0 - ndc.y) * 0.5 * viewport.height(),
    )
}

/// Harness with one house placed at the camera's look target, so it sits
/// near the center of the view.
fn harness_with_house() -> (ViewerHarness, String, Vec3) {
    let mut h = ViewerHarness::new();
    let target = h.camera.look_target();
    let id = h.add(fixtures::house_at("House", target.x as f64, target.z as f64));
    h.sync();
    (h, id, target)
}

#[test]
fn clicking_an_object_selects_it() {
    let (mut h, id, target) = harness_with_house();
    let viewport = ViewerHarness::viewport();
    // Aim at the middle of the house walls
    let pos = screen_pos_of(&h, target + Vec3::new(0.0, 4.0, 0.0), viewport);

    h.click(pos, viewport, false);
    assert_eq!(h.selected_id(), Some(&id));
}

#[test]
fn clicking_empty_space_clears_selection() {
    let (mut h, id, _) = harness_with_house();
    let viewport = ViewerHarness::viewport();
    h.scene.select_object(&id);

    // Top edge of the viewport is sky from any camera pose
    h.click(egui::pos2(viewport.center().x, viewport.min.y + 2.0), viewport, false);
    assert!(h.selected_id().is_none());
}

#[test]
fn click_that_ends_a_drag_is_suppressed() {
    let (mut h, id, target) = harness_with_house();
    let viewport = ViewerHarness::viewport();
    h.scene.select_object(&id);
    let other_pos = screen_pos_of(&h, target + Vec3::new(0.0, 4.0, 0.0), viewport);

    // Even a click landing on sky must not clear while dragging
    h.click(egui::pos2(viewport.center().x, viewport.min.y + 2.0), viewport, true);
    assert_eq!(h.selected_id(), Some(&id));

    h.scene.clear_selection();
    h.click(other_pos, viewport, true);
    assert!(h.selected_id().is_none());
}

#[test]
fn pick_resolves_the_bound_ancestor_of_a_part() {
    let (h, id, target) = harness_with_house();
    // Ray straight down through the roof: every part it hits is a child
    // leaf, the id comes from the bound root
    let ray = Ray {
        origin: target + Vec3::new(0.0, 50.0, 0.0),
        direction: Vec3::NEG_Y,
    };
    let hit = h.cache().pick(&ray).expect("house under the ray");
    assert_eq!(hit.id.as_deref(), Some(id.as_str()));
}

#[test]
fn nearest_of_two_objects_wins() {
    let mut h = ViewerHarness::new();
    let near = h.add(fixtures::house_at("Near", 0.0, 0.0));
    let _far = h.add(fixtures::house_at("Far", 0.0, -30.0));
    h.sync();

    // Horizontal ray through both houses at wall height
    let ray = Ray {
        origin: Vec3::new(0.0, 4.0, 50.0),
        direction: Vec3::NEG_Z,
    };
    let hit = h.cache().pick(&ray).expect("houses under the ray");
    assert_eq!(hit.id.as_deref(), Some(near.as_str()));
}

#[test]
fn hit_without_bound_metadata_yields_no_id() {
    // A bare decoration node: rendered geometry, no registry record
    let decoration = SceneNode::leaf(mesh::cuboid(4.0, 4.0, 4.0, [0.5; 3]));
    let ray = Ray {
        origin: Vec3::new(0.0, 0.0, 20.0),
        direction: Vec3::NEG_Z,
    };
    let hit = pick_scene(&ray, std::slice::from_ref(&decoration)).expect("cube under the ray");
    assert!(hit.id.is_none());
}

#[test]
fn clicking_a_decoration_clears_selection() {
    let (mut h, id, target) = harness_with_house();
    h.scene.select_object(&id);

    // Scenery next to the house: rendered and pickable, bound to nothing
    let decoration_center = target + Vec3::new(20.0, 4.0, 0.0);
    h.add_decoration(SceneNode::leaf_at(
        mesh::cuboid(8.0, 8.0, 8.0, [0.5; 3]),
        decoration_center,
    ));

    let viewport = ViewerHarness::viewport();
    let pos = screen_pos_of(&h, decoration_center, viewport);

    // The ray hits the decoration, so this is an id-less hit, not a miss
    let hit = h.pick_at(pos, viewport).expect("decoration under the ray");
    assert!(hit.id.is_none());

    h.click(pos, viewport, false);
    assert!(h.selected_id().is_none());
}

#[test]
fn metadata_follows_the_record() {
    let mut h = ViewerHarness::new();
    let id = h.add(fixtures::tree_at("Lone Tree", 12.0, -8.0));
    h.sync();

    let node = &h.cache().nodes()[0];
    let meta = node.metadata.as_ref().expect("bound metadata");
    assert_eq!(meta.id, id);
    assert_eq!(meta.name, "Lone Tree");
    let _ = NodeMetadata::from_record(h.scene.get_object(&id).unwrap());
}
