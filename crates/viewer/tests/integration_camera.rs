//! Integration tests for the drone camera: the height-to-tilt coupling,
//! pose clamping, drag panning, and wheel zoom.

use campus_viewer_lib::viewport::camera::DroneCamera;
use shared::CameraLimits;

fn camera() -> DroneCamera {
    DroneCamera::new(CameraLimits::default())
}

#[test]
fn tilt_matches_height_range_endpoints() {
    let mut cam = camera();

    cam.set_pose(0.0, 0.0, 30.0);
    assert!((cam.tilt_degrees() - 30.0).abs() < 1e-4);

    cam.set_pose(0.0, 0.0, 200.0);
    assert!((cam.tilt_degrees() - 80.0).abs() < 1e-4);

    cam.set_pose(0.0, 0.0, 115.0);
    assert!((cam.tilt_degrees() - 55.0).abs() < 1e-4);
}

#[test]
fn tilt_is_monotonic_in_height() {
    let mut cam = camera();
    let mut last = -1.0f32;
    for step in 0..=17 {
        let height = 30.0 + step as f32 * 10.0;
        cam.set_pose(0.0, 0.0, height);
        assert!(cam.tilt_degrees() > last);
        last = cam.tilt_degrees();
    }
}

#[test]
fn pose_is_clamped_to_the_height_range() {
    let mut cam = camera();

    cam.set_pose(5.0, -5.0, -20.0);
    assert_eq!(cam.height(), 30.0);
    assert!((cam.tilt_degrees() - 30.0).abs() < 1e-4);

    cam.set_pose(5.0, -5.0, 10_000.0);
    assert_eq!(cam.height(), 200.0);
    assert!((cam.tilt_degrees() - 80.0).abs() < 1e-4);
}

#[test]
fn drag_pans_against_the_drag_direction() {
    let mut cam = camera();
    cam.set_pose(0.0, 0.0, 100.0);

    // default pose looks toward -Z, so dragging right/down moves the
    // camera left/forward: move_speed 0.5 scales pixels to ground units
    cam.pan(50.0, -20.0);
    assert!((cam.x - (-25.0)).abs() < 1e-3);
    assert!((cam.z - 10.0).abs() < 1e-3);
}

#[test]
fn pan_keeps_height_and_tilt() {
    let mut cam = camera();
    cam.set_pose(0.0, 0.0, 100.0);
    let tilt = cam.tilt_degrees();

    cam.pan(200.0, 300.0);
    assert_eq!(cam.height(), 100.0);
    assert_eq!(cam.tilt_degrees(), tilt);
}

#[test]
fn wheel_zoom_steps_height_and_retilts() {
    let mut cam = camera();
    cam.set_pose(0.0, 0.0, 115.0);
    let tilt_before = cam.tilt_degrees();

    // deltas are down-positive like DOM wheel events: any positive
    // amount is one fixed step down in height
    cam.zoom(37.0);
    assert_eq!(cam.height(), 105.0);
    assert!(cam.tilt_degrees() < tilt_before);

    cam.zoom(-1.0);
    assert_eq!(cam.height(), 115.0);

    cam.zoom(0.0);
    assert_eq!(cam.height(), 115.0);
}

#[test]
fn zoom_saturates_at_the_range_ends() {
    let mut cam = camera();
    cam.set_pose(0.0, 0.0, 35.0);
    cam.zoom(1.0);
    assert_eq!(cam.height(), 30.0);
    cam.zoom(1.0);
    assert_eq!(cam.height(), 30.0);

    cam.set_pose(0.0, 0.0, 195.0);
    cam.zoom(-1.0);
    assert_eq!(cam.height(), 200.0);
    cam.zoom(-1.0);
    assert_eq!(cam.height(), 200.0);
}

#[test]
fn shrinking_the_height_range_reclamps_the_pose() {
    let mut cam = camera();
    cam.set_pose(12.0, -7.0, 180.0);

    let limits = CameraLimits {
        max_height: 100.0,
        ..CameraLimits::default()
    };
    cam.set_limits(limits);
    assert_eq!(cam.height(), 100.0);
    assert!((cam.tilt_degrees() - limits.max_tilt).abs() < 1e-4);
    assert_eq!(cam.x, 12.0);
    assert_eq!(cam.z, -7.0);

    // widening the range back leaves the pose where it is
    cam.set_limits(CameraLimits::default());
    assert_eq!(cam.height(), 100.0);
}

#[test]
fn camera_looks_ahead_toward_negative_z() {
    let mut cam = camera();
    cam.set_pose(10.0, 40.0, 30.0);

    let target = cam.look_target();
    assert_eq!(target.y, 0.0);
    assert_eq!(target.x, 10.0);
    // 30 degrees of tilt puts the look point well ahead of the camera
    assert!(target.z < 40.0 - 30.0);
}

#[test]
fn screen_center_ray_points_at_the_look_target() {
    let cam = camera();
    let rect = egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(1024.0, 768.0));
    let ray = cam.screen_ray(rect.center(), rect);

    let expected = (cam.look_target() - cam.eye_position()).normalize();
    assert!((ray.direction - expected).length() < 1e-3);
    assert!(ray.direction.y < 0.0);
}
