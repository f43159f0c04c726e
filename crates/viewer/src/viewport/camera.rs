//! Drone-style campus camera.
//!
//! The camera hovers at `(x, height, z)` and always looks toward a ground
//! point ahead of it along -Z. Its downward tilt is slaved to its height by
//! a clamped linear mapping: low and close to the ground it looks out at a
//! shallow angle, high up it looks steeply down. Height and tilt are never
//! set independently of each other.

use glam::{Mat4, Vec3, Vec4};
use shared::CameraLimits;

use super::picking::Ray;

/// Vertical field of view in degrees
const FOV_DEGREES: f32 = 45.0;
const NEAR: f32 = 0.1;
const FAR: f32 = 1000.0;

#[derive(Clone)]
pub struct DroneCamera {
    /// Horizontal position on the ground plane
    pub x: f32,
    pub z: f32,
    /// Clamped into `[limits.min_height, limits.max_height]`; private so the
    /// clamp and the tilt coupling cannot be bypassed
    height: f32,
    /// Private for the same reason: swapping limits must re-clamp
    limits: CameraLimits,
}

impl DroneCamera {
    /// Camera at the origin, hovering at the midpoint of the height range
    pub fn new(limits: CameraLimits) -> Self {
        let mut camera = Self {
            x: 0.0,
            z: 0.0,
            height: 0.0,
            limits,
        };
        camera.reset();
        camera
    }

    pub fn reset(&mut self) {
        let mid = (self.limits.min_height + self.limits.max_height) * 0.5;
        self.set_pose(0.0, 0.0, mid);
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn limits(&self) -> &CameraLimits {
        &self.limits
    }

    /// Swap in new limits, re-clamping the stored height so it can never
    /// sit outside the new range.
    pub fn set_limits(&mut self, limits: CameraLimits) {
        self.limits = limits;
        self.set_pose(self.x, self.z, self.height);
    }

    /// Current downward tilt in degrees, always derived from height
    pub fn tilt_degrees(&self) -> f32 {
        self.height_to_tilt(self.height)
    }

    /// Linear height → tilt mapping, clamped at both ends (no extrapolation)
    pub fn height_to_tilt(&self, height: f32) -> f32 {
        let l = &self.limits;
        if height <= l.min_height {
            return l.min_tilt;
        }
        if height >= l.max_height {
            return l.max_tilt;
        }
        let ratio = (height - l.min_height) / (l.max_height - l.min_height);
        l.min_tilt + ratio * (l.max_tilt - l.min_tilt)
    }

    /// Move the camera; `height` is clamped into range before storing.
    /// Tilt follows from the stored height, so there is no tilt argument.
    pub fn set_pose(&mut self, x: f32, z: f32, height: f32) {
        self.x = x;
        self.z = z;
        self.height = height.clamp(self.limits.min_height, self.limits.max_height);
    }

    /// Grab-the-world drag: pointer deltas move the camera opposite to the
    /// drag, along the ground-projected right/forward vectors.
    pub fn pan(&mut self, delta_x: f32, delta_y: f32) {
        let forward = self.forward_on_ground();
        let right = Vec3::Y.cross(forward);

        let speed = self.limits.move_speed;
        let nx = self.x + delta_x * speed * right.x + delta_y * speed * forward.x;
        let nz = self.z + delta_x * speed * right.z + delta_y * speed * forward.z;
        self.set_pose(nx, nz, self.height);
    }

    /// Wheel zoom is a height change (one fixed step per notch), which in
    /// turn re-derives the tilt. The delta is down-positive like a DOM
    /// wheel event: a positive value descends.
    pub fn zoom(&mut self, wheel_delta: f32) {
        if wheel_delta == 0.0 {
            return;
        }
        let new_height = self.height - wheel_delta.signum() * self.limits.zoom_step;
        self.set_pose(self.x, self.z, new_height);
    }

    pub fn eye_position(&self) -> Vec3 {
        Vec3::new(self.x, self.height, self.z)
    }

    /// The ground point the camera looks at: straight ahead along -Z, at a
    /// distance that grows as the tilt gets shallower.
    pub fn look_target(&self) -> Vec3 {
        let tilt = self.tilt_degrees().to_radians();
        let look_distance = self.height * (std::f32::consts::FRAC_PI_2 - tilt).tan();
        Vec3::new(self.x, 0.0, self.z - look_distance)
    }

    /// View direction projected onto the ground plane
    pub fn forward_on_ground(&self) -> Vec3 {
        let mut dir = self.look_target() - self.eye_position();
        dir.y = 0.0;
        dir.normalize_or_zero()
    }

    /// View matrix (world -> camera)
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye_position(), self.look_target(), Vec3::Y)
    }

    /// Projection matrix (camera -> clip)
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh_gl(FOV_DEGREES.to_radians(), aspect, NEAR, FAR)
    }

    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        self.projection_matrix(aspect) * self.view_matrix()
    }

    /// Cast a ray from a surface-local pixel position into the scene.
    /// Screen y grows downward, device coordinates grow upward, hence the
    /// y flip.
    pub fn screen_ray(&self, screen_pos: egui::Pos2, rect: egui::Rect) -> Ray {
        let aspect = rect.width() / rect.height();

        let ndc_x = (screen_pos.x - rect.center().x) / (rect.width() * 0.5);
        let ndc_y = -(screen_pos.y - rect.center().y) / (rect.height() * 0.5);

        let vp_inv = self.view_projection(aspect).inverse();

        let near_world = vp_inv * Vec4::new(ndc_x, ndc_y, -1.0, 1.0);
        let far_world = vp_inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);

        let near = near_world.truncate() / near_world.w;
        let far = far_world.truncate() / far_world.w;

        Ray {
            origin: self.eye_position(),
            direction: (far - near).normalize_or_zero(),
        }
    }
}
