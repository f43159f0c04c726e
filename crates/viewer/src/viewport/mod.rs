//! 3D viewport panel with OpenGL rendering.
//!
//! Owns the drone camera, the model cache, and the interaction protocol:
//! dragging pans the camera, the wheel steps its height, and a click that
//! did not end a drag picks an object.

mod gl_renderer;
mod overlays;
pub use campus_viewer_lib::viewport::{camera, mesh, node, picking};

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use egui::Ui;
use shared::ObjectId;

use crate::builder::ModelCache;
use crate::state::{AppSettings, SceneState};
use camera::DroneCamera;
use gl_renderer::GlRenderer;

pub struct ViewportPanel {
    camera: DroneCamera,
    gl_renderer: Option<Arc<Mutex<GlRenderer>>>,
    cache: ModelCache,
    /// Latched while a camera drag is in flight so the click that ends it
    /// does not double as a pick
    dragging: bool,
}

impl ViewportPanel {
    pub fn new(limits: shared::CameraLimits) -> Self {
        Self {
            camera: DroneCamera::new(limits),
            gl_renderer: None,
            cache: ModelCache::new(),
            dragging: false,
        }
    }

    /// Initialize GL renderer (must be called with a GL context)
    pub fn init_gl(&mut self, gl: &glow::Context) {
        let renderer = GlRenderer::new(gl);
        self.gl_renderer = Some(Arc::new(Mutex::new(renderer)));
    }

    pub fn camera(&self) -> &DroneCamera {
        &self.camera
    }

    pub fn reset_camera(&mut self) {
        self.camera.reset();
    }

    /// Records the cache could not build a model for
    pub fn builder_errors(&self) -> &HashMap<ObjectId, String> {
        self.cache.errors()
    }

    pub fn show(&mut self, ui: &mut Ui, scene: &mut SceneState, settings: &AppSettings) {
        self.camera.set_limits(settings.camera);

        let (rect, response) =
            ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

        // ── Camera drag-pan ─────────────────────────────────
        if response.drag_started() {
            self.dragging = true;
        }
        if response.dragged() {
            let delta = response.drag_delta();
            self.camera.pan(delta.x, delta.y);
        }

        // ── Wheel zoom ──────────────────────────────────────
        if response.hovered() {
            let scroll = ui.input(|i| i.raw_scroll_delta.y);
            if scroll != 0.0 {
                // egui scroll is up-positive, DOM wheel deltas are
                // down-positive; negate so wheel-down descends
                self.camera.zoom(-scroll);
            }
        }

        // ── Rebuild models BEFORE picking ───────────────────
        if !self.cache.is_valid(scene.version()) {
            self.cache.rebuild(scene.objects(), scene.version());
        }

        // ── Click-pick ──────────────────────────────────────
        if response.clicked() && !self.dragging {
            if let Some(pos) = response.interact_pointer_pos() {
                let ray = self.camera.screen_ray(pos, rect);
                match self.cache.pick(&ray).and_then(|hit| hit.id) {
                    Some(id) => scene.select_object(&id),
                    None => scene.clear_selection(),
                }
            }
        }
        // Release the latch once the button is up again
        if self.dragging && !response.dragged() && !response.is_pointer_button_down_on() {
            self.dragging = false;
        }

        if !ui.is_rect_visible(rect) {
            return;
        }

        self.render_gl(ui, rect, scene, settings);
        overlays::draw(ui, rect, scene, &self.camera);
    }

    fn render_gl(&self, ui: &mut Ui, rect: egui::Rect, scene: &SceneState, settings: &AppSettings) {
        let Some(gl_renderer) = &self.gl_renderer else {
            return;
        };

        let renderer_clone = gl_renderer.clone();
        let camera = self.camera.clone();
        let draw_items = self.cache.draw_items_clone();
        let version = self.cache.rebuild_count();
        let grid = settings.grid;
        let bg_color = settings.viewport.background_color;
        let ground = (
            scene.map_settings().width as f32,
            scene.map_settings().height as f32,
        );

        let callback = egui::PaintCallback {
            rect,
            callback: Arc::new(eframe::egui_glow::CallbackFn::new(move |info, painter| {
                let gl = painter.gl();

                let clip = info.clip_rect_in_pixels();
                let viewport = [
                    clip.left_px as f32,
                    clip.from_bottom_px as f32,
                    clip.width_px as f32,
                    clip.height_px as f32,
                ];

                match renderer_clone.lock() {
                    Ok(mut r) => {
                        r.update_ground(gl, ground);
                        r.update_grid(gl, &grid);
                        r.sync_scene(gl, &draw_items, version);

                        let params = gl_renderer::RenderParams {
                            viewport,
                            grid_visible: grid.visible,
                            bg_color,
                        };
                        r.paint(gl, &camera, &params);
                    }
                    // one bad frame must not take down the paint loop
                    Err(e) => tracing::error!("viewport renderer unavailable this frame: {e}"),
                }
            })),
        };

        ui.painter().add(callback);
    }

    /// Tear down GPU resources. Safe to call more than once.
    pub fn destroy(&mut self, gl: &glow::Context) {
        if let Some(renderer) = self.gl_renderer.take() {
            if let Ok(r) = renderer.lock() {
                r.destroy(gl);
            }
        }
    }
}
