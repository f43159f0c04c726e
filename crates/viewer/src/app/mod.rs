//! Main application module

mod keyboard;
mod menus;

use eframe::egui;

use crate::state::scene::persistence;
use crate::state::{AppSettings, SceneState};
use crate::ui::{object_panel, status_bar};
use crate::viewport::ViewportPanel;

/// Main application
pub struct ViewerApp {
    pub scene: SceneState,
    pub settings: AppSettings,
    viewport: ViewportPanel,
    show_object_panel: bool,
    /// Last saved scene version (for autosave)
    last_saved_version: u64,
}

impl ViewerApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        initial_scene: Option<shared::BuildingsDocument>,
    ) -> Self {
        let settings = AppSettings::load();
        let mut scene = SceneState::new();

        // Load initial scene: CLI argument takes priority, then autosave
        if let Some(doc) = initial_scene {
            scene.hydrate_from_buildings(doc);
        } else if let Some(autosave) = persistence::load_autosave() {
            scene.load_scene(autosave);
            tracing::info!("Loaded autosave scene");
        }

        let mut viewport = ViewportPanel::new(settings.camera);

        if let Some(gl) = cc.gl.as_ref() {
            viewport.init_gl(gl);
        }

        let last_saved_version = scene.version();

        Self {
            scene,
            settings,
            viewport,
            show_object_panel: true,
            last_saved_version,
        }
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Autosave scene if changed
        let current_version = self.scene.version();
        if current_version != self.last_saved_version {
            persistence::save_autosave(&self.scene.save_scene());
            self.settings.save();
            self.last_saved_version = current_version;
        }

        keyboard::handle_keyboard(ctx, &mut self.scene, &mut self.settings, &mut self.viewport);

        // ── Menu bar ──────────────────────────────────────────
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                menus::file_menu(ui, &mut self.scene);
                menus::view_menu(
                    ui,
                    &mut self.settings,
                    &mut self.viewport,
                    &mut self.show_object_panel,
                );
            });
        });

        // ── Status bar ───────────────────────────────────────
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(22.0)
            .show(ctx, |ui| {
                status_bar::show(ui, &self.scene, &self.viewport);
            });

        // ── Left panel: object list + properties ─────────────
        if self.show_object_panel {
            egui::SidePanel::left("object_panel")
                .default_width(240.0)
                .width_range(180.0..=420.0)
                .resizable(true)
                .show(ctx, |ui| {
                    object_panel::show(ui, &mut self.scene, &self.viewport);
                });
        }

        // ── Central panel: 3D viewport ───────────────────────
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                self.viewport.show(ui, &mut self.scene, &self.settings);
            });
    }

    fn on_exit(&mut self, gl: Option<&glow::Context>) {
        persistence::save_autosave(&self.scene.save_scene());
        self.settings.save();
        if let Some(gl) = gl {
            self.viewport.destroy(gl);
        }
    }
}
