//! Keyboard shortcut handling

use eframe::egui;

use crate::state::{AppSettings, SceneState};
use crate::viewport::ViewportPanel;

/// Handle keyboard shortcuts for the application
pub fn handle_keyboard(
    ctx: &egui::Context,
    scene: &mut SceneState,
    settings: &mut AppSettings,
    viewport: &mut ViewportPanel,
) {
    // Don't handle shortcuts when a text field is focused
    if ctx.memory(|m| m.focused().is_some()) {
        return;
    }

    ctx.input(|i| {
        // Escape — deselect
        if i.key_pressed(egui::Key::Escape) {
            scene.clear_selection();
        }
        // Delete — remove selected object
        if i.key_pressed(egui::Key::Delete) {
            if let Some(id) = scene.selected_id().cloned() {
                scene.remove_object(&id);
            }
        }
        // R — reset camera to the overview pose
        if i.key_pressed(egui::Key::R) && !i.modifiers.command {
            viewport.reset_camera();
        }
        // G — toggle grid
        if i.key_pressed(egui::Key::G) && !i.modifiers.command {
            settings.grid.visible = !settings.grid.visible;
        }
    });
}
