//! Text overlays drawn on top of the GL viewport

use eframe::egui;

use super::camera::DroneCamera;
use crate::state::SceneState;

pub fn draw(ui: &mut egui::Ui, rect: egui::Rect, scene: &SceneState, camera: &DroneCamera) {
    let painter = ui.painter_at(rect);

    // Camera pose, top-left corner
    painter.text(
        rect.left_top() + egui::vec2(8.0, 8.0),
        egui::Align2::LEFT_TOP,
        format!(
            "x {:.0}  z {:.0}  h {:.0}  tilt {:.0}°",
            camera.x,
            camera.z,
            camera.height(),
            camera.tilt_degrees()
        ),
        egui::FontId::monospace(12.0),
        egui::Color32::from_white_alpha(180),
    );

    // Selected object name, under the pose line
    if let Some(obj) = scene.selected() {
        let label = if obj.name.is_empty() { &obj.id } else { &obj.name };
        painter.text(
            rect.left_top() + egui::vec2(8.0, 26.0),
            egui::Align2::LEFT_TOP,
            format!("▸ {label}"),
            egui::FontId::monospace(12.0),
            egui::Color32::YELLOW,
        );
    }

    // Navigation hint while the scene is empty
    if scene.objects().is_empty() {
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            "Drag to pan, scroll to change height. Open a scene from the File menu.",
            egui::FontId::proportional(14.0),
            egui::Color32::from_white_alpha(140),
        );
    }
}
