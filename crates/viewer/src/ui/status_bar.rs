//! Bottom status bar: object count, selection, camera pose

use eframe::egui;

use crate::state::SceneState;
use crate::viewport::ViewportPanel;

pub fn show(ui: &mut egui::Ui, scene: &SceneState, viewport: &ViewportPanel) {
    ui.horizontal(|ui| {
        ui.label(format!("{} objects", scene.objects().len()));
        ui.separator();
        match scene.selected() {
            Some(obj) if !obj.name.is_empty() => ui.label(format!("Selected: {}", obj.name)),
            Some(obj) => ui.label(format!("Selected: {}", obj.id)),
            None => ui.label("Nothing selected"),
        };
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let camera = viewport.camera();
            ui.label(format!(
                "Height {:.0}  Tilt {:.0}°",
                camera.height(),
                camera.tilt_degrees()
            ));
        });
    });
}
