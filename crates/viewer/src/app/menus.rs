//! Menu bar: file and view menus

use eframe::egui;
use shared::{BuildingsDocument, SceneSnapshot};

use crate::state::{AppSettings, SceneState};
use crate::viewport::ViewportPanel;

pub fn file_menu(ui: &mut egui::Ui, scene: &mut SceneState) {
    ui.menu_button("File", |ui| {
        if ui.button("New scene").clicked() {
            scene.clear_objects();
            ui.close_menu();
        }
        if ui.button("Open...").clicked() {
            ui.close_menu();
            if let Some(path) = rfd::FileDialog::new()
                .set_title("Open scene")
                .add_filter("JSON", &["json"])
                .pick_file()
            {
                match std::fs::read_to_string(&path) {
                    Ok(json) => match parse_scene_file(&json) {
                        Ok(snapshot) => {
                            scene.load_scene(snapshot);
                            tracing::info!("Loaded scene from {}", path.display());
                        }
                        Err(e) => tracing::error!("Failed to parse scene: {e}"),
                    },
                    Err(e) => tracing::error!("Failed to read file: {e}"),
                }
            }
        }
        if ui.button("Save as...").clicked() {
            ui.close_menu();
            if let Some(path) = rfd::FileDialog::new()
                .set_title("Save scene")
                .add_filter("JSON", &["json"])
                .set_file_name("campus.json")
                .save_file()
            {
                match serde_json::to_string_pretty(&scene.save_scene()) {
                    Ok(json) => {
                        if let Err(e) = std::fs::write(&path, json) {
                            tracing::error!("Failed to write scene: {e}");
                        } else {
                            tracing::info!("Saved scene to {}", path.display());
                        }
                    }
                    Err(e) => tracing::error!("Failed to serialize scene: {e}"),
                }
            }
        }
        ui.separator();
        if ui.button("Quit").clicked() {
            std::process::exit(0);
        }
    });
}

pub fn view_menu(
    ui: &mut egui::Ui,
    settings: &mut AppSettings,
    viewport: &mut ViewportPanel,
    show_object_panel: &mut bool,
) {
    ui.menu_button("View", |ui| {
        if ui.button("Reset camera").clicked() {
            viewport.reset_camera();
            ui.close_menu();
        }
        ui.checkbox(show_object_panel, "Object panel");
        ui.checkbox(&mut settings.grid.visible, "Grid");
    });
}

/// Accept either a saved snapshot (`{objects, mapSettings}`) or a raw
/// buildings document (`{buildings}`). Both shapes default all fields, so
/// the key decides.
fn parse_scene_file(json: &str) -> Result<SceneSnapshot, serde_json::Error> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    if value.get("buildings").is_some() {
        let doc: BuildingsDocument = serde_json::from_value(value)?;
        Ok(SceneSnapshot {
            objects: doc.buildings,
            map_settings: Default::default(),
        })
    } else {
        serde_json::from_value(value)
    }
}
