//! Left panel: object list plus properties of the selected object

use eframe::egui;
use shared::{ObjectPatch, Vec3Record};

use crate::state::SceneState;
use crate::viewport::ViewportPanel;

pub fn show(ui: &mut egui::Ui, scene: &mut SceneState, viewport: &ViewportPanel) {
    ui.heading("Objects");
    ui.separator();

    // ── Object list ───────────────────────────────────────────
    let mut clicked_id = None;
    egui::ScrollArea::vertical()
        .max_height(ui.available_height() * 0.5)
        .show(ui, |ui| {
            for obj in scene.objects() {
                let selected = scene.selected_id() == Some(&obj.id);
                let label = if obj.name.is_empty() {
                    format!("{} ({})", obj.object_type, obj.id)
                } else {
                    obj.name.clone()
                };
                if ui.selectable_label(selected, label).clicked() {
                    clicked_id = Some((obj.id.clone(), selected));
                }
            }
        });
    if let Some((id, was_selected)) = clicked_id {
        if was_selected {
            scene.clear_selection();
        } else {
            scene.select_object(&id);
        }
    }

    // ── Properties ────────────────────────────────────────────
    ui.separator();
    if let Some(selected) = scene.selected().cloned() {
        ui.heading("Properties");
        ui.label(format!("Type: {}", selected.object_type));
        ui.label(format!("Id: {}", selected.id));

        let mut name = selected.name.clone();
        ui.horizontal(|ui| {
            ui.label("Name:");
            ui.text_edit_singleline(&mut name);
        });
        if name != selected.name {
            scene.update_object(&selected.id, ObjectPatch::name(name));
        }

        let mut pos = selected.position;
        ui.horizontal(|ui| {
            ui.label("Position:");
            ui.add(egui::DragValue::new(&mut pos.x).speed(1.0).prefix("x "));
            ui.add(egui::DragValue::new(&mut pos.z).speed(1.0).prefix("z "));
        });
        if pos != selected.position {
            scene.update_object(&selected.id, ObjectPatch::position(pos));
        }

        let mut rot_y = selected.rotation.y.to_degrees();
        ui.horizontal(|ui| {
            ui.label("Rotation:");
            ui.add(
                egui::DragValue::new(&mut rot_y)
                    .speed(1.0)
                    .suffix("°"),
            );
        });
        if (rot_y.to_radians() - selected.rotation.y).abs() > 1e-9 {
            scene.update_object(
                &selected.id,
                ObjectPatch {
                    rotation: Some(Vec3Record::new(
                        selected.rotation.x,
                        rot_y.to_radians(),
                        selected.rotation.z,
                    )),
                    ..Default::default()
                },
            );
        }

        if ui.button("Remove").clicked() {
            scene.remove_object(&selected.id);
        }
    } else {
        ui.label("Click an object to select it.");
    }

    // ── Build problems ────────────────────────────────────────
    let errors = viewport.builder_errors();
    if !errors.is_empty() {
        ui.separator();
        ui.colored_label(egui::Color32::LIGHT_RED, "Build problems");
        for (id, msg) in errors {
            ui.label(format!("{id}: {msg}"));
        }
    }
}
