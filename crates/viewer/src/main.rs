mod app;
mod ui;
mod viewport;

// Re-export library modules so that `crate::builder`, `crate::state`, etc.
// resolve to the lib crate types everywhere in the binary.
pub use campus_viewer_lib::builder;
pub use campus_viewer_lib::state;

use app::ViewerApp;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "campus_viewer=info".into()),
        )
        .init();

    // Parse --scene <path> argument
    let initial_scene = parse_scene_arg();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Campus Viewer")
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([800.0, 500.0]),
        depth_buffer: 24,
        ..Default::default()
    };

    if let Err(e) = eframe::run_native(
        "campus-viewer",
        native_options,
        Box::new(move |cc| Ok(Box::new(ViewerApp::new(cc, initial_scene)))),
    ) {
        tracing::error!("Failed to start application: {e}");
    }
}

fn parse_scene_arg() -> Option<shared::BuildingsDocument> {
    let args: Vec<String> = std::env::args().collect();
    let mut i = 1;
    while i < args.len() {
        if args[i] == "--scene" && i + 1 < args.len() {
            let path = &args[i + 1];
            match std::fs::read_to_string(path) {
                Ok(json) => match serde_json::from_str::<shared::BuildingsDocument>(&json) {
                    Ok(doc) => {
                        tracing::info!(
                            "Loaded scene from {path} ({} buildings)",
                            doc.buildings.len()
                        );
                        return Some(doc);
                    }
                    Err(e) => {
                        tracing::error!("Failed to parse scene JSON from {path}: {e}");
                    }
                },
                Err(e) => {
                    tracing::error!("Failed to read scene file {path}: {e}");
                }
            }
            break;
        }
        i += 1;
    }
    None
}
