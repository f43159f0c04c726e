//! Autosave: the scene snapshot is written to the platform data directory
//! whenever the registry version moves, and offered back on startup.
//! Failures are logged and swallowed, autosave must never break the app.

use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;
use shared::SceneSnapshot;

const AUTOSAVE_FILE: &str = "autosave.json";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "campus-viewer")
}

pub fn autosave_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_dir().join(AUTOSAVE_FILE))
}

pub fn save_autosave(snapshot: &SceneSnapshot) {
    let Some(path) = autosave_path() else {
        tracing::warn!("no data directory available, autosave skipped");
        return;
    };
    if let Some(parent) = path.parent() {
        if let Err(err) = fs::create_dir_all(parent) {
            tracing::warn!(?path, %err, "could not create autosave directory");
            return;
        }
    }
    match serde_json::to_string_pretty(snapshot) {
        Ok(json) => {
            if let Err(err) = fs::write(&path, json) {
                tracing::warn!(?path, %err, "autosave write failed");
            } else {
                tracing::debug!(?path, objects = snapshot.objects.len(), "autosaved");
            }
        }
        Err(err) => tracing::warn!(%err, "autosave serialization failed"),
    }
}

pub fn load_autosave() -> Option<SceneSnapshot> {
    let path = autosave_path()?;
    if !path.exists() {
        return None;
    }
    match fs::read_to_string(&path) {
        Ok(json) => match serde_json::from_str(&json) {
            Ok(snapshot) => Some(snapshot),
            Err(err) => {
                tracing::warn!(?path, %err, "autosave file unreadable, ignoring");
                None
            }
        },
        Err(err) => {
            tracing::warn!(?path, %err, "could not read autosave file");
            None
        }
    }
}
