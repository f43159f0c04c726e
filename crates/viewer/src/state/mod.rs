pub mod scene;
pub mod settings;

pub use scene::SceneState;
pub use settings::{AppSettings, GridSettings, ViewportSettings};
