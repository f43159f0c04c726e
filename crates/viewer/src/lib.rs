// Library crate: exposes the headless, testable modules for integration
// tests. GUI-specific modules (app shell, panels, GL rendering) remain in
// the binary crate.

pub mod builder;
pub mod fixtures;
pub mod harness;
pub mod state;

/// Subset of viewport types that work without a GL context (camera math,
/// meshes, scene-graph nodes, picking). The renderer and the egui panel
/// stay in the binary crate.
pub mod viewport {
    pub mod camera;
    pub mod mesh;
    pub mod node;
    pub mod picking;
}
