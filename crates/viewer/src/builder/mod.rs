//! Model builder: turns a type name plus an options bag into a renderable
//! scene-graph node.
//!
//! The registry treats `options` as opaque; everything type-specific —
//! which keys mean what, default colors, default dimensions — lives here.
//! An unrecognized type is logged and skipped, never an error: one bad
//! record must not take down the rest of the scene.

mod cache;
mod models;

pub use cache::ModelCache;

use shared::{object_types, OptionMap};

use crate::viewport::node::SceneNode;

/// Build the model for an object type. Returns `None` (with a warning) for
/// a type this builder does not know.
pub fn build(object_type: &str, options: &OptionMap) -> Option<SceneNode> {
    let node = match object_type {
        object_types::HOUSE => models::house(options),
        object_types::TREE => models::tree(options),
        object_types::BUILDING => models::building(options),
        object_types::CLASSROOM => models::classroom(options),
        object_types::LABORATORY => models::laboratory(options),
        object_types::GYMNASIUM => models::gymnasium(options),
        object_types::PLAYGROUND => models::playground(options),
        other => {
            tracing::warn!("unknown object type {other:?}, skipping model build");
            return None;
        }
    };
    Some(node)
}

/// Read a color option, accepting `0xRRGGBB`-style integers or
/// `"#rrggbb"` strings. Falls back to the type's default color.
pub(crate) fn color_option(options: &OptionMap, key: &str, default: u32) -> [f32; 3] {
    let hex = match options.get(key) {
        Some(value) => match parse_color(value) {
            Some(hex) => hex,
            None => {
                tracing::debug!("unparsable color option {key}={value}, using default");
                default
            }
        },
        None => default,
    };
    rgb(hex)
}

/// Read a numeric option (a dimension), falling back to a default
pub(crate) fn number_option(options: &OptionMap, key: &str, default: f32) -> f32 {
    match options.get(key).and_then(|v| v.as_f64()) {
        Some(n) => n as f32,
        None => default,
    }
}

fn parse_color(value: &serde_json::Value) -> Option<u32> {
    if let Some(n) = value.as_u64() {
        return u32::try_from(n).ok();
    }
    let s = value.as_str()?;
    let digits = s
        .strip_prefix('#')
        .or_else(|| s.strip_prefix("0x"))
        .unwrap_or(s);
    u32::from_str_radix(digits, 16).ok()
}

fn rgb(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    ]
}
