//! Per-type model constructors.
//!
//! Every model is a group whose local origin sits on the ground plane,
//! so a record's `position.y == 0` puts the object flat on the map.
//! Parts are positioned with their centers at half-height.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

use glam::Vec3;
use shared::OptionMap;

use super::{color_option, number_option};
use crate::viewport::{mesh, node::SceneNode};

pub fn house(options: &OptionMap) -> SceneNode {
    let wall = color_option(options, "color", 0xf0f0f0);
    let roof = color_option(options, "roofColor", 0xcc4444);
    let door = color_option(options, "doorColor", 0x885533);

    let mut root = SceneNode::group();
    root.push(SceneNode::leaf_at(
        mesh::cuboid(10.0, 8.0, 10.0, wall),
        Vec3::new(0.0, 4.0, 0.0),
    ));
    // 4-segment cone rotated 45 degrees reads as a pyramid roof
    let mut roof_node = SceneNode::leaf_at(
        mesh::cone(8.0, 4.0, 4, roof),
        Vec3::new(0.0, 10.0, 0.0),
    );
    roof_node.rotation.y = FRAC_PI_4;
    root.push(roof_node);
    root.push(SceneNode::leaf_at(
        mesh::cuboid(2.0, 4.0, 0.3, door),
        Vec3::new(0.0, 2.0, 5.1),
    ));
    root
}

pub fn tree(options: &OptionMap) -> SceneNode {
    let trunk = color_option(options, "trunkColor", 0x8b4513);
    let leaves = color_option(options, "leavesColor", 0x228b22);

    let mut root = SceneNode::group();
    root.push(SceneNode::leaf_at(
        mesh::cylinder(0.8, 6.0, 8, trunk),
        Vec3::new(0.0, 3.0, 0.0),
    ));
    root.push(SceneNode::leaf_at(
        mesh::sphere(3.0, 8, 8, leaves),
        Vec3::new(0.0, 7.5, 0.0),
    ));
    root.push(SceneNode::leaf_at(
        mesh::cone(2.0, 3.0, 8, leaves),
        Vec3::new(0.0, 10.0, 0.0),
    ));
    root
}

pub fn building(options: &OptionMap) -> SceneNode {
    let wall = color_option(options, "color", 0xcccccc);
    let roof = color_option(options, "roofColor", 0x666666);
    let height = number_option(options, "height", 40.0);

    let mut root = SceneNode::group();
    root.push(SceneNode::leaf_at(
        mesh::cuboid(16.0, height, 16.0, wall),
        Vec3::new(0.0, height / 2.0, 0.0),
    ));
    root.push(SceneNode::leaf_at(
        mesh::cuboid(17.0, 1.0, 17.0, roof),
        Vec3::new(0.0, height + 0.5, 0.0),
    ));
    root
}

pub fn classroom(options: &OptionMap) -> SceneNode {
    let wall = color_option(options, "color", 0xeee8aa);
    let roof = color_option(options, "roofColor", 0x8b4513);

    let mut root = SceneNode::group();
    root.push(SceneNode::leaf_at(
        mesh::cuboid(30.0, 12.0, 12.0, wall),
        Vec3::new(0.0, 6.0, 0.0),
    ));
    root.push(SceneNode::leaf_at(
        mesh::cuboid(31.0, 1.0, 13.0, roof),
        Vec3::new(0.0, 12.5, 0.0),
    ));
    root.push(SceneNode::leaf_at(
        mesh::cuboid(4.0, 5.0, 0.5, roof),
        Vec3::new(0.0, 2.5, 6.2),
    ));
    root
}

pub fn laboratory(options: &OptionMap) -> SceneNode {
    let wall = color_option(options, "color", 0xf5f5f5);
    let trim = color_option(options, "trimColor", 0x607d8b);

    let mut root = SceneNode::group();
    root.push(SceneNode::leaf_at(
        mesh::cuboid(14.0, 10.0, 14.0, wall),
        Vec3::new(0.0, 5.0, 0.0),
    ));
    root.push(SceneNode::leaf_at(
        mesh::cylinder(1.0, 3.0, 8, trim),
        Vec3::new(4.0, 11.5, 4.0),
    ));
    root.push(SceneNode::leaf_at(
        mesh::cuboid(15.0, 0.8, 15.0, trim),
        Vec3::new(0.0, 10.4, 0.0),
    ));
    root
}

pub fn gymnasium(options: &OptionMap) -> SceneNode {
    let wall = color_option(options, "color", 0xd2b48c);
    let roof = color_option(options, "roofColor", 0x9e9e9e);

    let mut root = SceneNode::group();
    root.push(SceneNode::leaf_at(
        mesh::cuboid(24.0, 10.0, 36.0, wall),
        Vec3::new(0.0, 5.0, 0.0),
    ));
    // barrel roof: cylinder laid along the long axis
    let mut vault = SceneNode::leaf_at(
        mesh::cylinder(12.0, 36.0, 16, roof),
        Vec3::new(0.0, 10.0, 0.0),
    );
    vault.rotation.x = FRAC_PI_2;
    vault.scale = Vec3::new(1.0, 1.0, 0.4);
    root.push(vault);
    root
}

pub fn playground(options: &OptionMap) -> SceneNode {
    let field = color_option(options, "color", 0x3a8f3a);
    let track = color_option(options, "trackColor", 0xb8695b);
    let width = number_option(options, "width", 80.0);
    let length = number_option(options, "length", 120.0);

    let mut root = SceneNode::group();
    root.push(SceneNode::leaf_at(
        mesh::cuboid(width + 8.0, 0.2, length + 8.0, track),
        Vec3::new(0.0, 0.1, 0.0),
    ));
    root.push(SceneNode::leaf_at(
        mesh::cuboid(width, 0.5, length, field),
        Vec3::new(0.0, 0.35, 0.0),
    ));
    root
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn models_sit_on_the_ground() {
        for node in [
            house(&OptionMap::new()),
            tree(&OptionMap::new()),
            building(&OptionMap::new()),
            playground(&OptionMap::new()),
        ] {
            let mut items = Vec::new();
            node.collect_draw_items(glam::Mat4::IDENTITY, &mut items);
            assert!(!items.is_empty());
            for item in &items {
                for pos in item.mesh.positions() {
                    let world = item.model.transform_point3(pos);
                    assert!(world.y > -0.01, "part dips below ground: {world:?}");
                }
            }
        }
    }

    #[test]
    fn building_height_option_is_honored() {
        let mut options = OptionMap::new();
        options.insert("height".into(), serde_json::json!(60.0));
        let node = building(&options);
        let mut items = Vec::new();
        node.collect_draw_items(glam::Mat4::IDENTITY, &mut items);
        let top = items
            .iter()
            .flat_map(|i| i.mesh.positions().map(move |p| i.model.transform_point3(p).y))
            .fold(f32::MIN, f32::max);
        assert!(top > 60.0);
    }
}
