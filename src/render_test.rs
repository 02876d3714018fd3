#![allow(clippy::float_cmp)]

use std::rc::Rc;

use super::*;
use crate::content::ContentRegion;
use crate::representation::NodeGroup;
use crate::window::{PanningWindow, Viewport};

fn laid_out_minimap() -> Minimap {
    let window = Rc::new(Viewport::new(200.0, 100.0));
    window.pan_to(300.0, 400.0);
    let content = Rc::new(ContentRegion::new(2000.0, 1000.0));

    let mut group = NodeGroup::new();
    let a = group.add_node(Rect::new(0.0, 0.0, 100.0, 100.0));
    let b = group.add_node(Rect::new(1000.0, 500.0, 200.0, 100.0));
    group.connect(a, b);

    let mut minimap = Minimap::new();
    minimap.resize(210.0, 110.0);
    minimap.set_content_representation(Some(Box::new(group)));
    minimap.set_window(Some(window));
    minimap.set_content(Some(content));
    minimap.layout();
    minimap
}

#[test]
fn empty_minimap_paints_background_and_locator() {
    let mut minimap = Minimap::new();
    minimap.resize(100.0, 80.0);
    let prims = scene(&minimap);
    assert_eq!(prims.len(), 2);
    assert_eq!(prims[0], Primitive::Rect { bounds: Rect::new(0.0, 0.0, 100.0, 80.0), role: Role::Background });
    assert_eq!(prims[1].role(), Role::Locator);
}

#[test]
fn scene_paints_bottom_to_top() {
    let prims = scene(&laid_out_minimap());
    let roles: Vec<Role> = prims.iter().map(Primitive::role).collect();
    assert_eq!(roles, vec![Role::Background, Role::Connection, Role::Node, Role::Node, Role::Locator]);
}

#[test]
fn representation_output_is_offset_by_padding() {
    let prims = scene(&laid_out_minimap());
    // Node at content (1000, 500) scaled by 0.1, then shifted by the 5px padding.
    assert_eq!(prims[3], Primitive::Rect { bounds: Rect::new(105.0, 55.0, 20.0, 10.0), role: Role::Node });
}

#[test]
fn locator_is_painted_at_its_bounds() {
    let minimap = laid_out_minimap();
    let prims = scene(&minimap);
    let Some(Primitive::Rect { bounds, role: Role::Locator }) = prims.last() else {
        panic!("locator must be painted last");
    };
    assert_eq!(*bounds, minimap.locator().bounds());
}

#[test]
fn primitive_translated_moves_lines() {
    let line = Primitive::Line { from: Point::new(0.0, 0.0), to: Point::new(1.0, 1.0), role: Role::Connection };
    assert_eq!(
        line.translated(2.0, 3.0),
        Primitive::Line { from: Point::new(2.0, 3.0), to: Point::new(3.0, 4.0), role: Role::Connection }
    );
}

#[test]
fn primitives_serialize_with_shape_tag() {
    let prim = Primitive::Rect { bounds: Rect::new(1.0, 2.0, 3.0, 4.0), role: Role::Locator };
    let json = serde_json::to_value(prim).unwrap();
    assert_eq!(json["shape"], "rect");
    assert_eq!(json["role"], "locator");
    assert_eq!(json["bounds"]["width"], 3.0);
}
