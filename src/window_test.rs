#![allow(clippy::float_cmp)]

use std::cell::Cell;
use std::rc::Rc;

use super::*;

#[test]
fn new_viewport_starts_at_origin() {
    let vp = Viewport::new(800.0, 600.0);
    assert_eq!(vp.width().get(), 800.0);
    assert_eq!(vp.height().get(), 600.0);
    assert_eq!(vp.window_x().get(), 0.0);
    assert_eq!(vp.window_y().get(), 0.0);
}

#[test]
fn default_viewport_is_not_ready() {
    assert!(!Viewport::default().is_ready());
    assert!(!Viewport::new(100.0, 0.0).is_ready());
    assert!(Viewport::new(100.0, 1.0).is_ready());
}

#[test]
fn pan_to_sets_offsets() {
    let vp = Viewport::new(100.0, 100.0);
    vp.pan_to(30.0, -12.0);
    assert_eq!(vp.window_x().get(), 30.0);
    assert_eq!(vp.window_y().get(), -12.0);
}

#[test]
fn pan_to_same_offset_is_silent() {
    let vp = Viewport::new(100.0, 100.0);
    vp.pan_to(10.0, 20.0);

    let count = Rc::new(Cell::new(0));
    let (cx, cy) = (Rc::clone(&count), Rc::clone(&count));
    vp.window_x().subscribe(move |_, _| cx.set(cx.get() + 1));
    vp.window_y().subscribe(move |_, _| cy.set(cy.get() + 1));

    vp.pan_to(10.0, 20.0);
    assert_eq!(count.get(), 0);
}

#[test]
fn pan_to_one_axis_notifies_once() {
    let vp = Viewport::new(100.0, 100.0);
    let count = Rc::new(Cell::new(0));
    let (cx, cy) = (Rc::clone(&count), Rc::clone(&count));
    vp.window_x().subscribe(move |_, _| cx.set(cx.get() + 1));
    vp.window_y().subscribe(move |_, _| cy.set(cy.get() + 1));

    vp.pan_to(5.0, 0.0);
    assert_eq!(count.get(), 1);
}

#[test]
fn clamping_limits_offsets_to_content() {
    let vp = Viewport::new(100.0, 50.0).with_clamping(Size::new(400.0, 200.0));
    vp.pan_to(-20.0, 500.0);
    assert_eq!(vp.window_x().get(), 0.0);
    assert_eq!(vp.window_y().get(), 150.0);
}

#[test]
fn clamping_with_content_smaller_than_window_pins_to_origin() {
    let vp = Viewport::new(500.0, 500.0).with_clamping(Size::new(100.0, 100.0));
    vp.pan_to(40.0, 40.0);
    assert_eq!(vp.window_x().get(), 0.0);
    assert_eq!(vp.window_y().get(), 0.0);
}

#[test]
fn set_content_size_updates_clamp() {
    let vp = Viewport::new(100.0, 100.0).with_clamping(Size::new(200.0, 200.0));
    vp.set_content_size(Size::new(1000.0, 1000.0));
    vp.pan_to(700.0, 800.0);
    assert_eq!(vp.window_x().get(), 700.0);
    assert_eq!(vp.window_y().get(), 800.0);
}

#[test]
fn resize_updates_size_and_visible_rect() {
    let vp = Viewport::new(10.0, 10.0);
    vp.resize(320.0, 240.0);
    vp.pan_to(4.0, 6.0);
    assert_eq!(vp.visible_rect(), Rect::new(4.0, 6.0, 320.0, 240.0));
}
