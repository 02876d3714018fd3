#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn new_region_is_unzoomed() {
    let content = ContentRegion::new(1000.0, 500.0);
    assert_eq!(content.size(), Size::new(1000.0, 500.0));
    assert_eq!(content.local_to_screen().get(), Transform::IDENTITY);
    assert_eq!(content.zoom(), 1.0);
}

#[test]
fn readiness_requires_positive_extent() {
    assert!(!ContentRegion::default().is_ready());
    assert!(!ContentRegion::new(10.0, 0.0).is_ready());
    assert!(ContentRegion::new(10.0, 10.0).is_ready());
}

#[test]
fn set_zoom_keeps_translation() {
    let content = ContentRegion::new(10.0, 10.0);
    content.set_transform(Transform::scale_translate(1.0, -40.0, -20.0));
    content.set_zoom(2.0);
    let t = content.local_to_screen().get();
    assert_eq!(t.uniform_scale(), 2.0);
    assert_eq!(t.tx, -40.0);
    assert_eq!(t.ty, -20.0);
    assert_eq!(content.zoom(), 2.0);
}

#[test]
fn degenerate_zoom_reads_as_unzoomed() {
    let content = ContentRegion::new(10.0, 10.0);
    content.set_zoom(0.0);
    assert_eq!(content.zoom(), 1.0);
    content.set_zoom(-3.0);
    assert_eq!(content.zoom(), 1.0);
    content.set_zoom(f64::NAN);
    assert_eq!(content.zoom(), 1.0);
}

#[test]
fn resize_and_relocate_update_observables() {
    let content = ContentRegion::new(1.0, 1.0);
    content.resize(300.0, 200.0);
    content.relocate(7.0, 9.0);
    assert_eq!(content.width().get(), 300.0);
    assert_eq!(content.height().get(), 200.0);
    assert_eq!(content.layout_x().get(), 7.0);
    assert_eq!(content.layout_y().get(), 9.0);
}
