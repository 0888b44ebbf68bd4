use display_testing::TestDisplay;
use embedded_graphics::pixelcolor::Gray4;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

#[test]
fn test_display_creation() {
    let t = TestDisplay::new(296, 128);
    assert_eq!(t.component_count(), 0);
}

#[test]
fn test_query_by_test_id_empty() {
    let t = TestDisplay::new(296, 128);
    assert!(t.query_by_test_id("nonexistent").is_none());
}

#[test]
fn test_fresh_display_is_white() {
    let t = TestDisplay::new(32, 32);
    t.assert_region_uniform(Rectangle::new(Point::zero(), Size::new(32, 32)), Gray4::WHITE)
        .unwrap();
}

#[test]
fn test_pixel_assertions_after_draw() {
    let mut t = TestDisplay::new(64, 64);
    Rectangle::new(Point::new(10, 10), Size::new(20, 10))
        .into_styled(PrimitiveStyle::with_fill(Gray4::BLACK))
        .draw(&mut *t)
        .unwrap();

    t.assert_pixel(15, 15, Gray4::BLACK).unwrap();
    t.assert_pixel(5, 5, Gray4::WHITE).unwrap();
    t.assert_region_uniform(Rectangle::new(Point::new(10, 10), Size::new(20, 10)), Gray4::BLACK)
        .unwrap();
    t.assert_region_contains(Rectangle::new(Point::zero(), Size::new(64, 64)), Gray4::BLACK)
        .unwrap();
    assert_eq!(
        t.pixel_count_of_color(Rectangle::new(Point::zero(), Size::new(64, 64)), Gray4::BLACK),
        200
    );
}

#[test]
fn test_assert_pixel_mismatch_reports_error() {
    let t = TestDisplay::new(8, 8);
    let err = t.assert_pixel(0, 0, Gray4::BLACK).unwrap_err();
    assert!(err.contains("expected luma 0"));
}

#[test]
fn test_out_of_bounds_pixel_is_error() {
    let t = TestDisplay::new(8, 8);
    assert!(t.assert_pixel(8, 0, Gray4::WHITE).is_err());
}

#[test]
fn test_component_registry_roundtrip() {
    let mut t = TestDisplay::new(64, 64);
    t.register_component("title", "Label", (4, 6), (20, 10));

    let c = t.query_by_test_id("title").unwrap();
    assert_eq!(c.component_type, "Label");
    assert_eq!(c.bounds(), Rectangle::new(Point::new(4, 6), Size::new(20, 10)));
    t.assert_has_component("title").unwrap();
    assert_eq!(t.component_count(), 1);
}

#[test]
fn test_register_same_id_updates_in_place() {
    let mut t = TestDisplay::new(64, 64);
    t.register_component("title", "Label", (0, 0), (10, 10));
    t.register_component("title", "Label", (5, 5), (10, 10));
    assert_eq!(t.component_count(), 1);
    assert_eq!(t.query_by_test_id("title").unwrap().position, (5, 5));
}

#[test]
fn test_clear_components() {
    let mut t = TestDisplay::new(64, 64);
    t.register_component("a", "Label", (0, 0), (1, 1));
    t.clear_components();
    assert_eq!(t.component_count(), 0);
    assert!(t.assert_has_component("a").is_err());
}

#[test]
fn test_component_center() {
    let mut t = TestDisplay::new(64, 64);
    t.register_component("box", "Container", (10, 10), (20, 20));
    let c = t.query_by_test_id("box").unwrap();
    // embedded-graphics center convention: top_left + (size - 1) / 2
    assert_eq!(c.center(), Point::new(19, 19));
}
