//! Alignment arithmetic for placing widgets inside a region.
//!
//! These helpers express the screen's layout rule ("center the child in the
//! parent") as plain coordinate math: a centered child's center point equals
//! the region's center point, 1:1 with zero offset.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::label::TextAlign;

/// Horizontal placement of a `width`-wide child inside `region`.
pub fn horizontal(align: TextAlign, region: Rectangle, width: u32) -> i32 {
    match align {
        TextAlign::Left => region.top_left.x,
        TextAlign::Center => region.top_left.x + (region.size.width as i32 - width as i32) / 2,
        TextAlign::Right => region.top_left.x + region.size.width as i32 - width as i32,
    }
}

/// Vertical centering of a `height`-tall child inside `region`.
pub fn center_vertical(region: Rectangle, height: u32) -> i32 {
    region.top_left.y + (region.size.height as i32 - height as i32) / 2
}

/// Top-left origin that centers a child of `size` inside `region` on both
/// axes.
pub fn center(region: Rectangle, size: Size) -> Point {
    Point::new(
        horizontal(TextAlign::Center, region, size.width),
        center_vertical(region, size.height),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region() -> Rectangle {
        Rectangle::new(Point::new(10, 20), Size::new(100, 60))
    }

    #[test]
    fn test_left_alignment() {
        assert_eq!(horizontal(TextAlign::Left, region(), 30), 10);
    }

    #[test]
    fn test_center_alignment() {
        assert_eq!(horizontal(TextAlign::Center, region(), 30), 45);
    }

    #[test]
    fn test_right_alignment() {
        assert_eq!(horizontal(TextAlign::Right, region(), 30), 80);
    }

    #[test]
    fn test_center_vertical() {
        assert_eq!(center_vertical(region(), 20), 40);
    }

    #[test]
    fn test_center_point() {
        assert_eq!(center(region(), Size::new(30, 20)), Point::new(45, 40));
    }

    #[test]
    fn test_centered_child_shares_center_with_region() {
        let child_origin = center(region(), Size::new(30, 20));
        let child = Rectangle::new(child_origin, Size::new(30, 20));
        // Allow 1 px of rounding when parities differ.
        let delta = child.center() - region().center();
        assert!(delta.x.abs() <= 1 && delta.y.abs() <= 1);
    }

    #[test]
    fn test_oversized_child_centers_with_negative_origin() {
        let origin = center(Rectangle::new(Point::zero(), Size::new(10, 10)), Size::new(20, 10));
        assert_eq!(origin, Point::new(-5, 0));
    }
}
