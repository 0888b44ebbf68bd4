//! Headless UI testing utilities.
//!
//! Playwright-inspired testing API for the Driver Detector screen: a
//! windowless [`Display`] with pixel assertions and a component registry
//! queryable by test ID.
//!
//! # Quick start
//!
//! ```no_run
//! use display_testing::TestDisplay;
//! use embedded_graphics::{pixelcolor::Gray4, prelude::*, primitives::{PrimitiveStyle, Rectangle}};
//!
//! let mut t = TestDisplay::new(100, 100);
//!
//! // Draw UI content
//! Rectangle::new(Point::new(10, 10), Size::new(40, 20))
//!     .into_styled(PrimitiveStyle::with_fill(Gray4::BLACK))
//!     .draw(&mut *t)
//!     .unwrap();
//!
//! // Register the component so it can be queried by test ID
//! t.register_component("header", "Container", (10, 10), (40, 20));
//!
//! // Assertions
//! t.assert_pixel(20, 15, Gray4::BLACK).unwrap();
//! t.assert_has_component("header").unwrap();
//! ```

#![warn(clippy::all)]
#![warn(clippy::dbg_macro)]
#![warn(clippy::print_stdout)]
#![allow(clippy::module_name_repetitions)]

use std::ops::{Deref, DerefMut};
use std::path::Path;

use embedded_graphics::{pixelcolor::Gray4, prelude::*, primitives::Rectangle};

pub use display::Display;

// ─────────────────────────────────────────────────────────────────────────────
// ComponentRef
// ─────────────────────────────────────────────────────────────────────────────

/// A UI component registered in the [`TestDisplay`]'s component registry.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentRef {
    /// The test identifier (analogous to `data-testid` in web testing).
    pub test_id: String,
    /// Broad component category, e.g. `"Label"`, `"Container"`.
    pub component_type: String,
    /// Top-left corner in display coordinates.
    pub position: (i32, i32),
    /// Width x height in pixels.
    pub size: (u32, u32),
}

impl ComponentRef {
    /// The bounding rectangle as an `embedded-graphics` [`Rectangle`].
    pub fn bounds(&self) -> Rectangle {
        Rectangle::new(
            Point::new(self.position.0, self.position.1),
            Size::new(self.size.0, self.size.1),
        )
    }

    /// Centre of the component's bounding box.
    pub fn center(&self) -> Point {
        self.bounds().center()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// TestDisplay
// ─────────────────────────────────────────────────────────────────────────────

/// Headless display for UI testing.
///
/// Wraps a windowless [`Display`] and adds:
/// - A component registry queryable by test ID
/// - Pixel and region assertions
/// - Screenshot capture
///
/// Derefs to [`Display`], which implements `DrawTarget`, so tests draw
/// embedded-graphics primitives directly onto `&mut *t`.
pub struct TestDisplay {
    inner: Display,
    components: Vec<ComponentRef>,
}

impl TestDisplay {
    /// Create a headless display with exact pixel dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            inner: Display::headless(width, height),
            components: Vec::new(),
        }
    }

    // ── Framebuffer access ───────────────────────────────────────────────────

    /// Return the grayscale color at `(x, y)`, or `None` if out of bounds.
    pub fn pixel_at(&self, x: u32, y: u32) -> Option<Gray4> {
        self.inner.framebuffer.get_pixel(x, y)
    }

    // ── Pixel assertions ─────────────────────────────────────────────────────

    /// Assert that pixel `(x, y)` has the expected grayscale luma.
    ///
    /// Returns `Err` with a descriptive message on mismatch.
    pub fn assert_pixel(&self, x: u32, y: u32, expected: Gray4) -> Result<(), String> {
        let actual = self
            .pixel_at(x, y)
            .ok_or_else(|| format!("Pixel ({x}, {y}) is out of bounds"))?;
        if actual.luma() != expected.luma() {
            Err(format!(
                "assert_pixel({x}, {y}): expected luma {}, got luma {}",
                expected.luma(),
                actual.luma()
            ))
        } else {
            Ok(())
        }
    }

    /// Assert that every pixel inside `rect` has the given color.
    pub fn assert_region_uniform(&self, rect: Rectangle, color: Gray4) -> Result<(), String> {
        let tl = rect.top_left;
        for dy in 0..rect.size.height {
            for dx in 0..rect.size.width {
                let x = (tl.x as u32).wrapping_add(dx);
                let y = (tl.y as u32).wrapping_add(dy);
                self.assert_pixel(x, y, color)
                    .map_err(|e| format!("assert_region_uniform failed in {rect:?}: {e}"))?;
            }
        }
        Ok(())
    }

    /// Assert that `rect` contains **at least one** pixel with the given color.
    pub fn assert_region_contains(&self, rect: Rectangle, color: Gray4) -> Result<(), String> {
        if self.pixel_count_of_color(rect, color) > 0 {
            Ok(())
        } else {
            Err(format!(
                "assert_region_contains: no pixel with luma {} found in {rect:?}",
                color.luma()
            ))
        }
    }

    /// Count how many pixels in `rect` match `color`'s luma.
    pub fn pixel_count_of_color(&self, rect: Rectangle, color: Gray4) -> usize {
        let tl = rect.top_left;
        let mut count = 0;
        for dy in 0..rect.size.height {
            for dx in 0..rect.size.width {
                let x = (tl.x as u32).wrapping_add(dx);
                let y = (tl.y as u32).wrapping_add(dy);
                if self.pixel_at(x, y).map(|p| p.luma()) == Some(color.luma()) {
                    count += 1;
                }
            }
        }
        count
    }

    // ── Component registry ───────────────────────────────────────────────────

    /// Register (or update) a component by test ID.
    ///
    /// Call this after rendering a screen to annotate where each logical
    /// component sits, so tests can use [`TestDisplay::query_by_test_id`] to
    /// look it up.
    pub fn register_component(
        &mut self,
        test_id: &str,
        component_type: &str,
        position: (i32, i32),
        size: (u32, u32),
    ) {
        if let Some(existing) = self.components.iter_mut().find(|c| c.test_id == test_id) {
            existing.component_type = component_type.to_string();
            existing.position = position;
            existing.size = size;
        } else {
            self.components.push(ComponentRef {
                test_id: test_id.to_string(),
                component_type: component_type.to_string(),
                position,
                size,
            });
        }
    }

    /// Remove all registered components.
    pub fn clear_components(&mut self) {
        self.components.clear();
    }

    /// Find a component by test ID in the registry.
    pub fn query_by_test_id(&self, test_id: &str) -> Option<&ComponentRef> {
        self.components.iter().find(|c| c.test_id == test_id)
    }

    /// Return all registered components.
    pub fn components(&self) -> &[ComponentRef] {
        &self.components
    }

    /// Total number of registered components.
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Assert that a component with `test_id` exists in the registry.
    pub fn assert_has_component(&self, test_id: &str) -> Result<(), String> {
        self.query_by_test_id(test_id)
            .ok_or_else(|| format!("Component '{test_id}' not found"))
            .map(|_| ())
    }

    // ── Screenshot utilities ─────────────────────────────────────────────────

    /// Save the current framebuffer as a PNG.
    pub fn screenshot(&self, path: impl AsRef<Path>) -> Result<(), Box<dyn std::error::Error>> {
        self.inner.screenshot(path)
    }
}

impl Deref for TestDisplay {
    type Target = Display;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for TestDisplay {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}
