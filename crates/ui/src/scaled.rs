//! Pixel-scaling draw adapter.
//!
//! Bitmap mono fonts come in fixed cell sizes; [`Scaled`] lets a widget draw
//! at an integer multiple of its natural size by expanding every incoming
//! pixel into a `factor`x`factor` block on the wrapped target.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

/// Draw target adapter that upscales pixels and offsets them by an origin.
///
/// A pixel drawn at `(x, y)` lands as a `factor`x`factor` block whose
/// top-left corner is `origin + (x * factor, y * factor)` on the wrapped
/// target. Clipping is delegated to the wrapped target.
pub struct Scaled<'a, D> {
    target: &'a mut D,
    origin: Point,
    factor: u32,
}

impl<'a, D> Scaled<'a, D> {
    /// Wrap `target`, scaling by `factor` (clamped to at least 1) and
    /// offsetting by `origin`.
    pub fn new(target: &'a mut D, origin: Point, factor: u32) -> Self {
        Self {
            target,
            origin,
            factor: factor.max(1),
        }
    }
}

impl<D> DrawTarget for Scaled<'_, D>
where
    D: DrawTarget,
{
    type Color = D::Color;
    type Error = D::Error;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let factor = self.factor as i32;
        let origin = self.origin;
        self.target.draw_iter(pixels.into_iter().flat_map(|p| {
            let Pixel(point, color) = p;
            let base = Point::new(origin.x + point.x * factor, origin.y + point.y * factor);
            (0..factor).flat_map(move |dy| {
                (0..factor).map(move |dx| Pixel(base + Point::new(dx, dy), color))
            })
        }))
    }
}

impl<D> Dimensions for Scaled<'_, D>
where
    D: Dimensions,
{
    fn bounding_box(&self) -> Rectangle {
        // The logical drawing area: the wrapped target's size in scaled units.
        let size = self.target.bounding_box().size;
        Rectangle::new(
            Point::zero(),
            Size::new(size.width / self.factor, size.height / self.factor),
        )
    }
}
