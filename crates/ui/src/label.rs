//! Label component for displaying text.

use embedded_graphics::{
    mono_font::{ascii::FONT_10X20, ascii::FONT_6X10, ascii::FONT_9X18_BOLD, MonoFont, MonoTextStyle},
    pixelcolor::Gray4,
    prelude::*,
    primitives::Rectangle,
    text::{Baseline, Text, TextStyleBuilder},
};

use crate::align;
use crate::scaled::Scaled;

/// Font weight variants.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FontWeight {
    /// Regular system font.
    Regular,
    /// Bold system font.
    Bold,
}

/// Horizontal text alignment within a region.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TextAlign {
    /// Flush with the region's left edge.
    Left,
    /// Centered between the region's edges.
    Center,
    /// Flush with the region's right edge.
    Right,
}

/// Base mono font plus the integer upscaling factor needed to reach a
/// nominal point size.
struct ResolvedFont {
    font: &'static MonoFont<'static>,
    scale: u32,
}

/// Label component for static text display.
///
/// The point size is nominal: it is resolved onto the fixed-cell mono fonts
/// by picking a base font for the weight and an integer scale factor, so the
/// rendered glyph cell can be slightly larger than the requested size (as a
/// platform point size is also not a pixel height).
pub struct Label<'a> {
    text: &'a str,
    point_size: u32,
    weight: FontWeight,
    align: TextAlign,
    color: Gray4,
}

impl<'a> Label<'a> {
    /// Create a new label with the given text.
    ///
    /// Defaults: 20 pt, regular weight, left-aligned, black.
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            point_size: 20,
            weight: FontWeight::Regular,
            align: TextAlign::Left,
            color: Gray4::BLACK,
        }
    }

    /// Set the nominal point size.
    pub fn point_size(mut self, size: u32) -> Self {
        self.point_size = size;
        self
    }

    /// Set the font weight.
    pub fn weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    /// Set the horizontal alignment used by [`Label::render_in`].
    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    /// Set the text color.
    pub fn color(mut self, color: Gray4) -> Self {
        self.color = color;
        self
    }

    /// The label text.
    pub fn text(&self) -> &str {
        self.text
    }

    /// The nominal point size.
    pub fn size_points(&self) -> u32 {
        self.point_size
    }

    /// The font weight.
    pub fn font_weight(&self) -> FontWeight {
        self.weight
    }

    /// The horizontal alignment.
    pub fn alignment(&self) -> TextAlign {
        self.align
    }

    /// The text color.
    pub fn text_color(&self) -> Gray4 {
        self.color
    }

    /// Pick the base font for the weight and the upscaling factor that
    /// reaches the nominal point size.
    fn resolve(&self) -> ResolvedFont {
        let (font, base_height): (&'static MonoFont<'static>, u32) = match self.weight {
            FontWeight::Regular => {
                if self.point_size <= 10 {
                    (&FONT_6X10, 10)
                } else {
                    (&FONT_10X20, 20)
                }
            }
            FontWeight::Bold => (&FONT_9X18_BOLD, 18),
        };
        ResolvedFont {
            font,
            scale: self.point_size.div_ceil(base_height).max(1),
        }
    }

    /// Rendered size in pixels.
    pub fn dimensions(&self) -> Size {
        let resolved = self.resolve();
        let cell = resolved.font.character_size;
        let spacing = resolved.font.character_spacing;
        let count = self.text.chars().count() as u32;
        let width = if count == 0 {
            0
        } else {
            count * cell.width + (count - 1) * spacing
        };
        Size::new(width * resolved.scale, cell.height * resolved.scale)
    }

    /// Render the label with its top-left corner at `origin`.
    pub fn render<D>(&self, display: &mut D, origin: Point) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Gray4>,
    {
        let resolved = self.resolve();
        let character_style = MonoTextStyle::new(resolved.font, self.color);
        let text_style = TextStyleBuilder::new().baseline(Baseline::Top).build();

        let mut scaled = Scaled::new(display, origin, resolved.scale);
        Text::with_text_style(self.text, Point::zero(), character_style, text_style)
            .draw(&mut scaled)?;

        Ok(())
    }

    /// Render the label inside `region`: horizontally placed per the label's
    /// alignment, vertically centered. Returns the placed bounds.
    pub fn render_in<D>(&self, display: &mut D, region: Rectangle) -> Result<Rectangle, D::Error>
    where
        D: DrawTarget<Color = Gray4>,
    {
        let size = self.dimensions();
        let origin = Point::new(
            align::horizontal(self.align, region, size.width),
            align::center_vertical(region, size.height),
        );
        self.render(display, origin)?;
        Ok(Rectangle::new(origin, size))
    }
}
