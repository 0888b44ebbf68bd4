//! The main screen — a single static view with the app title at its center.
//!
//! There is no state and no interaction: the screen is rendered once when
//! the display becomes available.

use embedded_graphics::pixelcolor::Gray4;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

use crate::label::{FontWeight, Label, TextAlign};

/// Title text shown at the screen center.
pub const TITLE: &str = "Driver Detector";

/// Nominal title point size.
pub const TITLE_POINT_SIZE: u32 = 32;

/// Screen background (the platform default).
pub const BACKGROUND: Gray4 = Gray4::WHITE;

/// Title text color.
pub const FOREGROUND: Gray4 = Gray4::BLACK;

/// Test ID under which the title label is registered.
pub const TITLE_TEST_ID: &str = "main-title";

/// The configured title label: 32 pt, bold, centered.
pub fn title_label() -> Label<'static> {
    Label::new(TITLE)
        .point_size(TITLE_POINT_SIZE)
        .weight(FontWeight::Bold)
        .align(TextAlign::Center)
        .color(FOREGROUND)
}

/// Render the main screen, reporting the placed label to `register`.
///
/// The background fill must come first; the label is drawn on top of the
/// root view it belongs to.
pub fn render_main_screen_to<D, F>(display: &mut D, mut register: F) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Gray4>,
    F: FnMut(&str, &str, (i32, i32), (u32, u32)),
{
    let bounds = display.bounding_box();

    Rectangle::new(bounds.top_left, bounds.size)
        .into_styled(PrimitiveStyle::with_fill(BACKGROUND))
        .draw(display)?;

    let placed = title_label().render_in(display, bounds)?;
    register(
        TITLE_TEST_ID,
        "Label",
        (placed.top_left.x, placed.top_left.y),
        (placed.size.width, placed.size.height),
    );

    Ok(())
}

/// Render the main screen without component registration.
pub fn render_main_screen<D>(display: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Gray4>,
{
    render_main_screen_to(display, |_, _, _, _| {})
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_text() {
        assert_eq!(title_label().text(), "Driver Detector");
    }

    #[test]
    fn test_title_is_32pt_bold() {
        let label = title_label();
        assert_eq!(label.size_points(), 32);
        assert_eq!(label.font_weight(), FontWeight::Bold);
    }

    #[test]
    fn test_title_is_centered_and_black() {
        let label = title_label();
        assert_eq!(label.alignment(), TextAlign::Center);
        assert_eq!(label.text_color(), FOREGROUND);
    }
}
