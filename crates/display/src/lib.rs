//! Display surface for the Driver Detector screen.
//!
//! The [`Display`] is the root view: a Gray4 framebuffer plus an optional
//! desktop window (winit + softbuffer). It implements embedded-graphics'
//! `DrawTarget`, so screens draw onto it directly.
//!
//! Headless construction is available for tests; the `headless` cargo
//! feature additionally compiles out the window layer for CI.
//!
//! # Example
//!
//! ```no_run
//! use display::Display;
//! use embedded_graphics::pixelcolor::Gray4;
//! use embedded_graphics::prelude::*;
//! use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
//!
//! let mut display = Display::new(320, 240);
//!
//! Rectangle::new(Point::new(10, 10), Size::new(50, 30))
//!     .into_styled(PrimitiveStyle::with_fill(Gray4::BLACK))
//!     .draw(&mut display)
//!     .unwrap();
//!
//! display.present();
//! display.run();
//! ```

pub mod config;
mod framebuffer;

#[cfg(not(feature = "headless"))]
mod window;

pub use config::{DisplayConfig, DISPLAY_HEIGHT, DISPLAY_WIDTH};
pub use framebuffer::Framebuffer;

use embedded_graphics::pixelcolor::Gray4;
use embedded_graphics::prelude::*;

/// The root view: framebuffer plus optional presentation window.
pub struct Display {
    /// Backing framebuffer. Public so tests can inspect pixels directly.
    pub framebuffer: Framebuffer,
    config: DisplayConfig,
    #[cfg(not(feature = "headless"))]
    window: Option<window::Window>,
}

impl Display {
    /// Create a windowed display with the default configuration.
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_config(width, height, DisplayConfig::DEFAULT)
    }

    /// Create a windowed display with an explicit configuration.
    pub fn with_config(width: u32, height: u32, config: DisplayConfig) -> Self {
        Self {
            framebuffer: Framebuffer::new(width, height),
            config,
            #[cfg(not(feature = "headless"))]
            window: Some(window::Window::new(width, height, config.scale)),
        }
    }

    /// Create a display with no window (for tests).
    pub fn headless(width: u32, height: u32) -> Self {
        Self {
            framebuffer: Framebuffer::new(width, height),
            config: DisplayConfig::NATIVE,
            #[cfg(not(feature = "headless"))]
            window: None,
        }
    }

    /// The active presentation configuration.
    pub fn config(&self) -> DisplayConfig {
        self.config
    }

    /// Present the framebuffer to the window. No-op when headless.
    pub fn present(&mut self) {
        #[cfg(not(feature = "headless"))]
        if let Some(window) = &mut self.window {
            window.present(&self.framebuffer.to_rgba());
        }
    }

    /// Run the window event loop (blocks until the window is closed).
    #[cfg(not(feature = "headless"))]
    pub fn run(self) {
        if let Some(window) = self.window {
            window.run();
        }
    }

    /// No-op in headless builds.
    #[cfg(feature = "headless")]
    pub fn run(self) {}

    /// Save the framebuffer as a grayscale PNG.
    pub fn screenshot(
        &self,
        path: impl AsRef<std::path::Path>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        use image::{GrayImage, Luma};

        let mut img = GrayImage::new(self.framebuffer.width, self.framebuffer.height);
        for (i, pixel) in self.framebuffer.pixels.iter().enumerate() {
            let x = (i as u32) % self.framebuffer.width;
            let y = (i as u32) / self.framebuffer.width;
            // Gray4 luma 0-15 maps to byte 0-255.
            img.put_pixel(x, y, Luma([pixel.luma() * 17]));
        }
        img.save(path)?;
        Ok(())
    }
}

impl DrawTarget for Display {
    type Color = Gray4;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x >= 0 && point.y >= 0 {
                self.framebuffer
                    .set_pixel(point.x as u32, point.y as u32, color);
            }
        }
        Ok(())
    }
}

impl OriginDimensions for Display {
    fn size(&self) -> Size {
        Size::new(self.framebuffer.width, self.framebuffer.height)
    }
}
