//! Isolated window management layer
//!
//! Based on the softbuffer pattern: all platform-specific code lives here.

// winit setup has no meaningful recovery path once window creation fails;
// failing loudly is the desktop-layer convention.
#![allow(clippy::expect_used)]

use softbuffer::{Context, Surface};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::platform::pump_events::EventLoopExtPumpEvents;
use winit::window::{Window as WinitWindow, WindowAttributes, WindowId};

const WINDOW_TITLE: &str = "Driver Detector";

/// Desktop presentation window (isolated from application logic).
pub struct Window {
    event_loop: Option<EventLoop<()>>,
    window: Arc<WinitWindow>,
    surface: Surface<Arc<WinitWindow>, Arc<WinitWindow>>,
    width: u32,
    height: u32,
    scale: u32,
}

/// Handler for the blocking event loop after setup.
struct EventHandler;

impl ApplicationHandler for EventHandler {
    fn resumed(&mut self, _event_loop: &ActiveEventLoop) {
        // Window is already created before the event loop starts.
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::RedrawRequested => {
                // Redraw happens via present() calls.
            }
            _ => {}
        }
    }
}

/// Single-shot handler that creates the window inside `resumed`, driven by
/// `pump_app_events` (winit 0.30 only hands out a window from within the
/// event loop).
struct WindowCreator {
    attributes: Option<WindowAttributes>,
    window: Option<Arc<WinitWindow>>,
    surface: Option<Surface<Arc<WinitWindow>, Arc<WinitWindow>>>,
}

impl ApplicationHandler for WindowCreator {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let Some(attributes) = self.attributes.take() else {
            return;
        };
        match event_loop.create_window(attributes) {
            Ok(window) => {
                let window = Arc::new(window);
                match Context::new(window.clone())
                    .and_then(|context| Surface::new(&context, window.clone()))
                {
                    Ok(surface) => {
                        self.window = Some(window);
                        self.surface = Some(surface);
                    }
                    Err(e) => eprintln!("Failed to create surface: {e}"),
                }
            }
            Err(e) => eprintln!("Failed to create window: {e}"),
        }
    }

    fn window_event(&mut self, _: &ActiveEventLoop, _: WindowId, _: WindowEvent) {}
}

impl Window {
    /// Create the window at `width * scale` x `height * scale` physical pixels.
    pub fn new(width: u32, height: u32, scale: u32) -> Self {
        let mut event_loop = EventLoop::new().expect("Failed to create event loop");

        let scaled_w = width * scale;
        let scaled_h = height * scale;
        let attributes = WindowAttributes::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size(winit::dpi::PhysicalSize::new(scaled_w, scaled_h))
            .with_resizable(false);

        let mut creator = WindowCreator {
            attributes: Some(attributes),
            window: None,
            surface: None,
        };

        // Pump the event loop once to create the window without blocking.
        let _ = event_loop.pump_app_events(Some(Duration::from_millis(1)), &mut creator);

        let window = creator.window.expect("Failed to create window");
        let mut surface = creator.surface.expect("Failed to create surface");

        // Resize the surface once during initialization; the window is not
        // resizable, so this never happens again.
        surface
            .resize(
                NonZeroU32::new(scaled_w).expect("window width must be non-zero"),
                NonZeroU32::new(scaled_h).expect("window height must be non-zero"),
            )
            .expect("Failed to resize surface");

        Self {
            event_loop: Some(event_loop),
            window,
            surface,
            width,
            height,
            scale,
        }
    }

    /// Blit logical 0xAARRGGBB pixels to the window, upscaling each pixel to
    /// a `scale`x`scale` block.
    pub fn present(&mut self, rgba: &[u32]) {
        let scale = self.scale;
        let window_width = self.width * scale;

        let mut buffer = self
            .surface
            .buffer_mut()
            .expect("Failed to acquire surface buffer");

        if scale == 1 {
            buffer.copy_from_slice(rgba);
        } else {
            for y in 0..self.height {
                for x in 0..self.width {
                    let pixel = rgba[(y * self.width + x) as usize];
                    for dy in 0..scale {
                        for dx in 0..scale {
                            let idx = ((y * scale + dy) * window_width + (x * scale + dx)) as usize;
                            buffer[idx] = pixel;
                        }
                    }
                }
            }
        }

        buffer.present().expect("Failed to present surface buffer");
        self.window.request_redraw();
    }

    /// Run the event loop (blocks until the window is closed).
    pub fn run(mut self) {
        if let Some(event_loop) = self.event_loop.take() {
            let mut handler = EventHandler;
            let _ = event_loop.run_app(&mut handler);
        }
    }
}
