//! Application UI layer — label widget, alignment helpers, and the single
//! main screen of the Driver Detector app.
//!
//! This crate is `no_std` by default; it only uses `core` + embedded-graphics.

#![cfg_attr(not(test), no_std)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]
#![deny(clippy::expect_used)]

pub mod align;
pub mod label;
pub mod main_screen;
pub mod scaled;

/// Convenience re-exports for screen code.
pub mod prelude {
    pub use crate::align;
    pub use crate::label::*;
    pub use crate::main_screen::*;
    pub use crate::scaled::*;
}
