//! Driver Detector
//!
//! Opens a window and renders the main screen: the app title, bold and
//! centered on the default background.
//!
//! Run with: cargo run -p driver-detector

use display::config::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use display::{Display, DisplayConfig};
use ui::main_screen;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", main_screen::TITLE);
    println!(
        "Display: {DISPLAY_WIDTH}x{DISPLAY_HEIGHT} (window scale {}x)\n",
        DisplayConfig::DEFAULT.scale
    );

    let mut display = Display::with_config(DISPLAY_WIDTH, DISPLAY_HEIGHT, DisplayConfig::DEFAULT);

    main_screen::render_main_screen(&mut display)?;
    display.present();

    println!("Close the window to exit.");

    // Blocks until the window is closed.
    display.run();

    Ok(())
}
