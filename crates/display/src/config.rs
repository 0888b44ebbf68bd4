//! Display configuration.

/// Logical display width in pixels.
pub const DISPLAY_WIDTH: u32 = 320;

/// Logical display height in pixels.
pub const DISPLAY_HEIGHT: u32 = 240;

/// Configuration for display presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Window upscaling factor (1 = native, 2 = 2x for visibility, etc.)
    pub scale: u32,
}

impl DisplayConfig {
    /// Default configuration: 2x scaling for visibility.
    pub const DEFAULT: Self = Self { scale: 2 };

    /// No upscaling (1:1 pixel mapping).
    pub const NATIVE: Self = Self { scale: 1 };
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_scales_2x() {
        assert_eq!(DisplayConfig::default(), DisplayConfig::DEFAULT);
        assert_eq!(DisplayConfig::DEFAULT.scale, 2);
    }

    #[test]
    fn test_native_config_is_1_to_1() {
        assert_eq!(DisplayConfig::NATIVE.scale, 1);
    }
}
