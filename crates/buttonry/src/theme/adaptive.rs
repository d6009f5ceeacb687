//! The OS light/dark preference behind the `system` theme.
//!
//! Detection goes through a replaceable function, so tests and embedders
//! can pin a mode without touching the OS setting.

use once_cell::sync::Lazy;
use std::sync::Mutex;

/// The user's preferred color mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Light,
    Dark,
}

impl ColorMode {
    /// Reads the preference from the OS.
    pub fn from_os() -> Self {
        dark_light::detect().into()
    }
}

impl From<dark_light::Mode> for ColorMode {
    fn from(mode: dark_light::Mode) -> Self {
        match mode {
            dark_light::Mode::Dark => ColorMode::Dark,
            dark_light::Mode::Light => ColorMode::Light,
        }
    }
}

type ColorModeSource = fn() -> ColorMode;

static COLOR_MODE_SOURCE: Lazy<Mutex<ColorModeSource>> =
    Lazy::new(|| Mutex::new(ColorMode::from_os));

/// Replaces where [`detect_color_mode`] gets its answer. Pass
/// [`ColorMode::from_os`] to go back to the OS setting.
pub fn set_theme_detector(source: ColorModeSource) {
    *COLOR_MODE_SOURCE
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner()) = source;
}

/// The current color mode. Used to resolve the `system` theme.
pub fn detect_color_mode() -> ColorMode {
    let source = *COLOR_MODE_SOURCE
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    source()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_from_os_mode() {
        assert_eq!(ColorMode::from(dark_light::Mode::Dark), ColorMode::Dark);
        assert_eq!(ColorMode::from(dark_light::Mode::Light), ColorMode::Light);
    }

    #[test]
    #[serial]
    fn test_pinned_mode_is_reported() {
        set_theme_detector(|| ColorMode::Dark);
        assert_eq!(detect_color_mode(), ColorMode::Dark);

        set_theme_detector(|| ColorMode::Light);
        assert_eq!(detect_color_mode(), ColorMode::Light);
    }
}
