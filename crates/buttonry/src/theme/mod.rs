//! Theme selection shared by the whole application.
//!
//! - [`ThemeConfig`]: declared themes, default, storage key and the root
//!   attribute, loadable from YAML
//! - [`ThemeStorage`]: where the selection is persisted ([`FileStorage`],
//!   [`MemoryStorage`])
//! - [`ThemeController`]: the current theme with a single setter and change
//!   listeners; one instance can be installed process-wide with [`install`]
//! - [`set_theme_detector`]: overrides system color mode detection
//!
//! The reserved theme `system` follows the operating system's light or dark
//! mode when enabled.

mod adaptive;
mod config;
mod controller;
mod error;
mod storage;

pub use adaptive::{detect_color_mode, set_theme_detector, ColorMode};
pub use config::{SystemThemes, ThemeConfig, SYSTEM_THEME};
pub use controller::{global, install, ThemeController};
pub use error::{StorageError, ThemeError};
pub use storage::{FileStorage, MemoryStorage, ThemeStorage};
