//! The process-wide theme selection.

use once_cell::sync::OnceCell;
use std::sync::{Arc, RwLock};
use tracing::{debug, warn};

use super::adaptive::detect_color_mode;
use super::config::{ThemeConfig, SYSTEM_THEME};
use super::error::ThemeError;
use super::storage::ThemeStorage;

type Listener = Box<dyn Fn(&str) + Send + Sync>;

static GLOBAL: OnceCell<ThemeController> = OnceCell::new();

/// Holds the selected theme, persists changes and notifies subscribers.
///
/// The theme is changed only through [`set_theme`](Self::set_theme). Once it
/// returns, every reader observes the new value and every listener has run.
///
/// # Example
///
/// ```rust
/// use buttonry::theme::{MemoryStorage, ThemeConfig, ThemeController};
///
/// let controller = ThemeController::init(ThemeConfig::default(), MemoryStorage::new());
/// assert_eq!(controller.current_theme(), "light");
///
/// controller.set_theme("dark-theme").unwrap();
/// assert_eq!(controller.current_theme(), "dark-theme");
/// assert!(controller.set_theme("sepia").is_err());
/// ```
pub struct ThemeController {
    config: ThemeConfig,
    storage: Box<dyn ThemeStorage>,
    current: RwLock<String>,
    listeners: RwLock<Vec<Listener>>,
}

impl ThemeController {
    /// Creates a controller with the stored selection, or the configured
    /// default when nothing valid is stored.
    pub fn init(config: ThemeConfig, storage: impl ThemeStorage + 'static) -> Self {
        let current = match storage.load(&config.storage_key) {
            Ok(Some(stored)) if config.accepts(&stored) => {
                debug!(theme = %stored, "loaded stored theme");
                stored
            }
            Ok(Some(stored)) => {
                warn!(
                    theme = %stored,
                    fallback = %config.default_theme,
                    "ignoring unknown stored theme"
                );
                config.default_theme.clone()
            }
            Ok(None) => {
                debug!(theme = %config.default_theme, "no stored theme, using default");
                config.default_theme.clone()
            }
            Err(err) => {
                warn!(error = %err, "failed to read stored theme, using default");
                config.default_theme.clone()
            }
        };

        Self {
            config,
            storage: Box::new(storage),
            current: RwLock::new(current),
            listeners: RwLock::new(Vec::new()),
        }
    }

    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    /// The selected theme, possibly `system`.
    pub fn current_theme(&self) -> String {
        self.current
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// The concrete theme in effect. `system` resolves through the
    /// detected color mode.
    pub fn resolved_theme(&self) -> String {
        let current = self.current_theme();
        if current == SYSTEM_THEME {
            self.config
                .system
                .for_mode(detect_color_mode())
                .to_string()
        } else {
            current
        }
    }

    /// Names accepted by [`set_theme`](Self::set_theme).
    pub fn themes(&self) -> Vec<String> {
        let mut themes = self.config.themes.clone();
        if self.config.enable_system {
            themes.push(SYSTEM_THEME.to_string());
        }
        themes
    }

    /// Selects a theme.
    ///
    /// Persistence failures are logged and do not fail the call; the new
    /// theme stays in effect for this process.
    pub fn set_theme(&self, name: &str) -> Result<(), ThemeError> {
        if name == SYSTEM_THEME && !self.config.enable_system {
            return Err(ThemeError::SystemDisabled);
        }
        if !self.config.accepts(name) {
            return Err(ThemeError::unknown(name, &self.themes()));
        }

        {
            // Stored under the write lock so storage and memory agree.
            let mut current = self
                .current
                .write()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            *current = name.to_string();
            if let Err(err) = self.storage.store(&self.config.storage_key, name) {
                warn!(error = %err, theme = %name, "failed to persist theme");
            }
        }
        debug!(theme = %name, "theme changed");

        let listeners = self
            .listeners
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        for listener in listeners.iter() {
            listener(name);
        }
        Ok(())
    }

    /// Registers a listener called with the new theme name after each change.
    pub fn subscribe(&self, listener: impl Fn(&str) + Send + Sync + 'static) {
        self.listeners
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(Box::new(listener));
    }

    /// The root element attribute carrying the resolved theme, as
    /// `(name, value)`.
    pub fn root_attribute(&self) -> (String, String) {
        (self.config.attribute.clone(), self.resolved_theme())
    }

    /// Returns a click handler that selects `name`. Rejected names are
    /// logged.
    pub fn setter(self: &Arc<Self>, name: impl Into<String>) -> impl Fn() + Send + Sync + 'static {
        let controller = Arc::clone(self);
        let name = name.into();
        move || {
            if let Err(err) = controller.set_theme(&name) {
                warn!(error = %err, "theme change rejected");
            }
        }
    }
}

impl std::fmt::Debug for ThemeController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeController")
            .field("config", &self.config)
            .field("current", &self.current_theme())
            .finish_non_exhaustive()
    }
}

/// Installs the process-wide controller. Fails if one is already installed.
pub fn install(controller: ThemeController) -> Result<&'static ThemeController, ThemeError> {
    GLOBAL
        .set(controller)
        .map_err(|_| ThemeError::AlreadyInstalled)?;
    GLOBAL.get().ok_or(ThemeError::AlreadyInstalled)
}

/// The process-wide controller, if one was installed.
pub fn global() -> Option<&'static ThemeController> {
    GLOBAL.get()
}
