//! Theme configuration.
//!
//! A configuration can be built in code or read from YAML:
//!
//! ```yaml
//! themes: [light, dark-theme]
//! default_theme: light
//! enable_system: true
//! storage_key: merza-theme
//! attribute: class
//! system:
//!   light: light
//!   dark: dark-theme
//! ```
//!
//! Missing fields take their [`Default`] values.

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::adaptive::ColorMode;
use super::error::ThemeError;

/// The reserved theme name that follows the system color mode.
pub const SYSTEM_THEME: &str = "system";

/// Themes used for each system color mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemThemes {
    pub light: String,
    pub dark: String,
}

impl Default for SystemThemes {
    fn default() -> Self {
        Self {
            light: "light".to_string(),
            dark: "dark-theme".to_string(),
        }
    }
}

impl SystemThemes {
    pub fn for_mode(&self, mode: ColorMode) -> &str {
        match mode {
            ColorMode::Light => &self.light,
            ColorMode::Dark => &self.dark,
        }
    }
}

/// Settings of a [`ThemeController`](super::ThemeController).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Declared theme names.
    pub themes: Vec<String>,
    /// Theme used when nothing valid is stored. May be `system`.
    pub default_theme: String,
    /// Whether `system` is accepted as a theme.
    pub enable_system: bool,
    /// Key under which the selection is persisted.
    pub storage_key: String,
    /// Root attribute carrying the theme: `class` or a `data-*` name.
    pub attribute: String,
    pub system: SystemThemes,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            themes: vec!["light".to_string(), "dark-theme".to_string()],
            default_theme: "light".to_string(),
            enable_system: true,
            storage_key: "merza-theme".to_string(),
            attribute: "class".to_string(),
            system: SystemThemes::default(),
        }
    }
}

impl ThemeConfig {
    /// Parses and validates a YAML configuration.
    pub fn from_yaml(source: &str) -> Result<Self, ThemeError> {
        let config: ThemeConfig = serde_yaml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a YAML configuration file.
    pub fn load(path: &Path) -> Result<Self, ThemeError> {
        let source = std::fs::read_to_string(path).map_err(|source| ThemeError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&source)
    }

    /// Whether `name` can be passed to the controller's setter.
    pub fn accepts(&self, name: &str) -> bool {
        self.themes.iter().any(|t| t == name) || (self.enable_system && name == SYSTEM_THEME)
    }

    /// Checks the configuration for internal consistency.
    pub fn validate(&self) -> Result<(), ThemeError> {
        if self.themes.is_empty() {
            return Err(ThemeError::invalid("at least one theme must be declared"));
        }
        if let Some(blank) = self.themes.iter().find(|t| t.trim().is_empty()) {
            return Err(ThemeError::invalid(format!("blank theme name `{blank}`")));
        }
        if self.themes.iter().any(|t| t == SYSTEM_THEME) {
            return Err(ThemeError::invalid(format!(
                "`{SYSTEM_THEME}` is reserved and cannot be declared"
            )));
        }
        if !self.accepts(&self.default_theme) {
            return Err(ThemeError::invalid(format!(
                "default theme `{}` is not declared",
                self.default_theme
            )));
        }
        if self.enable_system {
            for name in [&self.system.light, &self.system.dark] {
                if !self.themes.contains(name) {
                    return Err(ThemeError::invalid(format!(
                        "system theme `{name}` is not declared"
                    )));
                }
            }
        }
        if self.storage_key.trim().is_empty() {
            return Err(ThemeError::invalid("storage key must not be blank"));
        }
        if self.attribute != "class" && !self.attribute.starts_with("data-") {
            return Err(ThemeError::invalid(format!(
                "attribute `{}` must be `class` or start with `data-`",
                self.attribute
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = ThemeConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.accepts("dark-theme"));
        assert!(config.accepts(SYSTEM_THEME));
        assert!(!config.accepts("dark"));
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config = ThemeConfig::from_yaml("storage_key: my-theme\n").unwrap();
        assert_eq!(config.storage_key, "my-theme");
        assert_eq!(config.themes, vec!["light", "dark-theme"]);
    }

    #[test]
    fn test_full_yaml() {
        let yaml = r#"
themes: [paper, ink]
default_theme: system
enable_system: true
attribute: data-theme
system:
  light: paper
  dark: ink
"#;
        let config = ThemeConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.default_theme, SYSTEM_THEME);
        assert_eq!(config.system.for_mode(ColorMode::Dark), "ink");
        assert_eq!(config.attribute, "data-theme");
    }

    #[test]
    fn test_undeclared_default_rejected() {
        let err = ThemeConfig::from_yaml("default_theme: sepia\n").unwrap_err();
        assert!(matches!(err, ThemeError::InvalidConfig { .. }));
    }

    #[test]
    fn test_system_default_requires_enable_system() {
        let config = ThemeConfig {
            default_theme: SYSTEM_THEME.into(),
            enable_system: false,
            ..ThemeConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bad_attribute_rejected() {
        let config = ThemeConfig {
            attribute: "style".into(),
            ..ThemeConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_yaml() {
        let err = ThemeConfig::from_yaml("themes: {").unwrap_err();
        assert!(matches!(err, ThemeError::ConfigParse(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = ThemeConfig::load(Path::new("/nonexistent/buttonry.yaml")).unwrap_err();
        assert!(matches!(err, ThemeError::ConfigRead { .. }));
    }
}
