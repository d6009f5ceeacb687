//! Integration tests for the theme controller with file-backed storage.

use buttonry::theme::{
    global, install, set_theme_detector, ColorMode, FileStorage, MemoryStorage, ThemeConfig,
    ThemeController, ThemeStorage,
};
use buttonry::{Button, Variant};
use serial_test::serial;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

#[test]
fn test_selection_survives_restart() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("storage.json");

    let first = ThemeController::init(ThemeConfig::default(), FileStorage::new(&path));
    assert_eq!(first.current_theme(), "light");
    first.set_theme("dark-theme").unwrap();

    let second = ThemeController::init(ThemeConfig::default(), FileStorage::new(&path));
    assert_eq!(second.current_theme(), "dark-theme");

    let raw = std::fs::read_to_string(&path).unwrap();
    let stored: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(stored["merza-theme"], "dark-theme");
}

#[test]
fn test_unknown_stored_value_falls_back() {
    let dir = TempDir::new().unwrap();
    let storage = FileStorage::new(dir.path().join("storage.json"));
    storage.store("merza-theme", "high-contrast").unwrap();

    let controller = ThemeController::init(ThemeConfig::default(), storage);
    assert_eq!(controller.current_theme(), "light");
}

#[test]
fn test_corrupt_storage_falls_back_and_is_repaired() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("storage.json");
    std::fs::write(&path, "not json").unwrap();

    let controller = ThemeController::init(ThemeConfig::default(), FileStorage::new(&path));
    assert_eq!(controller.current_theme(), "light");

    controller.set_theme("dark-theme").unwrap();
    let reread = FileStorage::new(&path).load("merza-theme").unwrap();
    assert_eq!(reread.as_deref(), Some("dark-theme"));
}

#[test]
fn test_button_click_changes_theme() {
    let controller = Arc::new(ThemeController::init(ThemeConfig::default(), MemoryStorage::new()));
    let changes = Arc::new(Mutex::new(Vec::new()));
    {
        let changes = changes.clone();
        controller.subscribe(move |theme| changes.lock().unwrap().push(theme.to_string()));
    }

    let primary = Button::new()
        .text("primary")
        .on_click(controller.setter("dark-theme"))
        .render();
    let secondary = Button::new()
        .text("secondary")
        .variant(Variant::Secondary)
        .on_click(controller.setter("light"))
        .render();

    assert!(primary.click());
    assert_eq!(controller.current_theme(), "dark-theme");
    assert!(secondary.click());
    assert_eq!(controller.current_theme(), "light");
    assert_eq!(*changes.lock().unwrap(), vec!["dark-theme", "light"]);
}

#[test]
#[serial]
fn test_system_default_follows_detector() {
    let config = ThemeConfig::from_yaml("default_theme: system\n").unwrap();
    let controller = ThemeController::init(config, MemoryStorage::new());

    set_theme_detector(|| ColorMode::Dark);
    assert_eq!(controller.current_theme(), "system");
    assert_eq!(controller.resolved_theme(), "dark-theme");

    set_theme_detector(|| ColorMode::Light);
    assert_eq!(controller.resolved_theme(), "light");
}

#[test]
fn test_global_install_once() {
    let controller = ThemeController::init(ThemeConfig::default(), MemoryStorage::new());
    install(controller).unwrap();
    assert!(global().is_some());

    let again = ThemeController::init(ThemeConfig::default(), MemoryStorage::new());
    assert!(install(again).is_err());
}
