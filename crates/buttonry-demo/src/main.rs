//! buttonry-demo - renders the component demo page and switches its theme.
//!
//! The selected theme is persisted between runs, so `theme set` or `click`
//! followed by `render` shows the page in the new theme.

mod cli;
mod logging;
mod page;

use anyhow::{bail, Context, Result};
use buttonry::theme::{FileStorage, ThemeConfig, ThemeController};
use clap::Parser;
use console::style;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use cli::{Args, Command, ThemeAction};
use page::Page;

const APP_DIR: &str = "buttonry";
const CONFIG_FILE: &str = "config.yaml";
const STORE_FILE: &str = "storage.json";

fn main() -> Result<()> {
    logging::init();
    let args = Args::parse();
    run(args)
}

fn run(args: Args) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let store = args.store.unwrap_or_else(|| app_dir().join(STORE_FILE));
    tracing::debug!(store = %store.display(), "using theme storage");

    let controller = Arc::new(ThemeController::init(config, FileStorage::new(store)));

    match args.command {
        Command::Render { out } => {
            let html = Page::new(Arc::clone(&controller))?.render()?;
            match out {
                Some(path) => std::fs::write(&path, html)
                    .with_context(|| format!("failed to write {}", path.display()))?,
                None => print!("{html}"),
            }
        }
        Command::Theme { action } => theme(&controller, action)?,
        Command::Click { label } => {
            let page = Page::new(Arc::clone(&controller))?;
            if !page.click(&label) {
                let labels: Vec<_> = page::DEMO_BUTTONS.iter().map(|b| b.label).collect();
                bail!("no button labelled `{label}` (expected one of: {})", labels.join(", "));
            }
            println!("{}", controller.current_theme());
        }
    }
    Ok(())
}

fn theme(controller: &ThemeController, action: ThemeAction) -> Result<()> {
    match action {
        ThemeAction::Show => {
            let current = controller.current_theme();
            let resolved = controller.resolved_theme();
            if current == resolved {
                println!("{current}");
            } else {
                println!("{current} ({resolved})");
            }
        }
        ThemeAction::List => {
            let current = controller.current_theme();
            for name in controller.themes() {
                if name == current {
                    println!("* {}", style(&name).bold());
                } else {
                    println!("  {name}");
                }
            }
        }
        ThemeAction::Set { name } => {
            controller.set_theme(&name)?;
            println!("{name}");
        }
    }
    Ok(())
}

/// Reads the given configuration, or the per-user one when present.
fn load_config(path: Option<&Path>) -> Result<ThemeConfig> {
    if let Some(path) = path {
        return ThemeConfig::load(path)
            .with_context(|| format!("failed to load configuration {}", path.display()));
    }
    let default_path = app_dir().join(CONFIG_FILE);
    if default_path.exists() {
        return ThemeConfig::load(&default_path)
            .with_context(|| format!("failed to load configuration {}", default_path.display()));
    }
    Ok(ThemeConfig::default())
}

fn app_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn args(dir: &TempDir, rest: &[&str]) -> Args {
        let store = dir.path().join("store.json");
        let mut argv = vec!["buttonry-demo", "--store", store.to_str().unwrap()];
        argv.extend_from_slice(rest);
        Args::try_parse_from(argv).unwrap()
    }

    fn stored_theme(dir: &TempDir) -> Option<String> {
        use buttonry::theme::ThemeStorage;
        FileStorage::new(dir.path().join("store.json"))
            .load("merza-theme")
            .unwrap()
    }

    #[test]
    fn test_theme_set_persists() {
        let dir = TempDir::new().unwrap();
        run(args(&dir, &["theme", "set", "dark-theme"])).unwrap();
        assert_eq!(stored_theme(&dir).as_deref(), Some("dark-theme"));
    }

    #[test]
    fn test_theme_set_rejects_unknown() {
        let dir = TempDir::new().unwrap();
        assert!(run(args(&dir, &["theme", "set", "sepia"])).is_err());
        assert_eq!(stored_theme(&dir), None);
    }

    #[test]
    fn test_click_then_render() {
        let dir = TempDir::new().unwrap();
        run(args(&dir, &["click", "success"])).unwrap();

        let out = dir.path().join("page.html");
        run(args(&dir, &["render", "--out", out.to_str().unwrap()])).unwrap();
        let html = std::fs::read_to_string(out).unwrap();
        assert!(html.contains(r#"<html class="dark-theme">"#));
    }

    #[test]
    fn test_click_unknown_label() {
        let dir = TempDir::new().unwrap();
        let err = run(args(&dir, &["click", "nope"])).unwrap_err();
        assert!(err.to_string().contains("no button labelled"));
    }

    #[test]
    fn test_config_file() {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("config.yaml");
        std::fs::write(&config, "themes: [paper, ink]\ndefault_theme: paper\nenable_system: false\n")
            .unwrap();
        let config_arg = config.to_str().unwrap();

        run(args(&dir, &["--config", config_arg, "theme", "set", "ink"])).unwrap();
        assert!(run(args(&dir, &["--config", config_arg, "theme", "set", "light"])).is_err());
    }
}
