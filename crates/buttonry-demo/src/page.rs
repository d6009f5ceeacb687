//! The demo page: a navigation bar and a row of theme-switching buttons.

use buttonry::theme::ThemeController;
use buttonry::{Button, Element, HtmlRenderer, Variant};
use minijinja::{context, Value};
use serde::Serialize;
use std::sync::Arc;

const PAGE_TEMPLATE_NAME: &str = "page.html";

const PAGE_TEMPLATE: &str = r#"<!doctype html>
<html {{ root.name }}="{{ root.value }}">
<head>
<meta charset="utf-8">
<title>{{ title | title_case }}</title>
</head>
<body>
<main>
<nav class="{{ "h-15 flex items-center border-b bg-default border-default" | classes }}"></nav>
<div class="{{ "max-w-7xl mx-auto px-4 sm:px-6 pt-8" | classes }}">
<div class="{{ "flex items-center gap-2" | classes }}">
{% for button in buttons %}{{ button }}
{% endfor %}</div>
</div>
</main>
</body>
</html>
"#;

/// A button on the page and the theme it selects.
#[derive(Debug, Clone, Copy)]
pub struct DemoButton {
    pub label: &'static str,
    pub variant: Variant,
    pub theme: &'static str,
}

pub const DEMO_BUTTONS: [DemoButton; 4] = [
    DemoButton {
        label: "primary",
        variant: Variant::Primary,
        theme: "dark-theme",
    },
    DemoButton {
        label: "secondary",
        variant: Variant::Secondary,
        theme: "light",
    },
    DemoButton {
        label: "success",
        variant: Variant::Success,
        theme: "dark-theme",
    },
    DemoButton {
        label: "danger",
        variant: Variant::Danger,
        theme: "light",
    },
];

#[derive(Serialize)]
struct RootAttribute {
    name: String,
    value: String,
}

pub struct Page {
    controller: Arc<ThemeController>,
    renderer: HtmlRenderer,
}

impl Page {
    pub fn new(controller: Arc<ThemeController>) -> anyhow::Result<Self> {
        let mut renderer = HtmlRenderer::new();
        renderer.add_template(PAGE_TEMPLATE_NAME, PAGE_TEMPLATE)?;
        Ok(Self {
            controller,
            renderer,
        })
    }

    /// Renders the page buttons, each wired to its theme.
    pub fn buttons(&self) -> Vec<(&'static str, Element)> {
        DEMO_BUTTONS
            .iter()
            .map(|demo| {
                let element = Button::new()
                    .text(demo.label)
                    .variant(demo.variant)
                    .test_id(format!("theme-{}", demo.label))
                    .on_click(self.controller.setter(demo.theme))
                    .render();
                (demo.label, element)
            })
            .collect()
    }

    /// Clicks the button labelled `label` (case-insensitive). Returns
    /// `false` when no such button exists.
    pub fn click(&self, label: &str) -> bool {
        self.buttons()
            .into_iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(label.trim()))
            .is_some_and(|(_, element)| element.click())
    }

    pub fn render(&self) -> anyhow::Result<String> {
        let buttons = self
            .buttons()
            .iter()
            .map(|(_, element)| self.renderer.render_element(element).map(Value::from_safe_string))
            .collect::<Result<Vec<_>, _>>()?;

        let (name, value) = self.controller.root_attribute();
        let html = self.renderer.render(
            PAGE_TEMPLATE_NAME,
            &context! {
                title => "buttonry demo",
                root => RootAttribute { name, value },
                buttons => buttons,
            },
        )?;
        Ok(html)
    }
}
