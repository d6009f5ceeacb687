//! HTML serialization through MiniJinja.
//!
//! Elements are serialized by a small template with auto-escaping on, so
//! attribute values and text are always escaped. Rendered children are passed
//! back in as safe strings.

use std::borrow::Cow;
use std::fmt::Write as _;

use minijinja::{context, escape_formatter, AutoEscape, Environment, Error, ErrorKind, Value};
use once_cell::sync::Lazy;
use serde::Serialize;

use super::element::{Element, Node};

const ELEMENT_TEMPLATE: &str = concat!(
    "<{{ tag }}",
    "{% if class %} class=\"{{ class }}\"{% endif %}",
    "{% for name, value in attrs %} {{ name }}{% if value %}=\"{{ value }}\"{% endif %}{% endfor %}",
    ">{{ children }}</{{ tag }}>",
);

const TEXT_TEMPLATE: &str = "{{ text }}";

const ELEMENT_TEMPLATE_NAME: &str = "_element.html";
const TEXT_TEMPLATE_NAME: &str = "_text.html";

static DEFAULT_RENDERER: Lazy<HtmlRenderer> = Lazy::new(HtmlRenderer::new);

pub(crate) fn default_renderer() -> &'static HtmlRenderer {
    &DEFAULT_RENDERER
}

/// Serializes element trees and renders page templates.
///
/// Page templates are registered by name; names ending in `.html` get HTML
/// auto-escaping. Besides the MiniJinja built-ins, templates can use:
///
/// - `classes`: `{{ "px-4 bg-a" | classes("bg-b") }}` merges class lists
/// - `title_case`: `{{ label | title_case }}`
///
/// # Example
///
/// ```rust
/// use buttonry::{Button, HtmlRenderer};
/// use minijinja::Value;
///
/// let mut renderer = HtmlRenderer::new();
/// renderer
///     .add_template("row.html", r#"<div class="{{ "flex gap-1" | classes("gap-2") }}">{{ button }}</div>"#)
///     .unwrap();
///
/// let button = renderer.render_element(&Button::new().text("save").render()).unwrap();
/// let html = renderer
///     .render("row.html", &minijinja::context! { button => Value::from_safe_string(button) })
///     .unwrap();
/// assert!(html.starts_with(r#"<div class="flex gap-2"><button"#));
/// ```
pub struct HtmlRenderer {
    env: Environment<'static>,
}

impl HtmlRenderer {
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_formatter(|out, state, value| {
            if matches!(state.auto_escape(), AutoEscape::Html) && !value.is_safe() {
                if let Some(text) = value.as_str() {
                    return out
                        .write_str(&escape_html(text))
                        .map_err(|_| Error::new(ErrorKind::WriteFailure, "failed to write output"));
                }
            }
            escape_formatter(out, state, value)
        });
        super::filters::register_filters(&mut env);
        for (name, source) in [
            (ELEMENT_TEMPLATE_NAME, ELEMENT_TEMPLATE),
            (TEXT_TEMPLATE_NAME, TEXT_TEMPLATE),
        ] {
            let added = env.add_template(name, source);
            debug_assert!(added.is_ok(), "built-in template {name}: {added:?}");
        }
        Self { env }
    }

    /// Registers a named template. Compiled immediately.
    pub fn add_template(&mut self, name: &str, source: &str) -> Result<(), Error> {
        self.env
            .add_template_owned(name.to_string(), source.to_string())
    }

    /// Renders a registered template with the given data.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String, Error> {
        self.env.get_template(name)?.render(data)
    }

    pub fn render_node(&self, node: &Node) -> Result<String, Error> {
        match node {
            Node::Text(text) => self
                .env
                .get_template(TEXT_TEMPLATE_NAME)?
                .render(context! { text => text }),
            Node::Element(element) => self.render_element(element),
            Node::Fragment(nodes) => self.render_nodes(nodes),
        }
    }

    pub fn render_element(&self, element: &Element) -> Result<String, Error> {
        let children = self.render_nodes(element.children())?;
        self.env.get_template(ELEMENT_TEMPLATE_NAME)?.render(context! {
            tag => element.tag(),
            class => element.class(),
            attrs => element.attrs(),
            children => Value::from_safe_string(children),
        })
    }

    fn render_nodes(&self, nodes: &[Node]) -> Result<String, Error> {
        let mut out = String::new();
        for node in nodes {
            out.push_str(&self.render_node(node)?);
        }
        Ok(out)
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Escapes the five HTML-significant characters. Unlike MiniJinja's
/// default escaping, `/` is left alone so URLs stay readable.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_templates_compile() {
        let mut env = Environment::new();
        env.add_template(ELEMENT_TEMPLATE_NAME, ELEMENT_TEMPLATE).unwrap();
        env.add_template(TEXT_TEMPLATE_NAME, TEXT_TEMPLATE).unwrap();

        let renderer = HtmlRenderer::new();
        assert!(renderer.env.get_template(ELEMENT_TEMPLATE_NAME).is_ok());
        assert!(renderer.env.get_template(TEXT_TEMPLATE_NAME).is_ok());
    }

    #[test]
    fn test_attribute_names_cannot_inject() {
        let el = Element::new("a")
            .with_attr("x onmouseover", "alert(1)")
            .with_attr("href", "/ok");
        assert_eq!(el.to_html().unwrap(), r#"<a href="/ok"></a>"#);
    }

    #[test]
    fn test_element_with_attrs_and_children() {
        let el = Element::new("a")
            .with_class("text-link")
            .with_attr("href", "/docs")
            .with_child("Docs");
        assert_eq!(
            HtmlRenderer::new().render_element(&el).unwrap(),
            r#"<a class="text-link" href="/docs">Docs</a>"#
        );
    }

    #[test]
    fn test_boolean_attribute() {
        let el = Element::new("button")
            .with_attr("type", "button")
            .with_attr("disabled", "");
        assert_eq!(
            el.to_html().unwrap(),
            r#"<button type="button" disabled></button>"#
        );
    }

    #[test]
    fn test_text_and_attributes_are_escaped() {
        let el = Element::new("span")
            .with_attr("title", r#"a "quoted" <value>"#)
            .with_child("1 < 2 & 3");
        let html = el.to_html().unwrap();
        assert!(html.contains("&lt;value&gt;"));
        assert!(html.contains("&quot;quoted&quot;"));
        assert!(html.contains("1 &lt; 2 &amp; 3"));
    }

    #[test]
    fn test_urls_are_not_entity_encoded() {
        let el = Element::new("a").with_attr("href", "https://example.com/a?b=1&c=2");
        assert_eq!(
            el.to_html().unwrap(),
            r#"<a href="https://example.com/a?b=1&amp;c=2"></a>"#
        );
    }

    #[test]
    fn test_escape_html_borrows_clean_text() {
        assert!(matches!(escape_html("plain/text"), Cow::Borrowed(_)));
        assert_eq!(escape_html("it's"), "it&#x27;s");
    }

    #[test]
    fn test_nested_children_not_double_escaped() {
        let el = Element::new("div").with_child(Element::new("span").with_child("&"));
        assert_eq!(el.to_html().unwrap(), "<div><span>&amp;</span></div>");
    }

    #[test]
    fn test_fragment_node() {
        let node = Node::Fragment(vec![Node::text("a"), Element::new("b").into()]);
        assert_eq!(node.to_html().unwrap(), "a<b></b>");
    }

    #[test]
    fn test_unknown_template_error() {
        let renderer = HtmlRenderer::new();
        assert!(renderer.render("missing.html", &()).is_err());
    }
}
