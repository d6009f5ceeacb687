//! MiniJinja filter registration.

use minijinja::Environment;

/// Registers the component filters on a minijinja environment.
///
/// - `classes`: merges a class list with optional overrides, e.g.
///   `{{ "h-9 px-4" | classes("px-0") }}`
/// - `title_case`: upper-cases the first letter of each word
pub fn register_filters(env: &mut Environment<'static>) {
    env.add_filter(
        "classes",
        |value: String, overrides: Option<String>| -> String {
            crate::classes!(value, overrides)
        },
    );

    env.add_filter("title_case", |value: String| -> String {
        crate::util::title_case(&value)
    });
}
