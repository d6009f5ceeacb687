//! Built-in utility-group table.
//!
//! A utility group is a set of mutually exclusive classes governing one CSS
//! property family. Two tokens in the same group (under the same modifiers)
//! conflict, and only the last one survives a merge.

const DISPLAY: &[&str] = &[
    "block",
    "inline-block",
    "inline",
    "flex",
    "inline-flex",
    "grid",
    "inline-grid",
    "table",
    "flow-root",
    "contents",
    "list-item",
    "hidden",
];

const POSITION: &[&str] = &["static", "fixed", "absolute", "relative", "sticky"];

const FONT_SIZES: &[&str] = &[
    "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];

const SHADOW_SIZES: &[&str] = &["2xs", "xs", "sm", "md", "lg", "xl", "2xl", "inner", "none"];

const BORDER_STYLES: &[&str] = &["solid", "dashed", "dotted", "double", "hidden", "none"];

const TEXT_ALIGN: &[&str] = &["left", "center", "right", "justify", "start", "end"];

const TEXT_WRAP: &[&str] = &["wrap", "nowrap", "balance", "pretty"];

const FONT_WEIGHTS: &[&str] = &[
    "thin",
    "extralight",
    "light",
    "normal",
    "medium",
    "semibold",
    "bold",
    "extrabold",
    "black",
];

/// Plain `prefix-` -> group mappings, longest prefixes first where one is a
/// prefix of another.
const PREFIX_GROUPS: &[(&str, &str)] = &[
    ("pointer-events-", "pointer-events"),
    ("min-w-", "min-w"),
    ("max-w-", "max-w"),
    ("min-h-", "min-h"),
    ("max-h-", "max-h"),
    ("gap-x-", "gap-x"),
    ("gap-y-", "gap-y"),
    ("gap-", "gap"),
    ("justify-items-", "justify-items"),
    ("justify-self-", "justify-self"),
    ("justify-", "justify-content"),
    ("items-", "align-items"),
    ("self-", "align-self"),
    ("content-", "align-content"),
    ("whitespace-", "whitespace"),
    ("cursor-", "cursor"),
    ("select-", "user-select"),
    ("opacity-", "opacity"),
    ("scale-x-", "scale-x"),
    ("scale-y-", "scale-y"),
    ("scale-", "scale"),
    ("leading-", "leading"),
    ("tracking-", "tracking"),
    ("transition-", "transition"),
    ("duration-", "duration"),
    ("ease-", "ease"),
    ("overflow-x-", "overflow-x"),
    ("overflow-y-", "overflow-y"),
    ("overflow-", "overflow"),
    ("z-", "z"),
    ("size-", "size"),
    ("w-", "w"),
    ("h-", "h"),
    ("px-", "px"),
    ("py-", "py"),
    ("pt-", "pt"),
    ("pr-", "pr"),
    ("pb-", "pb"),
    ("pl-", "pl"),
    ("ps-", "ps"),
    ("pe-", "pe"),
    ("p-", "p"),
    ("mx-", "mx"),
    ("my-", "my"),
    ("mt-", "mt"),
    ("mr-", "mr"),
    ("mb-", "mb"),
    ("ml-", "ml"),
    ("ms-", "ms"),
    ("me-", "me"),
    ("m-", "m"),
];

/// (side, width group, color group) for `border-{side}[-value]`.
const BORDER_SIDES: &[(&str, &str, &str)] = &[
    ("x", "border-w-x", "border-color-x"),
    ("y", "border-w-y", "border-color-y"),
    ("t", "border-w-t", "border-color-t"),
    ("r", "border-w-r", "border-color-r"),
    ("b", "border-w-b", "border-color-b"),
    ("l", "border-w-l", "border-color-l"),
    ("s", "border-w-s", "border-color-s"),
    ("e", "border-w-e", "border-color-e"),
];

/// (side, group) for `rounded-{side}[-value]`. Two-letter corners first.
const ROUNDED_SIDES: &[(&str, &str)] = &[
    ("tl", "rounded-tl"),
    ("tr", "rounded-tr"),
    ("br", "rounded-br"),
    ("bl", "rounded-bl"),
    ("ss", "rounded-ss"),
    ("se", "rounded-se"),
    ("es", "rounded-es"),
    ("ee", "rounded-ee"),
    ("t", "rounded-t"),
    ("r", "rounded-r"),
    ("b", "rounded-b"),
    ("l", "rounded-l"),
    ("s", "rounded-s"),
    ("e", "rounded-e"),
];

/// Returns the built-in group of a utility (modifiers already stripped).
pub fn builtin_group(utility: &str) -> Option<&'static str> {
    if DISPLAY.contains(&utility) {
        return Some("display");
    }
    if POSITION.contains(&utility) {
        return Some("position");
    }
    match utility {
        "border" => return Some("border-w"),
        "rounded" => return Some("rounded"),
        "shadow" => return Some("shadow"),
        "transition" => return Some("transition"),
        "truncate" => return Some("text-overflow"),
        "grow" => return Some("grow"),
        "shrink" => return Some("shrink"),
        _ => {}
    }

    if let Some(value) = utility.strip_prefix("text-") {
        return Some(text_group(value));
    }
    if let Some(value) = utility.strip_prefix("bg-") {
        return Some(bg_group(value));
    }
    if let Some(value) = utility.strip_prefix("border-") {
        return Some(border_group(value));
    }
    if let Some(value) = utility.strip_prefix("shadow-") {
        return Some(if SHADOW_SIZES.contains(&value) || is_arbitrary(value) {
            "shadow"
        } else {
            "shadow-color"
        });
    }
    if let Some(value) = utility.strip_prefix("font-") {
        return Some(if FONT_WEIGHTS.contains(&value) {
            "font-weight"
        } else {
            "font-family"
        });
    }
    if let Some(value) = utility.strip_prefix("rounded-") {
        return Some(rounded_group(value));
    }
    if let Some(value) = utility.strip_prefix("flex-") {
        return Some(match value {
            "row" | "row-reverse" | "col" | "col-reverse" => "flex-direction",
            "wrap" | "wrap-reverse" | "nowrap" => "flex-wrap",
            _ => "flex",
        });
    }

    PREFIX_GROUPS
        .iter()
        .find(|(prefix, _)| utility.starts_with(prefix) && utility.len() > prefix.len())
        .map(|(_, group)| *group)
}

/// Groups that a token of `group` overrides in addition to its own.
pub fn conflicting_groups(group: &str) -> &'static [&'static str] {
    match group {
        "p" => &["px", "py", "pt", "pr", "pb", "pl", "ps", "pe"],
        "px" => &["pr", "pl"],
        "py" => &["pt", "pb"],
        "m" => &["mx", "my", "mt", "mr", "mb", "ml", "ms", "me"],
        "mx" => &["mr", "ml"],
        "my" => &["mt", "mb"],
        "size" => &["w", "h"],
        "gap" => &["gap-x", "gap-y"],
        "scale" => &["scale-x", "scale-y"],
        "overflow" => &["overflow-x", "overflow-y"],
        "font-size" => &["leading"],
        "rounded" => &[
            "rounded-t",
            "rounded-r",
            "rounded-b",
            "rounded-l",
            "rounded-s",
            "rounded-e",
            "rounded-tl",
            "rounded-tr",
            "rounded-br",
            "rounded-bl",
            "rounded-ss",
            "rounded-se",
            "rounded-es",
            "rounded-ee",
        ],
        "rounded-t" => &["rounded-tl", "rounded-tr"],
        "rounded-r" => &["rounded-tr", "rounded-br"],
        "rounded-b" => &["rounded-br", "rounded-bl"],
        "rounded-l" => &["rounded-tl", "rounded-bl"],
        "border-w" => &[
            "border-w-x",
            "border-w-y",
            "border-w-t",
            "border-w-r",
            "border-w-b",
            "border-w-l",
            "border-w-s",
            "border-w-e",
        ],
        "border-w-x" => &["border-w-r", "border-w-l"],
        "border-w-y" => &["border-w-t", "border-w-b"],
        "border-color" => &[
            "border-color-x",
            "border-color-y",
            "border-color-t",
            "border-color-r",
            "border-color-b",
            "border-color-l",
            "border-color-s",
            "border-color-e",
        ],
        "border-color-x" => &["border-color-r", "border-color-l"],
        "border-color-y" => &["border-color-t", "border-color-b"],
        _ => &[],
    }
}

fn text_group(value: &str) -> &'static str {
    // `text-sm/6` carries a line height; `text-white/70` an opacity.
    let base = value.split('/').next().unwrap_or(value);
    if FONT_SIZES.contains(&base) || (is_arbitrary(base) && is_length(base)) {
        "font-size"
    } else if TEXT_ALIGN.contains(&value) {
        "text-align"
    } else if value == "ellipsis" || value == "clip" {
        "text-overflow"
    } else if TEXT_WRAP.contains(&value) {
        "text-wrap"
    } else {
        "text-color"
    }
}

fn bg_group(value: &str) -> &'static str {
    match value {
        "fixed" | "local" | "scroll" => "bg-attachment",
        "auto" | "cover" | "contain" => "bg-size",
        "bottom" | "center" | "left" | "left-bottom" | "left-top" | "right" | "right-bottom"
        | "right-top" | "top" => "bg-position",
        "repeat" | "no-repeat" | "repeat-x" | "repeat-y" | "repeat-round" | "repeat-space" => {
            "bg-repeat"
        }
        "none" => "bg-image",
        _ if value.starts_with("gradient-") => "bg-image",
        _ => "bg-color",
    }
}

fn border_group(value: &str) -> &'static str {
    if BORDER_STYLES.contains(&value) {
        return "border-style";
    }
    if value == "collapse" || value == "separate" {
        return "border-collapse";
    }
    if is_length(value) {
        return "border-w";
    }
    for (side, width, color) in BORDER_SIDES {
        if value == *side {
            return width;
        }
        if let Some(rest) = value.strip_prefix(side).and_then(|r| r.strip_prefix('-')) {
            return if is_length(rest) { width } else { color };
        }
    }
    "border-color"
}

fn rounded_group(value: &str) -> &'static str {
    for (side, group) in ROUNDED_SIDES {
        if value == *side || value.strip_prefix(side).is_some_and(|r| r.starts_with('-')) {
            return group;
        }
    }
    "rounded"
}

fn is_arbitrary(value: &str) -> bool {
    value.starts_with('[') && value.ends_with(']')
}

/// Numeric scale values (`2`, `0.5`) and arbitrary lengths (`[3px]`).
fn is_length(value: &str) -> bool {
    if is_arbitrary(value) {
        let inner = value.trim_start_matches('[').trim_end_matches(']');
        let inner = inner.strip_prefix("length:").unwrap_or(inner);
        return ["px", "rem", "em", "%", "vh", "vw"]
            .iter()
            .any(|unit| inner.ends_with(unit))
            || inner.parse::<f64>().is_ok();
    }
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit() || c == '.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_size_vs_color() {
        assert_eq!(builtin_group("text-xs"), Some("font-size"));
        assert_eq!(builtin_group("text-2xl"), Some("font-size"));
        assert_eq!(builtin_group("text-sm/6"), Some("font-size"));
        assert_eq!(builtin_group("text-[13px]"), Some("font-size"));
        assert_eq!(builtin_group("text-button-primary"), Some("text-color"));
        assert_eq!(builtin_group("text-white/70"), Some("text-color"));
        assert_eq!(builtin_group("text-inherit"), Some("text-color"));
        assert_eq!(builtin_group("text-center"), Some("text-align"));
    }

    #[test]
    fn test_border_width_style_color() {
        assert_eq!(builtin_group("border"), Some("border-w"));
        assert_eq!(builtin_group("border-2"), Some("border-w"));
        assert_eq!(builtin_group("border-solid"), Some("border-style"));
        assert_eq!(builtin_group("border-button-primary"), Some("border-color"));
        assert_eq!(builtin_group("border-palette-green10"), Some("border-color"));
        assert_eq!(builtin_group("border-t"), Some("border-w-t"));
        assert_eq!(builtin_group("border-b-2"), Some("border-w-b"));
        assert_eq!(builtin_group("border-b-default"), Some("border-color-b"));
        assert_eq!(builtin_group("border-transparent"), Some("border-color"));
    }

    #[test]
    fn test_shadow_size_vs_color() {
        assert_eq!(builtin_group("shadow"), Some("shadow"));
        assert_eq!(builtin_group("shadow-xs"), Some("shadow"));
        assert_eq!(builtin_group("shadow-none"), Some("shadow"));
        assert_eq!(builtin_group("shadow-black"), Some("shadow-color"));
    }

    #[test]
    fn test_display_and_flex() {
        assert_eq!(builtin_group("inline-flex"), Some("display"));
        assert_eq!(builtin_group("flex"), Some("display"));
        assert_eq!(builtin_group("flex-col"), Some("flex-direction"));
        assert_eq!(builtin_group("flex-1"), Some("flex"));
    }

    #[test]
    fn test_prefix_groups() {
        assert_eq!(builtin_group("gap-x-2"), Some("gap-x"));
        assert_eq!(builtin_group("gap-2"), Some("gap"));
        assert_eq!(builtin_group("justify-center"), Some("justify-content"));
        assert_eq!(builtin_group("justify-items-start"), Some("justify-items"));
        assert_eq!(builtin_group("pointer-events-none"), Some("pointer-events"));
        assert_eq!(builtin_group("px-0"), Some("px"));
        assert_eq!(builtin_group("p-0"), Some("p"));
        assert_eq!(builtin_group("h-15"), Some("h"));
        assert_eq!(builtin_group("max-w-7xl"), Some("max-w"));
        assert_eq!(builtin_group("scale-98"), Some("scale"));
    }

    #[test]
    fn test_rounded_sides() {
        assert_eq!(builtin_group("rounded-md"), Some("rounded"));
        assert_eq!(builtin_group("rounded-t-md"), Some("rounded-t"));
        assert_eq!(builtin_group("rounded-tl"), Some("rounded-tl"));
        assert_eq!(builtin_group("rounded-full"), Some("rounded"));
    }

    #[test]
    fn test_unknown_utilities() {
        assert_eq!(builtin_group("hocus"), None);
        assert_eq!(builtin_group("icon-sm"), None);
        assert_eq!(builtin_group("w-"), None);
    }

    #[test]
    fn test_conflicts() {
        assert!(conflicting_groups("p").contains(&"px"));
        assert!(conflicting_groups("px").contains(&"pl"));
        assert!(conflicting_groups("font-size").contains(&"leading"));
        assert!(conflicting_groups("bg-color").is_empty());
    }
}
