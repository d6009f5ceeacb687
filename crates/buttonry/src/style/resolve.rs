//! Mapping of sizes and variants to class fragments.
//!
//! Every function here is total over its enums: each member has an explicit
//! arm and there is no fallback.

use super::{merge, Size, Variant};

/// Structural classes shared by every button.
pub const BASE_CLASSES: &str =
    "inline-flex border border-solid rounded-md font-medium gap-2 items-center whitespace-nowrap transition";

/// Interaction suppression applied on top of the variant's disabled tokens.
pub const DISABLED_CLASSES: &str = "cursor-default opacity-80 pointer-events-none";

/// Classes of the `<span>` wrapping a button's children.
pub const CONTENT_CLASSES: &str = "flex self-center text-inherit leading-none";

/// Height, horizontal padding and text scale.
pub fn size_classes(size: Size) -> &'static str {
    match size {
        Size::Xs => "h-8 px-3 text-xs",
        Size::Sm => "h-9 px-4 text-sm",
        Size::Md => "h-10 px-4 text-sm",
        Size::Lg => "h-11 px-6 text-base",
        Size::Xl => "h-12 px-6 text-base",
        Size::Xxl => "h-15 px-6 text-lg",
    }
}

/// The three layers of a variant: base tokens, hover/active tokens used
/// while enabled, and the color tokens that replace the base when disabled.
struct VariantTokens {
    base: &'static str,
    interactive: &'static str,
    disabled: &'static str,
}

fn variant_tokens(variant: Variant) -> VariantTokens {
    match variant {
        Variant::Primary => VariantTokens {
            base: "border-button-primary bg-button-primary text-button-primary shadow-xs",
            interactive: "hocus:bg-button-primary-hover active:scale-98",
            disabled: "bg-button-primary-disabled border-button-primary-disabled text-button-primary-disabled",
        },
        Variant::Secondary => VariantTokens {
            base: "border-button-secondary bg-button-secondary text-button-secondary shadow-xs",
            interactive: "hocus:bg-button-secondary-hover active:scale-98",
            disabled: "bg-button-secondary-disabled border-button-secondary-disabled text-button-secondary-disabled",
        },
        Variant::Tertiary => VariantTokens {
            base: "border-button-tertiary bg-button-tertiary text-button-tertiary shadow-none",
            interactive: "hocus:bg-button-tertiary-hover active:scale-98",
            disabled: "bg-button-tertiary-disabled border-button-tertiary-disabled text-button-tertiary-disabled",
        },
        Variant::Quaternary => VariantTokens {
            base: "border-button-quaternary bg-button-quaternary text-button-quaternary shadow-none",
            interactive: "hocus:bg-button-quaternary-hover active:scale-98",
            disabled: "bg-button-quaternary-disabled border-button-quaternary-disabled text-button-quaternary-disabled",
        },
        Variant::Danger => VariantTokens {
            base: "border-button-danger bg-button-danger text-button-danger shadow-xs",
            interactive: "hocus:bg-button-danger-hover active:scale-98",
            disabled: "bg-button-danger-disabled border-button-danger-disabled text-button-danger-disabled",
        },
        Variant::DangerOutline => VariantTokens {
            base: "border-button-secondary-danger bg-button-secondary-danger text-button-secondary-danger shadow-xs",
            interactive: "hocus:bg-button-secondary-danger-hover active:scale-98",
            disabled: "bg-button-secondary-danger-disabled border-button-secondary-danger-disabled text-button-secondary-danger-disabled",
        },
        Variant::Success => VariantTokens {
            base: "border border-palette-green10 bg-palette-green10 text-white shadow-none",
            interactive: "hocus:bg-palette-green9 active:scale-98",
            disabled: "bg-palette-green7 border border-palette-green7 text-white/70",
        },
    }
}

/// Border, background and text colors of a variant.
///
/// While enabled the hover and active-press tokens are included; when
/// disabled they are left out and the disabled colors override the base
/// colors through the merge.
pub fn theme_classes(variant: Variant, disabled: bool) -> String {
    let tokens = variant_tokens(variant);
    crate::classes!(
        tokens.base,
        (!disabled).then_some(tokens.interactive),
        disabled.then_some(tokens.disabled),
    )
}

/// Icon size for a control size. Above `sm` the sizes pair up: `md` and
/// `lg` use `icon-md`, `xl` and `2xl` use `icon-lg`.
pub fn icon_size_classes(size: Size) -> &'static str {
    match size {
        Size::Xs => "icon-xs",
        Size::Sm => "icon-sm",
        Size::Md => "icon-md",
        Size::Lg => "icon-md",
        Size::Xl => "icon-lg",
        Size::Xxl => "icon-lg",
    }
}

/// Icon tint of a variant. Success buttons leave icons in the text color.
pub fn themed_icon_classes(variant: Variant) -> Option<&'static str> {
    match variant {
        Variant::Primary => Some("text-button-primary-icon"),
        Variant::Secondary => Some("text-button-secondary-icon"),
        Variant::Tertiary => Some("text-button-tertiary-icon"),
        Variant::Quaternary => Some("text-button-quaternary-icon"),
        Variant::Danger => Some("text-button-danger-icon"),
        Variant::DangerOutline => Some("text-button-secondary-danger-icon"),
        Variant::Success => None,
    }
}

/// Square footprint for a control whose only content is an icon. The width
/// matches the height from [`size_classes`].
pub fn icon_only_layout_classes(size: Size) -> &'static str {
    match size {
        Size::Xs => "px-0 w-8 justify-center items-center",
        Size::Sm => "px-0 w-9 justify-center items-center",
        Size::Md => "px-0 w-10 justify-center items-center",
        Size::Lg => "px-0 w-11 justify-center items-center",
        Size::Xl => "px-0 w-12 justify-center items-center",
        Size::Xxl => "px-0 w-15 justify-center items-center",
    }
}

/// Classes applied to icon slots: size, tint and the dimmed look of a
/// disabled control.
pub fn icon_classes(size: Size, variant: Variant, disabled: bool) -> String {
    merge([
        Some(icon_size_classes(size)),
        themed_icon_classes(variant),
        disabled.then_some("opacity-60"),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use buttonry_merge::MergeConfig;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn tokens_in_group(classes: &str, group: &str) -> HashSet<String> {
        let config = MergeConfig::new();
        classes
            .split_whitespace()
            .filter(|t| !t.contains(':'))
            .filter(|t| config.group_of(t) == Some(group))
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_size_classes_match_table() {
        assert_eq!(size_classes(Size::Xs), "h-8 px-3 text-xs");
        assert_eq!(size_classes(Size::Sm), "h-9 px-4 text-sm");
        assert_eq!(size_classes(Size::Xxl), "h-15 px-6 text-lg");
    }

    #[test]
    fn test_primary_enabled_classes() {
        assert_eq!(
            theme_classes(Variant::Primary, false),
            "border-button-primary bg-button-primary text-button-primary shadow-xs \
             hocus:bg-button-primary-hover active:scale-98"
        );
    }

    #[test]
    fn test_primary_disabled_classes_drop_interaction() {
        let classes = theme_classes(Variant::Primary, true);
        assert_eq!(
            classes,
            "shadow-xs bg-button-primary-disabled border-button-primary-disabled \
             text-button-primary-disabled"
        );
        assert!(!classes.contains("hocus:"));
        assert!(!classes.contains("active:"));
    }

    #[test]
    fn test_success_disabled_keeps_border_width() {
        let classes = theme_classes(Variant::Success, true);
        assert!(classes.split(' ').any(|t| t == "border"));
        assert!(classes.contains("bg-palette-green7"));
        assert!(!classes.contains("bg-palette-green10"));
    }

    #[test]
    fn test_enabled_and_disabled_colors_are_disjoint() {
        for variant in Variant::ALL {
            let enabled = theme_classes(variant, false);
            let disabled = theme_classes(variant, true);
            for group in ["bg-color", "border-color", "text-color"] {
                let on = tokens_in_group(&enabled, group);
                let off = tokens_in_group(&disabled, group);
                assert!(!on.is_empty(), "{variant} has no enabled {group}");
                assert!(!off.is_empty(), "{variant} has no disabled {group}");
                assert!(
                    on.is_disjoint(&off),
                    "{variant} shares {group} tokens: {on:?} / {off:?}"
                );
            }
        }
    }

    #[test]
    fn test_icon_size_mapping() {
        assert_eq!(icon_size_classes(Size::Lg), "icon-md");
        assert_eq!(icon_size_classes(Size::Xl), "icon-lg");
        assert_eq!(icon_size_classes(Size::Xxl), "icon-lg");
    }

    #[test]
    fn test_success_has_no_icon_tint() {
        assert_eq!(themed_icon_classes(Variant::Success), None);
        for variant in Variant::ALL.into_iter().filter(|v| *v != Variant::Success) {
            assert!(themed_icon_classes(variant).is_some());
        }
    }

    #[test]
    fn test_icon_only_width_matches_height() {
        for size in Size::ALL {
            let height = size_classes(size).split(' ').next().unwrap();
            let width = format!("w-{}", height.trim_start_matches("h-"));
            assert!(icon_only_layout_classes(size).contains(&width));
        }
    }

    #[test]
    fn test_icon_classes_disabled() {
        assert_eq!(
            icon_classes(Size::Md, Variant::Danger, true),
            "icon-md text-button-danger-icon opacity-60"
        );
        assert_eq!(icon_classes(Size::Xs, Variant::Success, false), "icon-xs");
    }

    proptest! {
        #[test]
        fn prop_resolvers_are_pure_and_non_empty(
            size in prop::sample::select(Size::ALL.to_vec()),
            variant in prop::sample::select(Variant::ALL.to_vec()),
            disabled in any::<bool>(),
        ) {
            prop_assert!(!size_classes(size).is_empty());
            prop_assert!(!theme_classes(variant, disabled).is_empty());
            prop_assert_eq!(theme_classes(variant, disabled), theme_classes(variant, disabled));
            prop_assert_eq!(
                icon_classes(size, variant, disabled),
                icon_classes(size, variant, disabled)
            );
        }
    }
}
