//! Flattened token views for stylesheets and tooling

use indexmap::IndexMap;

use crate::accessibility::AccessibilityContext;
use crate::system::*;
use crate::theme::Theme;
use crate::tokens::*;

/// Every token of `theme`, resolved for `ctx`, in category then vocabulary order
pub fn resolved_tokens(theme: &dyn Theme, ctx: &AccessibilityContext) -> IndexMap<TokenPath, TokenValue> {
    let mut tokens = IndexMap::new();

    for &token in ColorToken::ALL {
        tokens.insert(token.into(), theme.colors().resolve(token, ctx).into());
    }
    for &token in TypographyToken::ALL {
        tokens.insert(token.into(), theme.typography().resolve(token, ctx).into());
    }
    for &token in SpacingToken::ALL {
        tokens.insert(token.into(), theme.spacing().resolve(token, ctx).into());
    }
    for &token in ShadowToken::ALL {
        tokens.insert(token.into(), theme.shadows().resolve(token, ctx).into());
    }
    for &token in BorderToken::ALL {
        tokens.insert(token.into(), theme.borders().resolve(token, ctx).into());
    }
    for &token in AnimationToken::ALL {
        tokens.insert(token.into(), theme.animations().resolve(token, ctx).into());
    }

    tokens
}

/// CSS custom properties for every token of `theme`
///
/// Keys carry the `--` prefix and read `--<category>-<kebab-name>`:
///
/// ```rust
/// use hue_theme::{css_variables, AccessibilityContext, ThemePreset};
///
/// let vars = css_variables(&ThemePreset::Light.build(), &AccessibilityContext::default());
/// assert_eq!(vars["--color-surface"], "#ffffff");
/// assert_eq!(vars["--spacing-md"], "16px");
/// ```
pub fn css_variables(theme: &dyn Theme, ctx: &AccessibilityContext) -> IndexMap<String, String> {
    resolved_tokens(theme, ctx)
        .into_iter()
        .map(|(path, value)| (css_variable_name(path), value.to_css()))
        .collect()
}

/// `colors.textPrimary` becomes `--color-text-primary`
pub fn css_variable_name(path: TokenPath) -> String {
    let prefix = match path.category {
        TokenCategory::Color => "color",
        TokenCategory::Typography => "font",
        TokenCategory::Spacing => "spacing",
        TokenCategory::Shadow => "shadow",
        TokenCategory::Border => "border",
        TokenCategory::Animation => "motion",
    };

    let mut name = format!("--{prefix}-");
    for ch in path.name.chars() {
        if ch.is_ascii_uppercase() {
            name.push('-');
            name.push(ch.to_ascii_lowercase());
        } else {
            name.push(ch);
        }
    }
    name
}

/// Render variables as a `:root { ... }` block
pub fn css_stylesheet(vars: &IndexMap<String, String>) -> String {
    let mut css = String::from(":root {\n");
    for (name, value) in vars {
        css.push_str("  ");
        css.push_str(name);
        css.push_str(": ");
        css.push_str(value);
        css.push_str(";\n");
    }
    css.push_str("}\n");
    css
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accessibility::SizeCategory;
    use crate::presets::ThemePreset;
    use pretty_assertions::assert_eq;

    #[test]
    fn every_required_name_is_exported() {
        let theme = ThemePreset::Dark.build();
        let tokens = resolved_tokens(&theme, &AccessibilityContext::default());

        let expected: usize = TokenCategory::ALL
            .iter()
            .map(|c| c.required_names().len())
            .sum();
        assert_eq!(tokens.len(), expected);

        let first = tokens.keys().next().copied();
        assert_eq!(first, Some(TokenPath::from(ColorToken::Primary)));
    }

    #[test]
    fn variable_names_are_kebab_case() {
        assert_eq!(
            css_variable_name(ColorToken::TextPrimary.into()),
            "--color-text-primary"
        );
        assert_eq!(
            css_variable_name(TypographyToken::BodyMedium.into()),
            "--font-body-medium"
        );
        assert_eq!(
            css_variable_name(BorderToken::RadiusFull.into()),
            "--border-radius-full"
        );
        assert_eq!(css_variable_name(SpacingToken::Xxs.into()), "--spacing-xxs");
    }

    #[test]
    fn css_values_follow_context() {
        let theme = ThemePreset::Light.build();
        let ctx = AccessibilityContext::default()
            .with_size_category(SizeCategory::ExtraExtraExtraLarge)
            .with_reduce_motion(true);
        let vars = css_variables(&theme, &ctx);

        assert_eq!(vars["--motion-normal"], "0ms linear");
        assert_eq!(vars["--color-overlay"], "rgba(0,0,0,0.4)");
        assert!(vars["--font-body-medium"].starts_with("400 18.9"));
    }

    #[test]
    fn stylesheet_wraps_root() {
        let mut vars = IndexMap::new();
        vars.insert("--spacing-md".to_string(), "16px".to_string());
        assert_eq!(css_stylesheet(&vars), ":root {\n  --spacing-md: 16px;\n}\n");
    }
}
