//! TOML theme files
//!
//! A theme file names a theme, optionally extends a registered theme, and
//! lists token values by their semantic names:
//!
//! ```toml
//! name = "Ocean"
//! scheme = "dark"
//! extends = "dark"
//!
//! [colors]
//! primary = "#0EA5E9"
//!
//! [spacing]
//! md = 18
//!
//! [typography.bodyMedium]
//! family = "Inter"
//! size = 15
//! line_height = 22
//!
//! [animations.normal]
//! duration_ms = 200
//! easing = "cubic-bezier(0.2, 0, 0, 1)"
//! ```
//!
//! Without `extends`, every required token must be listed.

use std::path::Path;

use hue_core::Color;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::builder::ThemeBuilder;
use crate::error::ThemeError;
use crate::registry::ThemeRegistry;
use crate::theme::{ColorScheme, Theme};
use crate::themes::StandardTheme;
use crate::tokens::*;

/// On-disk form of a theme
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeFile {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheme: Option<ColorScheme>,
    /// Id of a registered theme supplying every token not listed here
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extends: Option<String>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub colors: IndexMap<String, Color>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub spacing: IndexMap<String, f32>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub borders: IndexMap<String, f32>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub typography: IndexMap<String, FontDescriptor>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub shadows: IndexMap<String, Shadow>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub animations: IndexMap<String, Motion>,
}

impl ThemeFile {
    pub fn from_toml(src: &str) -> Result<Self, ThemeError> {
        Ok(toml::from_str(src)?)
    }

    pub fn to_toml(&self) -> Result<String, ThemeError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// A self-contained file listing every token of `theme`
    pub fn from_theme(theme: &dyn Theme) -> Self {
        Self {
            name: theme.name().to_string(),
            scheme: Some(theme.color_scheme()),
            extends: None,
            colors: theme
                .colors()
                .iter()
                .map(|(t, c)| (t.name().to_string(), c))
                .collect(),
            spacing: theme
                .spacing()
                .iter()
                .map(|(t, v)| (t.name().to_string(), v))
                .collect(),
            borders: theme
                .borders()
                .iter()
                .map(|(t, v)| (t.name().to_string(), v))
                .collect(),
            typography: theme
                .typography()
                .iter()
                .map(|(t, f)| (t.name().to_string(), f.clone()))
                .collect(),
            shadows: theme
                .shadows()
                .iter()
                .map(|(t, s)| (t.name().to_string(), s))
                .collect(),
            animations: theme
                .animations()
                .iter()
                .map(|(t, m)| (t.name().to_string(), m))
                .collect(),
        }
    }

    /// Builder seeded from `extends` (looked up in `registry`) and the listed values
    pub fn into_builder(self, registry: &ThemeRegistry) -> Result<ThemeBuilder, ThemeError> {
        let mut builder = match &self.extends {
            Some(id) => ThemeBuilder::from_theme(registry.get_or_err(id)?.as_ref()),
            None => ThemeBuilder::new(self.name.as_str()),
        };
        builder = builder.name(self.name);
        if let Some(scheme) = self.scheme {
            builder = builder.scheme(scheme);
        }

        for (name, value) in self.colors {
            builder = builder.set(TokenCategory::Color, &name, value)?;
        }
        for (name, value) in self.spacing {
            builder = builder.set(TokenCategory::Spacing, &name, value)?;
        }
        for (name, value) in self.borders {
            builder = builder.set(TokenCategory::Border, &name, value)?;
        }
        for (name, value) in self.typography {
            builder = builder.set(TokenCategory::Typography, &name, value)?;
        }
        for (name, value) in self.shadows {
            builder = builder.set(TokenCategory::Shadow, &name, value)?;
        }
        for (name, value) in self.animations {
            builder = builder.set(TokenCategory::Animation, &name, value)?;
        }

        Ok(builder)
    }

    /// Build against the built-in presets
    pub fn build(self) -> Result<StandardTheme, ThemeError> {
        self.into_builder(&ThemeRegistry::with_presets())?.build()
    }
}

/// Parse and build a theme from TOML source
pub fn parse_theme_str(src: &str) -> Result<StandardTheme, ThemeError> {
    ThemeFile::from_toml(src)?.build()
}

/// Load a theme file from disk
pub fn load_theme_file(path: impl AsRef<Path>) -> Result<StandardTheme, ThemeError> {
    let path = path.as_ref();
    let src = std::fs::read_to_string(path).map_err(|source| ThemeError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let theme = parse_theme_str(&src)?;
    debug!(path = %path.display(), theme = %theme.name(), "loaded theme file");
    Ok(theme)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accessibility::AccessibilityContext;
    use crate::presets::ThemePreset;
    use crate::system::*;
    use hue_core::Easing;
    use pretty_assertions::assert_eq;

    const OCEAN: &str = r##"
name = "Ocean"
scheme = "dark"
extends = "dark"

[colors]
primary = "#0EA5E9"

[spacing]
md = 18

[typography.bodyMedium]
family = "Inter"
size = 15
line_height = 22

[animations.normal]
duration_ms = 200
easing = "cubic-bezier(0.2, 0, 0, 1)"
"##;

    #[test]
    fn extends_fills_unlisted_tokens() {
        let theme = parse_theme_str(OCEAN).unwrap();
        let dark = StandardTheme::dark();
        let ctx = AccessibilityContext::default();

        assert_eq!(theme.name(), "Ocean");
        assert_eq!(theme.color_scheme(), ColorScheme::Dark);
        assert_eq!(theme.colors().resolve(ColorToken::Primary, &ctx), Color::from_hex(0x0EA5E9));
        assert_eq!(theme.colors().get(ColorToken::Error), dark.colors().get(ColorToken::Error));
        assert_eq!(theme.spacing().get(SpacingToken::Md), 18.0);
        assert_eq!(theme.spacing().get(SpacingToken::Lg), 24.0);

        let body = theme.typography().get(TypographyToken::BodyMedium);
        assert_eq!(body.family, "Inter");
        assert_eq!(body.weight, FontWeight::Regular);

        let motion = theme.animations().get(AnimationToken::Normal);
        assert_eq!(motion.easing, Easing::CubicBezier(0.2, 0.0, 0.0, 1.0));
    }

    #[test]
    fn presets_survive_a_trip_through_toml() {
        for preset in ThemePreset::all() {
            let original = preset.build();
            let toml = ThemeFile::from_theme(&original).to_toml().unwrap();
            let rebuilt = parse_theme_str(&toml).unwrap();
            assert_eq!(rebuilt, original, "{preset}");
        }
    }

    #[test]
    fn fractional_values_are_written_plainly() {
        let toml = ThemeFile::from_theme(&ThemePreset::Light.build()).to_toml().unwrap();
        assert!(toml.contains("letter_spacing = 0.15\n"), "{toml}");
        assert!(!toml.contains("0.15000000596"));
    }

    #[test]
    fn standalone_file_must_be_complete() {
        let err = parse_theme_str("name = \"Bare\"\n[colors]\nprimary = \"#112233\"\n").unwrap_err();
        assert!(matches!(
            err,
            ThemeError::MissingToken { ref theme, name: "primaryHover", .. } if theme == "Bare"
        ));
    }

    #[test]
    fn unknown_names_are_rejected() {
        let err = parse_theme_str("name = \"X\"\nextends = \"light\"\n[colors]\nchartreuse = \"#7FFF00\"\n")
            .unwrap_err();
        assert!(matches!(err, ThemeError::UnknownToken { category: TokenCategory::Color, .. }));

        let err = parse_theme_str("name = \"X\"\nextends = \"sepia\"\n").unwrap_err();
        assert!(matches!(err, ThemeError::UnknownTheme(_)));

        let err = parse_theme_str("name = \"X\"\n[sizes]\nmd = 3\n").unwrap_err();
        assert!(matches!(err, ThemeError::Parse(_)));
    }

    #[test]
    fn bad_color_is_a_parse_error() {
        let err = parse_theme_str("name = \"X\"\nextends = \"light\"\n[colors]\nprimary = \"#12\"\n")
            .unwrap_err();
        assert!(matches!(err, ThemeError::Parse(_)));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_theme_file("/definitely/not/here.toml").unwrap_err();
        match err {
            ThemeError::Io { path, .. } => assert!(path.ends_with("here.toml")),
            other => panic!("expected Io, got {other:?}"),
        }
    }
}
