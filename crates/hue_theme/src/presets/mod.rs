//! Built-in theme preset catalog

use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::sync::Arc;

use hue_core::Color;

use crate::error::ThemeError;
use crate::theme::{ColorScheme, Theme};
use crate::themes::StandardTheme;
use crate::tokens::*;

/// Built-in theme presets
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ThemePreset {
    /// Catppuccin Latte based light theme
    Light,
    /// Catppuccin Mocha based dark theme
    Dark,
    /// Violet brand theme with rounder corners and the Inter type family
    Brand,
    /// Black-on-white theme meeting WCAG AAA text contrast
    HighContrast,
}

impl ThemePreset {
    /// Stable preset id for config/serialization.
    pub fn id(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Brand => "brand",
            Self::HighContrast => "high-contrast",
        }
    }

    /// User-facing display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::Brand => "Brand",
            Self::HighContrast => "High Contrast",
        }
    }

    /// Full preset list.
    pub fn all() -> &'static [ThemePreset] {
        const PRESETS: [ThemePreset; 4] = [
            ThemePreset::Light,
            ThemePreset::Dark,
            ThemePreset::Brand,
            ThemePreset::HighContrast,
        ];
        &PRESETS
    }

    /// Build the concrete theme for this preset.
    pub fn build(self) -> StandardTheme {
        match self {
            Self::Light => StandardTheme::light(),
            Self::Dark => StandardTheme::dark(),
            Self::Brand => brand(),
            Self::HighContrast => high_contrast(),
        }
    }

    /// Build this preset as a shareable theme.
    pub fn theme(self) -> Arc<dyn Theme> {
        Arc::new(self.build())
    }
}

impl Display for ThemePreset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ThemePreset {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|p| p.id().eq_ignore_ascii_case(id) || p.display_name().eq_ignore_ascii_case(id))
            .ok_or_else(|| ThemeError::UnknownTheme(s.to_string()))
    }
}

#[derive(Clone, Copy)]
struct BasePalette {
    background: Color,
    foreground: Color,
    card: Color,
    primary: Color,
    primary_foreground: Color,
    secondary: Color,
    muted_foreground: Color,
    accent: Color,
    destructive: Color,
    border: Color,
    ring: Color,
}

fn brand() -> StandardTheme {
    let palette = BasePalette {
        background: Color::from_hex(0xFAF9FF),
        foreground: Color::from_hex(0x1C1531),
        card: Color::from_hex(0xFFFFFF),
        primary: Color::from_hex(0x5B21B6),
        primary_foreground: Color::from_hex(0xFFFFFF),
        secondary: Color::from_hex(0x0F766E),
        muted_foreground: Color::from_hex(0x5B5475),
        accent: Color::from_hex(0xDB2777),
        destructive: Color::from_hex(0xB91C1C),
        border: Color::from_hex(0xE4DEF5),
        ring: Color::from_hex(0x7C3AED),
    };

    StandardTheme {
        name: "Brand".to_string(),
        scheme: ColorScheme::Light,
        colors: build_colors(palette),
        typography: TypographyTokens::with_family("Inter"),
        spacing: SpacingTokens::default(),
        shadows: ShadowTokens::light(),
        borders: BorderTokens::rounded(),
        animations: AnimationTokens::default(),
    }
}

fn high_contrast() -> StandardTheme {
    let palette = BasePalette {
        background: Color::WHITE,
        foreground: Color::BLACK,
        card: Color::WHITE,
        primary: Color::from_hex(0x0033CC),
        primary_foreground: Color::WHITE,
        secondary: Color::from_hex(0x1A1A1A),
        muted_foreground: Color::from_hex(0x1F1F1F),
        accent: Color::from_hex(0x6600CC),
        destructive: Color::from_hex(0xB00020),
        border: Color::BLACK,
        ring: Color::from_hex(0x0033CC),
    };

    StandardTheme {
        name: "High Contrast".to_string(),
        scheme: ColorScheme::Light,
        colors: build_colors(palette),
        typography: TypographyTokens::default(),
        spacing: SpacingTokens::default(),
        shadows: ShadowTokens::light(),
        borders: BorderTokens {
            width_hairline: 1.0,
            width_thin: 2.0,
            width_medium: 3.0,
            width_thick: 5.0,
            ..BorderTokens::default()
        },
        animations: AnimationTokens::default(),
    }
}

/// Derive the full light-scheme color set from a base palette
///
/// Hover and active states darken the primary color; tertiary text sits a
/// quarter of the way from muted text to the background.
fn build_colors(base: BasePalette) -> ColorTokens {
    ColorTokens {
        primary: base.primary,
        primary_hover: blend(base.primary, Color::BLACK, 0.10),
        primary_active: blend(base.primary, Color::BLACK, 0.20),
        secondary: base.secondary,
        accent: base.accent,
        success: Color::from_hex(0x15803D),
        warning: Color::from_hex(0xB45309),
        error: base.destructive,
        info: Color::from_hex(0x0369A1),
        background: base.background,
        surface: base.card,
        surface_elevated: blend(base.card, Color::BLACK, 0.04),
        overlay: Color::BLACK.with_alpha(0.4).quantize(),
        text_primary: base.foreground,
        text_secondary: base.muted_foreground,
        text_tertiary: blend(base.muted_foreground, base.background, 0.25),
        text_inverse: base.primary_foreground,
        text_link: base.primary,
        border: base.border,
        border_focus: base.ring,
        selection: base.primary.with_alpha(0.22).quantize(),
    }
}

/// Mix `a` toward `b`, rounded to what a theme file can express
fn blend(a: Color, b: Color, t: f32) -> Color {
    Color::lerp(&a, &b, t).quantize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_parse_back() {
        for preset in ThemePreset::all() {
            assert_eq!(preset.id().parse::<ThemePreset>().unwrap(), *preset);
            assert_eq!(preset.display_name().parse::<ThemePreset>().unwrap(), *preset);
        }
        assert!(matches!(
            "solarized".parse::<ThemePreset>(),
            Err(ThemeError::UnknownTheme(_))
        ));
    }

    #[test]
    fn derived_colors_are_hex_exact() {
        for preset in [ThemePreset::Brand, ThemePreset::HighContrast] {
            for (token, color) in preset.build().colors().iter() {
                assert_eq!(color, color.quantize(), "{preset}: {token}");
            }
        }
    }

    #[test]
    fn theme_names_match_display_names() {
        for preset in ThemePreset::all() {
            assert_eq!(preset.build().name(), preset.display_name());
        }
    }
}
