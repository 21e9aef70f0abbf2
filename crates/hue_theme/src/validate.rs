//! WCAG contrast checks for theme color pairs

use std::fmt;

use hue_core::Color;
use tracing::warn;

use crate::theme::Theme;
use crate::tokens::ColorToken;

/// WCAG 2.1 conformance levels
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub enum WcagLevel {
    /// Level AA (recommended)
    #[default]
    AA,
    /// Level AAA
    AAA,
}

impl WcagLevel {
    /// Minimum ratio for body text
    pub fn normal_text_ratio(self) -> f32 {
        match self {
            Self::AA => 4.5,
            Self::AAA => 7.0,
        }
    }

    /// Minimum ratio for large text and UI components
    pub fn large_text_ratio(self) -> f32 {
        match self {
            Self::AA => 3.0,
            Self::AAA => 4.5,
        }
    }
}

impl fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::AA => "AA",
            Self::AAA => "AAA",
        })
    }
}

/// How a foreground is used on its background
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ContrastUse {
    /// Body text
    Text,
    /// Large text, icons, focus rings and other UI components
    Large,
}

/// Foreground/background pairs checked by [`validate_contrast`]
pub const CONTRAST_PAIRS: &[(ColorToken, ColorToken, ContrastUse)] = &[
    (ColorToken::TextPrimary, ColorToken::Background, ContrastUse::Text),
    (ColorToken::TextPrimary, ColorToken::Surface, ContrastUse::Text),
    (ColorToken::TextSecondary, ColorToken::Background, ContrastUse::Text),
    (ColorToken::TextSecondary, ColorToken::Surface, ContrastUse::Text),
    (ColorToken::TextLink, ColorToken::Surface, ContrastUse::Text),
    (ColorToken::TextInverse, ColorToken::Primary, ContrastUse::Text),
    (ColorToken::TextTertiary, ColorToken::Surface, ContrastUse::Large),
    (ColorToken::BorderFocus, ColorToken::Background, ContrastUse::Large),
    (ColorToken::Error, ColorToken::Surface, ContrastUse::Large),
];

/// A color pair that falls short of the requested level
#[derive(Clone, Debug, PartialEq)]
pub struct ContrastIssue {
    pub foreground: ColorToken,
    pub background: ColorToken,
    pub usage: ContrastUse,
    pub ratio: f32,
    pub required: f32,
}

impl fmt::Display for ContrastIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} on {}: {:.2}:1, needs {:.1}:1",
            self.foreground, self.background, self.ratio, self.required
        )
    }
}

/// Check every pair in [`CONTRAST_PAIRS`] against `level`
///
/// Translucent foregrounds are composited over their background first.
/// An empty result means the theme conforms; the check never rejects a theme.
pub fn validate_contrast(theme: &dyn Theme, level: WcagLevel) -> Vec<ContrastIssue> {
    let colors = theme.colors();
    let mut issues = Vec::new();

    for &(fg, bg, usage) in CONTRAST_PAIRS {
        let background = colors.get(bg).over(Color::WHITE);
        let foreground = colors.get(fg).over(background);
        let ratio = foreground.contrast_ratio(background);
        let required = match usage {
            ContrastUse::Text => level.normal_text_ratio(),
            ContrastUse::Large => level.large_text_ratio(),
        };

        if ratio < required {
            let issue = ContrastIssue {
                foreground: fg,
                background: bg,
                usage,
                ratio,
                required,
            };
            warn!(theme = theme.name(), %level, "{issue}");
            issues.push(issue);
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::ThemeBuilder;
    use crate::presets::ThemePreset;

    #[test]
    fn presets_meet_aa() {
        for preset in ThemePreset::all() {
            let issues = validate_contrast(&preset.build(), WcagLevel::AA);
            assert!(issues.is_empty(), "{preset}: {issues:?}");
        }
    }

    #[test]
    fn high_contrast_meets_aaa() {
        let issues = validate_contrast(&ThemePreset::HighContrast.build(), WcagLevel::AAA);
        assert!(issues.is_empty(), "{issues:?}");
    }

    #[test]
    fn light_misses_aaa_for_secondary_text() {
        let issues = validate_contrast(&ThemePreset::Light.build(), WcagLevel::AAA);
        assert!(issues.iter().any(|issue| {
            issue.foreground == ColorToken::TextSecondary
                && issue.background == ColorToken::Background
                && issue.required == 7.0
        }));
    }

    #[test]
    fn pale_text_is_flagged() {
        let washed_out = ThemeBuilder::from_theme(&ThemePreset::Light.build())
            .name("Washed Out")
            .color(ColorToken::TextPrimary, Color::from_hex(0xC8C8C8))
            .build()
            .unwrap();

        let issues = validate_contrast(&washed_out, WcagLevel::AA);
        assert_eq!(issues.len(), 2);
        assert!(issues
            .iter()
            .all(|issue| issue.foreground == ColorToken::TextPrimary && issue.ratio < 4.5));
    }

    #[test]
    fn translucent_text_is_composited() {
        let ghost = ThemeBuilder::from_theme(&ThemePreset::HighContrast.build())
            .color(ColorToken::TextPrimary, Color::BLACK.with_alpha(0.2))
            .build()
            .unwrap();

        let issues = validate_contrast(&ghost, WcagLevel::AA);
        assert!(issues
            .iter()
            .any(|issue| issue.foreground == ColorToken::TextPrimary));
    }
}
