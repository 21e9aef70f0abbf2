//! Color tokens for theming

use hue_core::Color;

use crate::accessibility::AccessibilityContext;
use crate::system::ColorSystem;

token_keys! {
    /// Semantic color token keys for dynamic access
    pub enum ColorToken {
        Primary => "primary",
        PrimaryHover => "primaryHover",
        PrimaryActive => "primaryActive",
        Secondary => "secondary",
        Accent => "accent",
        Success => "success",
        Warning => "warning",
        Error => "error",
        Info => "info",
        Background => "background",
        Surface => "surface",
        SurfaceElevated => "surfaceElevated",
        Overlay => "overlay",
        TextPrimary => "textPrimary",
        TextSecondary => "textSecondary",
        TextTertiary => "textTertiary",
        TextInverse => "textInverse",
        TextLink => "textLink",
        Border => "border",
        BorderFocus => "borderFocus",
        Selection => "selection",
    }
}

/// Complete set of semantic color tokens
#[derive(Clone, Debug, PartialEq)]
pub struct ColorTokens {
    // Brand colors
    pub primary: Color,
    pub primary_hover: Color,
    pub primary_active: Color,
    pub secondary: Color,
    pub accent: Color,

    // Semantic colors
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,

    // Surface colors
    pub background: Color,
    pub surface: Color,
    pub surface_elevated: Color,
    pub overlay: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_tertiary: Color,
    pub text_inverse: Color,
    pub text_link: Color,

    // Border colors
    pub border: Color,
    pub border_focus: Color,

    pub selection: Color,
}

impl ColorTokens {
    /// Get a color by token key
    pub fn get(&self, token: ColorToken) -> Color {
        match token {
            ColorToken::Primary => self.primary,
            ColorToken::PrimaryHover => self.primary_hover,
            ColorToken::PrimaryActive => self.primary_active,
            ColorToken::Secondary => self.secondary,
            ColorToken::Accent => self.accent,
            ColorToken::Success => self.success,
            ColorToken::Warning => self.warning,
            ColorToken::Error => self.error,
            ColorToken::Info => self.info,
            ColorToken::Background => self.background,
            ColorToken::Surface => self.surface,
            ColorToken::SurfaceElevated => self.surface_elevated,
            ColorToken::Overlay => self.overlay,
            ColorToken::TextPrimary => self.text_primary,
            ColorToken::TextSecondary => self.text_secondary,
            ColorToken::TextTertiary => self.text_tertiary,
            ColorToken::TextInverse => self.text_inverse,
            ColorToken::TextLink => self.text_link,
            ColorToken::Border => self.border,
            ColorToken::BorderFocus => self.border_focus,
            ColorToken::Selection => self.selection,
        }
    }

    /// Iterate `(key, value)` pairs in vocabulary order
    pub fn iter(&self) -> impl Iterator<Item = (ColorToken, Color)> + '_ {
        ColorToken::ALL.iter().map(move |token| (*token, self.get(*token)))
    }

    /// Build a complete set, asking `f` for every key
    pub(crate) fn try_from_fn<E>(
        mut f: impl FnMut(ColorToken) -> Result<Color, E>,
    ) -> Result<Self, E> {
        Ok(Self {
            primary: f(ColorToken::Primary)?,
            primary_hover: f(ColorToken::PrimaryHover)?,
            primary_active: f(ColorToken::PrimaryActive)?,
            secondary: f(ColorToken::Secondary)?,
            accent: f(ColorToken::Accent)?,
            success: f(ColorToken::Success)?,
            warning: f(ColorToken::Warning)?,
            error: f(ColorToken::Error)?,
            info: f(ColorToken::Info)?,
            background: f(ColorToken::Background)?,
            surface: f(ColorToken::Surface)?,
            surface_elevated: f(ColorToken::SurfaceElevated)?,
            overlay: f(ColorToken::Overlay)?,
            text_primary: f(ColorToken::TextPrimary)?,
            text_secondary: f(ColorToken::TextSecondary)?,
            text_tertiary: f(ColorToken::TextTertiary)?,
            text_inverse: f(ColorToken::TextInverse)?,
            text_link: f(ColorToken::TextLink)?,
            border: f(ColorToken::Border)?,
            border_focus: f(ColorToken::BorderFocus)?,
            selection: f(ColorToken::Selection)?,
        })
    }
}

/// Colors do not vary with accessibility settings
impl ColorSystem for ColorTokens {
    fn resolve(&self, token: ColorToken, _ctx: &AccessibilityContext) -> Color {
        self.get(token)
    }
}
