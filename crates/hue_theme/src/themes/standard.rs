//! Default Hue themes
//!
//! The light and dark palettes are derived from Catppuccin: Latte for light
//! mode and Mocha for dark mode.

use hue_core::Color;

use crate::theme::{ColorScheme, Theme, ThemeBundle};
use crate::tokens::*;

/// Catppuccin Latte colors used by the light theme
pub mod latte {
    use hue_core::Color;

    pub const MAUVE: Color = Color::rgb(136.0 / 255.0, 57.0 / 255.0, 239.0 / 255.0);
    pub const RED: Color = Color::rgb(210.0 / 255.0, 15.0 / 255.0, 57.0 / 255.0);
    pub const BLUE: Color = Color::rgb(30.0 / 255.0, 102.0 / 255.0, 245.0 / 255.0);

    pub const TEXT: Color = Color::rgb(76.0 / 255.0, 79.0 / 255.0, 105.0 / 255.0);
    pub const SUBTEXT1: Color = Color::rgb(92.0 / 255.0, 95.0 / 255.0, 119.0 / 255.0);
    pub const OVERLAY1: Color = Color::rgb(140.0 / 255.0, 143.0 / 255.0, 161.0 / 255.0);
    pub const SURFACE0: Color = Color::rgb(204.0 / 255.0, 208.0 / 255.0, 218.0 / 255.0);
    pub const BASE: Color = Color::rgb(239.0 / 255.0, 241.0 / 255.0, 245.0 / 255.0);
}

/// Catppuccin Mocha colors used by the dark theme
pub mod mocha {
    use hue_core::Color;

    pub const MAUVE: Color = Color::rgb(203.0 / 255.0, 166.0 / 255.0, 247.0 / 255.0);
    pub const RED: Color = Color::rgb(243.0 / 255.0, 139.0 / 255.0, 168.0 / 255.0);
    pub const YELLOW: Color = Color::rgb(249.0 / 255.0, 226.0 / 255.0, 175.0 / 255.0);
    pub const GREEN: Color = Color::rgb(166.0 / 255.0, 227.0 / 255.0, 161.0 / 255.0);
    pub const TEAL: Color = Color::rgb(148.0 / 255.0, 226.0 / 255.0, 213.0 / 255.0);
    pub const SKY: Color = Color::rgb(137.0 / 255.0, 220.0 / 255.0, 235.0 / 255.0);
    pub const BLUE: Color = Color::rgb(137.0 / 255.0, 180.0 / 255.0, 250.0 / 255.0);

    pub const TEXT: Color = Color::rgb(205.0 / 255.0, 214.0 / 255.0, 244.0 / 255.0);
    pub const SUBTEXT1: Color = Color::rgb(186.0 / 255.0, 194.0 / 255.0, 222.0 / 255.0);
    pub const OVERLAY1: Color = Color::rgb(127.0 / 255.0, 132.0 / 255.0, 156.0 / 255.0);
    pub const SURFACE0: Color = Color::rgb(49.0 / 255.0, 50.0 / 255.0, 68.0 / 255.0);
    pub const SURFACE1: Color = Color::rgb(69.0 / 255.0, 71.0 / 255.0, 90.0 / 255.0);
    pub const BASE: Color = Color::rgb(30.0 / 255.0, 30.0 / 255.0, 46.0 / 255.0);
    pub const CRUST: Color = Color::rgb(17.0 / 255.0, 17.0 / 255.0, 27.0 / 255.0);
}

/// Concrete theme backed by one token set per category
///
/// Built-in themes are produced by the constructors below; custom themes go
/// through [`ThemeBuilder`](crate::ThemeBuilder) or a theme file, both of
/// which reject incomplete token sets.
#[derive(Clone, Debug, PartialEq)]
pub struct StandardTheme {
    pub(crate) name: String,
    pub(crate) scheme: ColorScheme,
    pub(crate) colors: ColorTokens,
    pub(crate) typography: TypographyTokens,
    pub(crate) spacing: SpacingTokens,
    pub(crate) shadows: ShadowTokens,
    pub(crate) borders: BorderTokens,
    pub(crate) animations: AnimationTokens,
}

impl StandardTheme {
    /// The light variant (Catppuccin Latte)
    pub fn light() -> Self {
        Self {
            name: "Light".to_string(),
            scheme: ColorScheme::Light,
            colors: ColorTokens {
                primary: latte::BLUE,
                primary_hover: Color::from_hex(0x1758D1),
                primary_active: Color::from_hex(0x114AB3),
                secondary: latte::MAUVE,
                accent: Color::from_hex(0x0E7C82),
                success: Color::from_hex(0x2F7A1F),
                warning: Color::from_hex(0xA3560B),
                error: latte::RED,
                info: Color::from_hex(0x1D6FA3),
                background: latte::BASE,
                surface: Color::WHITE,
                surface_elevated: Color::WHITE,
                overlay: Color::BLACK.with_alpha(0.4),
                text_primary: latte::TEXT,
                text_secondary: latte::SUBTEXT1,
                text_tertiary: latte::OVERLAY1,
                text_inverse: Color::WHITE,
                text_link: Color::from_hex(0x1758D1),
                border: latte::SURFACE0,
                border_focus: latte::BLUE,
                selection: latte::BLUE.with_alpha(0.3).quantize(),
            },
            typography: TypographyTokens::default(),
            spacing: SpacingTokens::default(),
            shadows: ShadowTokens::light(),
            borders: BorderTokens::default(),
            animations: AnimationTokens::default(),
        }
    }

    /// The dark variant (Catppuccin Mocha)
    pub fn dark() -> Self {
        Self {
            name: "Dark".to_string(),
            scheme: ColorScheme::Dark,
            colors: ColorTokens {
                primary: mocha::BLUE,
                primary_hover: Color::from_hex(0x9ECBFC),
                primary_active: Color::from_hex(0xB5D7FD),
                secondary: mocha::MAUVE,
                accent: mocha::TEAL,
                success: mocha::GREEN,
                warning: mocha::YELLOW,
                error: mocha::RED,
                info: mocha::SKY,
                background: mocha::BASE,
                surface: mocha::SURFACE0,
                surface_elevated: mocha::SURFACE1,
                overlay: Color::BLACK.with_alpha(0.6),
                text_primary: mocha::TEXT,
                text_secondary: mocha::SUBTEXT1,
                text_tertiary: mocha::OVERLAY1,
                text_inverse: mocha::CRUST,
                text_link: mocha::BLUE,
                border: mocha::SURFACE1,
                border_focus: mocha::BLUE,
                selection: mocha::BLUE.with_alpha(0.3).quantize(),
            },
            typography: TypographyTokens::default(),
            spacing: SpacingTokens::default(),
            shadows: ShadowTokens::dark(),
            borders: BorderTokens::default(),
            animations: AnimationTokens::default(),
        }
    }

    /// Light and dark variants as a bundle
    pub fn bundle() -> ThemeBundle {
        ThemeBundle::new("Hue", Self::light(), Self::dark())
    }
}

impl Theme for StandardTheme {
    fn name(&self) -> &str {
        &self.name
    }

    fn color_scheme(&self) -> ColorScheme {
        self.scheme
    }

    fn colors(&self) -> &ColorTokens {
        &self.colors
    }

    fn typography(&self) -> &TypographyTokens {
        &self.typography
    }

    fn spacing(&self) -> &SpacingTokens {
        &self.spacing
    }

    fn shadows(&self) -> &ShadowTokens {
        &self.shadows
    }

    fn borders(&self) -> &BorderTokens {
        &self.borders
    }

    fn animations(&self) -> &AnimationTokens {
        &self.animations
    }
}
