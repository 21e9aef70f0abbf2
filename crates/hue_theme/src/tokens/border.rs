//! Border tokens for theming (stroke widths and corner radii)

use crate::accessibility::AccessibilityContext;
use crate::system::BorderSystem;

token_keys! {
    /// Border width and radius keys for dynamic access
    pub enum BorderToken {
        WidthHairline => "widthHairline",
        WidthThin => "widthThin",
        WidthMedium => "widthMedium",
        WidthThick => "widthThick",
        RadiusNone => "radiusNone",
        RadiusSm => "radiusSm",
        RadiusMd => "radiusMd",
        RadiusLg => "radiusLg",
        RadiusXl => "radiusXl",
        RadiusFull => "radiusFull",
    }
}

impl BorderToken {
    /// Whether this token is a corner radius (as opposed to a stroke width)
    pub fn is_radius(self) -> bool {
        matches!(
            self,
            Self::RadiusNone
                | Self::RadiusSm
                | Self::RadiusMd
                | Self::RadiusLg
                | Self::RadiusXl
                | Self::RadiusFull
        )
    }
}

/// Complete set of border tokens (in points)
#[derive(Clone, Debug, PartialEq)]
pub struct BorderTokens {
    pub width_hairline: f32,
    pub width_thin: f32,
    pub width_medium: f32,
    pub width_thick: f32,
    pub radius_none: f32,
    pub radius_sm: f32,
    pub radius_md: f32,
    pub radius_lg: f32,
    pub radius_xl: f32,
    pub radius_full: f32,
}

impl BorderTokens {
    /// Get border metric by token key
    pub fn get(&self, token: BorderToken) -> f32 {
        match token {
            BorderToken::WidthHairline => self.width_hairline,
            BorderToken::WidthThin => self.width_thin,
            BorderToken::WidthMedium => self.width_medium,
            BorderToken::WidthThick => self.width_thick,
            BorderToken::RadiusNone => self.radius_none,
            BorderToken::RadiusSm => self.radius_sm,
            BorderToken::RadiusMd => self.radius_md,
            BorderToken::RadiusLg => self.radius_lg,
            BorderToken::RadiusXl => self.radius_xl,
            BorderToken::RadiusFull => self.radius_full,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (BorderToken, f32)> + '_ {
        BorderToken::ALL
            .iter()
            .map(move |token| (*token, self.get(*token)))
    }

    /// Same widths, rounder corners
    pub fn rounded() -> Self {
        Self {
            radius_sm: 6.0,
            radius_md: 10.0,
            radius_lg: 14.0,
            radius_xl: 22.0,
            ..Self::default()
        }
    }

    pub(crate) fn try_from_fn<E>(mut f: impl FnMut(BorderToken) -> Result<f32, E>) -> Result<Self, E> {
        Ok(Self {
            width_hairline: f(BorderToken::WidthHairline)?,
            width_thin: f(BorderToken::WidthThin)?,
            width_medium: f(BorderToken::WidthMedium)?,
            width_thick: f(BorderToken::WidthThick)?,
            radius_none: f(BorderToken::RadiusNone)?,
            radius_sm: f(BorderToken::RadiusSm)?,
            radius_md: f(BorderToken::RadiusMd)?,
            radius_lg: f(BorderToken::RadiusLg)?,
            radius_xl: f(BorderToken::RadiusXl)?,
            radius_full: f(BorderToken::RadiusFull)?,
        })
    }
}

impl Default for BorderTokens {
    fn default() -> Self {
        Self {
            width_hairline: 0.5,
            width_thin: 1.0,
            width_medium: 2.0,
            width_thick: 4.0,
            radius_none: 0.0,
            radius_sm: 4.0,
            radius_md: 8.0,
            radius_lg: 12.0,
            radius_xl: 16.0,
            radius_full: 9999.0,
        }
    }
}

impl BorderSystem for BorderTokens {
    fn resolve(&self, token: BorderToken, _ctx: &AccessibilityContext) -> f32 {
        self.get(token)
    }
}
