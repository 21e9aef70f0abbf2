//! Shadow tokens for theming

use hue_core::Color;
use serde::{Deserialize, Serialize};

use crate::accessibility::AccessibilityContext;
use crate::system::ShadowSystem;

token_keys! {
    /// Elevation shadow keys for dynamic access
    pub enum ShadowToken {
        None => "none",
        Sm => "sm",
        Md => "md",
        Lg => "lg",
        Xl => "xl",
        Inner => "inner",
    }
}

/// A box shadow definition
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    #[serde(default)]
    pub offset_x: f32,
    #[serde(default)]
    pub offset_y: f32,
    #[serde(default)]
    pub blur: f32,
    #[serde(default)]
    pub spread: f32,
    pub color: Color,
}

impl Shadow {
    pub const fn new(offset_x: f32, offset_y: f32, blur: f32, spread: f32, color: Color) -> Self {
        Self {
            offset_x,
            offset_y,
            blur,
            spread,
            color,
        }
    }

    pub const fn none() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0, Color::TRANSPARENT)
    }

    pub fn is_none(&self) -> bool {
        self.color.a == 0.0
            || (self.blur == 0.0
                && self.spread == 0.0
                && self.offset_x == 0.0
                && self.offset_y == 0.0)
    }
}

impl Default for Shadow {
    fn default() -> Self {
        Self::none()
    }
}

/// Complete set of shadow tokens
#[derive(Clone, Debug, PartialEq)]
pub struct ShadowTokens {
    pub none: Shadow,
    pub sm: Shadow,
    pub md: Shadow,
    pub lg: Shadow,
    pub xl: Shadow,
    pub inner: Shadow,
}

impl ShadowTokens {
    /// Get shadow by token key
    pub fn get(&self, token: ShadowToken) -> Shadow {
        match token {
            ShadowToken::None => self.none,
            ShadowToken::Sm => self.sm,
            ShadowToken::Md => self.md,
            ShadowToken::Lg => self.lg,
            ShadowToken::Xl => self.xl,
            ShadowToken::Inner => self.inner,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (ShadowToken, Shadow)> + '_ {
        ShadowToken::ALL
            .iter()
            .map(move |token| (*token, self.get(*token)))
    }

    /// Shadow tokens for a light color scheme
    pub fn light() -> Self {
        Self::with_opacity(0.05, 0.1, 0.25)
    }

    /// Shadow tokens for a dark color scheme
    pub fn dark() -> Self {
        Self::with_opacity(0.2, 0.3, 0.5)
    }

    fn with_opacity(subtle: f32, regular: f32, strong: f32) -> Self {
        let shade = |alpha: f32| Color::BLACK.with_alpha(alpha).quantize();
        Self {
            none: Shadow::none(),
            sm: Shadow::new(0.0, 1.0, 2.0, 0.0, shade(subtle)),
            md: Shadow::new(0.0, 4.0, 6.0, -1.0, shade(regular)),
            lg: Shadow::new(0.0, 10.0, 15.0, -3.0, shade(regular)),
            xl: Shadow::new(0.0, 20.0, 25.0, -5.0, shade(strong)),
            inner: Shadow::new(0.0, 2.0, 4.0, 0.0, shade(subtle)),
        }
    }

    pub(crate) fn try_from_fn<E>(mut f: impl FnMut(ShadowToken) -> Result<Shadow, E>) -> Result<Self, E> {
        Ok(Self {
            none: f(ShadowToken::None)?,
            sm: f(ShadowToken::Sm)?,
            md: f(ShadowToken::Md)?,
            lg: f(ShadowToken::Lg)?,
            xl: f(ShadowToken::Xl)?,
            inner: f(ShadowToken::Inner)?,
        })
    }
}

impl Default for ShadowTokens {
    fn default() -> Self {
        Self::light()
    }
}

impl ShadowSystem for ShadowTokens {
    fn resolve(&self, token: ShadowToken, _ctx: &AccessibilityContext) -> Shadow {
        self.get(token)
    }
}
