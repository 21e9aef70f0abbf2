//! Spacing tokens for theming

use crate::accessibility::AccessibilityContext;
use crate::system::SpacingSystem;

token_keys! {
    /// Spacing scale keys for dynamic access
    pub enum SpacingToken {
        None => "none",
        Xxs => "xxs",
        Xs => "xs",
        Sm => "sm",
        Md => "md",
        Lg => "lg",
        Xl => "xl",
        Xxl => "xxl",
        Xxxl => "xxxl",
    }
}

/// Complete set of spacing tokens (in points)
#[derive(Clone, Debug, PartialEq)]
pub struct SpacingTokens {
    pub none: f32,
    pub xxs: f32,
    pub xs: f32,
    pub sm: f32,
    pub md: f32,
    pub lg: f32,
    pub xl: f32,
    pub xxl: f32,
    pub xxxl: f32,
}

impl SpacingTokens {
    /// Get spacing value by token key
    pub fn get(&self, token: SpacingToken) -> f32 {
        match token {
            SpacingToken::None => self.none,
            SpacingToken::Xxs => self.xxs,
            SpacingToken::Xs => self.xs,
            SpacingToken::Sm => self.sm,
            SpacingToken::Md => self.md,
            SpacingToken::Lg => self.lg,
            SpacingToken::Xl => self.xl,
            SpacingToken::Xxl => self.xxl,
            SpacingToken::Xxxl => self.xxxl,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (SpacingToken, f32)> + '_ {
        SpacingToken::ALL
            .iter()
            .map(move |token| (*token, self.get(*token)))
    }

    /// A scale where every step is `base` multiplied by the default ratios
    pub fn scaled(base: f32) -> Self {
        Self {
            none: 0.0,
            xxs: base * 0.5,
            xs: base,
            sm: base * 2.0,
            md: base * 4.0,
            lg: base * 6.0,
            xl: base * 8.0,
            xxl: base * 12.0,
            xxxl: base * 16.0,
        }
    }

    pub(crate) fn try_from_fn<E>(mut f: impl FnMut(SpacingToken) -> Result<f32, E>) -> Result<Self, E> {
        Ok(Self {
            none: f(SpacingToken::None)?,
            xxs: f(SpacingToken::Xxs)?,
            xs: f(SpacingToken::Xs)?,
            sm: f(SpacingToken::Sm)?,
            md: f(SpacingToken::Md)?,
            lg: f(SpacingToken::Lg)?,
            xl: f(SpacingToken::Xl)?,
            xxl: f(SpacingToken::Xxl)?,
            xxxl: f(SpacingToken::Xxxl)?,
        })
    }
}

impl Default for SpacingTokens {
    /// 4pt grid: 0, 2, 4, 8, 16, 24, 32, 48, 64
    fn default() -> Self {
        Self::scaled(4.0)
    }
}

impl SpacingSystem for SpacingTokens {
    fn resolve(&self, token: SpacingToken, _ctx: &AccessibilityContext) -> f32 {
        self.get(token)
    }
}
