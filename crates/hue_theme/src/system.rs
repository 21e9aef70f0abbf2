//! Token system interfaces, one per category
//!
//! Each trait is the capability surface a category must provide: a pure
//! lookup from a typed key to a concrete value, adjusted for the caller's
//! [`AccessibilityContext`]. The string-keyed `resolve_name` is provided for
//! callers that only know the semantic name at runtime.

use hue_core::Color;

use crate::accessibility::AccessibilityContext;
use crate::error::ThemeError;
use crate::tokens::*;

fn unknown(category: TokenCategory, name: &str) -> ThemeError {
    ThemeError::UnknownToken {
        category,
        name: name.to_string(),
    }
}

/// Semantic colors
pub trait ColorSystem {
    fn resolve(&self, token: ColorToken, ctx: &AccessibilityContext) -> Color;

    fn resolve_name(&self, name: &str, ctx: &AccessibilityContext) -> Result<Color, ThemeError> {
        let token = ColorToken::from_name(name).ok_or_else(|| unknown(TokenCategory::Color, name))?;
        Ok(self.resolve(token, ctx))
    }
}

/// Text styles
pub trait TypographySystem {
    fn resolve(&self, token: TypographyToken, ctx: &AccessibilityContext) -> FontDescriptor;

    fn resolve_name(
        &self,
        name: &str,
        ctx: &AccessibilityContext,
    ) -> Result<FontDescriptor, ThemeError> {
        let token = TypographyToken::from_name(name)
            .ok_or_else(|| unknown(TokenCategory::Typography, name))?;
        Ok(self.resolve(token, ctx))
    }
}

/// Spacing scale
pub trait SpacingSystem {
    fn resolve(&self, token: SpacingToken, ctx: &AccessibilityContext) -> f32;

    fn resolve_name(&self, name: &str, ctx: &AccessibilityContext) -> Result<f32, ThemeError> {
        let token =
            SpacingToken::from_name(name).ok_or_else(|| unknown(TokenCategory::Spacing, name))?;
        Ok(self.resolve(token, ctx))
    }
}

/// Elevation shadows
pub trait ShadowSystem {
    fn resolve(&self, token: ShadowToken, ctx: &AccessibilityContext) -> Shadow;

    fn resolve_name(&self, name: &str, ctx: &AccessibilityContext) -> Result<Shadow, ThemeError> {
        let token =
            ShadowToken::from_name(name).ok_or_else(|| unknown(TokenCategory::Shadow, name))?;
        Ok(self.resolve(token, ctx))
    }
}

/// Border widths and corner radii
pub trait BorderSystem {
    fn resolve(&self, token: BorderToken, ctx: &AccessibilityContext) -> f32;

    fn resolve_name(&self, name: &str, ctx: &AccessibilityContext) -> Result<f32, ThemeError> {
        let token =
            BorderToken::from_name(name).ok_or_else(|| unknown(TokenCategory::Border, name))?;
        Ok(self.resolve(token, ctx))
    }
}

/// Motion durations and easings
pub trait AnimationSystem {
    fn resolve(&self, token: AnimationToken, ctx: &AccessibilityContext) -> Motion;

    fn resolve_name(&self, name: &str, ctx: &AccessibilityContext) -> Result<Motion, ThemeError> {
        let token = AnimationToken::from_name(name)
            .ok_or_else(|| unknown(TokenCategory::Animation, name))?;
        Ok(self.resolve(token, ctx))
    }
}
