//! Validated construction of custom themes

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::error::ThemeError;
use crate::theme::{ColorScheme, Theme};
use crate::themes::StandardTheme;
use crate::tokens::*;
use hue_core::Color;

/// Collects token values and builds a [`StandardTheme`]
///
/// `build` fails with [`ThemeError::MissingToken`] unless every required name
/// of every category has a value, so an incomplete theme can never reach a
/// [`ThemeManager`](crate::ThemeManager).
///
/// ```rust
/// use hue_core::Color;
/// use hue_theme::{ColorToken, StandardTheme, ThemeBuilder};
///
/// let ocean = ThemeBuilder::from_theme(&StandardTheme::dark())
///     .name("Ocean")
///     .color(ColorToken::Primary, Color::from_hex(0x0EA5E9))
///     .build()
///     .unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct ThemeBuilder {
    name: String,
    scheme: ColorScheme,
    values: FxHashMap<TokenPath, TokenValue>,
}

impl ThemeBuilder {
    /// An empty builder; every token must be supplied before `build`
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            scheme: ColorScheme::default(),
            values: FxHashMap::default(),
        }
    }

    /// A builder pre-filled with every token of `theme`
    pub fn from_theme(theme: &dyn Theme) -> Self {
        let mut values: FxHashMap<TokenPath, TokenValue> = FxHashMap::default();
        for (token, color) in theme.colors().iter() {
            values.insert(token.into(), TokenValue::Color(color));
        }
        for (token, font) in theme.typography().iter() {
            values.insert(token.into(), TokenValue::Font(font.clone()));
        }
        for (token, value) in theme.spacing().iter() {
            values.insert(token.into(), TokenValue::Number(value));
        }
        for (token, shadow) in theme.shadows().iter() {
            values.insert(token.into(), TokenValue::Shadow(shadow));
        }
        for (token, value) in theme.borders().iter() {
            values.insert(token.into(), TokenValue::Number(value));
        }
        for (token, motion) in theme.animations().iter() {
            values.insert(token.into(), TokenValue::Motion(motion));
        }

        Self {
            name: theme.name().to_string(),
            scheme: theme.color_scheme(),
            values,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn scheme(mut self, scheme: ColorScheme) -> Self {
        self.scheme = scheme;
        self
    }

    pub fn color(mut self, token: ColorToken, color: Color) -> Self {
        self.values.insert(token.into(), TokenValue::Color(color));
        self
    }

    pub fn font(mut self, token: TypographyToken, font: FontDescriptor) -> Self {
        self.values.insert(token.into(), TokenValue::Font(font));
        self
    }

    pub fn spacing(mut self, token: SpacingToken, value: f32) -> Self {
        self.values.insert(token.into(), TokenValue::Number(value));
        self
    }

    pub fn shadow(mut self, token: ShadowToken, shadow: Shadow) -> Self {
        self.values.insert(token.into(), TokenValue::Shadow(shadow));
        self
    }

    pub fn border(mut self, token: BorderToken, value: f32) -> Self {
        self.values.insert(token.into(), TokenValue::Number(value));
        self
    }

    pub fn motion(mut self, token: AnimationToken, motion: Motion) -> Self {
        self.values.insert(token.into(), TokenValue::Motion(motion));
        self
    }

    /// Set a token by category and semantic name
    ///
    /// Fails if the name is not in the category vocabulary or the value kind
    /// does not match the category.
    pub fn set(
        mut self,
        category: TokenCategory,
        name: &str,
        value: impl Into<TokenValue>,
    ) -> Result<Self, ThemeError> {
        let path = TokenPath::new(category, name)?;
        let value = value.into();
        if value.kind() != category.value_kind() {
            return Err(ThemeError::TypeMismatch {
                category,
                name: name.to_string(),
                expected: category.value_kind(),
                found: value.kind(),
            });
        }
        self.values.insert(path, value);
        Ok(self)
    }

    /// Drop a value, e.g. to force it to come from elsewhere
    pub fn without(mut self, path: impl Into<TokenPath>) -> Self {
        self.values.remove(&path.into());
        self
    }

    /// Whether a value is present for `path`
    pub fn contains(&self, path: impl Into<TokenPath>) -> bool {
        self.values.contains_key(&path.into())
    }

    /// Validate and assemble the theme
    pub fn build(self) -> Result<StandardTheme, ThemeError> {
        let theme = StandardTheme {
            colors: ColorTokens::try_from_fn(|t| self.take(t.into(), TokenValue::as_color))?,
            typography: TypographyTokens::try_from_fn(|t| {
                let font = self.take(t.into(), |v| v.as_font().cloned())?;
                check_font(t.into(), &font)?;
                Ok::<_, ThemeError>(font)
            })?,
            spacing: SpacingTokens::try_from_fn(|t| self.take_metric(t.into()))?,
            shadows: ShadowTokens::try_from_fn(|t| self.take(t.into(), TokenValue::as_shadow))?,
            borders: BorderTokens::try_from_fn(|t| self.take_metric(t.into()))?,
            animations: AnimationTokens::try_from_fn(|t| {
                self.take(t.into(), TokenValue::as_motion)
            })?,
            name: self.name,
            scheme: self.scheme,
        };

        debug!(theme = %theme.name, scheme = %theme.scheme, "built theme");
        Ok(theme)
    }

    fn take<T>(
        &self,
        path: TokenPath,
        extract: impl FnOnce(&TokenValue) -> Option<T>,
    ) -> Result<T, ThemeError> {
        self.values
            .get(&path)
            .and_then(extract)
            .ok_or_else(|| ThemeError::MissingToken {
                theme: self.name.clone(),
                category: path.category,
                name: path.name,
            })
    }

    fn take_metric(&self, path: TokenPath) -> Result<f32, ThemeError> {
        let value = self.take(path, TokenValue::as_number)?;
        check_metric(path, value)?;
        Ok(value)
    }
}

/// Reject values no theme may carry: negative or non-finite metrics and
/// fonts without a family or a positive size
pub(crate) fn check_value(path: TokenPath, value: &TokenValue) -> Result<(), ThemeError> {
    match value {
        TokenValue::Number(number) => check_metric(path, *number),
        TokenValue::Font(font) => check_font(path, font),
        _ => Ok(()),
    }
}

fn check_metric(path: TokenPath, value: f32) -> Result<(), ThemeError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ThemeError::InvalidValue {
            category: path.category,
            name: path.name.to_string(),
            reason: format!("{value} is not a non-negative number"),
        });
    }
    Ok(())
}

fn check_font(path: TokenPath, font: &FontDescriptor) -> Result<(), ThemeError> {
    let reason = if font.family.trim().is_empty() {
        Some("font family is empty".to_string())
    } else if !(font.size.is_finite() && font.size > 0.0) {
        Some(format!("font size {} must be positive", font.size))
    } else if !(font.line_height.is_finite() && font.line_height > 0.0) {
        Some(format!("line height {} must be positive", font.line_height))
    } else {
        None
    };

    match reason {
        Some(reason) => Err(ThemeError::InvalidValue {
            category: path.category,
            name: path.name.to_string(),
            reason,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accessibility::AccessibilityContext;
    use crate::system::ColorSystem;
    use pretty_assertions::assert_eq;

    #[test]
    fn from_theme_rebuilds_identical_theme() {
        let light = StandardTheme::light();
        let rebuilt = ThemeBuilder::from_theme(&light).build().unwrap();
        assert_eq!(rebuilt, light);
    }

    #[test]
    fn missing_error_color_fails() {
        let err = ThemeBuilder::from_theme(&StandardTheme::light())
            .name("Partial")
            .without(ColorToken::Error)
            .build()
            .unwrap_err();

        match err {
            ThemeError::MissingToken {
                theme,
                category,
                name,
            } => {
                assert_eq!(theme, "Partial");
                assert_eq!(category, TokenCategory::Color);
                assert_eq!(name, "error");
            }
            other => panic!("expected MissingToken, got {other:?}"),
        }
    }

    #[test]
    fn empty_builder_reports_first_required_name() {
        let err = ThemeBuilder::new("Empty").build().unwrap_err();
        assert!(matches!(
            err,
            ThemeError::MissingToken { category: TokenCategory::Color, name: "primary", .. }
        ));
    }

    #[test]
    fn set_by_name_checks_vocabulary_and_kind() {
        let builder = ThemeBuilder::from_theme(&StandardTheme::light());

        let err = builder
            .clone()
            .set(TokenCategory::Color, "primary", 12.0_f32)
            .unwrap_err();
        assert!(matches!(
            err,
            ThemeError::TypeMismatch { expected: "color", found: "number", .. }
        ));

        let err = builder
            .clone()
            .set(TokenCategory::Spacing, "gigantic", 12.0_f32)
            .unwrap_err();
        assert!(matches!(err, ThemeError::UnknownToken { .. }));

        let theme = builder
            .set(TokenCategory::Color, "primary", Color::from_hex(0xFF5500))
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(
            theme
                .colors()
                .resolve(ColorToken::Primary, &AccessibilityContext::default()),
            Color::from_hex(0xFF5500)
        );
    }

    #[test]
    fn negative_spacing_is_rejected() {
        let err = ThemeBuilder::from_theme(&StandardTheme::light())
            .spacing(SpacingToken::Md, -4.0)
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            ThemeError::InvalidValue { category: TokenCategory::Spacing, .. }
        ));
    }

    #[test]
    fn zero_font_size_is_rejected() {
        let err = ThemeBuilder::from_theme(&StandardTheme::light())
            .font(
                TypographyToken::Caption,
                FontDescriptor::new("Inter", 0.0, FontWeight::Regular, 16.0),
            )
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            ThemeError::InvalidValue { category: TokenCategory::Typography, ref name, .. } if name == "caption"
        ));
    }
}
