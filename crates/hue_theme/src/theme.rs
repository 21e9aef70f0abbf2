//! Theme trait and light/dark bundles

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::accessibility::AccessibilityContext;
use crate::error::ThemeError;
use crate::system::*;
use crate::tokens::*;

/// Light or dark appearance
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Light => "light",
            Self::Dark => "dark",
        })
    }
}

/// A complete, immutable set of design tokens
///
/// Every implementation supplies one token set per category. Themes are never
/// mutated once built; switching appearance means swapping the whole theme.
pub trait Theme: Send + Sync + fmt::Debug {
    fn name(&self) -> &str;

    fn color_scheme(&self) -> ColorScheme;

    fn colors(&self) -> &ColorTokens;

    fn typography(&self) -> &TypographyTokens;

    fn spacing(&self) -> &SpacingTokens;

    fn shadows(&self) -> &ShadowTokens;

    fn borders(&self) -> &BorderTokens;

    fn animations(&self) -> &AnimationTokens;

    /// Resolve a token by category and semantic name
    fn resolve(
        &self,
        category: TokenCategory,
        name: &str,
        ctx: &AccessibilityContext,
    ) -> Result<TokenValue, ThemeError> {
        Ok(match category {
            TokenCategory::Color => self.colors().resolve_name(name, ctx)?.into(),
            TokenCategory::Typography => self.typography().resolve_name(name, ctx)?.into(),
            TokenCategory::Spacing => self.spacing().resolve_name(name, ctx)?.into(),
            TokenCategory::Shadow => self.shadows().resolve_name(name, ctx)?.into(),
            TokenCategory::Border => self.borders().resolve_name(name, ctx)?.into(),
            TokenCategory::Animation => self.animations().resolve_name(name, ctx)?.into(),
        })
    }

    /// Resolve a qualified path such as `typography.bodyMedium`
    fn resolve_path(&self, path: &str, ctx: &AccessibilityContext) -> Result<TokenValue, ThemeError> {
        let path = TokenPath::parse(path)?;
        self.resolve(path.category, path.name, ctx)
    }
}

/// A named light/dark pair of themes
#[derive(Clone, Debug)]
pub struct ThemeBundle {
    pub name: String,
    pub light: Arc<dyn Theme>,
    pub dark: Arc<dyn Theme>,
}

impl ThemeBundle {
    pub fn new(
        name: impl Into<String>,
        light: impl Theme + 'static,
        dark: impl Theme + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            light: Arc::new(light),
            dark: Arc::new(dark),
        }
    }

    /// The theme for `scheme`; the returned `Arc` is shared, so repeated
    /// calls are pointer-equal
    pub fn for_scheme(&self, scheme: ColorScheme) -> Arc<dyn Theme> {
        match scheme {
            ColorScheme::Light => Arc::clone(&self.light),
            ColorScheme::Dark => Arc::clone(&self.dark),
        }
    }
}
