//! Design tokens for theming
//!
//! Tokens are the atomic values that make up a design system. Each category
//! has a typed key enum (e.g. [`ColorToken`]) whose camelCase names form the
//! fixed vocabulary every theme must supply, and a token-set struct (e.g.
//! [`ColorTokens`]) holding one value per key.
//!
//! - Colors
//! - Typography (font descriptors)
//! - Spacing
//! - Shadows
//! - Borders (widths and radii)
//! - Animation (durations and easings)

use std::fmt;

use crate::error::ThemeError;

/// Declares a token key enum with its camelCase vocabulary.
macro_rules! token_keys {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident => $id:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, PartialOrd, Ord)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every key, in vocabulary order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Every token name, in vocabulary order
            pub const NAMES: &'static [&'static str] = &[$($id),+];

            /// Semantic name of this token
            pub fn name(self) -> &'static str {
                match self {
                    $($name::$variant => $id),+
                }
            }

            /// Look up a key by its semantic name
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($id => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

mod animation;
mod border;
mod color;
mod shadow;
mod spacing;
mod typography;
mod value;

pub use animation::*;
pub use border::*;
pub use color::*;
pub use shadow::*;
pub use spacing::*;
pub use typography::*;
pub use value::*;

/// Token categories a theme must implement
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub enum TokenCategory {
    Color,
    Typography,
    Spacing,
    Shadow,
    Border,
    Animation,
}

impl TokenCategory {
    pub const ALL: [TokenCategory; 6] = [
        TokenCategory::Color,
        TokenCategory::Typography,
        TokenCategory::Spacing,
        TokenCategory::Shadow,
        TokenCategory::Border,
        TokenCategory::Animation,
    ];

    /// Plural id used in token paths and theme files
    pub fn id(self) -> &'static str {
        match self {
            Self::Color => "colors",
            Self::Typography => "typography",
            Self::Spacing => "spacing",
            Self::Shadow => "shadows",
            Self::Border => "borders",
            Self::Animation => "animations",
        }
    }

    /// Parse a category id; singular forms are accepted too
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "colors" | "color" => Some(Self::Color),
            "typography" | "fonts" | "font" => Some(Self::Typography),
            "spacing" => Some(Self::Spacing),
            "shadows" | "shadow" => Some(Self::Shadow),
            "borders" | "border" => Some(Self::Border),
            "animations" | "animation" | "motion" => Some(Self::Animation),
            _ => None,
        }
    }

    /// Every name a complete theme supplies for this category
    pub fn required_names(self) -> &'static [&'static str] {
        match self {
            Self::Color => ColorToken::NAMES,
            Self::Typography => TypographyToken::NAMES,
            Self::Spacing => SpacingToken::NAMES,
            Self::Shadow => ShadowToken::NAMES,
            Self::Border => BorderToken::NAMES,
            Self::Animation => AnimationToken::NAMES,
        }
    }

    /// Kind of [`TokenValue`] this category holds
    pub fn value_kind(self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::Typography => "font",
            Self::Spacing | Self::Border => "number",
            Self::Shadow => "shadow",
            Self::Animation => "motion",
        }
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Fully qualified token name, written `<category>.<name>` (e.g. `colors.primary`)
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct TokenPath {
    pub category: TokenCategory,
    pub name: &'static str,
}

impl TokenPath {
    /// Resolve a category-relative name against the category vocabulary
    pub fn new(category: TokenCategory, name: &str) -> Result<Self, ThemeError> {
        category
            .required_names()
            .iter()
            .copied()
            .find(|known| *known == name)
            .map(|known| TokenPath {
                category,
                name: known,
            })
            .ok_or_else(|| ThemeError::UnknownToken {
                category,
                name: name.to_string(),
            })
    }

    pub fn parse(path: &str) -> Result<Self, ThemeError> {
        let (category, name) = path
            .trim()
            .split_once('.')
            .ok_or_else(|| ThemeError::UnknownCategory(path.to_string()))?;
        let category = TokenCategory::from_id(category)
            .ok_or_else(|| ThemeError::UnknownCategory(category.to_string()))?;
        Self::new(category, name)
    }
}

impl fmt::Display for TokenPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.category.id(), self.name)
    }
}

impl From<ColorToken> for TokenPath {
    fn from(token: ColorToken) -> Self {
        TokenPath {
            category: TokenCategory::Color,
            name: token.name(),
        }
    }
}

impl From<TypographyToken> for TokenPath {
    fn from(token: TypographyToken) -> Self {
        TokenPath {
            category: TokenCategory::Typography,
            name: token.name(),
        }
    }
}

impl From<SpacingToken> for TokenPath {
    fn from(token: SpacingToken) -> Self {
        TokenPath {
            category: TokenCategory::Spacing,
            name: token.name(),
        }
    }
}

impl From<ShadowToken> for TokenPath {
    fn from(token: ShadowToken) -> Self {
        TokenPath {
            category: TokenCategory::Shadow,
            name: token.name(),
        }
    }
}

impl From<BorderToken> for TokenPath {
    fn from(token: BorderToken) -> Self {
        TokenPath {
            category: TokenCategory::Border,
            name: token.name(),
        }
    }
}

impl From<AnimationToken> for TokenPath {
    fn from(token: AnimationToken) -> Self {
        TokenPath {
            category: TokenCategory::Animation,
            name: token.name(),
        }
    }
}
