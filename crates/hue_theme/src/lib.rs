//! Hue Theme System
//!
//! Design tokens, immutable themes, and a thread-safe theme manager.
//!
//! # Overview
//!
//! The theme system provides:
//! - **Design tokens**: Colors, typography, spacing, shadows, borders, animations
//! - **Themes**: Immutable token sets that are complete by construction
//! - **Theme manager**: Lock-free reads of the current theme, atomic switching
//! - **Accessibility**: Dynamic Type scaling, bold text, reduced motion
//!
//! # Quick Start
//!
//! ```rust
//! use hue_theme::{AccessibilityContext, ThemeManager, ThemePreset, TokenCategory};
//!
//! // One manager per app, shared with Arc
//! let manager = ThemeManager::default();
//!
//! let ctx = AccessibilityContext::default();
//! let primary = manager.resolve(TokenCategory::Color, "primary", &ctx).unwrap();
//!
//! // Switch appearance; readers on other threads see the whole new theme
//! manager.set_theme(ThemePreset::Dark.theme());
//! assert_eq!(manager.current_theme().name(), "Dark");
//! # let _ = primary;
//! ```
//!
//! # Tokens
//!
//! Every category has a fixed vocabulary of camelCase names, and every theme
//! must supply all of them:
//!
//! - [`ColorTokens`]: Semantic colors (primary, error, background, text, etc.)
//! - [`TypographyTokens`]: Font descriptors from `displayLarge` to `caption`
//! - [`SpacingTokens`]: 4px-based spacing scale
//! - [`ShadowTokens`]: Elevation shadows
//! - [`BorderTokens`]: Border widths and corner radii
//! - [`AnimationTokens`]: Durations and easings
//!
//! # Custom Themes
//!
//! Themes are built with [`ThemeBuilder`] or loaded from TOML with
//! [`load_theme_file`]. Both fail with [`ThemeError::MissingToken`] when a
//! required name has no value.
//!
//! ```rust
//! use hue_theme::{ColorToken, StandardTheme, ThemeBuilder, ThemeError};
//!
//! let err = ThemeBuilder::from_theme(&StandardTheme::light())
//!     .without(ColorToken::Error)
//!     .build()
//!     .unwrap_err();
//! assert!(matches!(err, ThemeError::MissingToken { name: "error", .. }));
//! ```

pub mod accessibility;
pub mod builder;
pub mod error;
pub mod export;
pub mod file;
pub mod manager;
pub mod presets;
pub mod registry;
pub mod system;
pub mod theme;
pub mod themes;
pub mod tokens;
pub mod validate;

// Re-export commonly used types
pub use accessibility::{
    AccessibilityContext, LegibilityWeight, SizeCategory, SizeCategoryParseError,
};
pub use builder::ThemeBuilder;
pub use error::ThemeError;
pub use export::{css_stylesheet, css_variable_name, css_variables, resolved_tokens};
pub use file::{load_theme_file, parse_theme_str, ThemeFile};
pub use manager::{FixedTheme, SubscriptionId, ThemeChange, ThemeManager, ThemeProvider};
pub use presets::ThemePreset;
pub use registry::ThemeRegistry;
pub use system::{
    AnimationSystem, BorderSystem, ColorSystem, ShadowSystem, SpacingSystem, TypographySystem,
};
pub use theme::{ColorScheme, Theme, ThemeBundle};
pub use themes::StandardTheme;
pub use tokens::*;
pub use validate::{validate_contrast, ContrastIssue, ContrastUse, WcagLevel};
