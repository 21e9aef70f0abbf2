//! Hue core value types
//!
//! Leaf-level primitives every design token is built from:
//!
//! - **Color**: RGBA color with hex parsing, interpolation and WCAG contrast math
//! - **Easing**: Timing curves used by motion tokens
//!
//! # Example
//!
//! ```rust
//! use hue_core::Color;
//!
//! let text = Color::parse_hex("#1E1E2E").unwrap();
//! let background = Color::WHITE;
//!
//! assert!(text.contrast_ratio(background) > 4.5);
//! assert_eq!(text.to_hex_string(), "#1E1E2E");
//! ```

pub mod color;
pub mod easing;

pub use color::{Color, ColorParseError};
pub use easing::{Easing, EasingParseError};
