//! Color types and utilities

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a hex color string cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("color `{0}` must have 6 or 8 hex digits (#RRGGBB or #RRGGBBAA)")]
    InvalidLength(String),

    #[error("color `{0}` contains a non-hex digit")]
    InvalidDigit(String),
}

/// RGBA color with f32 components (0.0 to 1.0, sRGB encoded)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create from u8 components (0-255)
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Create from hex value (0xRRGGBB or 0xRRGGBBAA)
    pub fn from_hex(hex: u32) -> Self {
        if hex > 0xFFFFFF {
            Self::from_rgba8(
                ((hex >> 24) & 0xFF) as u8,
                ((hex >> 16) & 0xFF) as u8,
                ((hex >> 8) & 0xFF) as u8,
                (hex & 0xFF) as u8,
            )
        } else {
            Self::from_rgba8(
                ((hex >> 16) & 0xFF) as u8,
                ((hex >> 8) & 0xFF) as u8,
                (hex & 0xFF) as u8,
                255,
            )
        }
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA` (the leading `#` is optional)
    pub fn parse_hex(s: &str) -> Result<Self, ColorParseError> {
        let digits = s.trim().trim_start_matches('#');
        if digits.len() != 6 && digits.len() != 8 {
            return Err(ColorParseError::InvalidLength(s.to_string()));
        }
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit(s.to_string()));
        }
        let value =
            u32::from_str_radix(digits, 16).map_err(|_| ColorParseError::InvalidDigit(s.into()))?;

        if digits.len() == 8 {
            Ok(Self::from_rgba8(
                ((value >> 24) & 0xFF) as u8,
                ((value >> 16) & 0xFF) as u8,
                ((value >> 8) & 0xFF) as u8,
                (value & 0xFF) as u8,
            ))
        } else {
            Ok(Self::from_hex(value))
        }
    }

    /// Set alpha and return new color
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self { a: alpha, ..self }
    }

    /// Linear interpolation between two colors
    pub fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            r: from.r + (to.r - from.r) * t,
            g: from.g + (to.g - from.g) * t,
            b: from.b + (to.b - from.b) * t,
            a: from.a + (to.a - from.a) * t,
        }
    }

    /// Round every channel to the 8-bit precision of hex notation
    pub fn quantize(self) -> Self {
        let [r, g, b, a] = self.to_rgba8();
        Self::from_rgba8(r, g, b, a)
    }

    /// Convert to u8 array [r, g, b, a]
    pub fn to_rgba8(&self) -> [u8; 4] {
        fn channel(v: f32) -> u8 {
            (v.clamp(0.0, 1.0) * 255.0).round() as u8
        }
        [channel(self.r), channel(self.g), channel(self.b), channel(self.a)]
    }

    /// `#RRGGBB` for opaque colors, `#RRGGBBAA` otherwise
    pub fn to_hex_string(&self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        if a == 255 {
            format!("#{r:02X}{g:02X}{b:02X}")
        } else {
            format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
        }
    }

    /// WCAG 2.1 relative luminance (alpha is ignored)
    pub fn relative_luminance(&self) -> f32 {
        fn linearize(c: f32) -> f32 {
            let c = c.clamp(0.0, 1.0);
            if c <= 0.039_28 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        0.2126 * linearize(self.r) + 0.7152 * linearize(self.g) + 0.0722 * linearize(self.b)
    }

    /// WCAG 2.1 contrast ratio, from 1.0 (identical) to 21.0 (black on white)
    pub fn contrast_ratio(&self, other: Color) -> f32 {
        let a = self.relative_luminance();
        let b = other.relative_luminance();
        let (lighter, darker) = if a > b { (a, b) } else { (b, a) };
        (lighter + 0.05) / (darker + 0.05)
    }

    /// Composite this color over an opaque backdrop
    pub fn over(&self, backdrop: Color) -> Color {
        let a = self.a.clamp(0.0, 1.0);
        Color::rgb(
            self.r * a + backdrop.r * (1.0 - a),
            self.g * a + backdrop.g * (1.0 - a),
            self.b * a + backdrop.b * (1.0 - a),
        )
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_string())
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hex(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex_string())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::parse_hex(&s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_hex_accepts_rgb_and_rgba() {
        let c = Color::parse_hex("#1E66F5").unwrap();
        assert_eq!(c.to_rgba8(), [0x1E, 0x66, 0xF5, 0xFF]);

        let c = Color::parse_hex("1e66f580").unwrap();
        assert_eq!(c.to_rgba8(), [0x1E, 0x66, 0xF5, 0x80]);
    }

    #[test]
    fn parse_hex_rejects_bad_input() {
        assert_eq!(
            Color::parse_hex("#12345"),
            Err(ColorParseError::InvalidLength("#12345".to_string()))
        );
        assert_eq!(
            Color::parse_hex("#12345G"),
            Err(ColorParseError::InvalidDigit("#12345G".to_string()))
        );
    }

    #[test]
    fn hex_string_keeps_alpha_only_when_translucent() {
        assert_eq!(Color::from_hex(0xEFF1F5).to_hex_string(), "#EFF1F5");
        assert_eq!(
            Color::from_hex(0xD20F39).with_alpha(0.1).to_hex_string(),
            "#D20F391A"
        );
    }

    #[test]
    fn contrast_extremes() {
        let ratio = Color::BLACK.contrast_ratio(Color::WHITE);
        assert!((ratio - 21.0).abs() < 0.01, "ratio was {ratio}");
        assert!((Color::WHITE.contrast_ratio(Color::WHITE) - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn lerp_clamps_progress() {
        let mid = Color::lerp(&Color::BLACK, &Color::WHITE, 0.5);
        assert!((mid.r - 0.5).abs() < f32::EPSILON);
        assert_eq!(Color::lerp(&Color::BLACK, &Color::WHITE, 2.0), Color::WHITE);
    }

    #[test]
    fn serde_uses_hex_strings() {
        let json = serde_json::to_string(&Color::from_hex(0x40A02B)).unwrap();
        assert_eq!(json, "\"#40A02B\"");

        let back: Color = serde_json::from_str("\"#40A02B\"").unwrap();
        assert_eq!(back.to_rgba8(), [0x40, 0xA0, 0x2B, 0xFF]);

        assert!(serde_json::from_str::<Color>("\"blue\"").is_err());
    }
}
