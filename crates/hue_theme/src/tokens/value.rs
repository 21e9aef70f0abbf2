//! Category-erased token values

use hue_core::Color;
use serde::Serialize;

use super::{FontDescriptor, Motion, Shadow};
use crate::accessibility::AccessibilityContext;

/// A resolved token value of any category
///
/// Used by string-keyed resolution and by the custom-token side table, where
/// the category is only known at runtime.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TokenValue {
    Color(Color),
    Font(FontDescriptor),
    Number(f32),
    Shadow(Shadow),
    Motion(Motion),
}

impl TokenValue {
    /// Kind name, matching [`TokenCategory::value_kind`](super::TokenCategory::value_kind)
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Color(_) => "color",
            Self::Font(_) => "font",
            Self::Number(_) => "number",
            Self::Shadow(_) => "shadow",
            Self::Motion(_) => "motion",
        }
    }

    pub fn as_color(&self) -> Option<Color> {
        match self {
            Self::Color(c) => Some(*c),
            _ => None,
        }
    }

    pub fn as_font(&self) -> Option<&FontDescriptor> {
        match self {
            Self::Font(f) => Some(f),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f32> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_shadow(&self) -> Option<Shadow> {
        match self {
            Self::Shadow(s) => Some(*s),
            _ => None,
        }
    }

    pub fn as_motion(&self) -> Option<Motion> {
        match self {
            Self::Motion(m) => Some(*m),
            _ => None,
        }
    }

    /// Apply the accessibility adjustments of the value's category
    ///
    /// Fonts scale and embolden, motion collapses under reduce-motion; other
    /// kinds are unchanged.
    pub fn adjusted(self, ctx: &AccessibilityContext) -> Self {
        match self {
            Self::Font(font) => Self::Font(font.adjusted(ctx)),
            Self::Motion(motion) => Self::Motion(motion.adjusted(ctx)),
            other => other,
        }
    }

    /// CSS representation of the value
    pub fn to_css(&self) -> String {
        match self {
            Self::Color(c) => css_color(*c),
            Self::Font(f) => format!(
                "{} {}px/{}px \"{}\"",
                f.weight.value(),
                f.size,
                f.line_height,
                f.family
            ),
            Self::Number(n) => format!("{n}px"),
            Self::Shadow(s) if s.is_none() => "none".to_string(),
            Self::Shadow(s) => format!(
                "{}px {}px {}px {}px {}",
                s.offset_x,
                s.offset_y,
                s.blur,
                s.spread,
                css_color(s.color)
            ),
            Self::Motion(m) => format!("{}ms {}", m.duration_ms, m.easing),
        }
    }
}

fn css_color(c: Color) -> String {
    if c.a < 1.0 {
        let [r, g, b, _] = c.to_rgba8();
        format!("rgba({r},{g},{b},{})", (c.a * 1000.0).round() / 1000.0)
    } else {
        c.to_hex_string().to_lowercase()
    }
}

impl From<Color> for TokenValue {
    fn from(value: Color) -> Self {
        Self::Color(value)
    }
}

impl From<FontDescriptor> for TokenValue {
    fn from(value: FontDescriptor) -> Self {
        Self::Font(value)
    }
}

impl From<f32> for TokenValue {
    fn from(value: f32) -> Self {
        Self::Number(value)
    }
}

impl From<Shadow> for TokenValue {
    fn from(value: Shadow) -> Self {
        Self::Shadow(value)
    }
}

impl From<Motion> for TokenValue {
    fn from(value: Motion) -> Self {
        Self::Motion(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::FontWeight;
    use hue_core::Easing;

    #[test]
    fn css_values() {
        assert_eq!(TokenValue::from(16.0).to_css(), "16px");
        assert_eq!(TokenValue::from(Color::from_hex(0x1E66F5)).to_css(), "#1e66f5");
        assert_eq!(
            TokenValue::from(Color::BLACK.with_alpha(0.1)).to_css(),
            "rgba(0,0,0,0.1)"
        );
        assert_eq!(
            TokenValue::from(FontDescriptor::new("Inter", 14.0, FontWeight::Medium, 20.0)).to_css(),
            "500 14px/20px \"Inter\""
        );
        assert_eq!(
            TokenValue::from(Motion::new(250, Easing::EaseInOut)).to_css(),
            "250ms ease-in-out"
        );
        assert_eq!(TokenValue::from(Shadow::none()).to_css(), "none");
    }

    #[test]
    fn accessors_match_kind() {
        let value = TokenValue::from(8.0);
        assert_eq!(value.kind(), "number");
        assert_eq!(value.as_number(), Some(8.0));
        assert_eq!(value.as_color(), None);
    }
}
