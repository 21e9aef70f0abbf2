//! Easing curves for motion tokens

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when an easing name cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown easing `{0}` (expected linear, ease-in, ease-out, ease-in-out or cubic-bezier(x1, y1, x2, y2))")]
pub struct EasingParseError(pub String);

/// Timing curve of a motion token, written with its CSS name
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    CubicBezier(f32, f32, f32, f32),
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Easing::Linear => f.write_str("linear"),
            Easing::EaseIn => f.write_str("ease-in"),
            Easing::EaseOut => f.write_str("ease-out"),
            Easing::EaseInOut => f.write_str("ease-in-out"),
            Easing::CubicBezier(x1, y1, x2, y2) => {
                write!(f, "cubic-bezier({x1}, {y1}, {x2}, {y2})")
            }
        }
    }
}

impl FromStr for Easing {
    type Err = EasingParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        match name.as_str() {
            "linear" => return Ok(Easing::Linear),
            "ease-in" => return Ok(Easing::EaseIn),
            "ease-out" => return Ok(Easing::EaseOut),
            "ease-in-out" => return Ok(Easing::EaseInOut),
            _ => {}
        }

        let args = name
            .strip_prefix("cubic-bezier(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| EasingParseError(s.to_string()))?;

        let points = args
            .split(',')
            .map(|p| p.trim().parse::<f32>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| EasingParseError(s.to_string()))?;

        match points.as_slice() {
            // x control points must stay inside [0, 1] for the curve to be a function of time
            [x1, y1, x2, y2] if (0.0..=1.0).contains(x1) && (0.0..=1.0).contains(x2) => {
                Ok(Easing::CubicBezier(*x1, *y1, *x2, *y2))
            }
            _ => Err(EasingParseError(s.to_string())),
        }
    }
}

impl Serialize for Easing {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Easing {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_names_and_bezier() {
        assert_eq!("ease-out".parse::<Easing>(), Ok(Easing::EaseOut));
        assert_eq!(
            "cubic-bezier(0.2, 0, 0, 1)".parse::<Easing>(),
            Ok(Easing::CubicBezier(0.2, 0.0, 0.0, 1.0))
        );
        assert!("bounce".parse::<Easing>().is_err());
        assert!("cubic-bezier(1.5, 0, 0, 1)".parse::<Easing>().is_err());
    }

    #[test]
    fn display_parses_back() {
        let curve = Easing::CubicBezier(0.4, 0.0, 0.2, 1.0);
        assert_eq!(curve.to_string().parse::<Easing>(), Ok(curve));
    }
}
