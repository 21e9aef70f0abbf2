//! Accessibility signals that alter token resolution
//!
//! The host platform owns these settings; callers read them from the OS and
//! pass an [`AccessibilityContext`] into every resolution call.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Preferred text weight (iOS "Bold Text", Android "Bold font")
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegibilityWeight {
    #[default]
    Regular,
    Bold,
}

/// Preferred content size, following the Dynamic Type ladder
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SizeCategory {
    ExtraSmall,
    Small,
    Medium,
    #[default]
    Large,
    ExtraLarge,
    ExtraExtraLarge,
    ExtraExtraExtraLarge,
    AccessibilityMedium,
    AccessibilityLarge,
    AccessibilityExtraLarge,
    AccessibilityExtraExtraLarge,
    AccessibilityExtraExtraExtraLarge,
}

impl SizeCategory {
    pub const ALL: [SizeCategory; 12] = [
        Self::ExtraSmall,
        Self::Small,
        Self::Medium,
        Self::Large,
        Self::ExtraLarge,
        Self::ExtraExtraLarge,
        Self::ExtraExtraExtraLarge,
        Self::AccessibilityMedium,
        Self::AccessibilityLarge,
        Self::AccessibilityExtraLarge,
        Self::AccessibilityExtraExtraLarge,
        Self::AccessibilityExtraExtraExtraLarge,
    ];

    /// Multiplier applied to font sizes; `Large` is the 1.0 baseline
    pub fn scale_factor(self) -> f32 {
        match self {
            Self::ExtraSmall => 0.82,
            Self::Small => 0.88,
            Self::Medium => 0.94,
            Self::Large => 1.0,
            Self::ExtraLarge => 1.12,
            Self::ExtraExtraLarge => 1.23,
            Self::ExtraExtraExtraLarge => 1.35,
            Self::AccessibilityMedium => 1.64,
            Self::AccessibilityLarge => 1.95,
            Self::AccessibilityExtraLarge => 2.35,
            Self::AccessibilityExtraExtraLarge => 2.76,
            Self::AccessibilityExtraExtraExtraLarge => 3.12,
        }
    }

    pub fn is_accessibility_category(self) -> bool {
        self >= Self::AccessibilityMedium
    }

    pub fn id(self) -> &'static str {
        match self {
            Self::ExtraSmall => "extraSmall",
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::ExtraLarge => "extraLarge",
            Self::ExtraExtraLarge => "extraExtraLarge",
            Self::ExtraExtraExtraLarge => "extraExtraExtraLarge",
            Self::AccessibilityMedium => "accessibilityMedium",
            Self::AccessibilityLarge => "accessibilityLarge",
            Self::AccessibilityExtraLarge => "accessibilityExtraLarge",
            Self::AccessibilityExtraExtraLarge => "accessibilityExtraExtraLarge",
            Self::AccessibilityExtraExtraExtraLarge => "accessibilityExtraExtraExtraLarge",
        }
    }
}

impl fmt::Display for SizeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Error returned when a size category id cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown size category `{0}` (expected extraSmall through accessibilityExtraExtraExtraLarge)")]
pub struct SizeCategoryParseError(pub String);

impl FromStr for SizeCategory {
    type Err = SizeCategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SizeCategoryParseError(s.to_string()))
    }
}

/// Host-provided accessibility settings for one resolution call
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct AccessibilityContext {
    #[serde(default)]
    pub legibility_weight: LegibilityWeight,
    #[serde(default)]
    pub reduce_motion: bool,
    #[serde(default)]
    pub size_category: SizeCategory,
}

impl AccessibilityContext {
    pub fn with_legibility_weight(mut self, weight: LegibilityWeight) -> Self {
        self.legibility_weight = weight;
        self
    }

    pub fn with_reduce_motion(mut self, reduce_motion: bool) -> Self {
        self.reduce_motion = reduce_motion;
        self
    }

    pub fn with_size_category(mut self, size_category: SizeCategory) -> Self {
        self.size_category = size_category;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_factors_increase_along_the_ladder() {
        let factors: Vec<f32> = SizeCategory::ALL.iter().map(|c| c.scale_factor()).collect();
        assert!(factors.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(SizeCategory::default().scale_factor(), 1.0);
    }

    #[test]
    fn parse_size_category_ids() {
        assert_eq!("large".parse(), Ok(SizeCategory::Large));
        assert_eq!(
            "AccessibilityLarge".parse(),
            Ok(SizeCategory::AccessibilityLarge)
        );
        assert_eq!(
            "gigantic".parse::<SizeCategory>(),
            Err(SizeCategoryParseError("gigantic".to_string()))
        );
        assert!(SizeCategory::AccessibilityMedium.is_accessibility_category());
        assert!(!SizeCategory::ExtraExtraExtraLarge.is_accessibility_category());
    }
}
