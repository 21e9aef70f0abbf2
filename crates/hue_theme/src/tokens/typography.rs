//! Typography tokens for theming

use serde::{ser, Deserialize, Serialize, Serializer};

use crate::accessibility::{AccessibilityContext, LegibilityWeight};
use crate::system::TypographySystem;

token_keys! {
    /// Semantic text style keys for dynamic access
    pub enum TypographyToken {
        DisplayLarge => "displayLarge",
        DisplayMedium => "displayMedium",
        DisplaySmall => "displaySmall",
        HeadlineLarge => "headlineLarge",
        HeadlineMedium => "headlineMedium",
        HeadlineSmall => "headlineSmall",
        TitleLarge => "titleLarge",
        TitleMedium => "titleMedium",
        TitleSmall => "titleSmall",
        BodyLarge => "bodyLarge",
        BodyMedium => "bodyMedium",
        BodySmall => "bodySmall",
        LabelLarge => "labelLarge",
        LabelMedium => "labelMedium",
        LabelSmall => "labelSmall",
        Caption => "caption",
    }
}

/// Font weight on the CSS 100-900 scale
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Thin,
    Light,
    #[default]
    Regular,
    Medium,
    Semibold,
    Bold,
    Heavy,
    Black,
}

impl FontWeight {
    /// Numeric CSS weight
    pub fn value(self) -> u16 {
        match self {
            Self::Thin => 100,
            Self::Light => 300,
            Self::Regular => 400,
            Self::Medium => 500,
            Self::Semibold => 600,
            Self::Bold => 700,
            Self::Heavy => 800,
            Self::Black => 900,
        }
    }

    /// The next heavier weight (saturates at `Black`)
    pub fn bolder(self) -> Self {
        match self {
            Self::Thin => Self::Light,
            Self::Light => Self::Regular,
            Self::Regular => Self::Medium,
            Self::Medium => Self::Semibold,
            Self::Semibold => Self::Bold,
            Self::Bold => Self::Heavy,
            Self::Heavy | Self::Black => Self::Black,
        }
    }
}

/// Concrete font description for one text style
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FontDescriptor {
    pub family: String,
    /// Point size
    #[serde(serialize_with = "shortest_decimal")]
    pub size: f32,
    #[serde(default)]
    pub weight: FontWeight,
    /// Line height in points
    #[serde(serialize_with = "shortest_decimal")]
    pub line_height: f32,
    #[serde(default, serialize_with = "shortest_decimal")]
    pub letter_spacing: f32,
}

/// Write `0.15_f32` as `0.15`, not its exact binary value `0.15000000596…`
fn shortest_decimal<S: Serializer>(value: &f32, serializer: S) -> Result<S::Ok, S::Error> {
    let widened: f64 = value.to_string().parse().map_err(ser::Error::custom)?;
    serializer.serialize_f64(widened)
}

impl FontDescriptor {
    pub fn new(family: impl Into<String>, size: f32, weight: FontWeight, line_height: f32) -> Self {
        Self {
            family: family.into(),
            size,
            weight,
            line_height,
            letter_spacing: 0.0,
        }
    }

    pub fn with_letter_spacing(mut self, letter_spacing: f32) -> Self {
        self.letter_spacing = letter_spacing;
        self
    }

    pub fn with_family(mut self, family: impl Into<String>) -> Self {
        self.family = family.into();
        self
    }

    /// Scales size and line height by the size category and bumps the weight
    /// one step for bold legibility
    pub fn adjusted(mut self, ctx: &AccessibilityContext) -> Self {
        let scale = ctx.size_category.scale_factor();
        self.size *= scale;
        self.line_height *= scale;
        if ctx.legibility_weight == LegibilityWeight::Bold {
            self.weight = self.weight.bolder();
        }
        self
    }
}

/// Default font stack used by the built-in themes
pub const SYSTEM_FONT_FAMILY: &str = "system-ui";

/// Complete set of typography tokens
#[derive(Clone, Debug, PartialEq)]
pub struct TypographyTokens {
    pub display_large: FontDescriptor,
    pub display_medium: FontDescriptor,
    pub display_small: FontDescriptor,
    pub headline_large: FontDescriptor,
    pub headline_medium: FontDescriptor,
    pub headline_small: FontDescriptor,
    pub title_large: FontDescriptor,
    pub title_medium: FontDescriptor,
    pub title_small: FontDescriptor,
    pub body_large: FontDescriptor,
    pub body_medium: FontDescriptor,
    pub body_small: FontDescriptor,
    pub label_large: FontDescriptor,
    pub label_medium: FontDescriptor,
    pub label_small: FontDescriptor,
    pub caption: FontDescriptor,
}

impl TypographyTokens {
    /// Get a text style by token key
    pub fn get(&self, token: TypographyToken) -> &FontDescriptor {
        match token {
            TypographyToken::DisplayLarge => &self.display_large,
            TypographyToken::DisplayMedium => &self.display_medium,
            TypographyToken::DisplaySmall => &self.display_small,
            TypographyToken::HeadlineLarge => &self.headline_large,
            TypographyToken::HeadlineMedium => &self.headline_medium,
            TypographyToken::HeadlineSmall => &self.headline_small,
            TypographyToken::TitleLarge => &self.title_large,
            TypographyToken::TitleMedium => &self.title_medium,
            TypographyToken::TitleSmall => &self.title_small,
            TypographyToken::BodyLarge => &self.body_large,
            TypographyToken::BodyMedium => &self.body_medium,
            TypographyToken::BodySmall => &self.body_small,
            TypographyToken::LabelLarge => &self.label_large,
            TypographyToken::LabelMedium => &self.label_medium,
            TypographyToken::LabelSmall => &self.label_small,
            TypographyToken::Caption => &self.caption,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (TypographyToken, &FontDescriptor)> + '_ {
        TypographyToken::ALL
            .iter()
            .map(move |token| (*token, self.get(*token)))
    }

    /// The default type scale set in `family`
    pub fn with_family(family: &str) -> Self {
        use FontWeight::{Medium, Regular};
        let font = |size, weight, line_height| FontDescriptor::new(family, size, weight, line_height);

        Self {
            display_large: font(57.0, Regular, 64.0).with_letter_spacing(-0.25),
            display_medium: font(45.0, Regular, 52.0),
            display_small: font(36.0, Regular, 44.0),
            headline_large: font(32.0, Regular, 40.0),
            headline_medium: font(28.0, Regular, 36.0),
            headline_small: font(24.0, Regular, 32.0),
            title_large: font(22.0, Regular, 28.0),
            title_medium: font(16.0, Medium, 24.0).with_letter_spacing(0.15),
            title_small: font(14.0, Medium, 20.0).with_letter_spacing(0.1),
            body_large: font(16.0, Regular, 24.0).with_letter_spacing(0.5),
            body_medium: font(14.0, Regular, 20.0).with_letter_spacing(0.25),
            body_small: font(12.0, Regular, 16.0).with_letter_spacing(0.4),
            label_large: font(14.0, Medium, 20.0).with_letter_spacing(0.1),
            label_medium: font(12.0, Medium, 16.0).with_letter_spacing(0.5),
            label_small: font(11.0, Medium, 16.0).with_letter_spacing(0.5),
            caption: font(12.0, Regular, 16.0).with_letter_spacing(0.4),
        }
    }

    pub(crate) fn try_from_fn<E>(
        mut f: impl FnMut(TypographyToken) -> Result<FontDescriptor, E>,
    ) -> Result<Self, E> {
        Ok(Self {
            display_large: f(TypographyToken::DisplayLarge)?,
            display_medium: f(TypographyToken::DisplayMedium)?,
            display_small: f(TypographyToken::DisplaySmall)?,
            headline_large: f(TypographyToken::HeadlineLarge)?,
            headline_medium: f(TypographyToken::HeadlineMedium)?,
            headline_small: f(TypographyToken::HeadlineSmall)?,
            title_large: f(TypographyToken::TitleLarge)?,
            title_medium: f(TypographyToken::TitleMedium)?,
            title_small: f(TypographyToken::TitleSmall)?,
            body_large: f(TypographyToken::BodyLarge)?,
            body_medium: f(TypographyToken::BodyMedium)?,
            body_small: f(TypographyToken::BodySmall)?,
            label_large: f(TypographyToken::LabelLarge)?,
            label_medium: f(TypographyToken::LabelMedium)?,
            label_small: f(TypographyToken::LabelSmall)?,
            caption: f(TypographyToken::Caption)?,
        })
    }
}

impl Default for TypographyTokens {
    fn default() -> Self {
        Self::with_family(SYSTEM_FONT_FAMILY)
    }
}

impl TypographySystem for TypographyTokens {
    fn resolve(&self, token: TypographyToken, ctx: &AccessibilityContext) -> FontDescriptor {
        self.get(token).clone().adjusted(ctx)
    }
}
