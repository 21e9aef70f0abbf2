//! Animation tokens for theming

use std::time::Duration;

use hue_core::Easing;
use serde::{Deserialize, Serialize};

use crate::accessibility::AccessibilityContext;
use crate::system::AnimationSystem;

token_keys! {
    /// Motion keys for dynamic access
    pub enum AnimationToken {
        Instant => "instant",
        Fast => "fast",
        Normal => "normal",
        Slow => "slow",
        Emphasized => "emphasized",
    }
}

/// A duration paired with an easing curve
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Motion {
    pub duration_ms: u32,
    #[serde(default)]
    pub easing: Easing,
}

impl Motion {
    pub const fn new(duration_ms: u32, easing: Easing) -> Self {
        Self {
            duration_ms,
            easing,
        }
    }

    /// Zero-length motion; the change is applied immediately
    pub const fn instant() -> Self {
        Self::new(0, Easing::Linear)
    }

    pub fn duration(&self) -> Duration {
        Duration::from_millis(u64::from(self.duration_ms))
    }

    pub fn is_instant(&self) -> bool {
        self.duration_ms == 0
    }

    /// Reduce-motion collapses any motion to an instant change
    pub fn adjusted(self, ctx: &AccessibilityContext) -> Self {
        if ctx.reduce_motion {
            Self::instant()
        } else {
            self
        }
    }
}

/// Complete set of animation tokens
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationTokens {
    pub instant: Motion,
    pub fast: Motion,
    pub normal: Motion,
    pub slow: Motion,
    pub emphasized: Motion,
}

impl AnimationTokens {
    /// Get motion by token key
    pub fn get(&self, token: AnimationToken) -> Motion {
        match token {
            AnimationToken::Instant => self.instant,
            AnimationToken::Fast => self.fast,
            AnimationToken::Normal => self.normal,
            AnimationToken::Slow => self.slow,
            AnimationToken::Emphasized => self.emphasized,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (AnimationToken, Motion)> + '_ {
        AnimationToken::ALL
            .iter()
            .map(move |token| (*token, self.get(*token)))
    }

    pub(crate) fn try_from_fn<E>(
        mut f: impl FnMut(AnimationToken) -> Result<Motion, E>,
    ) -> Result<Self, E> {
        Ok(Self {
            instant: f(AnimationToken::Instant)?,
            fast: f(AnimationToken::Fast)?,
            normal: f(AnimationToken::Normal)?,
            slow: f(AnimationToken::Slow)?,
            emphasized: f(AnimationToken::Emphasized)?,
        })
    }
}

impl Default for AnimationTokens {
    fn default() -> Self {
        Self {
            instant: Motion::instant(),
            fast: Motion::new(150, Easing::EaseOut),
            normal: Motion::new(250, Easing::EaseInOut),
            slow: Motion::new(400, Easing::EaseInOut),
            emphasized: Motion::new(500, Easing::CubicBezier(0.2, 0.0, 0.0, 1.0)),
        }
    }
}

impl AnimationSystem for AnimationTokens {
    fn resolve(&self, token: AnimationToken, ctx: &AccessibilityContext) -> Motion {
        self.get(token).adjusted(ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduce_motion_zeroes_every_token() {
        let tokens = AnimationTokens::default();
        let ctx = AccessibilityContext::default().with_reduce_motion(true);
        for token in AnimationToken::ALL {
            let motion = tokens.resolve(*token, &ctx);
            assert!(motion.is_instant(), "{token}");
            assert_eq!(motion.easing, Easing::Linear);
        }
    }

    #[test]
    fn default_context_keeps_durations() {
        let tokens = AnimationTokens::default();
        let motion = tokens.resolve(AnimationToken::Normal, &AccessibilityContext::default());
        assert_eq!(motion.duration(), Duration::from_millis(250));
    }
}
