use keyframe::EasingFunction;
use serde::{Deserialize, Serialize};

/// Easing curves available to the animators.
///
/// Wraps the `keyframe` function set behind one enum so curve choice can live
/// in serde'd parameter structs. Every curve maps [0, 1] onto [0, 1] with
/// `ease(0) == 0`, `ease(1) == 1`, monotonic in between.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    EaseInCubic,
    EaseOutCubic,
    /// The lid-opening default.
    EaseInOutCubic,
}

impl EasingFunction for EasingType {
    fn y(&self, x: f64) -> f64 {
        match self {
            EasingType::Linear => keyframe::functions::Linear.y(x),
            EasingType::EaseIn => keyframe::functions::EaseIn.y(x),
            EasingType::EaseOut => keyframe::functions::EaseOut.y(x),
            EasingType::EaseInOut => keyframe::functions::EaseInOut.y(x),
            EasingType::EaseInCubic => keyframe::functions::EaseInCubic.y(x),
            EasingType::EaseOutCubic => keyframe::functions::EaseOutCubic.y(x),
            EasingType::EaseInOutCubic => keyframe::functions::EaseInOutCubic.y(x),
        }
    }
}

impl EasingType {
    /// Evaluates the curve at `x`, clamping the input into [0, 1] first.
    ///
    /// Raw progress can momentarily overshoot its nominal bounds (overscroll),
    /// so the clamp keeps the output well defined for any input.
    pub fn eval(&self, x: f32) -> f32 {
        self.y(x.clamp(0.0, 1.0) as f64) as f32
    }
}
