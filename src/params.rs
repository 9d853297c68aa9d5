//! # Params Module
//!
//! Tunable values for every animator, gathered into serde'd structs.
//!
//! ## Responsibilities
//! - **Defaults**: The shipped tuning for the floating-entity choreography.
//! - **Validation**: Construction-time checks that fail fast on bad config.
//! - **Loading**: Parameter sets round-trip through JSON.
//!
//! ## Key Types
//! - `DirectorParams`: Everything the director needs, one struct per animator.
//! - `Harmonic`: One additive `amplitude * sin(progress * PI * frequency)` term.

use crate::easing::EasingType;
use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

/// One periodic offset term over the scroll range.
///
/// Frequencies are small integer multiples of `PI` over progress so the term
/// completes a whole number of half-cycles in one full scroll pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Harmonic {
    pub amplitude: f32,
    pub frequency: f32,
}

impl Harmonic {
    pub fn new(amplitude: f32, frequency: f32) -> Self {
        Self {
            amplitude,
            frequency,
        }
    }

    /// Evaluates the term at the given progress.
    pub fn offset(&self, progress: f32) -> f32 {
        self.amplitude * (progress * PI * self.frequency).sin()
    }
}

/// Tuning for the floating entity's trajectory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoseParams {
    /// Vertical position at progress 0.
    pub start_y: f32,
    /// Vertical position at progress 1.
    pub end_y: f32,
    /// Vertical bounce on top of the base descent.
    pub bounce: Harmonic,
    /// Roll oscillation (rotation about z).
    pub swing: Harmonic,
    /// Pitch oscillation (rotation about x).
    pub flip: Harmonic,
    /// Linear yaw in multiples of PI over the full scroll range.
    pub spin_turns: f32,
    /// Periodic yaw wobble layered on the linear spin.
    pub spin_wobble: Harmonic,
    /// Uniform scale the pulse oscillates around.
    pub base_scale: f32,
    /// Scale pulse over the scroll range.
    pub scale_pulse: Harmonic,
    /// Strictly positive lower bound on scale; degenerate geometry guard.
    pub scale_floor: f32,
    /// Amplitude of the wall-clock idle bob.
    pub idle_bob_amplitude: f32,
    /// Idle bob angular rate in radians per second of elapsed time.
    pub idle_bob_rate: f32,
}

impl Default for PoseParams {
    fn default() -> Self {
        Self {
            start_y: 20.0,
            end_y: -25.0,
            bounce: Harmonic::new(4.0, 4.0),
            swing: Harmonic::new(0.3, 3.0),
            flip: Harmonic::new(0.5, 6.0),
            spin_turns: 4.0,
            spin_wobble: Harmonic::new(0.5, 2.0),
            base_scale: 0.3,
            scale_pulse: Harmonic::new(0.05, 2.0),
            scale_floor: 1e-3,
            idle_bob_amplitude: 0.1,
            idle_bob_rate: 1.0,
        }
    }
}

impl PoseParams {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_scale <= 0.0 {
            return Err(ConfigError::NonPositiveBaseScale(self.base_scale));
        }
        if self.scale_floor <= 0.0 {
            return Err(ConfigError::NonPositiveScaleFloor(self.scale_floor));
        }
        Ok(())
    }
}

/// Tuning for the lid hinge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HingeParams {
    /// Progress at which the lid starts opening.
    pub range_start: f32,
    /// Progress at which the lid is fully open.
    pub range_end: f32,
    /// Hinge angle (radians) while closed.
    pub closed: f32,
    /// Hinge angle (radians) when fully open.
    pub open: f32,
    pub easing: EasingType,
}

impl Default for HingeParams {
    fn default() -> Self {
        Self {
            range_start: 0.0,
            range_end: 0.3,
            closed: 0.0,
            open: PI * 0.9,
            easing: EasingType::EaseInOutCubic,
        }
    }
}

impl HingeParams {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.range_start >= self.range_end {
            return Err(ConfigError::InvalidHingeRange {
                start: self.range_start,
                end: self.range_end,
            });
        }
        if self.range_start < 0.0 || self.range_end > 1.0 {
            return Err(ConfigError::HingeRangeOutOfBounds {
                start: self.range_start,
                end: self.range_end,
            });
        }
        Ok(())
    }
}

/// Tuning for the scroll-synchronized glow pulse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlowParams {
    pub base: f32,
    pub amplitude: f32,
    pub frequency: f32,
}

impl Default for GlowParams {
    fn default() -> Self {
        Self {
            base: 10.0,
            amplitude: 10.0,
            frequency: 4.0,
        }
    }
}

impl GlowParams {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base < 0.0 {
            return Err(ConfigError::NegativeGlowBase(self.base));
        }
        Ok(())
    }
}

/// Tuning for the scroll signal and visibility gate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputParams {
    /// Minimum progress change that triggers a recompute; filters sub-pixel jitter.
    pub scroll_epsilon: f32,
    /// Visible fraction above which media plays.
    pub visibility_threshold: f32,
}

impl Default for InputParams {
    fn default() -> Self {
        Self {
            scroll_epsilon: 1e-4,
            visibility_threshold: 0.5,
        }
    }
}

impl InputParams {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.scroll_epsilon < 0.0 {
            return Err(ConfigError::NegativeEpsilon(self.scroll_epsilon));
        }
        if self.visibility_threshold <= 0.0 || self.visibility_threshold >= 1.0 {
            return Err(ConfigError::InvalidVisibilityThreshold(
                self.visibility_threshold,
            ));
        }
        Ok(())
    }
}

/// The complete director configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectorParams {
    pub pose: PoseParams,
    pub hinge: HingeParams,
    pub glow: GlowParams,
    pub input: InputParams,
    /// Sub-node names hidden on the floating entity at start.
    pub hidden_nodes: Vec<String>,
}

impl DirectorParams {
    /// Validates every section; the first failure wins.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.pose.validate()?;
        self.hinge.validate()?;
        self.glow.validate()?;
        self.input.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        DirectorParams::default().validate().unwrap();
    }

    #[test]
    fn test_inverted_hinge_range_rejected() {
        let params = HingeParams {
            range_start: 0.3,
            range_end: 0.3,
            ..Default::default()
        };
        assert_eq!(
            params.validate(),
            Err(ConfigError::InvalidHingeRange {
                start: 0.3,
                end: 0.3
            })
        );
    }

    #[test]
    fn test_json_round_trip() {
        let params = DirectorParams {
            hidden_nodes: vec!["Cube".to_string(), "Plane".to_string()],
            ..Default::default()
        };
        let json = serde_json::to_string(&params).unwrap();
        let back: DirectorParams = serde_json::from_str(&json).unwrap();
        assert_eq!(params, back);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let params: DirectorParams =
            serde_json::from_str(r#"{"glow": {"base": 5.0}}"#).unwrap();
        assert!((params.glow.base - 5.0).abs() < 1e-6);
        assert!((params.glow.amplitude - 10.0).abs() < 1e-6);
        assert!((params.hinge.range_end - 0.3).abs() < 1e-6);
    }
}
