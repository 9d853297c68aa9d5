use thiserror::Error;

/// Errors raised while validating director configuration.
///
/// All variants are construction-time failures. Once a director is built, no
/// error in this crate reaches the caller: transient playback failures and
/// post-disposal access are absorbed as no-ops.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("hinge range is empty or inverted: start {start} >= end {end}")]
    InvalidHingeRange { start: f32, end: f32 },
    #[error("hinge range [{start}, {end}] must lie within [0, 1]")]
    HingeRangeOutOfBounds { start: f32, end: f32 },
    #[error("scroll epsilon must be non-negative, got {0}")]
    NegativeEpsilon(f32),
    #[error("base scale must be positive, got {0}")]
    NonPositiveBaseScale(f32),
    #[error("scale floor must be positive, got {0}")]
    NonPositiveScaleFloor(f32),
    #[error("glow base intensity must be non-negative, got {0}")]
    NegativeGlowBase(f32),
    #[error("visibility threshold must be within (0, 1), got {0}")]
    InvalidVisibilityThreshold(f32),
}
