//! # Hinge Module
//!
//! Maps a sub-range of global progress to the lid hinge angle.
//!
//! The hinge only moves inside its scroll window: below `range_start` it holds
//! fully closed, above `range_end` it holds fully open. Inside the window the
//! progress is re-normalized, eased, and lerped between the two angles.

use crate::errors::ConfigError;
use crate::params::HingeParams;

/// Computes lid hinge angles from global progress.
#[derive(Debug, Clone)]
pub struct HingeAnimator {
    params: HingeParams,
}

impl HingeAnimator {
    /// Builds the animator, failing fast on a degenerate range.
    ///
    /// A collapsed window (`range_start >= range_end`) would divide by zero in
    /// the re-normalization; it is a configuration error, never clamped away.
    pub fn new(params: HingeParams) -> Result<Self, ConfigError> {
        params.validate()?;
        Ok(Self { params })
    }

    /// The hinge angle in radians for the given global progress.
    pub fn angle(&self, progress: f32) -> f32 {
        let params = &self.params;
        // Clamped on both sides: progress is non-negative by construction of
        // the scroll signal, but the lower clamp costs nothing.
        let local = ((progress - params.range_start) / (params.range_end - params.range_start))
            .clamp(0.0, 1.0);
        params.closed + params.easing.eval(local) * (params.open - params.closed)
    }
}
