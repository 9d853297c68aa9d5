//! Scroll-synchronized glow pulse.
//!
//! Intensity is a function of progress, not wall-clock time, so the pulse
//! freezes exactly when scrolling pauses.

use crate::params::GlowParams;
use std::f32::consts::PI;

/// Computes the presentation layer's glow intensity from progress.
#[derive(Debug, Clone)]
pub struct GlowComputer {
    params: GlowParams,
}

impl GlowComputer {
    pub fn new(params: GlowParams) -> Self {
        Self { params }
    }

    /// Intensity for the given progress; bounded, never negative.
    pub fn intensity(&self, progress: f32) -> f32 {
        let params = &self.params;
        let raw = params.base + params.amplitude * (progress * PI * params.frequency).sin();
        raw.max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_range() {
        let glow = GlowComputer::new(GlowParams::default());
        for i in 0..=1000 {
            let p = i as f32 / 1000.0;
            let v = glow.intensity(p);
            assert!((0.0..=20.0 + 1e-4).contains(&v), "out of range at p={}", p);
        }
    }

    #[test]
    fn test_never_negative_when_amplitude_exceeds_base() {
        let glow = GlowComputer::new(GlowParams {
            base: 2.0,
            amplitude: 10.0,
            frequency: 2.0,
        });
        // sin is -1 at p = 0.75 with frequency 2.
        assert_eq!(glow.intensity(0.75), 0.0);
    }

    #[test]
    fn test_peaks_at_quarter_cycle() {
        let glow = GlowComputer::new(GlowParams::default());
        // frequency 4: first crest at p = 0.125.
        assert!((glow.intensity(0.125) - 20.0).abs() < 1e-3);
    }
}
