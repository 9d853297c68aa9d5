//! # Pose Module
//!
//! Derives the floating entity's pose from scroll progress.
//!
//! ## Responsibilities
//! - **Base trajectory**: Linear vertical descent from `start_y` to `end_y`.
//! - **Harmonics**: Additive bounce/swing/flip terms, a linear spin with a
//!   periodic wobble, and a scale pulse around a base value.
//! - **Idle bob**: The only wall-clock-dependent component, layered on top.
//!
//! `compose` is a pure function of (progress, elapsed): identical inputs give
//! bit-identical poses, so any scroll position replays exactly.

use crate::params::PoseParams;
use crate::types::Pose;
use glam::Vec3;
use std::f32::consts::PI;

/// Computes entity poses from global progress.
#[derive(Debug, Clone)]
pub struct PoseComposer {
    params: PoseParams,
}

impl PoseComposer {
    /// Wraps validated parameters. Validation happens in
    /// `DirectorParams::validate` before construction.
    pub fn new(params: PoseParams) -> Self {
        Self { params }
    }

    /// Composes the pose for the given progress and elapsed seconds.
    ///
    /// `progress` is clamped into [0, 1]; `elapsed` feeds only the idle bob.
    pub fn compose(&self, progress: f32, elapsed: f64) -> Pose {
        let p = progress.clamp(0.0, 1.0);
        let params = &self.params;

        let base_y = params.start_y + p * (params.end_y - params.start_y);
        let bob = params.idle_bob_amplitude * (elapsed * params.idle_bob_rate as f64).sin() as f32;
        let y = base_y + params.bounce.offset(p) + bob;

        let yaw = p * PI * params.spin_turns + params.spin_wobble.offset(p);
        let rotation = Vec3::new(params.flip.offset(p), yaw, params.swing.offset(p));

        // Pulse can dip below zero for aggressive tunings; the floor keeps
        // geometry from inverting or vanishing.
        let scale = (params.base_scale + params.scale_pulse.offset(p)).max(params.scale_floor);

        Pose {
            position: Vec3::new(0.0, y, 0.0),
            rotation,
            scale: Vec3::splat(scale),
        }
    }
}
