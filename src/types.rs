//! # Types Module
//!
//! Shared data types used across the director.
//!
//! ## Responsibilities
//! - **Pose**: Position/rotation/scale triple for the floating entity.
//! - **Snapshot**: The immutable derived-state record published to the render loop.
//! - **MediaIntent**: Play/pause intents emitted by the visibility gate.
//!
//! ## Key Types
//! - `Pose`: Euler-angle based placement in 3D space.
//! - `Snapshot`: `{ progress, pose, hinge_angle, glow }`, replaced wholesale on update.
//! - `MediaId`: Type alias for media element indices (`usize`).

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// A unique identifier for a media element watched by the visibility gate.
pub type MediaId = usize;

/// Placement of an animated entity at a given instant.
///
/// Rotation is expressed as Euler angles in radians (x: pitch/"flip",
/// y: yaw/"spin", z: roll/"swing"). Scale is per-axis but is produced
/// uniformly by the composer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Pose {
    /// The identity pose: origin, no rotation, unit scale.
    pub fn identity() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

/// The full derived state for one scroll sample.
///
/// A snapshot is immutable once published. The director builds a fresh record
/// on every recompute and swaps it in wholesale, so the render loop never
/// observes a partially updated triple.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// The scroll progress this snapshot was derived from.
    pub progress: f32,
    /// Pose of the floating entity.
    pub pose: Pose,
    /// Lid hinge rotation in radians.
    pub hinge_angle: f32,
    /// Scalar glow intensity for the presentation layer.
    pub glow: f32,
}

/// A playback intent for a single media element.
///
/// Emitted on every threshold crossing; consumers must tolerate repeated
/// identical intents (applying `play` to a playing element is a no-op).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediaIntent {
    pub target: MediaId,
    pub should_play: bool,
}

/// Lifecycle phase of the director.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Built but not started; no subscriptions are live.
    Uninitialized,
    /// Started; scroll and visibility input is accepted and frames tick.
    Active,
    /// Torn down; all further input is a guarded no-op.
    Disposed,
}
