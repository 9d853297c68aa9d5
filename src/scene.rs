//! # Scene Module
//!
//! Capability traits for the external scene graph and media elements.
//!
//! The director never owns scene geometry or DOM-like elements. It writes into
//! them through these narrow interfaces, so any renderer can sit behind the
//! same contract.

use crate::types::Pose;
use anyhow::Result;

/// A scene-graph node whose placement the director drives once per frame.
pub trait EntityHandle {
    /// Applies a full pose (position, rotation, scale) to the node.
    fn set_pose(&mut self, pose: &Pose);

    /// Toggles visibility of a named sub-node, if it exists. Unknown names
    /// are ignored.
    fn set_visible(&mut self, node: &str, visible: bool) {
        let _ = (node, visible);
    }
}

/// The hinged container's lid pivot.
pub trait HingeHandle {
    /// Sets the lid rotation about its hinge axis, in radians.
    fn set_angle(&mut self, radians: f32);
}

/// The presentation layer's glow sink (a purely visual, non-3D effect).
pub trait GlowHandle {
    fn set_intensity(&mut self, intensity: f32);
}

/// A media-bearing element controllable by the visibility gate.
pub trait MediaHandle {
    /// Requests playback. The host may reject (autoplay policy); the caller
    /// treats a rejection as a no-op.
    fn play(&mut self) -> Result<()>;

    /// Pauses playback. Always succeeds.
    fn pause(&mut self);
}
