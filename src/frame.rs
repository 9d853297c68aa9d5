//! # Frame Module
//!
//! Applies cached derived state to the scene once per display frame.
//!
//! The adapter never recomputes poses; it only forwards the latest published
//! snapshot into whatever handles the host attached. Missing handles are
//! skipped, so a page without a lid (or without a glow sink) drives fine.

use crate::scene::{EntityHandle, GlowHandle, HingeHandle};
use crate::types::Snapshot;

/// Bridges the director's snapshot to external scene-graph handles.
#[derive(Default)]
pub struct RenderLoopAdapter {
    entity: Option<Box<dyn EntityHandle>>,
    lid: Option<Box<dyn HingeHandle>>,
    glow: Option<Box<dyn GlowHandle>>,
}

impl RenderLoopAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches the floating entity node.
    pub fn with_entity(mut self, entity: Box<dyn EntityHandle>) -> Self {
        self.entity = Some(entity);
        self
    }

    /// Attaches the container lid pivot.
    pub fn with_lid(mut self, lid: Box<dyn HingeHandle>) -> Self {
        self.lid = Some(lid);
        self
    }

    /// Attaches the glow sink.
    pub fn with_glow(mut self, glow: Box<dyn GlowHandle>) -> Self {
        self.glow = Some(glow);
        self
    }

    /// Writes one snapshot into every attached handle.
    pub fn apply(&mut self, snapshot: &Snapshot) {
        if let Some(entity) = &mut self.entity {
            entity.set_pose(&snapshot.pose);
        }
        if let Some(lid) = &mut self.lid {
            lid.set_angle(snapshot.hinge_angle);
        }
        if let Some(glow) = &mut self.glow {
            glow.set_intensity(snapshot.glow);
        }
    }

    /// Hides the configured sub-nodes on the entity (e.g. helper meshes
    /// shipped inside the asset).
    pub fn hide_nodes(&mut self, names: &[String]) {
        if let Some(entity) = &mut self.entity {
            for name in names {
                entity.set_visible(name, false);
            }
        }
    }
}
