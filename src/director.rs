//! # Director Module
//!
//! The central coordinator of the scroll animation.
//!
//! ## Responsibilities
//! - **Lifecycle**: `Uninitialized -> Active -> Disposed`, idempotent teardown.
//! - **Derivation**: Folds scroll samples into an immutable `Snapshot` through
//!   the pose/hinge/glow computers.
//! - **Coalescing**: Scroll samples arriving between frames overwrite each
//!   other; a frame tick only ever folds in the latest one.
//! - **Media**: Routes visibility ratios to the `VisibilityGate`.
//!
//! ## Key Types
//! - `AnimationDirector`: Owns every component and the published snapshot.
//!
//! Everything runs on the host's single event-loop thread. The snapshot is a
//! fresh record built on each recompute and replaced wholesale, so the render
//! tick never sees a half-written triple.

use crate::errors::ConfigError;
use crate::frame::RenderLoopAdapter;
use crate::glow::GlowComputer;
use crate::hinge::HingeAnimator;
use crate::params::DirectorParams;
use crate::pose::PoseComposer;
use crate::scene::MediaHandle;
use crate::scroll::ScrollSignal;
use crate::types::{MediaId, MediaIntent, Phase, Snapshot};
use crate::visibility::VisibilityGate;
use tracing::{debug, info, trace};

/// Orchestrates scroll input, derived state, and media playback.
pub struct AnimationDirector {
    phase: Phase,
    scroll: ScrollSignal,
    composer: PoseComposer,
    hinge: HingeAnimator,
    glow: GlowComputer,
    gate: VisibilityGate,
    adapter: Option<RenderLoopAdapter>,
    hidden_nodes: Vec<String>,
    /// Latest scroll sample not yet folded into the snapshot.
    pending: Option<f32>,
    snapshot: Snapshot,
    /// Timestamp of the first frame tick; elapsed time is measured from it.
    epoch: Option<f64>,
    elapsed: f64,
}

impl AnimationDirector {
    /// Builds a director from validated parameters.
    ///
    /// All configuration checks happen here; after construction no error in
    /// the director reaches the caller.
    pub fn new(params: DirectorParams) -> Result<Self, ConfigError> {
        params.validate()?;

        let composer = PoseComposer::new(params.pose);
        let hinge = HingeAnimator::new(params.hinge)?;
        let glow = GlowComputer::new(params.glow);

        let snapshot = Snapshot {
            progress: 0.0,
            pose: composer.compose(0.0, 0.0),
            hinge_angle: hinge.angle(0.0),
            glow: glow.intensity(0.0),
        };

        Ok(Self {
            phase: Phase::Uninitialized,
            scroll: ScrollSignal::new(params.input.scroll_epsilon),
            composer,
            hinge,
            glow,
            gate: VisibilityGate::new(params.input.visibility_threshold),
            adapter: None,
            hidden_nodes: params.hidden_nodes,
            pending: None,
            snapshot,
            epoch: None,
            elapsed: 0.0,
        })
    }

    /// Attaches the renderer adapter the frame tick writes through.
    ///
    /// Attaching after disposal is a no-op.
    pub fn attach_renderer(&mut self, adapter: RenderLoopAdapter) {
        if self.phase == Phase::Disposed {
            debug!("attach_renderer after disposal ignored");
            return;
        }
        self.adapter = Some(adapter);
    }

    /// Registers a media element with the visibility gate.
    pub fn observe_media(&mut self, handle: Box<dyn MediaHandle>) -> Option<MediaId> {
        if self.phase == Phase::Disposed {
            debug!("observe_media after disposal ignored");
            return None;
        }
        Some(self.gate.observe(handle))
    }

    /// `Uninitialized -> Active`. Hides configured sub-nodes on the entity.
    pub fn start(&mut self) {
        match self.phase {
            Phase::Uninitialized => {
                if let Some(adapter) = &mut self.adapter {
                    adapter.hide_nodes(&self.hidden_nodes);
                }
                self.phase = Phase::Active;
                info!("animation director started");
            }
            Phase::Active => {}
            Phase::Disposed => debug!("start after disposal ignored"),
        }
    }

    /// Feeds a raw scroll sample. Synchronous; runs on scroll delivery.
    ///
    /// The sample is normalized and, if it moved past the epsilon, parked as
    /// the pending progress for the next frame tick. Multiple samples between
    /// ticks simply overwrite each other.
    pub fn handle_scroll(&mut self, offset: f32, range: f32) {
        if self.phase != Phase::Active {
            debug!("scroll sample outside active phase ignored");
            return;
        }
        if let Some(progress) = self.scroll.sample(offset, range) {
            trace!(progress, "scroll sample parked for next tick");
            self.pending = Some(progress);
        }
    }

    /// Feeds a visibility ratio for a registered media element.
    ///
    /// Independent of the pose pipeline; never touches the snapshot. Returns
    /// the playback intent applied, if the ratio crossed the threshold.
    pub fn handle_visibility(&mut self, target: MediaId, ratio: f32) -> Option<MediaIntent> {
        if self.phase != Phase::Active {
            debug!("visibility update outside active phase ignored");
            return None;
        }
        self.gate.update_ratio(target, ratio)
    }

    /// One render tick. `timestamp` is the host frame timestamp in seconds.
    ///
    /// Folds the pending scroll sample (if any) into a fresh snapshot, then
    /// writes the snapshot through the renderer adapter. Samples arriving
    /// after this call began wait for the next tick.
    pub fn on_frame(&mut self, timestamp: f64) {
        if self.phase != Phase::Active {
            debug!("frame tick outside active phase ignored");
            return;
        }

        let epoch = *self.epoch.get_or_insert(timestamp);
        self.elapsed = timestamp - epoch;

        if let Some(progress) = self.pending.take() {
            self.snapshot = self.derive(progress, self.elapsed);
        }

        if let Some(adapter) = &mut self.adapter {
            adapter.apply(&self.snapshot);
        }
    }

    /// The last published snapshot. Read-only; safe in any phase.
    pub fn snapshot(&self) -> Snapshot {
        self.snapshot
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// `-> Disposed`. Pauses all media, releases scene handles, and freezes
    /// the snapshot. Safe to call repeatedly and to race in-flight callbacks:
    /// anything arriving afterwards is a guarded no-op.
    pub fn stop(&mut self) {
        if self.phase == Phase::Disposed {
            debug!("stop called twice, ignored");
            return;
        }
        self.gate.pause_all();
        self.adapter = None;
        self.pending = None;
        self.phase = Phase::Disposed;
        info!("animation director disposed");
    }

    fn derive(&self, progress: f32, elapsed: f64) -> Snapshot {
        Snapshot {
            progress,
            pose: self.composer.compose(progress, elapsed),
            hinge_angle: self.hinge.angle(progress),
            glow: self.glow.intensity(progress),
        }
    }
}
