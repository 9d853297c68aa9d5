//! # Scroll Director
//!
//! `scroll-director` turns a single normalized scroll-progress signal into
//! deterministic poses for a set of independently animated entities: a
//! floating 3D object, a hinged container lid, an ambient glow intensity, and
//! viewport-gated media playback.
//!
//! The crate is renderer-agnostic. It consumes scroll samples and visibility
//! ratios and publishes an immutable [`Snapshot`] the render loop applies to
//! opaque scene handles once per display frame; it never rasterizes anything
//! itself.
//!
//! ## Core Pieces
//!
//! *   **Derived state is pure**: Pose, hinge angle, and glow are functions of
//!     (progress, elapsed time) alone, so any scroll position replays exactly.
//! *   **Coalescing**: Scroll samples arriving between frames collapse to the
//!     latest one; the render tick never sees a torn update.
//! *   **Graceful degradation**: Bad configuration fails at construction;
//!     everything afterwards (rejected autoplay, callbacks racing disposal)
//!     degrades to a frozen pose instead of an error.
//!
//! ## Usage
//!
//! ```rust
//! use scroll_director::{AnimationDirector, DirectorParams};
//!
//! let mut director = AnimationDirector::new(DirectorParams::default())?;
//! director.start();
//! director.handle_scroll(1200.0, 4000.0); // scroll event
//! director.on_frame(0.016); // render tick
//! let snapshot = director.snapshot();
//! assert!(snapshot.progress > 0.0);
//! # Ok::<(), scroll_director::ConfigError>(())
//! ```

pub mod director;
pub mod easing;
pub mod errors;
pub mod frame;
pub mod glow;
pub mod hinge;
pub mod params;
pub mod pose;
pub mod scene;
pub mod scroll;
pub mod types;
pub mod visibility;

pub use director::AnimationDirector;
pub use easing::EasingType;
pub use errors::ConfigError;
pub use frame::RenderLoopAdapter;
pub use params::{DirectorParams, GlowParams, Harmonic, HingeParams, InputParams, PoseParams};
pub use scene::{EntityHandle, GlowHandle, HingeHandle, MediaHandle};
pub use types::{MediaId, MediaIntent, Phase, Pose, Snapshot};
pub use visibility::VisibilityGate;
