//! # Visibility Module
//!
//! Gates media playback on viewport visibility, decoupled from scroll.
//!
//! ## Responsibilities
//! - **Crossing detection**: One `play` per upward threshold crossing, one
//!   `pause` per downward crossing, at the granularity the host observer
//!   delivers ratios.
//! - **Playback**: Applies intents to media handles; a rejected `play` is
//!   logged and swallowed, with no retry until the next transition.

use crate::scene::MediaHandle;
use crate::types::{MediaId, MediaIntent};
use tracing::warn;

struct WatchedMedia {
    handle: Box<dyn MediaHandle>,
    visible: bool,
}

/// Observes media elements and converts visibility ratios into playback.
pub struct VisibilityGate {
    threshold: f32,
    media: Vec<WatchedMedia>,
}

impl VisibilityGate {
    /// Creates a gate with the given visibility threshold (validated by
    /// `InputParams::validate`).
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            media: Vec::new(),
        }
    }

    /// Registers a media element, initially treated as off-screen.
    /// Returns the id used to report ratio updates for it.
    pub fn observe(&mut self, handle: Box<dyn MediaHandle>) -> MediaId {
        self.media.push(WatchedMedia {
            handle,
            visible: false,
        });
        self.media.len() - 1
    }

    /// Number of observed elements.
    pub fn len(&self) -> usize {
        self.media.len()
    }

    pub fn is_empty(&self) -> bool {
        self.media.is_empty()
    }

    /// Feeds a fresh visibility ratio for one element.
    ///
    /// Returns the intent that was applied, or `None` if the ratio stayed on
    /// the same side of the threshold. Unknown ids are ignored.
    pub fn update_ratio(&mut self, target: MediaId, ratio: f32) -> Option<MediaIntent> {
        let watched = self.media.get_mut(target)?;
        let now_visible = ratio >= self.threshold;
        if now_visible == watched.visible {
            return None;
        }
        watched.visible = now_visible;

        if now_visible {
            // Autoplay may be rejected by the host; that is not fatal, the
            // element simply stays paused until the next crossing.
            if let Err(err) = watched.handle.play() {
                warn!(media = target, %err, "media play rejected");
            }
        } else {
            watched.handle.pause();
        }

        Some(MediaIntent {
            target,
            should_play: now_visible,
        })
    }

    /// Pauses every observed element. Used on director teardown.
    pub fn pause_all(&mut self) {
        for watched in &mut self.media {
            if watched.visible {
                watched.handle.pause();
                watched.visible = false;
            }
        }
    }
}
