//! # Scroll Module
//!
//! Normalizes raw scroll offsets into a progress value in [0, 1].
//!
//! ## Responsibilities
//! - **Normalization**: offset / scrollable-range, clamped against overscroll.
//! - **Jitter filtering**: change notifications are suppressed below an epsilon.
//!
//! The signal is synchronous: it runs on the host's scroll-event delivery and
//! never touches the render loop.

use tracing::trace;

/// Samples scroll offsets into normalized progress.
#[derive(Debug, Clone)]
pub struct ScrollSignal {
    epsilon: f32,
    last: Option<f32>,
    delta: f32,
}

impl ScrollSignal {
    /// Creates a signal with the given change-notification epsilon.
    ///
    /// Epsilon validity is checked by `InputParams::validate` before the
    /// director is built.
    pub fn new(epsilon: f32) -> Self {
        Self {
            epsilon,
            last: None,
            delta: 0.0,
        }
    }

    /// Pure normalization: `offset / range` clamped into [0, 1].
    ///
    /// A non-positive range means the container does not scroll (shorter than
    /// the viewport); progress is defined as 0 rather than failing.
    pub fn progress(offset: f32, range: f32) -> f32 {
        if range <= 0.0 {
            return 0.0;
        }
        (offset / range).clamp(0.0, 1.0)
    }

    /// Samples an offset and returns the new progress if it moved by more
    /// than epsilon since the last notification.
    ///
    /// The very first sample always notifies so downstream state gets an
    /// initial value.
    pub fn sample(&mut self, offset: f32, range: f32) -> Option<f32> {
        let progress = Self::progress(offset, range);
        match self.last {
            Some(prev) if (progress - prev).abs() <= self.epsilon => {
                trace!(progress, prev, "scroll sample below epsilon, dropped");
                None
            }
            _ => {
                self.delta = progress - self.last.unwrap_or(progress);
                self.last = Some(progress);
                Some(progress)
            }
        }
    }

    /// The last notified progress, if any sample has been taken.
    pub fn last_progress(&self) -> Option<f32> {
        self.last
    }

    /// Progress change carried by the last notification (signed; 0 before
    /// the first notification). Positive means scrolling down.
    pub fn last_delta(&self) -> f32 {
        self.delta
    }
}
