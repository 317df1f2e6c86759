//! Hook between the black-box media player and the quiz prompt overlay.
//!
//! The player itself (playback, seeking, volume) lives outside this crate;
//! the core only reacts to its time-update and ended events.

/// Playback event reported by the media player widget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlayerEvent {
    /// Current playback position in seconds.
    TimeUpdate { seconds: f64 },
    /// Playback reached the end of the lesson video.
    Ended,
}

/// Opens the quiz prompt overlay when playback crosses a configured
/// checkpoint timestamp or ends.
///
/// The checkpoint fires at most once per arming; `reset` re-arms it for a
/// new attempt. `Ended` opens the overlay regardless of the checkpoint
/// state.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckpointWatcher {
    checkpoint: f64,
    window: f64,
    armed: bool,
    overlay_open: bool,
}

impl CheckpointWatcher {
    /// Watch for playback crossing `checkpoint` seconds, with a one-second
    /// detection window.
    #[must_use]
    pub fn new(checkpoint: f64) -> Self {
        Self {
            checkpoint,
            window: 1.0,
            armed: true,
            overlay_open: false,
        }
    }

    /// Override the detection window (seconds past the checkpoint within
    /// which a time update still counts as crossing it).
    #[must_use]
    pub fn with_window(mut self, window: f64) -> Self {
        self.window = window;
        self
    }

    /// Feed a player event. Returns true exactly when this event opened the
    /// quiz prompt overlay.
    pub fn observe(&mut self, event: PlayerEvent) -> bool {
        if self.overlay_open {
            return false;
        }

        match event {
            PlayerEvent::TimeUpdate { seconds } => {
                let crossed =
                    self.armed && seconds >= self.checkpoint && seconds < self.checkpoint + self.window;
                if crossed {
                    self.armed = false;
                    self.overlay_open = true;
                }
                crossed
            }
            PlayerEvent::Ended => {
                self.overlay_open = true;
                true
            }
        }
    }

    #[must_use]
    pub fn overlay_open(&self) -> bool {
        self.overlay_open
    }

    /// Close the overlay so playback can resume. The checkpoint stays spent
    /// until `reset`.
    pub fn dismiss(&mut self) {
        self.overlay_open = false;
    }

    /// Re-arm the checkpoint and close the overlay (new attempt or seek back
    /// to the start).
    pub fn reset(&mut self) {
        self.armed = true;
        self.overlay_open = false;
    }
}
