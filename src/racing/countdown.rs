//! Pre-race countdown.
//!
//! Driven by the frame clock rather than wall time, so a paused or slow
//! frame loop simply stretches the countdown.

/// Countdown event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownEvent {
    /// Whole seconds left changed.
    Tick { seconds: u32 },
    /// Lights out.
    Go,
}

/// Frame-driven countdown.
#[derive(Debug, Clone)]
pub struct Countdown {
    /// Full length in seconds.
    duration: f32,
    /// Seconds left.
    remaining: f32,
    /// Last whole second announced.
    shown: Option<u32>,
    /// Whether `Go` has been emitted.
    finished: bool,
}

impl Countdown {
    /// Create a countdown. A non-positive duration starts already finished.
    pub fn new(seconds: f32) -> Self {
        let duration = if seconds.is_finite() { seconds.max(0.0) } else { 0.0 };
        Self {
            duration,
            remaining: duration,
            shown: None,
            finished: duration <= 0.0,
        }
    }

    /// Restart from the full duration.
    pub fn reset(&mut self) {
        *self = Self::new(self.duration);
    }

    /// Whether the countdown has run out.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Whole seconds left for display, `None` once finished.
    pub fn seconds_left(&self) -> Option<u32> {
        if self.finished {
            None
        } else {
            Some(self.remaining.ceil().max(1.0) as u32)
        }
    }

    /// Advance by `dt` seconds.
    pub fn tick(&mut self, dt: f32) -> Option<CountdownEvent> {
        if self.finished {
            return None;
        }

        self.remaining -= dt.max(0.0);
        if self.remaining <= 0.0 {
            self.remaining = 0.0;
            self.finished = true;
            return Some(CountdownEvent::Go);
        }

        let seconds = self.remaining.ceil() as u32;
        if self.shown != Some(seconds) {
            self.shown = Some(seconds);
            return Some(CountdownEvent::Tick { seconds });
        }
        None
    }
}
