//! Race flow
//!
//! Countdown, lap and sector tracking, the session that owns the race state,
//! and the final results.

pub mod countdown;
pub mod progress;
pub mod results;
pub mod session;

// Re-export commonly used types
pub use countdown::{Countdown, CountdownEvent};
pub use progress::{ProgressEvent, RacePhase, RaceProgress};
pub use results::RaceResult;
pub use session::{GameSession, RaceState, Racer, SessionEvent};
