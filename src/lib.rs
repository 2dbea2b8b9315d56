//! Glow Tap - A reaction-time tap minigame
//!
//! Core modules:
//! - `sim`: Deterministic round simulation (countdown, glow loop, scoring)
//! - `tuning`: Data-driven game balance
//! - `hud`: Headless presentation layer fed by round events

pub mod hud;
pub mod sim;
pub mod tuning;

pub use hud::Hud;
pub use sim::{Outcome, RoundController, RoundEvent, RoundPhase, TapOutcome};
pub use tuning::{ConfigError, RoundConfig};

use glam::Vec2;
use rand::Rng;

/// Game configuration constants
pub mod consts {
    /// Default frame step for headless play (60 Hz)
    pub const FRAME_DT: f32 = 1.0 / 60.0;
    /// Maximum glow phase transitions processed in one tick
    pub const MAX_GLOW_STEPS: u32 = 64;

    /// Round defaults
    pub const TIME_LIMIT: f32 = 30.0;
    pub const CLEAR_SCORE: u32 = 40;

    /// Difficulty defaults (seconds)
    pub const WAIT_TIME: f32 = 4.5;
    pub const GLOW_TIME: f32 = 1.2;
    pub const SPEED_UP_RATE: f32 = 0.03;
    pub const MIN_WAIT_TIME: f32 = 0.5;
    pub const MIN_GLOW_TIME: f32 = 0.3;

    /// Target placement rectangle
    pub const MIN_POS: (f32, f32) = (-300.0, -500.0);
    pub const MAX_POS: (f32, f32) = (300.0, 500.0);

    /// Result indicator fade/scale duration
    pub const RESULT_FADE_SECS: f32 = 0.6;
}

/// Sample a point uniformly from the rectangle spanned by `min` and `max`
///
/// Degenerate axes (min == max) return that coordinate.
#[inline]
pub fn sample_in_rect<R: Rng + ?Sized>(rng: &mut R, min: Vec2, max: Vec2) -> Vec2 {
    let x = if max.x > min.x { rng.random_range(min.x..max.x) } else { min.x };
    let y = if max.y > min.y { rng.random_range(min.y..max.y) } else { min.y };
    Vec2::new(x, y)
}

/// Format the countdown display (one decimal place, never negative)
#[inline]
pub fn format_time(remaining: f32) -> String {
    format!("Time: {:.1}", remaining.max(0.0))
}
