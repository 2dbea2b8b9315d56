//! Round state and difficulty types
//!
//! Everything the countdown and scoring rules mutate lives here.

use serde::{Deserialize, Serialize};

use crate::tuning::RoundConfig;

/// Lifecycle of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Title screen, no round started yet
    #[default]
    Idle,
    /// Countdown running, glow loop active
    Running,
    /// Countdown expired; state frozen until the next start
    Over,
}

/// Win/lose result of a finished round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Clear,
    GameOver,
}

impl Outcome {
    /// Decide the result for a final score
    pub fn for_score(score: u32, clear_score: u32) -> Self {
        if score >= clear_score {
            Outcome::Clear
        } else {
            Outcome::GameOver
        }
    }

    /// Text shown on the result indicator
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Clear => "CLEAR",
            Outcome::GameOver => "GAME OVER",
        }
    }
}

/// Mutable per-round values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundState {
    /// Seconds left on the countdown (never below 0)
    pub time_remaining: f32,
    pub score: u32,
    pub phase: RoundPhase,
    /// True only while the target glows
    pub can_tap: bool,
}

impl Default for RoundState {
    fn default() -> Self {
        Self {
            time_remaining: 0.0,
            score: 0,
            phase: RoundPhase::Idle,
            can_tap: false,
        }
    }
}

impl RoundState {
    /// Fresh state for a round of `time_limit` seconds
    pub fn start(time_limit: f32) -> Self {
        Self {
            time_remaining: time_limit,
            score: 0,
            phase: RoundPhase::Running,
            can_tap: false,
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase == RoundPhase::Over
    }

    pub fn is_running(&self) -> bool {
        self.phase == RoundPhase::Running
    }

    /// Sync the countdown to the round clock; returns true when it has expired
    ///
    /// Derived from the clock rather than accumulated, so frames too short
    /// to move an `f32` near `time_limit` still run the countdown out.
    pub fn count_down(&mut self, time_limit: f32, clock: f64) -> bool {
        let remaining = (f64::from(time_limit) - clock).max(0.0);
        self.time_remaining = remaining as f32;
        remaining <= 0.0
    }
}

/// Current wait/glow durations, shrinking with each successful tap
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Difficulty {
    pub wait_time: f32,
    pub glow_time: f32,
}

impl Difficulty {
    /// Starting durations from the config
    pub fn initial(config: &RoundConfig) -> Self {
        Self {
            wait_time: config.wait_time,
            glow_time: config.glow_time,
        }
    }

    /// Apply one speed-up step, pinned at the configured floors
    pub fn speed_up(&mut self, config: &RoundConfig) {
        self.wait_time = (self.wait_time - config.speed_up_rate).max(config.min_wait_time);
        self.glow_time = (self.glow_time - config.speed_up_rate).max(config.min_glow_time);
    }
}
