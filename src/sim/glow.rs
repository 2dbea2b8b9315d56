//! Glow scheduling loop
//!
//! An explicit "next wake time" state machine that alternates between a
//! wait phase and a glow phase. Each phase reads its duration from the
//! difficulty at the moment it begins, and each wake time is measured from
//! the previous ideal wake time so the schedule does not drift with frame
//! rate. The very first cycle has no wait phase.

use super::state::Difficulty;

/// Where the loop is suspended
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GlowPhase {
    /// Target hidden; resumes at `wake_at` (round clock seconds)
    Waiting { wake_at: f64 },
    /// Target tappable; resumes at `wake_at`
    Glowing { wake_at: f64 },
}

/// Side effect requested by a loop step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlowStep {
    /// Move the target, make it opaque, allow taps
    Activate,
    /// Make the target transparent, refuse taps
    Deactivate,
}

#[derive(Debug, Clone)]
pub struct GlowLoop {
    phase: GlowPhase,
    /// Completed activations, including the first
    cycles: u32,
}

impl GlowLoop {
    /// Start a loop at `now`; the caller performs the first activation immediately
    pub fn begin(now: f64, difficulty: &Difficulty) -> Self {
        Self {
            phase: GlowPhase::Glowing {
                wake_at: now + f64::from(difficulty.glow_time),
            },
            cycles: 1,
        }
    }

    pub fn phase(&self) -> GlowPhase {
        self.phase
    }

    pub fn cycles(&self) -> u32 {
        self.cycles
    }

    /// Resume the loop if its wake time has passed
    ///
    /// Returns at most one step; call repeatedly until `None` to catch up.
    pub fn poll(&mut self, now: f64, difficulty: &Difficulty) -> Option<GlowStep> {
        match self.phase {
            GlowPhase::Glowing { wake_at } if now >= wake_at => {
                self.phase = GlowPhase::Waiting {
                    wake_at: wake_at + f64::from(difficulty.wait_time),
                };
                Some(GlowStep::Deactivate)
            }
            GlowPhase::Waiting { wake_at } if now >= wake_at => {
                self.phase = GlowPhase::Glowing {
                    wake_at: wake_at + f64::from(difficulty.glow_time),
                };
                self.cycles += 1;
                Some(GlowStep::Activate)
            }
            _ => None,
        }
    }
}
