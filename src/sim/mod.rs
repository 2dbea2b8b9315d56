//! Deterministic round simulation
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only advances through `tick`
//! - Seeded RNG only
//! - No rendering or platform dependencies; visuals leave as `RoundEvent`s

pub mod controller;
pub mod events;
pub mod fade;
pub mod glow;
pub mod state;

pub use controller::{RoundController, TapOutcome};
pub use events::{Events, RoundEvent};
pub use fade::{FadeFrame, ResultFade};
pub use glow::{GlowLoop, GlowPhase, GlowStep};
pub use state::{Difficulty, Outcome, RoundPhase, RoundState};
