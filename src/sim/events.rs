//! Output commands for the presentation layer

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::Outcome;

/// Something the presentation layer should show
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum RoundEvent {
    /// Title / game panel visibility
    PanelsChanged { title: bool, game: bool },
    ScoreChanged(u32),
    /// Countdown value, already clamped to 0
    TimeChanged(f32),
    TargetMoved(Vec2),
    /// Target opaque (glowing) or transparent
    TargetGlow(bool),
    /// Tap control interactable
    TapControl(bool),
    ResultShown(Outcome),
    ResultHidden,
    ResultFade { opacity: f32, scale: f32 },
}

/// Queue of events produced since the last drain
#[derive(Debug, Clone, Default)]
pub struct Events {
    queue: Vec<RoundEvent>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an event; a countdown or fade frame replaces a directly preceding one
    pub fn push(&mut self, event: RoundEvent) {
        if let Some(last) = self.queue.last_mut() {
            let supersedes = matches!(
                (&*last, &event),
                (RoundEvent::TimeChanged(_), RoundEvent::TimeChanged(_))
                    | (RoundEvent::ResultFade { .. }, RoundEvent::ResultFade { .. })
            );
            if supersedes {
                *last = event;
                return;
            }
        }
        self.queue.push(event);
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Take all pending events, oldest first
    pub fn drain(&mut self) -> Vec<RoundEvent> {
        std::mem::take(&mut self.queue)
    }
}
