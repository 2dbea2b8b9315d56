//! Headless presentation layer
//!
//! Folds [`RoundEvent`]s into the values a UI would display. A renderer
//! only needs to read these fields each frame.

use glam::Vec2;

use crate::format_time;
use crate::sim::RoundEvent;

/// Display state driven by round events
#[derive(Debug, Clone, PartialEq)]
pub struct Hud {
    pub title_visible: bool,
    pub game_visible: bool,
    pub score_text: String,
    pub time_text: String,
    pub target_pos: Vec2,
    /// 1 while glowing, 0 otherwise
    pub target_opacity: f32,
    pub tap_enabled: bool,
    /// `None` while the result indicator is hidden
    pub result_text: Option<String>,
    pub result_opacity: f32,
    pub result_scale: f32,
}

impl Default for Hud {
    fn default() -> Self {
        Self {
            title_visible: true,
            game_visible: false,
            score_text: "0".to_string(),
            time_text: format_time(0.0),
            target_pos: Vec2::ZERO,
            target_opacity: 0.0,
            tap_enabled: false,
            result_text: None,
            result_opacity: 0.0,
            result_scale: 0.0,
        }
    }
}

impl Hud {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, event: &RoundEvent) {
        match *event {
            RoundEvent::PanelsChanged { title, game } => {
                self.title_visible = title;
                self.game_visible = game;
            }
            RoundEvent::ScoreChanged(score) => self.score_text = score.to_string(),
            RoundEvent::TimeChanged(remaining) => self.time_text = format_time(remaining),
            RoundEvent::TargetMoved(pos) => self.target_pos = pos,
            RoundEvent::TargetGlow(on) => self.target_opacity = if on { 1.0 } else { 0.0 },
            RoundEvent::TapControl(enabled) => self.tap_enabled = enabled,
            RoundEvent::ResultShown(outcome) => {
                self.result_text = Some(outcome.as_str().to_string());
            }
            RoundEvent::ResultHidden => {
                self.result_text = None;
                self.result_opacity = 0.0;
                self.result_scale = 0.0;
            }
            RoundEvent::ResultFade { opacity, scale } => {
                self.result_opacity = opacity;
                self.result_scale = scale;
            }
        }
    }

    pub fn apply_all<'a>(&mut self, events: impl IntoIterator<Item = &'a RoundEvent>) {
        for event in events {
            self.apply(event);
        }
    }

    /// True when the target is drawn and tappable
    pub fn target_visible(&self) -> bool {
        self.target_opacity > 0.0
    }
}
