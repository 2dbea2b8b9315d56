//! Round controller
//!
//! Owns the round state, the glow loop and the result fade, and advances
//! them from two entry points: `tick` (once per frame) and `on_tap`.
//! Every visible change is queued as a [`RoundEvent`]; the host drains the
//! queue once per frame with `drain_events`. Consecutive countdown and fade
//! frames collapse into one, so a host that skips drains still only holds
//! the glow changes of the current round.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::events::{Events, RoundEvent};
use super::fade::{FadeFrame, ResultFade};
use super::glow::{GlowLoop, GlowStep};
use super::state::{Difficulty, Outcome, RoundPhase, RoundState};
use crate::consts::MAX_GLOW_STEPS;
use crate::sample_in_rect;
use crate::tuning::{ConfigError, RoundConfig};

/// What happened to a tap attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapOutcome {
    /// Counted; carries the new score
    Scored { score: u32 },
    /// Target was not glowing
    OutsideWindow,
    /// No round running (title screen or round over)
    RoundInactive,
}

pub struct RoundController {
    config: RoundConfig,
    state: RoundState,
    difficulty: Difficulty,
    rng: Pcg32,
    /// Seconds since the current round started
    clock: f64,
    /// Incremented on every round start
    generation: u32,
    target_pos: Vec2,
    outcome: Option<Outcome>,
    glow: Option<GlowLoop>,
    fade: Option<ResultFade>,
    events: Events,
}

impl RoundController {
    /// Create a controller showing the title panel
    pub fn new(config: RoundConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut controller = Self {
            difficulty: Difficulty::initial(&config),
            config,
            state: RoundState::default(),
            rng: Pcg32::seed_from_u64(seed),
            clock: 0.0,
            generation: 0,
            target_pos: Vec2::ZERO,
            outcome: None,
            glow: None,
            fade: None,
            events: Events::new(),
        };
        controller.events.push(RoundEvent::PanelsChanged {
            title: true,
            game: false,
        });
        controller.events.push(RoundEvent::ResultHidden);
        Ok(controller)
    }

    /// Reset everything and launch a fresh glow loop
    ///
    /// Any loop or fade from a previous round is dropped first.
    pub fn start_round(&mut self) {
        self.glow = None;
        self.fade = None;
        self.generation = self.generation.wrapping_add(1);

        self.state = RoundState::start(self.config.time_limit);
        self.difficulty = Difficulty::initial(&self.config);
        self.clock = 0.0;
        self.outcome = None;

        self.events.push(RoundEvent::ScoreChanged(0));
        self.events
            .push(RoundEvent::TimeChanged(self.state.time_remaining));
        self.events.push(RoundEvent::TapControl(true));
        self.events.push(RoundEvent::PanelsChanged {
            title: false,
            game: true,
        });
        self.events.push(RoundEvent::ResultHidden);

        log::info!(
            "Round {} started: {:.1}s, clear at {}",
            self.generation,
            self.config.time_limit,
            self.config.clear_score
        );

        // First target appears without a wait phase
        self.glow = Some(GlowLoop::begin(self.clock, &self.difficulty));
        self.activate_target();
    }

    /// Advance the round by one frame
    pub fn tick(&mut self, dt: f32) {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };

        // Result animation runs on after the round froze
        if let Some(fade) = self.fade.as_mut() {
            let FadeFrame { opacity, scale } = fade.advance(dt);
            self.events.push(RoundEvent::ResultFade { opacity, scale });
            if fade.is_finished() {
                self.fade = None;
            }
        }

        if !self.state.is_running() {
            return;
        }

        self.clock += f64::from(dt);
        let expired = self.state.count_down(self.config.time_limit, self.clock);
        self.events
            .push(RoundEvent::TimeChanged(self.state.time_remaining));

        if expired {
            self.finish_round();
            return;
        }

        self.run_glow_loop();
    }

    /// Handle a tap on the target
    ///
    /// Taps outside a glow window, or outside a running round, change nothing.
    /// Several taps in one window each count.
    pub fn on_tap(&mut self) -> TapOutcome {
        if !self.state.is_running() {
            log::debug!("Tap ignored: round {:?}", self.state.phase);
            return TapOutcome::RoundInactive;
        }
        if !self.state.can_tap {
            log::debug!("Tap ignored: target not glowing");
            return TapOutcome::OutsideWindow;
        }

        self.state.score += 1;
        self.difficulty.speed_up(&self.config);
        self.events.push(RoundEvent::ScoreChanged(self.state.score));
        log::debug!(
            "Tap scored ({}), wait={:.2}s glow={:.2}s",
            self.state.score,
            self.difficulty.wait_time,
            self.difficulty.glow_time
        );

        TapOutcome::Scored {
            score: self.state.score,
        }
    }

    /// Take all events queued since the last drain
    pub fn drain_events(&mut self) -> Vec<RoundEvent> {
        self.events.drain()
    }

    pub fn has_pending_events(&self) -> bool {
        !self.events.is_empty()
    }

    pub fn state(&self) -> &RoundState {
        &self.state
    }

    pub fn phase(&self) -> RoundPhase {
        self.state.phase
    }

    pub fn difficulty(&self) -> &Difficulty {
        &self.difficulty
    }

    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    /// Result of the last finished round, cleared on start
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn target_pos(&self) -> Vec2 {
        self.target_pos
    }

    pub fn clock(&self) -> f64 {
        self.clock
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Activations so far in the current round's glow loop
    pub fn glow_cycles(&self) -> u32 {
        self.glow.as_ref().map_or(0, GlowLoop::cycles)
    }

    pub fn is_glow_active(&self) -> bool {
        self.glow.is_some()
    }

    pub fn is_fading(&self) -> bool {
        self.fade.is_some()
    }

    fn run_glow_loop(&mut self) {
        let Some(mut glow) = self.glow.take() else {
            return;
        };

        let mut steps = 0;
        while let Some(step) = glow.poll(self.clock, &self.difficulty) {
            match step {
                GlowStep::Activate => self.activate_target(),
                GlowStep::Deactivate => self.deactivate_target(),
            }
            steps += 1;
            if steps >= MAX_GLOW_STEPS {
                log::warn!(
                    "Round {}: glow loop hit {} steps in one tick, deferring the rest",
                    self.generation,
                    steps
                );
                break;
            }
        }

        self.glow = Some(glow);
    }

    fn activate_target(&mut self) {
        self.target_pos = sample_in_rect(&mut self.rng, self.config.min_pos, self.config.max_pos);
        self.state.can_tap = true;
        self.events.push(RoundEvent::TargetMoved(self.target_pos));
        self.events.push(RoundEvent::TargetGlow(true));
        log::debug!(
            "Target glowing at ({:.0}, {:.0}) for {:.2}s",
            self.target_pos.x,
            self.target_pos.y,
            self.difficulty.glow_time
        );
    }

    fn deactivate_target(&mut self) {
        self.state.can_tap = false;
        self.events.push(RoundEvent::TargetGlow(false));
    }

    fn finish_round(&mut self) {
        self.state.phase = RoundPhase::Over;
        self.state.can_tap = false;
        self.glow = None;

        let outcome = Outcome::for_score(self.state.score, self.config.clear_score);
        self.outcome = Some(outcome);

        self.events.push(RoundEvent::TapControl(false));
        self.events.push(RoundEvent::TargetGlow(false));
        self.events.push(RoundEvent::ResultShown(outcome));
        self.events.push(RoundEvent::ResultFade {
            opacity: FadeFrame::HIDDEN.opacity,
            scale: FadeFrame::HIDDEN.scale,
        });
        self.fade = Some(ResultFade::default());

        log::info!(
            "Round {} over: score {} -> {}",
            self.generation,
            self.state.score,
            outcome.as_str()
        );
    }
}
