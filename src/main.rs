//! Glow Tap headless driver
//!
//! Plays one round at a fixed frame rate with a simulated player and prints
//! the result.

use std::process::ExitCode;

use clap::Parser;

use glow_tap::consts::FRAME_DT;
use glow_tap::{Hud, RoundConfig, RoundController, RoundEvent, TapOutcome};

#[derive(Parser, Debug)]
#[command(name = "glow-tap", about = "Play a headless round of Glow Tap")]
struct Args {
    /// JSON round config (defaults are used when omitted)
    #[arg(long)]
    config: Option<String>,
    /// RNG seed for target placement
    #[arg(long, default_value_t = 1)]
    seed: u64,
    /// Frames per second
    #[arg(long, default_value_t = 60)]
    fps: u32,
    /// Seconds into a glow window before the player reacts
    #[arg(long, default_value_t = 0.25)]
    reaction: f32,
    /// Taps the player lands per glow window (one per frame)
    #[arg(long, default_value_t = 8)]
    taps_per_glow: u32,
}

/// Simulated player reacting to glow windows
struct Player {
    reaction: f64,
    taps_per_glow: u32,
    glow_started: Option<f64>,
    taps_this_glow: u32,
}

impl Player {
    fn observe(&mut self, event: &RoundEvent, clock: f64) {
        match event {
            RoundEvent::TargetGlow(true) => {
                self.glow_started = Some(clock);
                self.taps_this_glow = 0;
            }
            RoundEvent::TargetGlow(false) => self.glow_started = None,
            _ => {}
        }
    }

    fn wants_tap(&self, clock: f64) -> bool {
        self.glow_started
            .is_some_and(|start| clock - start >= self.reaction)
            && self.taps_this_glow < self.taps_per_glow
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => match RoundConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("{e}");
                eprintln!("glow-tap: {e}");
                return ExitCode::from(2);
            }
        },
        None => RoundConfig::default(),
    };

    let mut round = match RoundController::new(config, args.seed) {
        Ok(round) => round,
        Err(e) => {
            eprintln!("glow-tap: {e}");
            return ExitCode::from(2);
        }
    };

    let dt = if args.fps > 0 {
        1.0 / args.fps as f32
    } else {
        FRAME_DT
    };
    let mut hud = Hud::new();
    let mut player = Player {
        reaction: f64::from(args.reaction.max(0.0)),
        taps_per_glow: args.taps_per_glow,
        glow_started: None,
        taps_this_glow: 0,
    };

    log::info!("Glow Tap starting (seed {}, {} fps)", args.seed, args.fps);
    round.start_round();

    while !round.state().is_over() || round.is_fading() {
        for event in round.drain_events() {
            log::debug!("{:?}", event);
            player.observe(&event, round.clock());
            hud.apply(&event);
        }

        if player.wants_tap(round.clock()) {
            if let TapOutcome::Scored { .. } = round.on_tap() {
                player.taps_this_glow += 1;
            }
        }

        round.tick(dt);
    }
    if round.has_pending_events() {
        hud.apply_all(&round.drain_events());
    }

    println!("Score: {}", hud.score_text);
    println!("{}", hud.time_text);
    println!("{}", hud.result_text.as_deref().unwrap_or("-"));
    ExitCode::SUCCESS
}
