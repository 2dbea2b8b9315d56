use glow_tap::consts::FRAME_DT;
use glow_tap::sim::RoundState;
use glow_tap::*;

/// Tick until the round ends, with a safety cap
fn run_to_end(round: &mut RoundController, mut on_frame: impl FnMut(&mut RoundController)) {
    for _ in 0..10_000 {
        if round.state().is_over() {
            return;
        }
        on_frame(round);
        round.tick(FRAME_DT);
    }
    panic!("round never ended");
}

#[test]
fn test_forty_taps_clears() {
    let config = RoundConfig {
        time_limit: 30.0,
        clear_score: 40,
        ..Default::default()
    };
    let mut round = RoundController::new(config, 2024).unwrap();
    let mut hud = Hud::new();
    round.start_round();

    let mut taps = 0;
    run_to_end(&mut round, |round| {
        if taps < 40 && round.state().can_tap {
            assert!(matches!(round.on_tap(), TapOutcome::Scored { .. }));
            taps += 1;
        }
    });
    // Let the result animation finish
    for _ in 0..60 {
        round.tick(FRAME_DT);
    }
    hud.apply_all(&round.drain_events());

    assert_eq!(round.state().score, 40);
    assert_eq!(round.outcome(), Some(Outcome::Clear));
    assert_eq!(hud.result_text.as_deref(), Some("CLEAR"));
    assert_eq!(hud.score_text, "40");
    assert_eq!(hud.time_text, "Time: 0.0");
    assert_eq!(hud.result_opacity, 1.0);
    assert_eq!(hud.result_scale, 1.0);
    assert!(!hud.tap_enabled);
    assert!(!hud.target_visible());
}

#[test]
fn test_no_taps_is_game_over() {
    let mut round = RoundController::new(RoundConfig::default(), 5).unwrap();
    let mut hud = Hud::new();
    round.start_round();
    run_to_end(&mut round, |_| {});
    hud.apply_all(&round.drain_events());

    assert_eq!(round.state().score, 0);
    assert!(round.clock() >= 29.9);
    assert_eq!(hud.result_text.as_deref(), Some("GAME OVER"));
}

#[test]
fn test_missed_taps_never_score() {
    let mut round = RoundController::new(RoundConfig::default(), 8).unwrap();
    round.start_round();
    run_to_end(&mut round, |round| {
        if !round.state().can_tap {
            let before = round.state().score;
            assert_eq!(round.on_tap(), TapOutcome::OutsideWindow);
            assert_eq!(round.state().score, before);
        }
    });
    assert_eq!(round.state().score, 0);
}

#[test]
fn test_no_state_change_after_over() {
    let mut round = RoundController::new(RoundConfig::default(), 8).unwrap();
    round.start_round();
    round.tick(30.0);
    assert!(round.state().is_over());

    let frozen: RoundState = round.state().clone();
    let difficulty = *round.difficulty();
    for _ in 0..120 {
        round.tick(FRAME_DT);
        assert_eq!(round.on_tap(), TapOutcome::RoundInactive);
    }
    assert_eq!(round.state(), &frozen);
    assert_eq!(round.difficulty(), &difficulty);
}

#[test]
fn test_restart_cancels_previous_glow_loop() {
    let config = RoundConfig {
        wait_time: 0.5,
        glow_time: 0.5,
        ..Default::default()
    };
    let mut round = RoundController::new(config, 77).unwrap();
    round.start_round();
    for _ in 0..100 {
        round.tick(FRAME_DT);
    }
    assert!(round.glow_cycles() > 1);
    round.drain_events();

    round.start_round();
    assert_eq!(round.generation(), 2);
    assert_eq!(round.glow_cycles(), 1);

    let mut moves = 0;
    let mut glow_changes = Vec::new();
    for event in round.drain_events() {
        match event {
            RoundEvent::TargetMoved(_) => moves += 1,
            RoundEvent::TargetGlow(on) => glow_changes.push(on),
            _ => {}
        }
    }
    for _ in 0..300 {
        round.tick(FRAME_DT);
        for event in round.drain_events() {
            match event {
                RoundEvent::TargetMoved(_) => moves += 1,
                RoundEvent::TargetGlow(on) => glow_changes.push(on),
                _ => {}
            }
        }
    }

    // Exactly one loop's worth of moves, strictly alternating glow on/off
    assert_eq!(moves, round.glow_cycles());
    assert!(glow_changes.windows(2).all(|w| w[0] != w[1]));
    assert_eq!(glow_changes.first(), Some(&true));
}

#[test]
fn test_same_seed_same_events() {
    let play = |seed: u64| {
        let mut round = RoundController::new(RoundConfig::default(), seed).unwrap();
        round.start_round();
        let mut log = Vec::new();
        for frame in 0..1200 {
            if frame % 7 == 0 {
                round.on_tap();
            }
            round.tick(FRAME_DT);
            log.extend(round.drain_events());
        }
        log
    };

    assert_eq!(play(42), play(42));
    assert_ne!(play(42), play(43));
}
