use glow_tap::consts::FRAME_DT;
use glow_tap::*;
use proptest::prelude::*;

fn speedy_config(wait_time: f32, glow_time: f32, rate: f32) -> RoundConfig {
    RoundConfig {
        time_limit: 1000.0,
        wait_time,
        glow_time,
        speed_up_rate: rate,
        min_wait_time: 0.5,
        min_glow_time: 0.3,
        ..Default::default()
    }
}

proptest! {
    #[test]
    fn prop_difficulty_follows_speed_up_law(
        wait_time in 0.5f32..6.0,
        glow_time in 0.3f32..3.0,
        rate in 0.0f32..0.2,
        taps in 0u32..120,
    ) {
        let config = speedy_config(wait_time, glow_time, rate);
        let mut round = RoundController::new(config.clone(), 1).unwrap();
        round.start_round();

        // The first glow window is open for all taps since no tick runs
        for _ in 0..taps {
            let scored = matches!(round.on_tap(), TapOutcome::Scored { .. });
            prop_assert!(scored, "tap inside the first glow window was not scored");
        }

        let n = taps as f32;
        let expected_wait = (wait_time - n * rate).max(config.min_wait_time);
        let expected_glow = (glow_time - n * rate).max(config.min_glow_time);
        prop_assert!((round.difficulty().wait_time - expected_wait).abs() < 1e-3);
        prop_assert!((round.difficulty().glow_time - expected_glow).abs() < 1e-3);
        prop_assert!(round.difficulty().wait_time >= config.min_wait_time);
        prop_assert!(round.difficulty().glow_time >= config.min_glow_time);
    }

    #[test]
    fn prop_countdown_never_increases(
        dts in proptest::collection::vec(0.0f32..0.5, 1..400),
        tap_mask in proptest::collection::vec(any::<bool>(), 400),
    ) {
        let mut round = RoundController::new(RoundConfig::default(), 9).unwrap();
        round.start_round();
        let mut last = round.state().time_remaining;
        let mut last_score = 0;

        for (dt, tap) in dts.iter().zip(tap_mask.iter()) {
            if *tap {
                round.on_tap();
            }
            round.tick(*dt);
            let state = round.state();
            prop_assert!(state.time_remaining <= last);
            prop_assert!(state.time_remaining >= 0.0);
            prop_assert!(state.score >= last_score);
            prop_assert_eq!(state.is_over(), state.time_remaining <= 0.0);
            last = state.time_remaining;
            last_score = state.score;
        }
    }

    #[test]
    fn prop_can_tap_matches_target_glow(seed in any::<u64>(), frames in 1usize..900) {
        let mut round = RoundController::new(RoundConfig::default(), seed).unwrap();
        let mut hud = Hud::new();
        round.start_round();
        for _ in 0..frames {
            round.tick(FRAME_DT);
            hud.apply_all(&round.drain_events());
            prop_assert_eq!(round.state().can_tap, hud.target_visible());
        }
    }
}
