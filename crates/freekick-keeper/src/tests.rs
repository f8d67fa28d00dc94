#[cfg(test)]
mod tests {
    use freekick_core::constants::*;
    use freekick_core::enums::Difficulty;

    use crate::fsm::{advance, begin_dive, effective_reach, predict_target, KeeperState};
    use crate::profiles::{get_profile, KeeperProfile};

    #[test]
    fn test_classic_profile_matches_constants() {
        let p = get_profile(Difficulty::Classic);
        assert_eq!(p.reach, KEEPER_REACH);
        assert_eq!(p.speed, KEEPER_SPEED);
        assert_eq!(p.react_delay_secs, KEEPER_REACT_DELAY_SECS);
    }

    #[test]
    fn test_profiles_scale_with_difficulty() {
        let casual = get_profile(Difficulty::Casual);
        let classic = get_profile(Difficulty::Classic);
        let elite = get_profile(Difficulty::Elite);
        assert!(casual.reach < classic.reach && classic.reach < elite.reach);
        assert!(casual.speed < classic.speed && classic.speed < elite.speed);
        assert!(casual.react_delay_secs > elite.react_delay_secs);
        assert!(casual.prediction_noise > elite.prediction_noise);
    }

    #[test]
    fn test_predict_target_reads_aim() {
        let p = get_profile(Difficulty::Classic);
        let straight = predict_target(0.0, 0.0, &p);
        assert_eq!(straight, 0.5);
        let right = predict_target(0.3, 0.0, &p);
        assert!((right - (0.5 + 0.3 * KEEPER_PREDICTION_FACTOR)).abs() < 1e-12);
        let left = predict_target(-0.3, 0.0, &p);
        assert!(left < 0.5);
    }

    #[test]
    fn test_predict_target_clamped() {
        let p = get_profile(Difficulty::Classic);
        assert_eq!(predict_target(5.0, 0.49, &p), p.max_target_u);
        assert_eq!(predict_target(-5.0, -0.5, &p), p.min_target_u);
    }

    #[test]
    fn test_keeper_waits_for_reaction_delay() {
        let p = get_profile(Difficulty::Classic);
        let mut k = KeeperState::default();
        begin_dive(&mut k, 0.8);
        assert!(k.diving);

        // 0.1s < 0.12s reaction delay
        for _ in 0..6 {
            advance(&mut k, &p, DT);
        }
        assert_eq!(k.u, 0.5, "keeper must not move before reacting");

        for _ in 0..20 {
            advance(&mut k, &p, DT);
        }
        assert!(k.u > 0.55, "keeper should be moving right, u = {}", k.u);
        assert!(k.u < 0.8, "easing never overshoots");
    }

    #[test]
    fn test_dive_ends_after_duration() {
        let p = get_profile(Difficulty::Classic);
        let mut k = KeeperState::default();
        begin_dive(&mut k, 0.2);

        let mut ended_at = None;
        for i in 0..120 {
            if advance(&mut k, &p, DT).dive_ended {
                ended_at = Some(i);
                break;
            }
        }
        let ended_at = ended_at.expect("dive should auto-cancel");
        let secs = (ended_at + 1) as f64 * DT;
        assert!(
            secs > p.dive_duration_secs - 1e-9 && secs < p.dive_duration_secs + 2.0 * DT,
            "dive lasted {secs}s"
        );
        assert!(!k.diving);
    }

    #[test]
    fn test_idle_keeper_returns_to_center() {
        let p = get_profile(Difficulty::Classic);
        let mut k = KeeperState {
            u: 0.2,
            ..KeeperState::default()
        };
        let mut last = k.u;
        for _ in 0..60 {
            advance(&mut k, &p, DT);
            assert!(k.u > last, "keeper should drift back toward 0.5");
            assert!(k.u < 0.5);
            last = k.u;
        }
    }

    #[test]
    fn test_huge_dt_does_not_overshoot() {
        let p = KeeperProfile {
            react_delay_secs: 0.0,
            ..get_profile(Difficulty::Elite)
        };
        let mut k = KeeperState::default();
        begin_dive(&mut k, 0.7);
        advance(&mut k, &p, 10.0);
        assert!((k.u - 0.7).abs() < 1e-12, "u = {}", k.u);
    }

    #[test]
    fn test_effective_reach_shrinks_for_high_balls() {
        let p = get_profile(Difficulty::Classic);
        let low = effective_reach(&p, GOAL_WIDTH, 0.1);
        let high = effective_reach(&p, GOAL_WIDTH, 0.45);
        assert!((low - GOAL_WIDTH * KEEPER_REACH).abs() < 1e-12);
        assert!((high - low * KEEPER_HIGH_BALL_REACH).abs() < 1e-12);
    }
}
