#[cfg(test)]
mod tests {
    use crate::commands::{AimDirection, ShotParameters};
    use crate::enums::*;
    use crate::events::{ShotResult, SimEvent};
    use crate::state::SimSnapshot;
    use crate::tuning::{load_tuning, save_tuning, Tuning, TuningError, WallConfig};
    use crate::types::{MouthPoint, PitchPoint, Rect, SimTime};

    #[test]
    fn test_shot_mode_serde() {
        for mode in ShotMode::ALL {
            let json = serde_json::to_string(&mode).unwrap();
            let back: ShotMode = serde_json::from_str(&json).unwrap();
            assert_eq!(mode, back);
        }
    }

    #[test]
    fn test_outcome_serde() {
        for outcome in Outcome::ALL {
            let json = serde_json::to_string(&outcome).unwrap();
            let back: Outcome = serde_json::from_str(&json).unwrap();
            assert_eq!(outcome, back);
        }
    }

    #[test]
    fn test_only_goal_is_success() {
        for outcome in Outcome::ALL {
            assert_eq!(outcome.is_success(), outcome == Outcome::Goal, "{outcome:?}");
        }
    }

    #[test]
    fn test_mode_coefficients_ordering() {
        let curl = ShotMode::Curl.coefficients();
        let dip = ShotMode::Dip.coefficients();
        let knuckle = ShotMode::Knuckle.coefficients();
        assert!(curl.spin_multiplier > dip.spin_multiplier);
        assert!(dip.spin_multiplier > knuckle.spin_multiplier);
        assert!(knuckle.wobble_base > 0.0, "only knuckle wobbles");
        assert_eq!(curl.wobble_base + dip.wobble_base, 0.0);
        assert!(dip.dip_gravity_base > 0.0, "only dip adds downforce");
        assert_eq!(curl.dip_gravity_base + knuckle.dip_gravity_base, 0.0);
    }

    #[test]
    fn test_sim_event_tagged_json() {
        let event = SimEvent::GoalScored {
            points: 110,
            streak: 2,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"GoalScored\""), "got {json}");
        let back: SimEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);

        let unit = serde_json::to_string(&SimEvent::BallReset).unwrap();
        assert_eq!(unit, "{\"type\":\"BallReset\"}");
    }

    #[test]
    fn test_shot_result_serde() {
        let result = ShotResult {
            outcome: Outcome::Goal,
            score_delta: 100,
            streak_reset: false,
            streak_after: 1,
            final_position: PitchPoint::new(0.3, 0.95, 0.2),
            mouth_point: Some(MouthPoint { x: 0.1, y: 0.4 }),
        };
        let json = serde_json::to_string(&result).unwrap();
        let back: ShotResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, back);
    }

    #[test]
    fn test_snapshot_default_serializes() {
        let snap = SimSnapshot::default();
        let json = serde_json::to_string(&snap).unwrap();
        let back: SimSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snap, back);
        assert_eq!(back.phase, ShotPhase::Idle);
    }

    #[test]
    fn test_shot_parameters_default_is_flat_curl() {
        let params = ShotParameters::default();
        assert_eq!(params.power, 0.0);
        assert_eq!(params.aim, AimDirection::straight());
        assert_eq!(params.mode, ShotMode::Curl);
    }

    #[test]
    fn test_sim_time_advance() {
        let mut t = SimTime::default();
        t.advance(0.5);
        t.advance(0.25);
        assert_eq!(t.tick, 2);
        assert_eq!(t.elapsed_secs, 0.75);
    }

    #[test]
    fn test_rect_contains_is_strict() {
        let r = Rect::new(0.0, 0.0, 10.0, 5.0);
        assert!(r.contains(5.0, 2.5));
        assert!(!r.contains(0.0, 2.5), "left edge is outside");
        assert!(!r.contains(10.0, 2.5), "right edge is outside");
        assert!(!r.contains(5.0, 5.0), "bottom edge is outside");
    }

    #[test]
    fn test_pitch_point_distance_ignores_height() {
        let a = PitchPoint::new(0.0, 0.0, 0.0);
        let b = PitchPoint::new(0.3, 0.4, 9.0);
        assert!((a.ground_distance_to(&b) - 0.5).abs() < 1e-12);
    }

    // --- Tuning ---

    #[test]
    fn test_default_tuning_is_valid() {
        Tuning::default().validate().unwrap();
    }

    #[test]
    fn test_partial_tuning_json_fills_defaults() {
        let tuning = Tuning::from_json_str(r#"{ "keeper": { "reach": 0.3 } }"#).unwrap();
        assert_eq!(tuning.keeper.reach, 0.3);
        assert_eq!(tuning.keeper.speed, Tuning::default().keeper.speed);
        assert_eq!(tuning.wall, WallConfig::default());
    }

    #[test]
    fn test_tuning_rejects_bad_values() {
        let mut tuning = Tuning::default();
        tuning.keeper.speed = 0.0;
        match tuning.validate() {
            Err(TuningError::Invalid { field, .. }) => assert_eq!(field, "keeper.speed"),
            other => panic!("expected invalid keeper.speed, got {other:?}"),
        }

        let mut tuning = Tuning::default();
        tuning.pitch.top_y = 600.0;
        assert!(tuning.validate().is_err(), "inverted pitch must be rejected");

        let mut tuning = Tuning::default();
        tuning.goal.mouth_pad = 60.0;
        assert!(tuning.validate().is_err(), "mouth padding larger than the goal");

        let mut tuning = Tuning::default();
        tuning.wall.spread = -0.1;
        assert!(tuning.validate().is_err(), "negative wall spread");
        tuning.wall.count = 0;
        assert!(tuning.validate().is_ok(), "spread is irrelevant without a wall");
    }

    #[test]
    fn test_tuning_rejects_empty_aim_ranges() {
        let err = Tuning::from_json_str(
            r#"{"launch":{"min_vertical_aim":0.5,"max_vertical_aim":0.2}}"#,
        )
        .unwrap_err();
        match err {
            TuningError::Invalid { field, .. } => assert_eq!(field, "launch.min_vertical_aim"),
            other => panic!("expected invalid vertical aim range, got {other:?}"),
        }

        let mut tuning = Tuning::default();
        tuning.launch.max_lateral_aim = -0.1;
        match tuning.validate() {
            Err(TuningError::Invalid { field, .. }) => assert_eq!(field, "launch.max_lateral_aim"),
            other => panic!("expected invalid lateral aim, got {other:?}"),
        }

        let mut tuning = Tuning::default();
        tuning.launch.max_vertical_aim = f64::NAN;
        assert!(tuning.validate().is_err(), "NaN aim limit");

        let mut tuning = Tuning::default();
        tuning.keeper.min_target_u = 0.9;
        assert!(tuning.validate().is_err(), "empty dive target range");
    }

    #[test]
    fn test_zero_reach_is_valid_negative_is_not() {
        let mut tuning = Tuning::default();
        tuning.keeper.reach = 0.0;
        assert!(tuning.validate().is_ok(), "a keeper who never saves is allowed");
        tuning.keeper.reach = -0.1;
        match tuning.validate() {
            Err(TuningError::Invalid { field, .. }) => assert_eq!(field, "keeper.reach"),
            other => panic!("expected invalid keeper.reach, got {other:?}"),
        }
    }

    #[test]
    fn test_tuning_parse_error() {
        let err = Tuning::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, TuningError::Parse(_)), "got {err:?}");
    }

    #[test]
    fn test_tuning_file_round_trip() {
        let dir = std::env::temp_dir().join("freekick_core_tuning_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("tuning.json");

        let mut tuning = Tuning::default();
        tuning.wall = WallConfig::none();
        tuning.flight.random_wind_max = 0.5;
        save_tuning(&path, &tuning).unwrap();

        let loaded = load_tuning(&path).unwrap();
        assert_eq!(loaded, tuning);

        let missing = load_tuning(&dir.join("missing.json")).unwrap_err();
        assert!(matches!(missing, TuningError::Io(_)), "got {missing:?}");

        let _ = std::fs::remove_dir_all(&dir);
    }
}
