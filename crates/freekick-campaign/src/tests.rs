#[cfg(test)]
mod tests {
    use std::fs;

    use freekick_core::enums::Outcome;
    use freekick_core::events::ShotResult;
    use freekick_core::types::{MouthPoint, PitchPoint};

    use crate::levels::{default_levels, select_level, LevelError, TargetZone};
    use crate::progress::*;
    use crate::session::{LevelSession, SessionStatus};

    fn result(outcome: Outcome, mouth: Option<(f64, f64)>) -> ShotResult {
        ShotResult {
            outcome,
            score_delta: 0,
            streak_reset: outcome != Outcome::Goal,
            streak_after: 0,
            final_position: PitchPoint::new(0.5, 0.95, 0.1),
            mouth_point: mouth.map(|(x, y)| MouthPoint { x, y }),
        }
    }

    #[test]
    fn test_default_levels() {
        let levels = default_levels();
        assert_eq!(levels.len(), 3);
        let ids: Vec<u32> = levels.iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(levels[0].name, "Starter");
        assert_eq!(levels[1].wind, 0.18);
        assert!(levels.windows(2).all(|w| w[0].shots >= w[1].shots));
    }

    #[test]
    fn test_target_zone_contains() {
        let zone = TargetZone {
            x: 0.5,
            y: 0.5,
            r: 0.1,
        };
        assert!(zone.contains(&MouthPoint { x: 0.55, y: 0.45 }));
        assert!(!zone.contains(&MouthPoint { x: 0.62, y: 0.5 }));
    }

    #[test]
    fn test_goal_in_target_completes() {
        let level = &default_levels()[0];
        let mut session = LevelSession::start(level);
        assert_eq!(session.shots_left(), 5);

        let status = session.record(&result(Outcome::Goal, Some((0.20, 0.20))));
        assert_eq!(status, SessionStatus::InProgress, "goal outside the target");
        let status = session.record(&result(Outcome::Goal, Some((0.78, 0.38))));
        assert_eq!(status, SessionStatus::Completed);
        assert_eq!(session.shots_left(), 3);
    }

    #[test]
    fn test_save_in_target_does_not_count() {
        let level = &default_levels()[0];
        let mut session = LevelSession::start(level);
        let status = session.record(&result(Outcome::Saved, Some((0.78, 0.36))));
        assert_eq!(status, SessionStatus::InProgress);
    }

    #[test]
    fn test_running_out_of_shots_fails() {
        let level = &default_levels()[2];
        let mut session = LevelSession::start(level);
        assert_eq!(session.wind(), -0.25);
        session.record(&result(Outcome::Missed, None));
        session.record(&result(Outcome::Blocked, None));
        let status = session.record(&result(Outcome::Out, None));
        assert_eq!(status, SessionStatus::Failed);

        // Further shots change nothing.
        let status = session.record(&result(Outcome::Goal, Some((0.12, 0.80))));
        assert_eq!(status, SessionStatus::Failed);
        assert_eq!(session.shots_left(), 0);
    }

    #[test]
    fn test_progress_json_is_camel_case() {
        let progress = Progress::default();
        let json = serde_json::to_string(&progress).unwrap();
        assert_eq!(json, r#"{"setPieces":{"unlockedLevel":1}}"#);

        let empty: Progress = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, Progress::default());
    }

    #[test]
    fn test_unlock_after_only_moves_forward() {
        let mut progress = Progress::default();
        progress.unlock_after(1);
        assert_eq!(progress.set_pieces.unlocked_level, 2);
        progress.unlock_after(1);
        assert_eq!(progress.set_pieces.unlocked_level, 2);
        assert!(progress.is_unlocked(2));
        assert!(!progress.is_unlocked(3));
        assert!(!progress.is_unlocked(0));
    }

    #[test]
    fn test_select_level() {
        let levels = default_levels();
        let mut progress = Progress::default();
        assert_eq!(select_level(&levels, &progress, 1).unwrap().id, 1);
        assert_eq!(
            select_level(&levels, &progress, 2),
            Err(LevelError::Locked { id: 2, unlocked: 1 })
        );
        assert_eq!(select_level(&levels, &progress, 9), Err(LevelError::Unknown(9)));

        progress.unlock_after(1);
        assert_eq!(select_level(&levels, &progress, 2).unwrap().name, "Pressure");
    }

    #[test]
    fn test_save_and_load_progress() {
        let dir = std::env::temp_dir().join("freekick_test_progress_roundtrip");
        let _ = fs::remove_dir_all(&dir);

        let mut progress = Progress::default();
        progress.unlock_after(2);
        save_progress(&dir, &progress).unwrap();
        assert_eq!(load_progress(&dir).unwrap(), progress);
        assert_eq!(load_or_default(&dir).set_pieces.unlocked_level, 3);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_or_default_on_missing_or_corrupt() {
        let dir = std::env::temp_dir().join("freekick_test_progress_corrupt");
        let _ = fs::remove_dir_all(&dir);
        assert_eq!(load_or_default(&dir), Progress::default());
        assert!(matches!(load_progress(&dir), Err(ProgressError::Io(_))));

        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(PROGRESS_FILE), "not json").unwrap();
        assert!(matches!(load_progress(&dir), Err(ProgressError::Json(_))));
        assert_eq!(load_or_default(&dir), Progress::default());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_reset_progress() {
        let dir = std::env::temp_dir().join("freekick_test_progress_reset");
        let _ = fs::remove_dir_all(&dir);

        let mut progress = Progress::default();
        progress.unlock_after(1);
        save_progress(&dir, &progress).unwrap();
        reset_progress(&dir).unwrap();
        assert_eq!(load_or_default(&dir), Progress::default());

        // Resetting twice is fine.
        reset_progress(&dir).unwrap();
        let _ = fs::remove_dir_all(&dir);
    }
}
