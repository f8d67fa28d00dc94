//! Wall contact.
//!
//! Contact is only evaluated inside a narrow depth band around the wall.
//! A ball fast enough to cross the whole band in one step is sampled at
//! the wall depth instead.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use freekick_core::components::{Ball, Defender};
use freekick_core::constants::*;
use freekick_core::tuning::WallConfig;
use freekick_core::types::PitchPoint;

/// A defender got in the way.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallContact {
    /// Where the ball was sampled.
    pub point: PitchPoint,
    pub defender: Defender,
}

/// Pick the point to test against the wall for a step from `prev` to `now`.
pub fn sample_point(prev: &PitchPoint, now: &PitchPoint, config: &WallConfig) -> Option<PitchPoint> {
    let lo = config.depth_v - config.band;
    let hi = config.depth_v + config.band;

    if now.v > lo && now.v < hi {
        return Some(*now);
    }
    if prev.v <= lo && now.v >= hi {
        let t = (config.depth_v - prev.v) / (now.v - prev.v);
        return Some(prev.lerp(now, t));
    }
    None
}

/// Test the step from `prev` to `now` against every defender.
/// Balls above the wall's jump height always clear it.
pub fn check(
    prev: &PitchPoint,
    now: &PitchPoint,
    wall: &[Defender],
    config: &WallConfig,
) -> Option<WallContact> {
    if wall.is_empty() {
        return None;
    }
    let point = sample_point(prev, now, config)?;
    if point.z > config.height_z {
        return None;
    }

    let ground = point.ground();
    wall.iter()
        .find(|d| d.ground().distance(ground) < config.radius)
        .map(|defender| WallContact {
            point,
            defender: *defender,
        })
}

/// Knock the ball back off the wall with a small random sideways kick.
pub fn deflect(ball: &mut Ball, rng: &mut ChaCha8Rng) {
    ball.velocity.dv *= BLOCK_FORWARD_DAMPING;
    ball.velocity.du += (rng.gen::<f64>() - 0.5) * BLOCK_LATERAL_KICK;
    ball.position.v -= BLOCK_PUSHBACK_V;
    ball.velocity.dv -= BLOCK_REBOUND_DV;
    ball.flying = false;
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;

    fn wall() -> Vec<Defender> {
        vec![Defender::new(0.5, WALL_DEPTH_V)]
    }

    #[test]
    fn test_low_ball_on_defender_is_blocked() {
        let prev = PitchPoint::new(0.5, 0.58, 0.1);
        let now = PitchPoint::new(0.5, 0.62, 0.1);
        let contact = check(&prev, &now, &wall(), &WallConfig::default());
        assert!(contact.is_some());
    }

    #[test]
    fn test_high_ball_clears() {
        let prev = PitchPoint::new(0.5, 0.58, 0.3);
        let now = PitchPoint::new(0.5, 0.62, 0.3);
        assert!(check(&prev, &now, &wall(), &WallConfig::default()).is_none());
    }

    #[test]
    fn test_ball_wide_of_defender_passes() {
        let prev = PitchPoint::new(0.45, 0.58, 0.0);
        let now = PitchPoint::new(0.45, 0.62, 0.0);
        assert!(check(&prev, &now, &wall(), &WallConfig::default()).is_none());
    }

    #[test]
    fn test_outside_band_not_checked() {
        let prev = PitchPoint::new(0.5, 0.50, 0.0);
        let now = PitchPoint::new(0.5, 0.55, 0.0);
        assert!(check(&prev, &now, &wall(), &WallConfig::default()).is_none());
    }

    #[test]
    fn test_tunnelling_step_is_interpolated() {
        let prev = PitchPoint::new(0.5, 0.55, 0.0);
        let now = PitchPoint::new(0.5, 0.70, 0.0);
        let contact = check(&prev, &now, &wall(), &WallConfig::default())
            .expect("fast ball must still hit the wall");
        assert!((contact.point.v - WALL_DEPTH_V).abs() < 1e-12);
    }

    #[test]
    fn test_deflect_ends_flight() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut ball = Ball::at_spot(0.5, 0.62);
        ball.velocity.dv = 2.0;
        ball.flying = true;
        deflect(&mut ball, &mut rng);
        assert!(!ball.flying);
        assert!(ball.velocity.dv < 0.5, "ball loses most of its pace");
        assert!((ball.position.v - 0.60).abs() < 1e-12);
    }
}
