//! Placement of the ball and the wall between shots.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use freekick_core::components::{Ball, Defender};
use freekick_core::tuning::{LaunchConfig, WallConfig};

/// Ball at rest on the kick spot.
pub fn spot_ball(launch: &LaunchConfig) -> Ball {
    Ball::at_spot(launch.kick_spot_u, launch.kick_spot_v)
}

/// Lay out the wall: `count` defenders spread evenly across `spread`,
/// centered on `center_u` (shifted by up to `jitter` when jitter is set).
/// The RNG is only touched when jitter is positive.
pub fn build_wall(config: &WallConfig, rng: &mut ChaCha8Rng) -> Vec<Defender> {
    if config.count == 0 {
        return Vec::new();
    }

    let mut center = config.center_u;
    if config.jitter > 0.0 {
        center += rng.gen_range(-config.jitter..=config.jitter);
    }

    if config.count == 1 {
        return vec![Defender::new(center, config.depth_v)];
    }

    let start = center - config.spread / 2.0;
    let gap = config.spread / (config.count - 1) as f64;
    (0..config.count)
        .map(|i| Defender::new(start + gap * i as f64, config.depth_v))
        .collect()
}

/// Fresh random wind in [-max, max], or `None` when random wind is off.
pub fn roll_wind(max: f64, rng: &mut ChaCha8Rng) -> Option<f64> {
    if max > 0.0 {
        Some(rng.gen_range(-max..=max))
    } else {
        None
    }
}
