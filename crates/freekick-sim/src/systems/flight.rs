//! Ball launch and in-flight integration.
//!
//! The integration order is fixed: curve and wind, position, drag,
//! height, forward bleed, knuckle wobble. Changing it changes every
//! trajectory.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use freekick_core::commands::ShotParameters;
use freekick_core::components::Ball;
use freekick_core::enums::ShotMode;
use freekick_core::tuning::{FlightConfig, LaunchConfig};

/// Strike a resting ball. `params` must already be clamped.
pub fn strike(ball: &mut Ball, params: &ShotParameters, launch: &LaunchConfig) {
    let coeffs = params.mode.coefficients();
    let power = params.power;
    let lateral = params.aim.lateral;
    let vertical = params.aim.vertical;
    let strength = launch.strength(power);

    ball.velocity.du = lateral * launch.lateral_gain * strength;
    ball.velocity.dv = (launch.forward_base + vertical * launch.forward_loft_gain) * strength;
    ball.velocity.vz = ((vertical * launch.loft_gain + launch.loft_base)
        * (launch.loft_power_base + power * launch.loft_power_gain))
        .clamp(launch.min_launch_vz, launch.max_launch_vz);

    ball.spin = (lateral * launch.spin_per_lateral).clamp(-1.0, 1.0)
        * (launch.spin_base + power * launch.spin_gain)
        * coeffs.spin_multiplier;
    ball.wobble = coeffs.wobble_base + power * coeffs.wobble_gain;
    ball.dip_gravity_base = coeffs.dip_gravity_base;
    ball.dip_gravity_gain = coeffs.dip_gravity_gain;
    ball.mode = params.mode;
    ball.flight_phase = 0.0;
    ball.flying = true;
}

/// Advance a flying ball by `dt` seconds.
pub fn integrate(
    ball: &mut Ball,
    flight: &FlightConfig,
    crossbar_z: f64,
    wind: f64,
    rng: &mut ChaCha8Rng,
    dt: f64,
) {
    let pos = &mut ball.position;
    let vel = &mut ball.velocity;

    // Swerve builds with depth.
    let curve = ball.spin * (flight.curve_base + pos.v * flight.curve_depth_gain);
    vel.du += curve * dt + wind * flight.wind_gain * dt;

    pos.u += vel.du * dt;
    pos.v += vel.dv * dt;

    vel.du *= 1.0 - flight.drag_u * dt;
    vel.dv *= 1.0 - flight.drag_v * dt;

    pos.z += vel.vz * dt;
    let dip = ball.dip_gravity_base + pos.v * ball.dip_gravity_gain;
    vel.vz -= (flight.gravity_z + dip) * dt;
    if pos.z < 0.0 {
        pos.z = 0.0;
        vel.vz *= flight.ground_bounce;
    }
    pos.z = pos.z.min(crossbar_z * flight.max_height_factor);

    vel.dv -= flight.forward_bleed * dt;

    if ball.mode == ShotMode::Knuckle && pos.v > flight.knuckle_activation_v {
        let phase = ball.flight_phase;
        let freq = flight.wobble_freq_base + pos.v * flight.wobble_freq_depth_gain;
        let jitter = (rng.gen::<f64>() - 0.5) * flight.wobble_jitter;
        vel.du += (phase * 1.35).sin() * ball.wobble * flight.wobble_slow_gain * dt;
        vel.du += ((phase * freq).sin() + jitter) * ball.wobble * flight.wobble_fast_gain * dt;
    }

    ball.flight_phase += flight.phase_rate * dt;
}
