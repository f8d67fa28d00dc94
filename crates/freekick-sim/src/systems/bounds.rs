//! Out-of-bounds and stalled-ball detection.

use freekick_core::components::Ball;
use freekick_core::tuning::FlightConfig;

/// True when the ball left the pitch, or stopped moving forward short
/// of the goal line.
pub fn is_out(ball: &Ball, flight: &FlightConfig) -> bool {
    let p = &ball.position;
    p.v < flight.min_v
        || p.v > flight.max_v
        || p.u < flight.min_u
        || p.u > flight.max_u
        || ball.velocity.dv <= 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moving(u: f64, v: f64) -> Ball {
        let mut ball = Ball::at_spot(u, v);
        ball.velocity.dv = 1.0;
        ball
    }

    #[test]
    fn test_in_play() {
        assert!(!is_out(&moving(0.5, 0.5), &FlightConfig::default()));
        assert!(!is_out(&moving(-0.1, 0.5), &FlightConfig::default()));
    }

    #[test]
    fn test_off_the_sides() {
        let cfg = FlightConfig::default();
        assert!(is_out(&moving(-0.2, 0.5), &cfg));
        assert!(is_out(&moving(1.2, 0.5), &cfg));
        assert!(is_out(&moving(0.5, -0.01), &cfg));
        assert!(is_out(&moving(0.5, 1.25), &cfg));
    }

    #[test]
    fn test_stalled_ball_is_out() {
        let mut ball = moving(0.5, 0.8);
        ball.velocity.dv = 0.0;
        assert!(is_out(&ball, &FlightConfig::default()));
    }
}
