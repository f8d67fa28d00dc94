//! Simulation constants and tuning defaults.
//!
//! These are the Classic profile values. Runtime tuning lives in
//! [`crate::tuning::Tuning`], whose `Default` is built from this file.

/// Nominal frame rate used by headless runners (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per frame at the nominal frame rate.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

/// Largest step accepted by `step(dt)`. Longer frames (tab switches,
/// debugger pauses) are clamped to this.
pub const MAX_STEP_SECS: f64 = 0.033;

// --- Pitch projection (screen units) ---

/// Screen y of the far (goal-side) edge of the pitch.
pub const PITCH_TOP_Y: f64 = 40.0;

/// Screen y of the near (kicker-side) edge of the pitch.
pub const PITCH_BOT_Y: f64 = 528.0;

/// Pitch width at the far edge.
pub const PITCH_TOP_W: f64 = 320.0;

/// Pitch width at the near edge.
pub const PITCH_BOT_W: f64 = 960.0;

/// Horizontal screen center of the pitch.
pub const PITCH_CENTER_X: f64 = 480.0;

/// How far one unit of ball height lifts the ball on screen,
/// relative to the pitch width at the ball's depth.
pub const BALL_LIFT: f64 = 0.34;

// --- Goal ---

/// Goal center x (screen units).
pub const GOAL_CENTER_X: f64 = 480.0;

/// Goal top edge y (screen units).
pub const GOAL_TOP_Y: f64 = 28.0;

/// Goal width (screen units).
pub const GOAL_WIDTH: f64 = 180.0;

/// Goal height (screen units).
pub const GOAL_HEIGHT: f64 = 96.0;

/// Post thickness (screen units).
pub const GOAL_POST: f64 = 4.0;

/// Padding removed from every side of the goal rect to get the scoring mouth.
pub const GOAL_MOUTH_PAD: f64 = 12.0;

/// Crossbar height in ball-height units.
pub const CROSSBAR_Z: f64 = 0.48;

/// Ball height ceiling as a multiple of the crossbar height.
pub const MAX_HEIGHT_FACTOR: f64 = 1.35;

// --- Kick spot ---

/// Lateral coordinate of the ball at the kick spot.
pub const KICK_SPOT_U: f64 = 0.52;

/// Depth coordinate of the ball at the kick spot.
pub const KICK_SPOT_V: f64 = 0.22;

// --- Wall ---

/// Depth at which the wall stands.
pub const WALL_DEPTH_V: f64 = 0.62;

/// Number of defenders in the wall.
pub const WALL_COUNT: u32 = 4;

/// Lateral distance between the outermost defenders.
pub const WALL_SPREAD: f64 = 0.18;

/// Lateral center of the wall.
pub const WALL_CENTER_U: f64 = 0.5;

/// Collision radius of one defender in (u, v) space.
pub const WALL_RADIUS: f64 = 0.022;

/// Effective jump height of the wall. Balls above this clear it.
pub const WALL_HEIGHT_Z: f64 = 0.28;

/// Half-width of the depth band in which wall contact is evaluated.
pub const WALL_BAND: f64 = 0.025;

// --- Keeper ---

/// Keeper lateral save radius as a fraction of goal width.
pub const KEEPER_REACH: f64 = 0.19;

/// Delay before the keeper starts moving after a kick (seconds).
pub const KEEPER_REACT_DELAY_SECS: f64 = 0.12;

/// Keeper easing rate toward the dive target (1/s).
pub const KEEPER_SPEED: f64 = 2.4;

/// A dive auto-cancels after this long (seconds).
pub const KEEPER_DIVE_DURATION_SECS: f64 = 0.65;

/// Easing rate back to the center while idle (1/s).
pub const KEEPER_IDLE_RETURN_RATE: f64 = 0.9;

/// How strongly the keeper reads the lateral aim when picking a dive target.
pub const KEEPER_PREDICTION_FACTOR: f64 = 0.58;

/// Amplitude of the random error in the keeper's read.
pub const KEEPER_PREDICTION_NOISE: f64 = 0.05;

/// Leftmost dive target.
pub const KEEPER_MIN_TARGET_U: f64 = 0.18;

/// Rightmost dive target.
pub const KEEPER_MAX_TARGET_U: f64 = 0.82;

/// Ball height above which the keeper's reach shrinks.
pub const KEEPER_HIGH_BALL_Z: f64 = 0.36;

/// Reach multiplier for high balls.
pub const KEEPER_HIGH_BALL_REACH: f64 = 0.78;

// --- Launch ---

/// Shot strength at zero power.
pub const STRENGTH_BASELINE: f64 = 0.65;

/// Additional shot strength at full power.
pub const STRENGTH_GAIN: f64 = 2.05;

/// Lateral velocity per unit of lateral aim and strength.
pub const LATERAL_GAIN: f64 = 0.92;

/// Forward velocity per unit of strength with a flat aim.
pub const FORWARD_BASE: f64 = 0.92;

/// Extra forward velocity per unit of vertical aim and strength.
pub const FORWARD_LOFT_GAIN: f64 = 0.82;

/// Lateral aim clamp (both directions).
pub const MAX_LATERAL_AIM: f64 = 0.55;

/// Lowest vertical aim.
pub const MIN_VERTICAL_AIM: f64 = -0.10;

/// Highest vertical aim.
pub const MAX_VERTICAL_AIM: f64 = 1.05;

/// Launch height velocity per unit of vertical aim.
pub const LOFT_GAIN: f64 = 1.05;

/// Launch height velocity with a flat aim.
pub const LOFT_BASE: f64 = 0.20;

/// Power scaling of the launch height velocity at zero power.
pub const LOFT_POWER_BASE: f64 = 0.95;

/// Additional power scaling of the launch height velocity at full power.
pub const LOFT_POWER_GAIN: f64 = 0.95;

/// Lowest launch height velocity.
pub const MIN_LAUNCH_VZ: f64 = 0.10;

/// Highest launch height velocity.
pub const MAX_LAUNCH_VZ: f64 = 1.65;

/// Spin per unit of lateral aim, before the power term.
pub const SPIN_PER_LATERAL: f64 = 540.0 / 260.0;

/// Spin power term at zero power.
pub const SPIN_BASE: f64 = 0.35;

/// Spin power term gain at full power.
pub const SPIN_GAIN: f64 = 1.05;

// --- Flight ---

/// Curve acceleration factor at the kick spot.
pub const CURVE_BASE: f64 = 0.26;

/// Curve acceleration growth with depth.
pub const CURVE_DEPTH_GAIN: f64 = 0.85;

/// Lateral drag (1/s).
pub const DRAG_U: f64 = 0.48;

/// Forward drag (1/s).
pub const DRAG_V: f64 = 0.22;

/// Vertical gravity.
pub const GRAVITY_Z: f64 = 1.55;

/// Height velocity multiplier on ground contact.
pub const GROUND_BOUNCE: f64 = -0.25;

/// Constant forward deceleration.
pub const FORWARD_BLEED: f64 = 0.16;

/// Depth after which knuckle wobble kicks in.
pub const KNUCKLE_ACTIVATION_V: f64 = 0.36;

/// Gain of the slow knuckle sway term.
pub const WOBBLE_SLOW_GAIN: f64 = 0.08;

/// Gain of the fast knuckle flutter term.
pub const WOBBLE_FAST_GAIN: f64 = 0.03;

/// Base frequency of the knuckle flutter.
pub const WOBBLE_FREQ_BASE: f64 = 9.0;

/// Flutter frequency growth with depth.
pub const WOBBLE_FREQ_DEPTH_GAIN: f64 = 6.0;

/// Amplitude of the random knuckle jitter.
pub const WOBBLE_JITTER: f64 = 0.25;

/// Flight phase advance rate (rad/s).
pub const FLIGHT_PHASE_RATE: f64 = 6.0;

/// Lateral acceleration per unit of wind.
pub const WIND_GAIN: f64 = 0.25;

/// Depth that triggers goal-line resolution.
pub const GOAL_LINE_V: f64 = 0.94;

/// Lateral bounds before a ball is out.
pub const MIN_BOUNDS_U: f64 = -0.15;
pub const MAX_BOUNDS_U: f64 = 1.15;

/// Depth bounds before a ball is out.
pub const MIN_BOUNDS_V: f64 = 0.0;
pub const MAX_BOUNDS_V: f64 = 1.2;

// --- Wall block deflection ---

/// Forward speed kept after hitting the wall.
pub const BLOCK_FORWARD_DAMPING: f64 = 0.35;

/// Amplitude of the random sideways kick off the wall.
pub const BLOCK_LATERAL_KICK: f64 = 0.55;

/// Depth pushed back on contact.
pub const BLOCK_PUSHBACK_V: f64 = 0.02;

/// Forward speed removed on contact.
pub const BLOCK_REBOUND_DV: f64 = 0.32;

// --- Keeper save deflection ---

/// Lateral nudge away from the keeper on a save.
pub const SAVE_NUDGE_U: f64 = 0.03;

/// Depth pushed back on a save.
pub const SAVE_PUSHBACK_V: f64 = 0.10;

/// Lateral velocity multiplier on a save (negative: reversed).
pub const SAVE_LATERAL_DAMPING: f64 = -0.45;

/// Forward velocity after a save (rebound toward the kicker).
pub const SAVE_REBOUND_DV: f64 = -0.25;

// --- Scoring ---

/// Points for a goal with no streak.
pub const GOAL_POINTS: i64 = 100;

/// Additional points per goal already in the streak.
pub const STREAK_BONUS: i64 = 10;

/// Points lost when the keeper saves.
pub const SAVE_PENALTY: i64 = 10;

/// Points lost on a miss.
pub const MISS_PENALTY: i64 = 5;

/// Points lost when the ball goes out.
pub const OUT_PENALTY: i64 = 5;

/// Points lost when the wall blocks.
pub const BLOCK_PENALTY: i64 = 0;

/// How long a resolved shot stays visible before the ball returns (seconds).
pub const RESULT_DISPLAY_SECS: f64 = 0.85;

/// Display delay after an out-of-bounds ball (seconds).
pub const OUT_DISPLAY_SECS: f64 = 0.65;
