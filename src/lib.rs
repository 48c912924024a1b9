//! Star Drift - joystick-driven drift simulation
//!
//! Core modules:
//! - `sim`: Per-frame update pipeline (kinematics, particle trail, starfield, feedback)
//! - `platform`: Pointer drag handling, frame clock, browser bindings
//! - `settings`: Tuning constants, quality presets and persisted preferences
//! - `error`: Configuration errors

pub mod error;
pub mod platform;
pub mod settings;
pub mod sim;

pub use error::ConfigError;
pub use settings::{QualityPreset, Settings, SimConfig};

use glam::Vec2;

/// Default tuning constants
pub mod consts {
    /// Margin between the viewport edge and the play area bounds
    pub const PLAY_MARGIN: f32 = 10.0;
    /// Extra margin between the play area bounds and the player
    pub const PLAYER_MARGIN: f32 = 10.0;
    /// Side length of the square player entity
    pub const PLAYER_SIZE: f32 = 30.0;
    /// Rate at which velocity eases toward the joystick target
    pub const VELOCITY_VELOCITY: f32 = 10.0;

    /// Hard cap on live trail particles
    pub const MAX_PARTICLES: usize = 500;
    /// Trail points (and particles) spawned per frame while moving
    pub const TRAIL_STEPS: u32 = 10;
    /// Step multiplier applied to the trail index when walking back along velocity
    pub const TRAIL_STRIDE: f32 = 10.0;
    /// Damping applied to the synthetic trail path
    pub const TRAIL_DAMPING: f32 = 0.8;
    /// Lifetime of a freshly spawned particle (ms)
    pub const PARTICLE_LIFETIME: f32 = 300.0;
    /// Upper bound (exclusive) for particle size
    pub const PARTICLE_MAX_SIZE: f32 = 10.0;

    /// Background stars created at startup
    pub const STAR_COUNT: usize = 10;
    /// Upper bound (exclusive) for star depth
    pub const STAR_MAX_DISTANCE: f32 = 5.0;

    /// Joystick base radius (also the half-size of its hit square)
    pub const JOYSTICK_RADIUS: f32 = 100.0;
    /// Maximum knob displacement from the joystick center
    pub const JOYSTICK_DRAGGABLE_MAX: f32 = 120.0;

    /// Ceiling for a single frame's dt (ms)
    pub const MAX_DT: f32 = 100.0;
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    (a - b).length()
}

/// Wrap a coordinate into `[0, size)`
///
/// Negative values are first shifted by one `size` before the modulo, so a
/// star leaving the top re-enters at the bottom.
#[inline]
pub fn wrap_coordinate(mut value: f32, size: f32) -> f32 {
    if value < 0.0 {
        value += size;
    }
    value %= size;
    // A jump of more than one full size in either direction still lands in range
    let wrapped = value.rem_euclid(size);
    if wrapped >= size { 0.0 } else { wrapped }
}
