//! Simulation core
//!
//! Everything that changes per frame lives here. No rendering and no
//! platform dependencies:
//! - Seeded RNG only
//! - One `tick` per frame, stages in a fixed order
//! - State passed explicitly as a `SimulationState`

pub mod joystick;
pub mod particles;
pub mod player;
pub mod stars;
pub mod state;
pub mod tick;
pub mod world;

pub use joystick::{JoystickGeometry, clamp_drag, map_drag};
pub use particles::{ParticleTrail, TrailEmitter, jitter_spread, trail_point};
pub use player::{clamp_to_bounds, ease_velocity, reach, step_player};
pub use state::{
    Bounds, JoystickState, Particle, ParticleColor, PlayerState, SimulationState, Snapshot, Star,
    ThrottledAxes, WorldState,
};
pub use tick::{sanitize_dt, tick};
pub use world::{FeedbackPolicy, couple, feedback_velocity};
