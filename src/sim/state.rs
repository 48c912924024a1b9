//! Simulation state and core types
//!
//! Everything the update pipeline reads or writes lives in `SimulationState`.
//! The boundary only ever sees it through `&mut` (for ticks and pointer
//! input) or through a read-only `Snapshot`.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::joystick::JoystickGeometry;
use super::particles::ParticleTrail;
use super::stars::spawn_starfield;
use crate::error::ConfigError;
use crate::settings::SimConfig;

/// Play area rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Bounds {
    /// Viewport shrunk by `margin` on every side
    pub fn from_viewport(width: f32, height: f32, margin: f32) -> Self {
        Self {
            left: margin,
            top: margin,
            right: width - margin,
            bottom: height - margin,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Center of the rectangle
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }
}

/// Normalized joystick direction, each axis in `[-1, 1]`
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct JoystickState {
    pub x: f32,
    pub y: f32,
}

impl JoystickState {
    pub const IDLE: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn is_idle(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Return to the idle position
    pub fn reset(&mut self) {
        *self = Self::IDLE;
    }
}

/// The player entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Top-left corner of the player square
    pub position: Vec2,
    /// Units per millisecond
    pub velocity: Vec2,
}

impl PlayerState {
    /// A resting player anchored at the middle of `bounds`
    pub fn centered_in(bounds: &Bounds) -> Self {
        Self {
            position: bounds.center(),
            velocity: Vec2::ZERO,
        }
    }

    /// Center of the player square
    #[inline]
    pub fn center(&self, size: f32) -> Vec2 {
        self.position + Vec2::splat(size / 2.0)
    }

    #[inline]
    pub fn is_moving(&self) -> bool {
        self.velocity.x != 0.0 || self.velocity.y != 0.0
    }
}

/// Axes on which the player hit the play area boundary this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThrottledAxes {
    pub x: bool,
    pub y: bool,
}

impl ThrottledAxes {
    pub fn any(&self) -> bool {
        self.x || self.y
    }
}

/// RGB color of a trail particle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticleColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ParticleColor {
    /// CSS color string for canvas renderers
    pub fn to_css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// A trail particle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Milliseconds remaining
    pub lifetime: f32,
    pub color: ParticleColor,
    pub size: f32,
}

/// A background star
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Star {
    pub position: Vec2,
    /// Depth factor in `[0, 5)`; larger drifts faster and renders bigger
    pub distance: f32,
    pub intensity: f32,
    pub size: f32,
    /// Number of points when drawn
    pub spikes: u32,
}

/// Reactive world motion shared by particles and stars
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WorldState {
    pub velocity: Vec2,
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct SimulationState {
    /// Seed the RNG was created from
    pub seed: u64,
    /// Tuning constants
    pub config: SimConfig,
    /// Viewport size
    pub width: f32,
    pub height: f32,
    /// Play area
    pub bounds: Bounds,
    /// Joystick placement for this viewport
    pub joystick_geometry: JoystickGeometry,
    /// Current joystick input
    pub joystick: JoystickState,
    /// The player
    pub player: PlayerState,
    /// Boundary contact from the most recent tick
    pub throttled: ThrottledAxes,
    /// Trail particles
    pub trail: ParticleTrail,
    /// Background stars (sorted by distance, back to front)
    pub stars: Vec<Star>,
    /// Reactive world velocity
    pub world: WorldState,
    /// Ticks run so far
    pub frame: u64,
    /// Simulated time (ms)
    pub time_ms: f64,
    pub(crate) rng: Pcg32,
}

impl SimulationState {
    /// Build a fresh simulation for a `width` x `height` viewport
    pub fn new(
        width: f32,
        height: f32,
        seed: u64,
        config: SimConfig,
    ) -> Result<Self, ConfigError> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(ConfigError::InvalidViewport { width, height });
        }
        config.validate()?;

        let bounds = Bounds::from_viewport(width, height, config.play_margin);
        let min_extent = config.player_size + 2.0 * config.player_margin;
        if bounds.width() < min_extent || bounds.height() < min_extent {
            return Err(ConfigError::PlayAreaTooSmall {
                width: bounds.width(),
                height: bounds.height(),
                player_size: config.player_size,
            });
        }

        let mut rng = Pcg32::seed_from_u64(seed);
        let stars = spawn_starfield(
            &mut rng,
            config.star_count,
            width,
            height,
            config.star_max_distance,
        );
        let joystick_geometry = JoystickGeometry::layout(
            width,
            height,
            config.joystick_radius,
            config.joystick_draggable_max,
        );

        log::info!(
            "Simulation {}x{} (seed {}): {} stars, particle cap {}, feedback {:?}",
            width,
            height,
            seed,
            stars.len(),
            config.max_particles,
            config.feedback
        );

        Ok(Self {
            seed,
            width,
            height,
            bounds,
            joystick_geometry,
            joystick: JoystickState::IDLE,
            player: PlayerState::centered_in(&bounds),
            throttled: ThrottledAxes::default(),
            trail: ParticleTrail::new(config.max_particles),
            stars,
            world: WorldState::default(),
            frame: 0,
            time_ms: 0.0,
            rng,
            config,
        })
    }

    /// Build with default tuning
    pub fn with_defaults(width: f32, height: f32, seed: u64) -> Result<Self, ConfigError> {
        Self::new(width, height, seed, SimConfig::default())
    }

    /// Read-only view handed to the renderer
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            frame: self.frame,
            time_ms: self.time_ms,
            width: self.width,
            height: self.height,
            bounds: &self.bounds,
            player_size: self.config.player_size,
            player: &self.player,
            joystick: &self.joystick,
            joystick_geometry: &self.joystick_geometry,
            particles: self.trail.as_slice(),
            stars: &self.stars,
            world: &self.world,
        }
    }
}

/// Per-frame view of everything a renderer draws
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot<'a> {
    pub frame: u64,
    pub time_ms: f64,
    pub width: f32,
    pub height: f32,
    pub bounds: &'a Bounds,
    pub player_size: f32,
    pub player: &'a PlayerState,
    pub joystick: &'a JoystickState,
    pub joystick_geometry: &'a JoystickGeometry,
    pub particles: &'a [Particle],
    pub stars: &'a [Star],
    pub world: &'a WorldState,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_layout() {
        let state = SimulationState::with_defaults(800.0, 600.0, 7).unwrap();
        assert_eq!(
            state.bounds,
            Bounds {
                left: 10.0,
                top: 10.0,
                right: 790.0,
                bottom: 590.0
            }
        );
        assert_eq!(state.player.position, Vec2::new(400.0, 300.0));
        assert_eq!(state.player.velocity, Vec2::ZERO);
        assert!(state.joystick.is_idle());
        assert_eq!(state.stars.len(), 10);
        assert!(state.trail.is_empty());
        assert_eq!(state.trail.capacity(), 500);
    }

    #[test]
    fn test_stars_sorted_by_distance() {
        let state = SimulationState::with_defaults(800.0, 600.0, 99).unwrap();
        for pair in state.stars.windows(2) {
            assert!(pair[0].distance <= pair[1].distance);
        }
    }

    #[test]
    fn test_rejects_degenerate_viewport() {
        assert!(matches!(
            SimulationState::with_defaults(0.0, 600.0, 1),
            Err(ConfigError::InvalidViewport { .. })
        ));
        assert!(matches!(
            SimulationState::with_defaults(f32::NAN, 600.0, 1),
            Err(ConfigError::InvalidViewport { .. })
        ));
        assert!(matches!(
            SimulationState::with_defaults(60.0, 600.0, 1),
            Err(ConfigError::PlayAreaTooSmall { .. })
        ));
    }

    #[test]
    fn test_same_seed_same_starfield() {
        let a = SimulationState::with_defaults(800.0, 600.0, 1234).unwrap();
        let b = SimulationState::with_defaults(800.0, 600.0, 1234).unwrap();
        assert_eq!(a.stars, b.stars);
    }

    #[test]
    fn test_particle_color_css() {
        let color = ParticleColor { r: 12, g: 0, b: 255 };
        assert_eq!(color.to_css(), "rgb(12, 0, 255)");
    }

    #[test]
    fn test_snapshot_serializes() {
        let state = SimulationState::with_defaults(800.0, 600.0, 5).unwrap();
        let json = serde_json::to_value(state.snapshot()).unwrap();
        assert_eq!(json["stars"].as_array().unwrap().len(), 10);
        assert_eq!(json["player_size"], 30.0);
    }
}
