//! Parallax starfield
//!
//! Stars fall downward at a speed proportional to their depth factor and are
//! pushed by the shared world velocity. Both axes wrap around the viewport.

use glam::Vec2;
use rand::Rng;

use super::state::Star;
use crate::wrap_coordinate;

/// Create `count` stars scattered over the viewport, sorted back to front
pub fn spawn_starfield<R: Rng>(
    rng: &mut R,
    count: usize,
    width: f32,
    height: f32,
    max_distance: f32,
) -> Vec<Star> {
    let mut stars: Vec<Star> = (0..count)
        .map(|_| Star {
            position: Vec2::new(
                wrap_coordinate(rng.random::<f32>() * width, width),
                wrap_coordinate(rng.random::<f32>() * height, height),
            ),
            distance: rng.random::<f32>() * max_distance,
            size: 5.0 + rng.random::<f32>() * 10.0,
            intensity: rng.random::<f32>(),
            spikes: 4 + (rng.random::<f32>() * 3.0) as u32,
        })
        .collect();

    stars.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    stars
}

/// Displacement of a star over `dt` milliseconds
#[inline]
pub fn drift(distance: f32, world_velocity: Vec2, dt: f32) -> Vec2 {
    Vec2::new(
        world_velocity.x * dt,
        distance * dt / 100.0 + world_velocity.y * dt,
    )
}

/// Move every star and wrap it back into the viewport
pub fn advect(stars: &mut [Star], world_velocity: Vec2, dt: f32, width: f32, height: f32) {
    for star in stars.iter_mut() {
        let moved = star.position + drift(star.distance, world_velocity, dt);
        star.position = Vec2::new(
            wrap_coordinate(moved.x, width),
            wrap_coordinate(moved.y, height),
        );
    }
}
