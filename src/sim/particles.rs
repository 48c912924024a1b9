//! Particle trail
//!
//! While the player moves, a handful of particles are dropped along a
//! synthetic path behind it each frame. They drift with the world velocity
//! captured at spawn and expire after a fixed lifetime. The collection is
//! capped; spawns past the cap are dropped, never queued.

use glam::Vec2;
use rand::Rng;

use super::state::{Particle, ParticleColor, PlayerState};

/// Parameters for one frame of trail emission
#[derive(Debug, Clone, Copy)]
pub struct TrailEmitter {
    /// Trail points walked back from the player (one particle per point)
    pub steps: u32,
    /// Multiplier applied to the step index
    pub stride: f32,
    pub damping: f32,
    pub player_size: f32,
    pub lifetime: f32,
    pub max_size: f32,
}

/// Point `step` strides behind `center` along `velocity`
#[inline]
pub fn trail_point(center: Vec2, velocity: Vec2, step: f32, damping: f32) -> Vec2 {
    center - velocity * step * damping
}

/// Width of the random spread around trail point `index` (1-based)
///
/// Interpolates linearly from `size` at the first point to `2` at the last,
/// so the trail fans out right behind the player and narrows toward its tail.
pub fn jitter_spread(index: u32, size: f32, steps: u32) -> f32 {
    if steps <= 1 {
        return size;
    }
    let i = index as f32;
    let n = steps as f32;
    (2.0 * i - i * size + n * size - 2.0) / (n - 1.0)
}

/// Uniform offset in `[-spread/2, spread/2)`
#[inline]
pub fn jitter<R: Rng>(rng: &mut R, spread: f32) -> f32 {
    rng.random::<f32>() * spread - spread / 2.0
}

/// Blue-tinted particle color
pub fn random_color<R: Rng>(rng: &mut R) -> ParticleColor {
    ParticleColor {
        r: (rng.random::<f32>() * 255.0) as u8,
        g: (rng.random::<f32>() * 255.0) as u8,
        b: (200.0 + rng.random::<f32>() * 55.0) as u8,
    }
}

/// Capacity-bounded particle collection
#[derive(Debug, Clone)]
pub struct ParticleTrail {
    particles: Vec<Particle>,
    capacity: usize,
    /// Spawns rejected because the trail was full
    dropped: u64,
}

impl ParticleTrail {
    pub fn new(capacity: usize) -> Self {
        Self {
            particles: Vec::with_capacity(capacity),
            capacity,
            dropped: 0,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.particles.len() >= self.capacity
    }

    pub fn dropped(&self) -> u64 {
        self.dropped
    }

    pub fn as_slice(&self) -> &[Particle] {
        &self.particles
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    /// Add a particle unless the trail is full
    pub fn try_push(&mut self, particle: Particle) -> bool {
        if self.is_full() {
            self.dropped += 1;
            return false;
        }
        self.particles.push(particle);
        true
    }

    /// Drop one frame's worth of particles behind the player
    ///
    /// Does nothing while the player is at rest. Returns how many were added.
    pub fn emit<R: Rng>(
        &mut self,
        rng: &mut R,
        player: &PlayerState,
        world_velocity: Vec2,
        emitter: &TrailEmitter,
    ) -> usize {
        if !player.is_moving() {
            return 0;
        }

        let center = player.center(emitter.player_size);
        let mut spawned = 0;
        for i in 1..=emitter.steps {
            if self.is_full() {
                let skipped = (emitter.steps - i + 1) as u64;
                self.dropped += skipped;
                log::trace!("Trail full, dropped {} spawns", skipped);
                break;
            }

            let spread = jitter_spread(i, emitter.player_size, emitter.steps);
            let offset = i as f32 * emitter.stride;
            let base = trail_point(center, player.velocity, offset, emitter.damping);
            let position = base + Vec2::new(jitter(rng, spread), jitter(rng, spread));
            let size = rng.random::<f32>() * emitter.max_size;
            let color = random_color(rng);

            self.particles.push(Particle {
                position,
                velocity: world_velocity,
                lifetime: emitter.lifetime,
                color,
                size,
            });
            spawned += 1;
        }
        spawned
    }

    /// Age every particle by `dt`, moving survivors and removing the expired
    ///
    /// One pass; survivors are compacted in place and keep their order.
    pub fn age(&mut self, dt: f32) {
        self.particles.retain_mut(|particle| {
            particle.lifetime -= dt;
            if particle.lifetime <= 0.0 {
                return false;
            }
            particle.position += particle.velocity * dt;
            true
        });
    }
}
