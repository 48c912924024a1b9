//! Per-frame update pipeline
//!
//! Stage order is fixed: Player -> World -> Particles (emit, then age) -> Stars.
//! World feedback runs right after the player so this frame's particles and
//! stars both see the recoil from this frame's boundary contact.

use super::particles::TrailEmitter;
use super::player::step_player;
use super::stars::advect;
use super::state::SimulationState;
use super::world::couple;

/// Make a wall-clock delta safe to integrate
///
/// NaN and negative values become zero; anything above `max_dt` (including
/// +inf) is clamped to `max_dt`.
pub fn sanitize_dt(dt: f32, max_dt: f32) -> f32 {
    if dt.is_nan() || dt < 0.0 {
        0.0
    } else {
        dt.min(max_dt)
    }
}

/// Advance the simulation by `dt` milliseconds
pub fn tick(state: &mut SimulationState, dt: f32) {
    let raw_dt = dt;
    if raw_dt.is_nan() || raw_dt < 0.0 {
        log::warn!("Ignoring degenerate frame delta {raw_dt}");
        return;
    }
    let dt = sanitize_dt(raw_dt, state.config.max_dt);
    if dt < raw_dt {
        log::debug!("Clamped frame delta {raw_dt}ms to {dt}ms");
    }

    let config = &state.config;

    // Player
    state.throttled = step_player(
        &mut state.player,
        &state.joystick,
        &state.bounds,
        config.velocity_velocity,
        config.player_margin,
        config.player_size,
        dt,
    );

    // World
    couple(&mut state.world, config.feedback, &state.player, &state.throttled);

    // Particles
    let emitter = TrailEmitter {
        steps: config.trail_steps,
        stride: config.trail_stride,
        damping: config.trail_damping,
        player_size: config.player_size,
        lifetime: config.particle_lifetime,
        max_size: config.particle_max_size,
    };
    state
        .trail
        .emit(&mut state.rng, &state.player, state.world.velocity, &emitter);
    state.trail.age(dt);

    // Stars
    advect(
        &mut state.stars,
        state.world.velocity,
        dt,
        state.width,
        state.height,
    );

    let previous_ms = state.time_ms;
    state.time_ms += dt as f64;
    state.frame += 1;

    if (state.time_ms / 1000.0).floor() > (previous_ms / 1000.0).floor() {
        log::debug!(
            "t={:.1}s frame={} pos=({:.1}, {:.1}) vel=({:.3}, {:.3}) \
             particles={} dropped={} world=({:.3}, {:.3})",
            state.time_ms / 1000.0,
            state.frame,
            state.player.position.x,
            state.player.position.y,
            state.player.velocity.x,
            state.player.velocity.y,
            state.trail.len(),
            state.trail.dropped(),
            state.world.velocity.x,
            state.world.velocity.y,
        );
    }
}
