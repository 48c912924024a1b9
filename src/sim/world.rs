//! World feedback
//!
//! Derives the shared "recoil" velocity that particles and stars drift with.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{PlayerState, ThrottledAxes, WorldState};

/// How the world reacts to player motion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FeedbackPolicy {
    /// Full reverse velocity, only on axes pressed against a boundary
    #[default]
    ThrottledOnly,
    /// Half reverse velocity whenever the player moves; held while at rest
    HalfVelocity,
}

/// World velocity for this tick
pub fn feedback_velocity(
    policy: FeedbackPolicy,
    previous: Vec2,
    player: &PlayerState,
    throttled: &ThrottledAxes,
) -> Vec2 {
    match policy {
        FeedbackPolicy::ThrottledOnly => Vec2::new(
            if throttled.x { -player.velocity.x } else { 0.0 },
            if throttled.y { -player.velocity.y } else { 0.0 },
        ),
        FeedbackPolicy::HalfVelocity => {
            if player.is_moving() {
                -player.velocity / 2.0
            } else {
                previous
            }
        }
    }
}

/// Update the world velocity from the player's latest step
pub fn couple(
    world: &mut WorldState,
    policy: FeedbackPolicy,
    player: &PlayerState,
    throttled: &ThrottledAxes,
) {
    world.velocity = feedback_velocity(policy, world.velocity, player, throttled);
}
