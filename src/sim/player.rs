//! Player kinematics
//!
//! Velocity eases toward the joystick target at a fixed rate, position
//! integrates velocity, then the player square is clamped inside the play
//! area. Clamped axes are reported so the world feedback can react.

use glam::Vec2;

use super::state::{Bounds, JoystickState, PlayerState, ThrottledAxes};

/// Move `current` toward `target` by at most `step`
///
/// Snaps to `target` when the gap is smaller than the step, so the result
/// never overshoots.
#[inline]
pub fn reach(current: f32, target: f32, step: f32) -> f32 {
    let gap = target - current;
    if gap.abs() < step {
        return target;
    }
    if gap > 0.0 {
        (current + step).min(target)
    } else if gap < 0.0 {
        (current - step).max(target)
    } else {
        target
    }
}

/// Per-axis velocity step for a frame of `dt` milliseconds
#[inline]
pub fn easing_step(velocity_velocity: f32, dt: f32) -> f32 {
    velocity_velocity * dt / 10000.0
}

/// Ease both velocity axes toward the joystick
pub fn ease_velocity(
    velocity: Vec2,
    target: &JoystickState,
    velocity_velocity: f32,
    dt: f32,
) -> Vec2 {
    let step = easing_step(velocity_velocity, dt);
    Vec2::new(reach(velocity.x, target.x, step), reach(velocity.y, target.y, step))
}

/// Clamp one axis to `[min, max]`, reporting whether it was clamped
#[inline]
fn clamp_axis(value: f32, min: f32, max: f32) -> (f32, bool) {
    if value > max {
        (max, true)
    } else if value < min {
        (min, true)
    } else {
        (value, false)
    }
}

/// Keep the player square inside `bounds` shrunk by `margin`
pub fn clamp_to_bounds(
    position: Vec2,
    bounds: &Bounds,
    margin: f32,
    size: f32,
) -> (Vec2, ThrottledAxes) {
    let (x, throttled_x) = clamp_axis(
        position.x,
        bounds.left + margin,
        bounds.right - margin - size,
    );
    let (y, throttled_y) = clamp_axis(
        position.y,
        bounds.top + margin,
        bounds.bottom - margin - size,
    );
    (
        Vec2::new(x, y),
        ThrottledAxes {
            x: throttled_x,
            y: throttled_y,
        },
    )
}

/// Advance the player by `dt` milliseconds
pub fn step_player(
    player: &mut PlayerState,
    joystick: &JoystickState,
    bounds: &Bounds,
    velocity_velocity: f32,
    margin: f32,
    size: f32,
    dt: f32,
) -> ThrottledAxes {
    player.velocity = ease_velocity(player.velocity, joystick, velocity_velocity, dt);
    let moved = player.position + player.velocity * dt;
    let (position, throttled) = clamp_to_bounds(moved, bounds, margin, size);
    player.position = position;
    throttled
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn bounds() -> Bounds {
        Bounds {
            left: 0.0,
            top: 0.0,
            right: 500.0,
            bottom: 500.0,
        }
    }

    #[test]
    fn test_reach_steps_and_snaps() {
        assert_eq!(reach(0.0, 1.0, 0.25), 0.25);
        assert_eq!(reach(1.0, 0.0, 0.25), 0.75);
        assert_eq!(reach(0.9, 1.0, 0.25), 1.0);
        assert_eq!(reach(-0.9, -1.0, 0.25), -1.0);
        assert_eq!(reach(0.5, 0.5, 0.25), 0.5);
    }

    #[test]
    fn test_reach_zero_step_is_noop() {
        assert_eq!(reach(0.3, 1.0, 0.0), 0.3);
        assert_eq!(reach(0.3, 0.3, 0.0), 0.3);
    }

    #[test]
    fn test_clamp_right_boundary() {
        let (pos, throttled) = clamp_to_bounds(Vec2::new(470.0, 200.0), &bounds(), 10.0, 30.0);
        assert_eq!(pos.x, 460.0);
        assert_eq!(pos.y, 200.0);
        assert!(throttled.x);
        assert!(!throttled.y);
    }

    #[test]
    fn test_clamp_top_left() {
        let (pos, throttled) = clamp_to_bounds(Vec2::new(-5.0, 3.0), &bounds(), 10.0, 30.0);
        assert_eq!(pos, Vec2::new(10.0, 10.0));
        assert!(throttled.x && throttled.y);
    }

    #[test]
    fn test_step_player_drives_into_right_wall() {
        let mut player = PlayerState {
            position: Vec2::new(455.0, 200.0),
            velocity: Vec2::new(1.0, 0.0),
        };
        let throttled = step_player(
            &mut player,
            &JoystickState::new(1.0, 0.0),
            &bounds(),
            10.0,
            10.0,
            30.0,
            16.0,
        );
        assert_eq!(player.position.x, 460.0);
        assert!(throttled.x);
        // Clamping does not touch velocity
        assert_eq!(player.velocity.x, 1.0);
    }

    #[test]
    fn test_zero_dt_changes_nothing() {
        let mut player = PlayerState {
            position: Vec2::new(100.0, 100.0),
            velocity: Vec2::new(0.2, -0.1),
        };
        let before = player;
        let throttled = step_player(
            &mut player,
            &JoystickState::new(1.0, 1.0),
            &bounds(),
            10.0,
            10.0,
            30.0,
            0.0,
        );
        assert_eq!(player, before);
        assert!(!throttled.any());
    }

    #[test]
    fn test_easing_step() {
        assert!((easing_step(10.0, 16.0) - 0.016).abs() < 1e-7);
    }

    proptest! {
        #[test]
        fn velocity_converges_without_overshoot(
            target_x in -1.0f32..=1.0,
            target_y in -1.0f32..=1.0,
            dt in 0.5f32..100.0,
        ) {
            let target = JoystickState::new(target_x, target_y);
            let mut velocity = Vec2::ZERO;
            let mut reached = false;
            // Slowest case: a gap of 1.0 at 0.0005 per step
            for _ in 0..5000 {
                let next = ease_velocity(velocity, &target, 10.0, dt);
                let axes = [(velocity.x, next.x, target.x), (velocity.y, next.y, target.y)];
                for (prev, now, goal) in axes {
                    if prev <= goal {
                        prop_assert!(now <= goal);
                    } else {
                        prop_assert!(now >= goal);
                    }
                }
                velocity = next;
                if velocity == target.as_vec2() {
                    reached = true;
                    break;
                }
            }
            prop_assert!(reached);
        }
    }
}
