//! Joystick input mapping
//!
//! Converts a pointer drag on the on-screen joystick into a normalized
//! direction. The mapping is pure: it depends only on the fixed geometry and
//! the two drag points.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::JoystickState;

/// Placement and size of the on-screen joystick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JoystickGeometry {
    pub center: Vec2,
    /// Base radius; drags must start inside the square of this half-size
    pub radius: f32,
    /// Knob radius
    pub inner_radius: f32,
    /// Maximum knob displacement from the center
    pub draggable_max: f32,
}

impl JoystickGeometry {
    pub fn new(center: Vec2, radius: f32, draggable_max: f32) -> Self {
        Self {
            center,
            radius,
            inner_radius: radius / 2.0,
            draggable_max,
        }
    }

    /// Place the joystick for a viewport
    ///
    /// Landscape viewports get it in the bottom-left corner, portrait ones
    /// centered along the bottom edge.
    pub fn layout(width: f32, height: f32, radius: f32, draggable_max: f32) -> Self {
        let inner_radius = radius / 2.0;
        let margin = draggable_max - radius + inner_radius;
        let y = height - radius - margin;
        let center = if width > height {
            Vec2::new(radius + margin, y)
        } else {
            Vec2::new(width / 2.0, y)
        };
        Self::new(center, radius, draggable_max)
    }

    /// Whether a drag starting at `point` grabs the joystick
    pub fn hit_test(&self, point: Vec2) -> bool {
        point.x >= self.center.x - self.radius
            && point.x <= self.center.x + self.radius
            && point.y >= self.center.y - self.radius
            && point.y <= self.center.y + self.radius
    }

    /// Where the knob is drawn for a given joystick state
    pub fn knob_position(&self, joystick: &JoystickState) -> Vec2 {
        self.center + joystick.as_vec2() * self.draggable_max
    }
}

/// Clamp a drag offset to `max_len`, keeping its direction
///
/// Equivalent to rescaling along the line through the origin with the
/// offset's slope; a vertical offset keeps the sign of its y component.
pub fn clamp_drag(diff: Vec2, max_len: f32) -> Vec2 {
    let len = diff.length();
    if len > max_len {
        (diff / len) * max_len
    } else {
        diff
    }
}

/// Map a drag to a joystick state
///
/// Returns `None` when the drag did not start on the joystick (or carries
/// non-finite coordinates); callers leave the joystick unchanged in that case.
pub fn map_drag(
    geometry: &JoystickGeometry,
    drag_start: Vec2,
    current: Vec2,
) -> Option<JoystickState> {
    if !drag_start.is_finite() || !current.is_finite() {
        return None;
    }
    if !geometry.hit_test(drag_start) {
        return None;
    }

    let diff = clamp_drag(current - geometry.center, geometry.draggable_max);
    let normalized = diff / geometry.draggable_max;
    Some(JoystickState::new(
        normalized.x.clamp(-1.0, 1.0),
        normalized.y.clamp(-1.0, 1.0),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn geometry() -> JoystickGeometry {
        JoystickGeometry::new(Vec2::new(100.0, 100.0), 100.0, 120.0)
    }

    #[test]
    fn test_drag_beyond_max_clamps_to_unit() {
        let js = map_drag(&geometry(), Vec2::new(100.0, 100.0), Vec2::new(300.0, 100.0)).unwrap();
        assert!((js.x - 1.0).abs() < 1e-6);
        assert!(js.y.abs() < 1e-6);
    }

    #[test]
    fn test_drag_within_max_is_proportional() {
        let js = map_drag(&geometry(), Vec2::new(100.0, 100.0), Vec2::new(100.0, 160.0)).unwrap();
        assert_eq!(js, JoystickState::new(0.0, 0.5));
    }

    #[test]
    fn test_vertical_clamp_keeps_sign() {
        let up = map_drag(&geometry(), Vec2::new(100.0, 100.0), Vec2::new(100.0, -300.0)).unwrap();
        assert_eq!(up.x, 0.0);
        assert!((up.y + 1.0).abs() < 1e-6);

        let down = map_drag(&geometry(), Vec2::new(100.0, 100.0), Vec2::new(100.0, 500.0)).unwrap();
        assert!((down.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_diagonal_clamp_preserves_slope() {
        let js = map_drag(&geometry(), Vec2::new(150.0, 150.0), Vec2::new(400.0, 400.0)).unwrap();
        let expected = std::f32::consts::FRAC_1_SQRT_2;
        assert!((js.x - expected).abs() < 1e-5);
        assert!((js.y - expected).abs() < 1e-5);
    }

    #[test]
    fn test_drag_outside_hit_square_has_no_effect() {
        assert!(map_drag(&geometry(), Vec2::new(201.0, 100.0), Vec2::new(150.0, 100.0)).is_none());
        assert!(map_drag(&geometry(), Vec2::new(100.0, -0.5), Vec2::new(150.0, 100.0)).is_none());
        // Edges are inclusive
        assert!(map_drag(&geometry(), Vec2::new(200.0, 0.0), Vec2::new(150.0, 100.0)).is_some());
    }

    #[test]
    fn test_non_finite_drag_ignored() {
        assert!(map_drag(&geometry(), Vec2::new(100.0, 100.0), Vec2::new(f32::NAN, 1.0)).is_none());
    }

    #[test]
    fn test_layout_landscape_and_portrait() {
        let landscape = JoystickGeometry::layout(1000.0, 600.0, 100.0, 120.0);
        assert_eq!(landscape.center, Vec2::new(170.0, 430.0));
        assert_eq!(landscape.inner_radius, 50.0);

        let portrait = JoystickGeometry::layout(400.0, 800.0, 100.0, 120.0);
        assert_eq!(portrait.center, Vec2::new(200.0, 630.0));
    }

    #[test]
    fn test_knob_position() {
        let geo = geometry();
        let knob = geo.knob_position(&JoystickState::new(0.5, -1.0));
        assert_eq!(knob, Vec2::new(160.0, -20.0));
    }

    proptest! {
        #[test]
        fn joystick_magnitude_never_exceeds_one(
            x in -5000.0f32..5000.0,
            y in -5000.0f32..5000.0,
        ) {
            let js = map_drag(&geometry(), Vec2::new(100.0, 100.0), Vec2::new(x, y)).unwrap();
            prop_assert!(js.x * js.x + js.y * js.y <= 1.0 + 1e-4);
            prop_assert!((-1.0..=1.0).contains(&js.x));
            prop_assert!((-1.0..=1.0).contains(&js.y));
        }
    }
}
