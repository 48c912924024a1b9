//! Pointer drag handling
//!
//! A drag starts on pointer-down, updates the joystick on every move while
//! held, and resets it when released. Only the joystick state is touched.

use glam::Vec2;

use crate::sim::{JoystickGeometry, JoystickState, SimulationState, map_drag};

/// Pointer events in play surface coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down(Vec2),
    Move(Vec2),
    Up(Vec2),
    /// Host aborted the gesture (pointercancel, lost capture)
    Cancel,
}

/// Transient drag state owned by the host
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragState {
    pub drag_start: Option<Vec2>,
}

impl DragState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_start.is_some()
    }

    /// Apply one pointer event to the joystick
    pub fn handle(
        &mut self,
        event: PointerEvent,
        geometry: &JoystickGeometry,
        joystick: &mut JoystickState,
    ) {
        match event {
            PointerEvent::Down(pos) => {
                self.drag_start = Some(pos);
            }
            PointerEvent::Move(pos) => {
                if let Some(start) = self.drag_start {
                    if let Some(mapped) = map_drag(geometry, start, pos) {
                        *joystick = mapped;
                    }
                }
            }
            PointerEvent::Up(_) | PointerEvent::Cancel => {
                if self.drag_start.take().is_some() {
                    joystick.reset();
                }
            }
        }
    }

    /// Apply a pointer event to a simulation's joystick
    pub fn apply(&mut self, event: PointerEvent, state: &mut SimulationState) {
        self.handle(event, &state.joystick_geometry, &mut state.joystick);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry() -> JoystickGeometry {
        JoystickGeometry::new(Vec2::new(100.0, 100.0), 100.0, 120.0)
    }

    #[test]
    fn test_drag_cycle() {
        let geo = geometry();
        let mut drag = DragState::new();
        let mut joystick = JoystickState::IDLE;

        drag.handle(PointerEvent::Down(Vec2::new(100.0, 100.0)), &geo, &mut joystick);
        assert!(drag.is_dragging());
        assert!(joystick.is_idle());

        drag.handle(PointerEvent::Move(Vec2::new(160.0, 100.0)), &geo, &mut joystick);
        assert_eq!(joystick, JoystickState::new(0.5, 0.0));

        drag.handle(PointerEvent::Up(Vec2::new(160.0, 100.0)), &geo, &mut joystick);
        assert!(!drag.is_dragging());
        assert!(joystick.is_idle());
    }

    #[test]
    fn test_move_without_press_is_ignored() {
        let geo = geometry();
        let mut drag = DragState::new();
        let mut joystick = JoystickState::IDLE;
        drag.handle(PointerEvent::Move(Vec2::new(160.0, 100.0)), &geo, &mut joystick);
        assert!(joystick.is_idle());
    }

    #[test]
    fn test_drag_off_joystick_leaves_state_unchanged() {
        let geo = geometry();
        let mut drag = DragState::new();
        let mut joystick = JoystickState::new(0.25, 0.25);
        drag.handle(PointerEvent::Down(Vec2::new(500.0, 500.0)), &geo, &mut joystick);
        drag.handle(PointerEvent::Move(Vec2::new(100.0, 160.0)), &geo, &mut joystick);
        assert_eq!(joystick, JoystickState::new(0.25, 0.25));
    }

    #[test]
    fn test_cancel_resets() {
        let geo = geometry();
        let mut drag = DragState::new();
        let mut joystick = JoystickState::IDLE;
        drag.handle(PointerEvent::Down(Vec2::new(100.0, 100.0)), &geo, &mut joystick);
        drag.handle(PointerEvent::Move(Vec2::new(100.0, 40.0)), &geo, &mut joystick);
        assert_eq!(joystick, JoystickState::new(0.0, -0.5));
        drag.handle(PointerEvent::Cancel, &geo, &mut joystick);
        assert!(joystick.is_idle());
    }
}
