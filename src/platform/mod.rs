//! Platform boundary
//!
//! Glue between a host and the simulation core:
//! - `input`: pointer drag state machine feeding the joystick
//! - `time`: wall clock to frame delta
//! - `web`: wasm-bindgen handle for browser hosts

pub mod input;
pub mod time;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use input::{DragState, PointerEvent};
pub use time::FrameClock;
