//! Browser bindings
//!
//! JS owns the canvas, the pointer listeners and `requestAnimationFrame`; it
//! forwards events and timestamps here and draws from `snapshot_json`.

use glam::Vec2;
use wasm_bindgen::prelude::*;

use super::{DragState, FrameClock, PointerEvent};
use crate::settings::{QualityPreset, Settings};
use crate::sim::{SimulationState, tick};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Star Drift (web) starting...");
}

/// Simulation handle exported to JS
#[wasm_bindgen]
pub struct Engine {
    state: SimulationState,
    settings: Settings,
    drag: DragState,
    clock: FrameClock,
}

#[wasm_bindgen]
impl Engine {
    /// New simulation for a `width` x `height` canvas, seeded from the clock
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> Result<Engine, JsValue> {
        Self::with_seed(width, height, js_sys::Date::now() as u64)
    }

    /// New simulation with an explicit seed
    pub fn with_seed(width: f32, height: f32, seed: u64) -> Result<Engine, JsValue> {
        let settings = Settings::load();
        log::info!("Quality preset: {}", settings.quality.as_str());
        let state = SimulationState::new(width, height, seed, settings.sim_config())
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self {
            state,
            settings,
            drag: DragState::new(),
            clock: FrameClock::new(),
        })
    }

    pub fn pointer_down(&mut self, x: f32, y: f32) {
        self.drag.apply(PointerEvent::Down(Vec2::new(x, y)), &mut self.state);
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.drag.apply(PointerEvent::Move(Vec2::new(x, y)), &mut self.state);
    }

    pub fn pointer_up(&mut self, x: f32, y: f32) {
        self.drag.apply(PointerEvent::Up(Vec2::new(x, y)), &mut self.state);
    }

    pub fn pointer_cancel(&mut self) {
        self.drag.apply(PointerEvent::Cancel, &mut self.state);
    }

    /// Run one frame; `now_ms` is the `requestAnimationFrame` timestamp
    pub fn frame(&mut self, now_ms: f64) {
        let dt = self.clock.advance(now_ms);
        tick(&mut self.state, dt);
    }

    /// Drop the previous timestamp when the page becomes visible again
    pub fn resume(&mut self) {
        self.clock.reset();
    }

    /// Store a quality preset in LocalStorage; it applies to the next `Engine`
    ///
    /// Returns false for an unknown preset name.
    pub fn set_quality(&mut self, name: &str) -> bool {
        let Some(quality) = QualityPreset::from_str(name) else {
            log::warn!("Unknown quality preset {name:?}");
            return false;
        };
        self.settings.quality = quality;
        self.settings.save();
        log::info!("Quality preset set to {}", quality.as_str());
        true
    }

    /// Everything the renderer draws this frame, as JSON
    pub fn snapshot_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.state.snapshot())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}
