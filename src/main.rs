//! Star Drift entry point
//!
//! On the web the `Engine` handle in `platform::web` is driven from JS. The
//! native binary runs the simulation headless: a scripted joystick gesture
//! is replayed at 60 fps and a summary is printed.
//!
//! Usage: `star-drift [seconds] [seed] [settings.json]`

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), star_drift::ConfigError> {
    use star_drift::Settings;
    use star_drift::platform::{DragState, FrameClock};
    use star_drift::sim::{SimulationState, tick};

    env_logger::init();
    log::info!("Star Drift (native, headless) starting...");

    let args: Vec<String> = std::env::args().skip(1).collect();
    let seconds: f64 = args.first().and_then(|s| s.parse().ok()).unwrap_or(5.0);
    let seed: u64 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(42);
    let settings = match args.get(2) {
        Some(path) => Settings::load_from_file(path)?,
        None => Settings::default(),
    };
    log::info!("Quality preset: {}", settings.quality.as_str());

    let (width, height) = (1280.0, 720.0);
    let mut state = SimulationState::new(width, height, seed, settings.sim_config())?;
    let mut drag = DragState::new();
    let mut clock = FrameClock::new();

    let frame_ms = 1000.0 / 60.0;
    let total_frames = (seconds * 60.0).max(0.0) as u64;
    let mut peak_particles = 0;
    let mut throttled_frames = 0u64;

    for frame in 0..total_frames {
        let now = frame as f64 * frame_ms;
        for event in script::events(frame, &state) {
            drag.apply(event, &mut state);
        }
        tick(&mut state, clock.advance(now));

        peak_particles = peak_particles.max(state.trail.len());
        if state.throttled.any() {
            throttled_frames += 1;
        }
    }

    let summary = serde_json::json!({
        "seed": seed,
        "frames": state.frame,
        "sim_seconds": state.time_ms / 1000.0,
        "player": state.player,
        "world_velocity": state.world.velocity,
        "particles": state.trail.len(),
        "peak_particles": peak_particles,
        "dropped_spawns": state.trail.dropped(),
        "throttled_frames": throttled_frames,
        "stars": state.stars.len(),
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

/// Scripted joystick gesture for headless runs
#[cfg(not(target_arch = "wasm32"))]
mod script {
    use glam::Vec2;
    use star_drift::platform::PointerEvent;
    use star_drift::sim::SimulationState;

    /// Frames per phase of the gesture
    const PHASE_FRAMES: u64 = 90;

    /// Pointer events for `frame`: press the joystick, sweep the knob around
    /// in a circle at full deflection, release for a phase, repeat
    pub fn events(frame: u64, state: &SimulationState) -> Vec<PointerEvent> {
        let center = state.joystick_geometry.center;
        let reach = state.joystick_geometry.draggable_max * 1.5;
        let cycle = frame % (PHASE_FRAMES * 4);

        match cycle {
            0 => vec![PointerEvent::Down(center)],
            c if c < PHASE_FRAMES * 3 => {
                let angle = c as f32 / (PHASE_FRAMES * 3) as f32 * std::f32::consts::TAU;
                let pos = center + Vec2::new(angle.cos(), angle.sin()) * reach;
                vec![PointerEvent::Move(pos)]
            }
            c if c == PHASE_FRAMES * 3 => vec![PointerEvent::Up(center)],
            _ => Vec::new(),
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::start, this is just to satisfy the compiler
}
