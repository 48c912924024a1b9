//! Tuning constants, quality presets and persisted preferences
//!
//! `SimConfig` holds every constant the update pipeline reads. `Settings` is
//! the user-facing layer persisted as JSON (LocalStorage on web, a file on
//! native) and turned into a `SimConfig` at startup.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::sim::FeedbackPolicy;

/// Quality preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum QualityPreset {
    Low,
    #[default]
    Medium,
    High,
}

impl QualityPreset {
    /// Display name, accepted back by `from_str`
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityPreset::Low => "Low",
            QualityPreset::Medium => "Medium",
            QualityPreset::High => "High",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(QualityPreset::Low),
            "medium" | "med" => Some(QualityPreset::Medium),
            "high" => Some(QualityPreset::High),
            _ => None,
        }
    }

    /// Maximum particles for this preset
    pub fn max_particles(&self) -> usize {
        match self {
            QualityPreset::Low => 100,
            QualityPreset::Medium => MAX_PARTICLES,
            QualityPreset::High => 2000,
        }
    }

    /// Background star count for this preset
    pub fn star_count(&self) -> usize {
        match self {
            QualityPreset::Low => 0,
            QualityPreset::Medium => STAR_COUNT,
            QualityPreset::High => 25,
        }
    }
}

/// Every constant read by the update pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Margin between viewport and play area bounds
    pub play_margin: f32,
    /// Margin between play area bounds and the player
    pub player_margin: f32,
    /// Side length of the player square
    pub player_size: f32,
    /// Easing rate; the per-ms velocity step is `velocity_velocity / 10000`
    pub velocity_velocity: f32,

    pub max_particles: usize,
    /// Trail points walked back per frame (one particle each)
    pub trail_steps: u32,
    pub trail_stride: f32,
    pub trail_damping: f32,
    /// Initial particle lifetime (ms)
    pub particle_lifetime: f32,
    pub particle_max_size: f32,

    pub star_count: usize,
    pub star_max_distance: f32,

    pub joystick_radius: f32,
    pub joystick_draggable_max: f32,

    /// Ceiling for a frame's dt (ms)
    pub max_dt: f32,
    /// How world velocity reacts to the player
    pub feedback: FeedbackPolicy,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            play_margin: PLAY_MARGIN,
            player_margin: PLAYER_MARGIN,
            player_size: PLAYER_SIZE,
            velocity_velocity: VELOCITY_VELOCITY,

            max_particles: MAX_PARTICLES,
            trail_steps: TRAIL_STEPS,
            trail_stride: TRAIL_STRIDE,
            trail_damping: TRAIL_DAMPING,
            particle_lifetime: PARTICLE_LIFETIME,
            particle_max_size: PARTICLE_MAX_SIZE,

            star_count: STAR_COUNT,
            star_max_distance: STAR_MAX_DISTANCE,

            joystick_radius: JOYSTICK_RADIUS,
            joystick_draggable_max: JOYSTICK_DRAGGABLE_MAX,

            max_dt: MAX_DT,
            feedback: FeedbackPolicy::default(),
        }
    }
}

impl SimConfig {
    /// Reject values the pipeline cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let non_negative = [
            ("play_margin", self.play_margin),
            ("player_margin", self.player_margin),
            ("player_size", self.player_size),
            ("velocity_velocity", self.velocity_velocity),
            ("trail_stride", self.trail_stride),
            ("trail_damping", self.trail_damping),
            ("particle_lifetime", self.particle_lifetime),
            ("particle_max_size", self.particle_max_size),
            ("star_max_distance", self.star_max_distance),
            ("joystick_radius", self.joystick_radius),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: format!("expected a finite non-negative number, got {value}"),
                });
            }
        }

        let positive = [
            ("joystick_draggable_max", self.joystick_draggable_max),
            ("max_dt", self.max_dt),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: format!("expected a finite positive number, got {value}"),
                });
            }
        }

        if self.trail_steps == 0 {
            return Err(ConfigError::InvalidValue {
                field: "trail_steps",
                reason: "at least one trail step is required".to_string(),
            });
        }

        Ok(())
    }
}

/// User preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Quality preset
    pub quality: QualityPreset,
    /// Particle trail on/off
    pub particles: bool,
    /// Starfield on/off
    pub starfield: bool,
    /// World feedback policy
    pub feedback: FeedbackPolicy,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quality: QualityPreset::Medium,
            particles: true,
            starfield: true,
            feedback: FeedbackPolicy::default(),
        }
    }
}

impl Settings {
    /// Create settings from a quality preset
    pub fn from_preset(preset: QualityPreset) -> Self {
        Self {
            quality: preset,
            ..Self::default()
        }
    }

    /// Effective particle count cap
    pub fn max_particles(&self) -> usize {
        if !self.particles {
            0
        } else {
            self.quality.max_particles()
        }
    }

    /// Effective star count
    pub fn star_count(&self) -> usize {
        if !self.starfield {
            0
        } else {
            self.quality.star_count()
        }
    }

    /// Build the pipeline configuration for these preferences
    pub fn sim_config(&self) -> SimConfig {
        SimConfig {
            max_particles: self.max_particles(),
            star_count: self.star_count(),
            feedback: self.feedback,
            ..SimConfig::default()
        }
    }

    /// Parse settings from JSON
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize settings to JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from a JSON file
    pub fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&contents)?;
        log::info!("Loaded settings from {path}");
        Ok(settings)
    }

    /// Save settings to a JSON file
    pub fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        std::fs::write(path, self.to_json()?)?;
        log::info!("Settings saved to {path}");
        Ok(())
    }

    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "star_drift_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {e}"),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }
}
