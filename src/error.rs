//! Configuration errors
//!
//! The simulation itself never fails; everything here is raised at the
//! boundary when a viewport or tuning file is rejected.

/// Errors raised while building or loading a simulation configuration
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// Viewport dimensions are not positive finite numbers
    #[error("invalid viewport {width}x{height}")]
    InvalidViewport { width: f32, height: f32 },

    /// Play area cannot hold the player once margins are applied
    #[error("play area {width}x{height} is too small for a player of size {player_size}")]
    PlayAreaTooSmall {
        width: f32,
        height: f32,
        player_size: f32,
    },

    /// A tuning value is out of range
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
