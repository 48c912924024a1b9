//! Frame clock

/// Turns wall-clock timestamps into frame deltas
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    previous_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Milliseconds since the previous call
    ///
    /// The first call yields zero. A clock that runs backwards yields zero
    /// instead of a negative delta.
    pub fn advance(&mut self, now_ms: f64) -> f32 {
        let dt = match self.previous_ms {
            Some(previous) if now_ms > previous => (now_ms - previous) as f32,
            _ => 0.0,
        };
        self.previous_ms = Some(now_ms);
        dt
    }

    /// Forget the previous timestamp (e.g. after the host was suspended)
    pub fn reset(&mut self) {
        self.previous_ms = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_is_zero() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.advance(1000.0), 0.0);
        assert_eq!(clock.advance(1016.0), 16.0);
        assert_eq!(clock.advance(1050.5), 34.5);
    }

    #[test]
    fn test_backwards_clock() {
        let mut clock = FrameClock::new();
        clock.advance(500.0);
        assert_eq!(clock.advance(400.0), 0.0);
        assert_eq!(clock.advance(410.0), 10.0);
    }

    #[test]
    fn test_reset() {
        let mut clock = FrameClock::new();
        clock.advance(500.0);
        clock.reset();
        assert_eq!(clock.advance(9000.0), 0.0);
    }
}
