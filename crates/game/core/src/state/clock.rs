/// Monotonic game clock shared by every system in a frame.
///
/// `current_time` counts milliseconds since the clock was created; `dt` is
/// the length of the most recent frame in seconds.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Clock {
    current_time: u64,
    dt: f32,
}

impl Clock {
    pub const fn new() -> Self {
        Self {
            current_time: 0,
            dt: 0.0,
        }
    }

    /// Creates a clock already positioned at `current_time` milliseconds.
    pub const fn at(current_time: u64) -> Self {
        Self {
            current_time,
            dt: 0.0,
        }
    }

    #[inline]
    pub const fn current_time(&self) -> u64 {
        self.current_time
    }

    #[inline]
    pub const fn dt(&self) -> f32 {
        self.dt
    }

    /// Advances by one frame of `elapsed_ms` milliseconds.
    pub fn advance(&mut self, elapsed_ms: u64) {
        self.current_time = self.current_time.saturating_add(elapsed_ms);
        self.dt = elapsed_ms as f32 / 1000.0;
    }

    /// Milliseconds elapsed since `earlier`, saturating at zero.
    #[inline]
    pub const fn since(&self, earlier: u64) -> u64 {
        self.current_time.saturating_sub(earlier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_updates_time_and_dt() {
        let mut clock = Clock::new();
        clock.advance(16);
        clock.advance(34);
        assert_eq!(clock.current_time(), 50);
        assert!((clock.dt() - 0.034).abs() < 1e-6);
        assert_eq!(clock.since(20), 30);
        assert_eq!(clock.since(80), 0);
    }
}
