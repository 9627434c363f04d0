//! Time management utilities

use std::time::Duration;

/// Fixed-step frame clock for driving the game without a display
///
/// Each tick advances simulated time by one frame, so runs are reproducible
/// regardless of how fast the host executes them.
#[derive(Debug, Clone)]
pub struct FrameClock {
    step: Duration,
    elapsed: Duration,
    frame_count: u64,
}

impl FrameClock {
    /// Create a clock advancing `step` per frame
    pub const fn new(step: Duration) -> Self {
        Self {
            step,
            elapsed: Duration::ZERO,
            frame_count: 0,
        }
    }

    /// Create a clock ticking `hz` times per simulated second
    pub fn from_hz(hz: u32) -> Self {
        Self::new(Duration::from_secs(1) / hz.max(1))
    }

    /// Advance one frame and return the new elapsed time
    pub fn tick(&mut self) -> Duration {
        self.elapsed += self.step;
        self.frame_count += 1;
        self.elapsed
    }

    /// Simulated time since the clock started
    pub const fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Frames ticked so far
    pub const fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Duration of one frame
    pub const fn step(&self) -> Duration {
        self.step
    }
}
