//! Time management utilities

use std::time::{Duration, Instant};

/// High-precision timer for frame timing
pub struct Timer {
    last_frame: Instant,
    delta_time: f32,
    total_time: f32,
    frame_count: u64,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    /// Create a new timer
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            last_frame: now,
            delta_time: 0.0,
            total_time: 0.0,
            frame_count: 0,
        }
    }

    /// Update the timer (should be called once per frame)
    ///
    /// Returns the time in seconds since the previous call.
    pub fn update(&mut self) -> f32 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.delta_time = elapsed.as_secs_f32();
        self.total_time += self.delta_time;
        self.last_frame = now;
        self.frame_count += 1;
        self.delta_time
    }

    /// Get the time since the last frame in seconds
    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Get the total elapsed time since timer creation
    pub fn total_time(&self) -> f32 {
        self.total_time
    }

    /// Get the current frame count
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

/// Sleeps away the remainder of each frame to hold a target frame rate
pub struct FrameLimiter {
    frame_budget: Option<Duration>,
    frame_start: Instant,
}

impl FrameLimiter {
    /// Create a limiter for `target_fps` frames per second (0 = uncapped)
    pub fn new(target_fps: u32) -> Self {
        let frame_budget = (target_fps > 0)
            .then(|| Duration::from_nanos(1_000_000_000 / u64::from(target_fps)));
        Self {
            frame_budget,
            frame_start: Instant::now(),
        }
    }

    /// Target duration of one frame, if capped
    pub fn frame_budget(&self) -> Option<Duration> {
        self.frame_budget
    }

    /// Block until the current frame has used its budget, then start the next one
    pub fn wait(&mut self) {
        if let Some(budget) = self.frame_budget {
            let spent = self.frame_start.elapsed();
            if let Some(remaining) = budget.checked_sub(spent) {
                std::thread::sleep(remaining);
            }
        }
        self.frame_start = Instant::now();
    }
}
