//! Frame timing utilities

use std::time::Instant;

/// Wall-clock frame timer
///
/// Call [`update`](Self::update) once per frame; the timer reports the delta
/// since the previous frame plus running totals for throughput logging.
pub struct Timer {
    started: Instant,
    last_frame: Instant,
    delta_time: f32,
    frame_count: u64,
}

impl Timer {
    /// Create a timer starting now
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            started: now,
            last_frame: now,
            delta_time: 0.0,
            frame_count: 0,
        }
    }

    /// Record a frame boundary
    pub fn update(&mut self) {
        let now = Instant::now();
        self.delta_time = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.frame_count += 1;
    }

    /// Seconds between the last two [`update`](Self::update) calls
    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Seconds since the timer was created
    pub fn total_time(&self) -> f32 {
        self.started.elapsed().as_secs_f32()
    }

    /// Number of frames recorded so far
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Average frames per second since creation
    pub fn average_fps(&self) -> f32 {
        let total = self.total_time();
        if total > 0.0 {
            self.frame_count as f32 / total
        } else {
            0.0
        }
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixed-timestep accumulator for frame-rate independent simulation
///
/// Real frame time is accumulated and paid out in whole fixed steps. The
/// physics drag formula is timestep-sensitive, so stepping the simulation
/// with a constant `dt` is what makes behavior reproducible across machines.
///
/// ```
/// use ember2d::foundation::time::FixedTimestep;
///
/// let mut stepper = FixedTimestep::new(0.01);
/// let steps = stepper.advance(0.035);
/// assert_eq!(steps, 3); // 35 ms pays out three 10 ms steps
/// ```
pub struct FixedTimestep {
    step: f32,
    accumulator: f32,
    max_steps_per_frame: u32,
}

impl FixedTimestep {
    /// Create an accumulator with the given step size in seconds
    ///
    /// Non-positive step sizes fall back to 1/60 s.
    pub fn new(step: f32) -> Self {
        let step = if step > 0.0 { step } else { 1.0 / 60.0 };
        Self {
            step,
            accumulator: 0.0,
            max_steps_per_frame: 8,
        }
    }

    /// The fixed step size in seconds
    pub fn step(&self) -> f32 {
        self.step
    }

    /// Accumulate a frame's worth of real time and return how many fixed
    /// steps to simulate
    ///
    /// Negative or non-finite frame times contribute nothing. The step count
    /// is capped so a long stall cannot trigger a spiral of death; the excess
    /// time is discarded.
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        if frame_dt.is_finite() && frame_dt > 0.0 {
            self.accumulator += frame_dt;
        }

        let mut steps = 0;
        while self.accumulator >= self.step && steps < self.max_steps_per_frame {
            self.accumulator -= self.step;
            steps += 1;
        }
        if steps == self.max_steps_per_frame {
            self.accumulator = 0.0;
        }
        steps
    }

    /// Fraction of a step accumulated but not yet simulated, in [0, 1)
    ///
    /// Useful for render interpolation between physics states.
    pub fn alpha(&self) -> f32 {
        self.accumulator / self.step
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_timestep_pays_out_whole_steps() {
        let mut stepper = FixedTimestep::new(0.01);

        assert_eq!(stepper.advance(0.035), 3);
        // 5 ms remainder carries over
        assert_eq!(stepper.advance(0.005), 1);
    }

    #[test]
    fn test_fixed_timestep_rejects_bad_frame_times() {
        let mut stepper = FixedTimestep::new(0.01);

        assert_eq!(stepper.advance(-1.0), 0);
        assert_eq!(stepper.advance(f32::NAN), 0);
        assert_eq!(stepper.advance(0.0), 0);
    }

    #[test]
    fn test_fixed_timestep_caps_runaway_frames() {
        let mut stepper = FixedTimestep::new(0.01);

        let steps = stepper.advance(10.0);
        assert_eq!(steps, 8);
        // Excess time was discarded, not banked
        assert_eq!(stepper.advance(0.0), 0);
    }

    #[test]
    fn test_fixed_timestep_invalid_step_falls_back() {
        let stepper = FixedTimestep::new(0.0);
        assert!(stepper.step() > 0.0);
    }

    #[test]
    fn test_timer_counts_frames() {
        let mut timer = Timer::new();
        assert_eq!(timer.frame_count(), 0);

        timer.update();
        timer.update();
        assert_eq!(timer.frame_count(), 2);
        assert!(timer.delta_time() >= 0.0);
        assert!(timer.total_time() >= timer.delta_time());
    }
}
