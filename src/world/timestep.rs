/// Fixed timestep accumulator.
/// Turns variable frame times into a whole number of fixed-length steps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedTimestep {
    dt: f64,
    accumulator: f64,
    max_steps: u32,
}

impl FixedTimestep {
    /// `max_steps` is raised to at least one.
    pub fn new(dt: f64, max_steps: u32) -> Self {
        Self {
            dt,
            accumulator: 0.0,
            max_steps: max_steps.max(1),
        }
    }

    /// Adds frame time and returns how many fixed steps to run now.
    /// Negative or non-finite frame times add nothing.
    pub fn accumulate(&mut self, frame_dt: f64) -> u32 {
        if frame_dt.is_finite() && frame_dt > 0.0 {
            self.accumulator += frame_dt;
        }
        // Cap to prevent a spiral of death after a long stall.
        self.accumulator = self.accumulator.min(self.dt * self.max_steps as f64);
        let steps = (self.accumulator / self.dt) as u32;
        self.accumulator -= steps as f64 * self.dt;
        steps
    }

    /// Fraction of a step left in the accumulator, in `[0, 1)`, for render
    /// interpolation.
    pub fn alpha(&self) -> f64 {
        self.accumulator / self.dt
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}
