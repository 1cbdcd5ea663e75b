//! Fixed-timestep animation clock

/// Longest frame delta taken into account, so a stalled window does not
/// fast-forward the animation
pub const MAX_FRAME_DELTA: f32 = 0.25;

/// Accumulates variable frame deltas and advances in whole fixed steps.
#[derive(Debug, Clone)]
pub struct AnimationClock {
    step: f32,
    accumulator: f32,
    steps: u64,
}

impl AnimationClock {
    pub fn new(target_fps: u32) -> Self {
        Self {
            step: 1.0 / target_fps.max(1) as f32,
            accumulator: 0.0,
            steps: 0,
        }
    }

    /// Feed a frame delta in seconds; returns how many steps were taken
    pub fn advance(&mut self, delta: f32) -> u32 {
        if !delta.is_finite() || delta <= 0.0 {
            return 0;
        }

        self.accumulator += delta.min(MAX_FRAME_DELTA);

        let mut taken = 0;
        while self.accumulator >= self.step {
            self.accumulator -= self.step;
            self.steps += 1;
            taken += 1;
        }
        taken
    }

    /// Animation time in seconds
    pub fn elapsed(&self) -> f32 {
        (self.steps as f64 * self.step as f64) as f32
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
        self.steps = 0;
    }
}

impl Default for AnimationClock {
    fn default() -> Self {
        Self::new(60)
    }
}
