use std::{
    thread::sleep,
    time::{Duration, Instant},
};

/// Keeps the render loop at or below a fixed frame rate.
///
/// `delay` sleeps away whatever is left of the frame budget, so the budget
/// is a lower bound on the frame period, not a deadline.
pub struct FpsLimiter {
    frame_budget: Duration,
    last_frame: Instant,
    smoothed_frametime: f64,
}

impl FpsLimiter {
    const SMOOTHING: f64 = 0.1;

    pub fn new(max_fps: f64) -> Self {
        Self {
            frame_budget: Duration::from_secs_f64(1. / max_fps),
            last_frame: Instant::now(),
            smoothed_frametime: 1. / max_fps,
        }
    }

    /// Smoothed frame rate actually achieved.
    pub fn fps(&self) -> f64 {
        1. / self.smoothed_frametime
    }

    /// Suspend until the current frame has used up its budget.
    pub fn delay(&mut self) {
        let elapsed = self.last_frame.elapsed();
        if self.frame_budget > elapsed {
            sleep(self.frame_budget - elapsed);
        }

        let frametime = self.last_frame.elapsed().as_secs_f64();
        self.smoothed_frametime += (frametime - self.smoothed_frametime) * Self::SMOOTHING;
        self.last_frame = Instant::now();
    }
}
