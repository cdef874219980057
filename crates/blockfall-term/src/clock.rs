use std::{thread, time::Duration};

use blockfall_engine::StepClock;

/// Sleeps for a fixed duration on every step.
#[derive(Debug, Clone, Copy)]
pub struct SleepClock {
    step: Duration,
}

impl SleepClock {
    #[must_use]
    pub const fn new(step: Duration) -> Self {
        Self { step }
    }

    #[must_use]
    pub const fn from_millis(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis))
    }

    #[must_use]
    pub const fn step(&self) -> Duration {
        self.step
    }
}

impl StepClock for SleepClock {
    fn wait_step(&mut self) {
        thread::sleep(self.step);
    }
}

/// Never waits. Steps run back to back.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unpaced;

impl StepClock for Unpaced {
    fn wait_step(&mut self) {}
}
