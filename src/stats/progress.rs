use crate::PROGRESS_INTERVAL;
use std::time::Instant;

/// Tracks and logs progress of a long batch run.
pub struct Progress {
    begin: Instant,
    total: usize,
    complete: usize,
}

impl Progress {
    pub fn new(total: usize) -> Self {
        Self {
            begin: Instant::now(),
            total,
            complete: 0,
        }
    }
    pub fn complete(&self) -> usize {
        self.complete
    }
    pub fn tick(&mut self) {
        self.complete += 1;
        if self.complete % PROGRESS_INTERVAL == 0 || self.complete == self.total {
            let elapsed = self.begin.elapsed();
            log::info!(
                "{:>6}/{} {:>5.1}% {:>8.0?} elapsed {:>8.1}/s",
                self.complete,
                self.total,
                self.complete as f32 / self.total.max(1) as f32 * 100.,
                elapsed,
                self.complete as f32 / elapsed.as_secs_f32().max(f32::EPSILON),
            );
        }
    }
}
