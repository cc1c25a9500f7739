use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

/// Tracks sweep progress and cancellation across threads.
///
/// The frame counters let a monitor display `done/total` while a sweep
/// runs; `done` only ever increases within a generation, one step per
/// completed frame. Advancing the generation signals the driver to stop —
/// the driver checks between frames, so a cancelled sweep still finishes
/// the frame it is on and never emits a torn image.
#[derive(Debug)]
pub struct SweepProgress {
    generation: AtomicU64,
    frames_done: AtomicUsize,
    frames_total: AtomicUsize,
}

impl SweepProgress {
    pub fn new() -> Self {
        Self {
            generation: AtomicU64::new(0),
            frames_done: AtomicUsize::new(0),
            frames_total: AtomicUsize::new(0),
        }
    }

    /// Begin a sweep of `total` frames. Resets the counters and returns
    /// the generation the sweep should watch for cancellation.
    pub fn start(&self, total: usize) -> u64 {
        self.frames_total.store(total, Ordering::Relaxed);
        self.frames_done.store(0, Ordering::Relaxed);
        self.generation.load(Ordering::SeqCst)
    }

    /// Cancel the sweep observing the current generation.
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    /// Whether the generation snapshot from [`start`](Self::start) is stale.
    pub fn is_cancelled(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) != generation
    }

    /// Record one completed frame.
    pub fn frame_done(&self) {
        self.frames_done.fetch_add(1, Ordering::Relaxed);
    }

    /// Read the current progress as `(done, total)`.
    pub fn progress(&self) -> (usize, usize) {
        (
            self.frames_done.load(Ordering::Relaxed),
            self.frames_total.load(Ordering::Relaxed),
        )
    }
}

impl Default for SweepProgress {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_track_frames() {
        let progress = SweepProgress::new();
        let generation = progress.start(3);
        assert_eq!(progress.progress(), (0, 3));
        progress.frame_done();
        progress.frame_done();
        assert_eq!(progress.progress(), (2, 3));
        assert!(!progress.is_cancelled(generation));
    }

    #[test]
    fn cancel_advances_generation() {
        let progress = SweepProgress::new();
        let generation = progress.start(10);
        progress.cancel();
        assert!(progress.is_cancelled(generation));
        // A new sweep started after the cancel observes the new generation.
        let next = progress.start(10);
        assert!(!progress.is_cancelled(next));
    }

    #[test]
    fn start_resets_counters() {
        let progress = SweepProgress::new();
        progress.start(5);
        progress.frame_done();
        progress.start(7);
        assert_eq!(progress.progress(), (0, 7));
    }
}
