//! Frame timing state
//!
//! Tracks the three timestamps each frame is carved into (frame start, end of
//! simulation/render-submit work, frame end after pacing) and the durations
//! derived from them. The work/frame split stays observable because the whole
//! point of the pacing exercise is comparing how much of the frame budget
//! each delay strategy gives back.

use std::time::{Duration, Instant};

/// Per-frame timing state
///
/// Updated by the engine loop: [`mark_work_end`](Self::mark_work_end) once
/// input, simulation, and render submission are done, then
/// [`finish_frame`](Self::finish_frame) after the pacer has run. Delta
/// seconds always describes the *previous* frame's total duration, so motion
/// scaling lags one frame behind the measurement.
#[derive(Debug, Clone)]
pub struct FrameTiming {
    frame_start: Instant,
    elapsed_work: Duration,
    elapsed_frame: Duration,
    delta_seconds: f32,
    frame_count: u64,
}

impl Default for FrameTiming {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameTiming {
    /// Create timing state anchored at the current instant
    ///
    /// The first frame's delta is zero; entities do not move until a full
    /// frame has been measured.
    pub fn new() -> Self {
        Self {
            frame_start: Instant::now(),
            elapsed_work: Duration::ZERO,
            elapsed_frame: Duration::ZERO,
            delta_seconds: 0.0,
            frame_count: 0,
        }
    }

    /// Timestamp of the current frame's start
    pub fn frame_start(&self) -> Instant {
        self.frame_start
    }

    /// Record the end of the frame's work (before pacing)
    pub fn mark_work_end(&mut self) {
        self.elapsed_work = self.frame_start.elapsed();
    }

    /// Close out the frame after pacing
    ///
    /// Computes the total frame duration, derives delta seconds from it, and
    /// rolls the frame-start anchor forward so the pacing wait of this frame
    /// is part of the next frame's delta.
    pub fn finish_frame(&mut self) {
        let frame_end = Instant::now();
        self.elapsed_frame = frame_end - self.frame_start;
        self.delta_seconds = self.elapsed_frame.as_secs_f32();
        self.frame_start = frame_end;
        self.frame_count += 1;
    }

    /// Time spent on work (input + simulation + render submit) this frame
    pub fn elapsed_work(&self) -> Duration {
        self.elapsed_work
    }

    /// Total duration of the last completed frame
    pub fn elapsed_frame(&self) -> Duration {
        self.elapsed_frame
    }

    /// Work time in milliseconds, for overlays
    pub fn work_millis(&self) -> f32 {
        self.elapsed_work.as_secs_f32() * 1000.0
    }

    /// Frame time in milliseconds, for overlays
    pub fn frame_millis(&self) -> f32 {
        self.elapsed_frame.as_secs_f32() * 1000.0
    }

    /// Last completed frame's duration in seconds
    ///
    /// Used to scale all per-frame motion so speed is frame-rate independent.
    pub fn delta_seconds(&self) -> f32 {
        self.delta_seconds
    }

    /// Number of completed frames
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_first_frame_delta_is_zero() {
        let timing = FrameTiming::new();
        assert_eq!(timing.delta_seconds(), 0.0);
        assert_eq!(timing.frame_count(), 0);
    }

    #[test]
    fn test_finish_frame_advances_count_and_delta() {
        let mut timing = FrameTiming::new();
        thread::sleep(Duration::from_millis(2));
        timing.mark_work_end();
        timing.finish_frame();

        assert_eq!(timing.frame_count(), 1);
        assert!(timing.delta_seconds() > 0.0);
        assert!(timing.elapsed_frame() >= timing.elapsed_work());
    }

    #[test]
    fn test_work_is_measured_from_frame_start() {
        let mut timing = FrameTiming::new();
        thread::sleep(Duration::from_millis(2));
        timing.mark_work_end();
        assert!(timing.elapsed_work() >= Duration::from_millis(2));
    }
}
