//! End-of-frame pacing
//!
//! Given a fixed per-frame budget and the time a frame's work already
//! consumed, the pacer waits out the remainder using one of five
//! interchangeable strategies. None of them is "correct" on its own: each
//! trades CPU use against how far past the budget the frame overshoots, and
//! the exercises exist to make that trade-off visible. The engine therefore
//! keeps the measured work and frame times observable (see
//! [`FrameTiming`](crate::foundation::time::FrameTiming)) rather than hiding
//! them behind the wait.

use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// How far before the deadline the precise strategy stops sleeping and
/// starts spinning
const PRECISE_SPIN_WINDOW: Duration = Duration::from_micros(500);

/// Sleep-then-spin split used by the hybrid strategy
const HYBRID_SPIN_WINDOW: Duration = Duration::from_millis(1);

/// End-of-frame delay strategy
///
/// Selected at runtime with the number keys 0-4 in the exercises that enable
/// hotkeys; the numbering matches the key that picks each variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PacingStrategy {
    /// Repeatedly sample the clock until the budget has elapsed.
    /// Tightest precision, one core fully occupied for the whole wait.
    BusyWait,

    /// Sleep for the remaining whole milliseconds (floored). The
    /// sub-millisecond remainder is dropped, so the wait undershoots the
    /// remainder by up to 1 ms and the frame may run short of the budget.
    CoarseSleep,

    /// Sleep for the exact remaining duration. Subject to OS scheduler
    /// granularity; typically overshoots by a fraction of a millisecond.
    FineSleep,

    /// Sleep until shortly before the deadline, then spin out the rest.
    /// Low CPU use with near-busy-wait precision.
    PreciseSleep,

    /// Sleep for the remainder minus one millisecond, then busy-wait the
    /// final millisecond.
    Hybrid,
}

impl PacingStrategy {
    /// Number of selectable strategies
    pub const COUNT: u8 = 5;

    /// Map a numeric selector (key 0-4) to a strategy
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::BusyWait),
            1 => Some(Self::CoarseSleep),
            2 => Some(Self::FineSleep),
            3 => Some(Self::PreciseSleep),
            4 => Some(Self::Hybrid),
            _ => None,
        }
    }

    /// The numeric selector for this strategy
    pub fn index(self) -> u8 {
        match self {
            Self::BusyWait => 0,
            Self::CoarseSleep => 1,
            Self::FineSleep => 2,
            Self::PreciseSleep => 3,
            Self::Hybrid => 4,
        }
    }
}

/// Waits out the remainder of each frame's budget
#[derive(Debug, Clone)]
pub struct FramePacer {
    target_budget: Duration,
    strategy: PacingStrategy,
}

impl FramePacer {
    /// Create a pacer with the given per-frame budget
    pub fn new(target_budget: Duration, strategy: PacingStrategy) -> Self {
        Self {
            target_budget,
            strategy,
        }
    }

    /// Create a pacer targeting a frame rate in frames per second
    pub fn from_fps(fps: u32, strategy: PacingStrategy) -> Self {
        let nanos = 1_000_000_000u64 / u64::from(fps.max(1));
        Self::new(Duration::from_nanos(nanos), strategy)
    }

    /// The fixed per-frame budget
    pub fn target_budget(&self) -> Duration {
        self.target_budget
    }

    /// The currently selected strategy
    pub fn strategy(&self) -> PacingStrategy {
        self.strategy
    }

    /// Switch the delay strategy
    pub fn set_strategy(&mut self, strategy: PacingStrategy) {
        self.strategy = strategy;
    }

    /// Block until the frame that started at `frame_start` has consumed its
    /// budget
    ///
    /// Returns immediately when the work already overran the budget. All
    /// strategies measure against the frame start rather than accumulating
    /// their own sleeps, so a strategy that wakes late does not push the
    /// deadline back.
    pub fn pace(&self, frame_start: Instant) {
        let elapsed_work = frame_start.elapsed();
        if elapsed_work >= self.target_budget {
            return;
        }
        let remaining = self.target_budget - elapsed_work;

        match self.strategy {
            PacingStrategy::BusyWait => {
                spin_until(frame_start, self.target_budget);
            }
            PacingStrategy::CoarseSleep => {
                let whole_millis = remaining.as_millis() as u64;
                if whole_millis > 0 {
                    std::thread::sleep(Duration::from_millis(whole_millis));
                }
            }
            PacingStrategy::FineSleep => {
                std::thread::sleep(remaining);
            }
            PacingStrategy::PreciseSleep => {
                if remaining > PRECISE_SPIN_WINDOW {
                    std::thread::sleep(remaining - PRECISE_SPIN_WINDOW);
                }
                spin_until(frame_start, self.target_budget);
            }
            PacingStrategy::Hybrid => {
                if remaining > HYBRID_SPIN_WINDOW {
                    std::thread::sleep(remaining - HYBRID_SPIN_WINDOW);
                }
                spin_until(frame_start, self.target_budget);
            }
        }
    }
}

/// Spin until `deadline` past `frame_start` has elapsed
fn spin_until(frame_start: Instant, deadline: Duration) {
    while frame_start.elapsed() < deadline {
        std::hint::spin_loop();
    }
}
