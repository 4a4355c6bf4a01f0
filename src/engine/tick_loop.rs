/// Fixed-rate tick timing
///
/// Menus, input and the skin preview animation advance in fixed ticks
/// (60 per second) no matter how often the window redraws.
use std::time::{Duration, Instant};

/// Ticks per second
const TICK_RATE: u64 = 60;
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE);

/// Maximum ticks run for one frame, so a long stall does not replay
/// seconds of input at once
const MAX_TICKS_PER_FRAME: u32 = 5;

/// Tick timing state
pub struct TickLoop {
    /// Time not yet consumed by ticks
    accumulator: Duration,

    /// Time of last frame
    last_frame_time: Instant,

    /// Total ticks handed out
    tick_count: u64,

    /// While paused (window unfocused) no time accumulates
    paused: bool,
}

impl TickLoop {
    pub fn new() -> Self {
        Self {
            accumulator: Duration::ZERO,
            last_frame_time: Instant::now(),
            tick_count: 0,
            paused: false,
        }
    }

    /// Begin a new frame, returns the number of ticks to run
    pub fn begin_frame(&mut self) -> u32 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame_time);
        self.last_frame_time = now;
        self.advance(elapsed)
    }

    /// Account for `elapsed` time, returns the number of ticks to run
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        if self.paused {
            return 0;
        }

        self.accumulator += elapsed;

        let mut ticks = 0;
        while self.accumulator >= TICK_DURATION && ticks < MAX_TICKS_PER_FRAME {
            self.accumulator -= TICK_DURATION;
            ticks += 1;
        }

        // Drop whatever is left after a stall
        if ticks == MAX_TICKS_PER_FRAME {
            self.accumulator = Duration::ZERO;
        }

        self.tick_count += ticks as u64;
        ticks
    }

    /// Total ticks run so far
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            log::debug!("Tick loop paused");
        }
    }

    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            // Time spent paused must not turn into a burst of ticks
            self.accumulator = Duration::ZERO;
            self.last_frame_time = Instant::now();
            log::debug!("Tick loop resumed");
        }
    }
}

impl Default for TickLoop {
    fn default() -> Self {
        Self::new()
    }
}
