use std::fmt;
use std::time::Duration;

/// Pacing used when nothing else is configured. Slow enough for a human to follow the output.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(2);

/// A discrete simulation step. Ticks start at [`Tick::ZERO`] and only ever move forward one at a
/// time via [`Tick::next`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Tick(u64);

impl Tick {
    /// The first tick of every run.
    pub const ZERO: Self = Self(0);

    /// Construct a tick from a raw counter value.
    #[inline]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Get the raw counter value.
    #[inline]
    pub const fn get(&self) -> u64 {
        self.0
    }

    /// Get the tick following this one.
    #[inline]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }

    /// Whether this tick lands on a multiple of `period`. A zero period never matches.
    #[inline]
    pub const fn is_multiple_of(&self, period: u64) -> bool {
        period != 0 && self.0 % period == 0
    }
}

impl From<u64> for Tick {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Wall-clock pacing between ticks. Simulation time only advances through [`Tick`]; the cadence
/// decides how long the scheduler sleeps between passes, so tests can run with a zero interval
/// while a human-facing run uses something observable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cadence {
    interval: Duration,
}

impl Cadence {
    /// Construct a cadence sleeping `interval` once per tick.
    pub const fn new(interval: Duration) -> Self {
        Self { interval }
    }

    /// A cadence that never sleeps.
    pub const fn immediate() -> Self {
        Self::new(Duration::ZERO)
    }

    /// The configured sleep between ticks.
    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Block the calling thread for one interval.
    pub fn wait(&self) {
        if !self.interval.is_zero() {
            std::thread::sleep(self.interval);
        }
    }
}

impl Default for Cadence {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_INTERVAL)
    }
}
