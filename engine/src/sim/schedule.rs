//! The tick loop.
//!
//! Each iteration performs one full [`dispatch`] pass, sleeps for the configured interval and
//! then checks the command channel exactly once without blocking:
//!
//! ```text
//! arm ─► [ dispatch(tick) ─► tick += 1 ─► sleep ─► poll ] ─► ... until max ticks or stop
//!                                                   │
//!                                                   ├─ nothing: keep ticking
//!                                                   ├─ stop value: return Outcome::Stopped
//!                                                   └─ other: log it, arm the next request
//! ```
//!
//! A stop command therefore only takes effect at a tick boundary, never mid-pass.

use std::sync::Arc;
use std::time::Duration;

use log::info;

use crate::core::time::DEFAULT_TICK_INTERVAL;
use crate::core::{Cadence, Outcome, Tick};
use crate::error::ConfigError;
use crate::sim::command::{
    CommandChannel, CommandSource, DEFAULT_FALLBACK_VALUE, DEFAULT_STOP_VALUE,
};
use crate::sim::dispatch::{TickReport, dispatch};
use crate::sim::world::World;

/// Default upper bound on the number of ticks in a run.
pub const DEFAULT_MAX_TICKS: u64 = 300;

/// Settings for a scheduler run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchedulerConfig {
    /// Upper bound on dispatch passes.
    pub max_ticks: u64,
    /// Wall-clock sleep after each pass.
    pub tick_interval: Duration,
    /// Command value that ends the run.
    pub stop_value: i64,
    /// Command value delivered when acquisition fails.
    pub fallback_value: i64,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            max_ticks: DEFAULT_MAX_TICKS,
            tick_interval: DEFAULT_TICK_INTERVAL,
            stop_value: DEFAULT_STOP_VALUE,
            fallback_value: DEFAULT_FALLBACK_VALUE,
        }
    }
}

impl SchedulerConfig {
    pub fn with_max_ticks(mut self, max_ticks: u64) -> Self {
        self.max_ticks = max_ticks;
        self
    }

    pub fn with_tick_interval(mut self, tick_interval: Duration) -> Self {
        self.tick_interval = tick_interval;
        self
    }

    pub fn with_stop_value(mut self, stop_value: i64) -> Self {
        self.stop_value = stop_value;
        self
    }

    pub fn with_fallback_value(mut self, fallback_value: i64) -> Self {
        self.fallback_value = fallback_value;
        self
    }

    /// Check the configuration for values that would make a run meaningless or ambiguous.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::ZeroTicks`] when `max_ticks` is zero.
    /// - [`ConfigError::AmbiguousStop`] when a failed acquisition would be read as a stop.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_ticks == 0 {
            return Err(ConfigError::ZeroTicks);
        }
        if self.stop_value == self.fallback_value {
            return Err(ConfigError::AmbiguousStop {
                value: self.stop_value,
            });
        }
        Ok(())
    }

    /// The pacing described by this configuration.
    pub fn cadence(&self) -> Cadence {
        Cadence::new(self.tick_interval)
    }
}

/// Drives ticks over a [`World`] and consumes commands between them.
pub struct Scheduler {
    config: SchedulerConfig,
    cadence: Cadence,
    channel: CommandChannel,
    tick: Tick,
}

impl Scheduler {
    /// Create a scheduler pulling commands from `source`.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] reported by [`SchedulerConfig::validate`].
    pub fn new(config: SchedulerConfig, source: impl CommandSource) -> Result<Self, ConfigError> {
        Self::with_shared_source(config, Arc::new(source))
    }

    /// Create a scheduler from an already shared source.
    pub fn with_shared_source(
        config: SchedulerConfig,
        source: Arc<dyn CommandSource>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            cadence: config.cadence(),
            channel: CommandChannel::new(source, config.fallback_value),
            tick: Tick::ZERO,
            config,
        })
    }

    #[inline]
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// The tick counter: the number of dispatch passes performed so far.
    #[inline]
    pub fn tick(&self) -> Tick {
        self.tick
    }

    /// Run until the tick budget is spent or a stop command arrives.
    pub fn run(&mut self, world: &mut World) -> Outcome {
        self.run_with(world, |_| {})
    }

    /// Like [`run`](Self::run), calling `observer` with each pass's report right after the pass
    /// and before the sleep and command check.
    pub fn run_with<F>(&mut self, world: &mut World, mut observer: F) -> Outcome
    where
        F: FnMut(&TickReport),
    {
        info!(
            "Launching simulation: {} rooms, {} entities, up to {} ticks every {:?}",
            world.rooms().len(),
            world.entity_count(),
            self.config.max_ticks,
            self.cadence.interval()
        );
        self.channel.arm();

        while self.tick.get() < self.config.max_ticks {
            let report = dispatch(world, self.tick);
            observer(&report);
            self.tick = self.tick.next();
            self.cadence.wait();

            if let Some(command) = self.channel.poll() {
                info!("Received command {}", command);
                if command.is_stop(self.config.stop_value) {
                    info!("Ending simulation due to stop command after {} ticks", self.tick);
                    return Outcome::Stopped {
                        ticks: self.tick.get(),
                        command,
                    };
                }
                self.channel.arm();
            }
        }

        info!("Simulation completed {} ticks", self.tick);
        Outcome::Completed {
            ticks: self.tick.get(),
        }
    }
}
