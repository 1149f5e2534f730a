use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use log::LevelFilter;
use roomsim_engine::ConfigError;
use roomsim_engine::sim::SchedulerConfig;
use roomsim_engine::sim::command::{
    CommandSource, DEFAULT_FALLBACK_VALUE, DEFAULT_STOP_VALUE, ScriptedSource,
};
use roomsim_engine::core::time::DEFAULT_TICK_INTERVAL;
use roomsim_engine::sim::schedule::DEFAULT_MAX_TICKS;

use crate::prompt::PromptSource;

const DEFAULT_TICK_MS: u64 = DEFAULT_TICK_INTERVAL.as_millis() as u64;

#[derive(Parser, Debug)]
#[command(name = "roomsim")]
#[command(about = "Run the room simulation, reading commands between ticks")]
pub struct Args {
    /// Maximum number of ticks to run
    #[arg(long, default_value_t = DEFAULT_MAX_TICKS)]
    pub max_ticks: u64,

    /// Milliseconds to wait after each tick (0 = run as fast as possible)
    #[arg(long, default_value_t = DEFAULT_TICK_MS)]
    pub tick_ms: u64,

    /// Command value that stops the simulation
    #[arg(long, default_value_t = DEFAULT_STOP_VALUE, allow_hyphen_values = true)]
    pub stop_value: i64,

    /// Command value delivered when reading a command fails
    #[arg(long, default_value_t = DEFAULT_FALLBACK_VALUE, allow_hyphen_values = true)]
    pub fallback_value: i64,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: LevelFilter,

    /// Comma separated commands to deliver instead of prompting
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub commands: Option<Vec<i64>>,
}

impl Args {
    /// The validated scheduler configuration described by these arguments.
    pub fn scheduler_config(&self) -> Result<SchedulerConfig, ConfigError> {
        let config = SchedulerConfig::default()
            .with_max_ticks(self.max_ticks)
            .with_tick_interval(Duration::from_millis(self.tick_ms))
            .with_stop_value(self.stop_value)
            .with_fallback_value(self.fallback_value);
        config.validate()?;
        Ok(config)
    }

    /// The scripted source when commands were given on the command line, the interactive prompt
    /// otherwise.
    pub fn command_source(&self) -> Arc<dyn CommandSource> {
        match &self.commands {
            Some(values) => Arc::new(ScriptedSource::new(values.iter().copied())),
            None => Arc::new(PromptSource::default()),
        }
    }
}
