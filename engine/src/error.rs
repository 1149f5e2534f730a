//! Error types for world construction, scheduler configuration and command acquisition.

use thiserror::Error;

use crate::sim::entity::Id;

/// Errors raised while assembling a world.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WorldError {
    #[error("entity id {0} is used more than once")]
    DuplicateEntityId(Id),
}

/// Errors raised by an invalid scheduler configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("stop value {value} is also the acquisition fallback value")]
    AmbiguousStop { value: i64 },

    #[error("maximum tick count must be greater than zero")]
    ZeroTicks,
}

/// Errors a command source reports when it cannot produce a value. These never leave the
/// command task: the channel logs them and delivers the configured fallback instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AcquireError {
    #[error("command input was interrupted")]
    Interrupted,

    #[error("command source is closed")]
    Closed,

    #[error("command input failed: {0}")]
    Io(String),
}
