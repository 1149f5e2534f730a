//! A discrete-tick room simulation engine.
//!
//! The engine owns a [`World`](sim::World) of rooms, each holding entities that may expose
//! behavior capabilities. A [`Scheduler`](sim::Scheduler) advances time in fixed ticks, running
//! one dispatch pass over the whole world per tick, and consumes out-of-band integer commands
//! delivered through a single-slot [`CommandChannel`](sim::command::CommandChannel) between
//! ticks.
//!
//! ```rust,ignore
//! use roomsim_engine::sim::{self, command::ScriptedSource};
//!
//! let mut world = sim::World::new(vec![
//!     sim::Room::new("Machine Room")
//!         .with(sim::Switch::new(4, "Switch number one", true))
//!         .with(sim::Indicator::new(5, "FIRST LED", false)),
//! ])?;
//!
//! let config = sim::SchedulerConfig::default().with_max_ticks(10);
//! let mut scheduler = sim::Scheduler::new(config, ScriptedSource::new([7, 0]))?;
//! let outcome = scheduler.run(&mut world);
//! std::process::exit(outcome.exit_code());
//! ```

pub mod core;
pub mod error;
pub mod sim;

pub use error::{AcquireError, ConfigError, WorldError};
