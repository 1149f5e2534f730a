pub mod runner;
pub mod time;

pub use runner::Outcome;
pub use time::{Cadence, Tick};
