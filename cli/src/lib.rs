//! Process-facing pieces of the room simulation: command line configuration, the console
//! logger and the interactive prompt used as a command source.

pub mod args;
pub mod logger;
pub mod prompt;

pub use args::Args;
pub use logger::ConsoleLogger;
pub use prompt::PromptSource;
