use crate::sim::command::Command;

/// Exit status reported when a run ends because a stop command arrived.
pub const STOP_EXIT_CODE: i32 = 2;

/// How a scheduler run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every configured tick was dispatched.
    Completed {
        /// Number of dispatch passes performed.
        ticks: u64,
    },
    /// A stop command was consumed at a tick boundary.
    Stopped {
        /// Number of dispatch passes performed before the stop was observed.
        ticks: u64,
        /// The command that ended the run.
        command: Command,
    },
}

impl Outcome {
    /// Number of dispatch passes performed during the run.
    pub fn ticks(&self) -> u64 {
        match self {
            Outcome::Completed { ticks } | Outcome::Stopped { ticks, .. } => *ticks,
        }
    }

    /// Whether the run ended on a stop command.
    pub fn is_stopped(&self) -> bool {
        matches!(self, Outcome::Stopped { .. })
    }

    /// Process exit status for this outcome: `0` on completion, [`STOP_EXIT_CODE`] on stop.
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Completed { .. } => 0,
            Outcome::Stopped { .. } => STOP_EXIT_CODE,
        }
    }
}
