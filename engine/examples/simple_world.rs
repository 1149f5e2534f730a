//! Runs a tiny world for a fixed number of ticks, printing every state transition.
//!
//! A stop command is scripted to arrive once the source thread gets scheduled, so the run usually
//! ends early with the stop exit status.

use std::time::Duration;

use roomsim_engine::sim::{self, Behavior, command::ScriptedSource};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut world = sim::World::new(vec![
        sim::Room::new("Workshop")
            .with(sim::Item::new(1, "Bench"))
            .with(sim::Switch::new(2, "Wall switch", false))
            .with(sim::Indicator::new(3, "Status lamp", true)),
    ])?;

    let config = sim::SchedulerConfig::default()
        .with_max_ticks(12)
        .with_tick_interval(Duration::from_millis(100));
    let mut scheduler = sim::Scheduler::new(config, ScriptedSource::new([4, 4, 0]))?;

    let outcome = scheduler.run_with(&mut world, |report| {
        for transition in &report.transitions {
            let verb = match transition.behavior {
                Behavior::Actuated => "actuated",
                Behavior::Updated => "updated",
            };
            println!(
                "tick {:>2}: id {} {} {:?} -> {:?}",
                report.tick, transition.id, verb, transition.before, transition.after
            );
        }
    });

    println!("{:?}", outcome);
    std::process::exit(outcome.exit_code());
}
