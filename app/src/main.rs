mod world;

use clap::Parser;
use log::{error, warn};
use roomsim_cli::{Args, ConsoleLogger, prompt};
use roomsim_engine::sim::Scheduler;

fn main() {
    let args = Args::parse();
    if let Err(err) = ConsoleLogger::init(args.log_level) {
        eprintln!("Unable to install logger: {}", err);
    }

    let mut world = match world::sample_world() {
        Ok(world) => world,
        Err(err) => {
            error!("Failed to build world: {}", err);
            std::process::exit(1);
        }
    };

    let config = match args.scheduler_config() {
        Ok(config) => config,
        Err(err) => {
            error!("Invalid configuration: {}", err);
            std::process::exit(1);
        }
    };

    let mut scheduler = match Scheduler::with_shared_source(config, args.command_source()) {
        Ok(scheduler) => scheduler,
        Err(err) => {
            error!("Invalid configuration: {}", err);
            std::process::exit(1);
        }
    };

    let outcome = scheduler.run(&mut world);
    // A prompt is usually still waiting in raw mode and exit skips its cleanup.
    if let Err(err) = prompt::restore_terminal() {
        warn!("Unable to restore terminal: {}", err);
    }
    log::logger().flush();
    std::process::exit(outcome.exit_code());
}
