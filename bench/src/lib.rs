//! Benchmark utilities for the room simulation.
//!
//! Provides seeded synthetic worlds for measuring dispatch passes and scheduler runs.
//!
//! # Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench -p roomsim_bench
//!
//! # Run a specific group
//! cargo bench -p roomsim_bench -- dispatch
//! ```
//!
//! Results are written to `target/criterion/` with HTML reports.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use roomsim_engine::sim::{Indicator, Item, Room, Switch, World};

/// Shape of a generated world.
#[derive(Debug, Clone, Copy)]
pub struct WorldConfig {
    pub rooms: usize,
    pub entities_per_room: usize,
    /// Share of entities that are switches, in `0.0..=1.0`.
    pub switch_ratio: f64,
    /// Share of entities that are indicators, in `0.0..=1.0`.
    pub indicator_ratio: f64,
    pub seed: u64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            rooms: 10,
            entities_per_room: 100,
            switch_ratio: 0.3,
            indicator_ratio: 0.3,
            seed: 42,
        }
    }
}

impl WorldConfig {
    pub fn entity_count(&self) -> usize {
        self.rooms * self.entities_per_room
    }
}

/// Build a world with a deterministic mix of items, switches and indicators.
pub fn generate_world(config: &WorldConfig) -> World {
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let mut next_id = 1u32;
    let rooms = (0..config.rooms)
        .map(|r| {
            let mut room = Room::new(format!("Room {}", r));
            for _ in 0..config.entities_per_room {
                let id = next_id;
                next_id += 1;
                let roll: f64 = rng.r#gen();
                let state: bool = rng.r#gen();
                if roll < config.switch_ratio {
                    room.push(Box::new(Switch::new(id, format!("Switch {}", id), state)));
                } else if roll < config.switch_ratio + config.indicator_ratio {
                    room.push(Box::new(Indicator::new(id, format!("Indicator {}", id), state)));
                } else {
                    room.push(Box::new(Item::new(id, format!("Item {}", id))));
                }
            }
            room
        })
        .collect();
    // Ids are handed out sequentially, so they are unique.
    World::new(rooms).unwrap_or_else(|err| panic!("generated world is invalid: {}", err))
}

#[cfg(test)]
mod tests {
    use roomsim_engine::core::Tick;
    use roomsim_engine::sim::dispatch;

    use super::{WorldConfig, generate_world};

    #[test]
    fn generated_world_has_requested_shape() {
        let config = WorldConfig {
            rooms: 3,
            entities_per_room: 7,
            ..Default::default()
        };
        let world = generate_world(&config);
        assert_eq!(world.rooms().len(), 3);
        assert_eq!(world.entity_count(), config.entity_count());
    }

    #[test]
    fn same_seed_same_world() {
        let config = WorldConfig::default();
        let mut a = generate_world(&config);
        let mut b = generate_world(&config);
        assert_eq!(dispatch(&mut a, Tick::ZERO), dispatch(&mut b, Tick::ZERO));
    }
}
