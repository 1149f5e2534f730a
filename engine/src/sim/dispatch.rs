//! A single dispatch pass over the world.
//!
//! For each tick every room is visited in declaration order and every entity within a room in
//! declaration order. Each entity is classified by capability with a strict precedence:
//!
//! 1. [`Actuator`](crate::sim::entity::Actuator): the action is invoked.
//! 2. [`Active`](crate::sim::entity::Active): the update is invoked with the tick.
//! 3. Neither: the entity is only enumerated.
//!
//! An entity implementing both capabilities only ever has its action invoked. The readable state
//! is sampled before and after the behavior and recorded as a [`Transition`]. An entity with
//! behavior but no readable state is a contract violation; it is logged and the behavior still
//! runs with the state samples left empty.

use log::{debug, info, warn};

use crate::core::Tick;
use crate::sim::entity::{Entity, Id};
use crate::sim::world::World;

/// Which capability the dispatcher invoked for an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Behavior {
    /// The entity's action ran.
    Actuated,
    /// The entity's time-driven update ran.
    Updated,
}

/// What [`dispatch_entity`] did to a single entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Effect {
    pub behavior: Behavior,
    /// Readable state before the behavior, `None` when the entity is not readable.
    pub before: Option<bool>,
    /// Readable state after the behavior, `None` when the entity is not readable.
    pub after: Option<bool>,
}

/// The observable result of dispatching one entity within a pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// Index of the room the entity lives in.
    pub room: usize,
    pub id: Id,
    pub behavior: Behavior,
    /// Readable state before the behavior, `None` when the entity is not readable.
    pub before: Option<bool>,
    /// Readable state after the behavior, `None` when the entity is not readable.
    pub after: Option<bool>,
}

impl Transition {
    /// Whether the behavior changed the readable state.
    pub fn changed(&self) -> bool {
        self.before != self.after
    }
}

/// Everything that happened during one dispatch pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickReport {
    pub tick: Tick,
    /// Transitions in dispatch order.
    pub transitions: Vec<Transition>,
}

impl TickReport {
    /// The transition recorded for an entity this tick, if it had any behavior.
    pub fn transition(&self, id: Id) -> Option<&Transition> {
        self.transitions.iter().find(|t| t.id == id)
    }
}

/// Run one dispatch pass over the whole world for `tick`.
pub fn dispatch(world: &mut World, tick: Tick) -> TickReport {
    info!("==== TICK {} ====", tick);
    let mut transitions = Vec::new();
    for (index, room) in world.rooms_mut().iter_mut().enumerate() {
        info!("==== Room {} ====", room.name());
        for entity in room.entities() {
            debug!(
                "id {} is {} and is {}",
                entity.id(),
                entity.description(),
                entity.kind()
            );
        }
        for entity in room.entities_mut() {
            if let Some(effect) = dispatch_entity(&mut **entity, tick) {
                transitions.push(Transition {
                    room: index,
                    id: entity.id(),
                    behavior: effect.behavior,
                    before: effect.before,
                    after: effect.after,
                });
            }
        }
    }
    TickReport { tick, transitions }
}

/// Dispatch a single entity. Returns the behavior invoked together with the state sampled before
/// and after it, or `None` when the entity has no behavior capability.
pub fn dispatch_entity(entity: &mut dyn Entity, tick: Tick) -> Option<Effect> {
    let behavior = if entity.as_actuator().is_some() {
        Behavior::Actuated
    } else if entity.as_active().is_some() {
        Behavior::Updated
    } else {
        return None;
    };

    let before = sample(entity);
    match behavior {
        Behavior::Actuated => {
            if let Some(actuator) = entity.as_actuator() {
                actuator.action();
            }
        }
        Behavior::Updated => {
            if let Some(active) = entity.as_active() {
                active.update(tick);
            }
        }
    }
    let after = sample(entity);
    Some(Effect {
        behavior,
        before,
        after,
    })
}

/// Read and report an entity's state.
fn sample(entity: &dyn Entity) -> Option<bool> {
    match entity.observe() {
        Some(state) => {
            info!("{} has state: {}", entity.description(), state);
            Some(state)
        }
        None => {
            warn!(
                "id {} ({}) has behavior but no readable state",
                entity.id(),
                entity.description()
            );
            None
        }
    }
}
