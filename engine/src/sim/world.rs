//! Rooms and the world that owns them.
//!
//! The world is a plain container: an ordered list of rooms, each an ordered list of entities.
//! Its shape is fixed once constructed. Only the entities' own state changes during a run, and
//! only through [`dispatch`](crate::sim::dispatch). Mutable access is handed out as slices so no
//! entity can be inserted or removed after construction.

use std::collections::HashSet;

use crate::error::WorldError;
use crate::sim::entity::{Entity, Id};

/// A named, ordered collection of entities. Order is iteration order.
#[derive(Debug)]
pub struct Room {
    name: String,
    entities: Vec<Box<dyn Entity>>,
}

impl Room {
    /// Create an empty room.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entities: Vec::new(),
        }
    }

    /// Append an entity, builder style.
    pub fn with(mut self, entity: impl Entity + 'static) -> Self {
        self.entities.push(Box::new(entity));
        self
    }

    /// Append an already boxed entity.
    pub fn push(&mut self, entity: Box<dyn Entity>) -> &mut Self {
        self.entities.push(entity);
        self
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn entities(&self) -> &[Box<dyn Entity>] {
        &self.entities
    }

    #[inline]
    pub fn entities_mut(&mut self) -> &mut [Box<dyn Entity>] {
        &mut self.entities
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

/// The ordered set of rooms for one run.
#[derive(Debug)]
pub struct World {
    rooms: Vec<Room>,
}

impl World {
    /// Assemble a world from rooms in declaration order.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::DuplicateEntityId`] when two entities anywhere in the world share an
    /// identifier.
    pub fn new(rooms: Vec<Room>) -> Result<Self, WorldError> {
        let mut seen = HashSet::new();
        for entity in rooms.iter().flat_map(|room| room.entities.iter()) {
            if !seen.insert(entity.id()) {
                return Err(WorldError::DuplicateEntityId(entity.id()));
            }
        }
        Ok(Self { rooms })
    }

    #[inline]
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    #[inline]
    pub fn rooms_mut(&mut self) -> &mut [Room] {
        &mut self.rooms
    }

    /// Total number of entities across all rooms.
    pub fn entity_count(&self) -> usize {
        self.rooms.iter().map(Room::len).sum()
    }

    /// Find an entity by id.
    pub fn entity(&self, id: Id) -> Option<&dyn Entity> {
        self.rooms
            .iter()
            .flat_map(|room| room.entities.iter())
            .find(|entity| entity.id() == id)
            .map(|entity| entity.as_ref())
    }
}
