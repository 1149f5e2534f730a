//! Concrete entities used to populate worlds.

use crate::core::Tick;
use crate::sim::entity::{Active, Actuator, Entity, Id, Readable};

/// Ticks between flips of an [`Indicator`].
pub const INDICATOR_PERIOD: u64 = 5;

/// An entity with identity and description only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    id: Id,
    description: String,
}

impl Item {
    pub fn new(id: impl Into<Id>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
        }
    }
}

impl Entity for Item {
    fn id(&self) -> Id {
        self.id
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn kind(&self) -> &'static str {
        "Item"
    }
}

/// A toggle switch. Its action flips the state, so two actions restore the original state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Switch {
    item: Item,
    state: bool,
}

impl Switch {
    pub fn new(id: impl Into<Id>, description: impl Into<String>, state: bool) -> Self {
        Self {
            item: Item::new(id, description),
            state,
        }
    }
}

impl Readable for Switch {
    fn state(&self) -> bool {
        self.state
    }
}

impl Actuator for Switch {
    fn action(&mut self) {
        self.state = !self.state;
    }
}

impl Entity for Switch {
    fn id(&self) -> Id {
        self.item.id
    }

    fn description(&self) -> &str {
        &self.item.description
    }

    fn kind(&self) -> &'static str {
        "Switch"
    }

    fn as_readable(&self) -> Option<&dyn Readable> {
        Some(self)
    }

    fn as_actuator(&mut self) -> Option<&mut dyn Actuator> {
        Some(self)
    }
}

/// A periodic indicator (an LED). Flips its state on every tick that is a multiple of
/// [`INDICATOR_PERIOD`] and holds it otherwise, giving a full on/off cycle every two periods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Indicator {
    item: Item,
    state: bool,
}

impl Indicator {
    pub fn new(id: impl Into<Id>, description: impl Into<String>, state: bool) -> Self {
        Self {
            item: Item::new(id, description),
            state,
        }
    }
}

impl Readable for Indicator {
    fn state(&self) -> bool {
        self.state
    }
}

impl Active for Indicator {
    fn update(&mut self, tick: Tick) {
        if tick.is_multiple_of(INDICATOR_PERIOD) {
            log::debug!("{} flips on tick {}", self.item.description, tick);
            self.state = !self.state;
        }
    }
}

impl Entity for Indicator {
    fn id(&self) -> Id {
        self.item.id
    }

    fn description(&self) -> &str {
        &self.item.description
    }

    fn kind(&self) -> &'static str {
        "Indicator"
    }

    fn as_readable(&self) -> Option<&dyn Readable> {
        Some(self)
    }

    fn as_active(&mut self) -> Option<&mut dyn Active> {
        Some(self)
    }
}
