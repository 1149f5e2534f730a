//! Entity identity and capability interfaces.
//!
//! Every entity has an immutable [`Id`] and description. Behavior is opt-in through three
//! independent capabilities:
//!
//! - **[`Readable`]**: exposes a boolean state without side effects.
//! - **[`Active`]**: time-driven; receives the current tick and may change its own state.
//! - **[`Actuator`]**: dispatch-driven; a zero-argument action that changes its own state.
//!
//! An entity advertises a capability by overriding the matching query method on [`Entity`]
//! (`as_readable`, `as_active`, `as_actuator`). The defaults return `None`, so a plain entity
//! only needs to provide its identity:
//!
//! ```rust,ignore
//! struct Lever { id: Id, pulled: bool }
//!
//! impl Entity for Lever {
//!     fn id(&self) -> Id { self.id }
//!     fn description(&self) -> &str { "Lever" }
//!     fn kind(&self) -> &'static str { "Lever" }
//!     fn as_readable(&self) -> Option<&dyn Readable> { Some(self) }
//!     fn as_actuator(&mut self) -> Option<&mut dyn Actuator> { Some(self) }
//! }
//! ```

use std::fmt;

use crate::core::Tick;

/// An entity identifier. Unique across a whole world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Id(u32);

impl Id {
    /// Create a new entity identifier.
    #[inline]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Get the raw identifier value.
    #[inline]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl From<u32> for Id {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Exposes a boolean state. Reading must not change anything.
pub trait Readable {
    fn state(&self) -> bool;
}

/// Time-driven behavior. Called once per tick the entity is dispatched as active.
pub trait Active {
    fn update(&mut self, tick: Tick);
}

/// Dispatch-driven behavior. The action takes no input and mutates the entity's own state.
pub trait Actuator {
    fn action(&mut self);
}

/// An identified, described object living in a room.
///
/// Identity is fixed for the lifetime of the entity. Capabilities are discovered through the
/// query methods rather than by inspecting the concrete type.
pub trait Entity {
    /// The identifier of this entity.
    fn id(&self) -> Id;

    /// A human readable description.
    fn description(&self) -> &str;

    /// Short name of the concrete variant, used for descriptive output.
    fn kind(&self) -> &'static str;

    /// The readable-state capability, if implemented.
    fn as_readable(&self) -> Option<&dyn Readable> {
        None
    }

    /// The time-driven capability, if implemented.
    fn as_active(&mut self) -> Option<&mut dyn Active> {
        None
    }

    /// The action capability, if implemented.
    fn as_actuator(&mut self) -> Option<&mut dyn Actuator> {
        None
    }

    /// Read the current state, `None` when the entity is not readable.
    fn observe(&self) -> Option<bool> {
        self.as_readable().map(Readable::state)
    }
}

impl fmt::Debug for dyn Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entity")
            .field("id", &self.id())
            .field("description", &self.description())
            .field("kind", &self.kind())
            .field("state", &self.observe())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::{Entity, Id};

    struct Plain;

    impl Entity for Plain {
        fn id(&self) -> Id {
            Id::new(9)
        }

        fn description(&self) -> &str {
            "Plain"
        }

        fn kind(&self) -> &'static str {
            "Plain"
        }
    }

    #[test]
    fn capabilities_default_to_none() {
        // Given
        let mut entity = Plain;

        // Then
        assert!(entity.as_readable().is_none());
        assert!(entity.as_active().is_none());
        assert!(entity.as_actuator().is_none());
        assert_eq!(entity.observe(), None);
    }

    #[test]
    fn id_display_honors_width() {
        assert_eq!(format!("[{:>3}]", Id::new(4)), "[  4]");
    }

    #[test]
    fn debug_includes_identity() {
        let entity: Box<dyn Entity> = Box::new(Plain);
        let out = format!("{:?}", entity);
        assert!(out.contains("id: Id(9)"));
        assert!(out.contains("Plain"));
    }
}
