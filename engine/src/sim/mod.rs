//! The simulated world and the machinery that advances it.
//!
//! # Architecture
//!
//! ```text
//! command source ─► CommandChannel ─► Scheduler ─► dispatch ─► entity capabilities
//!   (own thread)     (single slot)    (tick loop)   (one pass)   (Actuator / Active)
//! ```
//!
//! - **[`entity`]**: identity plus the capability interfaces an entity may implement.
//! - **[`variants`]**: the concrete entities used by the sample world.
//! - **[`world`]**: rooms and the world that owns them. Pure data.
//! - **[`dispatch`]**: one deterministic pass over every room and entity for a tick.
//! - **[`schedule`]**: the tick loop, its pacing and its command handling.
//! - **[`command`]**: command values, sources and the non-blocking handoff channel.

pub mod command;
pub mod dispatch;
pub mod entity;
pub mod schedule;
pub mod variants;
pub mod world;

pub use dispatch::{Behavior, Effect, TickReport, Transition, dispatch, dispatch_entity};
pub use entity::{Active, Actuator, Entity, Id, Readable};
pub use schedule::{Scheduler, SchedulerConfig};
pub use variants::{INDICATOR_PERIOD, Indicator, Item, Switch};
pub use world::{Room, World};
