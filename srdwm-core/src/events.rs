//! Typed notifications and their synchronous dispatcher.
mod event;
mod event_system;

pub use event::{Event, EventKind};
pub use event_system::{EventHandler, EventSystem, HandlerId};
