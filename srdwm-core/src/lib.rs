//! Platform independent core of the srdwm window manager.
// We deny clippy pedantic lints, primarily to keep code as correct as possible
#![warn(clippy::pedantic)]
// Each of these lints are globally allowed because they otherwise make a lot
// of noise.
#![allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::must_use_candidate,
    clippy::default_trait_access,
    clippy::module_name_repetitions
)]
mod command;
pub mod config;
mod display_action;
mod display_event;
pub mod errors;
mod event_loop;
pub mod events;
mod handlers;
pub mod layouts;
pub mod models;
pub mod platform;
pub mod state;
pub mod utils;

pub use command::Command;
pub use config::Config;
pub use display_action::DisplayAction;
pub use display_event::DisplayEvent;
pub use events::{Event, EventKind, EventSystem};
pub use handlers::{DISPLAY_BOUND_HEIGHT, DISPLAY_BOUND_WIDTH, MIN_RESIZE};
pub use layouts::{LayoutEngine, LayoutKind, PlacementResult, SmartPlacement};
pub use models::dto::ManagerState;
pub use models::{Manager, Mode, Monitor, Window, WindowHandle, Workspace, Xyhw};
pub use platform::{Platform, PlatformKind};
pub use state::State;
pub use utils::modmask_lookup::{Button, ModMask};
