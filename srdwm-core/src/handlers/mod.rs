pub mod command_handler;
pub mod display_event_handler;
mod focus_handler;
mod keybind_handler;
mod mouse_handler;
mod window_handler;
mod window_move_handler;
mod window_resize_handler;
mod workspace_handler;

use super::command::Command;
use super::config::Config;
use super::models::{Manager, Mode, Window, WindowHandle, Workspace};
use super::DisplayEvent;
use crate::state::State;

/// Placeholder display bounds that drags and resizes are clamped to.
pub const DISPLAY_BOUND_WIDTH: i32 = 1920;
pub const DISPLAY_BOUND_HEIGHT: i32 = 1080;
/// Smallest width and height a resize can produce.
pub const MIN_RESIZE: i32 = 100;

#[cfg(test)]
pub(crate) type TestManager =
    Manager<crate::config::tests::TestConfig, crate::platform::MockPlatform>;
