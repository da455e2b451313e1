//! Objects (such as windows) managed by the core.
mod focus_manager;
mod manager;
mod mode;
mod monitor;
mod window;
mod workspace;
mod xyhw;

pub mod dto;

pub use focus_manager::FocusManager;
pub use manager::Manager;
pub use mode::{Mode, ParseEdgeError, ResizeEdge, Session};
pub use monitor::Monitor;
pub use window::{ParseHandleError, Window, WindowHandle};
pub use workspace::Workspace;
pub use xyhw::Xyhw;

pub type MonitorId = i32;
/// Workspace ids start at 1, 0 means "no workspace".
pub type WorkspaceId = i32;
