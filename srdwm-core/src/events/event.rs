use crate::models::{MonitorId, WindowHandle};
use crate::utils::modmask_lookup::{Button, ModMask};
use serde::{Deserialize, Serialize};

/// The category an event is dispatched under.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    WindowCreated,
    WindowDestroyed,
    WindowMoved,
    WindowResized,
    WindowFocused,
    WindowUnfocused,
    WindowMinimized,
    WindowMaximized,
    WindowRestored,
    MonitorAdded,
    MonitorRemoved,
    MonitorChanged,
    KeyPressed,
    KeyReleased,
    MouseMoved,
    MousePressed,
    MouseReleased,
    MouseWheel,
    Custom,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub enum Event {
    WindowCreated(WindowHandle),
    WindowDestroyed(WindowHandle),
    WindowMoved {
        handle: WindowHandle,
        x: i32,
        y: i32,
    },
    WindowResized {
        handle: WindowHandle,
        width: i32,
        height: i32,
    },
    WindowFocused(WindowHandle),
    WindowUnfocused(WindowHandle),
    WindowMinimized(WindowHandle),
    WindowMaximized(WindowHandle),
    WindowRestored(WindowHandle),
    MonitorAdded(MonitorId),
    MonitorRemoved(MonitorId),
    MonitorChanged(MonitorId),
    KeyPressed {
        keycode: u32,
        modifiers: ModMask,
    },
    KeyReleased {
        keycode: u32,
        modifiers: ModMask,
    },
    MouseMoved {
        x: i32,
        y: i32,
    },
    MousePressed {
        x: i32,
        y: i32,
        button: Button,
        modifiers: ModMask,
    },
    MouseReleased {
        x: i32,
        y: i32,
        button: Button,
        modifiers: ModMask,
    },
    MouseWheel {
        x: i32,
        y: i32,
        delta: i32,
    },
    Custom(String),
}

impl Event {
    #[must_use]
    pub const fn kind(&self) -> EventKind {
        match self {
            Self::WindowCreated(_) => EventKind::WindowCreated,
            Self::WindowDestroyed(_) => EventKind::WindowDestroyed,
            Self::WindowMoved { .. } => EventKind::WindowMoved,
            Self::WindowResized { .. } => EventKind::WindowResized,
            Self::WindowFocused(_) => EventKind::WindowFocused,
            Self::WindowUnfocused(_) => EventKind::WindowUnfocused,
            Self::WindowMinimized(_) => EventKind::WindowMinimized,
            Self::WindowMaximized(_) => EventKind::WindowMaximized,
            Self::WindowRestored(_) => EventKind::WindowRestored,
            Self::MonitorAdded(_) => EventKind::MonitorAdded,
            Self::MonitorRemoved(_) => EventKind::MonitorRemoved,
            Self::MonitorChanged(_) => EventKind::MonitorChanged,
            Self::KeyPressed { .. } => EventKind::KeyPressed,
            Self::KeyReleased { .. } => EventKind::KeyReleased,
            Self::MouseMoved { .. } => EventKind::MouseMoved,
            Self::MousePressed { .. } => EventKind::MousePressed,
            Self::MouseReleased { .. } => EventKind::MouseReleased,
            Self::MouseWheel { .. } => EventKind::MouseWheel,
            Self::Custom(_) => EventKind::Custom,
        }
    }

    /// The window the event is about, if any.
    #[must_use]
    pub const fn window(&self) -> Option<WindowHandle> {
        match self {
            Self::WindowCreated(handle)
            | Self::WindowDestroyed(handle)
            | Self::WindowMoved { handle, .. }
            | Self::WindowResized { handle, .. }
            | Self::WindowFocused(handle)
            | Self::WindowUnfocused(handle)
            | Self::WindowMinimized(handle)
            | Self::WindowMaximized(handle)
            | Self::WindowRestored(handle) => Some(*handle),
            _ => None,
        }
    }
}
