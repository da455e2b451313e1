use crate::models::{MonitorId, WindowHandle, WorkspaceId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Requests understood by the manager. Key bindings, the configuration layer
/// and the platform all drive the core with these.
///
/// Variants without a window act on the focused one.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub enum Command {
    FocusNextWindow,
    FocusPreviousWindow,
    FocusWindow(WindowHandle),
    CloseWindow,
    MinimizeWindow,
    MaximizeWindow,
    ToggleFloating,
    SetFloating {
        window: Option<WindowHandle>,
        floating: bool,
    },
    MoveWindowBy {
        dx: i32,
        dy: i32,
    },
    ResizeWindowBy {
        dw: i32,
        dh: i32,
    },
    SetDecorations {
        window: Option<WindowHandle>,
        enabled: bool,
    },
    SetBorderColor {
        window: Option<WindowHandle>,
        r: u8,
        g: u8,
        b: u8,
    },
    SetBorderWidth {
        window: Option<WindowHandle>,
        width: i32,
    },
    SwitchToWorkspace(WorkspaceId),
    MoveWindowToWorkspace {
        window: Option<WindowHandle>,
        workspace: WorkspaceId,
    },
    AddWorkspace(String),
    RemoveWorkspace(WorkspaceId),
    SetLayout {
        monitor: MonitorId,
        layout: String,
    },
    ConfigureLayout {
        layout: String,
        config: HashMap<String, String>,
    },
    BindKey {
        combo: String,
        command: Box<Command>,
    },
    UnbindKey(String),
    ArrangeWindows,
    Quit,
    /// Passed on to `Config::command_handler`.
    Custom(String),
}
