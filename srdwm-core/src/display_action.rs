use crate::models::{WindowHandle, Xyhw};
use serde::{Deserialize, Serialize};

/// These are responses from the window manager.
/// The platform should act on these actions.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub enum DisplayAction {
    /// Apply a new position and size.
    ConfigureWindow(WindowHandle, Xyhw),
    FocusWindow(WindowHandle),
    /// Nicely ask a window if it would please close at its convenience.
    CloseWindow(WindowHandle),
    MinimizeWindow(WindowHandle),
    MaximizeWindow(WindowHandle),
    SetDecorations(WindowHandle, bool),
    SetBorderColor(WindowHandle, u8, u8, u8),
    SetBorderWidth(WindowHandle, i32),
    /// Taken while a window is dragged or resized.
    GrabPointer,
    UngrabPointer,
}
