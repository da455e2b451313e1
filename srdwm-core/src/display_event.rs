use crate::models::{Monitor, MonitorId, Window, WindowHandle};
use crate::utils::modmask_lookup::{Button, ModMask};
use crate::Command;

/// Raw input reported by the platform.
#[derive(Debug, Clone)]
pub enum DisplayEvent {
    WindowCreate(Window),
    WindowDestroy(WindowHandle),
    /// The platform moved the window itself.
    WindowMoved(WindowHandle, i32, i32),
    WindowResized(WindowHandle, i32, i32),
    WindowTakeFocus(WindowHandle),
    KeyPress(u32, ModMask),
    KeyRelease(u32, ModMask),
    MouseButtonPress(Button, ModMask, i32, i32),
    MouseButtonRelease(Button, ModMask, i32, i32),
    MouseMotion(i32, i32),
    MouseWheel(i32, i32, i32),
    MonitorAdded(Monitor),
    MonitorRemoved(MonitorId),
    MonitorChanged(Monitor),
    SendCommand(Command),
}
