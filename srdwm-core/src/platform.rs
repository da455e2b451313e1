//! The seam between the core and a native windowing backend.
#[cfg(test)]
mod mock_platform;

use crate::display_action::DisplayAction;
use crate::models::{Monitor, Window, WindowHandle, Xyhw};
use crate::DisplayEvent;
use serde::{Deserialize, Serialize};

#[cfg(test)]
pub use self::mock_platform::MockPlatform;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlatformKind {
    X11,
    Wayland,
    Windows,
    MacOs,
    /// Headless backends, e.g. in tests.
    Other,
}

pub trait Platform {
    /// Raw events since the last call. `None` once the backend has shut down.
    fn poll_events(&mut self) -> Option<Vec<DisplayEvent>>;

    fn create_window(&mut self, title: &str, geometry: Xyhw) -> Option<Window>;
    fn destroy_window(&mut self, handle: WindowHandle);
    fn set_window_position(&mut self, handle: WindowHandle, x: i32, y: i32);
    fn set_window_size(&mut self, handle: WindowHandle, width: i32, height: i32);
    fn set_window_title(&mut self, handle: WindowHandle, title: &str);
    fn focus_window(&mut self, handle: WindowHandle);
    fn minimize_window(&mut self, handle: WindowHandle);
    fn maximize_window(&mut self, handle: WindowHandle);
    fn close_window(&mut self, handle: WindowHandle);

    fn set_window_decorations(&mut self, handle: WindowHandle, enabled: bool);
    fn set_window_border_color(&mut self, handle: WindowHandle, r: u8, g: u8, b: u8);
    fn set_window_border_width(&mut self, handle: WindowHandle, width: i32);
    fn get_window_decorations(&self, handle: WindowHandle) -> bool;

    fn get_monitors(&self) -> Vec<Monitor>;

    fn get_primary_monitor(&self) -> Monitor {
        self.get_monitors().into_iter().next().unwrap_or_default()
    }

    fn grab_keyboard(&mut self);
    fn ungrab_keyboard(&mut self);
    fn grab_pointer(&mut self);
    fn ungrab_pointer(&mut self);

    fn platform_name(&self) -> String;
    fn kind(&self) -> PlatformKind;

    fn is_x11(&self) -> bool {
        self.kind() == PlatformKind::X11
    }
    fn is_wayland(&self) -> bool {
        self.kind() == PlatformKind::Wayland
    }
    fn is_windows(&self) -> bool {
        self.kind() == PlatformKind::Windows
    }
    fn is_macos(&self) -> bool {
        self.kind() == PlatformKind::MacOs
    }

    /// Pushes the managed geometry to the backend.
    fn update_windows(&mut self, windows: &[&Window]) {
        for window in windows {
            self.set_window_position(window.handle, window.x(), window.y());
            self.set_window_size(window.handle, window.width(), window.height());
        }
    }

    fn execute_action(&mut self, act: DisplayAction) {
        match act {
            DisplayAction::ConfigureWindow(handle, xyhw) => {
                self.set_window_position(handle, xyhw.x(), xyhw.y());
                self.set_window_size(handle, xyhw.w(), xyhw.h());
            }
            DisplayAction::FocusWindow(handle) => self.focus_window(handle),
            DisplayAction::CloseWindow(handle) => self.close_window(handle),
            DisplayAction::MinimizeWindow(handle) => self.minimize_window(handle),
            DisplayAction::MaximizeWindow(handle) => self.maximize_window(handle),
            DisplayAction::SetDecorations(handle, enabled) => {
                self.set_window_decorations(handle, enabled);
            }
            DisplayAction::SetBorderColor(handle, r, g, b) => {
                self.set_window_border_color(handle, r, g, b);
            }
            DisplayAction::SetBorderWidth(handle, width) => {
                self.set_window_border_width(handle, width);
            }
            DisplayAction::GrabPointer => self.grab_pointer(),
            DisplayAction::UngrabPointer => self.ungrab_pointer(),
        }
    }

    fn flush(&mut self) {}
}
