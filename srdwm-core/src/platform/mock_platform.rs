use super::{Platform, PlatformKind};
use crate::models::{Monitor, Window, WindowHandle, Xyhw};
use crate::DisplayEvent;
use std::collections::{HashMap, VecDeque};

/// Records what the core asked for instead of talking to a backend.
#[derive(Debug, Clone, Default)]
pub struct MockPlatform {
    pub monitors: Vec<Monitor>,
    /// Batches returned by successive `poll_events` calls. Polling an empty
    /// queue reports the backend as closed.
    pub pending: VecDeque<Vec<DisplayEvent>>,
    pub geometry: HashMap<WindowHandle, Xyhw>,
    pub decorations: HashMap<WindowHandle, bool>,
    pub borders: HashMap<WindowHandle, (i32, (u8, u8, u8))>,
    pub titles: HashMap<WindowHandle, String>,
    pub focused: Option<WindowHandle>,
    pub closed: Vec<WindowHandle>,
    pub minimized: Vec<WindowHandle>,
    pub maximized: Vec<WindowHandle>,
    pub keyboard_grabbed: bool,
    pub pointer_grabbed: bool,
    pub polls: usize,
    next_handle: i32,
}

impl MockPlatform {
    pub fn with_monitors(monitors: Vec<Monitor>) -> Self {
        Self {
            monitors,
            next_handle: 1000,
            ..Default::default()
        }
    }
}

impl Platform for MockPlatform {
    fn poll_events(&mut self) -> Option<Vec<DisplayEvent>> {
        self.polls += 1;
        self.pending.pop_front()
    }

    fn create_window(&mut self, title: &str, geometry: Xyhw) -> Option<Window> {
        self.next_handle += 1;
        let handle = WindowHandle(self.next_handle);
        self.geometry.insert(handle, geometry);
        self.titles.insert(handle, title.to_owned());
        let mut window = Window::new(handle, title);
        window.set_geometry(geometry);
        Some(window)
    }

    fn destroy_window(&mut self, handle: WindowHandle) {
        self.geometry.remove(&handle);
    }

    fn set_window_position(&mut self, handle: WindowHandle, x: i32, y: i32) {
        let entry = self.geometry.entry(handle).or_default();
        entry.set_x(x);
        entry.set_y(y);
    }

    fn set_window_size(&mut self, handle: WindowHandle, width: i32, height: i32) {
        let entry = self.geometry.entry(handle).or_default();
        entry.set_w(width);
        entry.set_h(height);
    }

    fn set_window_title(&mut self, handle: WindowHandle, title: &str) {
        self.titles.insert(handle, title.to_owned());
    }

    fn focus_window(&mut self, handle: WindowHandle) {
        self.focused = Some(handle);
    }

    fn minimize_window(&mut self, handle: WindowHandle) {
        self.minimized.push(handle);
    }

    fn maximize_window(&mut self, handle: WindowHandle) {
        self.maximized.push(handle);
    }

    fn close_window(&mut self, handle: WindowHandle) {
        self.closed.push(handle);
    }

    fn set_window_decorations(&mut self, handle: WindowHandle, enabled: bool) {
        self.decorations.insert(handle, enabled);
    }

    fn set_window_border_color(&mut self, handle: WindowHandle, r: u8, g: u8, b: u8) {
        self.borders.entry(handle).or_default().1 = (r, g, b);
    }

    fn set_window_border_width(&mut self, handle: WindowHandle, width: i32) {
        self.borders.entry(handle).or_default().0 = width;
    }

    fn get_window_decorations(&self, handle: WindowHandle) -> bool {
        self.decorations.get(&handle).copied().unwrap_or(true)
    }

    fn get_monitors(&self) -> Vec<Monitor> {
        self.monitors.clone()
    }

    fn grab_keyboard(&mut self) {
        self.keyboard_grabbed = true;
    }

    fn ungrab_keyboard(&mut self) {
        self.keyboard_grabbed = false;
    }

    fn grab_pointer(&mut self) {
        self.pointer_grabbed = true;
    }

    fn ungrab_pointer(&mut self) {
        self.pointer_grabbed = false;
    }

    fn platform_name(&self) -> String {
        "mock".to_owned()
    }

    fn kind(&self) -> PlatformKind {
        PlatformKind::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DisplayAction;

    #[test]
    fn platform_kinds_are_mutually_exclusive() {
        let subject = MockPlatform::default();
        let flags = [
            subject.is_x11(),
            subject.is_wayland(),
            subject.is_windows(),
            subject.is_macos(),
        ];
        assert!(flags.iter().filter(|f| **f).count() <= 1);
    }

    #[test]
    fn configure_action_sets_position_and_size() {
        let mut subject = MockPlatform::default();
        let handle = WindowHandle(3);
        subject.execute_action(DisplayAction::ConfigureWindow(
            handle,
            Xyhw::new(1, 2, 30, 40),
        ));
        assert_eq!(subject.geometry.get(&handle), Some(&Xyhw::new(1, 2, 30, 40)));
    }

    #[test]
    fn primary_monitor_defaults_without_monitors() {
        let subject = MockPlatform::default();
        assert_eq!(subject.get_primary_monitor(), Monitor::default());
        let subject = MockPlatform::with_monitors(vec![Monitor::new(4, 0, 0, 800, 600)]);
        assert_eq!(subject.get_primary_monitor().id, 4);
    }
}
