#![allow(clippy::wildcard_imports)]

use super::*;
use crate::display_action::DisplayAction;
use crate::events::Event;

impl State {
    /// Create a `DisplayAction` to cause this window to become focused.
    /// Returns false for unknown windows.
    pub fn focus_window(&mut self, handle: &WindowHandle) -> bool {
        if self.window(handle).is_none() {
            return false;
        }
        let previous = self.focused_handle();
        if !self.focus_manager.push(Some(*handle)) {
            return true;
        }
        tracing::debug!("Focusing window {}", handle);
        if let Some(previous) = previous {
            self.events.emit(Event::WindowUnfocused(previous));
        }
        self.actions.push_back(DisplayAction::FocusWindow(*handle));
        self.events.emit(Event::WindowFocused(*handle));
        true
    }

    /// Drops focus without focusing anything else.
    pub fn unfocus(&mut self) -> bool {
        let Some(previous) = self.focused_handle() else {
            return false;
        };
        self.focus_manager.push(None);
        self.events.emit(Event::WindowUnfocused(previous));
        true
    }

    /// Focuses the window after the focused one, wrapping around.
    /// Without a focused window the first one is picked.
    pub fn focus_next_window(&mut self) -> bool {
        let len = self.windows.len();
        let next = match self.focused_index() {
            Some(index) => (index + 1) % len,
            None => 0,
        };
        self.focus_index(next)
    }

    /// Focuses the window before the focused one, wrapping around.
    /// Without a focused window the last one is picked.
    pub fn focus_previous_window(&mut self) -> bool {
        let len = self.windows.len();
        let previous = match self.focused_index() {
            Some(index) => (index + len - 1) % len,
            None => len.wrapping_sub(1),
        };
        self.focus_index(previous)
    }

    fn focused_index(&self) -> Option<usize> {
        let handle = self.focused_handle()?;
        self.windows.iter().position(|w| w.handle == handle)
    }

    fn focus_index(&mut self, index: usize) -> bool {
        match self.windows.get(index).map(|w| w.handle) {
            Some(handle) => self.focus_window(&handle),
            None => false,
        }
    }
}
