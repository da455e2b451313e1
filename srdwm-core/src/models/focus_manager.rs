use crate::models::{Window, WindowHandle};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

const HISTORY_LIMIT: usize = 10;

/// `FocusManager` stores the history of which windows had focus.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct FocusManager {
    pub window_history: VecDeque<Option<WindowHandle>>,
}

impl FocusManager {
    /// Handle of the currently focused window.
    #[must_use]
    pub fn handle(&self) -> Option<WindowHandle> {
        self.window_history.front().copied().flatten()
    }

    /// Return the currently focused window.
    #[must_use]
    pub fn window<'a>(&self, windows: &'a [Window]) -> Option<&'a Window> {
        let handle = self.handle()?;
        windows.iter().find(|w| w.handle == handle)
    }

    /// Record a focus change. Returns false if nothing changed.
    pub fn push(&mut self, handle: Option<WindowHandle>) -> bool {
        if self.window_history.front() == Some(&handle) {
            return false;
        }
        // Clean old history.
        self.window_history.truncate(HISTORY_LIMIT);
        self.window_history.push_front(handle);
        true
    }

    /// Drop a window from the history, e.g. once it is destroyed.
    pub fn forget(&mut self, handle: &WindowHandle) {
        self.window_history.retain(|h| h.as_ref() != Some(handle));
    }
}
