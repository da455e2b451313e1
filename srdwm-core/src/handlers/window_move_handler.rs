use super::{Mode, State, WindowHandle, DISPLAY_BOUND_HEIGHT, DISPLAY_BOUND_WIDTH};
use crate::display_action::DisplayAction;
use crate::models::Session;

impl State {
    /// Begins dragging a window. Ignored while another drag or resize runs.
    pub fn start_window_drag(&mut self, handle: &WindowHandle, x: i32, y: i32) -> bool {
        if !self.mode.is_normal() {
            return false;
        }
        let Some(window) = self.window(handle) else {
            return false;
        };
        self.mode = Mode::MovingWindow(Session {
            handle: *handle,
            pointer: (x, y),
            start: window.normal,
        });
        self.actions.push_back(DisplayAction::GrabPointer);
        tracing::debug!("Started dragging window {}", handle);
        true
    }

    /// Moves the dragged window by the pointer offset since the drag began.
    pub fn update_window_drag(&mut self, x: i32, y: i32) -> bool {
        let Mode::MovingWindow(session) = self.mode else {
            return false;
        };
        let (x, y) = drag_position(&session, x, y);
        self.move_window(&session.handle, x, y)
    }

    pub fn end_window_drag(&mut self) -> bool {
        let Mode::MovingWindow(session) = self.mode else {
            return false;
        };
        self.mode = Mode::Normal;
        self.actions.push_back(DisplayAction::UngrabPointer);
        tracing::debug!("Stopped dragging window {}", session.handle);
        true
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.mode.is_moving()
    }
}

/// The window keeps its offset from the pointer and stays inside the
/// display bounds. A window wider than the bounds is pinned to 0.
fn drag_position(session: &Session, x: i32, y: i32) -> (i32, i32) {
    let start = session.start;
    let new_x = start.x() + (x - session.pointer.0);
    let new_y = start.y() + (y - session.pointer.1);
    (
        new_x.min(DISPLAY_BOUND_WIDTH - start.w()).max(0),
        new_y.min(DISPLAY_BOUND_HEIGHT - start.h()).max(0),
    )
}
