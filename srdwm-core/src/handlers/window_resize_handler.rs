use super::{Mode, State, WindowHandle, DISPLAY_BOUND_HEIGHT, DISPLAY_BOUND_WIDTH, MIN_RESIZE};
use crate::display_action::DisplayAction;
use crate::events::Event;
use crate::models::{ResizeEdge, Session, Xyhw};
use std::convert::TryFrom;

impl State {
    /// Begins resizing from an edge code: 1 left, 2 right, 3 top, 4 bottom,
    /// 5 bottom right corner. Other codes are rejected.
    pub fn start_window_resize(&mut self, handle: &WindowHandle, x: i32, y: i32, edge: u8) -> bool {
        if !self.mode.is_normal() {
            return false;
        }
        let edge = match ResizeEdge::try_from(edge) {
            Ok(edge) => edge,
            Err(err) => {
                tracing::warn!("{}", err);
                return false;
            }
        };
        let Some(window) = self.window(handle) else {
            return false;
        };
        let session = Session {
            handle: *handle,
            pointer: (x, y),
            start: window.normal,
        };
        self.mode = Mode::ResizingWindow(session, edge);
        self.actions.push_back(DisplayAction::GrabPointer);
        tracing::debug!("Started resizing window {} from {:?}", handle, edge);
        true
    }

    pub fn update_window_resize(&mut self, x: i32, y: i32) -> bool {
        let Mode::ResizingWindow(session, edge) = self.mode else {
            return false;
        };
        let geometry = resized(&session, edge, x, y);
        let handle = session.handle;
        let Some(window) = self.window_mut(&handle) else {
            return false;
        };
        let moved = (window.x(), window.y()) != (geometry.x(), geometry.y());
        window.set_geometry(geometry);
        self.update_layout_for_window(&handle);
        if moved {
            self.events.emit(Event::WindowMoved {
                handle,
                x: geometry.x(),
                y: geometry.y(),
            });
        }
        self.events.emit(Event::WindowResized {
            handle,
            width: geometry.w(),
            height: geometry.h(),
        });
        true
    }

    pub fn end_window_resize(&mut self) -> bool {
        let Mode::ResizingWindow(session, _) = self.mode else {
            return false;
        };
        self.mode = Mode::Normal;
        self.actions.push_back(DisplayAction::UngrabPointer);
        tracing::debug!("Stopped resizing window {}", session.handle);
        true
    }

    #[must_use]
    pub fn is_resizing(&self) -> bool {
        self.mode.is_resizing()
    }
}

/// Geometry for the pointer at (x, y), computed from the geometry the window
/// had when the resize began. Left and top edges keep the opposite side fixed.
fn resized(session: &Session, edge: ResizeEdge, x: i32, y: i32) -> Xyhw {
    let start = session.start;
    let dx = x - session.pointer.0;
    let dy = y - session.pointer.1;
    let (mut new_x, mut new_y) = (start.x(), start.y());
    let (mut width, mut height) = (start.w(), start.h());
    match edge {
        ResizeEdge::Left => {
            width = (start.w() - dx).max(MIN_RESIZE);
            new_x = start.x() + start.w() - width;
        }
        ResizeEdge::Right => width = (start.w() + dx).max(MIN_RESIZE),
        ResizeEdge::Top => {
            height = (start.h() - dy).max(MIN_RESIZE);
            new_y = start.y() + start.h() - height;
        }
        ResizeEdge::Bottom => height = (start.h() + dy).max(MIN_RESIZE),
        ResizeEdge::Corner => {
            width = (start.w() + dx).max(MIN_RESIZE);
            height = (start.h() + dy).max(MIN_RESIZE);
        }
    }
    width = width.min(DISPLAY_BOUND_WIDTH - new_x).max(MIN_RESIZE);
    height = height.min(DISPLAY_BOUND_HEIGHT - new_y).max(MIN_RESIZE);
    Xyhw::new(new_x, new_y, width, height)
}
