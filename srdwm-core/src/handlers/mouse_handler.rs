#![allow(clippy::wildcard_imports)]

use super::*;
use crate::models::ResizeEdge;
use crate::utils::modmask_lookup::Button;

/// Distance from a window edge that still counts as grabbing it.
const RESIZE_BORDER: i32 = 5;

impl State {
    /// Button 1 focuses the window under the pointer, then starts a drag
    /// from the titlebar or, below it, a resize from an edge.
    pub fn mouse_press_handler(&mut self, button: Button, x: i32, y: i32) -> bool {
        if button != Button::Button1 {
            return false;
        }
        let Some(handle) = self.find_window_at_position(x, y) else {
            return false;
        };
        self.focus_window(&handle);
        if self.is_in_titlebar_area(&handle, x, y) {
            self.start_window_drag(&handle, x, y);
        } else if let Some(edge) = self.get_resize_edge(&handle, x, y) {
            self.start_window_resize(&handle, x, y, edge.into());
        }
        true
    }

    pub fn mouse_release_handler(&mut self, button: Button, _x: i32, _y: i32) -> bool {
        if button != Button::Button1 {
            return false;
        }
        match self.mode {
            Mode::MovingWindow(_) => self.end_window_drag(),
            Mode::ResizingWindow(..) => self.end_window_resize(),
            Mode::Normal => false,
        }
    }

    pub fn mouse_motion_handler(&mut self, x: i32, y: i32) -> bool {
        match self.mode {
            Mode::MovingWindow(_) => self.update_window_drag(x, y),
            Mode::ResizingWindow(..) => self.update_window_resize(x, y),
            Mode::Normal => false,
        }
    }

    /// First window, in insertion order, containing the point.
    #[must_use]
    pub fn find_window_at_position(&self, x: i32, y: i32) -> Option<WindowHandle> {
        self.windows
            .iter()
            .find(|w| w.contains_point(x, y))
            .map(|w| w.handle)
    }

    #[must_use]
    pub fn is_in_titlebar_area(&self, handle: &WindowHandle, x: i32, y: i32) -> bool {
        self.window(handle)
            .is_some_and(|w| w.titlebar_contains(x, y))
    }

    #[must_use]
    pub fn is_in_resize_area(&self, handle: &WindowHandle, x: i32, y: i32) -> bool {
        self.get_resize_edge(handle, x, y).is_some()
    }

    /// Edge under the point. Any corner wins over the sides, then left,
    /// right, top and bottom in that order.
    #[must_use]
    pub fn get_resize_edge(&self, handle: &WindowHandle, x: i32, y: i32) -> Option<ResizeEdge> {
        let window = self.window(handle)?;
        if !window.contains_point(x, y) {
            return None;
        }
        let right = window.x() + window.width();
        let bottom = window.y() + window.height();
        let near_left = x - window.x() <= RESIZE_BORDER;
        let near_right = right - x <= RESIZE_BORDER;
        let near_top = y - window.y() <= RESIZE_BORDER;
        let near_bottom = bottom - y <= RESIZE_BORDER;
        if (near_left || near_right) && (near_top || near_bottom) {
            Some(ResizeEdge::Corner)
        } else if near_left {
            Some(ResizeEdge::Left)
        } else if near_right {
            Some(ResizeEdge::Right)
        } else if near_top {
            Some(ResizeEdge::Top)
        } else if near_bottom {
            Some(ResizeEdge::Bottom)
        } else {
            None
        }
    }
}
