//! Window Information
#![allow(clippy::module_name_repetitions)]

use crate::models::Xyhw;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A backend-agnostic handle used to identify a window.
///
/// Handles are handed out by the platform and stay unique while the window
/// is alive.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowHandle(pub i32);

impl fmt::Display for WindowHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Could not parse window id: {0}")]
pub struct ParseHandleError(String);

impl FromStr for WindowHandle {
    type Err = ParseHandleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i32>()
            .map(WindowHandle)
            .map_err(|_| ParseHandleError(s.to_owned()))
    }
}

/// Store Window information.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Window {
    pub handle: WindowHandle,
    pub name: String,
    pub normal: Xyhw,
    decorated: bool,
}

impl Window {
    #[must_use]
    pub fn new(handle: WindowHandle, name: impl Into<String>) -> Self {
        Self {
            handle,
            name: name.into(),
            normal: Xyhw::default(),
            decorated: true,
        }
    }

    /// Builder style helper used by backends and tests.
    #[must_use]
    pub fn with_geometry(mut self, x: i32, y: i32, w: i32, h: i32) -> Self {
        self.normal = Xyhw::new(x, y, w, h);
        self
    }

    #[must_use]
    pub const fn x(&self) -> i32 {
        self.normal.x()
    }
    #[must_use]
    pub const fn y(&self) -> i32 {
        self.normal.y()
    }
    #[must_use]
    pub const fn width(&self) -> i32 {
        self.normal.w()
    }
    #[must_use]
    pub const fn height(&self) -> i32 {
        self.normal.h()
    }

    pub fn set_position(&mut self, x: i32, y: i32) {
        self.normal.set_x(x);
        self.normal.set_y(y);
    }

    pub fn set_size(&mut self, width: i32, height: i32) {
        self.normal.set_w(width);
        self.normal.set_h(height);
    }

    pub fn set_geometry(&mut self, xyhw: Xyhw) {
        self.normal = xyhw;
    }

    #[must_use]
    pub const fn decorated(&self) -> bool {
        self.decorated
    }

    pub fn set_decorated(&mut self, value: bool) {
        self.decorated = value;
    }

    #[must_use]
    pub const fn contains_point(&self, x: i32, y: i32) -> bool {
        self.normal.contains_point(x, y)
    }

    /// Only the top 30 units of a window count as its titlebar.
    #[must_use]
    pub const fn titlebar_contains(&self, x: i32, y: i32) -> bool {
        x >= self.x() && x < self.x() + self.width() && y >= self.y() && y < self.y() + 30
    }

    #[must_use]
    pub const fn center(&self) -> (i32, i32) {
        self.normal.center()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_windows_should_be_decorated() {
        let subject = Window::new(WindowHandle(1), "term");
        assert!(subject.decorated());
        assert_eq!(subject.normal, Xyhw::default());
    }

    #[test]
    fn handles_should_parse_from_opaque_strings() {
        assert_eq!("42".parse::<WindowHandle>(), Ok(WindowHandle(42)));
        assert_eq!(" 7 ".parse::<WindowHandle>(), Ok(WindowHandle(7)));
        assert!("0x2a".parse::<WindowHandle>().is_err());
    }

    #[test]
    fn titlebar_is_the_top_thirty_units() {
        let subject = Window::new(WindowHandle(1), "").with_geometry(100, 100, 400, 300);
        assert!(subject.titlebar_contains(150, 100));
        assert!(subject.titlebar_contains(150, 129));
        assert!(!subject.titlebar_contains(150, 130));
        assert!(!subject.titlebar_contains(99, 110));
    }
}
