use crate::models::{WindowHandle, Xyhw};
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use thiserror::Error;

/// The edge or corner grabbed when a resize starts.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResizeEdge {
    Left,
    Right,
    Top,
    Bottom,
    Corner,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid resize edge code: {0}")]
pub struct ParseEdgeError(pub u8);

impl TryFrom<u8> for ResizeEdge {
    type Error = ParseEdgeError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::Left),
            2 => Ok(Self::Right),
            3 => Ok(Self::Top),
            4 => Ok(Self::Bottom),
            5 => Ok(Self::Corner),
            _ => Err(ParseEdgeError(code)),
        }
    }
}

impl From<ResizeEdge> for u8 {
    fn from(edge: ResizeEdge) -> Self {
        match edge {
            ResizeEdge::Left => 1,
            ResizeEdge::Right => 2,
            ResizeEdge::Top => 3,
            ResizeEdge::Bottom => 4,
            ResizeEdge::Corner => 5,
        }
    }
}

/// Pointer and window geometry captured when a drag or resize begins.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Session {
    pub handle: WindowHandle,
    pub pointer: (i32, i32),
    pub start: Xyhw,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Normal,
    MovingWindow(Session),
    ResizingWindow(Session, ResizeEdge),
}

impl Mode {
    #[must_use]
    pub const fn is_normal(&self) -> bool {
        matches!(self, Self::Normal)
    }

    #[must_use]
    pub const fn is_moving(&self) -> bool {
        matches!(self, Self::MovingWindow(_))
    }

    #[must_use]
    pub const fn is_resizing(&self) -> bool {
        matches!(self, Self::ResizingWindow(..))
    }

    /// The window targeted by the active session, if any.
    #[must_use]
    pub const fn handle(&self) -> Option<WindowHandle> {
        match self {
            Self::Normal => None,
            Self::MovingWindow(session) | Self::ResizingWindow(session, _) => Some(session.handle),
        }
    }
}
