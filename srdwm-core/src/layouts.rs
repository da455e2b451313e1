//! Layout strategies and the per monitor layout engine.
mod layout_engine;
pub mod smart_placement;
mod tiling;

use crate::models::{Monitor, Window};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;
use thiserror::Error;

pub use layout_engine::LayoutEngine;
pub use smart_placement::{PlacementResult, SmartPlacement};

pub const TILING: &str = "tiling";
pub const DYNAMIC: &str = "dynamic";
pub const FLOATING: &str = "floating";

/// A user supplied arrangement function.
pub type CustomLayout = Rc<dyn Fn(&mut [&mut Window], &Monitor)>;

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum LayoutKind {
    /// Even vertical columns, one per window.
    Tiling,
    /// Windows keep the geometry given to them by the user.
    #[default]
    Dynamic,
    Floating,
    /// A layout registered under this name with `LayoutEngine::register_custom_layout`.
    Custom(String),
}

impl LayoutKind {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Tiling => TILING,
            Self::Dynamic => DYNAMIC,
            Self::Floating => FLOATING,
            Self::Custom(name) => name,
        }
    }

    #[must_use]
    pub fn is_builtin(name: &str) -> bool {
        matches!(name, TILING | DYNAMIC | FLOATING)
    }
}

impl fmt::Display for LayoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Could not parse layout: {0}")]
pub struct ParseLayoutError(pub String);

impl FromStr for LayoutKind {
    type Err = ParseLayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            TILING => Ok(Self::Tiling),
            DYNAMIC => Ok(Self::Dynamic),
            FLOATING => Ok(Self::Floating),
            _ => Err(ParseLayoutError(s.to_string())),
        }
    }
}

/// Apply `kind` to the windows assigned to `monitor`, in order.
pub fn arrange(
    kind: &LayoutKind,
    windows: &mut [&mut Window],
    monitor: &Monitor,
    custom_layouts: &BTreeMap<String, CustomLayout>,
) {
    match kind {
        LayoutKind::Tiling => tiling::update(monitor, windows),
        // Geometry is driven by drag and resize, nothing to do.
        LayoutKind::Dynamic | LayoutKind::Floating => {}
        LayoutKind::Custom(name) => match custom_layouts.get(name) {
            Some(layout) => layout(windows, monitor),
            None => tracing::warn!("No custom layout registered as {:?}", name),
        },
    }
}
