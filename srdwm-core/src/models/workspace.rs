use crate::layouts::TILING;
use crate::models::{WindowHandle, WorkspaceId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named, switchable grouping of windows.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Workspace {
    pub id: WorkspaceId,
    pub name: String,
    pub windows: Vec<WindowHandle>,
    /// Nominal layout name, informational only. Arrangement follows the
    /// per monitor layout of the layout engine.
    pub layout: String,
    pub visible: bool,
}

impl fmt::Debug for Workspace {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Workspace {{ id: {}, name: {:?}, windows: {:?}, visible: {} }}",
            self.id, self.name, self.windows, self.visible
        )
    }
}

impl Workspace {
    #[must_use]
    pub fn new(id: WorkspaceId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            windows: vec![],
            layout: TILING.to_owned(),
            visible: false,
        }
    }

    #[must_use]
    pub fn contains(&self, handle: &WindowHandle) -> bool {
        self.windows.contains(handle)
    }

    /// Appends the window unless it is already a member.
    pub fn add(&mut self, handle: WindowHandle) {
        if !self.contains(&handle) {
            self.windows.push(handle);
        }
    }

    /// Returns true if the window was a member.
    pub fn remove(&mut self, handle: &WindowHandle) -> bool {
        let before = self.windows.len();
        self.windows.retain(|h| h != handle);
        before != self.windows.len()
    }
}
