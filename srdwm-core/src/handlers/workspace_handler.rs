#![allow(clippy::wildcard_imports)]

use super::*;
use crate::models::WorkspaceId;

impl State {
    /// Appends a workspace with the next free id and returns that id.
    /// The first workspace becomes the current one.
    pub fn add_workspace(&mut self, name: &str) -> WorkspaceId {
        let id = self.next_workspace_id;
        self.next_workspace_id += 1;
        self.workspaces.push(Workspace::new(id, name));
        tracing::debug!("Added workspace {} {:?}", id, name);
        if self.current_workspace == 0 {
            self.switch_to_workspace(id);
        }
        id
    }

    /// Deletes a workspace. Removing the current one first switches to the
    /// first remaining workspace and hands its windows over.
    pub fn remove_workspace(&mut self, id: WorkspaceId) -> bool {
        let Some(index) = self.workspaces.iter().position(|ws| ws.id == id) else {
            return false;
        };
        if id == self.current_workspace {
            match self.workspaces.iter().find(|ws| ws.id != id).map(|ws| ws.id) {
                Some(fallback) => {
                    self.switch_to_workspace(fallback);
                    let orphans = std::mem::take(&mut self.workspaces[index].windows);
                    if let Some(ws) = self.workspace_mut(fallback) {
                        for handle in orphans {
                            ws.add(handle);
                        }
                    }
                }
                None => self.current_workspace = 0,
            }
        }
        self.workspaces.remove(index);
        tracing::debug!("Removed workspace {}", id);
        true
    }

    /// Makes `id` current. Arranges when the workspace holds windows.
    pub fn switch_to_workspace(&mut self, id: WorkspaceId) -> bool {
        if self.workspace(id).is_none() {
            return false;
        }
        self.current_workspace = id;
        for ws in &mut self.workspaces {
            ws.visible = ws.id == id;
        }
        tracing::debug!("Switched to workspace {}", id);
        if self.workspace(id).is_some_and(|ws| !ws.windows.is_empty()) {
            self.arrange_windows();
        }
        true
    }

    /// Moves a window to exactly one workspace.
    pub fn move_window_to_workspace(&mut self, handle: &WindowHandle, id: WorkspaceId) -> bool {
        if self.window(handle).is_none() || self.workspace(id).is_none() {
            return false;
        }
        for ws in &mut self.workspaces {
            ws.remove(handle);
        }
        if let Some(ws) = self.workspace_mut(id) {
            ws.add(*handle);
        }
        true
    }

    #[must_use]
    pub fn workspace(&self, id: WorkspaceId) -> Option<&Workspace> {
        self.workspaces.iter().find(|ws| ws.id == id)
    }

    pub fn workspace_mut(&mut self, id: WorkspaceId) -> Option<&mut Workspace> {
        self.workspaces.iter_mut().find(|ws| ws.id == id)
    }

    #[must_use]
    pub fn current_workspace(&self) -> Option<&Workspace> {
        self.workspace(self.current_workspace)
    }
}
