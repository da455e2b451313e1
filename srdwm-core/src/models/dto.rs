//! Serialisable snapshot of the manager, e.g. for status bars.
use crate::models::{Manager, MonitorId, WindowHandle, WorkspaceId, Xyhw};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct WindowState {
    pub handle: WindowHandle,
    pub title: String,
    pub geometry: Xyhw,
    pub floating: bool,
    pub decorated: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceState {
    pub id: WorkspaceId,
    pub name: String,
    pub windows: Vec<WindowHandle>,
    pub visible: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Viewport {
    pub monitor: MonitorId,
    pub name: String,
    pub geometry: Xyhw,
    pub layout: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ManagerState {
    pub focused: Option<WindowHandle>,
    pub window_title: Option<String>,
    pub current_workspace: WorkspaceId,
    pub windows: Vec<WindowState>,
    pub workspaces: Vec<WorkspaceState>,
    pub viewports: Vec<Viewport>,
}

impl<C, P> From<&Manager<C, P>> for ManagerState {
    fn from(manager: &Manager<C, P>) -> Self {
        let state = &manager.state;
        let windows = state
            .windows
            .iter()
            .map(|w| WindowState {
                handle: w.handle,
                title: w.name.clone(),
                geometry: w.normal,
                floating: state.floating.contains(&w.handle),
                decorated: w.decorated(),
            })
            .collect();
        let workspaces = state
            .workspaces
            .iter()
            .map(|ws| WorkspaceState {
                id: ws.id,
                name: ws.name.clone(),
                windows: ws.windows.clone(),
                visible: ws.visible,
            })
            .collect();
        let viewports = state
            .layout_engine
            .monitors()
            .iter()
            .map(|m| Viewport {
                monitor: m.id,
                name: m.name.clone(),
                geometry: m.xyhw(),
                layout: state.layout_engine.get_layout_name(m.id),
            })
            .collect();
        Self {
            focused: state.focused_handle(),
            window_title: state.focused_window().map(|w| w.name.clone()),
            current_workspace: state.current_workspace,
            windows,
            workspaces,
            viewports,
        }
    }
}

impl ManagerState {
    /// # Errors
    ///
    /// Fails if serialisation fails.
    pub fn to_json(&self) -> crate::errors::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
