//! Everything the manager knows about windows, workspaces and input.
use crate::config::Config;
use crate::events::EventSystem;
use crate::layouts::{LayoutEngine, SmartPlacement};
use crate::models::{FocusManager, Mode, Monitor, Window, WindowHandle, Workspace, WorkspaceId};
use crate::utils::modmask_lookup::ModMask;
use crate::{Command, DisplayAction};
use std::collections::{BTreeSet, HashMap, VecDeque};
use std::rc::Rc;

#[derive(Debug)]
pub struct State {
    /// Managed windows in the order they were added.
    pub windows: Vec<Window>,
    pub workspaces: Vec<Workspace>,
    /// Id of the current workspace, 0 when there is none.
    pub current_workspace: WorkspaceId,
    pub(crate) next_workspace_id: WorkspaceId,
    pub focus_manager: FocusManager,
    pub floating: BTreeSet<WindowHandle>,
    pub mode: Mode,
    pub layout_engine: LayoutEngine,
    pub placement: SmartPlacement,
    pub key_bindings: HashMap<String, Command>,
    pub pressed_keys: HashMap<u32, ModMask>,
    pub actions: VecDeque<DisplayAction>,
    pub events: Rc<EventSystem>,
    pub smart_placement: bool,
    pub border_width: i32,
    pub default_layout: String,
}

impl State {
    pub(crate) fn new(config: &impl Config) -> Self {
        let mut state = Self {
            windows: Default::default(),
            workspaces: Default::default(),
            current_workspace: 0,
            next_workspace_id: 1,
            focus_manager: Default::default(),
            floating: Default::default(),
            mode: Default::default(),
            layout_engine: Default::default(),
            placement: Default::default(),
            key_bindings: Default::default(),
            pressed_keys: Default::default(),
            actions: Default::default(),
            events: Default::default(),
            smart_placement: config.smart_placement(),
            border_width: config.border_width(),
            default_layout: config.default_layout(),
        };
        state.load_config(config);
        state
    }

    /// Creates the configured workspaces, key bindings and layout options.
    pub fn load_config(&mut self, config: &impl Config) {
        for name in config.workspace_names() {
            self.add_workspace(&name);
        }
        for (combo, command) in config.mapped_bindings() {
            self.bind_key(combo, command);
        }
        for (layout, options) in config.layout_configs() {
            self.layout_engine.configure_layout(&layout, options);
        }
    }

    #[must_use]
    pub fn window(&self, handle: &WindowHandle) -> Option<&Window> {
        self.windows.iter().find(|w| &w.handle == handle)
    }

    pub fn window_mut(&mut self, handle: &WindowHandle) -> Option<&mut Window> {
        self.windows.iter_mut().find(|w| &w.handle == handle)
    }

    /// Looks a window up by its string id.
    #[must_use]
    pub fn window_by_id(&self, id: &str) -> Option<&Window> {
        let handle = id.parse::<WindowHandle>().ok()?;
        self.window(&handle)
    }

    #[must_use]
    pub fn focused_window(&self) -> Option<&Window> {
        self.focus_manager.window(&self.windows)
    }

    #[must_use]
    pub fn focused_handle(&self) -> Option<WindowHandle> {
        self.focus_manager.handle()
    }

    #[must_use]
    pub fn monitors(&self) -> &[Monitor] {
        self.layout_engine.monitors()
    }

    /// Registers a monitor and applies the default layout to it.
    pub fn add_monitor(&mut self, monitor: Monitor) -> bool {
        let id = monitor.id;
        if !self.layout_engine.add_monitor(monitor) {
            return false;
        }
        let layout = self.default_layout.clone();
        if !self.layout_engine.set_layout(id, &layout) {
            tracing::warn!("Default layout {} is unknown, monitor {} stays dynamic", layout, id);
        }
        tracing::debug!("Added monitor {}", id);
        true
    }

    /// Applies the active layout of every monitor.
    pub fn arrange_windows(&mut self) {
        self.layout_engine.arrange_all_monitors(&mut self.windows);
    }

    /// Queues the window's current geometry for the platform.
    pub(crate) fn push_geometry(&mut self, handle: &WindowHandle) {
        if let Some(window) = self.window(handle) {
            let act = DisplayAction::ConfigureWindow(window.handle, window.normal);
            self.actions.push_back(act);
        }
    }

    /// Tells the layout engine about a geometry change.
    pub(crate) fn update_layout_for_window(&mut self, handle: &WindowHandle) {
        self.layout_engine.update_window(handle, &self.windows);
        self.push_geometry(handle);
    }
}
