use super::{arrange, CustomLayout, LayoutKind, ParseLayoutError, DYNAMIC, FLOATING, TILING};
use crate::models::{Monitor, MonitorId, Window, WindowHandle};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

/// Tracks which layout is active on each monitor and which windows take
/// part in arrangement. Windows are referenced by handle, the geometry
/// lives in the window list owned by the state.
#[derive(Default, Clone)]
pub struct LayoutEngine {
    monitors: Vec<Monitor>,
    /// Managed windows in insertion order.
    windows: Vec<WindowHandle>,
    active_layouts: HashMap<MonitorId, LayoutKind>,
    custom_layouts: BTreeMap<String, CustomLayout>,
    layout_configs: HashMap<String, HashMap<String, String>>,
}

impl fmt::Debug for LayoutEngine {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("LayoutEngine")
            .field("monitors", &self.monitors)
            .field("windows", &self.windows)
            .field("active_layouts", &self.active_layouts)
            .field("custom_layouts", &self.custom_layouts.keys())
            .field("layout_configs", &self.layout_configs)
            .finish()
    }
}

impl LayoutEngine {
    /// Resolve a layout name, builtin names take precedence.
    ///
    /// # Errors
    ///
    /// Returns an error when the name is neither builtin nor registered.
    pub fn parse_layout(&self, name: &str) -> Result<LayoutKind, ParseLayoutError> {
        LayoutKind::from_str(name).or_else(|err| {
            if self.custom_layouts.contains_key(name) {
                Ok(LayoutKind::Custom(name.to_owned()))
            } else {
                Err(err)
            }
        })
    }

    /// Returns false and leaves the monitor untouched for unknown names.
    pub fn set_layout(&mut self, monitor_id: MonitorId, name: &str) -> bool {
        match self.parse_layout(name) {
            Ok(kind) => {
                tracing::debug!("Monitor {} now uses layout {}", monitor_id, kind);
                self.active_layouts.insert(monitor_id, kind);
                true
            }
            Err(err) => {
                tracing::warn!("{}", err);
                false
            }
        }
    }

    /// Sets a kind directly. Custom kinds are not checked against the registry,
    /// an unregistered one arranges nothing.
    pub fn set_layout_kind(&mut self, monitor_id: MonitorId, kind: LayoutKind) {
        tracing::debug!("Monitor {} now uses layout {}", monitor_id, kind);
        self.active_layouts.insert(monitor_id, kind);
    }

    #[must_use]
    pub fn get_layout(&self, monitor_id: MonitorId) -> LayoutKind {
        self.active_layouts
            .get(&monitor_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Layout name for the monitor, `dynamic` when none was set.
    #[must_use]
    pub fn get_layout_name(&self, monitor_id: MonitorId) -> String {
        self.get_layout(monitor_id).name().to_owned()
    }

    /// Stores tuning options for a layout. Builtin strategies do not read them.
    pub fn configure_layout(&mut self, name: &str, config: HashMap<String, String>) -> bool {
        tracing::debug!("Configuring layout {} with {:?}", name, config);
        self.layout_configs.insert(name.to_owned(), config);
        true
    }

    #[must_use]
    pub fn layout_config(&self, name: &str) -> Option<&HashMap<String, String>> {
        self.layout_configs.get(name)
    }

    /// Registers an arrangement function. Builtin names cannot be shadowed.
    pub fn register_custom_layout<F>(&mut self, name: &str, layout: F) -> bool
    where
        F: Fn(&mut [&mut Window], &Monitor) + 'static,
    {
        if LayoutKind::is_builtin(name) {
            tracing::warn!("Refusing to replace builtin layout {}", name);
            return false;
        }
        self.custom_layouts
            .insert(name.to_owned(), Rc::new(layout) as CustomLayout);
        true
    }

    #[must_use]
    pub fn get_available_layouts(&self) -> Vec<String> {
        [TILING, DYNAMIC, FLOATING]
            .iter()
            .map(ToString::to_string)
            .chain(self.custom_layouts.keys().cloned())
            .collect()
    }

    /// Returns false if the window was already managed.
    pub fn add_window(&mut self, handle: WindowHandle) -> bool {
        if self.windows.contains(&handle) {
            return false;
        }
        self.windows.push(handle);
        true
    }

    pub fn remove_window(&mut self, handle: &WindowHandle) -> bool {
        let before = self.windows.len();
        self.windows.retain(|h| h != handle);
        before != self.windows.len()
    }

    #[must_use]
    pub fn contains_window(&self, handle: &WindowHandle) -> bool {
        self.windows.contains(handle)
    }

    /// Recomputes which monitor a window belongs to after its geometry changed.
    pub fn update_window(&self, handle: &WindowHandle, windows: &[Window]) -> Option<MonitorId> {
        let window = windows.iter().find(|w| &w.handle == handle)?;
        let (x, y) = window.center();
        let monitor = self.monitor_at(x, y)?;
        tracing::trace!("Window {} is on monitor {}", handle, monitor.id);
        Some(monitor.id)
    }

    /// New monitors start with the dynamic layout.
    pub fn add_monitor(&mut self, monitor: Monitor) -> bool {
        if self.monitor(monitor.id).is_some() {
            return false;
        }
        self.active_layouts.insert(monitor.id, LayoutKind::Dynamic);
        self.monitors.push(monitor);
        true
    }

    pub fn remove_monitor(&mut self, monitor_id: MonitorId) -> bool {
        let before = self.monitors.len();
        self.monitors.retain(|m| m.id != monitor_id);
        self.active_layouts.remove(&monitor_id);
        before != self.monitors.len()
    }

    pub fn update_monitor(&mut self, monitor: Monitor) -> bool {
        match self.monitors.iter_mut().find(|m| m.id == monitor.id) {
            Some(existing) => {
                *existing = monitor;
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn monitors(&self) -> &[Monitor] {
        &self.monitors
    }

    #[must_use]
    pub fn monitor(&self, monitor_id: MonitorId) -> Option<&Monitor> {
        self.monitors.iter().find(|m| m.id == monitor_id)
    }

    /// First monitor whose area contains the point.
    #[must_use]
    pub fn monitor_at(&self, x: i32, y: i32) -> Option<&Monitor> {
        self.monitors.iter().find(|m| m.contains_point(x, y))
    }

    /// Managed windows whose centre lies on the monitor, in insertion order.
    #[must_use]
    pub fn get_windows_on_monitor(
        &self,
        monitor_id: MonitorId,
        windows: &[Window],
    ) -> Vec<WindowHandle> {
        let Some(monitor) = self.monitor(monitor_id) else {
            return vec![];
        };
        self.windows
            .iter()
            .filter(|handle| {
                windows.iter().any(|w| {
                    let (x, y) = w.center();
                    &w.handle == *handle && monitor.contains_point(x, y)
                })
            })
            .copied()
            .collect()
    }

    /// Applies the monitor's active layout to the windows on it.
    pub fn arrange_on_monitor(&self, monitor_id: MonitorId, windows: &mut [Window]) {
        let Some(monitor) = self.monitor(monitor_id) else {
            tracing::warn!("Cannot arrange unknown monitor {}", monitor_id);
            return;
        };
        let Some(kind) = self.active_layouts.get(&monitor_id) else {
            return;
        };
        let mut members: Vec<(usize, &mut Window)> = windows
            .iter_mut()
            .filter_map(|w| {
                let position = self.windows.iter().position(|h| h == &w.handle)?;
                let (x, y) = w.center();
                monitor.contains_point(x, y).then_some((position, w))
            })
            .collect();
        members.sort_by_key(|(position, _)| *position);
        let mut members: Vec<&mut Window> = members.into_iter().map(|(_, w)| w).collect();
        tracing::trace!(
            "Arranging {} windows on monitor {} with {}",
            members.len(),
            monitor_id,
            kind
        );
        arrange(kind, &mut members, monitor, &self.custom_layouts);
    }

    pub fn arrange_all_monitors(&self, windows: &mut [Window]) {
        for monitor in &self.monitors {
            self.arrange_on_monitor(monitor.id, windows);
        }
    }
}
