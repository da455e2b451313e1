#![allow(clippy::wildcard_imports)]

use super::*;
use crate::display_action::DisplayAction;
use crate::events::Event;
use crate::models::Monitor;

impl State {
    /// Starts managing a window. Returns false if the handle is already live.
    pub fn add_window(&mut self, mut window: Window) -> bool {
        //don't add the window if the manager already knows about it
        if self.window(&window.handle).is_some() {
            tracing::warn!("Window {} is already managed", window.handle);
            return false;
        }
        if self.smart_placement {
            self.place_new_window(&mut window);
        }
        let handle = window.handle;
        tracing::debug!("Adding window {} {:?}", handle, window.name);
        self.windows.push(window);
        self.layout_engine.add_window(handle);
        let current = self.current_workspace;
        if let Some(ws) = self.workspace_mut(current) {
            ws.add(handle);
        }
        if self.border_width > 0 {
            let act = DisplayAction::SetBorderWidth(handle, self.border_width);
            self.actions.push_back(act);
        }
        self.push_geometry(&handle);
        self.events.emit(Event::WindowCreated(handle));
        true
    }

    /// Stops managing a window and forgets every reference to it.
    pub fn remove_window(&mut self, handle: &WindowHandle) -> bool {
        let Some(index) = self.windows.iter().position(|w| &w.handle == handle) else {
            return false;
        };
        tracing::debug!("Removing window {}", handle);
        self.windows.remove(index);
        self.layout_engine.remove_window(handle);
        self.floating.remove(handle);
        for ws in &mut self.workspaces {
            ws.remove(handle);
        }
        if self.mode.handle().as_ref() == Some(handle) {
            self.mode = Mode::Normal;
            self.actions.push_back(DisplayAction::UngrabPointer);
        }
        let was_focused = self.focused_handle().as_ref() == Some(handle);
        self.focus_manager.forget(handle);
        if was_focused {
            self.focus_manager.push(None);
        }
        self.events.emit(Event::WindowDestroyed(*handle));
        true
    }

    /// Moves a window, telling the platform and the layout engine.
    pub fn move_window(&mut self, handle: &WindowHandle, x: i32, y: i32) -> bool {
        let Some(window) = self.window_mut(handle) else {
            return false;
        };
        window.set_position(x, y);
        self.update_layout_for_window(handle);
        self.events.emit(Event::WindowMoved {
            handle: *handle,
            x,
            y,
        });
        true
    }

    pub fn resize_window(&mut self, handle: &WindowHandle, width: i32, height: i32) -> bool {
        let Some(window) = self.window_mut(handle) else {
            return false;
        };
        window.set_size(width, height);
        self.update_layout_for_window(handle);
        self.events.emit(Event::WindowResized {
            handle: *handle,
            width,
            height,
        });
        true
    }

    /// The platform reports a geometry it applied by itself. Nothing is
    /// sent back to it.
    pub fn window_moved_handler(&mut self, handle: &WindowHandle, x: i32, y: i32) -> bool {
        let Some(window) = self.window_mut(handle) else {
            return false;
        };
        window.set_position(x, y);
        self.layout_engine.update_window(handle, &self.windows);
        self.events.emit(Event::WindowMoved {
            handle: *handle,
            x,
            y,
        });
        true
    }

    pub fn window_resized_handler(
        &mut self,
        handle: &WindowHandle,
        width: i32,
        height: i32,
    ) -> bool {
        let Some(window) = self.window_mut(handle) else {
            return false;
        };
        window.set_size(width, height);
        self.layout_engine.update_window(handle, &self.windows);
        self.events.emit(Event::WindowResized {
            handle: *handle,
            width,
            height,
        });
        true
    }

    /// Asks the platform to close the window. It stays managed until the
    /// platform reports it destroyed.
    pub fn close_window(&mut self, handle: &WindowHandle) -> bool {
        if self.window(handle).is_none() {
            return false;
        }
        self.actions.push_back(DisplayAction::CloseWindow(*handle));
        true
    }

    pub fn minimize_window(&mut self, handle: &WindowHandle) -> bool {
        if self.window(handle).is_none() {
            return false;
        }
        self.actions.push_back(DisplayAction::MinimizeWindow(*handle));
        self.events.emit(Event::WindowMinimized(*handle));
        true
    }

    pub fn maximize_window(&mut self, handle: &WindowHandle) -> bool {
        if self.window(handle).is_none() {
            return false;
        }
        self.actions.push_back(DisplayAction::MaximizeWindow(*handle));
        self.events.emit(Event::WindowMaximized(*handle));
        true
    }

    #[must_use]
    pub fn is_window_floating(&self, handle: &WindowHandle) -> bool {
        self.floating.contains(handle)
    }

    /// Floating windows leave the layout engine so no layout moves them.
    pub fn set_window_floating(&mut self, handle: &WindowHandle, floating: bool) -> bool {
        if self.window(handle).is_none() {
            return false;
        }
        if floating {
            self.floating.insert(*handle);
            self.layout_engine.remove_window(handle);
        } else {
            self.floating.remove(handle);
            self.layout_engine.add_window(*handle);
        }
        tracing::debug!("Window {} floating: {}", handle, floating);
        self.arrange_windows();
        true
    }

    pub fn toggle_window_floating(&mut self, handle: &WindowHandle) -> bool {
        let floating = !self.is_window_floating(handle);
        self.set_window_floating(handle, floating)
    }

    pub fn set_window_decorations(&mut self, handle: &WindowHandle, enabled: bool) -> bool {
        let Some(window) = self.window_mut(handle) else {
            return false;
        };
        window.set_decorated(enabled);
        let act = DisplayAction::SetDecorations(*handle, enabled);
        self.actions.push_back(act);
        true
    }

    /// False for unknown windows.
    #[must_use]
    pub fn get_window_decorations(&self, handle: &WindowHandle) -> bool {
        self.window(handle).is_some_and(Window::decorated)
    }

    pub fn set_window_border_color(&mut self, handle: &WindowHandle, r: u8, g: u8, b: u8) -> bool {
        if self.window(handle).is_none() {
            return false;
        }
        let act = DisplayAction::SetBorderColor(*handle, r, g, b);
        self.actions.push_back(act);
        true
    }

    pub fn set_window_border_width(&mut self, handle: &WindowHandle, width: i32) -> bool {
        if self.window(handle).is_none() {
            return false;
        }
        let act = DisplayAction::SetBorderWidth(*handle, width);
        self.actions.push_back(act);
        true
    }

    /// Gives a new window its initial geometry on the monitor holding it,
    /// or on the first monitor.
    fn place_new_window(&mut self, window: &mut Window) {
        let (x, y) = window.center();
        let monitor: Option<Monitor> = self
            .layout_engine
            .monitor_at(x, y)
            .or_else(|| self.layout_engine.monitors().first())
            .cloned();
        let Some(monitor) = monitor else {
            return;
        };
        let existing: Vec<&Window> = self
            .windows
            .iter()
            .filter(|w| {
                let (x, y) = w.center();
                monitor.contains_point(x, y)
            })
            .collect();
        let result = self.placement.place_window(window, &monitor, &existing);
        tracing::debug!("{} for window {}", result.reason, window.handle);
        if result.success {
            window.set_geometry(result.xyhw());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventKind;
    use crate::models::Xyhw;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn window(id: i32) -> Window {
        Window::new(WindowHandle(id), format!("w{id}")).with_geometry(id * 10, 0, 300, 200)
    }

    #[test]
    fn windows_with_a_live_handle_are_rejected() {
        let mut manager = Manager::new_test(vec![]);
        assert!(manager.state.add_window(window(1)));
        assert!(!manager.state.add_window(window(1).with_geometry(5, 5, 5, 5)));
        assert_eq!(manager.state.windows.len(), 1);
        assert_eq!(manager.state.windows[0].width(), 300);
    }

    #[test]
    fn handles_should_stay_unique_over_add_and_remove() {
        let mut manager = Manager::new_test(vec![]);
        for id in [1, 2, 1, 3, 2] {
            manager.state.add_window(window(id));
        }
        manager.state.remove_window(&WindowHandle(2));
        manager.state.add_window(window(2));
        let mut handles: Vec<_> = manager.state.windows.iter().map(|w| w.handle).collect();
        let count = handles.len();
        handles.sort();
        handles.dedup();
        assert_eq!(count, 3);
        assert_eq!(handles.len(), count);
    }

    #[test]
    fn new_windows_join_the_current_workspace() {
        let mut manager = Manager::new_test(vec!["Main".to_owned(), "Web".to_owned()]);
        manager.state.add_window(window(1));
        assert!(manager.state.workspaces[0].contains(&WindowHandle(1)));
        assert!(!manager.state.workspaces[1].contains(&WindowHandle(1)));
        assert!(manager.state.layout_engine.contains_window(&WindowHandle(1)));
    }

    #[test]
    fn removing_the_focused_window_clears_focus() {
        let mut manager = Manager::new_test(vec!["Main".to_owned()]);
        manager.state.add_window(window(1));
        manager.state.add_window(window(2));
        manager.state.focus_window(&WindowHandle(1));
        manager.state.set_window_floating(&WindowHandle(1), true);

        assert!(manager.state.remove_window(&WindowHandle(1)));
        assert_eq!(manager.state.focused_handle(), None);
        assert!(!manager.state.is_window_floating(&WindowHandle(1)));
        assert!(!manager.state.workspaces[0].contains(&WindowHandle(1)));
        assert!(!manager.state.remove_window(&WindowHandle(1)));
    }

    #[test]
    fn removing_another_window_keeps_focus() {
        let mut manager = Manager::new_test(vec![]);
        manager.state.add_window(window(1));
        manager.state.add_window(window(2));
        manager.state.focus_window(&WindowHandle(1));
        manager.state.remove_window(&WindowHandle(2));
        assert_eq!(manager.state.focused_handle(), Some(WindowHandle(1)));
    }

    #[test]
    fn lifecycle_events_are_emitted() {
        let mut manager = Manager::new_test(vec![]);
        let seen = Rc::new(RefCell::new(vec![]));
        for kind in [EventKind::WindowCreated, EventKind::WindowDestroyed] {
            let seen = seen.clone();
            manager.events().register_handler(kind, move |event| {
                seen.borrow_mut().push(event.clone());
                Ok(())
            });
        }
        manager.state.add_window(window(4));
        manager.state.remove_window(&WindowHandle(4));
        assert_eq!(
            *seen.borrow(),
            vec![
                Event::WindowCreated(WindowHandle(4)),
                Event::WindowDestroyed(WindowHandle(4))
            ]
        );
    }

    #[test]
    fn floating_windows_are_not_tiled() {
        let mut manager = Manager::new_test(vec![]);
        manager.state.layout_engine.set_layout(0, crate::layouts::TILING);
        manager.state.add_window(window(1));
        manager.state.add_window(window(2));
        assert!(manager.state.toggle_window_floating(&WindowHandle(2)));
        manager.state.arrange_windows();
        assert_eq!(manager.state.windows[0].width(), 1920);
        assert_eq!(manager.state.windows[1].width(), 300);

        assert!(manager.state.toggle_window_floating(&WindowHandle(2)));
        assert!(!manager.state.is_window_floating(&WindowHandle(2)));
        assert_eq!(manager.state.windows[1].width(), 960);
    }

    #[test]
    fn smart_placement_sizes_new_windows() {
        let mut manager = Manager::new_test(vec![]);
        manager.state.smart_placement = true;
        let existing: Vec<Window> = (1..=5).map(window).collect();
        for w in existing {
            manager.state.add_window(w);
        }
        // The counter has handed out five cells already.
        let placement = manager.state.windows[0].normal;
        assert_eq!(placement, Xyhw::new(10, 10, 1900, 1060));

        let mut fresh = crate::layouts::SmartPlacement::default();
        let others: Vec<&Window> = manager.state.windows.iter().collect();
        let result = fresh.place_window(&window(9), &manager.state.monitors()[0], &others);
        assert!(result.success);
        assert_eq!((result.width, result.height), (626, 346));
    }

    #[test]
    fn geometry_changes_queue_display_actions() {
        let mut manager = Manager::new_test(vec![]);
        manager.state.add_window(window(1));
        manager.state.actions.clear();
        assert!(manager.state.move_window(&WindowHandle(1), 40, 50));
        assert!(manager.state.resize_window(&WindowHandle(1), 640, 480));
        assert!(!manager.state.move_window(&WindowHandle(9), 0, 0));
        assert_eq!(
            manager.state.actions.back(),
            Some(&DisplayAction::ConfigureWindow(
                WindowHandle(1),
                Xyhw::new(40, 50, 640, 480)
            ))
        );
        assert_eq!(manager.state.actions.len(), 2);
    }

    #[test]
    fn decorations_default_to_enabled() {
        let mut manager = Manager::new_test(vec![]);
        manager.state.add_window(window(1));
        assert!(manager.state.get_window_decorations(&WindowHandle(1)));
        assert!(manager.state.set_window_decorations(&WindowHandle(1), false));
        assert!(!manager.state.get_window_decorations(&WindowHandle(1)));
        assert!(!manager.state.get_window_decorations(&WindowHandle(5)));
    }
}
