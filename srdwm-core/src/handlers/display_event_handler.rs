use super::{Config, DisplayEvent, Manager};
use crate::events::Event;
use crate::platform::Platform;

impl<C: Config, P: Platform> Manager<C, P> {
    /// Process a collection of events, and apply them changes to a manager.
    /// Returns true if changes need to be rendered.
    pub fn display_event_handler(&mut self, event: DisplayEvent) -> bool {
        let state = &mut self.state;
        match event {
            DisplayEvent::WindowCreate(window) => state.add_window(window),
            DisplayEvent::WindowDestroy(handle) => state.remove_window(&handle),
            DisplayEvent::WindowMoved(handle, x, y) => state.window_moved_handler(&handle, x, y),
            DisplayEvent::WindowResized(handle, w, h) => {
                state.window_resized_handler(&handle, w, h)
            }
            DisplayEvent::WindowTakeFocus(handle) => {
                state.focus_window(&handle);
                false
            }

            DisplayEvent::KeyPress(keycode, modifiers) => {
                state.events.emit_key_event(true, keycode, modifiers);
                self.key_press_handler(keycode, modifiers)
            }
            DisplayEvent::KeyRelease(keycode, modifiers) => {
                state.events.emit_key_event(false, keycode, modifiers);
                state.key_released(keycode);
                false
            }

            DisplayEvent::MouseButtonPress(button, modifiers, x, y) => {
                state.events.emit(Event::MousePressed {
                    x,
                    y,
                    button,
                    modifiers,
                });
                state.mouse_press_handler(button, x, y)
            }
            DisplayEvent::MouseButtonRelease(button, modifiers, x, y) => {
                state.events.emit(Event::MouseReleased {
                    x,
                    y,
                    button,
                    modifiers,
                });
                state.mouse_release_handler(button, x, y)
            }
            DisplayEvent::MouseMotion(x, y) => {
                state.events.emit(Event::MouseMoved { x, y });
                state.mouse_motion_handler(x, y)
            }
            DisplayEvent::MouseWheel(x, y, delta) => {
                state.events.emit(Event::MouseWheel { x, y, delta });
                false
            }

            DisplayEvent::MonitorAdded(monitor) => {
                let id = monitor.id;
                let added = state.add_monitor(monitor);
                if added {
                    state.events.emit(Event::MonitorAdded(id));
                }
                added
            }
            DisplayEvent::MonitorRemoved(id) => {
                let removed = state.layout_engine.remove_monitor(id);
                if removed {
                    state.events.emit(Event::MonitorRemoved(id));
                }
                removed
            }
            DisplayEvent::MonitorChanged(monitor) => {
                let id = monitor.id;
                let changed = state.layout_engine.update_monitor(monitor);
                if changed {
                    state.events.emit(Event::MonitorChanged(id));
                }
                changed
            }

            DisplayEvent::SendCommand(command) => self.command_handler(&command),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventKind;
    use crate::models::{Monitor, Window, WindowHandle};
    use crate::utils::modmask_lookup::{Button, ModMask};
    use crate::Command;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn created_windows_are_managed() {
        let mut manager = Manager::new_test(vec!["Main".to_owned()]);
        let window = Window::new(WindowHandle(5), "term").with_geometry(0, 0, 300, 200);
        assert!(manager.display_event_handler(DisplayEvent::WindowCreate(window)));
        assert_eq!(manager.state.windows.len(), 1);
        assert!(manager.display_event_handler(DisplayEvent::WindowDestroy(WindowHandle(5))));
        assert!(manager.state.windows.is_empty());
    }

    #[test]
    fn external_moves_update_geometry_without_actions() {
        let mut manager = Manager::new_test(vec![]);
        let window = Window::new(WindowHandle(5), "").with_geometry(0, 0, 300, 200);
        manager.display_event_handler(DisplayEvent::WindowCreate(window));
        manager.state.actions.clear();
        manager.display_event_handler(DisplayEvent::WindowMoved(WindowHandle(5), 30, 40));
        manager.display_event_handler(DisplayEvent::WindowResized(WindowHandle(5), 500, 400));
        assert_eq!(manager.state.windows[0].x(), 30);
        assert_eq!(manager.state.windows[0].width(), 500);
        assert!(manager.state.actions.is_empty());
    }

    #[test]
    fn key_presses_are_published_and_dispatched() {
        let mut manager = Manager::new_test(vec![]);
        let seen = Rc::new(RefCell::new(vec![]));
        let inner = seen.clone();
        manager
            .events()
            .register_handler(EventKind::KeyPressed, move |event| {
                inner.borrow_mut().push(event.clone());
                Ok(())
            });
        manager.state.bind_key("Ctrl+Shift+Q", Command::Quit);
        let mods = ModMask::Control | ModMask::Shift;
        manager.display_event_handler(DisplayEvent::KeyPress('Q' as u32, mods));
        assert!(!manager.is_running());
        assert_eq!(
            *seen.borrow(),
            vec![Event::KeyPressed {
                keycode: 'Q' as u32,
                modifiers: mods
            }]
        );
    }

    #[test]
    fn mouse_events_drive_drags() {
        let mut manager = Manager::new_test(vec![]);
        let window = Window::new(WindowHandle(1), "").with_geometry(100, 100, 400, 300);
        manager.display_event_handler(DisplayEvent::WindowCreate(window));
        let press = DisplayEvent::MouseButtonPress(Button::Button1, ModMask::Zero, 200, 110);
        manager.display_event_handler(press);
        manager.display_event_handler(DisplayEvent::MouseMotion(300, 210));
        let release = DisplayEvent::MouseButtonRelease(Button::Button1, ModMask::Zero, 300, 210);
        manager.display_event_handler(release);
        assert_eq!(manager.state.windows[0].x(), 200);
        assert_eq!(manager.state.windows[0].y(), 200);
        assert!(manager.state.mode.is_normal());
    }

    #[test]
    fn monitors_added_later_get_the_default_layout() {
        let mut manager = Manager::new_test(vec![]);
        manager.state.default_layout = "tiling".to_owned();
        let monitor = Monitor::new(1, 1920, 0, 1280, 1024);
        assert!(manager.display_event_handler(DisplayEvent::MonitorAdded(monitor.clone())));
        assert!(!manager.display_event_handler(DisplayEvent::MonitorAdded(monitor)));
        assert_eq!(manager.state.layout_engine.get_layout_name(1), "tiling");
        assert_eq!(manager.state.layout_engine.get_layout_name(0), "dynamic");

        let changed = Monitor::new(1, 1920, 0, 1600, 900);
        assert!(manager.display_event_handler(DisplayEvent::MonitorChanged(changed)));
        assert!(manager.display_event_handler(DisplayEvent::MonitorRemoved(1)));
        assert_eq!(manager.state.monitors().len(), 1);
    }
}
