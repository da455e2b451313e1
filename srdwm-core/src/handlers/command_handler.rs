#![allow(clippy::wildcard_imports)]

use super::*;
use crate::platform::Platform;
use std::collections::HashMap;

impl<C: Config, P: Platform> Manager<C, P> {
    /// Processes a command and invokes the associated function.
    /// Returns true if the windows need to be arranged again.
    pub fn command_handler(&mut self, command: &Command) -> bool {
        process_internal(self, command).unwrap_or(false)
    }
}

fn process_internal<C: Config, P: Platform>(
    manager: &mut Manager<C, P>,
    command: &Command,
) -> Option<bool> {
    let state = &mut manager.state;
    match command {
        Command::FocusNextWindow => Some(state.focus_next_window()),
        Command::FocusPreviousWindow => Some(state.focus_previous_window()),
        Command::FocusWindow(handle) => Some(state.focus_window(handle)),

        Command::CloseWindow => Some(state.close_window(&state.focused_handle()?)),
        Command::MinimizeWindow => Some(state.minimize_window(&state.focused_handle()?)),
        Command::MaximizeWindow => Some(state.maximize_window(&state.focused_handle()?)),

        Command::ToggleFloating => Some(state.toggle_window_floating(&state.focused_handle()?)),
        Command::SetFloating { window, floating } => {
            let handle = target(state, *window)?;
            Some(state.set_window_floating(&handle, *floating))
        }

        Command::MoveWindowBy { dx, dy } => move_window_by(state, *dx, *dy),
        Command::ResizeWindowBy { dw, dh } => resize_window_by(state, *dw, *dh),

        Command::SetDecorations { window, enabled } => {
            let handle = target(state, *window)?;
            Some(state.set_window_decorations(&handle, *enabled))
        }
        Command::SetBorderColor { window, r, g, b } => {
            let handle = target(state, *window)?;
            Some(state.set_window_border_color(&handle, *r, *g, *b))
        }
        Command::SetBorderWidth { window, width } => {
            let handle = target(state, *window)?;
            Some(state.set_window_border_width(&handle, *width))
        }

        Command::SwitchToWorkspace(id) => Some(state.switch_to_workspace(*id)),
        Command::MoveWindowToWorkspace { window, workspace } => {
            let handle = target(state, *window)?;
            Some(state.move_window_to_workspace(&handle, *workspace))
        }
        Command::AddWorkspace(name) => {
            state.add_workspace(name);
            Some(false)
        }
        Command::RemoveWorkspace(id) => Some(state.remove_workspace(*id)),

        Command::SetLayout { monitor, layout } => {
            Some(state.layout_engine.set_layout(*monitor, layout))
        }
        Command::ConfigureLayout { layout, config } => configure_layout(state, layout, config),

        Command::BindKey { combo, command } => {
            state.bind_key(combo.clone(), command.as_ref().clone());
            Some(false)
        }
        Command::UnbindKey(combo) => {
            state.unbind_key(combo);
            Some(false)
        }

        Command::ArrangeWindows => {
            state.arrange_windows();
            Some(true)
        }
        Command::Quit => {
            manager.quit();
            Some(false)
        }
        Command::Custom(name) => Some(C::command_handler(name, manager)),
    }
}

/// The named window, or the focused one.
fn target(state: &State, window: Option<WindowHandle>) -> Option<WindowHandle> {
    window.or_else(|| state.focused_handle())
}

fn move_window_by(state: &mut State, dx: i32, dy: i32) -> Option<bool> {
    let window = state.focused_window()?;
    let (handle, x, y) = (window.handle, window.x() + dx, window.y() + dy);
    Some(state.move_window(&handle, x, y))
}

/// Shrinking either side below the minimum is ignored.
fn resize_window_by(state: &mut State, dw: i32, dh: i32) -> Option<bool> {
    let window = state.focused_window()?;
    let (handle, width, height) = (window.handle, window.width() + dw, window.height() + dh);
    if width < MIN_RESIZE || height < MIN_RESIZE {
        return None;
    }
    Some(state.resize_window(&handle, width, height))
}

fn configure_layout(
    state: &mut State,
    layout: &str,
    config: &HashMap<String, String>,
) -> Option<bool> {
    Some(state.layout_engine.configure_layout(layout, config.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display_action::DisplayAction;
    use crate::layouts::LayoutKind;

    fn manager_with_windows() -> TestManager {
        let mut manager = Manager::new_test(vec!["Main".to_owned(), "Web".to_owned()]);
        for id in 1..=3 {
            let window = Window::new(WindowHandle(id), "").with_geometry(id * 100, 100, 400, 300);
            manager.state.add_window(window);
        }
        manager
    }

    #[test]
    fn window_commands_need_a_focused_window() {
        let mut manager = manager_with_windows();
        assert!(!manager.command_handler(&Command::CloseWindow));
        assert!(!manager.command_handler(&Command::MoveWindowBy { dx: 5, dy: 5 }));

        manager.command_handler(&Command::FocusWindow(WindowHandle(2)));
        assert!(manager.command_handler(&Command::CloseWindow));
        assert_eq!(
            manager.state.actions.back(),
            Some(&DisplayAction::CloseWindow(WindowHandle(2)))
        );
    }

    #[test]
    fn move_and_resize_by_act_on_the_focused_window() {
        let mut manager = manager_with_windows();
        manager.command_handler(&Command::FocusWindow(WindowHandle(1)));
        assert!(manager.command_handler(&Command::MoveWindowBy { dx: 10, dy: -20 }));
        assert!(manager.command_handler(&Command::ResizeWindowBy { dw: 50, dh: 50 }));
        let window = &manager.state.windows[0];
        assert_eq!((window.x(), window.y()), (110, 80));
        assert_eq!((window.width(), window.height()), (450, 350));

        assert!(!manager.command_handler(&Command::ResizeWindowBy { dw: -400, dh: 0 }));
        assert_eq!(manager.state.windows[0].width(), 450);
    }

    #[test]
    fn set_floating_targets_the_named_window() {
        let mut manager = manager_with_windows();
        let command = Command::SetFloating {
            window: Some(WindowHandle(3)),
            floating: true,
        };
        assert!(manager.command_handler(&command));
        assert!(manager.state.is_window_floating(&WindowHandle(3)));
        assert!(!manager.state.layout_engine.contains_window(&WindowHandle(3)));
    }

    #[test]
    fn layout_commands_reach_the_layout_engine() {
        let mut manager = manager_with_windows();
        assert!(manager.command_handler(&Command::SetLayout {
            monitor: 0,
            layout: "tiling".to_owned(),
        }));
        assert!(!manager.command_handler(&Command::SetLayout {
            monitor: 0,
            layout: "spiral".to_owned(),
        }));
        assert_eq!(manager.state.layout_engine.get_layout(0), LayoutKind::Tiling);

        assert!(manager.command_handler(&Command::ArrangeWindows));
        let widths: Vec<_> = manager.state.windows.iter().map(Window::width).collect();
        assert_eq!(widths, vec![640, 640, 640]);
    }

    #[test]
    fn workspace_commands_update_the_current_workspace() {
        let mut manager = manager_with_windows();
        manager.command_handler(&Command::AddWorkspace("Code".to_owned()));
        assert_eq!(manager.state.workspaces.len(), 3);
        manager.command_handler(&Command::FocusWindow(WindowHandle(1)));
        assert!(manager.command_handler(&Command::MoveWindowToWorkspace {
            window: None,
            workspace: 3,
        }));
        assert!(manager.state.workspaces[2].contains(&WindowHandle(1)));
        assert!(manager.command_handler(&Command::SwitchToWorkspace(3)));
        assert_eq!(manager.state.current_workspace, 3);
        assert!(manager.command_handler(&Command::RemoveWorkspace(3)));
        assert_eq!(manager.state.current_workspace, 1);
        assert!(manager.state.workspaces[0].contains(&WindowHandle(1)));
    }

    #[test]
    fn bind_key_registers_nested_commands() {
        let mut manager = manager_with_windows();
        manager.command_handler(&Command::BindKey {
            combo: "Mod4+J".to_owned(),
            command: Box::new(Command::FocusNextWindow),
        });
        assert!(manager.execute_key_binding("Mod4+J"));
        assert_eq!(manager.state.focused_handle(), Some(WindowHandle(1)));
        manager.command_handler(&Command::UnbindKey("Mod4+J".to_owned()));
        assert!(!manager.execute_key_binding("Mod4+J"));
    }

    #[test]
    fn custom_commands_are_routed_to_the_config() {
        let mut manager = manager_with_windows();
        assert!(manager.command_handler(&Command::Custom("SwitchToWorkspace2".to_owned())));
        assert_eq!(manager.state.current_workspace, 2);
    }

    #[test]
    fn quit_clears_the_running_flag() {
        let mut manager = manager_with_windows();
        let running = manager.running_handle();
        manager.command_handler(&Command::Quit);
        assert!(!running.load(std::sync::atomic::Ordering::SeqCst));
    }

    #[test]
    fn border_and_decoration_commands_queue_actions() {
        let mut manager = manager_with_windows();
        manager.state.actions.clear();
        manager.command_handler(&Command::SetBorderColor {
            window: Some(WindowHandle(2)),
            r: 255,
            g: 0,
            b: 0,
        });
        manager.command_handler(&Command::SetBorderWidth {
            window: Some(WindowHandle(2)),
            width: 4,
        });
        manager.command_handler(&Command::SetDecorations {
            window: Some(WindowHandle(2)),
            enabled: false,
        });
        assert_eq!(
            manager.state.actions.iter().cloned().collect::<Vec<_>>(),
            vec![
                DisplayAction::SetBorderColor(WindowHandle(2), 255, 0, 0),
                DisplayAction::SetBorderWidth(WindowHandle(2), 4),
                DisplayAction::SetDecorations(WindowHandle(2), false),
            ]
        );
    }
}
