#![allow(clippy::wildcard_imports)]

use super::*;
use crate::platform::Platform;
use crate::utils::modmask_lookup::{key_combo_string, ModMask};

impl State {
    /// Binds a key combination string. A later binding replaces an earlier one.
    pub fn bind_key(&mut self, combo: impl Into<String>, command: Command) {
        let combo = combo.into();
        tracing::debug!("Binding {} to {:?}", combo, command);
        self.key_bindings.insert(combo, command);
    }

    pub fn unbind_key(&mut self, combo: &str) -> bool {
        self.key_bindings.remove(combo).is_some()
    }

    /// Records the key as held and looks up its binding.
    pub fn key_pressed(&mut self, keycode: u32, modifiers: ModMask) -> Option<Command> {
        self.pressed_keys.insert(keycode, modifiers);
        let combo = key_combo_string(keycode, modifiers);
        tracing::trace!("Key press {} -> {:?}", keycode, combo);
        self.key_bindings.get(&combo).cloned()
    }

    pub fn key_released(&mut self, keycode: u32) {
        self.pressed_keys.remove(&keycode);
    }
}

impl<C: Config, P: Platform> Manager<C, P> {
    /// Runs the command bound to the key press, if any.
    pub fn key_press_handler(&mut self, keycode: u32, modifiers: ModMask) -> bool {
        match self.state.key_pressed(keycode, modifiers) {
            Some(command) => self.command_handler(&command),
            None => false,
        }
    }

    /// Runs the command bound to an exact combination string.
    pub fn execute_key_binding(&mut self, combo: &str) -> bool {
        match self.state.key_bindings.get(combo).cloned() {
            Some(command) => {
                tracing::debug!("Executing key binding for {:?}", combo);
                self.command_handler(&command)
            }
            None => false,
        }
    }
}
