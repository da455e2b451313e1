use crate::models::Manager;
use crate::platform::Platform;
use crate::Command;
use std::collections::HashMap;

/// What the core needs from the configuration layer.
pub trait Config {
    /// Names of the workspaces created at startup, in order.
    fn workspace_names(&self) -> Vec<String>;

    /// Layout applied to every monitor as it is discovered.
    fn default_layout(&self) -> String;

    fn smart_placement(&self) -> bool;

    fn border_width(&self) -> i32;

    /// Key combination strings and the commands bound to them.
    fn mapped_bindings(&self) -> Vec<(String, Command)>;

    /// Tuning options keyed by layout name.
    fn layout_configs(&self) -> Vec<(String, HashMap<String, String>)>;

    /// Runs a `Command::Custom`. Returns true if an update is needed.
    fn command_handler<P>(command: &str, manager: &mut Manager<Self, P>) -> bool
    where
        P: Platform,
        Self: Sized;
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    #[allow(clippy::module_name_repetitions)]
    #[derive(Default)]
    pub struct TestConfig {
        pub workspaces: Vec<String>,
        pub default_layout: String,
        pub smart_placement: bool,
        pub border_width: i32,
        pub bindings: Vec<(String, Command)>,
        pub layout_configs: Vec<(String, HashMap<String, String>)>,
    }

    impl Config for TestConfig {
        fn workspace_names(&self) -> Vec<String> {
            self.workspaces.clone()
        }

        fn default_layout(&self) -> String {
            if self.default_layout.is_empty() {
                crate::layouts::DYNAMIC.to_owned()
            } else {
                self.default_layout.clone()
            }
        }

        fn smart_placement(&self) -> bool {
            self.smart_placement
        }

        fn border_width(&self) -> i32 {
            self.border_width
        }

        fn mapped_bindings(&self) -> Vec<(String, Command)> {
            self.bindings.clone()
        }

        fn layout_configs(&self) -> Vec<(String, HashMap<String, String>)> {
            self.layout_configs.clone()
        }

        fn command_handler<P>(command: &str, manager: &mut Manager<Self, P>) -> bool
        where
            P: Platform,
        {
            match command {
                "SwitchToWorkspace2" => manager.command_handler(&Command::SwitchToWorkspace(2)),
                _ => unimplemented!("custom command handler: {:?}", command),
            }
        }
    }
}
