use super::{check_workspace_names, Config};
use srdwm_core::layouts::LayoutKind;
use std::collections::HashMap;
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

impl Config {
    /// Returns a description of the problem if `log_level` is not a valid filter.
    #[must_use]
    pub fn check_log_level(&self, verbose: bool) -> Option<String> {
        if verbose {
            println!("Trying to parse log_level.");
        }
        match EnvFilter::builder().parse(&self.log_level) {
            Ok(_) => None,
            Err(err) => Some(format!("Log level is invalid: {err}")),
        }
    }

    #[must_use]
    pub fn check_layout(&self, verbose: bool) -> Option<String> {
        if verbose {
            println!("Checking default layout `{}`.", self.default_layout);
        }
        LayoutKind::from_str(&self.default_layout)
            .err()
            .map(|err| format!("Default layout is invalid: {err}"))
    }

    #[must_use]
    pub fn check_workspaces(&self, verbose: bool) -> Vec<String> {
        if verbose {
            println!("Checking workspaces: {:?}", self.workspaces);
        }
        let mut issues = vec![];
        if self.workspaces.is_empty() {
            issues.push("No workspaces are configured.".to_owned());
        }
        if self.workspaces.iter().any(|name| name.trim().is_empty()) {
            issues.push("Workspace names must not be empty.".to_owned());
        }
        if !check_workspace_names(&self.workspaces) {
            issues.push("Workspace names must be unique.".to_owned());
        }
        issues
    }

    /// Check all keybinds to ensure that required values are provided and
    /// that no key combination is bound twice.
    #[must_use]
    pub fn check_keybinds(&self, verbose: bool) -> Vec<String> {
        let mut issues = vec![];
        let mut bound: HashMap<String, usize> = HashMap::new();
        for (index, keybind) in self.keybind.iter().enumerate() {
            if verbose {
                println!(
                    "Keybind: {:?} value field is empty: {}",
                    keybind,
                    keybind.value.is_empty()
                );
            }
            match keybind.try_convert_to_binding(&self.modkey) {
                Ok((combo, _)) => {
                    if let Some(first) = bound.insert(combo.clone(), index) {
                        issues.push(format!(
                            "Multiple commands bound to key combination {combo}: \
                             {:?} and {:?}",
                            self.keybind[first].command, keybind.command
                        ));
                    }
                }
                Err(err) => issues.push(format!("{keybind:?}: {err:#}")),
            }
        }
        issues
    }

    /// Every problem found, in the order the checks run.
    #[must_use]
    pub fn check(&self, verbose: bool) -> Vec<String> {
        let mut issues = vec![];
        issues.extend(self.check_log_level(verbose));
        issues.extend(self.check_layout(verbose));
        issues.extend(self.check_workspaces(verbose));
        issues.extend(self.check_keybinds(verbose));
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BaseCommand, Keybind};

    #[test]
    fn the_default_config_has_no_issues() {
        assert_eq!(Config::default().check(false), Vec::<String>::new());
    }

    #[test]
    fn conflicting_keybinds_are_reported() {
        let config = Config {
            keybind: vec![
                Keybind::new(BaseCommand::Quit, "", &["modkey"], "q"),
                Keybind::new(BaseCommand::CloseWindow, "", &["Mod4"], "Q"),
                Keybind::new(BaseCommand::SwitchToWorkspace, "x", &["modkey"], "1"),
            ],
            ..Config::default()
        };
        let issues = config.check_keybinds(false);
        assert_eq!(issues.len(), 2);
        assert!(issues[0].contains("Mod4+Q"));
        assert!(issues[1].contains("SwitchToWorkspace"));
    }

    #[test]
    fn bad_layout_level_and_workspaces_are_reported() {
        let config = Config {
            log_level: "srdwm=loud".to_owned(),
            default_layout: "spiral".to_owned(),
            workspaces: vec!["Main".to_owned(), "Main".to_owned(), " ".to_owned()],
            ..Config::default()
        };
        assert!(config.check_log_level(false).is_some());
        assert!(config.check_layout(false).is_some());
        assert_eq!(config.check_workspaces(false).len(), 2);
    }
}
