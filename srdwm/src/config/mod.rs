//! `srdwm` general configuration

mod checks;
mod default;
pub mod keybind;
pub mod settings;

pub use self::keybind::{BaseCommand, Keybind};
pub use self::settings::{SettingError, Settings};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use srdwm_core::{Manager, Platform};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use toml::{Table, Value};
use xdg::BaseDirectories;

/// General configuration
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub modkey: String,
    pub log_level: String,
    pub default_layout: String,
    pub smart_placement: bool,
    pub border_width: i32,
    pub workspaces: Vec<String>,
    /// Options handed to `LayoutEngine::configure_layout`, keyed by layout name.
    pub layouts: BTreeMap<String, Table>,
    pub settings: Settings,
    pub keybind: Vec<Keybind>,
}

#[must_use]
pub fn load() -> Config {
    load_from_file()
        .map_err(|err| tracing::error!("Error loading config: {:?}", err))
        .unwrap_or_default()
}

/// Reads `$XDG_CONFIG_HOME/srdwm/config.toml`, writing the default
/// configuration there first if it does not exist yet.
///
/// # Errors
///
/// Fails if the config directory cannot be created, or the file cannot be
/// read, parsed or written.
pub fn load_from_file() -> Result<Config> {
    let config_filename = get_default_path()?;
    if config_filename.exists() {
        load_from_path(&config_filename)
    } else {
        let config = Config::default();
        let toml = toml::to_string(&config).context("could not serialize default config")?;
        fs::write(&config_filename, toml)
            .with_context(|| format!("could not write {}", config_filename.display()))?;
        Ok(config)
    }
}

/// # Errors
///
/// Fails if the file cannot be read or is not valid config TOML.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("could not read {}", path.display()))?;
    let config: Config =
        toml::from_str(&contents).with_context(|| format!("could not parse {}", path.display()))?;
    if check_workspace_names(&config.workspaces) {
        Ok(config)
    } else {
        tracing::warn!("Duplicate workspace names in config. Falling back to default config.");
        Ok(Config::default())
    }
}

/// # Errors
///
/// Fails if the XDG base directories cannot be resolved or created.
pub fn get_default_path() -> Result<PathBuf> {
    let path = BaseDirectories::with_prefix("srdwm")?;
    let config_filename = path
        .place_config_file("config.toml")
        .context("could not create config directory")?;
    Ok(config_filename)
}

#[must_use]
pub fn check_workspace_names(names: &[String]) -> bool {
    let mut sorted = names.to_vec();
    sorted.sort();
    sorted.dedup();
    names.len() == sorted.len()
}

impl Config {
    /// Every keybind that converts, in file order. Broken ones are logged
    /// and dropped.
    #[must_use]
    pub fn bindings(&self) -> Vec<(String, srdwm_core::Command)> {
        self.keybind
            .iter()
            .filter_map(|keybind| match keybind.try_convert_to_binding(&self.modkey) {
                Ok(binding) => Some(binding),
                Err(err) => {
                    tracing::warn!("Ignoring keybind {:?}: {:#}", keybind, err);
                    None
                }
            })
            .collect()
    }
}

fn option_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

impl srdwm_core::Config for Config {
    fn workspace_names(&self) -> Vec<String> {
        self.workspaces.clone()
    }

    fn default_layout(&self) -> String {
        self.default_layout.clone()
    }

    fn smart_placement(&self) -> bool {
        self.smart_placement
    }

    fn border_width(&self) -> i32 {
        self.border_width
    }

    fn mapped_bindings(&self) -> Vec<(String, srdwm_core::Command)> {
        self.bindings()
    }

    fn layout_configs(&self) -> Vec<(String, HashMap<String, String>)> {
        self.layouts
            .iter()
            .map(|(name, options)| {
                let options = options
                    .iter()
                    .map(|(key, value)| (key.clone(), option_string(value)))
                    .collect();
                (name.clone(), options)
            })
            .collect()
    }

    fn command_handler<P>(command: &str, manager: &mut Manager<Self, P>) -> bool
    where
        P: Platform,
    {
        match command {
            keybind::CYCLE_LAYOUT => cycle_layout(manager),
            keybind::TOGGLE_SMART_PLACEMENT => {
                let state = &mut manager.state;
                state.smart_placement = !state.smart_placement;
                tracing::info!("Smart placement enabled: {}", state.smart_placement);
                false
            }
            _ => {
                tracing::warn!("Unknown custom command: {}", command);
                false
            }
        }
    }
}

/// Moves the monitor under the focused window, or the first monitor, on to
/// the next available layout.
fn cycle_layout<P: Platform>(manager: &mut Manager<Config, P>) -> bool {
    let state = &mut manager.state;
    let engine = &state.layout_engine;
    let monitor = state
        .focused_handle()
        .and_then(|handle| engine.update_window(&handle, &state.windows))
        .or_else(|| engine.monitors().first().map(|m| m.id));
    let Some(monitor) = monitor else {
        return false;
    };
    let layouts = engine.get_available_layouts();
    let current = engine.get_layout_name(monitor);
    let next = layouts
        .iter()
        .position(|name| *name == current)
        .map_or(0, |i| (i + 1) % layouts.len());
    match layouts.get(next) {
        Some(layout) => state.layout_engine.set_layout(monitor, layout),
        None => false,
    }
}
