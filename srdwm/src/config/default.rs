use super::keybind::{BaseCommand, Keybind};
use super::{Config, Settings};
use srdwm_core::layouts::{DYNAMIC, TILING};
use std::collections::BTreeMap;

const WORKSPACES: [&str; 4] = ["Main", "Web", "Code", "Media"];
const STEP: i32 = 50;

impl Default for Config {
    fn default() -> Self {
        let mut settings = Settings::default();
        for (key, value) in [
            ("general.window_gap", 8),
            ("general.animation_duration", 200),
        ] {
            // Only fails on non table prefixes, which a fresh table cannot have.
            let _ = settings.set_int(key, value);
        }
        let _ = settings.set_bool("general.animations", true);

        Self {
            modkey: "Mod4".to_owned(),
            log_level: "info".to_owned(),
            default_layout: TILING.to_owned(),
            smart_placement: true,
            border_width: 2,
            workspaces: WORKSPACES.iter().map(ToString::to_string).collect(),
            layouts: BTreeMap::new(),
            settings,
            keybind: default_keybinds(),
        }
    }
}

fn default_keybinds() -> Vec<Keybind> {
    let mut keybinds = vec![
        // Mod + Tab => focus next window
        Keybind::new(BaseCommand::FocusNextWindow, "", &["modkey"], "Tab"),
        Keybind::new(BaseCommand::FocusPreviousWindow, "", &["modkey", "Shift"], "Tab"),
        // Mod + t / d => tiling / dynamic layout
        Keybind::new(BaseCommand::SetLayout, TILING, &["modkey"], "t"),
        Keybind::new(BaseCommand::SetLayout, DYNAMIC, &["modkey"], "d"),
        Keybind::new(BaseCommand::ToggleSmartPlacement, "", &["modkey"], "s"),
        Keybind::new(BaseCommand::CycleLayout, "", &["modkey", "Shift"], "l"),
        Keybind::new(BaseCommand::CloseWindow, "", &["modkey"], "q"),
        Keybind::new(BaseCommand::MaximizeWindow, "", &["modkey"], "m"),
        Keybind::new(BaseCommand::ToggleFloating, "", &["modkey"], "f"),
        Keybind::new(BaseCommand::MinimizeWindow, "", &["modkey"], "space"),
        // Mod + Shift + q => exit
        Keybind::new(BaseCommand::Quit, "", &["modkey", "Shift"], "q"),
    ];

    // Mod + Shift + arrows => move, Mod + Ctrl + arrows => resize
    for (key, dx, dy) in [
        ("Left", -STEP, 0),
        ("Right", STEP, 0),
        ("Up", 0, -STEP),
        ("Down", 0, STEP),
    ] {
        let value = format!("{dx} {dy}");
        keybinds.push(Keybind::new(
            BaseCommand::MoveWindowBy,
            &value,
            &["modkey", "Shift"],
            key,
        ));
        keybinds.push(Keybind::new(
            BaseCommand::ResizeWindowBy,
            &value,
            &["modkey", "Control"],
            key,
        ));
    }

    // Mod + n => switch to workspace n, Mod + Shift + n => send the window there
    for id in 1..=WORKSPACES.len() {
        let id = id.to_string();
        keybinds.push(Keybind::new(BaseCommand::SwitchToWorkspace, &id, &["modkey"], &id));
        keybinds.push(Keybind::new(
            BaseCommand::MoveToWorkspace,
            &id,
            &["modkey", "Shift"],
            &id,
        ));
    }
    keybinds
}
