use anyhow::{bail, ensure, Context, Result};
use serde::{Deserialize, Serialize};
use srdwm_core::layouts::LayoutKind;
use srdwm_core::utils::modmask_lookup::{combo_string, into_mod, key_token, ModMask};
use srdwm_core::Command;
use std::str::FromStr;

/// Custom command names understood by [`crate::Config`].
pub const CYCLE_LAYOUT: &str = "CycleLayout";
pub const TOGGLE_SMART_PLACEMENT: &str = "ToggleSmartPlacement";

/// Names the `command` field of a `[[keybind]]` entry may take.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseCommand {
    FocusNextWindow,
    FocusPreviousWindow,
    CloseWindow,
    MinimizeWindow,
    MaximizeWindow,
    ToggleFloating,
    /// `value` is `"dx dy"`.
    MoveWindowBy,
    /// `value` is `"dw dh"`.
    ResizeWindowBy,
    SetBorderWidth,
    SetDecorations,
    SwitchToWorkspace,
    MoveToWorkspace,
    AddWorkspace,
    RemoveWorkspace,
    /// Applies the layout named by `value` to the first monitor.
    SetLayout,
    CycleLayout,
    ToggleSmartPlacement,
    ArrangeWindows,
    Quit,
    /// Hands `value` to the configuration's custom command handler.
    Custom,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Keybind {
    pub command: BaseCommand,
    #[serde(default)]
    pub value: String,
    /// Modifier names; `modkey` stands for the configured modkey.
    #[serde(default)]
    pub modifier: Vec<String>,
    pub key: String,
}

impl Keybind {
    pub fn new(command: BaseCommand, value: &str, modifier: &[&str], key: &str) -> Self {
        Self {
            command,
            value: value.to_owned(),
            modifier: modifier.iter().map(|m| (*m).to_owned()).collect(),
            key: key.to_owned(),
        }
    }

    /// The canonical combination string this keybind is bound to.
    ///
    /// # Errors
    ///
    /// Fails on unknown modifier or key names.
    pub fn combo(&self, modkey: &str) -> Result<String> {
        let mut mask = ModMask::Zero;
        for name in &self.modifier {
            let name: &str = if name == "modkey" { modkey } else { name };
            let flag = into_mod(name);
            ensure!(
                flag != ModMask::Zero || name == "None",
                "Modifier `{name}` is not valid"
            );
            mask |= flag;
        }
        let key =
            key_token(&self.key).with_context(|| format!("Key `{}` is not valid", self.key))?;
        Ok(combo_string(mask, &key))
    }

    /// # Errors
    ///
    /// Fails if the combination is invalid or `value` does not fit the command.
    pub fn try_convert_to_binding(&self, modkey: &str) -> Result<(String, Command)> {
        let combo = self.combo(modkey)?;
        let value = self.value.trim();
        let command = match self.command {
            BaseCommand::FocusNextWindow => Command::FocusNextWindow,
            BaseCommand::FocusPreviousWindow => Command::FocusPreviousWindow,
            BaseCommand::CloseWindow => Command::CloseWindow,
            BaseCommand::MinimizeWindow => Command::MinimizeWindow,
            BaseCommand::MaximizeWindow => Command::MaximizeWindow,
            BaseCommand::ToggleFloating => Command::ToggleFloating,
            BaseCommand::MoveWindowBy => {
                let (dx, dy) = pair(value).context("invalid offset for MoveWindowBy")?;
                Command::MoveWindowBy { dx, dy }
            }
            BaseCommand::ResizeWindowBy => {
                let (dw, dh) = pair(value).context("invalid delta for ResizeWindowBy")?;
                Command::ResizeWindowBy { dw, dh }
            }
            BaseCommand::SetBorderWidth => Command::SetBorderWidth {
                window: None,
                width: i32::from_str(value).context("invalid width for SetBorderWidth")?,
            },
            BaseCommand::SetDecorations => Command::SetDecorations {
                window: None,
                enabled: bool::from_str(value).context("invalid boolean for SetDecorations")?,
            },
            BaseCommand::SwitchToWorkspace => Command::SwitchToWorkspace(
                i32::from_str(value).context("invalid index value for SwitchToWorkspace")?,
            ),
            BaseCommand::MoveToWorkspace => Command::MoveWindowToWorkspace {
                window: None,
                workspace: i32::from_str(value)
                    .context("invalid index value for MoveToWorkspace")?,
            },
            BaseCommand::AddWorkspace => {
                ensure!(!value.is_empty(), "value must not be empty");
                Command::AddWorkspace(value.to_owned())
            }
            BaseCommand::RemoveWorkspace => Command::RemoveWorkspace(
                i32::from_str(value).context("invalid index value for RemoveWorkspace")?,
            ),
            BaseCommand::SetLayout => {
                LayoutKind::from_str(value)
                    .context("could not parse layout for command SetLayout")?;
                Command::SetLayout {
                    monitor: 0,
                    layout: value.to_owned(),
                }
            }
            BaseCommand::CycleLayout => Command::Custom(CYCLE_LAYOUT.to_owned()),
            BaseCommand::ToggleSmartPlacement => {
                Command::Custom(TOGGLE_SMART_PLACEMENT.to_owned())
            }
            BaseCommand::ArrangeWindows => Command::ArrangeWindows,
            BaseCommand::Quit => Command::Quit,
            BaseCommand::Custom => {
                ensure!(!value.is_empty(), "value must not be empty");
                Command::Custom(value.to_owned())
            }
        };
        Ok((combo, command))
    }
}

fn pair(value: &str) -> Result<(i32, i32)> {
    let mut parts = value.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(a), Some(b), None) => Ok((i32::from_str(a)?, i32::from_str(b)?)),
        _ => bail!("expected two numbers separated by a space, got `{value}`"),
    }
}
