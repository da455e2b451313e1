use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

bitflags! {
    /// Modifier keys held during a key or button event.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ModMask: u8 {
        const Zero = 0;
        const Control = 1;
        const Shift = 1 << 1;
        /// Mod1
        const Alt = 1 << 2;
        /// Mod4
        const Super = 1 << 3;
    }
}

bitflags! {
    /// Pointer buttons held during a mouse event.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Button: u8 {
        const Zero = 0;
        /// Primary, usually left
        const Button1 = 1;
        /// Middle
        const Button2 = 1 << 1;
        /// Secondary, usually right
        const Button3 = 1 << 2;
    }
}

/// Key names accepted in configuration, mapped to their key codes.
const NAMED_KEYS: &[(&str, u32)] = &[
    ("BackSpace", 8),
    ("Tab", 9),
    ("Return", 13),
    ("Escape", 27),
    ("space", 32),
    ("Left", 37),
    ("Up", 38),
    ("Right", 39),
    ("Down", 40),
    ("Delete", 46),
];

#[must_use]
pub fn into_mod(key: &str) -> ModMask {
    match key {
        "Ctrl" | "Control" => ModMask::Control,
        "Shift" => ModMask::Shift,
        "Mod1" | "Alt" => ModMask::Alt,
        "Mod4" | "Super" => ModMask::Super,
        _ => ModMask::Zero,
    }
}

/// The binding string for a key press, e.g. `Ctrl+Shift+Q` or `Mod4+Key9`.
#[must_use]
pub fn key_combo_string(keycode: u32, modifiers: ModMask) -> String {
    let key = match char::from_u32(keycode) {
        Some(c) if c.is_ascii_uppercase() || c.is_ascii_digit() => c.to_string(),
        _ => format!("Key{keycode}"),
    };
    combo_string(modifiers, &key)
}

/// Prefixes `key` with the modifiers in canonical order.
#[must_use]
pub fn combo_string(modifiers: ModMask, key: &str) -> String {
    let mut result = String::new();
    for (flag, name) in [
        (ModMask::Control, "Ctrl+"),
        (ModMask::Shift, "Shift+"),
        (ModMask::Alt, "Alt+"),
        (ModMask::Super, "Mod4+"),
    ] {
        if modifiers.contains(flag) {
            result.push_str(name);
        }
    }
    result.push_str(key);
    result
}

/// Normalises a configured key name into the token used in binding strings.
/// Letters are upper cased, named keys become `Key<code>`.
#[must_use]
pub fn key_token(key: &str) -> Option<String> {
    let mut chars = key.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if c.is_ascii_alphanumeric() {
            return Some(c.to_ascii_uppercase().to_string());
        }
    }
    if let Some(code) = key.strip_prefix("Key") {
        if !code.is_empty() && code.chars().all(|c| c.is_ascii_digit()) {
            return Some(key.to_owned());
        }
    }
    NAMED_KEYS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, code)| format!("Key{code}"))
}

// Serialized as the raw bits.

impl Serialize for ModMask {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.bits())
    }
}

impl<'de> Deserialize<'de> for ModMask {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        u8::deserialize(deserializer).map(Self::from_bits_retain)
    }
}

impl Serialize for Button {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.bits())
    }
}

impl<'de> Deserialize<'de> for Button {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        u8::deserialize(deserializer).map(Self::from_bits_retain)
    }
}
