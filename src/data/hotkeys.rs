//! Keyboard shortcuts for the sketch window.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Modifier keys (combinations) used for hotkeys.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Modifier {
    None,
    Ctrl,
    Alt,
    Shift,
    CtrlAlt,
    CtrlShift,
    AltShift,
    CtrlAltShift,
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Modifier::None => "",
            Modifier::Ctrl => "Ctrl",
            Modifier::Alt => "Alt",
            Modifier::Shift => "Shift",
            Modifier::CtrlAlt => "Ctrl+Alt",
            Modifier::CtrlShift => "Ctrl+Shift",
            Modifier::AltShift => "Alt+Shift",
            Modifier::CtrlAltShift => "Ctrl+Alt+Shift",
        };
        write!(f, "{}", s)
    }
}

/// A single hotkey: optional modifier(s) plus a character key.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hotkey {
    pub modifier: Modifier,
    pub key: char,
}

impl Hotkey {
    pub fn new(modifier: Modifier, key: char) -> Self {
        Self { modifier, key }
    }
}

impl fmt::Display for Hotkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifier == Modifier::None {
            write!(f, "{}", self.key)
        } else {
            write!(f, "{}+{}", self.modifier, self.key)
        }
    }
}

impl FromStr for Hotkey {
    type Err = String;

    /// Accepts `"R"`, `"Ctrl+S"`, `"alt + shift + x"` and so on.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err("empty hotkey".to_string());
        }
        let parts: Vec<&str> = s.split('+').map(|p| p.trim()).collect();
        let (last, mods) = match parts.split_last() {
            Some(split) => split,
            None => return Err("invalid hotkey".to_string()),
        };
        let mut chars = last.chars();
        let key = chars.next().ok_or_else(|| "no key char".to_string())?;
        if chars.next().is_some() {
            return Err(format!("key must be a single character, got '{}'", last));
        }

        let mut lowers: Vec<String> = mods
            .iter()
            .map(|m| match m.to_lowercase().as_str() {
                "control" => "ctrl".to_string(),
                other => other.to_string(),
            })
            .collect();
        lowers.sort();
        lowers.dedup();
        let lowers: Vec<&str> = lowers.iter().map(String::as_str).collect();
        let modifier = match lowers.as_slice() {
            [] => Modifier::None,
            ["ctrl"] => Modifier::Ctrl,
            ["alt"] => Modifier::Alt,
            ["shift"] => Modifier::Shift,
            ["alt", "ctrl"] => Modifier::CtrlAlt,
            ["ctrl", "shift"] => Modifier::CtrlShift,
            ["alt", "shift"] => Modifier::AltShift,
            ["alt", "ctrl", "shift"] => Modifier::CtrlAltShift,
            _ => return Err(format!("unknown modifier combo '{:?}'", mods)),
        };
        Ok(Hotkey::new(modifier, key.to_ascii_uppercase()))
    }
}

/// All configurable hotkeys.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hotkeys {
    pub reset: Hotkey,
    pub save_png: Hotkey,
}

impl Default for Hotkeys {
    fn default() -> Self {
        Self {
            reset: Hotkey::new(Modifier::None, 'R'),
            save_png: Hotkey::new(Modifier::None, 'S'),
        }
    }
}

impl Hotkeys {
    pub fn reset_defaults(&mut self) {
        *self = Hotkeys::default();
    }

    /// `~/.parasketch/hotkeys.yaml`
    pub fn default_path() -> Result<PathBuf, String> {
        let home = std::env::var("HOME").map_err(|e| format!("HOME env var not set: {}", e))?;
        Ok(PathBuf::from(home).join(".parasketch").join("hotkeys.yaml"))
    }

    pub fn save_to_path(&self, path: &Path) -> Result<(), String> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .map_err(|e| format!("Failed to create dir {:?}: {}", dir, e))?;
        }
        let s = serde_yaml::to_string(self).map_err(|e| format!("Serialization error: {}", e))?;
        fs::write(path, s).map_err(|e| format!("Failed to write file {:?}: {}", path, e))
    }

    pub fn load_from_path(path: &Path) -> Result<Hotkeys, String> {
        let s = fs::read_to_string(path).map_err(|e| format!("Failed to read {:?}: {}", path, e))?;
        serde_yaml::from_str(&s).map_err(|e| format!("Deserialization error: {}", e))
    }

    pub fn save_to_default_path(&self) -> Result<(), String> {
        self.save_to_path(&Self::default_path()?)
    }

    /// Load from `~/.parasketch/hotkeys.yaml` if present.
    pub fn load_from_default_path() -> Result<Hotkeys, String> {
        let path = Self::default_path()?;
        if !path.exists() {
            return Err(format!("Hotkeys file {:?} does not exist", path));
        }
        Self::load_from_path(&path)
    }

    pub fn get(&self, name: HotkeyName) -> &Hotkey {
        match name {
            HotkeyName::Reset => &self.reset,
            HotkeyName::SavePng => &self.save_png,
        }
    }
}

/// Identifies a hotkey-triggered action.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HotkeyName {
    Reset,
    SavePng,
}

impl HotkeyName {
    pub const ALL: [HotkeyName; 2] = [HotkeyName::Reset, HotkeyName::SavePng];
}

/// Tooltip text for a button, with its hotkey in brackets when it has one.
pub fn format_button_tooltip(description: &str, hotkey: Option<&Hotkey>) -> String {
    match hotkey {
        Some(hk) => format!("{} [{}]", description, hk),
        None => description.to_string(),
    }
}

fn key_from_char(c: char) -> Option<egui::Key> {
    use egui::Key;
    let key = match c.to_ascii_uppercase() {
        'A' => Key::A,
        'B' => Key::B,
        'C' => Key::C,
        'D' => Key::D,
        'E' => Key::E,
        'F' => Key::F,
        'G' => Key::G,
        'H' => Key::H,
        'I' => Key::I,
        'J' => Key::J,
        'K' => Key::K,
        'L' => Key::L,
        'M' => Key::M,
        'N' => Key::N,
        'O' => Key::O,
        'P' => Key::P,
        'Q' => Key::Q,
        'R' => Key::R,
        'S' => Key::S,
        'T' => Key::T,
        'U' => Key::U,
        'V' => Key::V,
        'W' => Key::W,
        'X' => Key::X,
        'Y' => Key::Y,
        'Z' => Key::Z,
        '0' => Key::Num0,
        '1' => Key::Num1,
        '2' => Key::Num2,
        '3' => Key::Num3,
        '4' => Key::Num4,
        '5' => Key::Num5,
        '6' => Key::Num6,
        '7' => Key::Num7,
        '8' => Key::Num8,
        '9' => Key::Num9,
        ' ' => Key::Space,
        _ => return None,
    };
    Some(key)
}

fn modifiers_match(mods: &egui::Modifiers, modifier: Modifier) -> bool {
    let ctrl = mods.ctrl || mods.command;
    let alt = mods.alt;
    let shift = mods.shift;
    match modifier {
        Modifier::None => !ctrl && !alt,
        Modifier::Ctrl => ctrl && !alt,
        Modifier::Alt => alt && !ctrl,
        Modifier::Shift => shift && !ctrl && !alt,
        Modifier::CtrlAlt => ctrl && alt,
        Modifier::CtrlShift => ctrl && shift && !alt,
        Modifier::AltShift => alt && shift && !ctrl,
        Modifier::CtrlAltShift => ctrl && alt && shift,
    }
}

fn is_hotkey_pressed(hk: &Hotkey, input: &egui::InputState) -> bool {
    let Some(key) = key_from_char(hk.key) else {
        return false;
    };
    modifiers_match(&input.modifiers, hk.modifier) && input.key_pressed(key)
}

/// Actions whose hotkey was pressed this frame.
///
/// Nothing is reported while a text field has keyboard focus.
pub fn detect_hotkey_actions(cfg: &Hotkeys, ctx: &egui::Context) -> Vec<HotkeyName> {
    if ctx.wants_keyboard_input() {
        return Vec::new();
    }
    ctx.input(|input| {
        HotkeyName::ALL
            .into_iter()
            .filter(|name| is_hotkey_pressed(cfg.get(*name), input))
            .collect()
    })
}
