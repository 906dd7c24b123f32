//! Configuration for the sketch window.
//!
//! [`SketchConfig`] is the runtime configuration handed to
//! [`run_sketch`](crate::run_sketch). [`SketchConfigFile`] is its serializable
//! mirror, read from YAML or JSON and applied on top of the defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::color_scheme::ColorScheme;
use crate::data::hotkeys::Hotkeys;
use crate::events::EventController;

/// Default inner window size in logical pixels.
pub const DEFAULT_WINDOW_SIZE: [f32; 2] = [1280.0, 800.0];

/// Runtime configuration of the sketch application.
pub struct SketchConfig {
    /// Window title.
    pub title: String,
    pub color_scheme: ColorScheme,
    /// Hotkeys; `None` falls back to `~/.parasketch/hotkeys.yaml`, then defaults.
    pub hotkeys: Option<Hotkeys>,
    /// Initial inner window size in logical pixels.
    pub window_size: [f32; 2],
    /// Draw the `x, y` label above each point.
    pub show_coordinates: bool,
    /// Save PNGs here without a file dialog.
    pub screenshot_dir: Option<PathBuf>,
    /// Receives sketch events for external observers.
    pub event_controller: Option<EventController>,
    /// Full control over the native window; overrides `window_size` when its
    /// viewport already carries a size.
    pub native_options: Option<eframe::NativeOptions>,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            title: "Parallelogram Sketch".to_string(),
            color_scheme: ColorScheme::default(),
            hotkeys: None,
            window_size: DEFAULT_WINDOW_SIZE,
            show_coordinates: true,
            screenshot_dir: None,
            event_controller: None,
            native_options: None,
        }
    }
}

impl std::fmt::Debug for SketchConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SketchConfig")
            .field("title", &self.title)
            .field("color_scheme", &self.color_scheme)
            .field("hotkeys", &self.hotkeys)
            .field("window_size", &self.window_size)
            .field("show_coordinates", &self.show_coordinates)
            .field("screenshot_dir", &self.screenshot_dir)
            .field("event_controller", &self.event_controller)
            .field("native_options", &self.native_options.is_some())
            .finish()
    }
}

impl SketchConfig {
    /// Defaults overlaid with the file at `path`.
    pub fn from_file(path: &Path) -> Result<Self, String> {
        let mut cfg = Self::default();
        SketchConfigFile::load(path)?.apply_to(&mut cfg);
        Ok(cfg)
    }
}

/// Serializable subset of [`SketchConfig`]; every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SketchConfigFile {
    pub title: Option<String>,
    pub color_scheme: Option<ColorScheme>,
    pub hotkeys: Option<Hotkeys>,
    pub window_size: Option<[f32; 2]>,
    pub show_coordinates: Option<bool>,
    pub screenshot_dir: Option<PathBuf>,
}

impl SketchConfigFile {
    /// Read a config file; `.json` files are parsed as JSON, anything else
    /// as YAML.
    pub fn load(path: &Path) -> Result<Self, String> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {:?}: {}", path, e))?;
        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));
        if is_json {
            serde_json::from_str(&text).map_err(|e| format!("Invalid config {:?}: {}", path, e))
        } else {
            serde_yaml::from_str(&text).map_err(|e| format!("Invalid config {:?}: {}", path, e))
        }
    }

    pub fn save_yaml(&self, path: &Path) -> Result<(), String> {
        let s = serde_yaml::to_string(self).map_err(|e| format!("Serialization error: {}", e))?;
        std::fs::write(path, s).map_err(|e| format!("Failed to write file {:?}: {}", path, e))
    }

    /// Overwrite the fields of `cfg` that are set in this file.
    pub fn apply_to(self, cfg: &mut SketchConfig) {
        if let Some(title) = self.title {
            cfg.title = title;
        }
        if let Some(scheme) = self.color_scheme {
            cfg.color_scheme = scheme;
        }
        if let Some(hotkeys) = self.hotkeys {
            cfg.hotkeys = Some(hotkeys);
        }
        if let Some(size) = self.window_size {
            cfg.window_size = size;
        }
        if let Some(show) = self.show_coordinates {
            cfg.show_coordinates = show;
        }
        if let Some(dir) = self.screenshot_dir {
            cfg.screenshot_dir = Some(dir);
        }
    }
}

impl From<&SketchConfig> for SketchConfigFile {
    fn from(cfg: &SketchConfig) -> Self {
        Self {
            title: Some(cfg.title.clone()),
            color_scheme: Some(cfg.color_scheme),
            hotkeys: cfg.hotkeys.clone(),
            window_size: Some(cfg.window_size),
            show_coordinates: Some(cfg.show_coordinates),
            screenshot_dir: cfg.screenshot_dir.clone(),
        }
    }
}
