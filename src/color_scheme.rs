//! Canvas colors and the matching egui visuals.

use eframe::egui::{Color32, Context, Visuals};
use serde::{Deserialize, Serialize};

/// Visual theme of the sketch window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorScheme {
    /// Dark canvas: cyan outline, yellow circle, white labels.
    #[default]
    Dark,
    /// Light canvas with darker strokes for contrast.
    Light,
}

/// Colors used when painting the sketch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasPalette {
    pub background: Color32,
    pub outline: Color32,
    pub circle: Color32,
    pub label: Color32,
}

impl ColorScheme {
    pub fn all() -> &'static [ColorScheme] {
        &[ColorScheme::Dark, ColorScheme::Light]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ColorScheme::Dark => "Dark",
            ColorScheme::Light => "Light",
        }
    }

    /// Look a scheme up by its label, ignoring case.
    pub fn from_name(name: &str) -> Option<ColorScheme> {
        Self::all()
            .iter()
            .copied()
            .find(|s| s.label().eq_ignore_ascii_case(name.trim()))
    }

    pub fn visuals(&self) -> Visuals {
        let palette = self.palette();
        let mut v = match self {
            ColorScheme::Dark => Visuals::dark(),
            ColorScheme::Light => Visuals::light(),
        };
        v.extreme_bg_color = palette.background;
        v
    }

    /// Apply this scheme's visuals to an egui context.
    pub fn apply(&self, ctx: &Context) {
        ctx.set_visuals(self.visuals());
    }

    pub fn palette(&self) -> CanvasPalette {
        match self {
            ColorScheme::Dark => CanvasPalette {
                background: Color32::from_rgb(24, 24, 27),
                outline: Color32::from_rgb(0, 255, 255),
                circle: Color32::YELLOW,
                label: Color32::WHITE,
            },
            ColorScheme::Light => CanvasPalette {
                background: Color32::from_rgb(250, 250, 247),
                outline: Color32::from_rgb(0, 139, 139),
                circle: Color32::from_rgb(181, 137, 0),
                label: Color32::from_rgb(51, 51, 51),
            },
        }
    }
}

impl std::fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
