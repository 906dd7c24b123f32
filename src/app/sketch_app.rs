//! [`SketchApp`]: the top-level view that owns the sketch state.

use std::path::PathBuf;

use eframe::egui;

use crate::color_scheme::ColorScheme;
use crate::config::SketchConfig;
use crate::data::geometry::SketchGeometry;
use crate::data::hotkeys::{self, format_button_tooltip, HotkeyName, Hotkeys};
use crate::data::interaction::PointerInput;
use crate::data::points::PointStore;
use crate::events::{ClickMeta, DragMeta, EventController, EventKind, ScreenshotMeta, SketchEvent};

use super::canvas::{self, CanvasStyle};
use super::screenshot::{default_file_name, ScreenshotState};

/// The parallelogram sketch as an [`eframe::App`].
///
/// All state changes go through [`handle_input`](Self::handle_input): the
/// input is applied to the [`PointStore`], geometry is derived again from
/// scratch, and an event is emitted, all before the next input is looked at.
pub struct SketchApp {
    store: PointStore,
    geometry: SketchGeometry,
    hotkeys: Hotkeys,
    color_scheme: ColorScheme,
    show_coordinates: bool,
    screenshot_dir: Option<PathBuf>,
    event_ctrl: Option<EventController>,
    screenshot: ScreenshotState,
    scheme_applied: bool,
}

impl Default for SketchApp {
    fn default() -> Self {
        Self {
            store: PointStore::new(),
            geometry: SketchGeometry::default(),
            hotkeys: Hotkeys::default(),
            color_scheme: ColorScheme::default(),
            show_coordinates: true,
            screenshot_dir: None,
            event_ctrl: None,
            screenshot: ScreenshotState::default(),
            scheme_applied: false,
        }
    }
}

impl SketchApp {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a config, taking its event controller.
    ///
    /// Hotkeys fall back to `~/.parasketch/hotkeys.yaml`, then to defaults.
    pub fn from_config(cfg: &mut SketchConfig) -> Self {
        let hotkeys = cfg
            .hotkeys
            .clone()
            .or_else(|| Hotkeys::load_from_default_path().ok())
            .unwrap_or_default();
        Self {
            hotkeys,
            color_scheme: cfg.color_scheme,
            show_coordinates: cfg.show_coordinates,
            screenshot_dir: cfg.screenshot_dir.clone(),
            event_ctrl: cfg.event_controller.take(),
            ..Self::default()
        }
    }

    pub fn with_event_controller(mut self, ctrl: EventController) -> Self {
        self.event_ctrl = Some(ctrl);
        self
    }

    pub fn store(&self) -> &PointStore {
        &self.store
    }

    pub fn geometry(&self) -> &SketchGeometry {
        &self.geometry
    }

    pub fn hotkeys(&self) -> &Hotkeys {
        &self.hotkeys
    }

    pub fn color_scheme(&self) -> ColorScheme {
        self.color_scheme
    }

    /// Switch scheme; visuals are applied on the next frame.
    pub fn set_color_scheme(&mut self, scheme: ColorScheme) {
        self.color_scheme = scheme;
        self.scheme_applied = false;
    }

    /// Apply one input and re-derive the geometry.
    ///
    /// Returns the event categories produced; empty means nothing changed.
    pub fn handle_input(&mut self, input: PointerInput) -> EventKind {
        let mut kinds = input.apply(&mut self.store);
        if kinds.is_empty() {
            tracing::debug!(?input, "input ignored");
            return kinds;
        }
        let previous = self.geometry.shape();
        self.geometry = SketchGeometry::derive(self.store.points());
        let shape = self.geometry.shape();
        if shape.is_some() && shape != previous {
            kinds |= EventKind::SHAPE_UPDATED;
        }

        if kinds.contains(EventKind::RESET) {
            tracing::info!("sketch reset");
        } else if let Some(shape) = shape.filter(|_| kinds.contains(EventKind::SHAPE_UPDATED)) {
            tracing::debug!(
                %kinds,
                area = shape.area,
                radius = shape.radius,
                "parallelogram updated"
            );
        } else if kinds.is_drag() {
            tracing::trace!(%kinds, index = ?input.drag_index(), "point dragged");
        } else {
            tracing::trace!(%kinds, points = self.store.len(), "sketch input");
        }

        self.emit(kinds, input);
        kinds
    }

    /// Remove every point.
    pub fn reset(&mut self) -> EventKind {
        self.handle_input(PointerInput::Reset)
    }

    /// Save a PNG of the window: into the configured screenshot directory
    /// when there is one, otherwise through a file dialog.
    pub fn request_screenshot(&mut self) {
        let preset = self
            .screenshot_dir
            .as_ref()
            .map(|dir| dir.join(default_file_name()));
        match preset {
            Some(path) => self.request_screenshot_to(path),
            None => self.screenshot.request(),
        }
    }

    /// Where the next screenshot goes; `None` means a file dialog is shown.
    pub fn pending_screenshot_path(&self) -> Option<&std::path::Path> {
        self.screenshot.pending_path()
    }

    /// Save a PNG of the window to `path` without asking.
    pub fn request_screenshot_to(&mut self, path: PathBuf) {
        self.screenshot.request_to(path);
    }

    fn emit(&self, kinds: EventKind, input: PointerInput) {
        let Some(ctrl) = &self.event_ctrl else {
            return;
        };
        let mut event = SketchEvent::new(kinds);
        event.point_count = self.store.len();
        event.shape = self.geometry.shape();
        match input {
            PointerInput::StageClick { x, y } => {
                event.click = Some(ClickMeta {
                    pos: [x, y].into(),
                });
            }
            _ => {
                event.drag = input.drag_index().and_then(|index| {
                    self.store.get(index).map(|p| DragMeta {
                        index,
                        pos: p.coords(),
                        radius: p.radius,
                    })
                });
            }
        }
        ctrl.emit(event);
    }

    fn emit_screenshot(&self, path: &std::path::Path) {
        if let Some(ctrl) = &self.event_ctrl {
            let mut event = SketchEvent::new(EventKind::SCREENSHOT);
            event.point_count = self.store.len();
            event.shape = self.geometry.shape();
            event.screenshot = Some(ScreenshotMeta {
                path: path.display().to_string(),
            });
            ctrl.emit(event);
        }
    }

    fn handle_hotkeys(&mut self, ctx: &egui::Context) {
        for action in hotkeys::detect_hotkey_actions(&self.hotkeys, ctx) {
            match action {
                HotkeyName::Reset => {
                    self.reset();
                }
                HotkeyName::SavePng => self.request_screenshot(),
            }
        }
    }

    fn top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("sketch_controls").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let reset = ui
                    .button(format!(
                        "{} Reset",
                        egui_phosphor::regular::ARROW_COUNTER_CLOCKWISE
                    ))
                    .on_hover_text(format_button_tooltip(
                        "Remove all points",
                        Some(&self.hotkeys.reset),
                    ));
                if reset.clicked() {
                    self.reset();
                }

                let save = ui
                    .add_enabled(
                        !self.screenshot.is_pending(),
                        egui::Button::new(format!("{} Save PNG", egui_phosphor::regular::CAMERA)),
                    )
                    .on_hover_text(format_button_tooltip(
                        "Save a screenshot of the window",
                        Some(&self.hotkeys.save_png),
                    ));
                if save.clicked() {
                    self.request_screenshot();
                }

                let mut scheme = self.color_scheme;
                egui::ComboBox::from_id_salt("sketch_scheme")
                    .selected_text(format!("{} {}", egui_phosphor::regular::PALETTE, scheme))
                    .show_ui(ui, |ui| {
                        for s in ColorScheme::all() {
                            ui.selectable_value(&mut scheme, *s, s.label());
                        }
                    });
                if scheme != self.color_scheme {
                    tracing::debug!(%scheme, "color scheme changed");
                    self.set_color_scheme(scheme);
                }

                ui.separator();
                ui.label(canvas::status_text(&self.store, &self.geometry));
            });
        });
    }
}

impl eframe::App for SketchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.scheme_applied {
            self.color_scheme.apply(ctx);
            self.scheme_applied = true;
        }

        self.handle_hotkeys(ctx);
        self.top_bar(ctx);

        let style = CanvasStyle {
            palette: self.color_scheme.palette(),
            show_coordinates: self.show_coordinates,
        };
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(style.palette.background))
            .show(ctx, |ui| {
                let (rect, inputs) = canvas::interact(ui, &self.store);
                for input in inputs {
                    self.handle_input(input);
                }
                canvas::paint(&ui.painter_at(rect), &self.store, &self.geometry, &style);
            });

        if let Some(path) = self.screenshot.process(ctx) {
            self.emit_screenshot(&path);
        }
        if self.screenshot.is_pending() {
            ctx.request_repaint();
        }
    }
}
