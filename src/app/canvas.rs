//! The drawing surface: turns pointer activity into [`PointerInput`]s and
//! paints the sketch.
//!
//! Interaction and painting are split so the owner can apply this frame's
//! input to the point store and derive geometry before anything is drawn.

use eframe::egui::{self, Align2, FontId, Pos2, Rect, Sense, Stroke, Vec2};

use crate::color_scheme::CanvasPalette;
use crate::data::geometry::{outline_edges, Coords, SketchGeometry};
use crate::data::interaction::PointerInput;
use crate::data::points::{Point, PointStore, POINT_RADIUS};

/// Smallest grab radius of a point handle, so resting points stay easy to hit.
const MIN_HANDLE_RADIUS: f32 = 8.0;
const LABEL_FONT_SIZE: f32 = 13.0;
const STROKE_WIDTH: f32 = 1.0;

/// How the sketch should be painted.
#[derive(Clone, Copy, Debug)]
pub(crate) struct CanvasStyle {
    pub palette: CanvasPalette,
    pub show_coordinates: bool,
}

fn to_pos(c: Coords) -> Pos2 {
    Pos2::new(c.x as f32, c.y as f32)
}

/// Format a number for an on-canvas label: integers without a fraction,
/// anything else with at most two decimals.
pub(crate) fn format_label_number(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    if v.fract() == 0.0 {
        return format!("{:.0}", v);
    }
    let s = format!("{:.2}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

/// Area label text: the full value, without rounding.
pub(crate) fn format_area(area: f64) -> String {
    if area == 0.0 {
        "0".to_string()
    } else {
        format!("{}", area)
    }
}

/// Text shown above a point.
pub(crate) fn point_label(p: &Point) -> String {
    format!("{}, {}", format_label_number(p.x), format_label_number(p.y))
}

/// Allocate the canvas and collect this frame's pointer input.
///
/// Point handles are registered after the canvas so they sit on top of it.
/// A handle that is clicked without being dragged still places a new point
/// at the click position.
pub(crate) fn interact(ui: &mut egui::Ui, store: &PointStore) -> (Rect, Vec<PointerInput>) {
    let response = ui.allocate_response(ui.available_size(), Sense::click());
    let mut inputs = Vec::new();

    if response.clicked() {
        if let Some(pos) = response.interact_pointer_pos() {
            inputs.push(PointerInput::StageClick {
                x: pos.x as f64,
                y: pos.y as f64,
            });
        }
    }

    for (index, point) in store.points().iter().enumerate() {
        let center = to_pos(point.coords());
        let hit = point.radius.max(MIN_HANDLE_RADIUS);
        let rect = Rect::from_center_size(center, Vec2::splat(2.0 * hit));
        let id = response.id.with(("sketch_point", index));
        let handle = ui.interact(rect, id, Sense::click_and_drag());

        if handle.hovered() || handle.dragged() {
            ui.ctx().set_cursor_icon(if handle.dragged() {
                egui::CursorIcon::Grabbing
            } else {
                egui::CursorIcon::Grab
            });
        }

        let pointer = handle.interact_pointer_pos();
        if handle.clicked() {
            if let Some(pos) = pointer {
                inputs.push(PointerInput::StageClick {
                    x: pos.x as f64,
                    y: pos.y as f64,
                });
            }
        }
        if handle.drag_started() {
            let pos = pointer.unwrap_or(center);
            inputs.push(PointerInput::DragStart {
                index,
                x: pos.x as f64,
                y: pos.y as f64,
            });
        } else if handle.dragged() && handle.drag_delta() != Vec2::ZERO {
            if let Some(pos) = pointer {
                inputs.push(PointerInput::DragMove {
                    index,
                    x: pos.x as f64,
                    y: pos.y as f64,
                });
            }
        }
        if handle.drag_stopped() {
            let pos = pointer
                .or_else(|| ui.ctx().input(|i| i.pointer.latest_pos()))
                .unwrap_or(center);
            inputs.push(PointerInput::DragEnd {
                index,
                x: pos.x as f64,
                y: pos.y as f64,
            });
        }
    }

    (response.rect, inputs)
}

/// Paint the equal-area circle, the outline and the points.
///
/// With fewer than three points only the points are drawn.
pub(crate) fn paint(
    painter: &egui::Painter,
    store: &PointStore,
    geometry: &SketchGeometry,
    style: &CanvasStyle,
) {
    let palette = &style.palette;
    let font = FontId::proportional(LABEL_FONT_SIZE);

    if let Some(shape) = geometry.shape() {
        let center = to_pos(shape.center);
        painter.circle_stroke(
            center,
            shape.radius as f32,
            Stroke::new(STROKE_WIDTH, palette.circle),
        );
        painter.text(
            center,
            Align2::CENTER_TOP,
            format_area(shape.area),
            font.clone(),
            palette.label,
        );
        for (p, q) in outline_edges(&shape.vertices) {
            painter.line_segment(
                [to_pos(p), to_pos(q)],
                Stroke::new(STROKE_WIDTH, palette.outline),
            );
        }
    }

    for point in store.points() {
        let center = to_pos(point.coords());
        painter.circle_filled(center, point.radius, point.fill);
        if style.show_coordinates {
            let anchor = center + Vec2::new(-POINT_RADIUS * 4.0, -(POINT_RADIUS * 3.0 + 4.0));
            painter.text(
                anchor,
                Align2::LEFT_TOP,
                point_label(point),
                font.clone(),
                palette.label,
            );
        }
    }
}

/// Hint shown in the top bar for the current sketch state.
pub(crate) fn status_text(store: &PointStore, geometry: &SketchGeometry) -> String {
    match geometry.shape() {
        Some(shape) => format!(
            "Area {}  |  circle r = {}",
            format_area(shape.area),
            format_label_number(shape.radius)
        ),
        None => format!(
            "Click to place points ({}/{})",
            store.len(),
            PointStore::MAX_POINTS
        ),
    }
}
