//! Mapping from canvas input to point store mutations.
//!
//! The renderer turns egui responses into [`PointerInput`]s; applying one is
//! the only way the UI changes sketch state. Drag phases also change the
//! handle radius: it grows when a point is grabbed and returns to rest when
//! released.

use crate::events::EventKind;

use super::points::{PointStore, PointUpdate, POINT_DIAMETER, POINT_RADIUS};

/// Handle radius at the moment a point is grabbed.
pub const DRAG_START_RADIUS: f32 = POINT_DIAMETER * 2.0;
/// Handle radius while a grabbed point is moving.
pub const DRAG_MOVE_RADIUS: f32 = POINT_DIAMETER;

/// One user interaction with the sketch, in window coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerInput {
    /// Click on the canvas, including a click on a point that was not dragged.
    StageClick { x: f64, y: f64 },
    DragStart { index: usize, x: f64, y: f64 },
    DragMove { index: usize, x: f64, y: f64 },
    DragEnd { index: usize, x: f64, y: f64 },
    /// Reset button or hotkey.
    Reset,
}

impl PointerInput {
    /// Index of the dragged point, for drag phases.
    pub fn drag_index(&self) -> Option<usize> {
        match *self {
            PointerInput::DragStart { index, .. }
            | PointerInput::DragMove { index, .. }
            | PointerInput::DragEnd { index, .. } => Some(index),
            PointerInput::StageClick { .. } | PointerInput::Reset => None,
        }
    }

    /// Apply this input to `store`, returning the event categories it produced.
    ///
    /// A drag on an index that no longer exists changes nothing and returns
    /// [`EventKind::EMPTY`].
    pub fn apply(&self, store: &mut PointStore) -> EventKind {
        match *self {
            PointerInput::StageClick { x, y } => {
                let mut kinds = EventKind::CLICK | EventKind::POINT_ADDED;
                if store.add_point(x, y).is_some() {
                    kinds |= EventKind::POINT_EVICTED;
                }
                kinds
            }
            PointerInput::DragStart { index, x, y } => drag(
                store,
                index,
                PointUpdate::at(x, y).with_radius(DRAG_START_RADIUS),
                EventKind::DRAG_START,
            ),
            PointerInput::DragMove { index, x, y } => drag(
                store,
                index,
                PointUpdate::at(x, y).with_radius(DRAG_MOVE_RADIUS),
                EventKind::DRAG_MOVE,
            ),
            PointerInput::DragEnd { index, x, y } => drag(
                store,
                index,
                PointUpdate::at(x, y).with_radius(POINT_RADIUS),
                EventKind::DRAG_END,
            ),
            PointerInput::Reset => {
                store.reset();
                EventKind::RESET
            }
        }
    }
}

fn drag(store: &mut PointStore, index: usize, update: PointUpdate, kind: EventKind) -> EventKind {
    if store.update_point(index, update) {
        kind
    } else {
        EventKind::EMPTY
    }
}
