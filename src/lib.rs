//! parasketch crate root: re-exports and module wiring.
//!
//! An interactive parallelogram sketch built on egui/eframe. Click three
//! points on the canvas; the fourth vertex is derived, the outline drawn, the
//! area shown, and a circle of the same area is centered in the shape.
//!
//! - `data`: point store, geometry, input mapping and hotkeys (no UI)
//! - `app`: the eframe application, canvas rendering and launch helper
//! - `config`: runtime configuration and its YAML/JSON file mirror
//! - `events`: subscription channel for sketch events
//! - `color_scheme`: canvas palettes

pub mod app;
pub mod color_scheme;
pub mod config;
pub mod data;
pub mod events;

pub use app::{run_sketch, SketchApp};
pub use color_scheme::{CanvasPalette, ColorScheme};
pub use config::{SketchConfig, SketchConfigFile};
pub use data::geometry::{Coords, ParallelogramShape, SketchGeometry};
pub use data::hotkeys::{Hotkey, Hotkeys, Modifier};
pub use data::interaction::PointerInput;
pub use data::points::{Point, PointStore, PointUpdate};
pub use events::{EventController, EventFilter, EventKind, SketchEvent};
