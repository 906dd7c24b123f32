//! Application shell for the sketch.
//!
//! | Sub-module        | Responsibility |
//! | ----------------- | -------------- |
//! | [`sketch_app`]    | [`SketchApp`]: owns the point store, applies input, implements [`eframe::App`] |
//! | `canvas`          | Pointer interaction and painting of points, outline, circle and labels |
//! | `screenshot`      | PNG export of the window |
//! | [`run`]           | [`run_sketch()`] entry point and window icon loading |

mod canvas;
mod screenshot;
pub mod run;
pub mod sketch_app;

pub use run::run_sketch;
pub use screenshot::{default_file_name, save_color_image};
pub use sketch_app::SketchApp;
