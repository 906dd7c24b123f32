//! Sketch state and everything derived from it, independent of the UI.

pub mod geometry;
pub mod hotkeys;
pub mod interaction;
pub mod points;
