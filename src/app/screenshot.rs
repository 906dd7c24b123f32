//! PNG export of the sketch window.
//!
//! A request is turned into an egui viewport screenshot command; the image
//! arrives as an [`egui::Event::Screenshot`] on a later frame and is written
//! either to a preset path or to one picked in a save dialog.

use std::path::{Path, PathBuf};

use eframe::egui;
use image::{Rgba, RgbaImage};

/// Where the next screenshot should go.
#[derive(Debug, Clone, PartialEq)]
enum Target {
    Dialog,
    Path(PathBuf),
}

#[derive(Debug, Default)]
pub(crate) struct ScreenshotState {
    requested: Option<Target>,
    in_flight: Option<Target>,
}

impl ScreenshotState {
    /// Ask for a screenshot saved through a file dialog.
    pub fn request(&mut self) {
        self.requested = Some(Target::Dialog);
    }

    /// Ask for a screenshot saved straight to `path`.
    pub fn request_to(&mut self, path: PathBuf) {
        self.requested = Some(Target::Path(path));
    }

    /// Preset destination of the pending request, if any.
    pub fn pending_path(&self) -> Option<&Path> {
        match self.requested.as_ref().or(self.in_flight.as_ref()) {
            Some(Target::Path(path)) => Some(path),
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.requested.is_some() || self.in_flight.is_some()
    }

    /// Send pending requests and save any screenshot that arrived.
    ///
    /// Returns the path written this frame.
    pub fn process(&mut self, ctx: &egui::Context) -> Option<PathBuf> {
        if let Some(target) = self.requested.take() {
            ctx.send_viewport_cmd(egui::ViewportCommand::Screenshot(Default::default()));
            self.in_flight = Some(target);
        }

        let image = ctx.input(|i| {
            i.events.iter().rev().find_map(|e| match e {
                egui::Event::Screenshot { image, .. } => Some(image.clone()),
                _ => None,
            })
        })?;
        let path = match self.in_flight.take()? {
            Target::Path(path) => path,
            Target::Dialog => rfd::FileDialog::new()
                .set_file_name(default_file_name())
                .add_filter("PNG", &["png"])
                .save_file()?,
        };

        match save_color_image(&image, &path) {
            Ok(()) => {
                tracing::info!(path = %path.display(), "saved sketch screenshot");
                Some(path)
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to save sketch screenshot");
                None
            }
        }
    }
}

/// `sketch_<unix millis>.png`
pub fn default_file_name() -> String {
    format!("sketch_{}.png", chrono::Local::now().timestamp_millis())
}

/// Write an egui image to `path`; the format follows the file extension.
pub fn save_color_image(image: &egui::ColorImage, path: &Path) -> Result<(), image::ImageError> {
    let [w, h] = image.size;
    let mut out = RgbaImage::new(w as u32, h as u32);
    for (i, p) in image.pixels.iter().enumerate() {
        let (x, y) = (i % w, i / w);
        out.put_pixel(x as u32, y as u32, Rgba([p.r(), p.g(), p.b(), p.a()]));
    }
    out.save(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_name_is_png() {
        let name = default_file_name();
        assert!(name.starts_with("sketch_"));
        assert!(name.ends_with(".png"));
    }

    #[test]
    fn saves_png_with_same_pixels() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shot.png");
        let rgba = [
            255, 0, 0, 255, 0, 255, 0, 255, //
            0, 0, 255, 255, 255, 255, 255, 255,
        ];
        let img = egui::ColorImage::from_rgba_unmultiplied([2, 2], &rgba);
        save_color_image(&img, &path).unwrap();

        let back = image::open(&path).unwrap().to_rgba8();
        assert_eq!(back.dimensions(), (2, 2));
        assert_eq!(back.get_pixel(0, 0), &Rgba([255, 0, 0, 255]));
        assert_eq!(back.get_pixel(0, 1), &Rgba([0, 0, 255, 255]));
    }

    #[test]
    fn request_marks_pending() {
        let mut s = ScreenshotState::default();
        assert!(!s.is_pending());
        s.request_to(PathBuf::from("out.png"));
        assert!(s.is_pending());
        assert_eq!(s.pending_path(), Some(Path::new("out.png")));
    }

    #[test]
    fn dialog_request_has_no_preset_path() {
        let mut s = ScreenshotState::default();
        s.request();
        assert!(s.is_pending());
        assert_eq!(s.pending_path(), None);
    }
}
