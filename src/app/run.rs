//! Entry point for running the sketch as a native window.

use eframe::egui;

use crate::config::SketchConfig;

use super::SketchApp;

/// Open the sketch in a native window.
///
/// Builds a [`SketchApp`] from `cfg`, sets up the viewport (title, size,
/// icon), installs the Phosphor icon font and enters the eframe event loop.
/// Blocks until the window is closed.
pub fn run_sketch(mut cfg: SketchConfig) -> eframe::Result<()> {
    let app = SketchApp::from_config(&mut cfg);

    let mut opts = cfg
        .native_options
        .take()
        .unwrap_or_else(eframe::NativeOptions::default);

    if opts.viewport.icon.is_none() {
        if let Some(icon) = load_app_icon_svg() {
            opts.viewport = opts.viewport.clone().with_icon(icon);
        }
    }
    if opts.viewport.inner_size.is_none() {
        opts.viewport = opts
            .viewport
            .clone()
            .with_inner_size(egui::vec2(cfg.window_size[0], cfg.window_size[1]));
    }
    if opts.viewport.title.is_none() {
        opts.viewport = opts.viewport.clone().with_title(cfg.title.clone());
    }

    tracing::info!(
        title = %cfg.title,
        scheme = %cfg.color_scheme,
        "opening sketch window"
    );
    eframe::run_native(
        &cfg.title,
        opts,
        Box::new(|cc| {
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(app))
        }),
    )
}

/// Render the crate's `icon.svg` into an [`egui::IconData`].
///
/// Returns `None` if the file is missing or cannot be rendered.
fn load_app_icon_svg() -> Option<egui::IconData> {
    let svg_path = concat!(env!("CARGO_MANIFEST_DIR"), "/icon.svg");
    let data = match std::fs::read(svg_path) {
        Ok(data) => data,
        Err(e) => {
            tracing::debug!(path = svg_path, error = %e, "no window icon");
            return None;
        }
    };
    render_svg_icon(&data)
}

pub(crate) fn render_svg_icon(data: &[u8]) -> Option<egui::IconData> {
    let opt = usvg::Options::default();
    let tree = usvg::Tree::from_data(data, &opt).ok()?;
    let size = tree.size().to_int_size();
    if size.width() == 0 || size.height() == 0 {
        return None;
    }
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height())?;
    let mut canvas = pixmap.as_mut();
    resvg::render(&tree, tiny_skia::Transform::default(), &mut canvas);
    Some(egui::IconData {
        rgba: pixmap.take(),
        width: size.width(),
        height: size.height(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_icon_renders() {
        let icon = load_app_icon_svg().expect("icon.svg should render");
        assert_eq!(icon.rgba.len(), (icon.width * icon.height * 4) as usize);
    }

    #[test]
    fn garbage_svg_is_rejected() {
        assert!(render_svg_icon(b"not an svg").is_none());
    }
}
