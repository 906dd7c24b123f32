use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use parasketch::{ColorScheme, Hotkeys, SketchConfig};

#[derive(Parser)]
#[command(name = "parasketch")]
#[command(about = "Click three points, get a parallelogram, its area and an equal-area circle")]
struct Cmd {
    /// YAML or JSON config file applied on top of the defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Color scheme (dark, light)
    #[arg(long)]
    scheme: Option<String>,

    /// Window title
    #[arg(long)]
    title: Option<String>,

    /// Initial window width in logical pixels
    #[arg(long)]
    width: Option<f32>,

    /// Initial window height in logical pixels
    #[arg(long)]
    height: Option<f32>,

    /// Do not draw coordinate labels next to points
    #[arg(long)]
    hide_coordinates: bool,

    /// Save PNGs into this directory instead of asking for a file name
    #[arg(long)]
    screenshot_dir: Option<PathBuf>,

    /// Write the effective hotkeys to ~/.parasketch/hotkeys.yaml and exit
    #[arg(long)]
    save_hotkeys: bool,

    /// Log debug output (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let default_level = if cmd.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .init();

    let cfg = build_config(&cmd)?;
    if cmd.save_hotkeys {
        let hotkeys = cfg
            .hotkeys
            .clone()
            .or_else(|| Hotkeys::load_from_default_path().ok())
            .unwrap_or_default();
        hotkeys.save_to_default_path().map_err(|e| anyhow!(e))?;
        let path = Hotkeys::default_path().map_err(|e| anyhow!(e))?;
        tracing::info!(path = %path.display(), "saved hotkeys");
        return Ok(());
    }
    parasketch::run_sketch(cfg).map_err(|e| anyhow!("sketch window failed: {e}"))
}

fn build_config(cmd: &Cmd) -> Result<SketchConfig> {
    let mut cfg = match &cmd.config {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading config");
            SketchConfig::from_file(path).map_err(|e| anyhow!(e))?
        }
        None => SketchConfig::default(),
    };
    if let Some(name) = &cmd.scheme {
        cfg.color_scheme = ColorScheme::from_name(name)
            .ok_or_else(|| anyhow!("unknown color scheme '{}'", name))?;
    }
    if let Some(title) = &cmd.title {
        cfg.title = title.clone();
    }
    if let Some(w) = cmd.width {
        cfg.window_size[0] = w;
    }
    if let Some(h) = cmd.height {
        cfg.window_size[1] = h;
    }
    if cmd.hide_coordinates {
        cfg.show_coordinates = false;
    }
    if let Some(dir) = &cmd.screenshot_dir {
        cfg.screenshot_dir = Some(dir.clone());
    }
    Ok(cfg)
}
