#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;
mod viewport;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use scrapbook_core::{Album, AlbumPreset};

/// Album chosen on the command line, set once before launch
static ALBUM: OnceLock<Album> = OnceLock::new();

/// Get the album chosen at startup
pub fn get_album() -> Option<Album> {
    ALBUM.get().cloned()
}

/// Scrapbook - a single-page photo scrapbook
#[derive(Parser, Debug)]
#[command(name = "scrapbook-desktop")]
#[command(about = "Scrapbook - photo memories, notes and a letter on one page")]
struct Args {
    /// Embedded album to show (dublin, placeholder)
    #[arg(short, long, default_value = "dublin")]
    album: AlbumPreset,

    /// Album JSON file to show instead of a preset
    #[arg(long)]
    album_file: Option<PathBuf>,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 900.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 1000.0)]
    height: f64,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn load_album(args: &Args) -> anyhow::Result<Album> {
    match &args.album_file {
        Some(path) => Album::from_path(path)
            .with_context(|| format!("Failed to load album file {}", path.display())),
        None => Album::preset(args.album)
            .with_context(|| format!("Failed to load album preset '{}'", args.album)),
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    scrapbook_core::logging::init_tracing(args.verbose);

    let album = load_album(&args)?;
    let title = album.title.clone();

    tracing::info!("Starting '{}' with {} photos", title, album.photos.len());

    // Store album globally
    let _ = ALBUM.set(album);

    // Configure desktop window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_dublin_preset() {
        let args = Args::try_parse_from(["scrapbook-desktop"]).unwrap();
        assert_eq!(args.album, AlbumPreset::Dublin);
        assert!(args.album_file.is_none());
        let album = load_album(&args).unwrap();
        assert_eq!(album.title, "My Dublin/Bray Scrapbook");
    }

    #[test]
    fn preset_flag_selects_album() {
        let args = Args::try_parse_from(["scrapbook-desktop", "--album", "placeholder"]).unwrap();
        assert_eq!(load_album(&args).unwrap().title, "My Trip Scrapbook");
    }

    #[test]
    fn unknown_preset_is_rejected() {
        assert!(Args::try_parse_from(["scrapbook-desktop", "--album", "paris"]).is_err());
    }

    #[test]
    fn missing_album_file_reports_path() {
        let args =
            Args::try_parse_from(["scrapbook-desktop", "--album-file", "/nonexistent/album.json"])
                .unwrap();
        let err = load_album(&args).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/album.json"));
    }
}
