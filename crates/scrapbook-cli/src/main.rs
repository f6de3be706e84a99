//! Scrapbook CLI
//!
//! Authoring helper for scrapbook albums.
//!
//! ## Usage
//!
//! ```bash
//! # List the embedded albums
//! scrapbook presets
//!
//! # Print an outline of a preset or an album file
//! scrapbook show --preset dublin
//! scrapbook show --file my-album.json
//!
//! # Check an album file before using it
//! scrapbook validate my-album.json
//!
//! # Start a new album from a preset
//! scrapbook export placeholder -o my-album.json
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use scrapbook_core::{Album, AlbumPreset, Section};

/// Scrapbook - album authoring tools
#[derive(Parser)]
#[command(name = "scrapbook")]
#[command(version = "0.1.0")]
#[command(about = "Scrapbook - inspect and validate album data")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List embedded album presets
    Presets,

    /// Print an outline of an album
    Show {
        /// Embedded preset to show
        #[arg(short, long, conflicts_with = "file")]
        preset: Option<AlbumPreset>,

        /// Album JSON file to show
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Parse and validate an album JSON file
    Validate {
        /// Album JSON file
        path: PathBuf,
    },

    /// Write a preset as pretty JSON
    Export {
        /// Preset to export
        preset: AlbumPreset,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn load(preset: Option<AlbumPreset>, file: Option<PathBuf>) -> Result<Album> {
    match file {
        Some(path) => Album::from_path(&path)
            .with_context(|| format!("Failed to load album file {}", path.display())),
        None => {
            let preset = preset.unwrap_or_default();
            Album::preset(preset).with_context(|| format!("Failed to load preset '{}'", preset))
        }
    }
}

/// Human-readable outline of an album.
fn outline(album: &Album) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", album.title));
    out.push('\n');
    out.push_str(&format!("{} ({} photos):\n", album.gallery_heading, album.photos.len()));
    for (i, photo) in album.photos.iter().enumerate() {
        out.push_str(&format!("  {:>2}. {} [{}]\n", i + 1, photo.caption, photo.path));
    }
    out.push('\n');
    out.push_str("Sections:\n");
    for section in Section::ALL {
        let heading = album.section_heading(section);
        out.push_str(&format!("  {} {} ({})\n", heading.icon, heading.title, section));
    }
    out.push('\n');
    out.push_str(&format!("Letter: {}\n", album.letter.salutation));
    out
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    scrapbook_core::logging::init_tracing(cli.verbose);

    match cli.command {
        Commands::Presets => {
            for preset in AlbumPreset::ALL {
                let album = Album::preset(preset)?;
                println!("{:<12} {}", preset.name(), album.title);
            }
        }

        Commands::Show { preset, file } => {
            let album = load(preset, file)?;
            print!("{}", outline(&album));
        }

        Commands::Validate { path } => {
            let album = Album::from_path(&path)
                .with_context(|| format!("{} is not a valid album", path.display()))?;
            println!("valid: {} ({} photos)", album.title, album.photos.len());
        }

        Commands::Export { preset, output } => {
            let json = Album::preset(preset)?.to_json_pretty()?;
            match output {
                Some(path) => {
                    std::fs::write(&path, format!("{json}\n"))
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    tracing::info!("Exported '{}' to {}", preset, path.display());
                    println!("Wrote {}", path.display());
                }
                None => println!("{json}"),
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outline_lists_everything() {
        let album = Album::preset(AlbumPreset::Dublin).unwrap();
        let text = outline(&album);
        assert!(text.starts_with("My Dublin/Bray Scrapbook\n"));
        assert!(text.contains("Photo Memories (10 photos):"));
        assert!(text.contains("   1. Language School [/School.jpg]"));
        assert!(text.contains("Irish Vocabulary (vocabulary)"));
        assert!(text.contains("Open Letter (letter)"));
        assert!(text.contains("Letter: Dear Professor Philipp Grasmück,"));
    }

    #[test]
    fn load_defaults_to_dublin() {
        let album = load(None, None).unwrap();
        assert_eq!(album.title, "My Dublin/Bray Scrapbook");
    }
}
