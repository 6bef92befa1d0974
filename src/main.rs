//! # Pawtobooth CLI
//!
//! Command-line interface for the photobooth engine.
//!
//! ## Usage
//!
//! ```bash
//! # Run the HTTP API
//! pawtobooth serve --listen 0.0.0.0:8080
//!
//! # Compose four image files into a print layout
//! pawtobooth compose --format 4r-grid --background white \
//!     --out layout.png a.png b.png c.png d.png
//!
//! # Full synthetic run: capture four placeholder frames and compose them
//! pawtobooth demo --format photo-strip --out demo.png
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use pawtobooth::{
    PawtoboothError,
    capture::{CaptureSource, CapturedImage, synthetic::SyntheticCamera},
    compose::compose,
    layout::{BackgroundColor, PrintFormat, SLOT_COUNT},
    server::{ServerConfig, serve},
    store::MemStore,
};

/// Pawtobooth - photobooth layout utility
#[derive(Parser, Debug)]
#[command(name = "pawtobooth")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP session API
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "0.0.0.0:8080")]
        listen: String,
    },

    /// Compose four photos into a print layout PNG
    Compose {
        /// Print format: 4r-grid or photo-strip
        #[arg(long, default_value = "4r-grid")]
        format: String,

        /// Background color: white or black
        #[arg(long, default_value = "white")]
        background: String,

        /// Output PNG path
        #[arg(long, value_name = "FILE", default_value = "layout.png")]
        out: PathBuf,

        /// Exactly four photo files, in capture order
        #[arg(value_name = "IMAGE", num_args = 4)]
        photos: Vec<PathBuf>,
    },

    /// Capture four synthetic frames and compose them
    Demo {
        /// Print format: 4r-grid or photo-strip
        #[arg(long, default_value = "4r-grid")]
        format: String,

        /// Background color: white or black
        #[arg(long, default_value = "white")]
        background: String,

        /// Output PNG path
        #[arg(long, value_name = "FILE", default_value = "demo.png")]
        out: PathBuf,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), PawtoboothError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { listen } => {
            let config = ServerConfig {
                listen_addr: listen,
            };
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(serve(config, Arc::new(MemStore::new())))
        }

        Commands::Compose {
            format,
            background,
            out,
            photos,
        } => {
            let format = parse_format(&format)?;
            let background = parse_background(&background)?;

            let photos = photos
                .iter()
                .map(|path| Ok(CapturedImage::from_bytes(std::fs::read(path)?)))
                .collect::<Result<Vec<_>, PawtoboothError>>()?;

            let layout = compose(&photos, format, background)?;
            std::fs::write(&out, &layout.png)?;
            println!(
                "Composed {} layout ({}x{}) to {}",
                format.tag(),
                layout.width,
                layout.height,
                out.display()
            );
            Ok(())
        }

        Commands::Demo {
            format,
            background,
            out,
        } => {
            let format = parse_format(&format)?;
            let background = parse_background(&background)?;

            println!("Capturing {} synthetic frames...", SLOT_COUNT);
            let mut camera = SyntheticCamera::new();
            let mut photos = Vec::with_capacity(SLOT_COUNT);
            while photos.len() < SLOT_COUNT {
                match camera.capture() {
                    Some(photo) => photos.push(photo),
                    None => {
                        return Err(PawtoboothError::Capture(
                            "synthetic camera stopped delivering frames".to_string(),
                        ));
                    }
                }
            }

            let layout = compose(&photos, format, background)?;
            std::fs::write(&out, &layout.png)?;
            println!(
                "Composed {} layout ({}x{}) to {}",
                format.tag(),
                layout.width,
                layout.height,
                out.display()
            );
            Ok(())
        }
    }
}

fn parse_format(tag: &str) -> Result<PrintFormat, PawtoboothError> {
    PrintFormat::from_tag(tag).ok_or_else(|| {
        PawtoboothError::InvalidArgument(format!(
            "unknown format '{}', use 4r-grid or photo-strip",
            tag
        ))
    })
}

fn parse_background(tag: &str) -> Result<BackgroundColor, PawtoboothError> {
    BackgroundColor::from_tag(tag).ok_or_else(|| {
        PawtoboothError::InvalidArgument(format!("unknown background '{}', use white or black", tag))
    })
}
