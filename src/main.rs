//! # Ruler CLI
//!
//! Command-line interface for generating baseline ruler PNGs.
//!
//! ## Usage
//!
//! ```bash
//! # Print base64 for a 24px rhythm with a dotted line
//! ruler generate --height 24 --color '#444' --pattern 1000
//!
//! # Ready-to-paste data URI at 2x
//! ruler generate --height 24 --color 'rgba(0,0,0,0.3)' --pattern 1,0 --scale 2 --data-uri
//!
//! # Save to a file
//! ruler generate --height 24 --color '#444' --pattern 1 --png ruler.png
//!
//! # Render every ruler in a config
//! ruler batch rulers.json --out-dir dist/
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use ruler::{
    Pattern, Ruler, RulerConfig, RulerError, batch,
    png::compress::{Compressor, Stored, Zlib},
};

/// Ruler - baseline grid background generator
#[derive(Parser, Debug)]
#[command(name = "ruler")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log pipeline details to stderr
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a single ruler image
    Generate {
        /// Tile height in pixels (the line height)
        #[arg(long)]
        height: f64,

        /// Stripe color: #rgb, #rrggbb, rgb(...) or rgba(...)
        #[arg(long, default_value = "#000")]
        color: String,

        /// Column pattern, e.g. 1000 or 1,0,0,0
        #[arg(long, default_value = "1")]
        pattern: Pattern,

        /// Stripe thickness in pixels
        #[arg(long, default_value = "1")]
        thickness: f64,

        /// Output scale factor
        #[arg(long, default_value = "1")]
        scale: f64,

        /// Write PNG to this file instead of printing base64
        #[arg(long, value_name = "FILE")]
        png: Option<PathBuf>,

        /// Print a data:image/png;base64 URI
        #[arg(long, conflicts_with = "png")]
        data_uri: bool,

        /// Use uncompressed stored blocks
        #[arg(long)]
        stored: bool,

        /// zlib compression level (0-9)
        #[arg(long, default_value = "6")]
        level: u32,
    },

    /// Render every ruler listed in a JSON config
    Batch {
        /// Config file
        config: PathBuf,

        /// Directory for the generated files
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .init();
}

fn run(command: Commands) -> Result<(), RulerError> {
    match command {
        Commands::Generate {
            height,
            color,
            pattern,
            thickness,
            scale,
            png,
            data_uri,
            stored,
            level,
        } => {
            let compressor: Box<dyn Compressor> = if stored {
                Box::new(Stored)
            } else {
                Box::new(Zlib::new(level)?)
            };

            let ruler = Ruler::new(height, &color, pattern)
                .thickness(thickness)
                .scale(scale);
            log::debug!("generating {}", ruler);

            let image = ruler.to_png(compressor.as_ref())?;

            if let Some(path) = png {
                image.write_file(&path)?;
                eprintln!(
                    "Saved {}x{} ruler to {}",
                    image.width(),
                    image.height(),
                    path.display()
                );
            } else if data_uri {
                println!("{}", image.to_data_uri());
            } else {
                println!("{}", image.to_base64());
            }
        }

        Commands::Batch { config, out_dir } => {
            let config = RulerConfig::load(&config)?;
            if config.rulers.is_empty() {
                eprintln!("No rulers in config.");
                return Ok(());
            }

            std::fs::create_dir_all(&out_dir)?;
            let results = batch::render_all(&config, &out_dir)?;

            let mut failed = 0;
            for r in &results {
                match &r.result {
                    Ok(path) => println!("  {} -> {}", r.name, path.display()),
                    Err(e) => {
                        eprintln!("  {} failed: {}", r.name, e);
                        failed += 1;
                    }
                }
            }

            if failed > 0 {
                return Err(RulerError::Config(format!(
                    "{} of {} rulers failed",
                    failed,
                    results.len()
                )));
            }
        }
    }

    Ok(())
}
