//! ZMK README Generator - keymap documentation tool
//!
//! Parses the Pepito split keyboard's ZMK keymap and settings files and
//! writes a README with visual layout diagrams for all layers.

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use zmk_readme::constants::{
    APP_BINARY_NAME, APP_NAME, DEFAULT_CONF_FILE, DEFAULT_KEYMAP_FILE, DEFAULT_OUTPUT_FILE,
};
use zmk_readme::export;
use zmk_readme::keycode_db::KeycodeDb;
use zmk_readme::parser;

/// ZMK README Generator - keymap documentation tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Config directory containing the keymap and settings files
    #[arg(value_name = "DIR", default_value = ".")]
    config_dir: PathBuf,

    /// Path to the keymap file (defaults to the standard name in DIR)
    #[arg(long, value_name = "FILE")]
    keymap: Option<PathBuf>,

    /// Path to the settings file (defaults to the standard name in DIR)
    #[arg(long, value_name = "FILE")]
    conf: Option<PathBuf>,

    /// Output path for the generated README (defaults to readme.md in DIR)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

impl Cli {
    fn keymap_path(&self) -> PathBuf {
        self.keymap
            .clone()
            .unwrap_or_else(|| self.config_dir.join(DEFAULT_KEYMAP_FILE))
    }

    fn conf_path(&self) -> PathBuf {
        self.conf
            .clone()
            .unwrap_or_else(|| self.config_dir.join(DEFAULT_CONF_FILE))
    }

    fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| self.config_dir.join(DEFAULT_OUTPUT_FILE))
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let keymap_path = cli.keymap_path();
    let conf_path = cli.conf_path();
    let output_path = cli.output_path();

    // Validate inputs before doing any work
    for path in [&keymap_path, &conf_path] {
        if !path.exists() {
            eprintln!("Error: {} not found", path.display());
            eprintln!();
            eprintln!(
                "{} expects the keymap and settings files inside the config directory.",
                APP_NAME
            );
            eprintln!();
            eprintln!("Examples:");
            eprintln!("  {} path/to/config", APP_BINARY_NAME);
            eprintln!(
                "  {} --keymap my.keymap --conf my.conf --output readme.md",
                APP_BINARY_NAME
            );
            std::process::exit(1);
        }
    }

    let db = KeycodeDb::new();
    let keymap = parser::parse_keymap(&keymap_path, &db)?;
    let flags = parser::parse_conf(&conf_path)?;

    let readme = export::generate_readme(&keymap, &flags);

    // The output is only written once the whole pipeline has succeeded
    fs::write(&output_path, readme)
        .with_context(|| format!("Failed to write output file: {}", output_path.display()))?;

    println!("Generated {}", output_path.display());

    Ok(())
}
