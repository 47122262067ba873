//! Convert a catalogue export into a shelf list.
//!
//! Logging is controlled with `RUST_LOG` (e.g. `RUST_LOG=debug`).

use anyhow::{Context, Result};
use bibshelf::writers::writer_for;
use bibshelf::{build_shelf_list, Labels, OutputFormat, ShelfConfig};
use clap::{Parser, ValueEnum};
use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "bibshelf")]
#[command(version)]
#[command(about = "Convert a BibTeX-like catalogue export into an ISBD shelf list", long_about = None)]
struct CliArgs {
    /// Catalogue export to read
    input: PathBuf,

    /// Output file path (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = FormatArg::Text)]
    format: FormatArg,

    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Use English labels
    #[arg(long)]
    english: bool,

    /// Format entries on the current thread only
    #[arg(long)]
    sequential: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    /// One line per paragraph
    Text,
    /// The document as JSON
    Json,
    /// WordprocessingML body
    #[value(name = "wordml")]
    WordMl,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::WordMl => OutputFormat::WordMl,
        }
    }
}

impl CliArgs {
    fn shelf_config(&self) -> Result<ShelfConfig> {
        let mut config = match &self.config {
            Some(path) => ShelfConfig::load(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => ShelfConfig::default(),
        };
        if self.english {
            config.labels = Labels::english();
        }
        if self.sequential {
            config.parallel = false;
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = CliArgs::parse();
    let config = cli.shelf_config()?;
    let format = OutputFormat::from(cli.format);

    let export = fs::read_to_string(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;
    let document = build_shelf_list(&export, &config);

    match &cli.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            let mut writer = writer_for(format, BufWriter::new(file), &config);
            writer.write_document(&document)?;
            writer.finish()?;
            log::info!("Wrote {} paragraphs to {}", document.len(), path.display());
        },
        None => {
            let mut writer = writer_for(format, io::stdout().lock(), &config);
            writer.write_document(&document)?;
            writer.finish()?;
        },
    }
    Ok(())
}
