//! dumpcanteens - Dump canteen dataset views
//!
//! A command line tool for printing the keyword, price and location
//! mappings built from a canteen dataset, as readable text or JSON.

use anyhow::Context;
use clap::{ArgAction, Parser, ValueEnum};
use indexmap::IndexMap;
use makan_core::{DatasetIndex, MapPoint};
use serde::Serialize;
use smol_str::SmolStr;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Output type for the dumped views.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputType {
    /// Readable text output (default)
    #[default]
    Text,
    /// JSON output
    Json,
}

/// The three dataset views, serialized in enumeration order.
#[derive(Serialize)]
struct DumpDoc<'a> {
    keywords: IndexMap<SmolStr, IndexMap<SmolStr, String>>,
    prices: IndexMap<SmolStr, IndexMap<SmolStr, Option<f64>>>,
    locations: &'a IndexMap<SmolStr, MapPoint>,
}

impl<'a> DumpDoc<'a> {
    fn new(index: &'a DatasetIndex) -> Self {
        DumpDoc {
            keywords: index.keywords_by_canteen(),
            prices: index.prices_by_canteen(),
            locations: index.locations(),
        }
    }
}

/// Dump the dataset views as readable text.
fn dump_text<W: Write>(out: &mut W, index: &DatasetIndex) -> anyhow::Result<()> {
    let keywords = index.keywords_by_canteen();
    writeln!(out, "Keywords:")?;
    for (canteen, stalls) in &keywords {
        writeln!(out, "  {canteen}:")?;
        for (stall, keywords) in stalls {
            writeln!(out, "    {stall}: {keywords}")?;
        }
    }

    let prices = index.prices_by_canteen();
    writeln!(out, "Prices:")?;
    for (canteen, stalls) in &prices {
        writeln!(out, "  {canteen}:")?;
        for (stall, price) in stalls {
            match price {
                Some(price) => writeln!(out, "    {stall}: ${price:.2}")?,
                None => writeln!(out, "    {stall}: -")?,
            }
        }
    }

    writeln!(out, "Locations:")?;
    for (canteen, &(x, y)) in index.locations() {
        writeln!(out, "  {canteen}: ({x}, {y})")?;
    }
    Ok(())
}

/// Dump the dataset views as a single JSON document.
fn dump_json<W: Write>(out: &mut W, index: &DatasetIndex) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, &DumpDoc::new(index))?;
    writeln!(out)?;
    Ok(())
}

/// A command line tool for dumping the views built from a canteen dataset.
#[derive(Parser, Debug)]
#[command(name = "dumpcanteens")]
#[command(author, version, about = "Dump canteen dataset views", long_about = None)]
#[command(disable_version_flag = true)]
struct Args {
    /// Path to the canteen dataset CSV
    #[arg(required = true)]
    data: PathBuf,

    /// Print version information
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    version: (),

    /// Use debug logging level
    #[arg(short = 'd', long, action = ArgAction::SetTrue)]
    debug: bool,

    // === Output options ===
    /// Path to file where output is written, or "-" for stdout
    #[arg(short = 'o', long, default_value = "-")]
    outfile: String,

    /// Type of output to generate
    #[arg(short = 't', long = "output-type", value_enum, default_value = "text")]
    output_type: OutputType,
}

fn init_logging(debug: bool) {
    let default = if debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.debug);

    let index = DatasetIndex::load(&args.data)
        .with_context(|| format!("failed to load dataset {}", args.data.display()))?;
    info!(
        canteens = index.canteen_count(),
        stalls = index.stall_count(),
        "dataset loaded"
    );

    let mut output: Box<dyn Write> = if args.outfile == "-" {
        Box::new(BufWriter::new(io::stdout()))
    } else {
        let file = File::create(&args.outfile)
            .with_context(|| format!("failed to create output file {}", args.outfile))?;
        Box::new(BufWriter::new(file))
    };

    match args.output_type {
        OutputType::Text => dump_text(&mut output, &index)?,
        OutputType::Json => dump_json(&mut output, &index)?,
    }

    output.flush()?;
    Ok(())
}
