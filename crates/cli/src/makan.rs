//! makan - Interactive food and beverage recommendation menu
//!
//! A command line tool that loads a campus canteen dataset and serves
//! keyword, price and location based stall searches over it through a
//! five-option text menu.

use anyhow::Context;
use clap::{ArgAction, Parser};
use makan_core::{
    DatasetIndex, MakanError, MapExtent, Point, PointCapture, UserPoint, Viewport,
    filter_by_keyword, filter_by_price, nearest_canteens, parse_max_price, pixel_to_map,
};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// A command line tool that loads a campus canteen dataset and serves
/// keyword, price and location based stall searches over it.
#[derive(Parser, Debug)]
#[command(name = "makan")]
#[command(author, version, about, long_about = None)]
#[command(disable_version_flag = true)]
struct Args {
    /// Path to the canteen dataset CSV
    #[arg(default_value = "canteens.csv")]
    data: PathBuf,

    /// Print version information
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    version: (),

    /// Use debug logging level
    #[arg(short = 'd', long, action = ArgAction::SetTrue)]
    debug: bool,

    // === Map options ===
    /// Native map width in map units
    #[arg(long = "map-width", default_value = "1281")]
    map_width: f64,

    /// Native map height in map units
    #[arg(long = "map-height", default_value = "1550")]
    map_height: f64,

    /// Scale factor applied to the map extent to size the click viewport
    #[arg(short = 's', long, default_value = "0.9")]
    scale: f64,
}

/// Interactive menu session over a canteen dataset.
///
/// Generic over its input and output streams so whole sessions can be
/// scripted in tests.
struct Menu<R, W> {
    index: DatasetIndex,
    viewport: Viewport,
    extent: MapExtent,
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    fn new(index: DatasetIndex, viewport: Viewport, extent: MapExtent, input: R, out: W) -> Self {
        Menu {
            index,
            viewport,
            extent,
            input,
            out,
        }
    }

    /// Drive the menu until the exit option is chosen or input runs out.
    fn run(&mut self) -> io::Result<()> {
        loop {
            self.print_header()?;
            let Some(choice) = self.prompt("Enter option [1-5]: ")? else {
                return Ok(());
            };
            match choice.trim().parse::<u32>() {
                Ok(1) => self.display_data()?,
                Ok(2) => self.keyword_search()?,
                Ok(3) => self.price_search()?,
                Ok(4) => self.location_search()?,
                Ok(5) => {
                    writeln!(self.out, "Exiting F&B Recommendation")?;
                    return Ok(());
                }
                _ => writeln!(self.out, "Invalid input. Please enter a number between 1 and 5.")?,
            }
        }
    }

    fn print_header(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "========================")?;
        writeln!(self.out, "F&B Recommendation Menu")?;
        writeln!(self.out, "1 -- Display Data")?;
        writeln!(self.out, "2 -- Keyword-based Search")?;
        writeln!(self.out, "3 -- Price-based Search")?;
        writeln!(self.out, "4 -- Location-based Search")?;
        writeln!(self.out, "5 -- Exit Program")?;
        writeln!(self.out, "========================")?;
        Ok(())
    }

    /// Write a prompt without a trailing newline and read the reply line.
    /// Returns `None` once the input stream is exhausted.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.out, "{text}")?;
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    /// Option 1: list every canteen with its location and stalls.
    fn display_data(&mut self) -> io::Result<()> {
        for (canteen, &(x, y)) in self.index.locations() {
            writeln!(self.out)?;
            writeln!(self.out, "{canteen} @ ({x}, {y})")?;
            for stall in &self.index.stalls_by_canteen()[canteen.as_str()] {
                match stall.price {
                    Some(price) => writeln!(
                        self.out,
                        "  - {}: {} | ${price:.2}",
                        stall.name, stall.keywords
                    )?,
                    None => writeln!(
                        self.out,
                        "  - {}: {} | price not listed",
                        stall.name, stall.keywords
                    )?,
                }
            }
        }
        writeln!(self.out)?;
        writeln!(
            self.out,
            "{} canteens, {} stalls",
            self.index.canteen_count(),
            self.index.stall_count()
        )?;
        Ok(())
    }

    /// Option 2: substring keyword search across stall keyword lists.
    fn keyword_search(&mut self) -> io::Result<()> {
        let Some(line) = self.prompt("Enter food keywords (comma-separated): ")? else {
            return Ok(());
        };
        let terms = split_terms(&line);
        let hits = filter_by_keyword(&self.index, &terms);
        if hits.is_empty() {
            writeln!(self.out, "No matching stalls found for the given keywords.")?;
            return Ok(());
        }
        writeln!(self.out, "Search Results:")?;
        for (canteen, stalls) in &hits {
            writeln!(self.out, "{canteen}:")?;
            for (stall, keywords) in stalls {
                writeln!(self.out, "  - {stall}: {keywords}")?;
            }
        }
        Ok(())
    }

    /// Option 3: keyword search restricted to stalls within a price ceiling.
    fn price_search(&mut self) -> io::Result<()> {
        let Some(line) = self.prompt("Enter food keywords (comma-separated): ")? else {
            return Ok(());
        };
        let terms = split_terms(&line);
        let Some(price_line) = self.prompt("Enter maximum price: ")? else {
            return Ok(());
        };
        let max_price = match parse_max_price(&price_line) {
            Ok(price) => price,
            Err(_) => {
                writeln!(self.out, "Invalid price entered. Please enter a number.")?;
                return Ok(());
            }
        };
        let hits = filter_by_price(&self.index, &terms, max_price);
        if hits.is_empty() {
            writeln!(self.out, "No matching stalls found within your budget.")?;
            return Ok(());
        }
        writeln!(self.out, "Search Results (within budget):")?;
        for (canteen, stalls) in &hits {
            writeln!(self.out, "{canteen}:")?;
            for (stall, (keywords, price)) in stalls {
                writeln!(self.out, "  - {stall}: {keywords} | Price: ${price:.2}")?;
            }
        }
        Ok(())
    }

    /// Option 4: capture two clicks and rank canteens around their midpoint.
    fn location_search(&mut self) -> io::Result<()> {
        writeln!(
            self.out,
            "Click on the map to select both user locations ({:.0} x {:.0} pixels, origin at the bottom left).",
            self.viewport.width(),
            self.viewport.height()
        )?;
        let (a, b) = {
            let mut capture = PromptCapture {
                input: &mut self.input,
                out: &mut self.out,
                extent: self.extent,
            };
            capture.capture_two_points(self.viewport)
        };

        let Some(k_line) = self.prompt("Enter number of nearest canteens to find: ")? else {
            return Ok(());
        };
        let k = match k_line.trim().parse::<i64>() {
            Ok(k) => k,
            Err(_) => {
                writeln!(self.out, "Invalid number. Using default k=1")?;
                1
            }
        };
        if k < 1 {
            writeln!(self.out, "Warning: k must be positive. Default k = 1 is set.")?;
        }

        match nearest_canteens(&self.index, a, b, k) {
            Ok(nearby) => {
                if nearby.len() == 1 {
                    writeln!(self.out, "1 Nearest Canteen found:")?;
                } else {
                    writeln!(self.out, "{} Nearest Canteens found:", nearby.len())?;
                }
                for canteen in &nearby {
                    writeln!(self.out, "{} – {:.0}m", canteen.name, canteen.distance)?;
                }
            }
            Err(MakanError::IncompleteInput) => {
                writeln!(self.out, "Invalid user locations. Please try again.")?;
            }
            Err(err) => writeln!(self.out, "Location search failed: {err}")?,
        }
        Ok(())
    }
}

/// Capture source that prompts for pixel clicks on the input stream.
///
/// Stands in for a map window: each captured click is converted to native
/// map coordinates and echoed back. A click that cannot be read or parsed
/// resolves to the sentinel for that user.
struct PromptCapture<R, W> {
    input: R,
    out: W,
    extent: MapExtent,
}

impl<R: BufRead, W: Write> PromptCapture<R, W> {
    fn prompt_click(&mut self, who: &str, viewport: Viewport) -> UserPoint {
        write!(self.out, "{who} pixel click (x y): ").ok()?;
        self.out.flush().ok()?;
        let mut line = String::new();
        if self.input.read_line(&mut line).ok()? == 0 {
            return None;
        }
        let click = parse_click(&line)?;
        let point = pixel_to_map(click, viewport, self.extent);
        writeln!(self.out, "{who}'s location (x, y): ({}, {})", point.0, point.1).ok()?;
        Some(point)
    }
}

impl<R: BufRead, W: Write> PointCapture for PromptCapture<R, W> {
    fn capture_two_points(&mut self, viewport: Viewport) -> (UserPoint, UserPoint) {
        let a = self.prompt_click("User A", viewport);
        let b = self.prompt_click("User B", viewport);
        (a, b)
    }
}

/// Parse a pixel click typed as two numbers separated by spaces or a comma.
fn parse_click(line: &str) -> Option<Point> {
    let mut parts = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty());
    let x = parts.next()?.parse().ok()?;
    let y = parts.next()?.parse().ok()?;
    Some((x, y))
}

/// Split a comma-separated keyword line into trimmed, non-empty terms.
fn split_terms(line: &str) -> Vec<&str> {
    line.split(',')
        .map(str::trim)
        .filter(|term| !term.is_empty())
        .collect()
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

    let extent = MapExtent {
        width: args.map_width,
        height: args.map_height,
    };
    let viewport = Viewport::scaled(extent, args.scale)?;
    let index = DatasetIndex::load(&args.data)
        .with_context(|| format!("failed to load dataset {}", args.data.display()))?;
    info!(
        canteens = index.canteen_count(),
        stalls = index.stall_count(),
        "dataset loaded"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut menu = Menu::new(index, viewport, extent, stdin.lock(), stdout.lock());
    menu.run()?;
    Ok(())
}
