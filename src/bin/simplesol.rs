//! Simplified Solar System Tool
//!
//! Prints pairwise planetary distances with their confidence and R-squared
//! values for a date, and optionally exports orbit plot data.
//!
//! Usage:
//!   cargo run --bin simplesol -- [--date YYYY-MM-DD] [--prompt] [--catalog bodies.json]
//!                                [--bodies Earth,Mars] [--format text|json]
//!                                [--plot-out orbits.csv] [--plot-format csv|json] [--parallel]
//!
//! Log verbosity is controlled with `RUST_LOG` (default: warn).

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use log::info;
use tracing_subscriber::EnvFilter;

use simplesol::calendar;
use simplesol::plot::{PlotFormat, PlotScene};
use simplesol::report::{DistanceReport, ReportFormat};
use simplesol::{Catalog, MetricsEngine, OrbitalModel};

/// Type alias for the error type used throughout this module
type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PlotFileFormat {
    Csv,
    Json,
}

/// Simplified Solar System Tool
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Approximate planetary distances on circular orbits",
    long_about = None
)]
struct Args {
    /// Date to evaluate (YYYY-MM-DD); defaults to today
    #[arg(short, long)]
    date: Option<String>,

    /// Ask for the date on standard input
    #[arg(short, long, action = ArgAction::SetTrue)]
    prompt: bool,

    /// JSON catalog file to use instead of the built-in planets
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Restrict the report to these bodies
    #[arg(short, long, value_delimiter = ',')]
    bodies: Vec<String>,

    /// Report format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Write orbit plot data to this file
    #[arg(long)]
    plot_out: Option<PathBuf>,

    /// Plot data format
    #[arg(long, value_enum, default_value = "csv")]
    plot_format: PlotFileFormat,

    /// Compute pairs in parallel
    #[arg(long, action = ArgAction::SetTrue)]
    parallel: bool,
}

/// Read a date line from stdin
fn prompt_for_date() -> Result<String> {
    print!("Enter a date (YYYY-MM-DD) or press Enter to use today's date: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}

fn load_catalog(args: &Args) -> Result<Catalog> {
    let catalog = match &args.catalog {
        Some(path) => Catalog::from_json_file(path)?,
        None => Catalog::solar_system()?,
    };
    if args.bodies.is_empty() {
        Ok(catalog)
    } else {
        Ok(catalog.subset(&args.bodies)?)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let input = if args.prompt && args.date.is_none() {
        Some(prompt_for_date()?)
    } else {
        args.date.clone()
    };
    let resolved = calendar::resolve_date(input.as_deref(), calendar::today());
    if resolved.fell_back {
        println!("Invalid date format. Using today's date instead.");
    }
    let date = resolved.date;

    let catalog = load_catalog(&args)?;
    info!("Evaluating {} bodies on {}", catalog.len(), date);

    let engine = MetricsEngine::new(&catalog);
    let metrics = if args.parallel {
        engine.pairwise_parallel(date)?
    } else {
        engine.pairwise(date)?
    };
    let report = DistanceReport::from_metrics(date, metrics);

    let format = match args.format {
        OutputFormat::Text => ReportFormat::Text,
        OutputFormat::Json => ReportFormat::Json,
    };
    report.write_to(io::stdout().lock(), format)?;

    if let Some(path) = &args.plot_out {
        let model = OrbitalModel::new(&catalog);
        let scene = PlotScene::build(&model, date)?;
        let plot_format = match args.plot_format {
            PlotFileFormat::Csv => PlotFormat::Csv,
            PlotFileFormat::Json => PlotFormat::Json,
        };
        scene.save(path, plot_format)?;
    }

    Ok(())
}
