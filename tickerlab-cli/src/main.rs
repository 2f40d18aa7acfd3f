//! TickerLab CLI — analyze and export commands.
//!
//! Commands:
//! - `analyze` — fetch market data for a symbol, print the report, and
//!   optionally write the full CSV export
//! - `periods` — list the supported time periods and their codes

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;
use tickerlab_core::domain::{AnalysisRequest, ChartKind, Period};
use tickerlab_core::export::{render_export, suggested_filename};
use tickerlab_core::report::analyze;

mod config;
mod render;
mod yahoo;

use config::CliConfig;
use yahoo::YahooClient;

#[derive(Parser)]
#[command(
    name = "tickerlab",
    about = "TickerLab CLI — stock metrics, statistics, and CSV export"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch market data for a symbol and print the analysis report.
    Analyze {
        /// Ticker symbol (e.g. AAPL, GOOGL, TSLA).
        symbol: String,

        /// Period code (see `periods`). Defaults to 1y.
        #[arg(long)]
        period: Option<Period>,

        /// Chart type: line or candlestick.
        #[arg(long)]
        chart: Option<ChartKind>,

        /// Write the full CSV export after the report.
        #[arg(long, default_value_t = false)]
        export: bool,

        /// Directory for the export file. Defaults to ./exports.
        #[arg(long)]
        output_dir: Option<PathBuf>,

        /// Path to a TOML defaults file.
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// List the supported time periods and their codes.
    Periods,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            symbol,
            period,
            chart,
            export,
            output_dir,
            config,
        } => run_analyze(symbol, period, chart, export, output_dir, config),
        Commands::Periods => {
            run_periods();
            Ok(())
        }
    }
}

fn run_analyze(
    symbol: String,
    period: Option<Period>,
    chart: Option<ChartKind>,
    export: bool,
    output_dir: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let defaults = match config_path {
        Some(path) => CliConfig::from_file(&path)?,
        None => CliConfig::default(),
    };

    // Flags beat the config file; the config file beats built-in defaults.
    let period = period.or(defaults.analysis.period).unwrap_or_default();
    let chart = chart.or(defaults.analysis.chart).unwrap_or_default();
    let output_dir = output_dir.unwrap_or(defaults.export.output_dir);

    let request = AnalysisRequest::new(&symbol, period, chart);
    let client = YahooClient::new(Duration::from_secs(defaults.fetch.timeout_secs));

    println!("Fetching data for {}...", request.symbol);
    let (info, series) = match client.fetch(&request.symbol, request.period) {
        Ok(fetched) => fetched,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("{}", e.hint());
            std::process::exit(1);
        }
    };

    let report = analyze(&request, &info, &series);
    print!("{}", render::report_text(&report, &info, &series));

    if export {
        let generated_at = chrono::Local::now().naive_local();
        let document = render_export(
            &request.symbol,
            request.period,
            &report.summary,
            &series,
            generated_at,
        )?;

        std::fs::create_dir_all(&output_dir)
            .with_context(|| format!("failed to create export dir: {}", output_dir.display()))?;
        let path = output_dir.join(suggested_filename(&request.symbol, generated_at.date()));
        std::fs::write(&path, document)
            .with_context(|| format!("failed to write export: {}", path.display()))?;

        println!();
        println!("Export written to: {}", path.display());
    }

    Ok(())
}

fn run_periods() {
    println!("{:<10} {}", "Code", "Label");
    println!("{}", "-".repeat(20));
    for period in Period::ALL {
        println!("{:<10} {}", period.code(), period.label());
    }
}
