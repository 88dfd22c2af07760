//! `insights` — build market metric and summary tables from price CSVs.
//!
//! Discovers per-ticker CSV files in a data directory, runs the
//! pipeline, writes the three output tables, and prints the per-ticker
//! summary. All paths are explicit arguments; there is no ambient
//! configuration.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use insights_ingestion::discover_csv_tables;
use insights_report::{build_report, write_tables, Report};

#[derive(Parser, Debug)]
#[command(
    name = "insights",
    about = "Build price metrics and summary tables from per-ticker CSVs"
)]
struct Args {
    /// Directory containing CSV files with Date/Ticker/Close columns.
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,

    /// Directory the output tables are written to.
    #[arg(long, default_value = "reports")]
    out_dir: PathBuf,

    /// Print the summary as JSON instead of a plain table.
    #[arg(long)]
    summary_json: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(error) = run(Args::parse()) {
        eprintln!("error: {error:#}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let tables = discover_csv_tables(&args.data_dir)
        .with_context(|| format!("reading data directory {}", args.data_dir.display()))?;

    let report = build_report(&tables)?;
    let paths = write_tables(&report, &args.out_dir)?;
    info!(tables = paths.len(), out_dir = %args.out_dir.display(), "export complete");

    if args.summary_json {
        println!("{}", serde_json::to_string_pretty(&report.summary)?);
    } else {
        print_summary(&report);
    }

    Ok(())
}

fn print_summary(report: &Report) {
    println!(
        "{:<8} {:>12} {:>12} {:>12} {:>12}",
        "Ticker", "Total_Return", "Return_5D", "Vol_10", "Last_Close"
    );
    for row in &report.summary {
        println!(
            "{:<8} {:>12} {:>12} {:>12} {:>12}",
            row.ticker,
            fmt_pct(row.total_return),
            fmt_pct(row.return_5d),
            fmt_num(row.vol_10),
            fmt_num(row.last_close),
        );
    }
}

fn fmt_pct(value: Option<f64>) -> String {
    value
        .map(|v| format!("{:.2}%", v * 100.0))
        .unwrap_or_else(|| "-".to_string())
}

fn fmt_num(value: Option<f64>) -> String {
    value
        .map(|v| format!("{v:.4}"))
        .unwrap_or_else(|| "-".to_string())
}
