//! Trace Metrics Command-Line Interface
//!
//! This CLI loads a whitespace-delimited measurement trace (time column plus
//! one or more signal columns) and reports signal metrics:
//! - Per-column statistics (peak-to-peak, RMS, min/max/mean)
//! - Phase difference between two signals via zero crossings
//! - Rise time against a reference level
//! - Correspondence lookup between columns
//!
//! `tracelab session <file>` starts the interactive menu; the other
//! subcommands run a single metric and exit.

mod session;

use anyhow::{bail, Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;
use tracelab_core::analysis::{
    corresponding_value, phase_report, rise_time, ColumnStats, DEFAULT_RISE_THRESHOLD,
};
use tracelab_core::ColumnTable;
use tracing::info;

#[derive(Parser)]
#[command(name = "tracelab")]
#[command(author, version, about = "Lab-trace signal metrics", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full report for a time/voltage/current trace
    Report {
        /// Input trace file
        file: PathBuf,
    },

    /// Per-column statistics (peak-to-peak, RMS, min/max/mean)
    Stats {
        /// Input trace file
        file: PathBuf,

        /// Columns to analyze (comma-separated, default: all signal columns)
        #[arg(short, long, value_delimiter = ',')]
        columns: Vec<usize>,

        /// Output format (text, json)
        #[arg(long, default_value = "text")]
        output_format: String,
    },

    /// Phase difference between two signal columns
    Phase {
        /// Input trace file
        file: PathBuf,

        /// Exactly two column indices (comma-separated)
        #[arg(short, long, value_delimiter = ',')]
        columns: Vec<usize>,
    },

    /// Peak and rise time of one column
    #[command(allow_negative_numbers = true)]
    Rise {
        /// Input trace file
        file: PathBuf,

        /// Column index
        #[arg(short, long)]
        column: usize,

        /// Reference level for the rise-time match (exact equality)
        #[arg(short, long, default_value_t = DEFAULT_RISE_THRESHOLD)]
        threshold: f64,
    },

    /// Value in one column at the row where another column matches
    #[command(allow_negative_numbers = true)]
    Lookup {
        /// Input trace file
        file: PathBuf,

        /// Column searched for the value
        #[arg(short, long)]
        base: usize,

        /// Column the result is read from
        #[arg(short, long)]
        search: usize,

        /// Value to match exactly in the base column
        #[arg(short, long)]
        value: f64,
    },

    /// Interactive column/operation menu
    Session {
        /// Input trace file
        file: PathBuf,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn load_table(path: &PathBuf) -> Result<ColumnTable> {
    let table = ColumnTable::from_path(path)
        .with_context(|| format!("failed to load trace {:?}", path))?;
    info!(
        columns = table.num_columns(),
        rows = table.num_rows(),
        "trace loaded"
    );
    if table.is_empty() {
        bail!("trace {:?} contains no rows", path);
    }
    Ok(table)
}

fn cmd_report(file: PathBuf) -> Result<()> {
    let table = load_table(&file)?;
    if table.num_columns() < 3 {
        bail!(
            "report needs time, voltage, and current columns (found {})",
            table.num_columns()
        );
    }

    let voltage = ColumnStats::compute(table.column(1)?)?;
    let current = ColumnStats::compute(table.column(2)?)?;

    println!("Voltage Peak to Peak: {}V", voltage.peak_to_peak);
    println!("Current Peak to Peak: {}I", current.peak_to_peak);

    let phase = phase_report(&table, 1, 2)?;
    println!("When Voltage Crosses Zero: {}", phase.crossing_a.time);
    println!("When Current Crosses Zero: {}", phase.crossing_b.time);
    println!(
        "Phase Difference Between Voltage and Current: {}",
        phase.difference
    );

    println!("Voltage RMS: {}", voltage.rms);
    println!("Current RMS: {}", current.rms);
    Ok(())
}

fn cmd_stats(file: PathBuf, columns: Vec<usize>, output_format: String) -> Result<()> {
    let table = load_table(&file)?;

    // Default to every signal column, leaving the time axis out.
    let columns = if columns.is_empty() {
        (1..table.num_columns()).collect()
    } else {
        columns
    };

    match output_format.as_str() {
        "json" => {
            let mut entries = Vec::new();
            for &col in &columns {
                let stats = ColumnStats::compute(table.column(col)?)?;
                entries.push(serde_json::json!({ "column": col, "stats": stats }));
            }
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        _ => {
            print!("{}", table.to_text());
            println!();
            for &col in &columns {
                let stats = ColumnStats::compute(table.column(col)?)?;
                println!("Column {}", col);
                println!("{}", "─".repeat(40));
                print!("{}", stats.to_text());
                println!();
            }
        }
    }
    Ok(())
}

fn cmd_phase(file: PathBuf, columns: Vec<usize>) -> Result<()> {
    let table = load_table(&file)?;
    let [a, b] = columns[..] else {
        bail!(
            "phase difference needs exactly 2 columns, got {}",
            columns.len()
        );
    };
    let report = phase_report(&table, a, b)?;
    print!("{}", report.to_text());
    Ok(())
}

fn cmd_rise(file: PathBuf, column: usize, threshold: f64) -> Result<()> {
    let table = load_table(&file)?;
    let result = rise_time(&table, column, threshold)?;
    print!("{}", result.to_text());
    Ok(())
}

fn cmd_lookup(file: PathBuf, base: usize, search: usize, value: f64) -> Result<()> {
    let table = load_table(&file)?;
    match corresponding_value(&table, base, search, value)? {
        Some(found) => println!("column {} = {} -> column {} = {}", base, value, search, found),
        None => println!("no row in column {} equals {}", base, value),
    }
    Ok(())
}

fn cmd_session(file: PathBuf) -> Result<()> {
    let table = load_table(&file)?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    session::run(&table, stdin.lock(), stdout.lock())?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = match cli.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Report { file } => cmd_report(file),

        Commands::Stats {
            file,
            columns,
            output_format,
        } => cmd_stats(file, columns, output_format),

        Commands::Phase { file, columns } => cmd_phase(file, columns),

        Commands::Rise {
            file,
            column,
            threshold,
        } => cmd_rise(file, column, threshold),

        Commands::Lookup {
            file,
            base,
            search,
            value,
        } => cmd_lookup(file, base, search, value),

        Commands::Session { file } => cmd_session(file),

        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let bin_name = cmd.get_name().to_string();
            generate(shell, &mut cmd, bin_name, &mut std::io::stdout());
            Ok(())
        }
    }
}
