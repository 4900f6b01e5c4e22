//! Cuckoo filter command line tool.
//!
//! Loads configuration, initializes logging and runs one of the subcommands
//! against a filter built from the configured parameters.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;

use cuckoo_filter_lib::bench::{run_benchmark, BenchReport};
use cuckoo_filter_lib::config::{AppConfig, ConfigLoader, LogConfig, ENV_PREFIX};
use cuckoo_filter_lib::error::{
    CuckooError, CuckooResult, ErrorContext, ErrorReporter, TracingErrorReporter,
};
use cuckoo_filter_lib::filter::CuckooFilter;
use cuckoo_filter_lib::logging::init_logging;

/// Command line arguments for the cuckoo filter tool.
#[derive(Parser, Debug)]
#[clap(name = "cuckoo", version, author, about)]
struct Args {
    /// Path to configuration file (TOML or JSON)
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Measure insert, lookup and delete throughput and the false positive rate
    Bench {
        /// Print the report as JSON
        #[clap(long)]
        json: bool,

        /// Override the number of pre-filled items
        #[clap(long)]
        prefill: Option<usize>,

        /// Override the number of timed operations
        #[clap(long)]
        iterations: Option<usize>,

        /// Seed the random sources for a reproducible run
        #[clap(long)]
        seed: Option<u64>,
    },

    /// Insert every line of a file into a filter and report occupancy
    Check {
        /// Newline-delimited items
        #[clap(value_parser)]
        input: PathBuf,

        /// Print the report as JSON
        #[clap(long)]
        json: bool,
    },

    /// Validate the configuration
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Outcome of loading a file of items into a filter.
#[derive(Debug, Clone, Serialize, PartialEq)]
struct CheckReport {
    items: usize,
    inserted: usize,
    failed: usize,
    filled: usize,
    size: usize,
    load_factor: f64,
}

/// Inserts each non-empty line read from `reader`.
fn load_items<R: BufRead>(filter: &mut CuckooFilter, reader: R) -> CuckooResult<CheckReport> {
    let mut items = 0;
    let mut inserted = 0;
    for line in reader.lines() {
        let line = line?;
        if line.is_empty() {
            continue;
        }
        items += 1;
        if filter.insert(&line) {
            inserted += 1;
        }
    }

    Ok(CheckReport {
        items,
        inserted,
        failed: items - inserted,
        filled: filter.filled(),
        size: filter.size(),
        load_factor: filter.load_factor(),
    })
}

fn run_check(config: &AppConfig, input: &Path, json: bool) -> CuckooResult<()> {
    let mut filter = CuckooFilter::with_config(config.filter.clone())?;
    let reader = BufReader::new(File::open(input)?);
    let report = load_items(&mut filter, reader)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "items: {}  inserted: {}  failed: {}  filled: {}/{}  load factor: {:.4}",
            report.items,
            report.inserted,
            report.failed,
            report.filled,
            report.size,
            report.load_factor
        );
    }
    Ok(())
}

fn print_bench(report: &BenchReport) {
    println!(
        "filter: size {} / {} buckets of {} / max kicks {}",
        report.size, report.num_buckets, report.bucket_size, report.max_kicks
    );
    println!(
        "pre-fill: {} inserted, {} failed",
        report.prefill_inserted, report.prefill_failed
    );
    for (name, stats) in [
        ("insertions", &report.insert),
        ("lookups", &report.lookup),
        ("deletions", &report.delete),
    ] {
        println!(
            "{name:>10}: {:>12.0} ops/s ({} of {} returned true)",
            stats.ops_per_sec, stats.hits, stats.operations
        );
    }
    println!(
        "false positives: {} of {} probes ({:.4}%)",
        report.false_positives,
        report.probes,
        report.false_positive_rate * 100.0
    );
    println!("filled: {} (load factor {:.4})", report.filled, report.load_factor);
}

fn generate_config(output: &Path) -> CuckooResult<()> {
    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let toml = toml::to_string_pretty(&AppConfig::default())
        .map_err(|e| CuckooError::Custom(format!("Failed to serialize config: {e}")))?;
    std::fs::write(output, toml)?;

    info!("Default configuration written to {:?}", output);
    Ok(())
}

/// Main entry point for the application.
fn main() -> CuckooResult<()> {
    let args = Args::parse();
    let reporter = TracingErrorReporter;

    if let Some(Command::GenConfig { output }) = &args.command {
        init_logging(&LogConfig::default())?;
        return generate_config(output);
    }

    let loaded = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX).load();
    let log_config = loaded
        .as_ref()
        .map(|config| config.log.clone())
        .unwrap_or_default();
    init_logging(&log_config)?;

    let mut config = match loaded {
        Ok(config) => config,
        Err(e) => {
            reporter.report(ErrorContext::new(e.into(), "config"));
            process::exit(1);
        }
    };

    let result = match args.command.unwrap_or(Command::Validate) {
        Command::Bench {
            json,
            prefill,
            iterations,
            seed,
        } => {
            config.bench.prefill = prefill.unwrap_or(config.bench.prefill);
            config.bench.iterations = iterations.unwrap_or(config.bench.iterations);
            config.bench.seed = seed.or(config.bench.seed);

            run_benchmark(&config.filter, &config.bench).and_then(|report| {
                if json {
                    println!("{}", serde_json::to_string_pretty(&report)?);
                } else {
                    print_bench(&report);
                }
                Ok(())
            })
        }
        Command::Check { input, json } => run_check(&config, &input, json),
        Command::Validate => {
            info!(
                capacity = config.filter.capacity,
                bucket_size = config.filter.bucket_size,
                max_kicks = config.filter.max_kicks,
                "Configuration validated successfully"
            );
            Ok(())
        }
        Command::GenConfig { .. } => Ok(()),
    };

    if let Err(e) = result {
        reporter.report(ErrorContext::new(e, "cuckoo"));
        process::exit(1);
    }
    Ok(())
}
