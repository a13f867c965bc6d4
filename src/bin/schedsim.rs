use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use serde::Serialize;

use schedsim::{
    report, Comparison, RunResult, SimConfig, Simulator, Summary, Workload, DEFAULT_QUANTUM,
};

/// Deterministic single-CPU scheduling simulator.
///
/// Runs a fixed workload of processes through FCFS, SJF, STCF, round
/// robin and priority scheduling, then reports per-process wait and
/// turnaround times, the dispatch sequence and context-switch count of
/// each run, and an overall comparison of the five algorithms.
///
/// The workload file holds one process per line as three whitespace-
/// separated integers: burst time, priority, arrival time. Process IDs
/// are assigned in input order.
#[derive(Debug, Parser)]
#[clap(version)]
struct Opts {
    /// Workload file to simulate.
    workload: PathBuf,

    /// Write the report to this file instead of stdout.
    #[clap(short = 'o', long)]
    output: Option<PathBuf>,

    /// Log the simulation state every INTERVAL ticks (0 disables the
    /// tick log).
    #[clap(short = 'i', long, default_value = "1")]
    interval: u64,

    /// Round-robin time quantum, in ticks.
    #[clap(short = 'q', long, default_value_t = DEFAULT_QUANTUM)]
    quantum: u64,

    /// Emit summaries and rankings as JSON on stdout instead of the
    /// plain-text report.
    #[clap(long, action = clap::ArgAction::SetTrue)]
    json: bool,

    /// Enable verbose output, including per-run scheduling events.
    #[clap(short = 'v', long, action = clap::ArgAction::SetTrue)]
    verbose: bool,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    summaries: Vec<&'a Summary>,
    comparison: Comparison,
}

fn write_json(out: &mut impl Write, results: &[RunResult]) -> Result<()> {
    let summaries: Vec<&Summary> = results.iter().map(|r| &r.summary).collect();
    let owned: Vec<Summary> = summaries.iter().map(|&s| s.clone()).collect();
    let report = JsonReport {
        comparison: Comparison::rank(&owned),
        summaries,
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}

fn main() -> Result<()> {
    let opts = Opts::parse();

    let loglevel = if opts.verbose {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Info
    };
    let mut lcfg = simplelog::ConfigBuilder::new();
    lcfg.set_time_level(simplelog::LevelFilter::Error)
        .set_location_level(simplelog::LevelFilter::Off)
        .set_target_level(simplelog::LevelFilter::Off)
        .set_thread_level(simplelog::LevelFilter::Off);
    simplelog::TermLogger::init(
        loglevel,
        lcfg.build(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    let workload = Workload::from_file(&opts.workload)?;
    info!(
        "loaded {} processes from {}",
        workload.len(),
        opts.workload.display()
    );

    let config = SimConfig {
        quantum: opts.quantum,
        tick_log_interval: (opts.interval > 0).then_some(opts.interval),
        ..Default::default()
    };
    let results = Simulator::new(config).run_all(&workload);

    match &opts.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create output file {}", path.display()))?;
            let mut out = BufWriter::new(file);
            report::write_full_report(&mut out, &results)?;
            out.flush()?;
            info!("report written to {}", path.display());
        }
        None if !opts.json => {
            report::write_full_report(&mut io::stdout().lock(), &results)?;
        }
        None => {}
    }

    if opts.json {
        write_json(&mut io::stdout().lock(), &results)?;
    }

    Ok(())
}
