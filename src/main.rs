use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::info;
use serde::Serialize;

use u_cpusched::config::SimulationConfig;
use u_cpusched::models::{Algorithm, Timeline};
use u_cpusched::report;
use u_cpusched::scheduler::{ComparisonRunner, SchedulerEngine, SimulationMetrics};
use u_cpusched::workload::{generate, Workload, WorkloadShape};

/// Discrete-time CPU scheduling simulator.
///
/// Runs FCFS, SJF, SRTF, PRIORITY, PPRIORITY or RR over a JSON workload on
/// one or more logical cores, or compares all six side by side.
#[derive(Debug, Parser)]
#[clap(name = "u-cpusched", version)]
struct Opts {
    /// Enable verbose output. Specify multiple times to increase verbosity.
    #[clap(short = 'v', long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Simulate one algorithm and print its timeline and metrics.
    Run(RunOpts),
    /// Simulate every algorithm and print a comparison table.
    Compare(RunOpts),
    /// Print a random workload document.
    Generate(GenerateOpts),
}

#[derive(Debug, Args)]
struct RunOpts {
    /// Workload JSON file.
    workload: PathBuf,

    /// Scheduling algorithm. Overrides the workload file. Defaults to FCFS.
    #[clap(short = 'a', long)]
    algorithm: Option<String>,

    /// Number of logical cores. Overrides the workload file.
    #[clap(short = 'c', long)]
    cores: Option<usize>,

    /// Round-Robin quantum in ticks; 0 means unbounded. Overrides the workload file.
    #[clap(short = 'q', long, allow_negative_numbers = true)]
    quantum: Option<i64>,

    /// Overhead ticks charged per context switch in metrics.
    #[clap(long)]
    switch_cost: Option<u64>,

    /// Output format.
    #[clap(short = 'f', long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Debug, Args)]
struct GenerateOpts {
    /// Number of processes.
    #[clap(short = 'n', long, default_value = "8")]
    count: usize,

    /// Random seed.
    #[clap(short = 's', long, default_value = "0")]
    seed: u64,

    /// Latest arrival tick.
    #[clap(long, default_value = "10")]
    max_arrival: i64,

    /// Shortest burst.
    #[clap(long, default_value = "1")]
    min_burst: i64,

    /// Longest burst.
    #[clap(long, default_value = "8")]
    max_burst: i64,

    /// Largest priority value.
    #[clap(long, default_value = "5")]
    max_priority: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Csv,
    Json,
}

#[derive(Debug, Serialize)]
struct RunReport<'a> {
    config: &'a SimulationConfig,
    timeline: &'a Timeline,
    metrics: &'a SimulationMetrics,
}

fn load(opts: &RunOpts) -> Result<(Workload, SimulationConfig)> {
    let mut workload = Workload::load(&opts.workload)
        .with_context(|| format!("Failed to load workload {}", opts.workload.display()))?;

    if let Some(algorithm) = &opts.algorithm {
        workload.algorithm = Some(algorithm.parse()?);
    }
    if let Some(cores) = opts.cores {
        workload.cores = Some(cores);
    }
    if let Some(quantum) = opts.quantum {
        workload.quantum = Some(quantum);
    }
    if let Some(switch_cost) = opts.switch_cost {
        workload.switch_cost = Some(switch_cost);
    }

    let config = workload
        .config(Algorithm::Fcfs)
        .context("Invalid run configuration")?;
    Ok((workload, config))
}

fn run(opts: &RunOpts) -> Result<()> {
    let (workload, config) = load(opts)?;
    let processes = workload.normalized().context("Invalid process table")?;
    info!(
        "{} ({}), {} process(es), {} core(s)",
        config.algorithm,
        config.algorithm.description(),
        processes.len(),
        config.core_count
    );

    let engine = SchedulerEngine::new(config.clone())?;
    let outcome = engine.simulate(processes)?;
    let metrics = SimulationMetrics::calculate(&outcome, config.switch_cost);

    match opts.format {
        Format::Text => {
            println!("Gantt: {}", report::gantt_line(&outcome.timeline, config.core_count));
            print!(
                "{}",
                report::gantt_chart(&outcome.timeline, config.core_count, outcome.total_ticks)
            );
            println!();
            print!("{}", report::process_table(&metrics));
            println!();
            print!("{}", report::metrics_summary(&metrics));
        }
        Format::Csv => print!("{}", report::process_csv(&metrics)),
        Format::Json => {
            let doc = RunReport {
                config: &config,
                timeline: &outcome.timeline,
                metrics: &metrics,
            };
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }
    }
    Ok(())
}

fn compare(opts: &RunOpts) -> Result<()> {
    let (workload, config) = load(opts)?;
    let processes = workload.normalized().context("Invalid process table")?;
    info!(
        "comparing {} algorithm(s) on {} process(es), {} core(s)",
        Algorithm::ALL.len(),
        processes.len(),
        config.core_count
    );

    let table = ComparisonRunner::from_config(&config).run(&processes)?;

    match opts.format {
        Format::Text => print!("{}", report::comparison_table(&table)),
        Format::Csv => print!("{}", report::comparison_csv(&table)),
        Format::Json => println!("{}", serde_json::to_string_pretty(&table)?),
    }
    Ok(())
}

fn generate_workload(opts: &GenerateOpts) -> Result<()> {
    let shape = WorkloadShape {
        count: opts.count,
        max_arrival: opts.max_arrival,
        min_burst: opts.min_burst,
        max_burst: opts.max_burst,
        max_priority: opts.max_priority,
    };
    let workload = Workload::new(generate(&shape, opts.seed));
    println!("{}", workload.to_json());
    Ok(())
}

fn main() -> Result<()> {
    let opts = Opts::parse();

    let llv = match opts.verbose {
        0 => simplelog::LevelFilter::Info,
        1 => simplelog::LevelFilter::Debug,
        _ => simplelog::LevelFilter::Trace,
    };
    let mut lcfg = simplelog::ConfigBuilder::new();
    lcfg.set_time_level(simplelog::LevelFilter::Off)
        .set_location_level(simplelog::LevelFilter::Off)
        .set_target_level(simplelog::LevelFilter::Off)
        .set_thread_level(simplelog::LevelFilter::Off);
    simplelog::TermLogger::init(
        llv,
        lcfg.build(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    match &opts.command {
        Command::Run(run_opts) => run(run_opts),
        Command::Compare(run_opts) => compare(run_opts),
        Command::Generate(gen_opts) => generate_workload(gen_opts),
    }
}
