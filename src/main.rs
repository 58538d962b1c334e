use std::{fs, path::PathBuf};

use anyhow::{Context, bail};
use clap::{ArgAction, Parser, ValueEnum};
use log::LevelFilter;
use sched_sim::{
    PolicyKind, ScheduleResult, Workload, simulate_all, simulate_workload,
    sim::{BernoulliParams, bernoulli, report},
};

// Quantum used for RR when every policy is compared and none was given
const DEFAULT_QUANTUM: i64 = 2;

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq)]
enum PolicyArg {
    /// First-come first-served
    Fcfs,
    /// Shortest job first
    Sjf,
    /// Shortest remaining time first
    Srtf,
    /// Round robin (needs --quantum)
    Rr,
    /// Non-preemptive priority (needs priorities)
    Npp,
    /// Preemptive priority (needs priorities)
    Pp,
    /// Highest response ratio next
    Hrrn,
    /// Every policy the workload can feed
    All,
}

impl PolicyArg {
    fn kind(self) -> Option<PolicyKind> {
        match self {
            Self::Fcfs => Some(PolicyKind::Fcfs),
            Self::Sjf => Some(PolicyKind::Sjf),
            Self::Srtf => Some(PolicyKind::Srtf),
            Self::Rr => Some(PolicyKind::Rr),
            Self::Npp => Some(PolicyKind::Npp),
            Self::Pp => Some(PolicyKind::Pp),
            Self::Hrrn => Some(PolicyKind::Hrrn),
            Self::All => None,
        }
    }
}

/// Single-CPU scheduling simulator
#[derive(Parser, Debug)]
#[command(name = "sched_sim")]
#[command(about = "Simulate classic CPU scheduling policies", long_about = None)]
struct Args {
    /// Scheduling policy to simulate
    #[arg(short, long, value_enum, default_value_t = PolicyArg::All)]
    policy: PolicyArg,

    /// Arrival times, whitespace separated (e.g. "0 1 2")
    #[arg(short, long, requires = "burst", allow_hyphen_values = true)]
    arrival: Option<String>,

    /// Burst times, whitespace separated (e.g. "4 3 2")
    #[arg(short, long, requires = "arrival", allow_hyphen_values = true)]
    burst: Option<String>,

    /// Priorities, whitespace separated; lower runs first
    #[arg(short = 'P', long, requires = "arrival", allow_hyphen_values = true)]
    priority: Option<String>,

    /// Workload file with `arrival:`, `burst:` and optional `priority:` lines
    #[arg(short, long, conflicts_with_all = ["arrival", "random"])]
    file: Option<PathBuf>,

    /// Generate a Bernoulli workload spanning this many ticks
    #[arg(long, conflicts_with = "arrival")]
    random: Option<u64>,

    /// Seed for --random
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Per-tick arrival probability for --random
    #[arg(long, default_value_t = 0.3)]
    p_arrival: f64,

    /// Probability that a generated process is short
    #[arg(long, default_value_t = 0.3)]
    p_short: f64,

    /// Burst of a short generated process
    #[arg(long, default_value_t = 2)]
    short_ticks: i64,

    /// Burst of a long generated process
    #[arg(long, default_value_t = 6)]
    long_ticks: i64,

    /// Round robin time quantum
    #[arg(short, long, allow_hyphen_values = true)]
    quantum: Option<i64>,

    /// Print results as JSON
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG applies otherwise
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let workload = load_workload(&args)?;
    log::info!("loaded workload with {} processes", workload.len());

    let results = match args.policy.kind() {
        Some(kind) => vec![
            simulate_workload(kind, &workload, args.quantum)
                .with_context(|| format!("cannot simulate {kind}"))?,
        ],
        None => {
            let quantum = args.quantum.unwrap_or(DEFAULT_QUANTUM);
            simulate_all(&workload, Some(quantum)).context("cannot simulate workload")?
        }
    };

    if args.json {
        let json = match results.as_slice() {
            [single] => serde_json::to_string_pretty(single)?,
            all => serde_json::to_string_pretty(all)?,
        };
        println!("{json}");
        return Ok(());
    }

    for result in &results {
        println!("{}", report::render(result));
    }
    if results.len() > 1 {
        print_comparison(&results);
    }
    Ok(())
}

fn init_logging(verbose: u8) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    match verbose {
        0 => {}
        1 => {
            builder.filter_level(LevelFilter::Debug);
        }
        _ => {
            builder.filter_level(LevelFilter::Trace);
        }
    }
    builder.init();
}

fn load_workload(args: &Args) -> anyhow::Result<Workload> {
    if let Some(path) = &args.file {
        let text = fs::read_to_string(path)
            .with_context(|| format!("cannot read workload file {}", path.display()))?;
        return Workload::parse(&text).with_context(|| format!("invalid workload file {}", path.display()));
    }

    if let Some(ticks) = args.random {
        let params = BernoulliParams {
            ticks,
            p_arrival: args.p_arrival,
            p_short: args.p_short,
            short_ticks: args.short_ticks,
            long_ticks: args.long_ticks,
            ..BernoulliParams::default()
        };
        let workload = bernoulli(&params, args.seed);
        if workload.is_empty() {
            bail!("no process arrived in {ticks} ticks with seed {}; raise --p-arrival or --random", args.seed);
        }
        return Ok(workload);
    }

    match (&args.arrival, &args.burst) {
        (Some(arrival), Some(burst)) => {
            Workload::from_lists(arrival, burst, args.priority.as_deref()).context("invalid process list")
        }
        _ => bail!("provide --arrival and --burst, --file, or --random"),
    }
}

fn print_comparison(results: &[ScheduleResult]) {
    println!(
        "{:<6}{:>12}{:>12}{:>12}{:>12}{:>10}",
        "policy", "turnaround", "waiting", "response", "w.tat", "makespan"
    );
    for result in results {
        let a = &result.averages;
        println!(
            "{:<6}{:>12.2}{:>12.2}{:>12.2}{:>12.2}{:>10}",
            result.policy.name(),
            a.turnaround,
            a.waiting,
            a.response,
            a.weighted_turnaround,
            result.makespan()
        );
    }
}
