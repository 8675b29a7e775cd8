//! Command-line host for the ICU risk simulator
//!
//! Seeds a ward, drives ticks on a fixed interval and reports dashboard
//! metrics. Alerts are emitted as `warn` log events.

use std::path::PathBuf;
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use icu_risk_sim::{AlertMonitor, MonitorReport, RiskEngine, SimulationConfig, Snapshot};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "icu-risk-sim", version, about = "Simulated ICU sepsis risk monitor")]
struct Args {
    /// JSON file with a SimulationConfig
    #[arg(long)]
    config: Option<PathBuf>,

    /// RNG seed (overrides the config file)
    #[arg(long)]
    seed: Option<u64>,

    /// Number of ticks to run
    #[arg(long, default_value_t = 10)]
    ticks: usize,

    /// Simulated milliseconds per tick (overrides the config file)
    #[arg(long)]
    interval_ms: Option<i64>,

    /// Sepsis risk at or above which patients raise alerts
    #[arg(long, default_value_t = 70.0)]
    threshold: f64,

    /// Sleep the tick interval between ticks
    #[arg(long)]
    realtime: bool,

    /// Print each snapshot as JSON instead of a summary line
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = load_config(&args)?;
    let interval_ms = config.tick_interval_ms;

    let mut engine = RiskEngine::new(config).context("failed to seed the ward")?;
    let mut monitor = AlertMonitor::new(args.threshold).context("invalid alert threshold")?;

    let initial = engine.snapshot();
    let report = monitor.observe(&initial);
    print_snapshot(&initial, &report, args.json)?;

    for _ in 0..args.ticks {
        if args.realtime {
            thread::sleep(Duration::from_millis(interval_ms.max(0) as u64));
        }

        let snapshot = engine.tick();
        let report = monitor.observe(&snapshot);

        for alert in &report.alerts {
            warn!(tick = alert.tick(), "{}", alert);
        }
        print_snapshot(&snapshot, &report, args.json)?;
    }

    info!(
        ticks = engine.current_tick(),
        digest = %engine.state_digest()?,
        "simulation finished"
    );

    Ok(())
}

fn load_config(args: &Args) -> Result<SimulationConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("failed to parse config {}", path.display()))?
        }
        None => SimulationConfig {
            start_time_ms: wall_clock_ms(),
            ..SimulationConfig::default()
        },
    };

    if let Some(seed) = args.seed {
        config.rng_seed = seed;
    }
    if let Some(interval_ms) = args.interval_ms {
        config.tick_interval_ms = interval_ms;
    }

    Ok(config)
}

fn wall_clock_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

fn print_snapshot(snapshot: &Snapshot, report: &MonitorReport, json: bool) -> Result<()> {
    if json {
        println!("{}", snapshot.to_json()?);
        return Ok(());
    }

    let metrics = &report.metrics;
    println!(
        "tick {:>4} | patients {:>3} | high sepsis risk {:>3} | avg sepsis risk {:>3} ({:+.1})",
        snapshot.tick,
        snapshot.patients.len(),
        metrics.high_sepsis_risk_count,
        metrics.avg_sepsis_risk,
        metrics.sepsis_risk_trend,
    );
    for dept in &snapshot.department_risks {
        println!(
            "    {:<14} avg {:>3}  patients {:>2}  high risk {:>2}",
            dept.department, dept.average_risk_score, dept.patients_count, dept.high_risk_count
        );
    }

    Ok(())
}
