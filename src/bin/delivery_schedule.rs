use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use delivery_schedule::config::SchedulerConfig;
use delivery_schedule::models::Schedule;
use delivery_schedule::scheduler::ScheduleKpi;
use delivery_schedule::session::{SchedulerSession, TaskRow};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "delivery-schedule")]
#[command(about = "Assign delivery tasks to vehicles before their deadlines")]
struct Cli {
    /// Task as PROCESSING_TIME:DEADLINE (repeatable)
    #[arg(long = "task", value_name = "P:D")]
    tasks: Vec<String>,

    /// JSON file with an array of {"processing_time", "deadline"} objects
    #[arg(long, value_name = "PATH")]
    tasks_file: Option<PathBuf>,

    /// Generate this many random tasks
    #[arg(long, value_name = "N")]
    random: Option<usize>,

    /// Seed for --random
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Number of vehicles (overrides config and environment)
    #[arg(long, value_name = "N")]
    vehicles: Option<usize>,

    /// JSON config file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the schedule as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Deserialize)]
struct TaskEntry {
    processing_time: i64,
    deadline: i64,
}

fn load_config(cli: &Cli) -> Result<SchedulerConfig> {
    let config = match &cli.config {
        Some(path) => SchedulerConfig::load(path)
            .with_context(|| format!("failed to load config at {}", path.display()))?,
        None => SchedulerConfig::default(),
    };
    let mut config = config.with_env_overrides()?;

    if let Some(vehicles) = cli.vehicles {
        config = config.with_num_vehicles(vehicles);
        config.validate()?;
    }
    Ok(config)
}

/// Adds `P:D` task arguments to the session, skipping malformed or
/// invalid ones. Returns the number of tasks added.
fn add_task_args(session: &mut SchedulerSession, args: &[String]) -> usize {
    let mut added = 0;
    for raw in args {
        let Some((processing_time, deadline)) = raw.split_once(':') else {
            warn!(input = %raw, "expected PROCESSING_TIME:DEADLINE, skipping");
            continue;
        };
        match session.add_task_from_input(processing_time, deadline) {
            Ok(_) => added += 1,
            Err(err) => warn!(input = %raw, "{err}"),
        }
    }
    added
}

/// Adds the entries of a JSON task array to the session, skipping invalid
/// ones. Returns the number of tasks added.
fn add_task_entries(session: &mut SchedulerSession, json: &str) -> Result<usize> {
    let entries: Vec<TaskEntry> = serde_json::from_str(json)?;
    let mut added = 0;
    for (index, entry) in entries.into_iter().enumerate() {
        match session.add_task(entry.processing_time, entry.deadline) {
            Ok(_) => added += 1,
            Err(err) => warn!(entry = index, "{err}"),
        }
    }
    Ok(added)
}

fn collect_tasks(cli: &Cli, session: &mut SchedulerSession) -> Result<()> {
    add_task_args(session, &cli.tasks);

    if let Some(path) = &cli.tasks_file {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read tasks file {}", path.display()))?;
        add_task_entries(session, &raw)
            .with_context(|| format!("failed to parse tasks file {}", path.display()))?;
    }

    if let Some(count) = cli.random {
        let mut rng = SmallRng::seed_from_u64(cli.seed);
        for _ in 0..count {
            let processing_time = rng.random_range(1..=8);
            let deadline = processing_time + rng.random_range(0..=24);
            session.add_task(processing_time, deadline)?;
        }
    }

    Ok(())
}

fn print_table(rows: &[TaskRow]) {
    println!(
        "{:<5} {:<24} {:<18} {:<10} {:<10}",
        "ID", "Processing Time (Hours)", "Deadline (Hours)", "Profit (₨)", "Vehicle"
    );
    for row in rows {
        println!(
            "{:<5} {:<24} {:<18} {:<10} {:<10}",
            row.id,
            format!("{} Hours", row.processing_time),
            format!("{} Hours", row.deadline),
            row.profit_label(),
            row.vehicle_label(),
        );
    }
}

fn print_summary(kpi: &ScheduleKpi) {
    println!();
    println!(
        "Scheduled {}/{} tasks on {} of {} vehicles, total profit ₨{}",
        kpi.scheduled_count,
        kpi.scheduled_count + kpi.unscheduled_count,
        kpi.vehicles_used,
        kpi.fleet_size,
        kpi.total_profit,
    );
}

fn print_json(schedule: &Schedule) -> Result<()> {
    let out = serde_json::to_string_pretty(schedule)?;
    println!("{out}");
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("delivery_schedule=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    info!(vehicles = config.num_vehicles, "configuration loaded");

    let mut session = SchedulerSession::new(config);
    collect_tasks(&cli, &mut session)?;

    let schedule = session.schedule();

    if cli.json {
        print_json(&schedule)?;
    } else {
        print_table(&session.rows(&schedule));
        let kpi = ScheduleKpi::calculate(&schedule, session.tasks(), session.config().num_vehicles);
        print_summary(&kpi);
    }

    Ok(())
}
