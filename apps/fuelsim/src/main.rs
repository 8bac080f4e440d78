//! fuelsim: run batches of the fuel station simulation from the shell.
//!
//! ```text
//! fuelsim --runs 100 --scenario dedicated --csv stats.csv
//! fuelsim --config station.json --strict --json batch.json
//! RUST_LOG=fs_sim=trace fuelsim --duration 20
//! ```

mod cli;

#[cfg(test)]
mod tests;

use std::time::Instant;

use anyhow::{Result, bail};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fs_core::Scenario;
use fs_output::{CsvWriter, JsonWriter, OutputWriter};
use fs_sim::{RunStats, run_multiple_simulations};

use cli::Cli;

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fuelsim=info,fs_sim=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    if cli.list_scenarios {
        for scenario in Scenario::ALL {
            println!("{:<14} {}", scenario.name(), scenario.description());
        }
        return Ok(());
    }

    let config = cli.station_config()?;
    if cli.show_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }
    if cli.runs == 0 {
        bail!("--runs must be at least 1");
    }

    // 1. Run.
    let t0 = Instant::now();
    let (all_states, all_stats) = run_multiple_simulations(cli.runs, &config)?;
    info!(runs = all_stats.len(), elapsed_s = t0.elapsed().as_secs_f64(), "simulation complete");

    // 2. Output.
    if let Some(path) = &cli.csv {
        let mut writer = CsvWriter::new(path)?;
        writer.write_stats(&all_stats)?;
        writer.finish()?;
        info!(path = %path.display(), "wrote CSV statistics");
    }
    if let Some(path) = &cli.json {
        let mut writer = JsonWriter::new(path)?;
        writer.write_states(&all_states)?;
        writer.write_stats(&all_stats)?;
        writer.finish()?;
        info!(path = %path.display(), "wrote JSON batch");
    }

    // 3. Summary.
    print!("{}", summary_table(&all_stats));
    Ok(())
}

/// Per-run headline numbers plus a mean row.
fn summary_table(stats: &[RunStats]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<6} {:>9} {:>9} {:>9} {:>9} {:>10}\n",
        "Run", "Arrived", "Served", "Mistakes", "Left", "Avg wait"
    ));
    out.push_str(&format!("{}\n", "-".repeat(57)));

    for (i, s) in stats.iter().enumerate() {
        out.push_str(&format!(
            "{:<6} {:>9} {:>9} {:>9} {:>9} {:>10.2}\n",
            i,
            s.total_cars_generated,
            s.total_cars_serviced,
            s.number_of_mistakes,
            s.total_cars_in_main_queue_at_end + s.total_cars_in_mini_queues_at_end,
            s.avg_waiting_time,
        ));
    }

    if stats.len() > 1 {
        let n = stats.len() as f64;
        let mean = |f: fn(&RunStats) -> f64| stats.iter().map(f).sum::<f64>() / n;
        out.push_str(&format!("{}\n", "-".repeat(57)));
        out.push_str(&format!(
            "{:<6} {:>9.1} {:>9.1} {:>9.1} {:>9.1} {:>10.2}\n",
            "mean",
            mean(|s| s.total_cars_generated as f64),
            mean(|s| s.total_cars_serviced as f64),
            mean(|s| s.number_of_mistakes as f64),
            mean(|s| (s.total_cars_in_main_queue_at_end + s.total_cars_in_mini_queues_at_end) as f64),
            mean(|s| s.avg_waiting_time),
        ));
    }
    out
}
