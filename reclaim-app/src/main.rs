use anyhow::{Context, Result};
use clap::Parser;
use reclaim_core::{estimation::engine, exporter, scenario};
use std::fs;
use std::path::Path;

mod plotting;
mod report;

/// Mine closure and rehabilitation cost estimator.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Path to the scenario YAML file.
    #[arg(default_value = "reclaim-app/scenario.yaml")]
    scenario: String,

    /// Directory under which a timestamped run directory is created.
    #[arg(long, default_value = "./data/runs")]
    output_root: String,

    /// Skip chart generation.
    #[arg(long)]
    no_plots: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    println!("--- Reclaim Closure Cost Estimator ---");

    let scenario_file = scenario::load_scenario_file(&cli.scenario)
        .with_context(|| format!("Failed to load scenario '{}'", cli.scenario))?;

    let output_dir = format!(
        "{}/closure_{}",
        cli.output_root,
        chrono::Utc::now().format("%Y%m%d_%H%M%S")
    );
    fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create output directory: {}", output_dir))?;

    // Save the scenario into the run directory for traceability
    scenario::save_scenario_file(
        Path::new(&output_dir).join("scenario.yaml"),
        &scenario_file,
    )?;

    println!("\n--- [Engine] Running estimation ---");
    let results = engine::estimate(&scenario_file.scenario);

    let results_json = serde_json::to_string_pretty(&results)?;
    fs::write(Path::new(&output_dir).join("results.json"), results_json)?;

    exporter::write_cashflow_csv(&format!("{}/cashflow.csv", output_dir), &results.cashflows)?;
    exporter::write_line_items_csv(
        &format!("{}/line_items.csv", output_dir),
        &results.line_items,
    )?;

    report::write_summary_yaml(&format!("{}/summary.yaml", output_dir), &results)?;
    report::write_phase_breakdown_csv(
        &format!("{}/phase_breakdown.csv", output_dir),
        &results,
    )?;

    if !cli.no_plots {
        plotting::generate_all_plots(&output_dir, &scenario_file.scenario, &results)?;
    }

    report::print_summary_report(&scenario_file.scenario, &results);

    println!("\nEstimation complete. Results are in '{}'", output_dir);
    Ok(())
}
