use trinkets::{ScenarioConfig, Scenario};
use trinkets::{run_2d, run_headless};
use trinkets::bench_tick;

use anyhow::{Context, Result};
use clap::Parser;

use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file under `scenarios/`
    #[arg(short, default_value = "default.yaml")]
    file_name: String,

    /// Step the simulation for this many frames without a window
    #[arg(long)]
    headless: Option<u64>,

    /// Time `tick` for several population sizes and exit
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let text = fs::read_to_string(&config_path)
        .with_context(|| format!("reading scenario {}", config_path.display()))?;
    ScenarioConfig::from_yaml_str(&text)
        .with_context(|| format!("parsing scenario {}", config_path.display()))
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.bench {
        bench_tick();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let scenario = Scenario::build_scenario(scenario_cfg);

    match args.headless {
        Some(frames) => run_headless(scenario, frames),
        None => run_2d(scenario),
    }

    Ok(())
}
