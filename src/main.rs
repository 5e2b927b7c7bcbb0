use bhsling::{Scenario, ScenarioConfig};
use bhsling::run_2d;
use bhsling::{bench_energy_drift, bench_tick};

use anyhow::Result;
use clap::Parser;
use log::info;

use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file, looked up under `scenarios/` unless it is an existing path
    #[arg(short, default_value = "default.yaml")]
    file_name: String,

    /// Run this many ticks without a window and print a summary
    #[arg(long)]
    headless: Option<u64>,

    /// Run the tick and energy-drift benchmarks instead of the viewer
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let direct = PathBuf::from(file_name);
    let config_path = if direct.is_file() {
        direct
    } else {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
    };
    ScenarioConfig::from_yaml_file(&config_path)
}

fn run_headless(mut scenario: Scenario, ticks: u64) {
    let e0 = scenario.total_specific_energy();
    let (mut swallowed, mut escaped) = (0, 0);

    for _ in 0..ticks {
        let report = scenario.tick();
        swallowed += report.swallowed;
        escaped += report.escaped;
    }

    println!(
        "ticks = {}, live = {}, swallowed = {}, escaped = {}",
        scenario.ticks,
        scenario.particles().len(),
        swallowed,
        escaped
    );
    for (particle, readout) in scenario.particles().iter().zip(scenario.readouts()) {
        println!(
            "#{:<4} x = ({:9.2}, {:9.2})  r = {:9.2}  {}",
            particle.id, particle.x.x, particle.x.y, readout.r, readout.label()
        );
    }
    info!("total specific energy {:.6e} -> {:.6e}", e0, scenario.total_specific_energy());
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.bench {
        env_logger::init();
        bench_tick();
        bench_energy_drift();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let scenario = Scenario::build_scenario(scenario_cfg)?;

    match args.headless {
        Some(ticks) => {
            env_logger::init();
            run_headless(scenario, ticks);
        }
        None => run_2d(scenario),
    }

    Ok(())
}
