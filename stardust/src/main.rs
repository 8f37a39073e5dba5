use stardust::benchmark::benchmark::BENCH_SIZES;
use stardust::{bench_step, Scenario, ScenarioConfig};

use anyhow::{Context, Result};
use clap::Parser;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Headless runner for the stardust particle sandbox")]
struct Args {
    /// Scenario file, relative to the crate's scenarios/ directory
    #[arg(short, default_value = "binary_merge.yaml")]
    file_name: String,

    /// Time the step loop for growing populations instead of running a scenario
    #[arg(long)]
    bench: bool,

    /// Steps averaged per population size in --bench mode
    #[arg(long, default_value_t = 5)]
    bench_steps: usize,
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("opening scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("parsing scenario {}", config_path.display()))?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    if args.bench {
        bench_step(&BENCH_SIZES, args.bench_steps);
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    tracing::info!(
        file = %args.file_name,
        particles = scenario_cfg.particles.len(),
        spawns = scenario_cfg.spawns.len(),
        "scenario loaded"
    );

    let mut scenario = Scenario::build(scenario_cfg)?;
    scenario.run()?;

    Ok(())
}
