use bvsim::{FlowConfig, RunConfig, RunOptions, Scenario, ScenarioConfig};
use bvsim::{generate_video, mixing_series, plot_mixing, run_simulation};
use bvsim::{bench_rotation, bench_rotation_curve};

use clap::Parser;
use anyhow::Result;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Simulation of the Aref blinking vortex flow")]
struct Args {
    /// Number of tracer particles; odd counts round down to even
    #[arg(short = 'n', long = "particles", default_value_t = 100_000)]
    num_particles: usize,

    /// Flow strength parameter
    #[arg(long, default_value_t = 1.0)]
    mu: f64,

    /// Number of blinking cycles to run
    #[arg(short, long, default_value_t = 5)]
    duration: usize,

    /// Substeps per half-cycle; doubles as the video frame rate
    #[arg(long, default_value_t = 10)]
    fps: usize,

    /// Write the density-evolution video to this path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write the mixing-quantifier chart PNG to this path
    #[arg(long)]
    plot: Option<PathBuf>,

    /// Double the domain half-extents
    #[arg(long)]
    expand_boundaries: bool,

    /// Seed for particle placement; entropy when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Load flow/run settings from scenarios/<FILE> instead of flags
    #[arg(short, long)]
    scenario: Option<String>,

    /// Run the rotation micro-benchmarks and exit
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn config_from_args(args: &Args) -> ScenarioConfig {
    ScenarioConfig {
        flow: FlowConfig {
            mu: args.mu,
            num_particles: args.num_particles,
            expand_boundaries: args.expand_boundaries,
            seed: args.seed,
        },
        run: RunConfig {
            cycles: args.duration,
            fps: args.fps,
        },
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.bench {
        bench_rotation();
        bench_rotation_curve();
        return Ok(());
    }

    let scenario_cfg = match &args.scenario {
        Some(file_name) => load_scenario_from_yaml(file_name)?,
        None => config_from_args(&args),
    };

    let mut scenario = Scenario::build_scenario(scenario_cfg)?;

    let opts = RunOptions {
        record: true,
        progress: true,
    };
    run_simulation(&mut scenario.sim, scenario.cycles, scenario.substeps, &opts)?;

    if let Some(path) = &args.output {
        generate_video(&scenario.sim, path, scenario.substeps)?;
        println!("video written to {}", path.display());
    }

    if let Some(path) = &args.plot {
        let series: Vec<(f64, f64)> = mixing_series(&scenario.sim).collect();
        plot_mixing(&series, path)?;
        println!("mixing plot written to {}", path.display());
    }

    Ok(())
}
