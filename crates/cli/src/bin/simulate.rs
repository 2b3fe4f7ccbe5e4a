use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use lunar_transit_calculator::config::load_scenario;
use lunar_transit_calculator::export::{sidecar, trajectory};
use lunar_transit_calculator::run_scenario;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Integrate an Earth-Moon restricted three-body scenario to CSV"
)]
struct Cli {
    /// Scenario manifest (YAML or TOML)
    #[arg(long, default_value = "configs/scenarios/cislunar.yaml")]
    scenario: PathBuf,

    /// Trajectory CSV destination (`-` for stdout)
    #[arg(long, default_value = "-")]
    output: PathBuf,

    /// Optional JSON run-summary sidecar
    #[arg(long)]
    sidecar: Option<PathBuf>,

    /// Override the manifest's step size
    #[arg(long)]
    step_size: Option<f64>,

    /// Override the manifest's sample count
    #[arg(long)]
    samples: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut scenario = load_scenario(&cli.scenario)?;
    if let Some(step_size) = cli.step_size {
        scenario.step_size = step_size;
    }
    if let Some(samples) = cli.samples {
        scenario.samples = samples;
    }
    scenario.validate()?;

    let run = run_scenario(&scenario)?;

    let mut writer = trajectory::writer_for_path(&cli.output)?;
    trajectory::write_header(writer.as_mut())?;
    for (t, state) in run.times.iter().zip(&run.states) {
        let state: [f64; 6] = state
            .as_slice()
            .try_into()
            .map_err(|_| anyhow::anyhow!("trajectory row is not six components"))?;
        let [x, _, y, _, z, _] = state;
        trajectory::Record {
            t: *t,
            state,
            earth_distance: run.system.earth_distance(x, y, z),
            moon_distance: run.system.moon_distance(x, y, z),
        }
        .write_to(writer.as_mut())?;
    }
    writer.flush()?;

    if let Some(sidecar_path) = &cli.sidecar {
        let last = run
            .states
            .last()
            .ok_or_else(|| anyhow::anyhow!("trajectory is empty"))?;
        let final_state: [f64; 6] = last
            .as_slice()
            .try_into()
            .map_err(|_| anyhow::anyhow!("trajectory row is not six components"))?;
        let fractions = run.system.fractions();
        sidecar::write_sidecar(
            sidecar_path,
            &mut sidecar::RunSummary {
                scenario: scenario.name.clone(),
                earth_fraction: fractions.earth,
                moon_fraction: fractions.moon,
                step_size: scenario.step_size,
                t_start: scenario.t_start,
                t_end: scenario.t_end,
                rows: run.states.len(),
                final_state,
                generated_at: String::new(),
            },
        )?;
    }

    eprintln!(
        "{}: {} rows, h = {}, t in [{}, {}]",
        scenario.name,
        run.states.len(),
        scenario.step_size,
        scenario.t_start,
        scenario.t_end
    );
    Ok(())
}
