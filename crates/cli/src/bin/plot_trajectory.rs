use std::fs;
use std::path::PathBuf;

use clap::Parser;
use lunar_transit_calculator::config::load_scenario;
use lunar_transit_calculator::run_scenario;
use plotters::prelude::*;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Render the rotating-frame x/y track of a scenario to PNG"
)]
struct Cli {
    /// Scenario manifest (YAML or TOML)
    #[arg(long, default_value = "configs/scenarios/cislunar.yaml")]
    scenario: PathBuf,

    #[arg(long, default_value = "artifacts/trajectory.png")]
    output: PathBuf,

    #[arg(long, default_value_t = 1000)]
    width: u32,

    #[arg(long, default_value_t = 1000)]
    height: u32,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let scenario = load_scenario(&cli.scenario)?;
    let run = run_scenario(&scenario)?;

    let track: Vec<(f64, f64)> = run.states.iter().map(|s| (s[0], s[2])).collect();
    let fractions = run.system.fractions();
    let earth = (-fractions.moon, 0.0);
    let moon = (fractions.earth, 0.0);

    let (mut x_min, mut x_max) = (earth.0.min(moon.0), earth.0.max(moon.0));
    let (mut y_min, mut y_max) = (0.0f64, 0.0f64);
    for &(x, y) in &track {
        x_min = x_min.min(x);
        x_max = x_max.max(x);
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }
    let pad_x = 0.1 * (x_max - x_min).max(0.1);
    let pad_y = 0.1 * (y_max - y_min).max(0.1);

    if let Some(parent) = cli.output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let output_str = cli
        .output
        .to_str()
        .ok_or_else(|| anyhow::anyhow!("Output path contains invalid UTF-8"))?;
    let root = BitMapBackend::new(output_str, (cli.width, cli.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&scenario.name, ("sans-serif", 24))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(
            (x_min - pad_x)..(x_max + pad_x),
            (y_min - pad_y)..(y_max + pad_y),
        )?;

    chart
        .configure_mesh()
        .x_desc("x (Earth-Moon distances)")
        .y_desc("y (Earth-Moon distances)")
        .draw()?;

    chart.draw_series(LineSeries::new(track, &BLUE))?;
    chart.draw_series([
        Circle::new(earth, 6, BLACK.filled()),
        Circle::new(moon, 3, RED.filled()),
    ])?;

    root.present()?;
    eprintln!("wrote {}", cli.output.display());
    Ok(())
}
