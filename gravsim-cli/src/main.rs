mod viewer;
mod watch;

use clap::{Parser, Subcommand};
use gravsim_core::units::{readable_elapsed_years, readable_scale, readable_timestep};
use gravsim_core::{load_simulation, Command};
use log::{debug, info};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "gravsim")]
#[command(about = "gravsim - 2D n-body gravity simulator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a scenario without a window and print the final state
    Run {
        /// Path to the scenario JSON file
        file: PathBuf,
        /// Number of frames to simulate
        #[arg(long, default_value_t = 1000)]
        ticks: usize,
        /// Wall-clock seconds per frame
        #[arg(long, default_value_t = 1.0 / 60.0)]
        frame_delta: f64,
        /// Print a state report every N frames (0 disables)
        #[arg(long, default_value_t = 0)]
        report_every: usize,
    },
    /// Open an interactive window showing the scenario
    View {
        /// Path to the scenario JSON file
        file: PathBuf,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            file,
            ticks,
            frame_delta,
            report_every,
        } => run_file(&file, ticks, frame_delta, report_every),
        Commands::View { file } => viewer::run(file),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_file(
    file: &Path,
    ticks: usize,
    frame_delta: f64,
    report_every: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut sim = load_simulation(file)?;
    info!("running '{}' for {} frames of {}s", sim.name, ticks, frame_delta);

    for i in 1..=ticks {
        let commands: &[Command] = if report_every > 0 && i % report_every == 0 {
            &[Command::Report]
        } else {
            &[]
        };
        let summary = sim.tick(frame_delta, commands);
        if let Some(report) = summary.report {
            println!("frame {} ({}):\n{}", i, readable_elapsed_years(summary.elapsed), report);
        }
        debug!("frame {}: dt = {}", i, summary.dt);
    }

    println!("{}", sim.name);
    println!("Timescale: {}", readable_timestep(sim.timestep_scale()));
    println!("Scale: {}", readable_scale(sim.distance_scale));
    println!("Time Elapsed: {}", readable_elapsed_years(sim.elapsed()));
    print!("{}", sim.report());

    Ok(())
}
