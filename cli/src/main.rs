use clap::Parser;
use log::error;
use hamdyn_solver::config::{GridConfig, TrajectoryConfig};
use hamdyn_solver::initializer::GridSpec;
use crate::args::*;
use crate::commands::{generate_default_config, grid, run, trajectory};

mod args;
mod commands;


fn main() {
    env_logger::init();
    let args = Args::parse();
    let res = match &args.command {
        Commands::Trajectory {
            model,
            integrate_method,
            gradient,
            q,
            p,
            delta_time,
            perturbation,
            interval,
            snapshot_count,
        } => {
            let config = TrajectoryConfig {
                model: (*model).into(),
                integrator: (*integrate_method).into(),
                gradient_mode: (*gradient).into(),
                q: q.clone(),
                p: p.clone(),
                delta_time: *delta_time,
                perturbation: *perturbation,
                interval: *interval,
                snapshot_count: *snapshot_count,
            };
            trajectory(&args.out_dir, &config)
        }
        Commands::Grid {
            integrate_method,
            gradient,
            resolution,
            bounds,
            delta_time,
            perturbation,
            interval,
            snapshot_count,
        } => {
            let mut spec = GridSpec {
                resolution: *resolution,
                ..GridSpec::default()
            };
            if let Some(bounds) = bounds {
                spec.x_min = bounds[0];
                spec.x_max = bounds[1];
                spec.y_min = bounds[2];
                spec.y_max = bounds[3];
            }
            let config = GridConfig {
                integrator: (*integrate_method).into(),
                gradient_mode: (*gradient).into(),
                delta_time: *delta_time,
                perturbation: *perturbation,
                grid: spec,
                interval: *interval,
                snapshot_count: *snapshot_count,
            };
            grid(&args.out_dir, &config)
        }
        Commands::Run { config } => {
            run(&args.out_dir, config)
        }
        Commands::GenerateDefaultConfig { file } => {
            generate_default_config(file)
        }
    };
    if let Err(err) = res {
        error!("{}", err);
        std::process::exit(1);
    }
}
