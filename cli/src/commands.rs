use std::fs;
use std::path::Path;
use indicatif::ProgressBar;
use hamdyn_core::SimulationResult;
use hamdyn_solver::config::{GridConfig, Model, RunConfig, TrajectoryConfig};
use hamdyn_solver::driver::{GridDriver, TrajectoryDriver};
use hamdyn_solver::initializer::initialize_grid;
use hamdyn_solver::solver::{DoublePendulum, Hamiltonian, HarmonicOscillator};

fn run_trajectory<H: Hamiltonian>(out_dir: &Path, config: &TrajectoryConfig,
                                  hamiltonian: H) -> SimulationResult<()> {
    let solver = config.build_solver(hamiltonian)?;
    let mut driver = TrajectoryDriver::new(solver, out_dir, config.interval)?;
    let pb = ProgressBar::new(config.snapshot_count as u64);
    driver.run_with_progress(config.snapshot_count, |done| pb.set_position(done as u64))?;
    pb.finish_with_message(format!("Calculated. Snapshots saved to {}", out_dir.to_string_lossy()));
    Ok(())
}

pub fn trajectory(out_dir: &Path, config: &TrajectoryConfig) -> SimulationResult<()> {
    fs::create_dir_all(out_dir)?;
    match config.model {
        Model::Harmonic => run_trajectory(out_dir, config, HarmonicOscillator::new()),
        Model::DoublePendulum => run_trajectory(out_dir, config, DoublePendulum::default()),
    }
}

pub fn grid(out_dir: &Path, config: &GridConfig) -> SimulationResult<()> {
    fs::create_dir_all(out_dir)?;
    let grid = initialize_grid(&config.grid, &DoublePendulum::default(), config.integrator,
                               config.gradient_mode, config.delta_time, config.perturbation)?;
    let mut driver = GridDriver::new(grid, out_dir, config.interval)?;
    let pb = ProgressBar::new(config.snapshot_count as u64);
    driver.run_with_progress(config.snapshot_count, |done| pb.set_position(done as u64))?;
    pb.finish_with_message(format!("Calculated. Snapshots saved to {}", out_dir.to_string_lossy()));
    Ok(())
}

pub fn run(out_dir: &Path, config_file: &Path) -> SimulationResult<()> {
    match RunConfig::load(config_file)? {
        RunConfig::Trajectory(config) => trajectory(out_dir, &config),
        RunConfig::Grid(config) => grid(out_dir, &config),
    }
}

pub fn generate_default_config(file: &Path) -> SimulationResult<()> {
    RunConfig::default().save(file)
}
