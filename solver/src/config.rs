use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use serde::{Deserialize, Serialize};
use hamdyn_core::{SimulationResult, State};
use crate::initializer::GridSpec;
use crate::solver::{GradientMode, Hamiltonian, Integrator, Solver, DEFAULT_DELTA_TIME};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Model {
    #[default]
    Harmonic,
    DoublePendulum,
}

/// Single trajectory run
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrajectoryConfig {
    pub model: Model,
    pub integrator: Integrator,
    pub gradient_mode: GradientMode,
    pub q: Vec<f64>,
    pub p: Vec<f64>,
    pub delta_time: f64,
    /// finite-difference perturbation, `delta_time` when absent
    pub perturbation: Option<f64>,
    /// simulated time between snapshots
    pub interval: f64,
    pub snapshot_count: usize,
}

impl Default for TrajectoryConfig {
    fn default() -> Self {
        Self {
            model: Model::Harmonic,
            integrator: Integrator::SymplecticEuler,
            gradient_mode: GradientMode::FiniteDifference,
            q: vec![1.0, 1.0],
            p: vec![0.0, 0.0],
            delta_time: DEFAULT_DELTA_TIME,
            perturbation: None,
            interval: 0.01,
            snapshot_count: 10,
        }
    }
}

impl TrajectoryConfig {
    pub fn build_solver<H: Hamiltonian>(&self, hamiltonian: H) -> SimulationResult<Solver<H>> {
        let state = State::new(self.q.clone(), self.p.clone())?;
        let mut solver = Solver::new(state, hamiltonian, self.integrator, self.delta_time)?
            .with_gradient_mode(self.gradient_mode)?;
        if let Some(perturbation) = self.perturbation {
            solver = solver.with_perturbation(perturbation)?;
        }
        Ok(solver)
    }
}

/// Grid of double pendulums started from rest
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub integrator: Integrator,
    pub gradient_mode: GradientMode,
    pub delta_time: f64,
    pub perturbation: Option<f64>,
    pub grid: GridSpec,
    pub interval: f64,
    pub snapshot_count: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            integrator: Integrator::ExplicitMidpoint,
            gradient_mode: GradientMode::Analytic,
            delta_time: DEFAULT_DELTA_TIME,
            perturbation: None,
            grid: GridSpec::default(),
            interval: 0.01,
            snapshot_count: 10,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RunConfig {
    Trajectory(TrajectoryConfig),
    Grid(GridConfig),
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig::Grid(GridConfig::default())
    }
}

impl RunConfig {
    pub fn load(path: &Path) -> SimulationResult<Self> {
        let file = File::open(path)?;
        let config = serde_json::de::from_reader(BufReader::new(file))?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> SimulationResult<()> {
        let file = OpenOptions::new().create(true).truncate(true).write(true).open(path)?;
        let mut writer = BufWriter::new(file);
        serde_json::ser::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }
}
