use std::path::{Path, PathBuf};
use log::{debug, info, warn};
use hamdyn_core::{GridWriter, SimulationError, SimulationResult, TrajectoryWriter};
use crate::initializer::Grid;
use crate::macro_parameters::grid_observable;
use crate::solver::{Hamiltonian, Solver};

fn check_interval(interval: f64, delta_time: f64) -> SimulationResult<()> {
    if !interval.is_finite() || interval < 0.0 {
        return Err(SimulationError::Configuration(format!(
            "snapshot interval must be non-negative and finite, got {}", interval)));
    }
    if interval < delta_time {
        warn!("Snapshot interval {} is shorter than time step {}, snapshots will not advance",
              interval, delta_time);
    }
    Ok(())
}

/// Integrates one solver and saves `q[0],p[0]` after every interval.
pub struct TrajectoryDriver<H> {
    pub solver: Solver<H>,
    writer: TrajectoryWriter,
    interval: f64,
}

impl<H: Hamiltonian> TrajectoryDriver<H> {
    pub fn new(solver: Solver<H>, directory: &Path, interval: f64) -> SimulationResult<Self> {
        check_interval(interval, solver.delta_time())?;
        Ok(Self {
            solver,
            writer: TrajectoryWriter::new(directory),
            interval,
        })
    }

    /// Save current state without integrating
    pub fn snapshot(&mut self) -> SimulationResult<PathBuf> {
        self.writer.write(self.solver.state())
    }

    /// Integrate one interval, then save
    pub fn advance(&mut self) -> SimulationResult<PathBuf> {
        let steps = self.solver.update(self.interval)?;
        debug!("Trajectory advanced by {} steps, H = {}", steps, self.solver.energy());
        self.snapshot()
    }

    /// Initial snapshot followed by `snapshot_count` intervals
    pub fn run(&mut self, snapshot_count: usize) -> SimulationResult<()> {
        self.run_with_progress(snapshot_count, |_| {})
    }

    /// Same as [TrajectoryDriver::run], `progress` gets the number of
    /// intervals done after each one.
    pub fn run_with_progress(&mut self, snapshot_count: usize,
                             mut progress: impl FnMut(usize)) -> SimulationResult<()> {
        info!("Running {} trajectory with {} for {} intervals",
              self.solver.hamiltonian().name(), self.solver.integrator().name(), snapshot_count);
        self.snapshot()?;
        for done in 1..=snapshot_count {
            self.advance()?;
            progress(done);
        }
        info!("Trajectory finished after {} steps, H = {}",
              self.solver.steps_taken(), self.solver.energy());
        Ok(())
    }
}

/// Integrates every solver of a grid and saves sin(q0)cos(q1) of every cell
/// after each interval.
pub struct GridDriver<H> {
    pub grid: Grid<Solver<H>>,
    writer: GridWriter,
    interval: f64,
    next_index: usize,
}

impl<H: Hamiltonian> GridDriver<H> {
    pub fn new(grid: Grid<Solver<H>>, directory: &Path, interval: f64) -> SimulationResult<Self> {
        let delta_time = grid.iter().map(|solver| solver.delta_time()).fold(0.0, f64::max);
        check_interval(interval, delta_time)?;
        Ok(Self {
            grid,
            writer: GridWriter::new(directory),
            interval,
            next_index: 0,
        })
    }

    /// Observable of every cell, row `i` holds cells with the i-th q0
    pub fn observables(&self) -> SimulationResult<Vec<Vec<f64>>> {
        self.grid.map_rows(|solver| grid_observable(solver.state()))
            .into_iter()
            .map(|row| row.into_iter().collect::<SimulationResult<Vec<f64>>>())
            .collect()
    }

    /// Save current observables as the next snapshot
    pub fn snapshot(&mut self) -> SimulationResult<PathBuf> {
        let path = self.writer.write(self.next_index, &self.observables()?)?;
        self.next_index += 1;
        Ok(path)
    }

    /// Integrate every cell for one interval, then save
    pub fn advance(&mut self) -> SimulationResult<PathBuf> {
        for solver in self.grid.iter_mut() {
            solver.update(self.interval)?;
        }
        self.snapshot()
    }

    /// Initial snapshot followed by `snapshot_count` intervals
    pub fn run(&mut self, snapshot_count: usize) -> SimulationResult<()> {
        self.run_with_progress(snapshot_count, |_| {})
    }

    /// Same as [GridDriver::run], `progress` gets the number of intervals
    /// done after each one.
    pub fn run_with_progress(&mut self, snapshot_count: usize,
                             mut progress: impl FnMut(usize)) -> SimulationResult<()> {
        info!("Running {}x{} grid for {} intervals", self.grid.side(), self.grid.side(), snapshot_count);
        self.snapshot()?;
        for done in 1..=snapshot_count {
            self.advance()?;
            progress(done);
        }
        info!("Grid finished, {} snapshots written", self.next_index);
        Ok(())
    }

    /// Index that the next snapshot will get
    pub fn next_index(&self) -> usize {
        self.next_index
    }
}
