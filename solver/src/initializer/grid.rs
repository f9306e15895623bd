use std::f64::consts::PI;
use itertools::iproduct;
use serde::{Deserialize, Serialize};
use hamdyn_core::{SimulationError, SimulationResult, State};
use crate::solver::{GradientMode, Hamiltonian, Integrator, Solver};

/// Bounds and resolution of the starting-position grid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSpec {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
    /// number of intervals per axis, the grid has `resolution + 1` points per axis
    pub resolution: usize,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            x_min: -PI,
            x_max: PI,
            y_min: -PI,
            y_max: PI,
            resolution: 50,
        }
    }
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

impl GridSpec {
    pub fn validate(&self) -> SimulationResult<()> {
        if self.resolution == 0 {
            return Err(SimulationError::Configuration(
                String::from("grid resolution must be at least 1")));
        }
        let bounds = [self.x_min, self.x_max, self.y_min, self.y_max];
        if bounds.iter().any(|b| !b.is_finite()) {
            return Err(SimulationError::Configuration(
                String::from("grid bounds must be finite")));
        }
        if self.x_min > self.x_max || self.y_min > self.y_max {
            return Err(SimulationError::Configuration(format!(
                "grid bounds are inverted: x {}..{}, y {}..{}",
                self.x_min, self.x_max, self.y_min, self.y_max)));
        }
        Ok(())
    }

    /// Points per axis
    pub fn side(&self) -> usize {
        self.resolution + 1
    }

    /// Starting (q0, q1) of cell (i, j). Ends of each axis are hit exactly.
    pub fn point(&self, i: usize, j: usize) -> (f64, f64) {
        let n = self.resolution as f64;
        (lerp(self.x_min, self.x_max, i as f64 / n),
         lerp(self.y_min, self.y_max, j as f64 / n))
    }
}

/// Square grid of independently owned values stored row by row.
#[derive(Clone, Debug)]
pub struct Grid<T> {
    cells: Vec<T>,
    side: usize,
}

impl<T> Grid<T> {
    pub fn side(&self) -> usize {
        self.side
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, i: usize, j: usize) -> Option<&T> {
        if i >= self.side || j >= self.side {
            return None;
        }
        self.cells.get(i * self.side + j)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.cells.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.cells.iter_mut()
    }

    /// Apply `f` to every cell, one `Vec` per row
    pub fn map_rows<R>(&self, f: impl Fn(&T) -> R) -> Vec<Vec<R>> {
        self.cells.chunks(self.side)
            .map(|row| row.iter().map(&f).collect())
            .collect()
    }
}

/// Create a solver for every grid point: q = point, p = 0.
///
/// Cell (i, j) starts at `spec.point(i, j)`. Every solver gets its own copy
/// of `hamiltonian`.
pub fn initialize_grid<H: Hamiltonian + Clone>(spec: &GridSpec,
                                               hamiltonian: &H,
                                               integrator: Integrator,
                                               gradient_mode: GradientMode,
                                               delta_time: f64,
                                               perturbation: Option<f64>) -> SimulationResult<Grid<Solver<H>>> {
    spec.validate()?;
    let side = spec.side();
    let mut cells = Vec::with_capacity(side * side);
    for (i, j) in iproduct!(0..side, 0..side) {
        let (x, y) = spec.point(i, j);
        let state = State::new(vec![x, y], vec![0.0, 0.0])?;
        let mut solver = Solver::new(state, hamiltonian.clone(), integrator, delta_time)?
            .with_gradient_mode(gradient_mode)?;
        if let Some(perturbation) = perturbation {
            solver = solver.with_perturbation(perturbation)?;
        }
        cells.push(solver);
    }
    Ok(Grid { cells, side })
}
