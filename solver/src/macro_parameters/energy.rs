use crate::solver::{Hamiltonian, Solver};

pub fn get_energy<H: Hamiltonian>(solver: &Solver<H>) -> f64 {
    solver.energy()
}

/// Relative deviation |H - H0| / |H0|. Absolute deviation when H0 is near zero.
pub fn energy_drift(baseline: f64, energy: f64) -> f64 {
    if baseline.abs() > 1e-12 {
        (energy - baseline).abs() / baseline.abs()
    } else {
        (energy - baseline).abs()
    }
}

/// Tracks energy drift of one solver against its energy at creation.
#[derive(Clone, Debug)]
pub struct EnergyMonitor {
    /// Energy when monitoring started
    pub baseline: f64,
    /// Latest measured drift
    pub drift: f64,
    /// Largest drift seen so far
    pub max_drift: f64,
}

impl EnergyMonitor {
    pub fn new<H: Hamiltonian>(solver: &Solver<H>) -> Self {
        Self {
            baseline: solver.energy(),
            drift: 0.0,
            max_drift: 0.0,
        }
    }

    pub fn check<H: Hamiltonian>(&mut self, solver: &Solver<H>) -> f64 {
        self.drift = energy_drift(self.baseline, solver.energy());
        self.max_drift = self.max_drift.max(self.drift);
        self.drift
    }
}
