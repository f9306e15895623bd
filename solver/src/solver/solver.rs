use log::warn;
use hamdyn_core::{Gradient, SimulationError, SimulationResult, State};
use crate::solver::{GradientMode, GradientProvider, Hamiltonian, Integrator};

/// Default integration step
pub const DEFAULT_DELTA_TIME: f64 = 1e-4;

/// One Hamiltonian system: its state, its model and how it is integrated.
///
/// The finite-difference perturbation equals `delta_time` unless changed
/// with [Solver::with_perturbation].
#[derive(Clone, Debug)]
pub struct Solver<H> {
    state: State,
    hamiltonian: H,
    integrator: Integrator,
    gradient_mode: GradientMode,
    delta_time: f64,
    perturbation: f64,
    steps: u64,
}

fn check_step(name: &str, value: f64) -> SimulationResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(SimulationError::Configuration(format!(
            "{} must be positive and finite, got {}", name, value)));
    }
    Ok(())
}

impl<H: Hamiltonian> Solver<H> {
    /// Create new solver.
    ///
    /// # Arguments
    ///
    /// * `state` - initial state, its dimension must match the model
    /// * `hamiltonian` - physical model
    /// * `integrator` - integration scheme
    /// * `delta_time` - integration step, also used as finite-difference perturbation
    pub fn new(state: State, hamiltonian: H, integrator: Integrator,
               delta_time: f64) -> SimulationResult<Self> {
        check_step("time step", delta_time)?;
        if state.dim() != hamiltonian.dimension() {
            return Err(SimulationError::InvalidState(format!(
                "{} model needs {} coordinates, state has {}",
                hamiltonian.name(), hamiltonian.dimension(), state.dim())));
        }
        Ok(Self {
            state,
            hamiltonian,
            integrator,
            gradient_mode: GradientMode::FiniteDifference,
            delta_time,
            perturbation: delta_time,
            steps: 0,
        })
    }

    /// Decouple the finite-difference perturbation from the time step
    pub fn with_perturbation(mut self, perturbation: f64) -> SimulationResult<Self> {
        check_step("perturbation", perturbation)?;
        if perturbation > self.delta_time {
            warn!("Perturbation {} is larger than time step {}", perturbation, self.delta_time);
        }
        self.perturbation = perturbation;
        Ok(self)
    }

    pub fn with_gradient_mode(mut self, gradient_mode: GradientMode) -> SimulationResult<Self> {
        if gradient_mode == GradientMode::Analytic
            && self.hamiltonian.analytic_gradient(self.state.q(), self.state.p()).is_none() {
            return Err(SimulationError::Configuration(format!(
                "{} model has no analytic gradient", self.hamiltonian.name())));
        }
        self.gradient_mode = gradient_mode;
        Ok(self)
    }

    pub fn provider(&self) -> GradientProvider<H> {
        GradientProvider::new(&self.hamiltonian, self.gradient_mode, self.perturbation)
    }

    /// Make one step of the configured scheme
    pub fn step(&mut self) {
        let provider = GradientProvider::new(&self.hamiltonian, self.gradient_mode, self.perturbation);
        self.integrator.calculate(&mut self.state, &provider, self.delta_time);
        self.steps += 1;
    }

    /// Integrate for `duration`: exactly `floor(duration / delta_time)` steps.
    ///
    /// Returns number of steps made.
    pub fn update(&mut self, duration: f64) -> SimulationResult<u64> {
        if !duration.is_finite() || duration < 0.0 {
            return Err(SimulationError::Configuration(format!(
                "duration must be non-negative and finite, got {}", duration)));
        }
        let count = (duration / self.delta_time).floor() as u64;
        for _ in 0..count {
            self.step();
        }
        Ok(count)
    }

    pub fn energy(&self) -> f64 {
        self.hamiltonian.energy(self.state.q(), self.state.p())
    }

    /// Gradient at current state, from the configured source
    pub fn gradient(&self) -> Gradient {
        self.provider().gradient(&self.state)
    }

    pub fn steps_taken(&self) -> u64 {
        self.steps
    }

    pub fn delta_time(&self) -> f64 {
        self.delta_time
    }

    pub fn perturbation(&self) -> f64 {
        self.perturbation
    }

    pub fn integrator(&self) -> Integrator {
        self.integrator
    }

    pub fn gradient_mode(&self) -> GradientMode {
        self.gradient_mode
    }

    pub fn hamiltonian(&self) -> &H {
        &self.hamiltonian
    }

    /// Current phase-space point. Its dimension is fixed at construction.
    pub fn state(&self) -> &State {
        &self.state
    }
}
