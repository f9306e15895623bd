use na::DVector;
use serde::{Deserialize, Serialize};
use hamdyn_core::{Gradient, State};

/// Physical model defined by its energy function H(q, p).
pub trait Hamiltonian {
    /// Number of generalized coordinates the model expects
    fn dimension(&self) -> usize;

    /// Total energy at (q, p)
    fn energy(&self, q: &DVector<f64>, p: &DVector<f64>) -> f64;

    /// Closed-form dH/dq and dH/dp. Models without one keep the default.
    fn analytic_gradient(&self, _q: &DVector<f64>, _p: &DVector<f64>) -> Option<Gradient> {
        None
    }

    fn name(&self) -> &'static str;
}

/// Forward-difference estimate of the gradient of `hamiltonian` at (q, p).
///
/// H(q, p) is evaluated once, then twice more for every coordinate:
/// once with `q_i + perturbation` and once with `p_i + perturbation`.
/// Perturbed coordinates are restored by copy.
pub fn finite_difference_gradient<H: Hamiltonian + ?Sized>(hamiltonian: &H,
                                                           q: &DVector<f64>,
                                                           p: &DVector<f64>,
                                                           perturbation: f64) -> Gradient {
    let n = q.len();
    let h = hamiltonian.energy(q, p);
    let mut gradient = Gradient::zeros(n);
    let mut qdq = q.clone();
    let mut pdp = p.clone();
    for i in 0..n {
        qdq[i] += perturbation;
        pdp[i] += perturbation;
        gradient.dh_dq[i] = (hamiltonian.energy(&qdq, p) - h) / perturbation;
        gradient.dh_dp[i] = (hamiltonian.energy(q, &pdp) - h) / perturbation;
        qdq[i] = q[i];
        pdp[i] = p[i];
    }
    gradient
}

/// Where gradients come from during integration
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradientMode {
    /// Forward differences of H
    #[default]
    FiniteDifference,
    /// [Hamiltonian::analytic_gradient] of the model
    Analytic,
}

/// Gradient source handed to integrators. Borrows the model for one step.
pub struct GradientProvider<'a, H: ?Sized> {
    hamiltonian: &'a H,
    mode: GradientMode,
    perturbation: f64,
}

impl<'a, H: Hamiltonian + ?Sized> GradientProvider<'a, H> {
    pub fn new(hamiltonian: &'a H, mode: GradientMode, perturbation: f64) -> Self {
        Self {
            hamiltonian,
            mode,
            perturbation,
        }
    }

    /// Gradient at `state` according to the configured mode
    pub fn gradient(&self, state: &State) -> Gradient {
        match self.mode {
            GradientMode::FiniteDifference => self.finite_difference(state),
            GradientMode::Analytic => {
                self.hamiltonian.analytic_gradient(state.q(), state.p())
                    .unwrap_or_else(|| self.finite_difference(state))
            }
        }
    }

    /// Finite-difference gradient at `state`, whatever the mode is
    pub fn finite_difference(&self, state: &State) -> Gradient {
        finite_difference_gradient(self.hamiltonian, state.q(), state.p(), self.perturbation)
    }
}
