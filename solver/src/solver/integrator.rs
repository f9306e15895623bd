use serde::{Deserialize, Serialize};
use hamdyn_core::State;
use crate::solver::{GradientProvider, Hamiltonian};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Integrator {
    /// First order step, both q and p updated from one gradient snapshot
    #[default]
    SymplecticEuler,
    /// Explicit midpoint (EK2): Euler predictor, averaged-gradient corrector
    ExplicitMidpoint,
    /// Two half-weighted finite-difference phases, the second one taken
    /// from the midpoint reached by the first
    FiniteDifferenceRk4,
}

impl Integrator {
    /// Just integrator iteration
    pub fn calculate<H: Hamiltonian + ?Sized>(&self, state: &mut State,
                                              provider: &GradientProvider<H>, delta_time: f64) {
        match self {
            Integrator::SymplecticEuler => {
                let gradient = provider.gradient(state);
                state.advance(delta_time, &gradient);
            }
            Integrator::ExplicitMidpoint => {
                let gradient = provider.gradient(state);
                let mut midpoint = state.clone();
                midpoint.advance(delta_time, &gradient);
                let midpoint_gradient = provider.gradient(&midpoint);
                state.advance(delta_time, &gradient.average(&midpoint_gradient));
            }
            Integrator::FiniteDifferenceRk4 => {
                let gradient = provider.finite_difference(state);
                state.advance(delta_time / 2.0, &gradient);
                let midpoint_gradient = provider.finite_difference(state);
                state.advance(delta_time / 2.0, &midpoint_gradient);
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Integrator::SymplecticEuler => "symplectic_euler",
            Integrator::ExplicitMidpoint => "explicit_midpoint",
            Integrator::FiniteDifferenceRk4 => "finite_difference_rk4",
        }
    }
}
