mod double_pendulum;
mod hamiltonian;
mod harmonic;
mod integrator;
mod solver;

pub use double_pendulum::*;
pub use hamiltonian::*;
pub use harmonic::*;
pub use integrator::*;
pub use solver::*;
