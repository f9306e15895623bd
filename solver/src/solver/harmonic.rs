use na::DVector;
use crate::solver::Hamiltonian;

/// Default stiffness, ≈ 4π²
pub const K1: f64 = 39.4784176;

/// Two decoupled oscillators sharing one state vector:
/// H = k q0²/2 + p0²/2 + 2k q1² + p1²/2.
///
/// With the default stiffness the first oscillator has period 1 and the
/// second period 1/2. Only finite-difference gradients are available.
#[derive(Clone, Debug)]
pub struct HarmonicOscillator {
    stiffness: f64,
}

impl HarmonicOscillator {
    pub fn new() -> Self {
        Self { stiffness: K1 }
    }

    pub fn with_stiffness(stiffness: f64) -> Self {
        Self { stiffness }
    }

    pub fn stiffness(&self) -> f64 {
        self.stiffness
    }
}

impl Default for HarmonicOscillator {
    fn default() -> Self {
        Self::new()
    }
}

impl Hamiltonian for HarmonicOscillator {
    fn dimension(&self) -> usize {
        2
    }

    fn energy(&self, q: &DVector<f64>, p: &DVector<f64>) -> f64 {
        self.stiffness * q[0] * q[0] / 2.0 + p[0] * p[0] / 2.0
            + self.stiffness * q[1] * q[1] * 2.0 + p[1] * p[1] / 2.0
    }

    fn name(&self) -> &'static str {
        "harmonic"
    }
}
