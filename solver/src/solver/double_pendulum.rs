use na::DVector;
use hamdyn_core::Gradient;
use crate::solver::Hamiltonian;

/// Double pendulum made of two identical uniform rods.
///
/// `q` are the rod angles from the downward vertical, `p` the conjugate
/// momenta. With Δ = q0 - q1 and c = cos Δ:
///
/// ```text
/// H = 6/(m l²) * (p0² + 4 p1² - 3 c p0 p1) / (16 - 9 c²)
///     - m g l / 2 * (3 cos q0 + cos q1)
/// ```
#[derive(Clone, Debug)]
pub struct DoublePendulum {
    /// mass of one rod
    pub mass: f64,
    /// length of one rod
    pub length: f64,
    /// gravitational acceleration
    pub gravity: f64,
}

impl DoublePendulum {
    pub fn new(mass: f64, length: f64, gravity: f64) -> Self {
        Self {
            mass,
            length,
            gravity,
        }
    }

    fn inertia_factor(&self) -> f64 {
        6.0 / (self.mass * self.length * self.length)
    }

    fn weight_factor(&self) -> f64 {
        self.mass * self.gravity * self.length / 2.0
    }
}

impl Default for DoublePendulum {
    fn default() -> Self {
        Self::new(1.0, 1.0, 9.81)
    }
}

impl Hamiltonian for DoublePendulum {
    fn dimension(&self) -> usize {
        2
    }

    fn energy(&self, q: &DVector<f64>, p: &DVector<f64>) -> f64 {
        let c = (q[0] - q[1]).cos();
        let denominator = 16.0 - 9.0 * c * c;
        let kinetic = self.inertia_factor()
            * (p[0] * p[0] + 4.0 * p[1] * p[1] - 3.0 * c * p[0] * p[1]) / denominator;
        let potential = -self.weight_factor() * (3.0 * q[0].cos() + q[1].cos());
        kinetic + potential
    }

    fn analytic_gradient(&self, q: &DVector<f64>, p: &DVector<f64>) -> Option<Gradient> {
        let a = self.inertia_factor();
        let w = self.weight_factor();
        let (s, c) = (q[0] - q[1]).sin_cos();
        let denominator = 16.0 - 9.0 * c * c;
        let numerator = p[0] * p[0] + 4.0 * p[1] * p[1] - 3.0 * c * p[0] * p[1];
        // dT/dΔ, Δ = q0 - q1
        let dt_ddelta = 3.0 * a * s * (p[0] * p[1] * denominator - 6.0 * c * numerator)
            / (denominator * denominator);
        let mut gradient = Gradient::zeros(2);
        gradient.dh_dq[0] = dt_ddelta + 3.0 * w * q[0].sin();
        gradient.dh_dq[1] = -dt_ddelta + w * q[1].sin();
        gradient.dh_dp[0] = a * (2.0 * p[0] - 3.0 * c * p[1]) / denominator;
        gradient.dh_dp[1] = a * (8.0 * p[1] - 3.0 * c * p[0]) / denominator;
        Some(gradient)
    }

    fn name(&self) -> &'static str {
        "double_pendulum"
    }
}
