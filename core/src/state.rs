use na::DVector;
use crate::{SimulationError, SimulationResult};

/// Point in phase space: generalized positions `q` and momenta `p`.
///
/// The dimension is fixed when the state is created. Nothing outside this
/// module can replace the vectors, so `q.len() == p.len()` holds for the
/// whole lifetime of the state.
#[derive(Clone, Debug, PartialEq)]
pub struct State {
    q: DVector<f64>,
    p: DVector<f64>,
}

/// Partial derivatives of a Hamiltonian at some state.
#[derive(Clone, Debug, PartialEq)]
pub struct Gradient {
    /// dH/dq for every coordinate
    pub dh_dq: DVector<f64>,
    /// dH/dp for every coordinate
    pub dh_dp: DVector<f64>,
}

impl State {
    /// Create new state from positions and momenta.
    ///
    /// # Arguments
    ///
    /// * `q` - generalized positions
    /// * `p` - generalized momenta, must have the same length as `q`
    ///
    /// # Returns
    ///
    /// [SimulationError::InvalidState] if lengths differ or the state is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use hamdyn_core::State;
    /// let state = State::new(vec![1.0, 1.0], vec![0.0, 0.0]).unwrap();
    /// assert_eq!(state.dim(), 2);
    /// assert!(State::new(vec![1.0, 1.0], vec![0.0]).is_err());
    /// ```
    pub fn new(q: Vec<f64>, p: Vec<f64>) -> SimulationResult<Self> {
        if q.len() != p.len() {
            return Err(SimulationError::InvalidState(format!(
                "q has {} coordinates but p has {}", q.len(), p.len())));
        }
        if q.is_empty() {
            return Err(SimulationError::InvalidState(
                String::from("state must have at least one coordinate")));
        }
        Ok(State {
            q: DVector::from_vec(q),
            p: DVector::from_vec(p),
        })
    }

    pub fn dim(&self) -> usize {
        self.q.len()
    }

    pub fn q(&self) -> &DVector<f64> {
        &self.q
    }

    pub fn p(&self) -> &DVector<f64> {
        &self.p
    }

    /// Move along Hamilton's equations with fixed gradient:
    /// `q += h * dH/dp`, `p -= h * dH/dq`.
    ///
    /// Every component uses the same gradient snapshot.
    pub fn advance(&mut self, h: f64, gradient: &Gradient) {
        debug_assert_eq!(gradient.dim(), self.dim());
        self.q.axpy(h, &gradient.dh_dp, 1.0);
        self.p.axpy(-h, &gradient.dh_dq, 1.0);
    }
}

impl Gradient {
    pub fn zeros(n: usize) -> Self {
        Gradient {
            dh_dq: DVector::zeros(n),
            dh_dp: DVector::zeros(n),
        }
    }

    pub fn dim(&self) -> usize {
        self.dh_dq.len()
    }

    /// Component-wise mean of two gradients.
    pub fn average(&self, other: &Gradient) -> Gradient {
        Gradient {
            dh_dq: (&self.dh_dq + &other.dh_dq) * 0.5,
            dh_dp: (&self.dh_dp + &other.dh_dp) * 0.5,
        }
    }

    /// Largest absolute difference over all components of both halves.
    pub fn max_difference(&self, other: &Gradient) -> f64 {
        let dq = (&self.dh_dq - &other.dh_dq).amax();
        let dp = (&self.dh_dp - &other.dh_dp).amax();
        dq.max(dp)
    }
}
