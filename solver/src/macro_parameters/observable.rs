use hamdyn_core::{SimulationError, SimulationResult, State};

/// Scalar written to grid snapshots: sin(q0) * cos(q1)
pub fn grid_observable(state: &State) -> SimulationResult<f64> {
    if state.dim() < 2 {
        return Err(SimulationError::InvalidState(format!(
            "grid observable needs 2 coordinates, state has {}", state.dim())));
    }
    Ok(state.q()[0].sin() * state.q()[1].cos())
}
