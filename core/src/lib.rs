mod error;
mod snapshot;
mod state;
extern crate nalgebra as na;

pub use error::{SimulationError, SimulationResult};
pub use snapshot::{load_snapshot, snapshot_path, GridWriter, TrajectoryWriter};
pub use state::{Gradient, State};
