use thiserror::Error;

/// Every way a simulation run can fail. All of them are fatal for the run.
#[derive(Error, Debug)]
pub enum SimulationError {
    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type SimulationResult<T> = Result<T, SimulationError>;
