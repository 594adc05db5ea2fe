use pt_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("map parse error on line {line}: {msg}")]
    Parse { line: u64, msg: String },

    #[error("invalid scenario: {0}")]
    Core(#[from] CoreError),

    #[error("map read error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ScenarioResult<T> = Result<T, ScenarioError>;
