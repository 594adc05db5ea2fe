use pt_core::{Position, Tick};
use thiserror::Error;

/// Errors that abort a run.
///
/// Every variant except `Config` means the policy broke the movement rules.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("at {tick}: out-of-map position {to} commanded")]
    OutOfMap { tick: Tick, to: Position },

    #[error("at {tick}: move to {to} collides with an obstacle (cost {cost})")]
    Collision { tick: Tick, to: Position, cost: i32 },

    #[error("at {tick}: move {from} -> {to} is not a single 8-connected step")]
    NotAdjacent { tick: Tick, from: Position, to: Position },
}

impl SimError {
    /// `true` for the variants raised by the move audit.
    pub fn is_illegal_move(&self) -> bool {
        !matches!(self, SimError::Config(_))
    }
}

pub type SimResult<T> = Result<T, SimError>;
