//! `pt-scenario`: pursuit problem definitions and map file loading.
//!
//! # Crate layout
//!
//! | Module       | Contents                                            |
//! |--------------|-----------------------------------------------------|
//! | [`scenario`] | `Scenario`: grid, agent start, target trajectory   |
//! | [`loader`]   | `load_scenario`, `load_scenario_reader`             |
//! | [`error`]    | `ScenarioError`, `ScenarioResult<T>`                |

pub mod error;
pub mod loader;
pub mod scenario;


pub use error::{ScenarioError, ScenarioResult};
pub use loader::{load_scenario, load_scenario_reader};
pub use scenario::Scenario;
