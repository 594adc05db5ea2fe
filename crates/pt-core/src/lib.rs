//! `pt-core`: foundational types for the pursuit simulator.
//!
//! This crate is a dependency of every other `pt-*` crate.  It intentionally
//! has no `pt-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module           | Contents                                              |
//! |------------------|-------------------------------------------------------|
//! | [`position`]     | `Position` (1-based grid coordinates), move tables    |
//! | [`ids`]          | `CellIndex` (0-based linear cell index)               |
//! | [`grid`]         | `CostGrid`: costs, bounds, traversability            |
//! | [`time`]         | `Tick`                                                |
//! | [`trajectory`]   | `Trajectory`: target positions indexed by `Tick`     |
//! | [`error`]        | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod grid;
pub mod ids;
pub mod position;
pub mod time;
pub mod trajectory;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use grid::CostGrid;
pub use ids::CellIndex;
pub use position::{Position, MOVES, STEPS};
pub use time::Tick;
pub use trajectory::Trajectory;
