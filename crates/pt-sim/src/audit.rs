//! Independent legality check of every commanded move.

use pt_core::{CostGrid, Position, Tick};

use crate::{SimError, SimResult};

/// Reject a move that leaves the map, lands on a cost `>=` the collision
/// threshold, or jumps more than one cell in either axis.
pub fn audit_move(grid: &CostGrid, tick: Tick, from: Position, to: Position) -> SimResult<()> {
    let Some(cost) = grid.cost_at(to) else {
        return Err(SimError::OutOfMap { tick, to });
    };
    if cost >= grid.collision_threshold() {
        return Err(SimError::Collision { tick, to, cost });
    }
    if !from.is_within_one_step(to) {
        return Err(SimError::NotAdjacent { tick, from, to });
    }
    Ok(())
}
