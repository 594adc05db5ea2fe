//! Fallbacks used when no interception exists within the horizon.

use pt_core::{CellIndex, CostGrid, Position};

use crate::search::SearchTree;

/// Head for the target's current cell along the fewest-move path, if the
/// search reached it.  Returns the cell and its move count, which doubles as
/// the plan length (no waiting appended).
pub fn chase_target(grid: &CostGrid, tree: &SearchTree, target: Position) -> Option<(CellIndex, u32)> {
    let cell = grid.traversable_index(target)?;
    tree.steps(cell).map(|steps| (cell, steps))
}

/// Best single move toward `target`: among the traversable candidates (the 8
/// neighbours plus staying), minimise squared distance to `target`, then
/// destination cost.  Staying put is the starting choice, so this always
/// yields a legal action when `agent` itself is traversable.
pub fn greedy_step(grid: &CostGrid, agent: Position, target: Position) -> Position {
    let mut best = agent;
    let mut best_dist = agent.dist_sq(target);
    let mut best_cost = grid.cost_at(agent).unwrap_or(i32::MAX);

    for cand in agent.candidates() {
        let Some(cost) = grid.traversable_index(cand).map(|c| grid.cost(c)) else {
            continue;
        };
        let dist = cand.dist_sq(target);
        if dist < best_dist || (dist == best_dist && cost < best_cost) {
            best = cand;
            best_dist = dist;
            best_cost = cost;
        }
    }
    best
}
