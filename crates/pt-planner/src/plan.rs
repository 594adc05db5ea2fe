//! `PlanCache`: committed future moves replayed across calls.
//!
//! A plan is a queue of positions (path cells followed by any literal "wait"
//! copies of the rendezvous cell), a cursor, and the tick at which the next
//! entry is due.  It is consumed one entry per call and is only honoured
//! while the caller's clock and position still agree with it.

use pt_core::{CostGrid, Position, Tick};

/// The only planner state that outlives a call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanCache {
    steps:    Vec<Position>,
    cursor:   usize,
    /// Tick at which `steps[cursor]` should be handed out.
    expected: Option<Tick>,
}

impl PlanCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard the plan.
    pub fn clear(&mut self) {
        self.steps.clear();
        self.cursor = 0;
        self.expected = None;
    }

    /// `true` when no queued move remains.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cursor >= self.steps.len()
    }

    /// Number of queued moves not yet handed out.
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len().saturating_sub(self.cursor)
    }

    /// The queued moves not yet handed out, next first.
    pub fn pending(&self) -> &[Position] {
        self.steps.get(self.cursor..).unwrap_or(&[])
    }

    #[inline]
    pub fn expected_tick(&self) -> Option<Tick> {
        self.expected
    }

    /// Replace the plan with `steps` and hand out the first entry.
    ///
    /// An empty `steps` leaves the cache cleared and returns `None`.
    pub fn install(&mut self, steps: Vec<Position>, now: Tick) -> Option<Position> {
        self.steps = steps;
        self.cursor = 0;
        self.expected = Some(now);
        let first = self.pending().first().copied();
        match first {
            Some(p) => {
                self.advance(now);
                Some(p)
            }
            None => {
                self.clear();
                None
            }
        }
    }

    /// Hand out the next queued move if the plan is still valid at `now` for
    /// an agent standing on `agent`.
    ///
    /// Valid means: the expected tick equals `now`, and the next entry is
    /// within one step of `agent`, in bounds, and traversable.  Any failure
    /// discards the whole plan and returns `None`.
    pub fn replay(&mut self, grid: &CostGrid, agent: Position, now: Tick) -> Option<Position> {
        let next = self.pending().first().copied().filter(|&p| {
            self.expected == Some(now) && agent.is_within_one_step(p) && grid.is_traversable(p)
        });
        match next {
            Some(p) => {
                self.advance(now);
                Some(p)
            }
            None => {
                self.clear();
                None
            }
        }
    }

    fn advance(&mut self, now: Tick) {
        self.cursor += 1;
        self.expected = Some(now.next());
    }
}
