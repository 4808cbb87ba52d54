//! Per-body position history used for trail rendering
//!
//! By default the trails grow without bound for the life of a run; a long run
//! keeps every recorded position in memory. `TrajectoryHistory::windowed`
//! keeps only the newest `n` positions per body instead.

use std::collections::VecDeque;

use super::states::{NVec2, SimulationState};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrajectoryHistory {
    trail_a: VecDeque<NVec2>,
    trail_b: VecDeque<NVec2>,
    window: Option<usize>, // None = unbounded
}

impl TrajectoryHistory {
    /// Unbounded history
    pub fn new() -> Self {
        Self::default()
    }

    /// History that drops the oldest entries beyond `window` per trail
    pub fn windowed(window: usize) -> Self {
        Self {
            window: Some(window),
            ..Self::default()
        }
    }

    pub fn with_window(window: Option<usize>) -> Self {
        match window {
            Some(n) => Self::windowed(n),
            None => Self::new(),
        }
    }

    /// Append snapshots of both positions
    pub fn record(&mut self, state: &SimulationState) {
        self.trail_a.push_back(state.body_a.x);
        self.trail_b.push_back(state.body_b.x);

        if let Some(window) = self.window {
            while self.trail_a.len() > window {
                self.trail_a.pop_front();
            }
            while self.trail_b.len() > window {
                self.trail_b.pop_front();
            }
        }
    }

    pub fn clear(&mut self) {
        self.trail_a.clear();
        self.trail_b.clear();
    }

    pub fn trail_a(&self) -> &VecDeque<NVec2> {
        &self.trail_a
    }

    pub fn trail_b(&self) -> &VecDeque<NVec2> {
        &self.trail_b
    }

    pub fn window(&self) -> Option<usize> {
        self.window
    }

    /// Entries per trail (both trails always have the same length)
    pub fn len(&self) -> usize {
        self.trail_a.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trail_a.is_empty()
    }
}
