//! Algorithm enum for selecting how a Life generation is stepped.

use super::LifeGrid;

/// Available stepping strategies. Both produce identical grids; they
/// differ only in how the rule pass is scheduled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Rule pass over the current buffer on the calling thread
    #[default]
    Incremental,
    /// Rule pass split across the rayon pool
    IncrementalParallel,
}

impl Algorithm {
    /// Get all available algorithms
    pub fn all() -> Vec<Algorithm> {
        vec![Algorithm::Incremental, Algorithm::IncrementalParallel]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Incremental => "Incremental",
            Algorithm::IncrementalParallel => "Incremental+Par",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Algorithm::Incremental => "Stored neighbour counts, serial rule pass",
            Algorithm::IncrementalParallel => "Stored neighbour counts, parallel rule pass",
        }
    }

    /// Advance `grid` one generation; returns the number of changed cells
    pub fn step(self, grid: &mut LifeGrid) -> usize {
        match self {
            Algorithm::Incremental => grid.advance_generation(),
            Algorithm::IncrementalParallel => grid.advance_generation_parallel(),
        }
    }
}
