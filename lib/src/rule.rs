//! The transition rule of the cyclic cellular automaton.
//!
//! A cell advances to the next state of the cycle when more than
//! [`threshold`](Rule::threshold) of its neighbors already hold that state.
//! Otherwise it keeps its state.

use crate::{
    cells::{Coord, State},
    cycle::Cycle,
    grid::Grid,
};
use educe::Educe;

#[cfg(feature = "rayon")]
use rayon::prelude::*;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The default threshold.
///
/// A cell advances when at least 3 of its neighbors hold the next state.
pub const THRESHOLD: usize = 2;

/// The transition rule.
///
/// The threshold is an absolute number of neighbors. It does not scale with
/// the size of the neighborhood, so cells on the edges, which have fewer
/// neighbors, are less likely to advance.
#[derive(Clone, Copy, Debug, Educe, PartialEq, Eq, Hash)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rule {
    #[educe(Default(expression = "THRESHOLD"))]
    threshold: usize,
}

impl Rule {
    /// A rule where a cell advances when more than `threshold` of its
    /// neighbors hold the next state.
    pub fn new(threshold: usize) -> Self {
        Rule { threshold }
    }

    /// The threshold.
    #[inline]
    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// The state of the cell at `coord` in the next generation.
    #[inline]
    pub fn next_state(&self, grid: &Grid, cycle: &Cycle, coord: Coord) -> State {
        let state = grid[coord];
        let succ = cycle.succ(state);
        let count = grid.neighbors(coord).filter(|&n| grid[n] == succ).count();
        if count > self.threshold {
            succ
        } else {
            state
        }
    }

    /// Computes the next generation.
    ///
    /// The input grid is left as it is; every cell of the new grid is computed
    /// from the cells of the old one.
    pub fn step(&self, grid: &Grid, cycle: &Cycle) -> Grid {
        debug_assert_eq!(grid.states(), cycle.len());
        let cells = grid
            .coords()
            .map(|coord| self.next_state(grid, cycle, coord))
            .collect();
        grid.from_valid_cells(cells)
    }

    /// Computes the next generation on rayon's thread pool.
    ///
    /// Each row of the new grid is written by one task. The result is
    /// always the same as [`step`](Self::step).
    #[cfg(feature = "rayon")]
    pub fn par_step(&self, grid: &Grid, cycle: &Cycle) -> Grid {
        debug_assert_eq!(grid.states(), cycle.len());
        let width = grid.width();
        let mut cells = vec![State(0); width * grid.height()];
        cells
            .par_chunks_mut(width)
            .enumerate()
            .for_each(|(y, row)| {
                for (x, cell) in row.iter_mut().enumerate() {
                    *cell = self.next_state(grid, cycle, (x, y));
                }
            });
        grid.from_valid_cells(cells)
    }
}

/// Computes the next generation with the default rule.
///
/// Same as `Rule::default().step(grid, cycle)`.
pub fn step(grid: &Grid, cycle: &Cycle) -> Grid {
    Rule::default().step(grid, cycle)
}
