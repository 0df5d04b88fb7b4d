//! The world.

use crate::{
    cells::Coord,
    color::Color,
    config::Config,
    cycle::Cycle,
    grid::Grid,
    rule::Rule,
};
use log::{debug, info};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The status of the world after a step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Status {
    /// Some cells changed in the last generation.
    Evolving,
    /// No cell changed in the last generation.
    ///
    /// The grid will never change again.
    Stable,
}

/// The world.
///
/// Holds the current grid, and everything needed to compute the next one.
/// Created by [`Config::world`] or [`Config::world_with_grid`].
#[derive(Clone, Debug)]
pub struct World {
    /// World configuration.
    pub(crate) config: Config,

    /// The color cycle.
    cycle: Cycle,

    /// The transition rule.
    rule: Rule,

    /// The current grid.
    grid: Grid,

    /// Number of generations computed so far.
    pub(crate) generation: u64,

    /// Number of cells that changed in the last generation.
    changes: usize,

    /// The status after the last step.
    status: Status,
}

impl World {
    /// Creates a new world. The grid must match the cycle.
    pub(crate) fn new(config: Config, cycle: Cycle, grid: Grid, generation: u64) -> Self {
        debug_assert_eq!(grid.states(), cycle.len());
        let rule = config.rule();
        World {
            config,
            cycle,
            rule,
            grid,
            generation,
            changes: 0,
            status: Status::Evolving,
        }
    }

    /// Computes the next generation with the configured rule.
    #[cfg(not(feature = "rayon"))]
    fn next_grid(&self) -> Grid {
        self.rule.step(&self.grid, &self.cycle)
    }

    /// Computes the next generation with the configured rule.
    #[cfg(feature = "rayon")]
    fn next_grid(&self) -> Grid {
        self.rule.par_step(&self.grid, &self.cycle)
    }

    /// Advances the world by one generation.
    ///
    /// Returns [`Status::Stable`] if no cell changed.
    pub fn step(&mut self) -> Status {
        let next = self.next_grid();
        self.changes = next.diff_count(&self.grid);
        self.grid = next;
        self.generation += 1;
        debug!(
            "Generation {}: {} cells changed",
            self.generation, self.changes
        );

        let status = if self.changes == 0 {
            Status::Stable
        } else {
            Status::Evolving
        };
        if status == Status::Stable && self.status != Status::Stable {
            info!("The world is stable at generation {}", self.generation);
        }
        self.status = status;
        status
    }

    /// Advances the world by at most `max_step` generations.
    ///
    /// Stops early when the world becomes stable.
    /// Returns the status after the last step. If `max_step` is `0`,
    /// returns the current status without stepping.
    pub fn run(&mut self, max_step: u64) -> Status {
        for _ in 0..max_step {
            if self.step() == Status::Stable {
                break;
            }
        }
        self.status
    }

    /// World configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The color cycle.
    pub fn cycle(&self) -> &Cycle {
        &self.cycle
    }

    /// The transition rule.
    pub fn rule(&self) -> Rule {
        self.rule
    }

    /// The current grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of generations computed so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of cells that changed in the last generation.
    pub fn changes(&self) -> usize {
        self.changes
    }

    /// The status after the last step.
    ///
    /// A new world is [`Status::Evolving`] until a step shows otherwise.
    pub fn status(&self) -> Status {
        self.status
    }

    /// The color of a cell. Returns `None` if there is no such cell.
    pub fn color_at(&self, coord: Coord) -> Option<Color> {
        self.grid.get(coord).map(|state| self.cycle.color(state))
    }

    /// Number of cells in each state.
    pub fn census(&self) -> Vec<usize> {
        self.grid.census()
    }
}
