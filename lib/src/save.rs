//! Saves the world.

use crate::{config::Config, error::Error, grid::Grid, world::World};
use serde::{Deserialize, Serialize};

/// A representation of the world which can be easily serialized.
///
/// The fields are ordered so that the configuration comes last,
/// which formats such as TOML require for nested tables.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldSer {
    /// Number of generations computed so far.
    pub generation: u64,

    /// The states of the cells, row by row.
    pub cells: Vec<Vec<usize>>,

    /// World configuration.
    pub config: Config,
}

impl WorldSer {
    /// Restores the world from the `WorldSer`.
    ///
    /// Returns an error if the cells do not fit the configuration.
    pub fn world(&self) -> Result<World, Error> {
        let grid = Grid::from_rows(&self.cells, self.config.colors.len())?;
        self.config.world_at(grid, self.generation)
    }
}

impl World {
    /// Saves the world as a `WorldSer`.
    pub fn ser(&self) -> WorldSer {
        WorldSer {
            generation: self.generation,
            cells: self.grid().to_rows(),
            config: self.config.clone(),
        }
    }
}
