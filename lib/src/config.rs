//! World configuration.

use crate::{
    color::Color,
    cycle::Cycle,
    error::Error,
    grid::Grid,
    rule::{Rule, THRESHOLD},
    world::World,
};
use educe::Educe;
use log::debug;
use rand::{rngs::StdRng, SeedableRng};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// World configuration.
///
/// The world will be generated from this configuration.
///
/// Missing fields in a deserialized configuration take their default values.
#[derive(Clone, Debug, Educe, PartialEq, Eq)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct Config {
    /// Width.
    #[educe(Default = 16)]
    pub width: usize,

    /// Height.
    #[educe(Default = 16)]
    pub height: usize,

    /// The color cycle.
    ///
    /// The states of the cells are indices into this list.
    #[educe(Default(expression = "vec![Color::RED, Color::GREEN, Color::BLUE]"))]
    pub colors: Vec<Color>,

    /// A cell advances to the next state when more than this number of its
    /// neighbors hold that state.
    #[educe(Default(expression = "THRESHOLD"))]
    pub threshold: usize,

    /// Seed of the random initial grid.
    ///
    /// `None` means that the seed is taken from the operating system,
    /// so every world is different.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub seed: Option<u64>,
}

impl Config {
    /// Sets up a new configuration with given size.
    pub fn new(width: usize, height: usize) -> Self {
        Config {
            width,
            height,
            ..Config::default()
        }
    }

    /// Sets the colors of the cycle.
    pub fn set_colors<I: IntoIterator<Item = Color>>(mut self, colors: I) -> Self {
        self.colors = colors.into_iter().collect();
        self
    }

    /// Sets the threshold.
    pub fn set_threshold(mut self, threshold: usize) -> Self {
        self.threshold = threshold;
        self
    }

    /// Sets the seed of the initial grid.
    pub fn set_seed<T: Into<Option<u64>>>(mut self, seed: T) -> Self {
        self.seed = seed.into();
        self
    }

    /// The color cycle.
    /// Returns an error if the colors are empty or not distinct.
    pub fn cycle(&self) -> Result<Cycle, Error> {
        Cycle::new(self.colors.iter().copied())
    }

    /// The transition rule.
    pub fn rule(&self) -> Rule {
        Rule::new(self.threshold)
    }

    /// Creates a new world with a random initial grid.
    /// Returns an error if the configuration is invalid.
    pub fn world(&self) -> Result<World, Error> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::NonPositive);
        }
        let cycle = self.cycle()?;
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        debug!(
            "Seeding a {}x{} grid with {} states (seed: {:?})",
            self.width,
            self.height,
            cycle.len(),
            self.seed
        );
        let grid = Grid::random(self.width, self.height, &cycle, &mut rng)?;
        Ok(World::new(self.clone(), cycle, grid, 0))
    }

    /// Creates a new world starting from the given grid.
    ///
    /// Returns an error if the configuration is invalid, or if the grid
    /// does not match the size and the colors of the configuration.
    pub fn world_with_grid(&self, grid: Grid) -> Result<World, Error> {
        self.world_at(grid, 0)
    }

    /// Creates a new world from a grid in some generation.
    pub(crate) fn world_at(&self, grid: Grid, generation: u64) -> Result<World, Error> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::NonPositive);
        }
        let cycle = self.cycle()?;
        if grid.dimensions() != (self.width, self.height) {
            return Err(Error::DimensionMismatch {
                expected: (self.width, self.height),
                found: grid.dimensions(),
            });
        }
        if grid.states() != cycle.len() {
            return Err(Error::StatesMismatch {
                grid: grid.states(),
                cycle: cycle.len(),
            });
        }
        Ok(World::new(self.clone(), cycle, grid, generation))
    }
}
