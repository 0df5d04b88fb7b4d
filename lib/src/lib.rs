//! A cyclic cellular automaton.
//!
//! Every cell of a rectangular [`Grid`] holds a state, which is an index into
//! a [`Cycle`] of colors. In each generation, a cell advances to the next
//! state of the cycle when more than [`THRESHOLD`] of its eight neighbors
//! already hold that state. Neighbors outside the grid are ignored.
//!
//! ```
//! use cca_lib::{step, Cycle, Grid};
//!
//! let cycle = Cycle::default();
//! let grid = Grid::parse("011\n111\n000", cycle.len()).unwrap();
//! let next = step(&grid, &cycle);
//! assert_eq!(next.to_string(), "111\n111\n010\n");
//! ```

mod cells;
mod color;
mod config;
mod cycle;
mod error;
mod grid;
mod nbhd;
mod rule;
#[cfg(feature = "serde")]
mod save;
mod world;

pub use cells::{Coord, State};
pub use color::Color;
pub use config::Config;
pub use cycle::Cycle;
pub use error::Error;
pub use grid::Grid;
pub use nbhd::{neighbor_count, neighbors, Neighbors};
pub use rule::{step, Rule, THRESHOLD};
#[cfg(feature = "serde")]
pub use save::WorldSer;
pub use world::{Status, World};
