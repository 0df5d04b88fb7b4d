//! All kinds of errors in this crate.

use crate::{
    cells::{Coord, State},
    color::Color,
};
use displaydoc::Display;
use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum Error {
    /// Width / height should be positive.
    NonPositive,
    /// The color cycle should contain at least one color.
    EmptyCycle,
    /// Color {0} appears more than once in the cycle.
    DuplicateColor(Color),
    /// Cell at {0:?} has invalid state: {1:?}.
    InvalidState(Coord, State),
    /// Cell {0:?} is outside the grid.
    OutOfBounds(Coord),
    /// The grid has {grid} states but the cycle has {cycle} colors.
    StatesMismatch { grid: usize, cycle: usize },
    /// Expected a {expected:?} grid, found {found:?}.
    DimensionMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },
    /// Expected {expected} cells, found {found}.
    CellCount { expected: usize, found: usize },
    /// Invalid color: {0:?}.
    ParseColor(String),
    /// Invalid cell character: {0:?}.
    ParseGrid(char),
    /// All rows of a grid should have the same length.
    RaggedGrid,
}
