//! The grid.

use crate::{
    cells::{Coord, State},
    cycle::Cycle,
    error::Error,
    nbhd::{neighbors, Neighbors},
};
use rand::Rng;
use std::{
    fmt::{self, Display, Formatter},
    ops::Index,
};

/// A `width` × `height` array of cells.
///
/// Every cell holds a state in `0..states`. The size and the number of states
/// are fixed when the grid is created; all constructors check that
/// the cells are in range, so a grid never holds an invalid state.
///
/// Cells are stored row by row.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    width: usize,
    height: usize,
    /// Number of states, i.e., the length of the cycle.
    states: usize,
    cells: Box<[State]>,
}

impl Grid {
    /// Checks the size and the number of states shared by all constructors.
    fn check_size(width: usize, height: usize, states: usize) -> Result<(), Error> {
        if width == 0 || height == 0 {
            return Err(Error::NonPositive);
        }
        if states == 0 {
            return Err(Error::EmptyCycle);
        }
        Ok(())
    }

    /// Creates a grid where every cell has state `0`.
    pub fn new(width: usize, height: usize, states: usize) -> Result<Self, Error> {
        Self::check_size(width, height, states)?;
        Ok(Grid {
            width,
            height,
            states,
            cells: vec![State(0); width * height].into_boxed_slice(),
        })
    }

    /// Creates a grid from a row-major list of states.
    pub fn from_states(
        width: usize,
        height: usize,
        states: usize,
        cells: Vec<State>,
    ) -> Result<Self, Error> {
        Self::check_size(width, height, states)?;
        if cells.len() != width * height {
            return Err(Error::CellCount {
                expected: width * height,
                found: cells.len(),
            });
        }
        if let Some(i) = cells.iter().position(|s| s.0 >= states) {
            return Err(Error::InvalidState((i % width, i / width), cells[i]));
        }
        Ok(Grid {
            width,
            height,
            states,
            cells: cells.into_boxed_slice(),
        })
    }

    /// Creates a grid from its rows.
    ///
    /// All rows must have the same length.
    pub fn from_rows<T: AsRef<[usize]>>(rows: &[T], states: usize) -> Result<Self, Error> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.as_ref().len());
        let mut cells = Vec::with_capacity(width * height);
        for row in rows {
            let row = row.as_ref();
            if row.len() != width {
                return Err(Error::RaggedGrid);
            }
            cells.extend(row.iter().map(|&i| State(i)));
        }
        Self::from_states(width, height, states, cells)
    }

    /// Creates a grid where every cell is an independent, uniformly random
    /// state of the cycle.
    pub fn random<R: Rng + ?Sized>(
        width: usize,
        height: usize,
        cycle: &Cycle,
        rng: &mut R,
    ) -> Result<Self, Error> {
        Self::check_size(width, height, cycle.len())?;
        let cells = (0..width * height)
            .map(|_| cycle.random_state(&mut *rng))
            .collect();
        Ok(Grid {
            width,
            height,
            states: cycle.len(),
            cells,
        })
    }

    /// Parses a grid from text.
    ///
    /// Each line is a row, and each character is the state of a cell,
    /// written as a base-36 digit. Blank lines are ignored.
    /// This is the same format as the [`Display`] implementation.
    pub fn parse(text: &str, states: usize) -> Result<Self, Error> {
        let mut rows = Vec::new();
        for line in text.lines().map(str::trim).filter(|line| !line.is_empty()) {
            let row = line
                .chars()
                .map(|c| c.to_digit(36).map(|i| i as usize).ok_or(Error::ParseGrid(c)))
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(row);
        }
        Self::from_rows(&rows, states)
    }

    /// Assembles a grid whose cells are already known to be valid.
    pub(crate) fn from_valid_cells(&self, cells: Vec<State>) -> Self {
        debug_assert_eq!(cells.len(), self.cells.len());
        Grid {
            width: self.width,
            height: self.height,
            states: self.states,
            cells: cells.into_boxed_slice(),
        }
    }

    /// Width.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Number of states.
    #[inline]
    pub fn states(&self) -> usize {
        self.states
    }

    /// The state of a cell. Returns `None` if there is no such cell.
    #[inline]
    pub fn get(&self, (x, y): Coord) -> Option<State> {
        if x < self.width && y < self.height {
            Some(self.cells[y * self.width + x])
        } else {
            None
        }
    }

    /// Sets the state of a cell.
    pub fn set(&mut self, coord: Coord, state: State) -> Result<(), Error> {
        let (x, y) = coord;
        if x >= self.width || y >= self.height {
            return Err(Error::OutOfBounds(coord));
        }
        if state.0 >= self.states {
            return Err(Error::InvalidState(coord, state));
        }
        self.cells[y * self.width + x] = state;
        Ok(())
    }

    /// The neighbors of a cell inside this grid.
    #[inline]
    pub fn neighbors(&self, coord: Coord) -> Neighbors {
        neighbors(coord, self.width, self.height)
    }

    /// All coordinates, row by row.
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let width = self.width;
        (0..self.height).flat_map(move |y| (0..width).map(move |x| (x, y)))
    }

    /// All rows, from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[State]> {
        self.cells.chunks(self.width)
    }

    /// The rows as plain numbers.
    pub fn to_rows(&self) -> Vec<Vec<usize>> {
        self.rows()
            .map(|row| row.iter().map(|s| s.0).collect())
            .collect()
    }

    /// Number of cells in each state.
    pub fn census(&self) -> Vec<usize> {
        let mut census = vec![0; self.states];
        for state in self.cells.iter() {
            census[state.0] += 1;
        }
        census
    }

    /// Number of cells whose states differ from the same cells in `other`.
    ///
    /// Both grids should have the same dimensions.
    pub fn diff_count(&self, other: &Grid) -> usize {
        debug_assert_eq!(self.dimensions(), other.dimensions());
        self.cells
            .iter()
            .zip(other.cells.iter())
            .filter(|(a, b)| a != b)
            .count()
    }
}

impl Index<Coord> for Grid {
    type Output = State;

    #[inline]
    fn index(&self, (x, y): Coord) -> &Self::Output {
        assert!(x < self.width && y < self.height, "no cell at {:?}", (x, y));
        &self.cells[y * self.width + x]
    }
}

/// One line per row, one base-36 digit per cell.
impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for state in row {
                write!(f, "{}", state)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
