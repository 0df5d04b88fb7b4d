//! Cells in the cellular automaton.

use std::fmt::{self, Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The state of a cell.
///
/// A state is an index into the color [`Cycle`](crate::Cycle) of the world.
/// A [`Grid`](crate::Grid) never holds a state outside of `0..K`,
/// where `K` is the length of the cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct State(pub usize);

/// Writes the state as a base-36 digit, or `#` if it does not fit in one.
impl Display for State {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let c = u32::try_from(self.0)
            .ok()
            .and_then(|i| char::from_digit(i, 36))
            .unwrap_or('#');
        write!(f, "{}", c)
    }
}

/// The coordinates of a cell.
///
/// `(x-coordinate, y-coordinate)`, both 0-indexed.
/// `x` is the column and `y` is the row.
pub type Coord = (usize, usize);
