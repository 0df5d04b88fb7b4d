//! The Moore neighborhood, clipped at the edges of the grid.

use crate::cells::Coord;
use std::iter::FusedIterator;

/// Offsets of the eight neighbors, in the order they are visited.
pub(crate) const NBHD: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// The neighbors of the cell at `coord` in a `width` × `height` grid.
///
/// Neighbors outside the grid are skipped; there is no wraparound.
/// So a corner cell has 3 neighbors, any other cell on the edge has 5,
/// and an interior cell has 8.
///
/// The neighbors are always yielded in the same order.
///
/// `coord` must be inside the grid.
pub fn neighbors(coord: Coord, width: usize, height: usize) -> Neighbors {
    debug_assert!(
        coord.0 < width && coord.1 < height,
        "cell {:?} is outside a {}x{} grid",
        coord,
        width,
        height
    );
    Neighbors {
        coord,
        width,
        height,
        index: 0,
    }
}

/// Number of neighbors of the cell at `coord` in a `width` × `height` grid.
pub fn neighbor_count(coord: Coord, width: usize, height: usize) -> usize {
    neighbors(coord, width, height).count()
}

/// An iterator over the neighbors of a cell.
///
/// Created by [`neighbors`].
#[derive(Clone, Debug)]
pub struct Neighbors {
    coord: Coord,
    width: usize,
    height: usize,
    /// Index of the next offset to try in [`NBHD`].
    index: usize,
}

impl Iterator for Neighbors {
    type Item = Coord;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&(dx, dy)) = NBHD.get(self.index) {
            self.index += 1;
            let (x, y) = self.coord;
            let nx = x.checked_add_signed(dx).filter(|&nx| nx < self.width);
            let ny = y.checked_add_signed(dy).filter(|&ny| ny < self.height);
            if let (Some(nx), Some(ny)) = (nx, ny) {
                return Some((nx, ny));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(NBHD.len() - self.index))
    }
}

impl FusedIterator for Neighbors {}
