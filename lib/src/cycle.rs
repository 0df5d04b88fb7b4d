//! The color cycle.

use crate::{cells::State, color::Color, error::Error};
use rand::Rng;

/// An ordered sequence of distinct colors.
///
/// The states of the automaton are the indices into the cycle.
/// The successor of the last state is the state `0`.
///
/// A cycle is never empty, and never changes after its creation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cycle {
    colors: Box<[Color]>,
}

impl Cycle {
    /// Creates a cycle from a list of colors.
    ///
    /// Returns an error if the list is empty or a color appears twice.
    pub fn new<I: IntoIterator<Item = Color>>(colors: I) -> Result<Self, Error> {
        let colors: Vec<Color> = colors.into_iter().collect();
        if colors.is_empty() {
            return Err(Error::EmptyCycle);
        }
        for (i, color) in colors.iter().enumerate() {
            if colors[..i].contains(color) {
                return Err(Error::DuplicateColor(*color));
            }
        }
        Ok(Cycle {
            colors: colors.into_boxed_slice(),
        })
    }

    /// Number of states, i.e., `K`.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always `false`. Kept for symmetry with [`len`](Self::len).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// The state after `state`, wrapping to `0` after the last one.
    #[inline]
    pub fn succ(&self, state: State) -> State {
        if state.0 + 1 == self.len() {
            State(0)
        } else {
            State(state.0 + 1)
        }
    }

    /// The color of a state.
    ///
    /// # Panics
    ///
    /// Panics if the state is out of range, which never happens
    /// for the states in a [`Grid`](crate::Grid) with the same number of states.
    #[inline]
    pub fn color(&self, state: State) -> Color {
        self.colors[state.0]
    }

    /// All colors, in cycle order.
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// A uniformly random state.
    pub fn random_state<R: Rng + ?Sized>(&self, rng: &mut R) -> State {
        State(rng.gen_range(0..self.len()))
    }
}

/// Red, green, blue.
impl Default for Cycle {
    fn default() -> Self {
        Cycle {
            colors: Box::new([Color::RED, Color::GREEN, Color::BLUE]),
        }
    }
}
