use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::Error;

/// A single generation of the field.
///
/// Cell states are stored row-major, `x + y * width`. The outer border is
/// permanently dead: `random` and `step` only ever write interior cells,
/// so any grid obtained from them upholds the invariant.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    cells: Vec<bool>,
    width: usize,
    height: usize,
}

impl Grid {
    /// Create an all-dead field with the given dimensions.
    pub fn blank(height: usize, width: usize) -> Result<Self, Error> {
        if height < 3 || width < 3 {
            return Err(Error::InvalidDimensions { height, width });
        }
        Ok(Self {
            cells: vec![false; width * height],
            width,
            height,
        })
    }

    /// Create a field with random interior cells.
    ///
    /// `seed` - random seed (if `None`, then random seed is generated)
    pub fn random(
        height: usize,
        width: usize,
        seed: Option<u64>,
        fill_rate: f64,
    ) -> Result<Self, Error> {
        let mut rng = if let Some(x) = seed {
            ChaCha8Rng::seed_from_u64(x)
        } else {
            ChaCha8Rng::from_entropy()
        };
        let mut result = Self::blank(height, width)?;
        for y in 1..height - 1 {
            for x in 1..width - 1 {
                result.set(x, y, rng.gen_bool(fill_rate));
            }
        }
        Ok(result)
    }

    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn get(&self, x: usize, y: usize) -> bool {
        self.cells[x + y * self.width]
    }

    pub fn set(&mut self, x: usize, y: usize, state: bool) {
        self.cells[x + y * self.width] = state;
    }

    /// Number of alive cells in the field.
    pub fn population(&self) -> usize {
        self.cells.iter().map(|&c| c as usize).sum()
    }

    /// Alive cells among the 8 neighbours of `(x, y)`.
    ///
    /// All 8 neighbours must be in bounds, i.e. `(x, y)` must be an
    /// interior cell.
    pub fn alive_neighbours(&self, x: usize, y: usize) -> usize {
        debug_assert!((1..=self.width - 2).contains(&x));
        debug_assert!((1..=self.height - 2).contains(&y));
        let (x1, x2) = (x - 1, x + 1);
        let (y1, y2) = (y - 1, y + 1);
        self.get(x1, y1) as usize
            + self.get(x, y1) as usize
            + self.get(x2, y1) as usize
            + self.get(x1, y) as usize
            + self.get(x2, y) as usize
            + self.get(x1, y2) as usize
            + self.get(x, y2) as usize
            + self.get(x2, y2) as usize
    }

    /// Apply one B3/S23 update, producing the next generation.
    ///
    /// The input field is left untouched; border cells of the result are
    /// dead no matter what the input looks like.
    pub fn step(&self) -> Self {
        let mut next = Self {
            cells: vec![false; self.width * self.height],
            width: self.width,
            height: self.height,
        };
        for y in 1..self.height - 1 {
            for x in 1..self.width - 1 {
                let neibs = self.alive_neighbours(x, y);
                let state = if self.get(x, y) {
                    neibs == 2 || neibs == 3
                } else {
                    neibs == 3
                };
                next.set(x, y, state);
            }
        }
        next
    }
}

/// Three-way stillness check: true once the field has stopped changing.
///
/// `previous` is absent while there is no history yet (first generation).
/// Only period-1 fixed points are caught: an oscillator's `previous` and
/// `current` differ every generation, so it never compares equal here.
pub fn is_stable(previous: Option<&Grid>, current: &Grid, next: &Grid) -> bool {
    match previous {
        Some(prev) => prev == current && current == next,
        None => false,
    }
}
