/// Offsets of the 8 neighbouring positions at Chebyshev distance 1.
const NEIGHBOUR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
];

/// A fixed-size grid of cells, row-major. Boards are values: every
/// transition produces a new `Board` and leaves the input untouched, so a
/// renderer holding the previous board keeps a consistent snapshot.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    cells: Vec<bool>,
    rows: usize,
    columns: usize,
}

impl Board {
    pub fn blank(rows: usize, columns: usize) -> Self {
        assert!(rows >= 1 && columns >= 1);
        Self {
            cells: vec![false; rows * columns],
            rows,
            columns,
        }
    }

    /// Board with each cell alive with probability `fill_rate`.
    ///
    /// `seed` - random seed (if `None`, then random seed is generated)
    pub fn random(rows: usize, columns: usize, seed: Option<u64>, fill_rate: f64) -> Self {
        use rand::{Rng, SeedableRng};
        let mut rng = if let Some(x) = seed {
            rand_chacha::ChaCha8Rng::seed_from_u64(x)
        } else {
            rand_chacha::ChaCha8Rng::from_entropy()
        };
        let mut board = Self::blank(rows, columns);
        for cell in board.cells.iter_mut() {
            *cell = rng.gen_bool(fill_rate);
        }
        board
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn alive(&self, r: usize, c: usize) -> bool {
        debug_assert!(r < self.rows && c < self.columns);
        self.cells[r * self.columns + c]
    }

    /// New board with exactly cell `(r, c)` inverted.
    pub fn toggled(&self, r: usize, c: usize) -> Self {
        assert!(r < self.rows && c < self.columns);
        let mut next = self.clone();
        next.cells[r * self.columns + c] ^= true;
        next
    }

    /// Number of alive cells among the 8 neighbours of `(r, c)`.
    /// Positions outside the board count as dead; edges are hard, not a torus.
    pub fn alive_neighbours(&self, r: usize, c: usize) -> usize {
        NEIGHBOUR_OFFSETS
            .iter()
            .filter(|&&(dr, dc)| {
                let nr = r as isize + dr;
                let nc = c as isize + dc;
                nr >= 0
                    && nr < self.rows as isize
                    && nc >= 0
                    && nc < self.columns as isize
                    && self.cells[nr as usize * self.columns + nc as usize]
            })
            .count()
    }

    /// One application of the rule, every cell evaluated against `self` as a
    /// single snapshot.
    pub fn next_generation(&self) -> Self {
        let mut next = Self::blank(self.rows, self.columns);
        for r in 0..self.rows {
            for c in 0..self.columns {
                let neighbours = self.alive_neighbours(r, c);
                next.cells[r * self.columns + c] = if self.alive(r, c) {
                    neighbours == 2 || neighbours == 3
                } else {
                    neighbours == 3
                };
            }
        }
        next
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }
}
