//! A single face of a cube: an N x N grid of sticker tiles.
//!
//! ## Slices
//!
//! A slice is one row or column of stickers, addressed by the grid edge it
//! runs parallel to (`Edge`) and its depth from that edge (`layer`). Slices
//! are always read and written in *clockwise order around the face as seen
//! from outside*: the up edge left to right, the right edge top to bottom,
//! the down edge right to left, the left edge bottom to top. The adjacency
//! table in [`crate::cube`] relies on this order so that neighbor-to-neighbor
//! copies never need reversal.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::Tile;

/// One row or column of stickers.
///
/// Inline capacity covers every WCA cube size without heap allocation.
pub type Slice = SmallVec<[Tile; 8]>;

/// Which edge of a face a slice is addressed from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Edge {
    /// The top row side of the grid.
    Up,
    /// The bottom row side of the grid.
    Down,
    /// The left column side of the grid.
    Left,
    /// The right column side of the grid.
    Right,
}

/// A square grid of sticker tiles making up one side of a cube.
///
/// The grid is always exactly `size * size` tiles; it is created filled with
/// a single identity and mutated only through [`Face::set_slice`] and the
/// rotation methods.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Face {
    size: usize,
    /// Row-major stickers, as the face is seen from outside the cube.
    tiles: Vec<Tile>,
}

impl Face {
    /// Create a face of `size * size` stickers, all showing `tile`.
    #[must_use]
    pub fn solid(tile: Tile, size: usize) -> Self {
        Self {
            size,
            tiles: vec![tile; size * size],
        }
    }

    /// Side length of the grid.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// The sticker at `row`, `col` (0-indexed from the top-left).
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Tile {
        self.tiles[row * self.size + col]
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, tile: Tile) {
        self.tiles[row * self.size + col] = tile;
    }

    /// Iterate over the rows of the grid, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.tiles.chunks(self.size)
    }

    /// True if every sticker shows the same identity.
    #[must_use]
    pub fn is_uniform(&self) -> bool {
        self.tiles.windows(2).all(|w| w[0] == w[1])
    }

    /// Read the slice at `layer` in from `edge`, in clockwise order.
    #[must_use]
    pub fn get_slice(&self, edge: Edge, layer: usize) -> Slice {
        let n = self.size;
        match edge {
            Edge::Up => (0..n).map(|c| self.get(layer, c)).collect(),
            Edge::Right => (0..n).map(|r| self.get(r, n - 1 - layer)).collect(),
            Edge::Down => (0..n).rev().map(|c| self.get(n - 1 - layer, c)).collect(),
            Edge::Left => (0..n).rev().map(|r| self.get(r, layer)).collect(),
        }
    }

    /// Overwrite the slice at `layer` in from `edge` with `values`, which
    /// must hold exactly `size` stickers in clockwise order.
    pub fn set_slice(&mut self, edge: Edge, layer: usize, values: &[Tile]) {
        let n = self.size;
        debug_assert_eq!(values.len(), n, "slice length must match face size");
        match edge {
            Edge::Up => {
                for (c, &tile) in values.iter().enumerate() {
                    self.set(layer, c, tile);
                }
            }
            Edge::Right => {
                for (r, &tile) in values.iter().enumerate() {
                    self.set(r, n - 1 - layer, tile);
                }
            }
            Edge::Down => {
                for (i, &tile) in values.iter().enumerate() {
                    self.set(n - 1 - layer, n - 1 - i, tile);
                }
            }
            Edge::Left => {
                for (i, &tile) in values.iter().enumerate() {
                    self.set(n - 1 - i, layer, tile);
                }
            }
        }
    }

    /// Rotate the whole grid a quarter turn in place.
    ///
    /// Transpose-with-reversal over a single snapshot of the tiles.
    pub fn rotate_quarter(&mut self, clockwise: bool) {
        let n = self.size;
        let before = self.tiles.clone();
        for row in 0..n {
            for col in 0..n {
                let tile = before[row * n + col];
                if clockwise {
                    self.set(col, n - 1 - row, tile);
                } else {
                    self.set(n - 1 - col, row, tile);
                }
            }
        }
    }

    /// Rotate the whole grid a half turn in place.
    ///
    /// Reversing the row-major buffer reverses both axes at once.
    pub fn rotate_half(&mut self) {
        self.tiles.reverse();
    }
}
