//! Cube state: six face grids and the move-application algorithm.
//!
//! ## State
//!
//! A [`Cube`] owns one [`Face`] grid per [`Tile`], all of side length
//! `size`. It is created solved and mutated only by applying moves; a move
//! either applies fully or fails and leaves the state untouched.
//!
//! ## Move application
//!
//! Turning a face permutes slices of its four neighbors. The permutation is
//! driven by a fixed adjacency table: for each pivot face, four
//! `(destination, destination edge, source, source edge)` tuples in cyclic
//! order. Clockwise turns copy source to destination; counterclockwise
//! turns swap the roles; half turns run two clockwise passes. Every pass
//! reads from a snapshot taken before it, never from live grids — several
//! faces are both source and destination within one turn.
//!
//! The table is derived from the cube's geometry with every grid stored as
//! seen from outside the puzzle (grid-up of Up is Back, of Down is Front,
//! of the side faces is Up) and slices read clockwise around their face.
//! Under those conventions every neighbor-to-neighbor copy is
//! order-preserving, which the face and cube tests verify exhaustively.

pub mod face;

pub use face::{Edge, Face, Slice};

use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::Tile;
use crate::moves::{Algorithm, AlgorithmError, Direction, LayerRange, Move};
use crate::puzzle::PuzzleKind;

/// Errors produced when building a [`Cube`] or applying moves to it.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CubeError {
    /// The requested side length is below the 2x2 minimum.
    #[error("cube size {0} is not supported; the smallest cube is 2x2")]
    InvalidSize(usize),
    /// The puzzle kind is not in the cube family.
    #[error("{0} is not a cube-family puzzle")]
    UnsupportedPuzzle(PuzzleKind),
    /// The move addresses a layer the cube does not have.
    #[error("move {0} addresses layers beyond a {1}x{1} cube")]
    InvalidMove(Move, usize),
    /// A move inside an algorithm failed; the cube was rolled back.
    #[error("algorithm invalid at move {index}: {source}")]
    InvalidAlgorithm {
        /// Position of the failing move in the sequence.
        index: usize,
        /// The underlying move failure.
        #[source]
        source: Box<CubeError>,
    },
    /// The text handed to [`Cube::apply_notation`] is not a well-formed
    /// algorithm.
    #[error(transparent)]
    Notation(#[from] AlgorithmError),
}

/// Per-face grid storage with O(1) access, indexed by [`Tile`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaceMap {
    faces: [Face; 6],
}

impl FaceMap {
    /// Six solved grids of the given side length, each filled with its own
    /// face identity.
    #[must_use]
    pub fn solved(size: usize) -> Self {
        Self {
            faces: Tile::ALL.map(|tile| Face::solid(tile, size)),
        }
    }

    /// Iterate over `(tile, grid)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Tile, &Face)> {
        Tile::ALL.iter().map(move |&tile| (tile, &self[tile]))
    }
}

impl Index<Tile> for FaceMap {
    type Output = Face;

    fn index(&self, tile: Tile) -> &Face {
        &self.faces[tile.index()]
    }
}

impl IndexMut<Tile> for FaceMap {
    fn index_mut(&mut self, tile: Tile) -> &mut Face {
        &mut self.faces[tile.index()]
    }
}

/// One neighbor-slice copy: (destination face, destination edge,
/// source face, source edge).
type SliceHop = (Tile, Edge, Tile, Edge);

/// The four neighbor copies performed by a clockwise turn of each pivot
/// face, in cyclic order. Counterclockwise turns use the same tuples with
/// source and destination swapped.
const fn adjacency(pivot: Tile) -> [SliceHop; 4] {
    use Edge::{Down, Left, Right, Up};
    use Tile as T;
    match pivot {
        T::Up => [
            (T::Front, Up, T::Right, Up),
            (T::Right, Up, T::Back, Up),
            (T::Back, Up, T::Left, Up),
            (T::Left, Up, T::Front, Up),
        ],
        T::Front => [
            (T::Up, Down, T::Left, Right),
            (T::Left, Right, T::Down, Up),
            (T::Down, Up, T::Right, Left),
            (T::Right, Left, T::Up, Down),
        ],
        T::Right => [
            (T::Up, Right, T::Front, Right),
            (T::Front, Right, T::Down, Right),
            (T::Down, Right, T::Back, Left),
            (T::Back, Left, T::Up, Right),
        ],
        T::Down => [
            (T::Front, Down, T::Left, Down),
            (T::Left, Down, T::Back, Down),
            (T::Back, Down, T::Right, Down),
            (T::Right, Down, T::Front, Down),
        ],
        T::Back => [
            (T::Up, Up, T::Right, Right),
            (T::Right, Right, T::Down, Down),
            (T::Down, Down, T::Left, Left),
            (T::Left, Left, T::Up, Up),
        ],
        T::Left => [
            (T::Up, Left, T::Back, Right),
            (T::Back, Right, T::Down, Left),
            (T::Down, Left, T::Front, Left),
            (T::Front, Left, T::Up, Left),
        ],
    }
}

/// An N x N cube-shaped twisty puzzle.
///
/// ```
/// use cubekit::Cube;
///
/// let mut cube = Cube::new(3).unwrap();
/// assert!(cube.is_solved());
///
/// cube.apply_notation("R U R' U'").unwrap();
/// assert!(!cube.is_solved());
///
/// // The sexy move has order six; five more repetitions restore it.
/// for _ in 0..5 {
///     cube.apply_notation("R U R' U'").unwrap();
/// }
/// assert!(cube.is_solved());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cube {
    kind: PuzzleKind,
    size: usize,
    faces: FaceMap,
}

impl Cube {
    /// A solved cube with `size` pieces on each edge.
    pub fn new(size: usize) -> Result<Self, CubeError> {
        if size < 2 {
            return Err(CubeError::InvalidSize(size));
        }
        Ok(Self {
            kind: PuzzleKind::Cube(size),
            size,
            faces: FaceMap::solved(size),
        })
    }

    /// A solved cube for a cube-family [`PuzzleKind`].
    pub fn for_puzzle(kind: &PuzzleKind) -> Result<Self, CubeError> {
        match kind {
            PuzzleKind::Cube(size) => Self::new(*size),
            other => Err(CubeError::UnsupportedPuzzle(other.clone())),
        }
    }

    /// Side length of the cube.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// The puzzle kind this cube models.
    #[must_use]
    pub fn kind(&self) -> &PuzzleKind {
        &self.kind
    }

    /// The grid currently shown on `tile`'s side.
    #[must_use]
    pub fn face(&self, tile: Tile) -> &Face {
        &self.faces[tile]
    }

    /// All six grids, for rendering layers.
    #[must_use]
    pub fn faces(&self) -> &FaceMap {
        &self.faces
    }

    /// True when every face shows a single color.
    ///
    /// Uniform faces are accepted in any orientation, so a solved cube
    /// stays solved under whole-puzzle rotations.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        Tile::ALL.iter().all(|&tile| self.faces[tile].is_uniform())
    }

    /// Apply a single move.
    ///
    /// Fails with [`CubeError::InvalidMove`] if the move addresses a layer
    /// outside `0..size`, leaving the cube untouched.
    pub fn apply(&mut self, mv: &Move) -> Result<(), CubeError> {
        let layers = self.effective_layers(mv)?;
        match mv.direction() {
            Direction::Clockwise => self.quarter_turn(mv.face(), layers, true),
            Direction::CounterClockwise => self.quarter_turn(mv.face(), layers, false),
            Direction::Double => {
                // Two quarter turns, each from a fresh snapshot.
                self.quarter_turn(mv.face(), layers, true);
                self.quarter_turn(mv.face(), layers, true);
            }
        }
        Ok(())
    }

    /// Apply every move of an algorithm, atomically.
    ///
    /// On the first failing move the cube is rolled back to the state it
    /// held before the algorithm started, and the error reports the index
    /// of the offending move.
    pub fn apply_algorithm(&mut self, algorithm: &Algorithm) -> Result<(), CubeError> {
        let before = self.faces.clone();
        for (index, mv) in algorithm.moves().iter().enumerate() {
            if let Err(source) = self.apply(mv) {
                self.faces = before;
                return Err(CubeError::InvalidAlgorithm {
                    index,
                    source: Box::new(source),
                });
            }
        }
        Ok(())
    }

    /// Parse `text` as an algorithm and apply it atomically.
    pub fn apply_notation(&mut self, text: &str) -> Result<(), CubeError> {
        let algorithm = Algorithm::parse(text)?;
        self.apply_algorithm(&algorithm)
    }

    /// The layers a move actually turns on this cube.
    fn effective_layers(&self, mv: &Move) -> Result<LayerRange, CubeError> {
        if mv.is_rotation() {
            return Ok(LayerRange::to(self.size - 1));
        }
        let layers = mv.layers();
        if layers.end() >= self.size {
            return Err(CubeError::InvalidMove(*mv, self.size));
        }
        Ok(layers)
    }

    /// One quarter turn of `pivot` over `layers`.
    fn quarter_turn(&mut self, pivot: Tile, layers: LayerRange, clockwise: bool) {
        let before = self.faces.clone();

        if layers.contains(0) {
            self.faces[pivot].rotate_quarter(clockwise);
        }
        // A turn reaching the deepest layer carries the opposite face's own
        // stickers with it, rotating the other way as seen from outside.
        if layers.contains(self.size - 1) {
            self.faces[pivot.opposite()].rotate_quarter(!clockwise);
        }

        for layer in layers.iter() {
            for &(dst, dst_edge, src, src_edge) in adjacency(pivot).iter() {
                if clockwise {
                    let slice = before[src].get_slice(src_edge, layer);
                    self.faces[dst].set_slice(dst_edge, layer, &slice);
                } else {
                    let slice = before[dst].get_slice(dst_edge, layer);
                    self.faces[src].set_slice(src_edge, layer, &slice);
                }
            }
        }
    }

    /// Render the cube as an unfolded text net.
    ///
    /// The Back block is drawn mirrored above the Left/Up/Right/Down strip,
    /// with Front below — the layout reads naturally when the net is folded
    /// around the Up face. `colored` swaps face letters for emoji squares.
    #[must_use]
    pub fn net(&self, colored: bool) -> String {
        let n = self.size;
        let cell = |tile: Tile| -> &str {
            if colored {
                tile.color_emoji()
            } else {
                match tile {
                    Tile::Up => "U",
                    Tile::Front => "F",
                    Tile::Right => "R",
                    Tile::Down => "D",
                    Tile::Back => "B",
                    Tile::Left => "L",
                }
            }
        };
        let pad = if colored { "\u{25FB}\u{FE0F}" } else { " " };

        let mut out = String::new();
        for row in (0..n).rev() {
            out.push_str(&pad.repeat(n));
            for col in (0..n).rev() {
                out.push_str(cell(self.faces[Tile::Back].get(row, col)));
            }
            out.push_str(&pad.repeat(n * 2));
            out.push('\n');
        }
        for row in 0..n {
            for r in (0..n).rev() {
                out.push_str(cell(self.faces[Tile::Left].get(r, row)));
            }
            for col in 0..n {
                out.push_str(cell(self.faces[Tile::Up].get(row, col)));
            }
            for r in 0..n {
                out.push_str(cell(self.faces[Tile::Right].get(r, n - 1 - row)));
            }
            for col in (0..n).rev() {
                out.push_str(cell(self.faces[Tile::Down].get(n - 1 - row, col)));
            }
            out.push('\n');
        }
        for row in 0..n {
            out.push_str(&pad.repeat(n));
            for col in 0..n {
                out.push_str(cell(self.faces[Tile::Front].get(row, col)));
            }
            out.push_str(&pad.repeat(n * 2));
            out.push('\n');
        }
        out
    }
}

impl std::fmt::Display for Cube {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.net(false))
    }
}
