//! Move representation: face + direction + layer range.
//!
//! A move is the "verb" of the engine: which face pivots, which way it
//! turns, and how deep the turn reaches. Whole-puzzle reorientations
//! (`x`/`y`/`z`) are moves too, flagged so that applying one turns every
//! layer instead of a slab.
//!
//! Moves are small `Copy` values with field-wise equality and hashing, so
//! they (and the [`Algorithm`]s built from them) can key dictionaries.

pub mod algorithm;
pub mod notation;

pub use algorithm::{Algorithm, AlgorithmError};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::Tile;

/// Errors produced when constructing or parsing a [`Move`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MoveError {
    /// The text is not a well-formed move in standard notation.
    #[error("invalid move notation {0:?}")]
    InvalidNotation(String),
    /// The layer range is empty (lower bound above upper bound).
    #[error("invalid layer range: lower bound exceeds upper bound")]
    InvalidLayers,
}

/// Which way a move turns its face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// A quarter turn clockwise, as seen from outside the pivot face.
    Clockwise,
    /// A quarter turn counterclockwise.
    CounterClockwise,
    /// A half turn.
    Double,
}

impl Direction {
    /// The notation suffix for this direction.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Direction::Clockwise => "",
            Direction::CounterClockwise => "'",
            Direction::Double => "2",
        }
    }

    /// The direction that undoes this one. A half turn undoes itself.
    #[must_use]
    pub const fn reversed(self) -> Direction {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
            Direction::Double => Direction::Double,
        }
    }
}

/// An inclusive range of layer depths, 0-indexed from the pivot face.
///
/// Layer 0 is the pivot face's own outer layer; higher numbers reach
/// deeper into the puzzle. The range is never empty: `new` rejects
/// inverted bounds, and `usize` depths rule out negatives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LayerRange {
    start: usize,
    end: usize,
}

impl LayerRange {
    /// An inclusive range from `start` to `end`.
    pub const fn new(start: usize, end: usize) -> Result<Self, MoveError> {
        if start > end {
            return Err(MoveError::InvalidLayers);
        }
        Ok(Self { start, end })
    }

    /// The outer layer only: `0..=0`.
    #[must_use]
    pub const fn outer() -> Self {
        Self { start: 0, end: 0 }
    }

    /// A single layer: `layer..=layer`.
    #[must_use]
    pub const fn single(layer: usize) -> Self {
        Self {
            start: layer,
            end: layer,
        }
    }

    /// All layers from the surface down to `end` inclusive: `0..=end`.
    #[must_use]
    pub const fn to(end: usize) -> Self {
        Self { start: 0, end }
    }

    /// Shallowest layer in the range.
    #[must_use]
    pub const fn start(self) -> usize {
        self.start
    }

    /// Deepest layer in the range.
    #[must_use]
    pub const fn end(self) -> usize {
        self.end
    }

    /// Number of layers turned.
    #[must_use]
    pub const fn len(self) -> usize {
        self.end - self.start + 1
    }

    /// Always false; the type cannot represent an empty range.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        false
    }

    /// Whether `layer` falls inside the range.
    #[must_use]
    pub const fn contains(self, layer: usize) -> bool {
        self.start <= layer && layer <= self.end
    }

    /// Iterate the layer depths, shallowest first.
    pub fn iter(self) -> impl Iterator<Item = usize> {
        self.start..=self.end
    }
}

/// A single turn: pivot face, direction, and the layers that move.
///
/// ```
/// use cubekit::{Direction, LayerRange, Move, Tile};
///
/// let m = Move::new(Tile::Right, Direction::Clockwise, LayerRange::outer());
/// assert_eq!(m.to_string(), "R");
/// assert_eq!(m.reversed().to_string(), "R'");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    face: Tile,
    direction: Direction,
    layers: LayerRange,
    /// True for whole-puzzle reorientations (`x`/`y`/`z`).
    rotation: bool,
}

impl Move {
    /// A layer turn of `face` in `direction` over `layers`.
    #[must_use]
    pub const fn new(face: Tile, direction: Direction, layers: LayerRange) -> Self {
        Self {
            face,
            direction,
            layers,
            rotation: false,
        }
    }

    /// An outer-layer turn of `face`.
    #[must_use]
    pub const fn outer(face: Tile, direction: Direction) -> Self {
        Self::new(face, direction, LayerRange::outer())
    }

    /// A whole-puzzle reorientation about the axis through `face`.
    ///
    /// Axes are normalized to their canonical notation faces — Right (`x`),
    /// Up (`y`), Front (`z`) — so a rotation about Left clockwise becomes
    /// Right counterclockwise. This keeps equality aligned with physical
    /// equality and makes the print/parse round trip exact.
    #[must_use]
    pub const fn rotation(face: Tile, direction: Direction) -> Self {
        let (face, direction) = canonical_rotation(face, direction);
        Self {
            face,
            direction,
            layers: LayerRange::outer(),
            rotation: true,
        }
    }

    /// The pivot face (for rotations, the canonical axis face).
    #[must_use]
    pub const fn face(self) -> Tile {
        self.face
    }

    /// The turn direction.
    #[must_use]
    pub const fn direction(self) -> Direction {
        self.direction
    }

    /// The layers turned. For whole-puzzle rotations this is a placeholder
    /// (`0..=0`); applying the move expands it to every layer.
    #[must_use]
    pub const fn layers(self) -> LayerRange {
        self.layers
    }

    /// Whether this move reorients the whole puzzle.
    #[must_use]
    pub const fn is_rotation(self) -> bool {
        self.rotation
    }

    /// The move that undoes this one.
    #[must_use]
    pub const fn reversed(self) -> Move {
        Self {
            face: self.face,
            direction: self.direction.reversed(),
            layers: self.layers,
            rotation: self.rotation,
        }
    }
}

/// Normalize a rotation axis to its canonical notation face.
pub(crate) const fn canonical_rotation(face: Tile, direction: Direction) -> (Tile, Direction) {
    match face {
        Tile::Right | Tile::Up | Tile::Front => (face, direction),
        _ => (face.opposite(), direction.reversed()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_range_rejects_inverted_bounds() {
        assert_eq!(LayerRange::new(2, 1), Err(MoveError::InvalidLayers));
        assert!(LayerRange::new(1, 1).is_ok());
        assert!(LayerRange::new(0, 4).is_ok());
    }

    #[test]
    fn test_layer_range_accessors() {
        let range = LayerRange::new(1, 3).unwrap();
        assert_eq!(range.start(), 1);
        assert_eq!(range.end(), 3);
        assert_eq!(range.len(), 3);
        assert!(range.contains(2));
        assert!(!range.contains(0));
        assert!(!range.contains(4));
        assert_eq!(range.iter().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_reversed_is_involution() {
        let moves = [
            Move::outer(Tile::Right, Direction::Clockwise),
            Move::outer(Tile::Up, Direction::CounterClockwise),
            Move::new(Tile::Back, Direction::Double, LayerRange::single(2)),
            Move::rotation(Tile::Front, Direction::Clockwise),
        ];
        for m in moves {
            assert_eq!(m.reversed().reversed(), m);
        }
    }

    #[test]
    fn test_double_reverses_to_itself() {
        let m = Move::outer(Tile::Left, Direction::Double);
        assert_eq!(m.reversed(), m);
    }

    #[test]
    fn test_equality_is_field_wise() {
        let a = Move::new(Tile::Right, Direction::Clockwise, LayerRange::outer());
        let b = Move::new(Tile::Right, Direction::Clockwise, LayerRange::outer());
        let c = Move::new(Tile::Right, Direction::Clockwise, LayerRange::to(1));
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, Move::rotation(Tile::Right, Direction::Clockwise));
    }

    #[test]
    fn test_rotation_normalizes_axis() {
        let about_left = Move::rotation(Tile::Left, Direction::Clockwise);
        assert_eq!(
            about_left,
            Move::rotation(Tile::Right, Direction::CounterClockwise)
        );
        assert_eq!(about_left.face(), Tile::Right);

        let about_down = Move::rotation(Tile::Down, Direction::Double);
        assert_eq!(about_down.face(), Tile::Up);
        assert_eq!(about_down.direction(), Direction::Double);
    }
}
