//! Scramble generation.
//!
//! A scramble is a random [`Algorithm`] long enough to randomize a solved
//! cube for practice timing: `size * 12 - 15` moves (21 on a 3x3). Each
//! move picks a random direction, a random outward-contiguous layer range,
//! and a random face — re-rolled while it would repeat the previous move's
//! face on the same layer range, the minimal "don't turn the same slab
//! twice in a row" heuristic. Generation is greedy and single-pass; there
//! is no lookahead or cancellation detection.

use thiserror::Error;

use crate::core::{ScrambleRng, Tile};
use crate::moves::{Algorithm, Direction, LayerRange, Move};
use crate::puzzle::PuzzleKind;

/// Errors produced when generating a scramble.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ScrambleError {
    /// No scrambler exists for this puzzle kind.
    #[error("no scrambler exists for {0}")]
    UnsupportedPuzzle(PuzzleKind),
}

/// Generate a scramble for `kind`, seeded from entropy.
pub fn scramble(kind: &PuzzleKind) -> Result<Algorithm, ScrambleError> {
    scramble_with(kind, &mut ScrambleRng::from_entropy())
}

/// Generate a scramble for `kind` using the given RNG.
///
/// The same seed, kind, and size always produce the same algorithm.
///
/// ```
/// use cubekit::{scramble_with, PuzzleKind, ScrambleRng};
///
/// let kind = PuzzleKind::Cube(3);
/// let a = scramble_with(&kind, &mut ScrambleRng::new(9)).unwrap();
/// let b = scramble_with(&kind, &mut ScrambleRng::new(9)).unwrap();
/// assert_eq!(a, b);
/// assert_eq!(a.len(), 21);
/// ```
pub fn scramble_with(
    kind: &PuzzleKind,
    rng: &mut ScrambleRng,
) -> Result<Algorithm, ScrambleError> {
    let size = match kind {
        PuzzleKind::Cube(size) if *size >= 2 => *size,
        other => return Err(ScrambleError::UnsupportedPuzzle(other.clone())),
    };

    let length = size * 12 - 15;
    let mut moves = Vec::with_capacity(length);
    let mut previous: Option<(Tile, LayerRange)> = None;

    for _ in 0..length {
        let direction = match rng.gen_range(0..3) {
            0 => Direction::Clockwise,
            1 => Direction::CounterClockwise,
            _ => Direction::Double,
        };
        // Outward-contiguous ranges only, capped at half depth: anything
        // deeper is the same turn seen from the opposite face.
        let layers = LayerRange::to(rng.gen_range(0..size / 2));

        let face = loop {
            let face = Tile::ALL[rng.gen_range(0..Tile::ALL.len())];
            match previous {
                Some((last_face, last_layers)) if last_layers == layers && last_face == face => {
                    continue
                }
                _ => break face,
            }
        };

        previous = Some((face, layers));
        moves.push(Move::new(face, direction, layers));
    }

    Ok(Algorithm::new(moves))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_scramble() {
        for kind in [PuzzleKind::Cube(2), PuzzleKind::Cube(3), PuzzleKind::Cube(5)] {
            let a = scramble_with(&kind, &mut ScrambleRng::new(1234)).unwrap();
            let b = scramble_with(&kind, &mut ScrambleRng::new(1234)).unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_length_scales_with_size() {
        for (size, expected) in [(2, 9), (3, 21), (4, 33), (7, 69)] {
            let alg =
                scramble_with(&PuzzleKind::Cube(size), &mut ScrambleRng::new(7)).unwrap();
            assert_eq!(alg.len(), expected);
        }
    }

    #[test]
    fn test_no_repeated_face_on_same_layers() {
        let alg = scramble_with(&PuzzleKind::Cube(5), &mut ScrambleRng::new(99)).unwrap();
        for pair in alg.moves().windows(2) {
            let same_slab =
                pair[0].face() == pair[1].face() && pair[0].layers() == pair[1].layers();
            assert!(!same_slab, "consecutive moves {} {} turn the same slab", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_layer_ranges_stay_in_outer_half() {
        let alg = scramble_with(&PuzzleKind::Cube(7), &mut ScrambleRng::new(5)).unwrap();
        for mv in alg.moves() {
            assert_eq!(mv.layers().start(), 0);
            assert!(mv.layers().end() < 3);
        }
    }

    #[test]
    fn test_scramble_randomizes_a_solved_cube() {
        use crate::cube::Cube;

        let alg = scramble_with(&PuzzleKind::Cube(3), &mut ScrambleRng::new(42)).unwrap();
        let mut cube = Cube::new(3).unwrap();
        cube.apply_algorithm(&alg).unwrap();
        assert!(!cube.is_solved());

        // Undoing the scramble restores the solved state.
        cube.apply_algorithm(&alg.reversed()).unwrap();
        assert!(cube.is_solved());
    }

    #[test]
    fn test_unsupported_kinds_are_rejected() {
        for kind in [
            PuzzleKind::Pyraminx,
            PuzzleKind::Megaminx,
            PuzzleKind::Skewb,
            PuzzleKind::Square1,
            PuzzleKind::Other("Clock".to_owned()),
            PuzzleKind::Cube(1),
        ] {
            assert_eq!(
                scramble_with(&kind, &mut ScrambleRng::new(0)),
                Err(ScrambleError::UnsupportedPuzzle(kind.clone()))
            );
        }
    }
}
