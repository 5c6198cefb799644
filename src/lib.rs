//! # cubekit
//!
//! A twisty-puzzle state engine: an N x N cube model, a move-notation
//! parser/printer, a composable algorithm abstraction, and a scramble
//! generator.
//!
//! ## Design Principles
//!
//! 1. **Pure and synchronous**: every operation is a plain function or a
//!    local mutation. No I/O, no suspension points, no shared state across
//!    calls. A [`Cube`] is exclusively owned by its caller.
//!
//! 2. **Typed failures**: parsing and apply-time failures surface as typed
//!    errors, never silent defaults. Applying an algorithm is atomic — it
//!    fully applies or rolls back.
//!
//! 3. **Seedable randomness**: scrambles are driven by [`ScrambleRng`], so
//!    the same seed always reproduces the same scramble.
//!
//! ## Architecture
//!
//! Data flows one direction: text <-> [`Move`] <-> [`Algorithm`] ->
//! [`Cube`] -> face grids. The scrambler produces an [`Algorithm`];
//! callers apply it to a fresh [`Cube`] and paint the resulting grids.
//!
//! ```
//! use cubekit::{scramble_with, Cube, PuzzleKind, ScrambleRng};
//!
//! let kind = PuzzleKind::Cube(3);
//! let algorithm = scramble_with(&kind, &mut ScrambleRng::new(42)).unwrap();
//!
//! let mut cube = Cube::for_puzzle(&kind).unwrap();
//! cube.apply_algorithm(&algorithm).unwrap();
//! println!("{}", algorithm.notation(cube.size()));
//! println!("{cube}");
//! ```
//!
//! ## Modules
//!
//! - `core`: face identities, colors, deterministic RNG
//! - `moves`: moves, the notation grammar, algorithms
//! - `cube`: face grids and the move-application algorithm
//! - `puzzle`: the puzzle-kind selector
//! - `scramble`: scramble generation

pub mod core;
pub mod cube;
pub mod moves;
pub mod puzzle;
pub mod scramble;

// Re-export commonly used types
pub use crate::core::{Color, ScrambleRng, Tile};
pub use crate::cube::{Cube, CubeError, Edge, Face, FaceMap, Slice};
pub use crate::moves::{
    Algorithm, AlgorithmError, Direction, LayerRange, Move, MoveError,
};
pub use crate::puzzle::PuzzleKind;
pub use crate::scramble::{scramble, scramble_with, ScrambleError};
