//! Core engine types: face identities, colors, deterministic RNG.
//!
//! This module contains the fundamental building blocks shared by every
//! other part of the engine. Nothing in here knows about grids, moves, or
//! notation.

pub mod rng;
pub mod tile;

pub use rng::ScrambleRng;
pub use tile::{Color, Tile};
