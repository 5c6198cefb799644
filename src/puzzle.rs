//! Puzzle kinds: the family selector handed in by configuration.
//!
//! The engine models the N x N cube family. The other WCA puzzles are
//! carried as opaque kinds so that callers can store and display them, but
//! constructing state or scrambles for them fails with a typed error.

use std::fmt;
use std::str::FromStr;

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Any twisty puzzle a caller might track.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PuzzleKind {
    /// A cube with the same number of pieces on each edge.
    Cube(usize),
    /// A tetrahedron with 3 pieces on each edge.
    Pyraminx,
    /// A dodecahedron with 3 pieces on each edge.
    Megaminx,
    /// A cube that rotates around its corners.
    Skewb,
    /// A shape-shifting cube.
    Square1,
    /// Some other puzzle that is not listed.
    Other(String),
}

impl PuzzleKind {
    /// The WCA cube sizes plus every fixed non-cube kind.
    #[must_use]
    pub fn all() -> Vec<PuzzleKind> {
        (2..=7)
            .map(PuzzleKind::Cube)
            .chain([
                PuzzleKind::Pyraminx,
                PuzzleKind::Megaminx,
                PuzzleKind::Skewb,
                PuzzleKind::Square1,
            ])
            .collect()
    }

    /// The name shown when picking a puzzle.
    #[must_use]
    pub fn display_name(&self) -> String {
        match self {
            PuzzleKind::Cube(size) => format!("{size}x{size}"),
            PuzzleKind::Pyraminx => "Pyraminx".to_owned(),
            PuzzleKind::Megaminx => "Megaminx".to_owned(),
            PuzzleKind::Skewb => "Skewb".to_owned(),
            PuzzleKind::Square1 => "Square-1".to_owned(),
            PuzzleKind::Other(_) => "Other".to_owned(),
        }
    }

    /// Whether this kind is in the cube family the engine models.
    #[must_use]
    pub fn is_cube(&self) -> bool {
        matches!(self, PuzzleKind::Cube(_))
    }

    /// The side length, for cube-family kinds.
    #[must_use]
    pub fn cube_size(&self) -> Option<usize> {
        match self {
            PuzzleKind::Cube(size) => Some(*size),
            _ => None,
        }
    }

    /// Parse a kind from its description. Never fails: unrecognized names
    /// become [`PuzzleKind::Other`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        if let Some((first, second)) = name.split_once('x') {
            if let (Ok(a), Ok(b)) = (first.parse::<usize>(), second.parse::<usize>()) {
                if a == b {
                    return PuzzleKind::Cube(a);
                }
            }
        }
        match name {
            "Pyraminx" => PuzzleKind::Pyraminx,
            "Megaminx" => PuzzleKind::Megaminx,
            "Skewb" => PuzzleKind::Skewb,
            "Square-1" => PuzzleKind::Square1,
            other => PuzzleKind::Other(other.to_owned()),
        }
    }
}

impl fmt::Display for PuzzleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PuzzleKind::Other(name) => f.write_str(name),
            _ => f.write_str(&self.display_name()),
        }
    }
}

impl FromStr for PuzzleKind {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(PuzzleKind::from_name(s))
    }
}

/// Serialized as the description string (`"3x3"`, `"Pyraminx"`, ...).
impl Serialize for PuzzleKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PuzzleKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(PuzzleKind::from_name(&name))
    }
}
