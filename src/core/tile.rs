//! Face identities and sticker colors.
//!
//! ## Tile
//!
//! One of the six sides of a cube-family puzzle, and also the identity of a
//! single sticker on a face. Tiles are fixed at puzzle construction and never
//! change identity; only their positions in the grids move.
//!
//! ## Color
//!
//! The display color associated with each tile, for rendering layers that
//! want to paint the grids. The engine itself never interprets colors.

use serde::{Deserialize, Serialize};

/// A side of a cube, or the identity of a single sticker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tile {
    /// The "up" face.
    Up,
    /// The "front" face.
    Front,
    /// The "right" face.
    Right,
    /// The "down" face.
    Down,
    /// The "back" face.
    Back,
    /// The "left" face.
    Left,
}

impl Tile {
    /// All six tiles, in display order.
    pub const ALL: [Tile; 6] = [
        Tile::Up,
        Tile::Front,
        Tile::Right,
        Tile::Down,
        Tile::Back,
        Tile::Left,
    ];

    /// The notation letter for this face.
    ///
    /// ```
    /// use cubekit::Tile;
    ///
    /// assert_eq!(Tile::Right.letter(), 'R');
    /// assert_eq!(Tile::Back.letter(), 'B');
    /// ```
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Tile::Up => 'U',
            Tile::Front => 'F',
            Tile::Right => 'R',
            Tile::Down => 'D',
            Tile::Back => 'B',
            Tile::Left => 'L',
        }
    }

    /// Look up a tile by its uppercase notation letter.
    #[must_use]
    pub const fn from_letter(letter: char) -> Option<Tile> {
        match letter {
            'U' => Some(Tile::Up),
            'F' => Some(Tile::Front),
            'R' => Some(Tile::Right),
            'D' => Some(Tile::Down),
            'B' => Some(Tile::Back),
            'L' => Some(Tile::Left),
            _ => None,
        }
    }

    /// Human-readable face name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Tile::Up => "Up",
            Tile::Front => "Front",
            Tile::Right => "Right",
            Tile::Down => "Down",
            Tile::Back => "Back",
            Tile::Left => "Left",
        }
    }

    /// The display color of this face's stickers.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Tile::Up => Color::Yellow,
            Tile::Front => Color::Blue,
            Tile::Right => Color::Red,
            Tile::Down => Color::White,
            Tile::Back => Color::Green,
            Tile::Left => Color::Orange,
        }
    }

    /// An emoji square in this face's color, for text rendering.
    #[must_use]
    pub const fn color_emoji(self) -> &'static str {
        match self {
            Tile::Up => "\u{1F7E8}",    // yellow
            Tile::Front => "\u{1F7E6}", // blue
            Tile::Right => "\u{1F7E5}", // red
            Tile::Down => "\u{2B1B}",   // black (white reads poorly on light terminals)
            Tile::Back => "\u{1F7E9}",  // green
            Tile::Left => "\u{1F7E7}",  // orange
        }
    }

    /// The face on the opposite side of the puzzle.
    #[must_use]
    pub const fn opposite(self) -> Tile {
        match self {
            Tile::Up => Tile::Down,
            Tile::Down => Tile::Up,
            Tile::Front => Tile::Back,
            Tile::Back => Tile::Front,
            Tile::Right => Tile::Left,
            Tile::Left => Tile::Right,
        }
    }

    /// The four faces bordering this one, in display order
    /// (top, right, bottom, left as the face is drawn).
    #[must_use]
    pub const fn surrounding(self) -> [Tile; 4] {
        match self {
            Tile::Up => [Tile::Back, Tile::Right, Tile::Front, Tile::Left],
            Tile::Front => [Tile::Up, Tile::Right, Tile::Down, Tile::Left],
            Tile::Right => [Tile::Up, Tile::Back, Tile::Down, Tile::Front],
            Tile::Down => [Tile::Front, Tile::Right, Tile::Back, Tile::Left],
            Tile::Back => [Tile::Up, Tile::Left, Tile::Down, Tile::Right],
            Tile::Left => [Tile::Up, Tile::Front, Tile::Down, Tile::Back],
        }
    }

    /// Index into `[T; 6]` storage keyed by tile.
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Tile::Up => 0,
            Tile::Front => 1,
            Tile::Right => 2,
            Tile::Down => 3,
            Tile::Back => 4,
            Tile::Left => 5,
        }
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A sticker display color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Yellow,
    Blue,
    Red,
    White,
    Green,
    Orange,
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Red => "red",
            Color::White => "white",
            Color::Green => "green",
            Color::Orange => "orange",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_round_trip() {
        for tile in Tile::ALL {
            assert_eq!(Tile::from_letter(tile.letter()), Some(tile));
        }
        assert_eq!(Tile::from_letter('M'), None);
        assert_eq!(Tile::from_letter('u'), None);
    }

    #[test]
    fn test_opposite_is_involution() {
        for tile in Tile::ALL {
            assert_eq!(tile.opposite().opposite(), tile);
            assert_ne!(tile.opposite(), tile);
        }
    }

    #[test]
    fn test_surrounding_excludes_self_and_opposite() {
        for tile in Tile::ALL {
            let around = tile.surrounding();
            assert!(!around.contains(&tile));
            assert!(!around.contains(&tile.opposite()));
        }
    }

    #[test]
    fn test_colors_are_distinct() {
        for a in Tile::ALL {
            for b in Tile::ALL {
                if a != b {
                    assert_ne!(a.color(), b.color());
                }
            }
        }
    }

    #[test]
    fn test_index_covers_all_slots() {
        let mut seen = [false; 6];
        for tile in Tile::ALL {
            seen[tile.index()] = true;
        }
        assert_eq!(seen, [true; 6]);
    }
}
