//! The move-notation grammar: parsing and canonical printing.
//!
//! ## Grammar
//!
//! ```text
//! move      := prefix? letter wide? modifier?
//! prefix    := digits | digits '-' digits      (1-indexed layer bounds, a <= b)
//! letter    := 'U'|'F'|'R'|'D'|'B'|'L'         outer-layer turn
//!            | 'u'|'f'|'r'|'d'|'b'|'l'         wide turn of the outer two layers
//!            | 'M'|'E'|'S'                     middle slice (Left/Down/Front axis)
//!            | 'x'|'y'|'z'                     whole-puzzle rotation
//! wide      := 'w'                             capital letters only; depth = prefix (default 2)
//! modifier  := '\''                            counterclockwise
//!            | '2'                             half turn
//! ```
//!
//! Digit prefixes and `w` combine only with capital face letters. Parsing is
//! puzzle-size-agnostic; whether a layer exists on a given cube is checked
//! when the move is applied.
//!
//! ## Printing
//!
//! [`Move::notation`] emits the most compact spelling for a given puzzle
//! size and is the exact inverse of parsing: `parse(m.notation(n)) == m`
//! for every constructible move.

use std::fmt;
use std::str::FromStr;

use crate::core::Tile;

use super::{canonical_rotation, Direction, LayerRange, Move, MoveError};

impl Move {
    /// Parse a single move from standard notation.
    ///
    /// ```
    /// use cubekit::{Direction, Move, Tile};
    ///
    /// let m = Move::parse("3Rw2").unwrap();
    /// assert_eq!(m.face(), Tile::Right);
    /// assert_eq!(m.direction(), Direction::Double);
    /// assert_eq!((m.layers().start(), m.layers().end()), (0, 2));
    /// ```
    pub fn parse(text: &str) -> Result<Move, MoveError> {
        let invalid = || MoveError::InvalidNotation(text.to_owned());

        let mut chars = text.chars().peekable();

        let mut first = String::new();
        while let Some(&c) = chars.peek() {
            if !c.is_ascii_digit() {
                break;
            }
            first.push(c);
            chars.next();
        }

        let mut second = String::new();
        if chars.peek() == Some(&'-') {
            if first.is_empty() {
                return Err(invalid());
            }
            chars.next();
            while let Some(&c) = chars.peek() {
                if !c.is_ascii_digit() {
                    break;
                }
                second.push(c);
                chars.next();
            }
            if second.is_empty() {
                return Err(invalid());
            }
        }

        let letter = chars.next().ok_or_else(invalid)?;

        let mut wide = false;
        if chars.peek() == Some(&'w') {
            chars.next();
            wide = true;
        }

        let direction = match chars.next() {
            None => Direction::Clockwise,
            Some('\'') => Direction::CounterClockwise,
            Some('2') => Direction::Double,
            Some(_) => return Err(invalid()),
        };
        if chars.next().is_some() {
            return Err(invalid());
        }

        // Notation is 1-indexed, so a bound of zero is malformed.
        let first = match first.as_str() {
            "" => None,
            digits => Some(digits.parse::<usize>().map_err(|_| invalid())?),
        };
        let second = match second.as_str() {
            "" => None,
            digits => Some(digits.parse::<usize>().map_err(|_| invalid())?),
        };
        if first == Some(0) || second == Some(0) {
            return Err(invalid());
        }

        if let Some(face) = Tile::from_letter(letter) {
            let layers = if wide {
                if second.is_some() {
                    return Err(invalid());
                }
                LayerRange::to(first.unwrap_or(2) - 1)
            } else {
                match (first, second) {
                    (Some(a), Some(b)) => {
                        if a > b {
                            return Err(invalid());
                        }
                        LayerRange::new(a - 1, b - 1).map_err(|_| invalid())?
                    }
                    (Some(a), None) => LayerRange::single(a - 1),
                    (None, _) => LayerRange::outer(),
                }
            };
            return Ok(Move::new(face, direction, layers));
        }

        // Everything below admits neither digit prefixes nor a wide suffix.
        if first.is_some() || second.is_some() || wide {
            return Err(invalid());
        }

        match letter {
            'u' | 'f' | 'r' | 'd' | 'b' | 'l' => {
                let face = Tile::from_letter(letter.to_ascii_uppercase()).ok_or_else(invalid)?;
                Ok(Move::new(face, direction, LayerRange::to(1)))
            }
            'M' => Ok(Move::new(Tile::Left, direction, LayerRange::single(1))),
            'E' => Ok(Move::new(Tile::Down, direction, LayerRange::single(1))),
            'S' => Ok(Move::new(Tile::Front, direction, LayerRange::single(1))),
            'x' => Ok(Move::rotation(Tile::Right, direction)),
            'y' => Ok(Move::rotation(Tile::Up, direction)),
            'z' => Ok(Move::rotation(Tile::Front, direction)),
            _ => Err(invalid()),
        }
    }

    /// Render this move in the most compact notation for a puzzle of side
    /// length `size`.
    ///
    /// The slice letters `M`/`E`/`S` only exist on a 3x3, so the same move
    /// prints differently in different size contexts (`M'` on a 3x3 is
    /// `2L'` on a 5x5); both spellings parse back to the same move.
    #[must_use]
    pub fn notation(&self, size: usize) -> String {
        let suffix = self.direction().suffix();

        if self.is_rotation() {
            let (face, direction) = canonical_rotation(self.face(), self.direction());
            let letter = match face {
                Tile::Right => 'x',
                Tile::Up => 'y',
                _ => 'z',
            };
            return format!("{letter}{}", direction.suffix());
        }

        let layers = self.layers();
        let letter = self.face().letter();
        if layers == LayerRange::outer() {
            format!("{letter}{suffix}")
        } else if layers == LayerRange::to(1) {
            format!("{}{suffix}", letter.to_ascii_lowercase())
        } else if size == 3 && layers == LayerRange::single(1) {
            match self.face() {
                Tile::Left => format!("M{suffix}"),
                Tile::Down => format!("E{suffix}"),
                Tile::Front => format!("S{suffix}"),
                _ => format!("2{letter}{suffix}"),
            }
        } else if layers.len() == 1 {
            format!("{}{letter}{suffix}", layers.start() + 1)
        } else if layers.start() == 0 {
            format!("{}{letter}w{suffix}", layers.end() + 1)
        } else {
            format!(
                "{}-{}{letter}{suffix}",
                layers.start() + 1,
                layers.end() + 1
            )
        }
    }
}

impl FromStr for Move {
    type Err = MoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Move::parse(s)
    }
}

impl fmt::Display for Move {
    /// Renders with a 3x3 size context; use [`Move::notation`] to pick the
    /// context explicitly.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.notation(3))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(text: &str) -> Move {
        Move::parse(text).unwrap()
    }

    #[test]
    fn test_parse_outer_turns() {
        assert_eq!(
            parsed("R"),
            Move::outer(Tile::Right, Direction::Clockwise)
        );
        assert_eq!(
            parsed("U'"),
            Move::outer(Tile::Up, Direction::CounterClockwise)
        );
        assert_eq!(parsed("B2"), Move::outer(Tile::Back, Direction::Double));
    }

    #[test]
    fn test_parse_lowercase_wide() {
        let m = parsed("r'");
        assert_eq!(m.face(), Tile::Right);
        assert_eq!(m.direction(), Direction::CounterClockwise);
        assert_eq!(m.layers(), LayerRange::to(1));
    }

    #[test]
    fn test_parse_wide_with_depth() {
        assert_eq!(
            parsed("3Rw2"),
            Move::new(Tile::Right, Direction::Double, LayerRange::to(2))
        );
        // Bare `w` defaults to the outer two layers.
        assert_eq!(parsed("Rw"), parsed("r"));
    }

    #[test]
    fn test_parse_single_inner_layer() {
        assert_eq!(
            parsed("2R"),
            Move::new(Tile::Right, Direction::Clockwise, LayerRange::single(1))
        );
        assert_eq!(
            parsed("4L'"),
            Move::new(
                Tile::Left,
                Direction::CounterClockwise,
                LayerRange::single(3)
            )
        );
    }

    #[test]
    fn test_parse_explicit_range() {
        assert_eq!(
            parsed("2-3R2"),
            Move::new(
                Tile::Right,
                Direction::Double,
                LayerRange::new(1, 2).unwrap()
            )
        );
    }

    #[test]
    fn test_parse_slice_moves() {
        assert_eq!(
            parsed("M'"),
            Move::new(
                Tile::Left,
                Direction::CounterClockwise,
                LayerRange::single(1)
            )
        );
        assert_eq!(
            parsed("E"),
            Move::new(Tile::Down, Direction::Clockwise, LayerRange::single(1))
        );
        assert_eq!(
            parsed("S2"),
            Move::new(Tile::Front, Direction::Double, LayerRange::single(1))
        );
    }

    #[test]
    fn test_parse_rotations() {
        let x = parsed("x");
        assert!(x.is_rotation());
        assert_eq!(x.face(), Tile::Right);
        assert_eq!(parsed("y'").face(), Tile::Up);
        assert_eq!(parsed("z2").direction(), Direction::Double);
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        for bad in [
            "", "T", "R3", "R'2", "R22", "3-2R", "0R", "2-0R", "-3R", "3-R", "2M", "Mw", "3x",
            "rw", "xw", "RU", "R ",
        ] {
            assert_eq!(
                Move::parse(bad),
                Err(MoveError::InvalidNotation(bad.to_owned())),
                "expected {bad:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_notation_picks_compact_forms() {
        assert_eq!(parsed("R").notation(3), "R");
        assert_eq!(parsed("r2").notation(4), "r2");
        assert_eq!(parsed("3Uw'").notation(5), "3Uw'");
        assert_eq!(parsed("2-3R2").notation(5), "2-3R2");
        assert_eq!(parsed("x'").notation(3), "x'");
    }

    #[test]
    fn test_notation_slice_letters_depend_on_size() {
        let m = Move::new(
            Tile::Left,
            Direction::CounterClockwise,
            LayerRange::single(1),
        );
        assert_eq!(m.notation(3), "M'");
        assert_eq!(m.notation(5), "2L'");

        // Middle layers on non-slice faces never print as slice letters.
        let r_mid = Move::new(Tile::Right, Direction::Clockwise, LayerRange::single(1));
        assert_eq!(r_mid.notation(3), "2R");
    }

    #[test]
    fn test_display_uses_three_by_three_context() {
        assert_eq!(parsed("M'").to_string(), "M'");
        assert_eq!(parsed("R2").to_string(), "R2");
    }

    #[test]
    fn test_round_trip_concrete_moves() {
        for text in ["R", "U'", "F2", "r", "d'", "M", "E'", "S2", "x", "y2", "z'", "2R", "3L'",
            "3Fw", "4Bw2", "2-3R2", "2-2D'"]
        {
            let m = parsed(text);
            for size in 2..=7 {
                assert_eq!(Move::parse(&m.notation(size)), Ok(m), "via size {size}");
            }
        }
    }
}
