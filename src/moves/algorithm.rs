//! Algorithms: ordered move sequences with grouping triggers.
//!
//! ## Triggers
//!
//! Speedcubers annotate well-known sub-sequences ("triggers") with
//! parentheses: `R U (R' U') R U R'`. A trigger index marks the position
//! *between* moves where a parenthesis sits; rendering toggles open/close
//! marks as indices are encountered. Triggers are purely cosmetic — two
//! algorithms with the same moves and different triggers are equal and
//! hash identically, so an [`Algorithm`] can key a dictionary of named
//! sequences regardless of how it was written.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{Move, MoveError};

/// Errors produced when constructing or parsing an [`Algorithm`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AlgorithmError {
    /// A token in the text does not parse as a move.
    #[error("invalid move {token:?} in algorithm")]
    InvalidMove {
        /// The offending whitespace-separated token, parens included.
        token: String,
        /// The underlying notation error.
        #[source]
        source: MoveError,
    },
    /// A trigger index lies beyond the end of the move sequence.
    #[error("trigger index {index} out of range for {len} moves")]
    InvalidTrigger { index: usize, len: usize },
}

/// An ordered sequence of moves, optionally annotated with trigger marks.
///
/// ```
/// use cubekit::Algorithm;
///
/// let sexy: Algorithm = "R U R' U'".parse().unwrap();
/// assert_eq!(sexy.len(), 4);
/// assert_eq!(sexy.reversed().to_string(), "U R U' R'");
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Algorithm {
    moves: Vec<Move>,
    /// Positions in `[0, moves.len()]` where grouping marks toggle.
    triggers: Vec<usize>,
}

impl Algorithm {
    /// An algorithm from a plain move sequence, with no triggers.
    #[must_use]
    pub fn new(moves: Vec<Move>) -> Self {
        Self {
            moves,
            triggers: Vec::new(),
        }
    }

    /// An algorithm with explicit trigger positions.
    ///
    /// Every trigger index must be at most `moves.len()`.
    pub fn with_triggers(moves: Vec<Move>, triggers: Vec<usize>) -> Result<Self, AlgorithmError> {
        let len = moves.len();
        if let Some(&index) = triggers.iter().find(|&&t| t > len) {
            return Err(AlgorithmError::InvalidTrigger { index, len });
        }
        Ok(Self { moves, triggers })
    }

    /// The move sequence.
    #[must_use]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Trigger positions, in the order they were recorded.
    #[must_use]
    pub fn triggers(&self) -> &[usize] {
        &self.triggers
    }

    /// Number of moves.
    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// True if the algorithm holds no moves.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Append a move.
    pub fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    /// The algorithm that undoes this one: moves in reverse order, each
    /// reversed. Triggers are rendering metadata and are not carried over.
    #[must_use]
    pub fn reversed(&self) -> Algorithm {
        Algorithm::new(self.moves.iter().rev().map(|m| m.reversed()).collect())
    }

    /// Parse a whitespace-separated algorithm.
    ///
    /// Leading `(` characters on a token record a trigger before the
    /// token's move; trailing `)` characters record one after it. A token
    /// that is only parentheses contributes its triggers and no move. Any
    /// other token that fails to parse as a move fails the whole parse.
    pub fn parse(text: &str) -> Result<Algorithm, AlgorithmError> {
        let mut algorithm = Algorithm::default();
        for raw in text.split_whitespace() {
            let mut token = raw;
            while let Some(rest) = token.strip_prefix('(') {
                algorithm.triggers.push(algorithm.moves.len());
                token = rest;
            }
            let mut trailing = 0;
            while let Some(rest) = token.strip_suffix(')') {
                trailing += 1;
                token = rest;
            }
            if !token.is_empty() {
                let mv = Move::parse(token).map_err(|source| AlgorithmError::InvalidMove {
                    token: raw.to_owned(),
                    source,
                })?;
                algorithm.moves.push(mv);
            }
            for _ in 0..trailing {
                algorithm.triggers.push(algorithm.moves.len());
            }
        }
        Ok(algorithm)
    }

    /// Render the algorithm, space-separated, in a `size` context,
    /// re-inserting trigger parentheses.
    #[must_use]
    pub fn notation(&self, size: usize) -> String {
        let mut triggers = self.triggers.clone();
        triggers.sort_unstable();

        let mut tokens: Vec<String> = Vec::with_capacity(self.moves.len());
        let mut next = triggers.iter().copied().peekable();
        let mut open = false;

        for (i, mv) in self.moves.iter().enumerate() {
            let mut token = String::new();
            while next.peek() == Some(&i) {
                next.next();
                if open {
                    match tokens.last_mut() {
                        Some(prev) => prev.push(')'),
                        None => token.push(')'),
                    }
                } else {
                    token.push('(');
                }
                open = !open;
            }
            token.push_str(&mv.notation(size));
            tokens.push(token);
        }

        // Dangling triggers at the very end still toggle a mark.
        for _ in next {
            if open {
                match tokens.last_mut() {
                    Some(prev) => prev.push(')'),
                    None => tokens.push(")".to_owned()),
                }
            } else {
                tokens.push("(".to_owned());
            }
            open = !open;
        }

        tokens.join(" ")
    }
}

/// Equality considers the move sequence only; triggers are cosmetic.
impl PartialEq for Algorithm {
    fn eq(&self, other: &Self) -> bool {
        self.moves == other.moves
    }
}

impl Eq for Algorithm {}

/// Hashing matches equality: moves only.
impl Hash for Algorithm {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.moves.hash(state);
    }
}

impl FromIterator<Move> for Algorithm {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        Algorithm::new(iter.into_iter().collect())
    }
}

impl FromStr for Algorithm {
    type Err = AlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::parse(s)
    }
}

impl fmt::Display for Algorithm {
    /// Renders with a 3x3 size context; use [`Algorithm::notation`] to pick
    /// the context explicitly.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.notation(3))
    }
}
