//! Error types for the automaton engine.

use thiserror::Error;

/// Errors raised while configuring, editing or seeding an automaton.
///
/// Every variant is recoverable from the caller's point of view: the grid is
/// left in its last valid state whenever one of these is returned.
#[derive(Debug, Error)]
pub enum AutomatonError {
    /// A rule string contained something other than the digits 0-8.
    #[error("invalid rule digit {digit:?}: expected a neighbour count in 0..=8")]
    InvalidRuleDigit {
        /// The offending character.
        digit: char,
    },

    /// No named rule matches.
    #[error("unknown rule preset {name:?}")]
    UnknownRule {
        /// The name that was looked up.
        name: String,
    },

    /// The seed image could not be opened or decoded.
    #[error("failed to load seed image: {0}")]
    ImageLoad(#[from] image::ImageError),

    /// Resize and padding did not converge to the grid shape.
    #[error("seed image shape {actual:?} does not match grid shape {expected:?}")]
    InvariantViolation {
        /// Grid shape `(width, height)`.
        expected: (usize, usize),
        /// Shape produced by the loader.
        actual: (usize, usize),
    },

    /// A replacement grid has a different shape than the current one.
    #[error("grid shape {actual:?} does not match automaton shape {expected:?}")]
    DimensionMismatch {
        /// Automaton shape `(width, height)`.
        expected: (usize, usize),
        /// Shape of the rejected grid.
        actual: (usize, usize),
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AutomatonError>;
