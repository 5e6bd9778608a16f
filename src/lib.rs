// Domain layer - Cells, rules, the grid and the operations on it
pub mod domain;

// Application layer - The owning automaton state and its projections
pub mod application;

pub mod error;

// Re-exports for convenience
pub use domain::{Algorithm, Brush, Cell, Grid, Rule, encode_rule};
pub use application::{AutomatonConfig, AutomatonState, RenderBuffer};
pub use error::{AutomatonError, Result};
