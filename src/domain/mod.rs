mod cell;
mod grid;
mod rules;
mod algorithm;
pub mod brush;
pub mod kernel;
pub mod loader;

pub use cell::Cell;
pub use grid::Grid;
pub use rules::{
    Rule, MAX_NEIGHBORS, encode_rule, conway, high_life, seeds, day_and_night, all_rules,
    rule_by_name, default_rule,
};
pub use brush::Brush;
pub use algorithm::Algorithm;
