mod automaton;
mod config;
mod render;

pub use automaton::AutomatonState;
pub use config::{AutomatonConfig, DEFAULT_DENSITY};
pub use render::{RenderBuffer, CHANNELS};
