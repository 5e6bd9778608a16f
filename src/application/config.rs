use crate::domain::{Algorithm, Rule, brush::DEFAULT_BRUSH_SIZE, default_rule};

/// Probability that a cell starts alive: the mass of a standard normal
/// above 1.9, which is how the classic seeding thresholded its noise.
pub const DEFAULT_DENSITY: f64 = 0.0287;

/// Construction parameters for an `AutomatonState`
#[derive(Clone, Debug, PartialEq)]
pub struct AutomatonConfig {
    pub width: usize,
    pub height: usize,
    /// Neighbour counts that keep a live cell alive, e.g. `"23"`
    pub survive: String,
    /// Neighbour counts that bring a dead cell to life, e.g. `"3"`
    pub birth: String,
    pub brush_size: usize,
    pub initial_density: f64,
    /// Fixed RNG seed; `None` draws one from the thread RNG
    pub seed: Option<u64>,
    pub algorithm: Algorithm,
}

impl AutomatonConfig {
    /// Config with the given size and every other field defaulted
    pub fn with_size(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Set the rule digits (builder pattern)
    pub fn rule(mut self, survive: &str, birth: &str) -> Self {
        self.survive = survive.to_owned();
        self.birth = birth.to_owned();
        self
    }

    /// Take the rule digits from an already-built rule (builder pattern)
    pub fn with_rule(self, rule: &Rule) -> Self {
        self.rule(&rule.survive_digits(), &rule.birth_digits())
    }

    /// Set the RNG seed (builder pattern)
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the initial live-cell probability (builder pattern)
    pub fn density(mut self, density: f64) -> Self {
        self.initial_density = density;
        self
    }
}

impl Default for AutomatonConfig {
    fn default() -> Self {
        let rule = default_rule();
        Self {
            width: 800,
            height: 600,
            survive: rule.survive_digits(),
            birth: rule.birth_digits(),
            brush_size: DEFAULT_BRUSH_SIZE,
            initial_density: DEFAULT_DENSITY,
            seed: None,
            algorithm: Algorithm::default(),
        }
    }
}
