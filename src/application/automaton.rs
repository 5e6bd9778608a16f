use std::path::Path;
use std::time::{Duration, Instant};

use rand::{SeedableRng, rngs::StdRng};
use tracing::{debug, info, trace};

use super::{AutomatonConfig, RenderBuffer};
use crate::domain::{Algorithm, Brush, Grid, Rule, kernel, loader};
use crate::error::{AutomatonError, Result};

/// AutomatonState owns the lattice and everything needed to advance it.
/// Edits and steps take `&mut self`, so they can never interleave.
pub struct AutomatonState {
    grid: Grid,
    /// Scratch buffer the kernel writes into; swapped with `grid` each step
    back: Grid,
    rule: Rule,
    brush: Brush,
    algorithm: Algorithm,
    rng: StdRng,
    generation: u64,
    last_step_time: Duration,
}

impl AutomatonState {
    /// Create a randomly seeded automaton from `config`
    pub fn new(config: &AutomatonConfig) -> Result<Self> {
        let rule = Rule::from_digits(&config.survive, &config.birth)?;
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };

        let mut grid = Grid::new(config.width, config.height);
        grid.randomize(&mut rng, config.initial_density);
        info!(
            width = config.width,
            height = config.height,
            %rule,
            population = grid.count_alive(),
            "automaton created"
        );

        Ok(Self {
            back: Grid::new(config.width, config.height),
            grid,
            rule,
            brush: Brush::new(config.brush_size),
            algorithm: config.algorithm,
            rng,
            generation: 0,
            last_step_time: Duration::ZERO,
        })
    }

    /// Advance exactly one generation
    pub fn step(&mut self) {
        let start = Instant::now();
        match self.algorithm {
            Algorithm::Serial => kernel::evolve_into(&self.grid, &mut self.back, &self.rule),
            Algorithm::Parallel => kernel::evolve_into_parallel(&self.grid, &mut self.back, &self.rule),
        }
        std::mem::swap(&mut self.grid, &mut self.back);

        self.last_step_time = start.elapsed();
        self.generation += 1;
        trace!(generation = self.generation, elapsed = ?self.last_step_time, "generation advanced");
    }

    /// Advance `n` generations
    pub fn step_n(&mut self, n: u64) {
        for _ in 0..n {
            self.step();
        }
    }

    /// Project the current grid into a fresh `[0, 1]` buffer
    pub fn render_buffer(&self) -> RenderBuffer {
        RenderBuffer::from_grid(&self.grid)
    }

    /// Current grid scaled to 0-255, three channels per cell
    pub fn render_bytes(&self) -> Vec<u8> {
        self.render_buffer().to_bytes()
    }

    /// Replace the whole grid. The new grid must have the same shape.
    pub fn replace_state(&mut self, grid: Grid) -> Result<()> {
        if grid.dimensions() != self.dimensions() {
            return Err(AutomatonError::DimensionMismatch {
                expected: self.dimensions(),
                actual: grid.dimensions(),
            });
        }
        self.grid = grid;
        self.generation = 0;
        debug!(population = self.grid.count_alive(), "state replaced");
        Ok(())
    }

    /// Replace the grid with one derived from the image at `path`.
    /// On error the current grid is kept.
    pub fn load_image(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let (width, height) = self.dimensions();
        let grid = loader::load_seed(path, width, height)?;
        self.replace_state(grid)
    }

    /// Paint live cells under the brush at `(x, y)`
    pub fn paint(&mut self, x: isize, y: isize) {
        self.brush.paint(&mut self.grid, x, y);
    }

    /// Paint random cells under the brush at `(x, y)` using the state's RNG
    pub fn paint_random(&mut self, x: isize, y: isize) {
        self.brush.paint_random(&mut self.grid, x, y, &mut self.rng);
    }

    /// Kill cells under the brush at `(x, y)`
    pub fn erase(&mut self, x: isize, y: isize) {
        self.brush.erase(&mut self.grid, x, y);
    }

    pub fn set_brush_size(&mut self, size: usize) {
        self.brush = Brush::new(size);
    }

    pub fn brush(&self) -> Brush {
        self.brush
    }

    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        self.algorithm = algorithm;
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn rule(&self) -> &Rule {
        &self.rule
    }

    pub fn dimensions(&self) -> (usize, usize) {
        self.grid.dimensions()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Count of live cells in the current grid
    pub fn population(&self) -> usize {
        self.grid.count_alive()
    }

    /// Wall time spent in the most recent `step`
    pub fn last_step_time(&self) -> Duration {
        self.last_step_time
    }
}
