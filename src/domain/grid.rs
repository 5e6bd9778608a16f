use std::ops::Range;

use rand::Rng;

use super::Cell;

/// Grid holds the W×H lattice in row-major order.
/// Topology is toroidal for neighbour counting; plain accessors are bounded.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Dead; width * height],
        }
    }

    /// Build a grid by evaluating `f(x, y)` for every cell
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> Cell) -> Self {
        let cells = (0..height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .map(|(x, y)| f(x, y))
            .collect();
        Self { width, height, cells }
    }

    /// Get grid dimensions as `(width, height)`
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        (x < self.width && y < self.height)
            .then(|| self.cells[self.get_index(x, y)])
    }

    /// Set cell at position; out-of-range writes are ignored
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        if x < self.width && y < self.height {
            let idx = self.get_index(x, y);
            self.cells[idx] = cell;
        }
    }

    /// Count live neighbours using toroidal wrapping.
    /// `(x, y)` must lie inside the grid; the kernel only visits such cells.
    pub(crate) fn count_live_neighbors(&self, x: usize, y: usize) -> u8 {
        debug_assert!(x < self.width && y < self.height, "({x}, {y}) outside grid");
        let (w, h) = (self.width, self.height);
        // Adding `dim - 1` is a step of -1 modulo `dim`
        let xs = [(x + w - 1) % w, x, (x + 1) % w];
        let ys = [(y + h - 1) % h, y, (y + 1) % h];

        let mut count = 0u8;
        for (j, &ny) in ys.iter().enumerate() {
            let row = &self.cells[ny * w..(ny + 1) * w];
            for (i, &nx) in xs.iter().enumerate() {
                if (i, j) != (1, 1) {
                    count += row[nx].value();
                }
            }
        }
        count
    }

    /// Overwrite every cell in `xs × ys` with values produced by `fill`.
    /// Ranges must already be clamped to the grid.
    pub fn fill_region(&mut self, xs: Range<usize>, ys: Range<usize>, mut fill: impl FnMut() -> Cell) {
        debug_assert!(xs.end <= self.width && ys.end <= self.height);
        for y in ys {
            let row = y * self.width;
            for x in xs.clone() {
                self.cells[row + x] = fill();
            }
        }
    }

    /// Kill every cell
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Dead);
    }

    /// Seed every cell independently alive with probability `density`
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R, density: f64) {
        let density = density.clamp(0.0, 1.0);
        self.cells
            .iter_mut()
            .for_each(|cell| *cell = Cell::from(rng.random_bool(density)));
    }

    /// Count total alive cells
    pub fn count_alive(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx % self.width, idx / self.width, cell))
    }

    /// Row-major cell storage
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }
}
