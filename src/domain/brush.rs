//! Square brush for painting and erasing cells.
//!
//! Unlike the kernel, edits never wrap: the brush square is clamped to the
//! grid, so a brush near an edge simply covers fewer cells.

use std::ops::Range;

use rand::Rng;

use super::{Cell, Grid};

/// Brush size used when none is configured
pub const DEFAULT_BRUSH_SIZE: usize = 3;

/// A square brush of side `2·size − 1` centred on its target
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Brush {
    pub size: usize,
}

impl Brush {
    pub const fn new(size: usize) -> Self {
        Self { size }
    }

    /// Cells covered by the brush at `(x, y)` on a `width × height` grid
    pub fn region(&self, x: isize, y: isize, width: usize, height: usize) -> (Range<usize>, Range<usize>) {
        (self.span(x, width), self.span(y, height))
    }

    /// `[v − size + 1, v + size)` clamped to `[0, dim]`
    fn span(&self, v: isize, dim: usize) -> Range<usize> {
        let clamp = |value: i128| value.clamp(0, dim as i128) as usize;
        let (v, size) = (v as i128, self.size as i128);
        let start = clamp(v - size + 1);
        let end = clamp(v + size);
        start..end.max(start)
    }

    /// Set every covered cell alive
    pub fn paint(&self, grid: &mut Grid, x: isize, y: isize) {
        self.fill(grid, x, y, || Cell::Alive);
    }

    /// Set every covered cell to an independent fair coin flip from `rng`
    pub fn paint_random<R: Rng + ?Sized>(&self, grid: &mut Grid, x: isize, y: isize, rng: &mut R) {
        self.fill(grid, x, y, || Cell::from(rng.random_bool(0.5)));
    }

    /// Set every covered cell dead
    pub fn erase(&self, grid: &mut Grid, x: isize, y: isize) {
        self.fill(grid, x, y, || Cell::Dead);
    }

    fn fill(&self, grid: &mut Grid, x: isize, y: isize, fill: impl FnMut() -> Cell) {
        let (width, height) = grid.dimensions();
        let (xs, ys) = self.region(x, y, width, height);
        grid.fill_region(xs, ys, fill);
    }
}

impl Default for Brush {
    fn default() -> Self {
        Self::new(DEFAULT_BRUSH_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_region_interior() {
        let brush = Brush::new(3);
        assert_eq!(brush.region(5, 5, 20, 20), (3..8, 3..8));
    }

    #[test]
    fn test_region_clamps_at_origin() {
        let brush = Brush::new(3);
        assert_eq!(brush.region(0, 0, 10, 10), (0..3, 0..3));
    }

    #[test]
    fn test_region_clamps_at_far_edge() {
        let brush = Brush::new(3);
        assert_eq!(brush.region(9, 9, 10, 10), (7..10, 7..10));
        // Entirely off the grid covers nothing
        let (xs, ys) = brush.region(-10, 50, 10, 10);
        assert!(xs.is_empty());
        assert!(ys.is_empty());
    }

    #[test]
    fn test_paint_at_origin_stays_in_bounds() {
        let mut grid = Grid::new(10, 10);
        Brush::new(3).paint(&mut grid, 0, 0);
        assert_eq!(grid.count_alive(), 9);
        for (x, y, cell) in grid.iter_cells() {
            assert_eq!(cell.is_alive(), x < 3 && y < 3, "unexpected state at ({x}, {y})");
        }
    }

    #[test]
    fn test_paint_is_idempotent() {
        let brush = Brush::default();
        let mut once = Grid::new(12, 12);
        brush.paint(&mut once, 6, 4);
        let mut twice = once.clone();
        brush.paint(&mut twice, 6, 4);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_erase_then_paint_fills_region() {
        let brush = Brush::new(2);
        let mut rng = StdRng::seed_from_u64(3);
        let mut grid = Grid::new(10, 10);
        grid.randomize(&mut rng, 0.5);

        brush.erase(&mut grid, 4, 4);
        let (xs, ys) = brush.region(4, 4, 10, 10);
        for y in ys.clone() {
            for x in xs.clone() {
                assert_eq!(grid.get(x, y), Some(Cell::Dead));
            }
        }

        brush.paint(&mut grid, 4, 4);
        for y in ys {
            for x in xs.clone() {
                assert_eq!(grid.get(x, y), Some(Cell::Alive));
            }
        }
    }

    #[test]
    fn test_erase_leaves_outside_untouched() {
        let mut grid = Grid::new(10, 10);
        grid.fill_region(0..10, 0..10, || Cell::Alive);
        Brush::new(1).erase(&mut grid, 5, 5);
        assert_eq!(grid.count_alive(), 99);
        assert_eq!(grid.get(5, 5), Some(Cell::Dead));
    }

    #[test]
    fn test_paint_random_is_deterministic_under_seed() {
        let brush = Brush::new(4);
        let mut a = Grid::new(16, 16);
        let mut b = Grid::new(16, 16);
        brush.paint_random(&mut a, 8, 8, &mut StdRng::seed_from_u64(11));
        brush.paint_random(&mut b, 8, 8, &mut StdRng::seed_from_u64(11));
        assert_eq!(a, b);

        // Nothing outside the 7x7 square is touched
        let (xs, ys) = brush.region(8, 8, 16, 16);
        for (x, y, cell) in a.iter_cells() {
            if !xs.contains(&x) || !ys.contains(&y) {
                assert_eq!(cell, Cell::Dead);
            }
        }
    }

    #[test]
    fn test_zero_size_brush_is_noop() {
        let mut grid = Grid::new(5, 5);
        Brush::new(0).paint(&mut grid, 2, 2);
        assert_eq!(grid.count_alive(), 0);
    }
}
