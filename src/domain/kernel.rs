//! Generation kernel.
//!
//! Every cell's next state is a function of the previous generation only, so
//! the kernel reads from a frozen source grid and writes into a separate
//! destination of the same shape. The caller swaps the two afterwards.

use rayon::prelude::*;

use super::{Cell, Grid, Rule};

/// Compute one row of the next generation into `out`
#[inline]
fn evolve_row(src: &Grid, rule: &Rule, y: usize, out: &mut [Cell]) {
    let width = src.dimensions().0;
    let row = &src.cells()[y * width..(y + 1) * width];
    for (x, (next, &current)) in out.iter_mut().zip(row).enumerate() {
        *next = rule.evolve(current, src.count_live_neighbors(x, y));
    }
}

/// Serial evolution: writes the generation after `src` into `dst`
pub fn evolve_into(src: &Grid, dst: &mut Grid, rule: &Rule) {
    debug_assert_eq!(src.dimensions(), dst.dimensions());
    let width = src.dimensions().0;
    if width == 0 {
        return;
    }

    dst.cells_mut()
        .chunks_mut(width)
        .enumerate()
        .for_each(|(y, out)| evolve_row(src, rule, y, out));
}

/// Parallel evolution using rayon, one task per row.
/// Each task owns a disjoint row slice of `dst`, so no locking is needed.
pub fn evolve_into_parallel(src: &Grid, dst: &mut Grid, rule: &Rule) {
    debug_assert_eq!(src.dimensions(), dst.dimensions());
    let width = src.dimensions().0;
    if width == 0 {
        return;
    }

    dst.cells_mut()
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, out)| evolve_row(src, rule, y, out));
}

/// Pure functional evolution - returns a freshly allocated next generation
pub fn evolve(src: &Grid, rule: &Rule) -> Grid {
    let (width, height) = src.dimensions();
    let mut next = Grid::new(width, height);
    evolve_into(src, &mut next, rule);
    next
}
