//! Performance benchmark comparing the serial and parallel kernels

use std::time::Instant;

use lattice_automaton::domain::{Grid, conway, kernel};
use rand::{SeedableRng, rngs::StdRng};

type Kernel = fn(&Grid, &mut Grid, &lattice_automaton::Rule);

fn benchmark_kernel(size: usize, iterations: u32, evolve: Kernel) -> f64 {
    let rule = conway();
    let mut grid = Grid::new(size, size);
    grid.randomize(&mut StdRng::seed_from_u64(0), 0.3);
    let mut back = Grid::new(size, size);

    let start = Instant::now();
    for _ in 0..iterations {
        evolve(&grid, &mut back, &rule);
        std::mem::swap(&mut grid, &mut back);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Lattice Automaton Kernel Benchmark ===\n");

    let sizes = [100, 500, 1000, 2000, 5000];
    let iterations = 20;

    println!("{:>10} {:>12} {:>12} {:>10}", "Size", "Serial", "Parallel", "Speedup");
    println!("{:-<48}", "");

    for size in sizes {
        // Serial gets slow on huge grids, skip it there
        let serial_ms = if size <= 2000 {
            benchmark_kernel(size, iterations, kernel::evolve_into)
        } else {
            0.0
        };
        let parallel_ms = benchmark_kernel(size, iterations, kernel::evolve_into_parallel);

        let serial_str = if serial_ms > 0.0 { format!("{:>12.2}", serial_ms) } else { format!("{:>12}", "-") };
        let speedup_str = if serial_ms > 0.0 {
            format!("{:>9.1}x", serial_ms / parallel_ms)
        } else {
            format!("{:>10}", "-")
        };

        println!(
            "{:>10} {} {:>12.2} {}",
            format!("{}x{}", size, size),
            serial_str,
            parallel_ms,
            speedup_str
        );
    }

    let size = 2000;
    let cells = size * size;
    let parallel_ms = benchmark_kernel(size, iterations, kernel::evolve_into_parallel);
    println!("\n=== Throughput at {size}x{size} ===\n");
    println!(
        "Parallel: {:.2} ms/gen, {:.1}M cells/sec",
        parallel_ms,
        (cells as f64) / (parallel_ms / 1000.0) / 1_000_000.0
    );
}
