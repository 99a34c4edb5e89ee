//! Compare serial and rayon generation advance across board sizes

use life_board::domain::{Grid, next_generation, next_generation_parallel};
use rand::{SeedableRng, rngs::StdRng};
use std::time::Instant;

fn seeded_grid(size: usize) -> Grid {
    let mut rng = StdRng::seed_from_u64(size as u64);
    let mut grid = Grid::new(size);
    if let Err(err) = grid.randomize(0.3, &mut rng) {
        eprintln!("randomize failed: {err}");
    }
    grid
}

fn time_per_generation(mut grid: Grid, iterations: u32, evolve: fn(&Grid) -> Grid) -> f64 {
    let start = Instant::now();
    for _ in 0..iterations {
        grid = evolve(&grid);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Bounded Life Benchmark ===\n");

    let sizes = [44, 100, 256, 500, 1000, 2000];
    let iterations = 20;

    println!("{:>8} {:>12} {:>12} {:>10}", "Size", "Serial ms", "Parallel ms", "Speedup");
    println!("{:-<46}", "");

    for size in sizes {
        let grid = seeded_grid(size);
        let serial = time_per_generation(grid.clone(), iterations, next_generation);
        let parallel = time_per_generation(grid, iterations, next_generation_parallel);
        println!(
            "{:>8} {:>12.3} {:>12.3} {:>9.1}x",
            size,
            serial,
            parallel,
            serial / parallel.max(f64::EPSILON)
        );
    }
}
