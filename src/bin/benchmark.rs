//! Throughput benchmark for the generation engine, serial vs parallel

use std::time::Instant;

use rand::SeedableRng;
use rand::rngs::StdRng;

use dual_life::domain::{Grid, RuleSet, TieMode, engine};

fn soup(size: usize, seed: u64) -> Grid {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut grid = Grid::new(size).expect("benchmark sizes are valid");
    grid.seed_both(&mut rng);
    grid
}

fn bench_serial(size: usize, iterations: u32) -> f64 {
    let rules = RuleSet::classic();
    let mut grid = soup(size, 42);
    let mut scratch = Grid::new(size).expect("benchmark sizes are valid");
    let mut rng = StdRng::seed_from_u64(7);

    let start = Instant::now();
    for _ in 0..iterations {
        engine::step_into(&grid, &mut scratch, &rules, TieMode::FavorA, true, &mut rng);
        std::mem::swap(&mut grid, &mut scratch);
    }
    start.elapsed().as_secs_f64() * 1000.0 / f64::from(iterations)
}

fn bench_parallel(size: usize, iterations: u32) -> f64 {
    let rules = RuleSet::classic();
    let mut grid = soup(size, 42);
    let mut scratch = Grid::new(size).expect("benchmark sizes are valid");

    let start = Instant::now();
    for _ in 0..iterations {
        engine::step_parallel_into(&grid, &mut scratch, &rules, TieMode::FavorA, true);
        std::mem::swap(&mut grid, &mut scratch);
    }
    start.elapsed().as_secs_f64() * 1000.0 / f64::from(iterations)
}

fn main() {
    println!("=== Dual Life Engine Benchmark ===\n");

    let sizes = [50, 100, 200, 400, 800];
    let iterations = 50;

    println!(
        "{:>10} {:>12} {:>12} {:>10}",
        "Size", "Serial", "Parallel", "Speedup"
    );
    println!("{:-<48}", "");

    for size in sizes {
        let serial_ms = bench_serial(size, iterations);
        let parallel_ms = bench_parallel(size, iterations);

        println!(
            "{:>10} {:>12.3} {:>12.3} {:>9.1}x",
            format!("{size}x{size}"),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }

    println!("\n=== Throughput at 800x800 ===\n");
    let cells = 800 * 800;
    let parallel_ms = bench_parallel(800, iterations);
    println!(
        "Parallel: {:.2} ms/gen, {:.1}M cells/sec",
        parallel_ms,
        cells as f64 / (parallel_ms / 1000.0) / 1_000_000.0
    );
}
