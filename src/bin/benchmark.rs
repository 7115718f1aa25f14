//! Performance benchmark comparing serial and parallel generation stepping

use std::time::Instant;

use life::{Algorithm, DeathPolicy, Grid};
use rand::{rngs::StdRng, SeedableRng};

fn benchmark(algorithm: Algorithm, policy: DeathPolicy, size: usize, iterations: u32) -> f64 {
    let mut rng = StdRng::seed_from_u64(size as u64);
    let mut grid = Grid::random(size, 0.3, &mut rng);

    let start = Instant::now();
    for _ in 0..iterations {
        grid = algorithm.step(&grid, policy);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Game of Life Performance Benchmark ===\n");

    let sizes = [40, 100, 250, 500, 1000, 2000];
    let iterations = 20;

    println!(
        "{:>12} {:>10} {:>12} {:>12} {:>10}",
        "Size", "Death", "Serial", "Parallel", "Speedup"
    );
    println!("{:-<60}", "");

    for size in sizes {
        for policy in [DeathPolicy::Instant, DeathPolicy::Fading] {
            let serial_ms = benchmark(Algorithm::Serial, policy, size, iterations);
            let parallel_ms = benchmark(Algorithm::Parallel, policy, size, iterations);

            println!(
                "{:>12} {:>10} {:>12.3} {:>12.3} {:>9.1}x",
                format!("{}x{}", size, size),
                policy.name(),
                serial_ms,
                parallel_ms,
                serial_ms / parallel_ms
            );
        }
    }

    println!("\n=== Throughput at 2000x2000 ===\n");

    let cells = 2000 * 2000;
    let parallel_ms = benchmark(Algorithm::Parallel, DeathPolicy::Instant, 2000, iterations);
    println!(
        "Parallel: {:.2} ms/gen, {:.1}M cells/sec",
        parallel_ms,
        (cells as f64) / (parallel_ms / 1000.0) / 1_000_000.0
    );
}
