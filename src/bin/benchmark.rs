//! Performance benchmark for both engines

use std::time::Instant;

use pocket_games::config::{GRID_SIZES, MAX_DISKS, RANDOM_DENSITY};
use pocket_games::domain::solver::optimal_moves;
use pocket_games::{Algorithm, HanoiGame, LifeGrid, RodId, presets};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn benchmark_life(rows: usize, columns: usize, algorithm: Algorithm, iterations: u32) -> f64 {
    let Ok(mut grid) = LifeGrid::new(rows, columns) else {
        return 0.0;
    };
    grid.randomize_with(&mut StdRng::seed_from_u64((rows * columns) as u64), RANDOM_DENSITY);

    let start = Instant::now();
    for _ in 0..iterations {
        algorithm.step(&mut grid);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

/// Average time to play a full optimal solve through touches, in µs
fn benchmark_hanoi(disks: u8, rounds: u32) -> f64 {
    let Ok(mut game) = HanoiGame::new(disks) else {
        return 0.0;
    };
    let moves = optimal_moves(disks, RodId::Left, RodId::Right);

    let start = Instant::now();
    for _ in 0..rounds {
        for &(from, to) in &moves {
            game.touch_rod(from);
            game.touch_rod(to);
        }
        if game.start_game(disks).is_err() {
            return 0.0;
        }
    }
    start.elapsed().as_secs_f64() * 1_000_000.0 / rounds as f64
}

/// Population of each preset after `generations` steps on a roomy board
fn pattern_populations(generations: u32) {
    println!("{:>10} {:>8} {:>8}  {}", "Pattern", "Start", "End", "Description");
    println!("{:-<60}", "");

    for pattern in presets::all_patterns() {
        let Ok(mut grid) = LifeGrid::new(64, 64) else {
            return;
        };
        pattern.place_on(&mut grid, 20, 40);
        let start = grid.population();
        for _ in 0..generations {
            grid.advance_generation();
        }
        println!(
            "{:>10} {:>8} {:>8}  {}",
            pattern.name,
            start,
            grid.population(),
            pattern.description
        );
    }
}

fn main() {
    println!("=== Game of Life Generation Benchmark ===\n");

    for algorithm in Algorithm::all() {
        println!("{:<16} {}", algorithm.name(), algorithm.description());
    }
    println!();

    let iterations = 20;
    let algorithms = Algorithm::all();

    print!("{:>10}", "Size");
    for algorithm in &algorithms {
        print!(" {:>16}", format!("{} ms", algorithm.name()));
    }
    println!();
    println!("{:-<1$}", "", 10 + 17 * algorithms.len());

    for &(rows, columns, label) in GRID_SIZES {
        print!("{:>10}", label);
        for &algorithm in &algorithms {
            print!(" {:>16.2}", benchmark_life(rows, columns, algorithm, iterations));
        }
        println!();
    }

    println!("\n=== Preset Patterns after 40 generations ===\n");
    pattern_populations(40);

    println!("\n=== Towers of Hanoi Solve Benchmark ===\n");
    println!("{:>6} {:>8} {:>14}", "Disks", "Moves", "µs/solve");
    println!("{:-<30}", "");

    for disks in 1..=MAX_DISKS {
        let us = benchmark_hanoi(disks, 10_000);
        println!("{:>6} {:>8} {:>14.3}", disks, (1u32 << disks) - 1, us);
    }
}
