//! Warren Quickstart: build a solvable maze and print its solution.
//!
//! Demonstrates:
//!   1. Configuring a build with `BuildConfig`
//!   2. Running the bounded generate-and-solve loop
//!   3. Overlaying the path with `Maze::annotated`
//!   4. Reading the build metrics
//!
//! Run with:
//!   RUST_LOG=debug cargo run --example quickstart -- [rows] [cols] [seed]

use std::env;
use std::process;

use warren_engine::{BuildConfig, MazeBuilder};

fn arg_or<T: std::str::FromStr>(args: &[String], index: usize, default: T) -> T {
    args.get(index)
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let config = BuildConfig {
        rows: arg_or(&args, 1, 15),
        cols: arg_or(&args, 2, 31),
        seed: arg_or(&args, 3, 0),
        ..BuildConfig::default()
    };

    let builder = match MazeBuilder::new(config) {
        Ok(builder) => builder,
        Err(e) => {
            eprintln!("invalid config: {e}");
            process::exit(2);
        }
    };

    let built = match builder.build() {
        Ok(built) => built,
        Err(e) => {
            eprintln!("build failed: {e}");
            process::exit(1);
        }
    };

    let [source, target] = built.maze.exits();
    println!("{}", built.maze.annotated(&built.path));
    println!();
    println!("exits:     {source} -> {target}");
    println!("path:      {} cells", built.path.len());
    println!("attempts:  {}", built.metrics.attempts);
    println!("rounds:    {}", built.metrics.wavefront_rounds);
    println!("fallback:  {}", built.metrics.used_fallback);
    println!("elapsed:   {} us", built.metrics.total_us);
}
