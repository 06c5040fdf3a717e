//! Lumen CLI - self-test, then search for light-switching programs.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]

use clap::Parser;
use lumen::{execute, search, BitRng, Program, SearchConfig};

/// Known-good programs with their expected (lights lit, max height).
const SELF_TEST: [(&str, u8, u8); 2] = [
    ("1L^LFR21R2__FFF^L^^_^^FF*L^L", 2, 4),
    ("**1**11_112*_*L_2^_2F_RF_^FL", 2, 4),
];

/// Lumen - hill-climbing search for grid-robot light programs
#[derive(Parser, Debug)]
#[command(name = "lumen")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Fresh random programs to try before the search gives up
    #[arg(default_value_t = 100_000)]
    restarts: u32,

    /// Mutation attempts per accepted program before backtracking
    #[arg(default_value_t = 10_000)]
    mutations: u32,
}

/// Decode and run the fixture programs, reporting pass or fail.
fn self_test() {
    println!("Self test:");
    for (text, lights_lit, max_height) in SELF_TEST {
        match text.parse::<Program>() {
            Ok(program) => {
                let fitness = execute(&program);
                println!("{program}");
                println!("{} {}", fitness.lights_lit(), fitness.max_height());
                if fitness.lights_lit() == lights_lit && fitness.max_height() == max_height {
                    println!("Test succeeded.");
                } else {
                    println!("Test failed.");
                }
            }
            Err(error) => {
                eprintln!("Error: {error}");
                println!("Test failed.");
            }
        }
    }
}

fn main() {
    let args = Args::parse();

    self_test();

    let config = SearchConfig {
        restart_budget: args.restarts,
        mutation_budget: args.mutations,
    };
    let mut rng = BitRng::new();
    let stats = search(config, &mut rng, |program, _fitness| {
        println!("{program}");
    });

    eprintln!(
        "Search finished: {} candidates evaluated, {} accepted over {} restarts, \
         deepest stack {}, best fitness {} {}",
        stats.evaluated,
        stats.accepted,
        stats.restarts,
        stats.deepest,
        stats.best.lights_lit(),
        stats.best.max_height()
    );
}
