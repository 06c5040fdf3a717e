//! Stack-based randomized hill-climbing over candidate programs.
//!
//! The driver keeps a stack of strictly improving checkpoints. The top
//! checkpoint spends a bounded mutation budget looking for a better
//! neighbor; success pushes the neighbor as a new checkpoint, exhaustion
//! pops the checkpoint and hands the uncovered ancestor a fresh budget,
//! so re-exploration around an old checkpoint can continue indefinitely.
//! Whenever the stack is empty a unit of restart budget buys a fresh
//! random program, and the whole search ends when that budget runs out.

use crate::mutation::mutate_valid;
use crate::program::Program;
use crate::rng::BitRng;
use crate::sim::{execute, Fitness};

/// Budgets for one search run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Fresh random programs to try before the search gives up.
    pub restart_budget: u32,
    /// Mutation attempts tolerated per checkpoint before backtracking.
    pub mutation_budget: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            restart_budget: 100_000,
            mutation_budget: 10_000,
        }
    }
}

/// Summary of a finished search run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Candidates handed to the simulator.
    pub evaluated: u64,
    /// Candidates that strictly improved on their checkpoint.
    pub accepted: u64,
    /// Fresh random programs generated.
    pub restarts: u32,
    /// Deepest checkpoint stack observed.
    pub deepest: usize,
    /// Best fitness seen across the whole run.
    pub best: Fitness,
}

/// One checkpoint: an accepted program, its fitness, and how much of
/// its mutation budget is spent.
#[derive(Debug, Clone, Copy)]
struct SearchNode {
    program: Program,
    fitness: Fitness,
    attempts: u32,
}

/// Run the hill-climb to budget exhaustion.
///
/// A candidate is accepted only when its fitness strictly exceeds the
/// current checkpoint's (zero at the search root). `on_solution` fires
/// for every accepted candidate that lights both goals; the search
/// keeps optimizing height afterwards, so the callback can fire many
/// times with increasing fitness.
pub fn search<F>(config: SearchConfig, rng: &mut BitRng, mut on_solution: F) -> SearchStats
where
    F: FnMut(&Program, Fitness),
{
    let mut stack: Vec<SearchNode> = Vec::new();
    let mut restarts_left = config.restart_budget;
    let mut stats = SearchStats::default();
    loop {
        let (candidate, threshold) = if let Some(checkpoint) = stack.last_mut() {
            if checkpoint.attempts < config.mutation_budget {
                let mut candidate = checkpoint.program;
                mutate_valid(&mut candidate, rng);
                checkpoint.attempts += 1;
                (candidate, checkpoint.fitness)
            } else {
                // Budget spent: abandon this checkpoint and let the
                // ancestor start over with a full budget.
                stack.pop();
                if let Some(ancestor) = stack.last_mut() {
                    ancestor.attempts = 0;
                }
                continue;
            }
        } else {
            restarts_left = restarts_left.saturating_sub(1);
            if restarts_left == 0 {
                break;
            }
            stats.restarts += 1;
            (Program::random(rng), Fitness::ZERO)
        };

        let fitness = execute(&candidate);
        stats.evaluated += 1;
        if fitness > threshold {
            if fitness.is_solution() {
                on_solution(&candidate, fitness);
            }
            stats.accepted += 1;
            stats.best = stats.best.max(fitness);
            stack.push(SearchNode {
                program: candidate,
                fitness,
                attempts: 0,
            });
            stats.deepest = stats.deepest.max(stack.len());
        }
    }
    stats
}
